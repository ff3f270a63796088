//! Plugin aggregate
//!
//! A plugin maps field keys to component sets. It does no schema checks:
//! any key, any component kind and any number of components per key are
//! accepted. Conformance with the model is a separate, later concern.

use crate::component::{Category, Component};
use crate::set::ComponentSet;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tessera_core::{ConstrainedMap, CoreError, CoreResult};
use tracing::{debug, trace};

/// Field key to component set, as stored by a plugin
pub type Components = ConstrainedMap<String, ComponentSet>;

/// Borrowed view of selected fields, returned by [`Plugin::filter`]
pub type ComponentView<'a> = BTreeMap<&'a str, &'a ComponentSet>;

/// Named, versioned bundle of field-keyed components for one model `M`.
pub struct Plugin<M> {
    model: Arc<M>,
    name: String,
    version: Option<String>,
    components: Components,
}

impl<M> Plugin<M> {
    pub fn new(model: M, name: impl Into<String>) -> Self {
        Self::from_shared(Arc::new(model), name)
    }

    /// Create a plugin for a model already shared with the host.
    pub fn from_shared(model: Arc<M>, name: impl Into<String>) -> Self {
        Self {
            model,
            name: name.into(),
            version: None,
            components: Components::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builder form of [`Plugin::add`], for initial contributions.
    pub fn with_component<C: Component + 'static>(mut self, key: impl Into<String>, contrib: C) -> Self {
        self.add(key, contrib);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn shared_model(&self) -> &Arc<M> {
        &self.model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Live access to the stored mapping. Changes made here are changes to
    /// the plugin itself.
    pub fn components_mut(&mut self) -> &mut Components {
        &mut self.components
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.components.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components across all fields
    pub fn component_count(&self) -> usize {
        self.components.values().map(|set| set.len()).sum()
    }

    /// Add a component under `key`, stamping it with this plugin's name.
    pub fn add<C: Component + 'static>(&mut self, key: impl Into<String>, contrib: C) -> &mut Self {
        self.add_boxed(key, Box::new(contrib))
    }

    pub fn add_boxed(&mut self, key: impl Into<String>, mut contrib: Box<dyn Component>) -> &mut Self {
        let key = key.into();
        if !self.components.contains_key(&key) {
            trace!(plugin = %self.name, key = %key, "Creating component set");
        }
        contrib.attach(&self.name);
        debug!(
            plugin = %self.name,
            key = %key,
            component = contrib.name(),
            category = %contrib.category(),
            "Added component"
        );
        self.components
            .entry_or_insert_with(key, ComponentSet::new)
            .push(contrib);
        self
    }

    /// Remove the whole set under `key`, or only the first component named
    /// `contrib_name`. An emptied set keeps its key.
    ///
    /// # Errors
    ///
    /// [`CoreError::MissingKey`] if `key` is absent,
    /// [`CoreError::ComponentNotFound`] if no component has that name.
    pub fn remove(&mut self, key: &str, contrib_name: Option<&str>) -> CoreResult<&mut Self> {
        match contrib_name {
            None => {
                self.components.remove(key)?;
                debug!(plugin = %self.name, key, "Removed field");
            }
            Some(name) => {
                let set = self
                    .components
                    .get_mut(key)
                    .ok_or_else(|| CoreError::missing_key(key))?;
                set.remove_named(name)
                    .ok_or_else(|| CoreError::component_not_found(key, name))?;
                debug!(plugin = %self.name, key, component = name, "Removed component");
            }
        }
        Ok(self)
    }

    /// Components stored under `key`; an empty set if there are none.
    pub fn get(&self, key: &str) -> Cow<'_, ComponentSet> {
        match self.components.get(key) {
            Some(set) => Cow::Borrowed(set),
            None => Cow::Owned(ComponentSet::new()),
        }
    }

    /// Fields holding at least one component of `category`, each with its
    /// full set (other kinds included). `None` selects every field.
    pub fn filter(&self, category: Option<Category>) -> ComponentView<'_> {
        self.components
            .iter()
            .filter(|(_, set)| category.map_or(true, |c| set.contains_category(c)))
            .map(|(key, set)| (key.as_str(), set))
            .collect()
    }

    pub fn filter_by<C: Component + 'static>(&self) -> ComponentView<'_> {
        self.filter(Some(Category::of::<C>()))
    }

    /// Independent clone: every set and component is duplicated. The model
    /// is an immutable schema and stays shared.
    pub fn copy(&self) -> Self {
        debug!(plugin = %self.name, fields = self.components.len(), "Copying plugin");
        Self {
            model: Arc::clone(&self.model),
            name: self.name.clone(),
            version: self.version.clone(),
            components: self.components.clone(),
        }
    }
}

impl<M> Clone for Plugin<M> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<M: fmt::Debug> fmt::Debug for Plugin<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin")
            .field("model", &self.model)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("components", &self.components)
            .finish()
    }
}

impl<M: fmt::Debug> fmt::Display for Plugin<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plugin(name={}, version={}, model={:?})",
            self.name,
            self.version.as_deref().unwrap_or("None"),
            self.model
        )
    }
}
