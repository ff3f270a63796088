//! Component contract
//!
//! A component is one named contribution a provider hands to the host.
//! Concrete kinds embed a [`ComponentBase`] and implement [`Component`];
//! cloning, downcasting and category lookup come from the blanket
//! [`ComponentObject`] impl.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity shared by every component kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentBase {
    name: String,
    description: Option<String>,
    owner: Option<String>,
}

impl ComponentBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            owner: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
    }
}

/// One contribution to a plugin.
pub trait Component: ComponentObject + fmt::Debug {
    fn base(&self) -> &ComponentBase;
    fn base_mut(&mut self) -> &mut ComponentBase;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn description(&self) -> Option<&str> {
        self.base().description()
    }

    /// Name of the plugin this component was last added to.
    fn owner(&self) -> Option<&str> {
        self.base().owner()
    }

    /// Record the providing plugin. Overwrites any earlier owner.
    fn attach(&mut self, plugin_name: &str) {
        self.base_mut().set_owner(plugin_name);
    }
}

/// Implement [`Component`] for a type holding its [`ComponentBase`] in a
/// field named `base`.
#[macro_export]
macro_rules! component {
    ($ty:ty) => {
        impl $crate::Component for $ty {
            fn base(&self) -> &$crate::ComponentBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::ComponentBase {
                &mut self.base
            }
        }
    };
}

/// Object-safe plumbing for `dyn Component`, implemented for every
/// `Component + Clone`.
pub trait ComponentObject: Any {
    fn clone_box(&self) -> Box<dyn Component>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn category(&self) -> Category;
}

impl<T> ComponentObject for T
where
    T: Component + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn category(&self) -> Category {
        Category::of::<T>()
    }
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

impl dyn Component {
    pub fn is<C: Component + 'static>(&self) -> bool {
        self.as_any().is::<C>()
    }

    pub fn downcast_ref<C: Component + 'static>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    pub fn downcast_mut<C: Component + 'static>(&mut self) -> Option<&mut C> {
        self.as_any_mut().downcast_mut::<C>()
    }
}

/// Concrete kind of a component, comparable at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    id: TypeId,
    name: &'static str,
}

impl Category {
    pub fn of<C: Component + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: std::any::type_name::<C>(),
        }
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path. Generic arguments are kept as
    /// written, e.g. `Wrapper<alloc::string::String>`.
    pub fn short_name(&self) -> &'static str {
        let head = self.name.find('<').map_or(self.name, |i| &self.name[..i]);
        let start = head.rfind("::").map_or(0, |i| i + 2);
        &self.name[start..]
    }

    pub fn matches(&self, component: &dyn Component) -> bool {
        Any::type_id(component.as_any()) == self.id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
