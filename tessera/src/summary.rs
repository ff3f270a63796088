//! Serializable inspection report of a plugin
//!
//! Built for hosts and tooling that want to see what a provider assembled.
//! Payloads are not included, only identity and ownership.

use serde::Serialize;
use std::collections::BTreeMap;
use tessera_plugin::{Component, ComponentSet, ComponentView, Plugin};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub components: BTreeMap<String, Vec<ComponentSummary>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PluginSummary {
    pub fn of<M>(plugin: &Plugin<M>) -> Self {
        Self::of_view(plugin, &plugin.filter(None))
    }

    /// Summary restricted to the fields in `view`
    pub fn of_view<M>(plugin: &Plugin<M>, view: &ComponentView<'_>) -> Self {
        Self {
            name: plugin.name().to_string(),
            version: plugin.version().map(str::to_string),
            components: view
                .iter()
                .map(|(key, set)| (key.to_string(), summarize_set(set)))
                .collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

fn summarize_set(set: &ComponentSet) -> Vec<ComponentSummary> {
    set.iter().map(|c| ComponentSummary::of(&**c)).collect()
}

impl ComponentSummary {
    pub fn of(component: &dyn Component) -> Self {
        Self {
            name: component.name().to_string(),
            category: component.category().to_string(),
            owner: component.owner().map(str::to_string),
            description: component.description().map(str::to_string),
        }
    }
}
