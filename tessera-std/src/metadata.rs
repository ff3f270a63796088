//! Metadata components
//!
//! Settings, author and repository information, and other data describing
//! the plugin rather than extending the host. Name and version stay on the
//! plugin itself.

use serde::Serialize;
use serde_json::Value;
use tessera_plugin::ComponentBase;

#[derive(Debug, Clone)]
pub struct MetaData {
    base: ComponentBase,
    value: Value,
}

tessera_plugin::component!(MetaData);

impl MetaData {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            base: ComponentBase::new(name),
            value: value.into(),
        }
    }

    /// Metadata holding the JSON form of `value`
    pub fn from_serializable<T: Serialize>(
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(name, serde_json::to_value(value)?))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.with_description(description);
        self
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
