//! Functions extending the host application's API

use crate::Callable;
use serde_json::Value;
use tessera_plugin::ComponentBase;

#[derive(Debug, Clone)]
pub struct ApiExtension {
    base: ComponentBase,
    extension: Callable,
}

tessera_plugin::component!(ApiExtension);

impl ApiExtension {
    pub fn new<F>(name: impl Into<String>, extension: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::from_callable(name, Callable::new(extension))
    }

    pub fn from_callable(name: impl Into<String>, extension: Callable) -> Self {
        Self {
            base: ComponentBase::new(name),
            extension,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.with_description(description);
        self
    }

    pub fn extension(&self) -> &Callable {
        &self.extension
    }

    pub fn invoke(&self, args: &[Value]) -> Value {
        self.extension.call(args)
    }
}
