//! Callbacks run by the host at a named integration point

use crate::Callable;
use serde_json::Value;
use tessera_plugin::ComponentBase;

#[derive(Debug, Clone)]
pub struct Hook {
    base: ComponentBase,
    callable: Callable,
}

tessera_plugin::component!(Hook);

impl Hook {
    pub fn new<F>(name: impl Into<String>, callable: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            base: ComponentBase::new(name),
            callable: Callable::new(callable),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.with_description(description);
        self
    }

    pub fn callable(&self) -> &Callable {
        &self.callable
    }

    pub fn invoke(&self, args: &[Value]) -> Value {
        self.callable.call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_plugin::Component;

    #[test]
    fn test_hook_copy_shares_callable() {
        let hook = Hook::new("on_start", |_| json!(true)).with_description("Run on start");
        let copy = hook.clone();
        assert!(hook.callable().ptr_eq(copy.callable()));
        assert_eq!(copy.invoke(&[]), json!(true));
        assert_eq!(copy.description(), Some("Run on start"));
    }
}
