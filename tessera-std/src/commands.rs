//! Commands added to the host's command line

use crate::Callable;
use serde_json::Value;
use tessera_plugin::ComponentBase;

#[derive(Debug, Clone)]
pub struct Command {
    base: ComponentBase,
    callable: Callable,
    group: Option<String>,
}

tessera_plugin::component!(Command);

impl Command {
    pub fn new<F>(name: impl Into<String>, callable: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            base: ComponentBase::new(name),
            callable: Callable::new(callable),
            group: None,
        }
    }

    /// Place the command in a sub-command group of the host.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.with_description(description);
        self
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
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
    fn test_command_group() {
        let cmd = Command::new("build", |_| json!("built")).in_group("setup");
        assert_eq!(cmd.name(), "build");
        assert_eq!(cmd.group(), Some("setup"));
        assert_eq!(cmd.invoke(&[]), json!("built"));
    }

    #[test]
    fn test_command_without_group() {
        let cmd = Command::new("run", |_| Value::Null);
        assert_eq!(cmd.group(), None);
    }
}
