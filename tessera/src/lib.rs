//! Tessera - typed plugin composition
//!
//! A provider builds a [`Plugin`] by adding components under field keys.
//! The host later reads the plugin's model, name and components to check
//! and consume them.
//!
//! ```
//! use serde_json::json;
//! use tessera::prelude::*;
//! use tessera::kinds::Command;
//!
//! let mut plugin = Plugin::new("host-model", "p").with_version("1.0");
//! plugin.add("cmds", Command::new("hello", |_| json!("hi")));
//! assert_eq!(plugin.get("cmds")[0].owner(), Some("p"));
//! ```

pub mod error;
pub mod logging;
pub mod settings;
pub mod summary;

pub use error::{Error, Result};
pub use settings::Settings;
pub use summary::{ComponentSummary, PluginSummary};

pub use tessera_core::{codes, ConstrainedList, ConstrainedMap, CoreError, CoreResult};
pub use tessera_plugin::{
    component, Category, Component, ComponentBase, ComponentObject, ComponentSet, ComponentView,
    Components, Plugin,
};

/// Standard component kinds
pub mod kinds {
    pub use tessera_std::*;
}

/// Look up a standard category by its short name (`"Command"`, `"Asset"`, ...).
pub fn standard_category(name: &str) -> Result<Category> {
    tessera_std::standard_categories()
        .into_iter()
        .find(|c| c.short_name().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownCategory(name.to_string()))
}

pub mod prelude {
    pub use tessera_plugin::prelude::*;
    pub use crate::{Error, PluginSummary, Result};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::{Asset, Command, MetaData};
    use serde_json::json;

    #[derive(Debug)]
    struct Model;

    fn command(name: &str) -> Command {
        Command::new(name, |_| json!(null))
    }

    #[test]
    fn test_end_to_end() {
        let mut plugin = Plugin::new(Model, "p").with_version("1.0");
        plugin.add("cmds", command("CommandA"));
        plugin.add("cmds", command("CommandB"));
        assert_eq!(plugin.get("cmds").names(), vec!["CommandA", "CommandB"]);

        plugin.remove("cmds", Some("CommandA")).unwrap();
        assert_eq!(plugin.get("cmds").names(), vec!["CommandB"]);

        let commands = plugin.filter_by::<Command>();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands["cmds"].names(), vec!["CommandB"]);
        assert_eq!(commands["cmds"][0].owner(), Some("p"));
    }

    #[test]
    fn test_standard_category_lookup() {
        assert_eq!(standard_category("command").unwrap(), Category::of::<Command>());
        assert_eq!(standard_category("Asset").unwrap(), Category::of::<Asset>());
        assert!(matches!(
            standard_category("Widget").unwrap_err(),
            Error::UnknownCategory(_)
        ));
    }

    #[test]
    fn test_copy_then_diverge() {
        let mut plugin = Plugin::new(Model, "p")
            .with_component("author", MetaData::new("author", "Jane"));
        let mut clone = plugin.copy();
        clone.add("author", MetaData::new("co-author", "Joe"));
        plugin.remove("author", Some("author")).unwrap();

        assert!(plugin.get("author").is_empty());
        assert_eq!(clone.get("author").names(), vec!["author", "co-author"]);
    }

    #[test]
    fn test_core_error_converts() {
        let mut plugin = Plugin::new(Model, "p");
        let err: Error = plugin.remove("missing", None).unwrap_err().into();
        assert_eq!(err.to_string(), "no key 'missing' in the plugin's components");
    }
}
