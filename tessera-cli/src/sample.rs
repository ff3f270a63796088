//! Built-in sample plugin used by the inspector

use serde_json::{json, Value};
use tessera::kinds::{ApiExtension, Asset, Command, Hook, MetaData};
use tessera::Plugin;

/// Stand-in for a host's model type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleModel {
    pub host: &'static str,
}

pub fn sample_plugin(name: &str) -> Plugin<SampleModel> {
    let mut plugin = Plugin::new(SampleModel { host: "tessera-cli" }, name).with_version("0.1.0");
    plugin
        .add("author", MetaData::new("author", "Jane Doe"))
        .add("license", MetaData::new("license", "MIT"))
        .add(
            "commands",
            Command::new("greet", greet)
                .in_group("hello")
                .with_description("Print a greeting"),
        )
        .add("commands", Command::new("version", |_| json!(env!("CARGO_PKG_VERSION"))))
        .add("api-functions", ApiExtension::new("double", double))
        .add("input_file", Asset::new("logo", "assets/logo.png"))
        .add("on_start", Hook::new("on_start", |_| Value::Null));
    plugin
}

fn greet(args: &[Value]) -> Value {
    let who = args.first().and_then(Value::as_str).unwrap_or("world");
    json!(format!("hello, {who}"))
}

fn double(args: &[Value]) -> Value {
    match args.first().and_then(Value::as_f64) {
        Some(n) => json!(n * 2.0),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_contents() {
        let plugin = sample_plugin("sample");
        assert_eq!(plugin.name(), "sample");
        assert_eq!(plugin.version(), Some("0.1.0"));
        assert_eq!(plugin.model().host, "tessera-cli");
        assert_eq!(
            plugin.keys().collect::<Vec<_>>(),
            vec!["api-functions", "author", "commands", "input_file", "license", "on_start"]
        );
        assert_eq!(plugin.get("commands").names(), vec!["greet", "version"]);
    }

    #[test]
    fn test_sample_components_are_owned() {
        let plugin = sample_plugin("mine");
        for (_, set) in plugin.filter(None) {
            for component in set.iter() {
                assert_eq!(component.owner(), Some("mine"));
            }
        }
    }

    #[test]
    fn test_sample_callables() {
        let plugin = sample_plugin("sample");
        let commands = plugin.filter_by::<Command>();
        let greet = commands["commands"].of_kind::<Command>().next().unwrap();
        assert_eq!(greet.invoke(&[json!("tessera")]), json!("hello, tessera"));
        assert_eq!(greet.invoke(&[]), json!("hello, world"));

        let api = plugin.filter_by::<ApiExtension>();
        let double = api["api-functions"].of_kind::<ApiExtension>().next().unwrap();
        assert_eq!(double.invoke(&[json!(2.5)]), json!(5.0));
        assert_eq!(double.invoke(&[json!("x")]), Value::Null);
    }
}
