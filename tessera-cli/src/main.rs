//! Tessera inspector
//!
//! Builds the sample plugin and prints its summary as JSON.
//!
//! Usage:
//! - `tessera` - every field
//! - `tessera filter <Kind>` - only fields holding a component of `Kind`
//!   (`MetaData`, `Asset`, `ApiExtension`, `Hook`, `Command`)
//!
//! Environment:
//! - `TESSERA_LOG` (or `RUST_LOG`) - log filter, logs go to stderr
//! - `TESSERA_PRETTY` - pretty-print output (default on)
//! - `TESSERA_PLUGIN_NAME` - name of the sample plugin

mod sample;

use std::env;
use tessera::{logging, standard_category, Error, PluginSummary, Settings};
use tracing::{debug, info};

const USAGE: &str = "usage: tessera [filter <Kind>]";

enum Request {
    All,
    Filter(String),
    Help,
}

fn parse_args(args: &[String]) -> Result<Request, String> {
    match args {
        [] => Ok(Request::All),
        [flag] if flag == "-h" || flag == "--help" => Ok(Request::Help),
        [cmd, kind] if cmd == "filter" => Ok(Request::Filter(kind.clone())),
        _ => Err(USAGE.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    logging::init(&settings.log_filter)?;
    debug!(?settings, "Loaded settings");

    let args: Vec<String> = env::args().skip(1).collect();
    let request = parse_args(&args)?;

    let plugin = sample::sample_plugin(&settings.plugin_name);
    info!(name = plugin.name(), fields = plugin.len(), "Built sample plugin");

    let summary = match request {
        Request::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Request::All => PluginSummary::of(&plugin),
        Request::Filter(kind) => {
            let category = standard_category(&kind)?;
            PluginSummary::of_view(&plugin, &plugin.filter(Some(category)))
        }
    };

    println!("{}", summary.to_json(settings.pretty).map_err(Error::from)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(matches!(parse_args(&args(&[])), Ok(Request::All)));
        assert!(matches!(parse_args(&args(&["--help"])), Ok(Request::Help)));
        assert!(matches!(
            parse_args(&args(&["filter", "Command"])),
            Ok(Request::Filter(kind)) if kind == "Command"
        ));
        assert_eq!(parse_args(&args(&["filter"])).err().as_deref(), Some(USAGE));
    }

    #[test]
    fn test_filtered_summary() {
        let plugin = sample::sample_plugin("sample");
        let category = standard_category("Command").unwrap();
        let summary = PluginSummary::of_view(&plugin, &plugin.filter(Some(category)));
        assert_eq!(summary.components.keys().collect::<Vec<_>>(), vec!["commands"]);
        assert_eq!(summary.components["commands"].len(), 2);
    }
}
