//! Tessera Standard Components
//!
//! Leaf component kinds a provider can contribute. Payloads are carried,
//! never run, by the plugin itself; the host decides when to invoke them.

pub mod api;
pub mod assets;
pub mod commands;
pub mod hooks;
pub mod metadata;

mod callable;

pub use api::ApiExtension;
pub use assets::Asset;
pub use callable::Callable;
pub use commands::Command;
pub use hooks::Hook;
pub use metadata::MetaData;

use tessera_plugin::Category;

/// Categories of every standard kind
pub fn standard_categories() -> [Category; 5] {
    [
        Category::of::<MetaData>(),
        Category::of::<Asset>(),
        Category::of::<ApiExtension>(),
        Category::of::<Hook>(),
        Category::of::<Command>(),
    ]
}
