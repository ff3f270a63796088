//! Tessera Plugin System
//!
//! Providers assemble a [`Plugin`] from typed contributions:
//! - Components (one named contribution each)
//! - Component sets (ordered components for one field key)
//! - Plugins (field keys to component sets, plus identity and model)

mod component;
mod plugin;
mod set;

pub use component::{Category, Component, ComponentBase, ComponentObject};
pub use plugin::{ComponentView, Components, Plugin};
pub use set::ComponentSet;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        Category, Component, ComponentBase, ComponentSet, ComponentView, Plugin,
    };
    pub use tessera_core::prelude::*;
}
