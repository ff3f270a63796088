//! Static resources handed to the host

use std::path::{Path, PathBuf};
use tessera_plugin::ComponentBase;

#[derive(Debug, Clone)]
pub struct Asset {
    base: ComponentBase,
    path: PathBuf,
}

tessera_plugin::component!(Asset);

impl Asset {
    /// `path` is relative to the plugin's directory.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            base: ComponentBase::new(name),
            path: path.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base = self.base.with_description(description);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_plugin::Component;

    #[test]
    fn test_asset_path_and_extension() {
        let asset = Asset::new("logo", "assets/logo.png");
        assert_eq!(asset.name(), "logo");
        assert_eq!(asset.path(), Path::new("assets/logo.png"));
        assert_eq!(asset.extension(), Some("png"));
    }

    #[test]
    fn test_asset_without_extension() {
        let asset = Asset::new("license", "LICENSE");
        assert_eq!(asset.extension(), None);
    }
}
