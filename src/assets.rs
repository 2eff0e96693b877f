//! Health stage image lookup.

use std::path::PathBuf;

/// Resolves stage asset keys to image files on disk.
///
/// A missing image is a presentation concern, not a pipeline failure:
/// `resolve` reports absence as `None` and callers degrade to a textual
/// notice while the report itself stands.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    images_dir: PathBuf,
}

impl AssetCatalog {
    /// Create a catalog rooted at `images_dir`.
    pub fn new<P: Into<PathBuf>>(images_dir: P) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    /// File path an asset key maps to, whether or not it exists.
    pub fn path_for(&self, asset_key: &str) -> PathBuf {
        self.images_dir.join(format!("{asset_key}.jpg"))
    }

    /// Path to the image for `asset_key`, if the file exists.
    pub fn resolve(&self, asset_key: &str) -> Option<PathBuf> {
        let path = self.path_for(asset_key);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_path_follows_key_naming() {
        let catalog = AssetCatalog::new("images");
        assert_eq!(
            catalog.path_for("healthy_image"),
            PathBuf::from("images/healthy_image.jpg")
        );
    }

    #[test]
    fn test_resolve_present_and_absent_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("at_risk_image.jpg"), b"jpg").unwrap();

        let catalog = AssetCatalog::new(dir.path());
        assert_eq!(
            catalog.resolve("at_risk_image"),
            Some(dir.path().join("at_risk_image.jpg"))
        );
        assert_eq!(catalog.resolve("critical_image"), None);
    }
}
