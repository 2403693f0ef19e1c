use std::path::{Path, PathBuf};

/// Icon sizes required for a PWA manifest
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];
pub const DEFAULT_SOURCE: &str = "speech-bubble.png";
pub const DEFAULT_OUTPUT_DIR: &str = "icons";
pub const DEFAULT_MANIFEST: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            manifest: DEFAULT_MANIFEST.to_string(),
        }
    }
}

impl IconConfig {
    /// Default layout rooted at `root` instead of the working directory.
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source: root.join(DEFAULT_SOURCE),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            ..Self::default()
        }
    }

    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn icon_file_name(size: u32) -> String {
        format!("icon-{}.png", size)
    }

    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(Self::icon_file_name(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let cfg = IconConfig::default();
        assert_eq!(cfg.source, PathBuf::from("speech-bubble.png"));
        assert_eq!(cfg.sizes, vec![72, 96, 128, 144, 152, 192, 384, 512]);
        assert_eq!(cfg.icon_path(192), Path::new("icons").join("icon-192.png"));
    }

    #[test]
    fn test_in_dir_roots_paths() {
        let cfg = IconConfig::in_dir("/tmp/work");
        assert_eq!(cfg.source, Path::new("/tmp/work").join("speech-bubble.png"));
        assert_eq!(cfg.icon_path(72), Path::new("/tmp/work/icons").join("icon-72.png"));
        assert_eq!(cfg.sizes, DEFAULT_SIZES.to_vec());
    }
}
