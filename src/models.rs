use std::path::PathBuf;

use serde::Serialize;

use crate::error::IconErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Lifecycle of a single generator run. Terminal states are never left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    Done(Vec<GeneratedIcon>),
    Failed(IconErrorKind),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done(_) | RunState::Failed(_))
    }
}

/// One entry of a web-app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    pub fn for_icon(icon: &GeneratedIcon) -> Self {
        // `<output dir name>/<file name>` with forward slashes, relative to the manifest
        let mut parts: Vec<String> = icon
            .path
            .components()
            .rev()
            .take(2)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        parts.reverse();
        let src = parts.join("/");
        Self {
            src,
            sizes: format!("{0}x{0}", icon.size),
            mime_type: "image/png".to_string(),
        }
    }
}

pub fn manifest_icons(icons: &[GeneratedIcon]) -> Vec<ManifestIcon> {
    icons.iter().map(ManifestIcon::for_icon).collect()
}
