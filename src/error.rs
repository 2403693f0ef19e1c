use std::path::PathBuf;

use thiserror::Error;

/// Failure category of a run, coarse enough to assert on in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconErrorKind {
    MissingSource,
    DecodeFailure,
    ResampleFailure,
    SaveFailure,
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("{} not found", .path.display())]
    MissingSource { path: PathBuf },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot resample to {size}x{size}")]
    Resample { size: u32 },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub fn kind(&self) -> IconErrorKind {
        match self {
            IconError::MissingSource { .. } => IconErrorKind::MissingSource,
            IconError::Decode { .. } => IconErrorKind::DecodeFailure,
            IconError::Resample { .. } => IconErrorKind::ResampleFailure,
            IconError::CreateDir { .. } | IconError::Save { .. } => IconErrorKind::SaveFailure,
        }
    }
}
