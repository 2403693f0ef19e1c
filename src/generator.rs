use std::fs;
use std::io::Write;
use std::path::Path;

use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageResult};

use crate::config::IconConfig;
use crate::error::IconError;
use crate::logger::{log_error, log_line, report};
use crate::models::{GeneratedIcon, RunState, manifest_icons};

/// Resample to `size`x`size` with Lanczos3. Non-square sources are stretched square.
pub fn resize_square(img: &DynamicImage, size: u32) -> Result<DynamicImage, IconError> {
    if size == 0 {
        return Err(IconError::Resample { size });
    }
    Ok(img.resize_exact(size, size, FilterType::Lanczos3))
}

/// Decodes by sniffing the content, so the file extension does not pick the codec.
fn decode_source(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

/// Runs the whole pipeline, stopping at the first failure. Icons already
/// written before a failure are left in place.
pub fn try_generate<W: Write + ?Sized>(
    cfg: &IconConfig,
    out: &mut W,
) -> Result<Vec<GeneratedIcon>, IconError> {
    if !cfg.source.exists() {
        return Err(IconError::MissingSource { path: cfg.source.clone() });
    }

    fs::create_dir_all(&cfg.output_dir).map_err(|source| IconError::CreateDir {
        path: cfg.output_dir.clone(),
        source,
    })?;

    let img = decode_source(&cfg.source).map_err(|source| IconError::Decode {
        path: cfg.source.clone(),
        source,
    })?;
    let (width, height) = img.dimensions();
    report(out, &format!("Source image: {}x{}", width, height));

    let mut icons = Vec::with_capacity(cfg.sizes.len());
    for &size in &cfg.sizes {
        let resized = resize_square(&img, size)?;
        let path = cfg.icon_path(size);
        resized
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| IconError::Save { path: path.clone(), source })?;
        report(out, &format!("Generated: {}", path.display()));
        icons.push(GeneratedIcon { size, path });
    }

    report(out, "");
    report(out, "All icons generated successfully!");
    report(out, &format!("Update {} to reference these icons.", cfg.manifest));
    match serde_json::to_string_pretty(&manifest_icons(&icons)) {
        Ok(snippet) => report(out, &format!("\"icons\": {}", snippet)),
        Err(e) => log_error("manifest snippet", &e),
    }

    Ok(icons)
}

/// Single-shot generator: NotStarted -> Running -> Done | Failed.
#[derive(Debug)]
pub struct IconGenerator {
    config: IconConfig,
    state: RunState,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config, state: RunState::NotStarted }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Failures are reported to `out` and recorded in the state, never returned.
    /// Once terminal, further calls are no-ops.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> &RunState {
        if self.state.is_terminal() {
            return &self.state;
        }
        self.state = RunState::Running;
        let source = self.config.source.display();
        let output_dir = self.config.output_dir.display();
        log_line(&format!("RUN: {} -> {}", source, output_dir));

        self.state = match try_generate(&self.config, out) {
            Ok(icons) => RunState::Done(icons),
            Err(e) => {
                match &e {
                    IconError::MissingSource { .. } => report(out, &format!("Error: {}", e)),
                    _ => report(out, &format!("Error generating icons: {}", e)),
                }
                log_error("icon generation failed", &e);
                RunState::Failed(e.kind())
            }
        };
        &self.state
    }
}

/// Process entry point: reports to stdout and returns the terminal state.
pub fn generate(cfg: &IconConfig) -> RunState {
    let mut stdout = std::io::stdout().lock();
    let mut generator = IconGenerator::new(cfg.clone());
    generator.run(&mut stdout).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([30, 120, 220, 255])))
    }

    #[test]
    fn test_resize_forces_square() {
        let out = resize_square(&solid(300, 120), 96).unwrap();
        assert_eq!(out.dimensions(), (96, 96));
    }

    #[test]
    fn test_resize_zero_is_resample_failure() {
        let err = resize_square(&solid(10, 10), 0).unwrap_err();
        assert_eq!(err.kind(), crate::IconErrorKind::ResampleFailure);
    }

    #[test]
    fn test_lanczos_keeps_flat_color() {
        let out = resize_square(&solid(64, 64), 16).unwrap().to_rgba8();
        assert_eq!(*out.get_pixel(8, 8), Rgba([30, 120, 220, 255]));
    }

    #[test]
    fn test_missing_source_leaves_state_failed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut generator = IconGenerator::new(IconConfig::in_dir(tmp.path()));
        assert_eq!(generator.state(), &RunState::NotStarted);

        let mut buf = Vec::new();
        let state = generator.run(&mut buf).clone();
        assert_eq!(state, RunState::Failed(crate::IconErrorKind::MissingSource));

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("speech-bubble.png not found"));
        assert!(!tmp.path().join("icons").exists());
    }
}
