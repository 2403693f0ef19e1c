use std::path::Path;

use image::ImageFormat;
use pwa_icons::config::DEFAULT_SOURCE;
use pwa_icons::icon;
use pwa_icons::logger::log_line;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = Path::new(DEFAULT_SOURCE);
    if out.exists() {
        println!("{} already exists, leaving it alone", out.display());
        return Ok(());
    }
    let img = icon::speech_bubble(1024);
    img.save_with_format(out, ImageFormat::Png)?;
    log_line(&format!("Wrote placeholder {}", out.display()));
    println!("Wrote {}", out.display());
    Ok(())
}
