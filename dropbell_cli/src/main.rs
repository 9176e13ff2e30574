// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Batch analyser for background images.
//! Effectively a proof of concept API style usage of the Dropbell core
//! library: for every image matching the given paths or glob patterns it
//! reports the median luminance beneath the bell icon and the icon tone the
//! application would choose.
use dropbell_core::file_io::load_image_bytes;
use dropbell_core::sampler::{self, SampleWindow};
use dropbell_core::tone::IconTone;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let patterns: Vec<String> = std::env::args().skip(1).collect();
    if patterns.is_empty() {
        return Err("Usage: dropbell_cli <image-or-glob>...".into());
    }

    let mut analysed = 0u32;

    for pattern in &patterns {
        for path in glob::glob(pattern)?.flatten() {
            let bytes = match load_image_bytes(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            let image = match image::load_from_memory(&bytes) {
                Ok(decoded) => decoded.to_rgba8(),
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            let window = SampleWindow::beneath_icon(image.width());
            let median = sampler::median_luminance(&image, window);
            let tone = IconTone::for_luminance(median);

            log::info!(
                "{}: median luminance {median:.1} -> {tone} icon",
                path.display()
            );
            analysed += 1;
        }
    }

    log::info!("Analysed {analysed} image(s)");

    Ok(())
}
