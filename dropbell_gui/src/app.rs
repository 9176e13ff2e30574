// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
mod drop_target;
mod eframe_ui;

use dropbell_core::tone::IconTone;
use egui::{Color32, ColorImage, Context, TextureHandle, Vec2, vec2};
use egui_notify::{Anchor, Toasts};
use futures_channel::mpsc;
use image::RgbaImage;
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Runtime;

type BackgroundReceiver = Option<mpsc::UnboundedReceiver<Result<LoadedBackground, String>>>;
pub(crate) type BackgroundSender = mpsc::UnboundedSender<Result<LoadedBackground, String>>;

/// A decoded background image together with the icon tone derived from its
/// sampled region. Built once per load, off the UI thread.
pub(crate) struct LoadedBackground {
    pub image: Arc<RgbaImage>,
    pub tone: IconTone,
}

/// The currently displayed background. Replacing it drops the previous
/// texture handle.
struct Background {
    texture: TextureHandle,
    size: Vec2,
}

pub struct DropbellApp {
    background: Option<Background>,
    icon_tone: IconTone,
    drag_active: bool,

    background_receiver: BackgroundReceiver,
    background_sender: BackgroundSender,

    toasts: Toasts,

    #[cfg(not(target_arch = "wasm32"))]
    tokio_runtime: Arc<Runtime>,
}

impl Default for DropbellApp {
    fn default() -> Self {
        let (background_sender, background_receiver) = mpsc::unbounded();

        Self {
            background: None,
            icon_tone: IconTone::default(),
            drag_active: false,
            background_receiver: Some(background_receiver),
            background_sender,
            toasts: Toasts::new().with_anchor(Anchor::BottomRight),
            #[cfg(not(target_arch = "wasm32"))]
            tokio_runtime: Arc::new(Runtime::new().expect("Failed to create Tokio runtime")),
        }
    }
}

impl DropbellApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // The bell icon is an SVG loaded through egui_extras.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Nothing is restored from storage: the background and icon tone live
        // only for the current run.
        Self::default()
    }

    /// Applies finished background loads in arrival order. When drops race,
    /// the last load to complete wins.
    fn drain_loaded_backgrounds(&mut self, ctx: &Context) {
        if let Some(rx) = self.background_receiver.as_mut() {
            while let Ok(Some(result)) = rx.try_next() {
                match result {
                    Ok(loaded) => {
                        let size = [
                            loaded.image.width() as usize,
                            loaded.image.height() as usize,
                        ];
                        let pixels: Vec<Color32> = loaded
                            .image
                            .pixels()
                            .map(|p| Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
                            .collect();
                        let colour_image = ColorImage {
                            size,
                            pixels,
                            ..Default::default()
                        };

                        let texture = ctx.load_texture(
                            "background",
                            colour_image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.background = Some(Background {
                            texture,
                            size: vec2(
                                loaded.image.width() as f32,
                                loaded.image.height() as f32,
                            ),
                        });
                        self.icon_tone = loaded.tone;
                    }
                    Err(e) => {
                        log::error!("Failed to load background image: {e}");
                        self.toasts.error("Failed to load image.");
                    }
                }
            }
        }
    }
}
