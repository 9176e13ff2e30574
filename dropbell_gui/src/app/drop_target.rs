// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::app::{DropbellApp, LoadedBackground};
use dropbell_core::file_io;
use dropbell_core::tone::IconTone;
use egui::{Context, DroppedFile};
use std::sync::Arc;

const IMAGE_FILTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// An image payload accepted for loading, before its bytes are available.
pub(crate) enum PendingImage {
    #[cfg(not(target_arch = "wasm32"))]
    Path(std::path::PathBuf),
    Bytes(Arc<[u8]>),
}

impl PendingImage {
    fn from_dropped(file: &DroppedFile) -> Option<Self> {
        if let Some(bytes) = &file.bytes {
            return Some(Self::Bytes(bytes.clone()));
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &file.path {
            return Some(Self::Path(path.clone()));
        }
        None
    }
}

async fn read_payload(pending: PendingImage) -> Result<Vec<u8>, String> {
    match pending {
        PendingImage::Bytes(bytes) => Ok(bytes.to_vec()),
        #[cfg(not(target_arch = "wasm32"))]
        PendingImage::Path(path) => file_io::load_image_bytes(&path)
            .await
            .map_err(|e| e.to_string()),
    }
}

/// Decodes image bytes and derives the icon tone from the decoded pixels.
/// One tone decision per successful load.
fn decode_and_evaluate(bytes: &[u8]) -> Result<LoadedBackground, String> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| e.to_string())?
        .to_rgba8();
    let tone = IconTone::for_image(&image);
    Ok(LoadedBackground {
        image: Arc::new(image),
        tone,
    })
}

/// Inspects only the FIRST file of a drop; later files are never considered.
/// The declared media type decides when present, otherwise the file extension.
pub(crate) fn select_image_payload(files: &[DroppedFile]) -> Option<&DroppedFile> {
    let file = files.first()?;

    let is_image = if !file.mime.is_empty() {
        file_io::is_image_mime(&file.mime)
    } else if let Some(path) = &file.path {
        file_io::is_image_path(path)
    } else {
        false
    };

    is_image.then_some(file)
}

impl DropbellApp {
    /// Mirrors the window's file-hover state into the drag flag and starts a
    /// background load when an image file is dropped. Non-image drops are
    /// ignored without surfacing an error.
    pub(crate) fn handle_drag_and_drop(&mut self, ctx: &Context) {
        self.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        if let Some(file) = select_image_payload(&dropped)
            && let Some(pending) = PendingImage::from_dropped(file)
        {
            self.load_background(ctx, pending);
        }
    }

    /// Reads and decodes the payload off the UI thread; the result arrives
    /// through the background channel as a single completion message.
    pub(crate) fn load_background(&self, ctx: &Context, pending: PendingImage) {
        let sender = self.background_sender.clone();
        let ctx = ctx.clone();

        let task = async move {
            let result = read_payload(pending)
                .await
                .and_then(|bytes| decode_and_evaluate(&bytes));

            sender
                .unbounded_send(result)
                .expect("Failed to send background result");
            ctx.request_repaint();
        };

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        #[cfg(not(target_arch = "wasm32"))]
        self.tokio_runtime.spawn(task);
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn pick_background(&self, ctx: &Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_FILTER_EXTENSIONS)
            .pick_file()
        {
            self.load_background(ctx, PendingImage::Path(path));
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn pick_background(&self, ctx: &Context) {
        let sender = self.background_sender.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(file) = rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_FILTER_EXTENSIONS)
                .pick_file()
                .await
            {
                let bytes = file.read().await;
                let result = decode_and_evaluate(&bytes);
                sender
                    .unbounded_send(result)
                    .expect("Failed to send background result");
                ctx.request_repaint();
            }
        });
    }
}
