// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::DropbellApp;
use crate::extensions::color32::IntoColor32 as _;
use dropbell_core::sampler::{ICON_MARGIN, ICON_SIZE};
use egui::{Align2, Button, Color32, FontId, Rect, Ui, Vec2, pos2, vec2};

impl eframe::App for DropbellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_loaded_backgrounds(ctx);
        self.handle_drag_and_drop(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.paint_background(ui);
                if self.background.is_none() {
                    self.placeholder_content(ui);
                }
                self.paint_bell(ui);
                if self.drag_active {
                    self.paint_drag_overlay(ui);
                }
            });

        self.toasts.show(ctx);
    }
}

impl DropbellApp {
    fn paint_background(&self, ui: &Ui) {
        let rect = ui.max_rect();
        // painter_at clips the cover-scaled overflow to the panel.
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, ui.style().visuals.extreme_bg_color);

        if let Some(background) = &self.background {
            let image_rect = cover_rect(rect, background.size);
            painter.image(
                background.texture.id(),
                image_rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }

    fn placeholder_content(&self, ui: &mut Ui) {
        let rect = ui.max_rect();

        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drag and drop an image anywhere to set as background.",
            FontId::proportional(16.0),
            ui.style().visuals.text_color(),
        );

        let button_rect =
            Rect::from_center_size(rect.center() + vec2(0.0, 40.0), vec2(140.0, 28.0));
        if ui.put(button_rect, Button::new("Choose image…")).clicked() {
            self.pick_background(ui.ctx());
        }
    }

    fn paint_bell(&self, ui: &mut Ui) {
        let rect = ui.max_rect();
        let margin = ICON_MARGIN as f32;
        let size = ICON_SIZE as f32;
        let bell_rect = Rect::from_min_size(
            pos2(rect.right() - margin - size, rect.top() + margin),
            Vec2::splat(size),
        );

        // The SVG is authored with a white stroke; tinting it yields the
        // decided stroke colour exactly.
        let bell = egui::Image::new(egui::include_image!("../../../assets/bell.svg"))
            .tint(self.icon_tone.stroke_colour().into_color32())
            .fit_to_exact_size(Vec2::splat(size));
        ui.put(bell_rect, bell);
    }

    fn paint_drag_overlay(&self, ui: &Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(96));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Drop image here",
            FontId::proportional(24.0),
            Color32::WHITE,
        );
    }
}

/// Scales an image to cover the panel while preserving its aspect ratio,
/// centred; the overflow on one axis is clipped by the panel painter.
fn cover_rect(panel: Rect, image_size: Vec2) -> Rect {
    let scale = (panel.width() / image_size.x).max(panel.height() / image_size.y);
    Rect::from_center_size(panel.center(), image_size * scale)
}
