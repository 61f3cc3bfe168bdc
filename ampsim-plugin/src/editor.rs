use ampsim::gui::layout::{Bounds, EDITOR_HEIGHT, EDITOR_WIDTH, EditorLayout, KnobRow};
use ampsim::gui::style::{self, Rgba};
use nih_plug::prelude::*;
use nih_plug_egui::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};
use nih_plug_egui::{EguiState, create_egui_editor};
use std::sync::Arc;

use crate::knob::ParamKnob;
use crate::params::AmpSimParams;

pub fn default_state() -> Arc<EguiState> {
    EguiState::from_size(EDITOR_WIDTH as u32, EDITOR_HEIGHT as u32)
}

pub fn create(
    params: Arc<AmpSimParams>,
    editor_state: Arc<EguiState>,
) -> Option<Box<dyn Editor>> {
    create_egui_editor(
        editor_state,
        EditorLayout::default(),
        |_, _| {},
        move |egui_ctx, setter, layout| {
            egui::CentralPanel::default()
                .frame(egui::Frame::default())
                .show(egui_ctx, |ui| {
                    paint_panel(ui.painter(), layout);

                    for placement in layout.knobs() {
                        ui.add(ParamKnob::new(
                            params.param(placement.param),
                            setter,
                            placement,
                        ));
                    }
                });
        },
    )
}

/// Background, row strip, captions and branding. Knobs paint themselves.
fn paint_panel(painter: &Painter, layout: &EditorLayout) {
    painter.rect_filled(to_rect(layout.panel()), 0.0, to_color(style::BACKGROUND));
    painter.rect_filled(
        to_rect(layout.utility_strip()),
        0.0,
        to_color(style::utility_strip()),
    );

    for knob in layout.knobs() {
        let size = match knob.row {
            KnobRow::Utility => style::UTILITY_LABEL_SIZE,
            KnobRow::Amp => style::AMP_LABEL_SIZE,
        };

        painter.text(
            to_rect(knob.label_bounds()).center(),
            Align2::CENTER_CENTER,
            knob.label(),
            FontId::proportional(size),
            to_color(style::LABEL),
        );
    }

    painter.text(
        to_rect(layout.branding_area()).left_bottom(),
        Align2::LEFT_BOTTOM,
        style::BRANDING_TEXT,
        FontId::proportional(style::BRANDING_SIZE),
        to_color(style::BRANDING),
    );
}

pub fn to_rect(bounds: Bounds) -> Rect {
    Rect::from_min_size(
        Pos2::new(bounds.x as f32, bounds.y as f32),
        Vec2::new(bounds.width as f32, bounds.height as f32),
    )
}

pub fn to_color(colour: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(colour.r, colour.g, colour.b, colour.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_convert_to_rect() {
        let rect = to_rect(Bounds::new(10, 159, 113, 281));
        assert_eq!(rect.min, Pos2::new(10.0, 159.0));
        assert_eq!(rect.max, Pos2::new(123.0, 440.0));
    }

    #[test]
    fn test_opaque_colour() {
        assert_eq!(to_color(style::BACKGROUND), Color32::from_rgb(30, 30, 30));
    }
}
