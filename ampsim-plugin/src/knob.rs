use ampsim::gui::layout::KnobPlacement;
use ampsim::gui::style;
use nih_plug::prelude::*;
use nih_plug_egui::egui::{Align2, FontId, Pos2, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};

use crate::editor::{to_color, to_rect};

/// Normalised change per pixel of drag.
const DRAG_SPEED: f32 = 0.005;
const ARC_SEGMENTS: usize = 48;
const ARC_WIDTH: f32 = 4.0;
const KNOB_MARGIN: f32 = 8.0;

/// Rotary control bound to a host parameter.
///
/// Drag up or right to increase, double-click to reset to the default.
pub struct ParamKnob<'a, P: Param> {
    param: &'a P,
    setter: &'a ParamSetter<'a>,
    placement: &'a KnobPlacement,
}

impl<'a, P: Param> ParamKnob<'a, P> {
    pub const fn new(
        param: &'a P,
        setter: &'a ParamSetter<'a>,
        placement: &'a KnobPlacement,
    ) -> Self {
        Self {
            param,
            setter,
            placement,
        }
    }

    fn reset_to_default(&self) {
        self.setter.begin_set_parameter(self.param);
        self.setter
            .set_parameter(self.param, self.param.default_plain_value());
        self.setter.end_set_parameter(self.param);
    }

    fn handle_drag(&self, response: &Response) {
        if response.drag_started() {
            self.setter.begin_set_parameter(self.param);
        }

        if response.dragged() {
            let delta = response.drag_delta();
            let value = self.param.unmodulated_normalized_value() + (delta.x - delta.y) * DRAG_SPEED;
            self.setter
                .set_parameter_normalized(self.param, value.clamp(0.0, 1.0));
        }

        if response.drag_stopped() {
            self.setter.end_set_parameter(self.param);
        }
    }

    fn paint(&self, ui: &Ui, response: &Response) {
        let painter = ui.painter();
        let dial = to_rect(self.placement.dial_bounds());
        let centre = dial.center();
        let radius = (dial.width().min(dial.height()) * 0.5 - KNOB_MARGIN).max(4.0);
        let normalized = self.param.modulated_normalized_value();
        let angle = style::rotary_angle(normalized);

        painter.circle_filled(centre, radius * 0.75, to_color(style::KNOB_BODY));
        if response.hovered() || response.dragged() {
            painter.circle_stroke(centre, radius * 0.75, Stroke::new(1.0, to_color(style::LABEL)));
        }

        painter.add(arc(
            centre,
            radius,
            style::ROTARY_START,
            style::ROTARY_END,
            Stroke::new(ARC_WIDTH, to_color(style::KNOB_TRACK)),
        ));
        painter.add(arc(
            centre,
            radius,
            style::ROTARY_START,
            angle,
            Stroke::new(ARC_WIDTH, to_color(style::KNOB_VALUE)),
        ));

        let direction = Vec2::new(angle.sin(), -angle.cos());
        painter.line_segment(
            [centre + direction * radius * 0.25, centre + direction * radius * 0.7],
            Stroke::new(2.0, to_color(style::LABEL)),
        );

        if let Some(value_box) = self.placement.value_box() {
            painter.text(
                to_rect(value_box).center(),
                Align2::CENTER_CENTER,
                self.param.normalized_value_to_string(normalized, true),
                FontId::proportional(style::VALUE_TEXT_SIZE),
                to_color(style::LABEL),
            );
        }
    }
}

impl<P: Param> Widget for ParamKnob<'_, P> {
    fn ui(self, ui: &mut Ui) -> Response {
        let response = ui.allocate_rect(to_rect(self.placement.bounds), Sense::click_and_drag());

        if response.double_clicked() {
            self.reset_to_default();
        } else {
            self.handle_drag(&response);
        }

        self.paint(ui, &response);
        response
    }
}

/// Polyline along a circle, angles clockwise from straight up.
fn arc(centre: Pos2, radius: f32, from: f32, to: f32, stroke: Stroke) -> Shape {
    let points = (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = from + (to - from) * i as f32 / ARC_SEGMENTS as f32;
            centre + Vec2::new(angle.sin(), -angle.cos()) * radius
        })
        .collect();

    Shape::line(points, stroke)
}
