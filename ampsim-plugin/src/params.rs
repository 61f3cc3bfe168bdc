use ampsim::params::{NormalisableRange, ParamId, ParameterSource};
use nih_plug::prelude::*;
use nih_plug_egui::EguiState;
use std::sync::Arc;

use crate::editor;

#[derive(Params)]
pub struct AmpSimParams {
    /// Editor window size, saved with the session.
    #[persist = "editor-state"]
    pub editor_state: Arc<EguiState>,

    #[id = "INPUT"]
    pub input: FloatParam,
    #[id = "GATE"]
    pub gate: FloatParam,
    #[id = "OUTPUT"]
    pub output: FloatParam,

    #[id = "GAIN"]
    pub gain: FloatParam,
    #[id = "BASS"]
    pub bass: FloatParam,
    #[id = "MIDDLE"]
    pub middle: FloatParam,
    #[id = "TREBLE"]
    pub treble: FloatParam,
    #[id = "PRESENCE"]
    pub presence: FloatParam,
    #[id = "LEVEL"]
    pub level: FloatParam,
}

fn float_range(range: NormalisableRange) -> FloatRange {
    if range.skew == 1.0 {
        FloatRange::Linear {
            min: range.min,
            max: range.max,
        }
    } else {
        FloatRange::Skewed {
            min: range.min,
            max: range.max,
            factor: range.skew,
        }
    }
}

fn float_param(id: ParamId) -> FloatParam {
    let spec = id.spec();
    let param = FloatParam::new(spec.name, spec.default, float_range(spec.range));

    match spec.unit {
        Some(unit) => param
            .with_unit(unit)
            .with_value_to_string(formatters::v2s_f32_rounded(1)),
        None => param.with_value_to_string(formatters::v2s_f32_rounded(2)),
    }
}

impl Default for AmpSimParams {
    fn default() -> Self {
        Self {
            editor_state: editor::default_state(),

            input: float_param(ParamId::Input),
            gate: float_param(ParamId::Gate),
            output: float_param(ParamId::Output),

            gain: float_param(ParamId::Gain),
            bass: float_param(ParamId::Bass),
            middle: float_param(ParamId::Middle),
            treble: float_param(ParamId::Treble),
            presence: float_param(ParamId::Presence),
            level: float_param(ParamId::Level),
        }
    }
}

impl AmpSimParams {
    pub const fn param(&self, id: ParamId) -> &FloatParam {
        match id {
            ParamId::Input => &self.input,
            ParamId::Gate => &self.gate,
            ParamId::Output => &self.output,
            ParamId::Gain => &self.gain,
            ParamId::Bass => &self.bass,
            ParamId::Middle => &self.middle,
            ParamId::Treble => &self.treble,
            ParamId::Presence => &self.presence,
            ParamId::Level => &self.level,
        }
    }
}

impl ParameterSource for AmpSimParams {
    fn raw_value(&self, id: ParamId) -> f32 {
        self.param(id).value()
    }
}
