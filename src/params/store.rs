use anyhow::{Result, bail};
use std::sync::atomic::{AtomicU32, Ordering};

use super::ParameterSource;
use super::layout::ParamId;

/// Lock-free parameter values shared between the UI and the audio thread.
///
/// Each parameter lives in its own atomic, stored as `f32` bits. Writes are clamped to the
/// parameter's range.
pub struct ParameterStore {
    values: [AtomicU32; ParamId::COUNT],
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|i| AtomicU32::new(ParamId::ALL[i].spec().default.to_bits())),
        }
    }

    pub fn get(&self, id: ParamId) -> f32 {
        f32::from_bits(self.values[id.index()].load(Ordering::Relaxed))
    }

    pub fn set(&self, id: ParamId, value: f32) {
        let value = id.spec().range.clamp(value);
        self.values[id.index()].store(value.to_bits(), Ordering::Relaxed);
    }

    /// Set a parameter by its string id. Non-finite values are refused.
    pub fn set_by_id(&self, id: &str, value: f32) -> Result<()> {
        let param = ParamId::from_id(id)?;
        if !value.is_finite() {
            bail!("value for '{id}' must be finite, got {value}");
        }
        self.set(param, value);
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSource for ParameterStore {
    fn raw_value(&self, id: ParamId) -> f32 {
        self.get(id)
    }
}
