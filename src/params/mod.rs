pub mod layout;
pub mod range;
pub mod store;

pub use layout::{ParamId, ParamSpec};
pub use range::NormalisableRange;
pub use store::ParameterStore;

/// Read access to current plain parameter values.
///
/// The audio thread reads through this once per block. Implementations must be safe to
/// call while another thread writes.
pub trait ParameterSource {
    fn raw_value(&self, id: ParamId) -> f32;
}
