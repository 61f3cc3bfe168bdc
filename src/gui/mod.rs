//! Framework-independent editor description: where the knobs go and how they look.
//! The plugin's editor paints from this.

pub mod layout;
pub mod style;
