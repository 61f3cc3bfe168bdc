pub mod processor;
pub mod stages;
