//! Configuration for the growth-lens engine.

mod presets;

// Public
pub mod constants;

// Re-export commonly used items
pub use presets::PresetBook;
