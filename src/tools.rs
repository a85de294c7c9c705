pub mod color_picker;
pub mod geometry;
pub mod pencil;
pub mod sampler;
pub mod tool_trait;
