pub mod color;
pub mod error;
pub mod layer;
pub mod palette;
pub mod store;
