use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    LayerLocked,
    OutOfBounds { x: u32, y: u32 },
    LayerNotFound(String),
    NoActiveLayer,
    InvalidSampleSize(u32),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::LayerLocked => write!(f, "{}", t!("error.layer_locked")),
            CoreError::OutOfBounds { x, y } => write!(f, "{}", t!("error.out_of_bounds", x = x, y = y)),
            CoreError::LayerNotFound(id) => write!(f, "{}", t!("error.layer_not_found", id = id)),
            CoreError::NoActiveLayer => write!(f, "{}", t!("error.no_active_layer")),
            CoreError::InvalidSampleSize(size) => write!(f, "{}", t!("error.invalid_sample_size", size = size)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
