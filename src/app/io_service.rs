use crate::app::error::Result;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;
use crate::render::compositor::Compositor;
use rust_i18n::t;
use std::path::Path;

pub struct IoService;

impl IoService {
    pub fn load_as_layer(path: &Path, id: String, name: String) -> Result<Layer> {
        let rgba = image::open(path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Layer::from_rgba(id, name, width, height, rgba.as_raw()))
    }

    /// Opens an image as a one-layer document with its composite built.
    pub fn open_document(path: &Path) -> Result<PixelStore> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| t!("layer.background").to_string());
        let layer = Self::load_as_layer(path, "background".to_string(), name)?;
        let mut store = PixelStore::new(layer.width, layer.height);
        store.add_layer(layer);
        Compositor::update_composite_cache(&mut store, None);
        tracing::info!(path = %path.display(), width = store.canvas_width, height = store.canvas_height, "opened image");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::AppError;
    use crate::core::color::{Color, ColorBgra};
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_open_document_premultiplies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([255, 0, 0, 128]));
        img.save(&path).unwrap();

        let store = IoService::open_document(&path).unwrap();
        assert_eq!((store.canvas_width, store.canvas_height), (2, 2));
        assert_eq!(store.get_pixel("background", 1, 0), Some(ColorBgra::from_bgra(0, 0, 128, 128)));
        assert_eq!(store.get_composite_pixel(1, 0).to_straight_alpha(), Color::new(255, 0, 0, 128));
        assert_eq!(store.get_layer("background").unwrap().name, "in");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = IoService::open_document(&dir.path().join("nope.png"));
        assert!(matches!(r, Err(AppError::Image(_)) | Err(AppError::Io(_))));
    }
}
