use super::color::{Color, ColorBgra};
use crate::core::error::{CoreError, Result};

/// A canvas-sized raster layer. Pixels are premultiplied BGRA, row-major,
/// in one contiguous buffer.
#[derive(Debug, Clone)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub width: u32,
    pub height: u32,
    pub opacity: u8,
    pixels: Vec<ColorBgra>,
    pub version: u64,
}

impl Layer {
    pub fn new(id: String, name: String, width: u32, height: u32) -> Self {
        Self {
            id,
            name,
            visible: true,
            locked: false,
            width,
            height,
            opacity: 255,
            pixels: vec![ColorBgra::TRANSPARENT; (width * height) as usize],
            version: 0,
        }
    }

    /// Builds a layer from straight-alpha RGBA bytes (the layout `image` decodes to).
    /// Missing trailing bytes leave pixels transparent.
    pub fn from_rgba(id: String, name: String, width: u32, height: u32, data: &[u8]) -> Self {
        let mut layer = Self::new(id, name, width, height);
        for (dst, px) in layer.pixels.iter_mut().zip(data.chunks_exact(4)) {
            *dst = Color::new(px[0], px[1], px[2], px[3]).to_premultiplied();
        }
        layer
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<ColorBgra> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: ColorBgra) -> Result<()> {
        if self.locked {
            return Err(CoreError::LayerLocked);
        }
        self.set_pixel_raw(x, y, color)
    }

    pub fn set_pixel_raw(&mut self, x: u32, y: u32, color: ColorBgra) -> Result<()> {
        let idx = self.index(x, y).ok_or(CoreError::OutOfBounds { x, y })?;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            self.version += 1;
        }
        Ok(())
    }

    /// Stores a straight-alpha color, premultiplying it first.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_premultiplied())
    }

    pub fn fill(&mut self, color: ColorBgra) -> Result<()> {
        if self.locked {
            return Err(CoreError::LayerLocked);
        }
        self.pixels.fill(color);
        self.version += 1;
        Ok(())
    }

    pub fn pixels(&self) -> &[ColorBgra] {
        &self.pixels
    }

    pub fn row(&self, y: u32) -> &[ColorBgra] {
        if y >= self.height {
            return &[];
        }
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }
}
