//! Region sampling: turns a pointer position into one averaged color.
//!
//! Pixels are gathered from a clamped square around the pointer, averaged in
//! premultiplied space, then converted to straight alpha.

use crate::core::color::{Color, ColorBgra};
use crate::core::error::CoreError;
use crate::tools::geometry::{PointD, Rect};
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Host document as seen by the sampler.
///
/// Pixel reads outside the image must return transparent rather than fail.
pub trait PickTarget {
    fn image_size(&self) -> (u32, u32);
    /// Raw stored pixel of the active editable layer.
    fn layer_pixel(&self, x: i32, y: i32) -> ColorBgra;
    /// Pixel after blending every visible layer.
    fn composited_pixel(&self, x: i32, y: i32) -> ColorBgra;

    fn contains_point(&self, point: PointD) -> bool {
        let (w, h) = self.image_size();
        point.x >= 0.0 && point.y >= 0.0 && point.x < w as f64 && point.y < h as f64
    }

    fn bounds(&self) -> Rect {
        let (w, h) = self.image_size();
        Rect::from_size(w, h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SampleSize {
    #[default]
    Single,
    Region3,
    Region5,
    Region7,
    Region9,
}

impl SampleSize {
    pub const ALL: [SampleSize; 5] = [
        SampleSize::Single,
        SampleSize::Region3,
        SampleSize::Region5,
        SampleSize::Region7,
        SampleSize::Region9,
    ];

    /// Edge length of the sampled square.
    pub fn pixels(self) -> u32 {
        match self {
            SampleSize::Single => 1,
            SampleSize::Region3 => 3,
            SampleSize::Region5 => 5,
            SampleSize::Region7 => 7,
            SampleSize::Region9 => 9,
        }
    }

    pub fn label(self) -> String {
        match self {
            SampleSize::Single => t!("sampling.single_pixel").to_string(),
            other => t!("sampling.region", size = other.pixels()).to_string(),
        }
    }
}

impl TryFrom<u32> for SampleSize {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SampleSize::ALL
            .into_iter()
            .find(|s| s.pixels() == value)
            .ok_or(CoreError::InvalidSampleSize(value))
    }
}

impl From<SampleSize> for u32 {
    fn from(size: SampleSize) -> u32 {
        size.pixels()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSource {
    /// Only the active layer.
    #[default]
    Layer,
    /// The flattened image.
    Image,
}

impl SampleSource {
    pub fn label(self) -> String {
        match self {
            SampleSource::Layer => t!("sampling.layer").to_string(),
            SampleSource::Image => t!("sampling.image").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SampleConfig {
    pub size: SampleSize,
    pub source: SampleSource,
}

impl SampleConfig {
    pub const fn new(size: SampleSize, source: SampleSource) -> Self {
        Self { size, source }
    }
}

/// Which accessor to read pixels through, chosen once per sample.
#[derive(Clone, Copy)]
pub enum PixelSource<'a> {
    Layer(&'a dyn PickTarget),
    Image(&'a dyn PickTarget),
}

impl<'a> PixelSource<'a> {
    pub fn new(target: &'a dyn PickTarget, source: SampleSource) -> Self {
        match source {
            SampleSource::Layer => PixelSource::Layer(target),
            SampleSource::Image => PixelSource::Image(target),
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> ColorBgra {
        match self {
            PixelSource::Layer(t) => t.layer_pixel(x, y),
            PixelSource::Image(t) => t.composited_pixel(x, y),
        }
    }
}

/// The square of `size` pixels centered on `point`, clipped to `bounds`.
///
/// A single-pixel sample is the unclipped 1x1 rect at the truncated point.
pub fn resolve_region(point: PointD, size: SampleSize, bounds: Rect) -> Rect {
    let (x, y) = point.to_pixel();
    let size = size.pixels() as i32;
    if size == 1 {
        return Rect::new(x, y, 1, 1);
    }
    let half = size / 2;
    Rect::new(x - half, y - half, size, size).intersect(&bounds)
}

/// Reads every pixel of `region`, right and bottom edges included.
pub fn gather_pixels(region: Rect, source: &PixelSource<'_>) -> Vec<ColorBgra> {
    let mut pixels = Vec::with_capacity(region.area());
    for i in region.left()..=region.right() {
        for j in region.top()..=region.bottom() {
            pixels.push(source.get_pixel(i, j));
        }
    }
    pixels
}

/// Averages the pixels around `point` and returns the straight-alpha result.
pub fn sample_color(point: PointD, config: SampleConfig, source: &PixelSource<'_>, bounds: Rect) -> Color {
    let pixels = if config.size == SampleSize::Single {
        let (x, y) = point.to_pixel();
        vec![source.get_pixel(x, y)]
    } else {
        gather_pixels(resolve_region(point, config.size, bounds), source)
    };

    let color = ColorBgra::blend_premultiplied(&pixels).to_straight_alpha();
    tracing::trace!(x = point.x, y = point.y, count = pixels.len(), color = %color.to_hex(), "sampled");
    color
}
