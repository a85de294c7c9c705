use crate::core::color::ColorBgra;
use crate::core::layer::Layer;
use crate::core::store::PixelStore;
use crate::tools::geometry::Rect;
use rayon::prelude::*;

pub struct Compositor;

impl Compositor {
    /// Rebuilds the composite for `rect` (whole canvas when `None`) by stacking
    /// visible layers bottom to top with premultiplied source-over.
    pub fn update_composite_cache(store: &mut PixelStore, rect: Option<Rect>) {
        let canvas_w = store.canvas_width;
        let canvas_h = store.canvas_height;
        let area = rect
            .unwrap_or_else(|| Rect::from_size(canvas_w, canvas_h))
            .intersect(&Rect::from_size(canvas_w, canvas_h));
        if area.is_empty() { return; }

        let x_start = area.x as usize;
        let x_end = (area.x + area.width) as usize;
        let y_start = area.y as u32;
        let stride = canvas_w as usize;
        let range_start = y_start as usize * stride;
        let range_end = (area.y + area.height) as usize * stride;
        if range_end > store.composite_cache.len() { return; }

        let PixelStore { layers, composite_cache, .. } = store;
        let visible: Vec<&Layer> = layers.iter().filter(|l| l.visible && l.opacity > 0).collect();

        composite_cache[range_start..range_end]
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y_offset, row_data)| {
                let ty = y_start + y_offset as u32;
                for tx in x_start..x_end {
                    let mut fc = ColorBgra::TRANSPARENT;
                    for layer in &visible {
                        let src = layer.row(ty).get(tx).copied().unwrap_or(ColorBgra::TRANSPARENT);
                        if src.a > 0 {
                            fc = src.over(fc, layer.opacity);
                        }
                    }
                    row_data[tx] = fc;
                }
            });
        tracing::trace!(?area, layers = visible.len(), "composite cache updated");
    }
}
