use super::tool_trait::{PointerButton, Tool, ToolContext};
use super::geometry::{Geometry, PointD, Rect};
use crate::core::color::ColorBgra;
use crate::core::error::CoreError;
use crate::core::store::PixelStore;
use rust_i18n::t;
use std::any::Any;

/// One-pixel freehand tool. Left paints the primary color, right the
/// secondary; the eraser variant paints transparent with either.
pub struct PencilTool {
    pub last_pos: Option<(i32, i32)>,
    pub is_eraser: bool,
    stroke_color: Option<ColorBgra>,
    dirty_rect: Option<Rect>,
}

impl PencilTool {
    pub fn new(is_eraser: bool) -> Self {
        Self {
            last_pos: None,
            is_eraser,
            stroke_color: None,
            dirty_rect: None,
        }
    }

    fn grow_dirty_rect(&mut self, x: i32, y: i32) {
        let px = Rect::new(x, y, 1, 1);
        self.dirty_rect = Some(match self.dirty_rect {
            Some(r) => {
                let x1 = r.x.min(px.x);
                let y1 = r.y.min(px.y);
                let x2 = (r.x + r.width).max(px.x + 1);
                let y2 = (r.y + r.height).max(px.y + 1);
                Rect::new(x1, y1, x2 - x1, y2 - y1)
            }
            None => px,
        });
    }

    fn paint_line(&mut self, from: (i32, i32), to: (i32, i32), color: ColorBgra, store: &mut PixelStore) -> Result<(), CoreError> {
        let layer = store.active_layer_mut()?;
        let bounds = Rect::from_size(layer.width, layer.height);
        let mut touched = Vec::new();
        let mut res = Ok(());
        Geometry::bresenham_line(from.0, from.1, to.0, to.1, |x, y| {
            if res.is_err() || !bounds.contains(x, y) { return; }
            res = layer.set_pixel(x as u32, y as u32, color);
            touched.push((x, y));
        });
        res?;
        for (x, y) in touched {
            self.grow_dirty_rect(x, y);
        }
        Ok(())
    }
}

impl Tool for PencilTool {
    fn on_pointer_down(&mut self, button: PointerButton, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        let color = match button {
            PointerButton::Primary => ctx.palette.primary,
            PointerButton::Secondary => ctx.palette.secondary,
            _ => return Ok(()),
        };
        let color = if self.is_eraser { ColorBgra::TRANSPARENT } else { color.to_premultiplied() };
        let pos = point.to_pixel();
        self.stroke_color = Some(color);
        self.last_pos = Some(pos);
        self.paint_line(pos, pos, color, ctx.store)
    }

    fn on_pointer_move(&mut self, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        let (Some(color), Some(last)) = (self.stroke_color, self.last_pos) else {
            return Ok(());
        };
        let pos = point.to_pixel();
        self.last_pos = Some(pos);
        self.paint_line(last, pos, color, ctx.store)
    }

    fn on_pointer_up(&mut self, _button: PointerButton, _ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.stroke_color = None;
        self.last_pos = None;
        Ok(())
    }

    fn on_activated(&mut self) {
        self.stroke_color = None;
        self.last_pos = None;
    }

    fn take_dirty_rect(&mut self) -> Option<Rect> {
        self.dirty_rect.take()
    }

    fn status_text(&self) -> String {
        if self.is_eraser {
            t!("tool.eraser_status").to_string()
        } else {
            t!("tool.pencil_status").to_string()
        }
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}
