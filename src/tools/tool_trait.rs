use crate::core::error::CoreError;
use crate::core::palette::PaletteColors;
use crate::core::store::PixelStore;
use crate::tools::geometry::{PointD, Rect};
use rust_i18n::t;
use std::any::Any;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ToolType {
    ColorPicker,
    Pencil,
    Eraser,
}

impl ToolType {
    /// Where "switch to default tool" lands.
    pub const DEFAULT: ToolType = ToolType::Pencil;

    pub fn name(&self) -> String {
        match self {
            ToolType::ColorPicker => t!("tool.color_picker").to_string(),
            ToolType::Pencil => t!("tool.pencil").to_string(),
            ToolType::Eraser => t!("tool.eraser").to_string(),
        }
    }
}

/// Mouse buttons, numbered the X11 way (1 left, 2 middle, 3 right).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl PointerButton {
    pub fn from_index(index: u16) -> Self {
        match index {
            1 => PointerButton::Primary,
            2 => PointerButton::Middle,
            3 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Tool selection as seen from inside a tool.
pub trait ToolRegistry {
    fn switch_to(&mut self, tool: ToolType);
    fn previous_tool(&self) -> Option<ToolType>;
}

pub struct ToolContext<'a> {
    pub store: &'a mut PixelStore,
    pub palette: &'a mut PaletteColors,
    pub tools: &'a mut dyn ToolRegistry,
}

pub trait Tool: Any {
    fn on_pointer_down(&mut self, button: PointerButton, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    fn on_pointer_move(&mut self, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    fn on_pointer_up(&mut self, button: PointerButton, ctx: &mut ToolContext<'_>) -> Result<(), CoreError>;
    /// Called each time the tool becomes the active one.
    fn on_activated(&mut self) {}
    fn take_dirty_rect(&mut self) -> Option<Rect> {
        None
    }
    fn status_text(&self) -> String {
        String::new()
    }
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
