use std::collections::HashMap;
use crate::tools::tool_trait::{PointerButton, Tool, ToolContext, ToolRegistry, ToolType};
use crate::tools::pencil::PencilTool;
use crate::tools::color_picker::ColorPickerTool;
use crate::tools::geometry::{PointD, Rect};
use crate::core::store::PixelStore;
use crate::core::palette::PaletteColors;
use crate::core::error::CoreError;

/// Records a tool switch requested while the active tool is borrowed; the
/// manager applies it once the tool call returns.
pub struct ToolSwitch {
    previous: Option<ToolType>,
    requested: Option<ToolType>,
}

impl ToolSwitch {
    fn new(previous: Option<ToolType>) -> Self {
        Self { previous, requested: None }
    }
}

impl ToolRegistry for ToolSwitch {
    fn switch_to(&mut self, tool: ToolType) {
        self.requested = Some(tool);
    }

    fn previous_tool(&self) -> Option<ToolType> {
        self.previous
    }
}

pub struct ToolManager {
    pub active_type: ToolType,
    pub previous_type: Option<ToolType>,
    pub tools: HashMap<ToolType, Box<dyn Tool>>,
    pub is_drawing: bool,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolManager {
    pub fn new() -> Self {
        let mut tools: HashMap<ToolType, Box<dyn Tool>> = HashMap::new();
        tools.insert(ToolType::Pencil, Box::new(PencilTool::new(false)));
        tools.insert(ToolType::Eraser, Box::new(PencilTool::new(true)));
        tools.insert(ToolType::ColorPicker, Box::new(ColorPickerTool::default()));

        Self {
            active_type: ToolType::Pencil,
            previous_type: None,
            tools,
            is_drawing: false,
        }
    }

    /// Makes `tool_type` active. Returns `false` when it already was.
    pub fn set_tool(&mut self, tool_type: ToolType) -> bool {
        if self.active_type == tool_type { return false; }
        tracing::debug!(from = ?self.active_type, to = ?tool_type, "switching tool");
        self.previous_type = Some(self.active_type);
        self.active_type = tool_type;
        self.is_drawing = false;
        if let Some(tool) = self.tools.get_mut(&tool_type) {
            tool.on_activated();
        }
        true
    }

    pub fn color_picker_mut(&mut self) -> Option<&mut ColorPickerTool> {
        self.tools.get_mut(&ToolType::ColorPicker)?.as_any_mut().downcast_mut::<ColorPickerTool>()
    }

    pub fn color_picker(&self) -> Option<&ColorPickerTool> {
        self.tools.get(&ToolType::ColorPicker)?.as_any().downcast_ref::<ColorPickerTool>()
    }

    pub fn handle_pointer_down(&mut self, button: PointerButton, point: PointD, store: &mut PixelStore, palette: &mut PaletteColors) -> Result<Option<ToolType>, CoreError> {
        self.is_drawing = true;
        self.dispatch(store, palette, |tool, ctx| tool.on_pointer_down(button, point, ctx))
    }

    pub fn handle_pointer_move(&mut self, point: PointD, store: &mut PixelStore, palette: &mut PaletteColors) -> Result<Option<ToolType>, CoreError> {
        if !self.is_drawing { return Ok(None); }
        self.dispatch(store, palette, |tool, ctx| tool.on_pointer_move(point, ctx))
    }

    /// Releases always reach the active tool, even when the press went to a
    /// different tool.
    pub fn handle_pointer_up(&mut self, button: PointerButton, store: &mut PixelStore, palette: &mut PaletteColors) -> Result<Option<ToolType>, CoreError> {
        self.is_drawing = false;
        self.dispatch(store, palette, |tool, ctx| tool.on_pointer_up(button, ctx))
    }

    pub fn take_dirty_rect(&mut self) -> Option<Rect> {
        self.tools.get_mut(&self.active_type)?.take_dirty_rect()
    }

    /// Runs `f` against the active tool and applies any tool switch it asked
    /// for. Returns the newly active tool when a switch happened.
    fn dispatch<F>(&mut self, store: &mut PixelStore, palette: &mut PaletteColors, f: F) -> Result<Option<ToolType>, CoreError>
    where
        F: FnOnce(&mut dyn Tool, &mut ToolContext<'_>) -> Result<(), CoreError>,
    {
        let mut switch = ToolSwitch::new(self.previous_type);
        if let Some(tool) = self.tools.get_mut(&self.active_type) {
            let mut ctx = ToolContext { store, palette, tools: &mut switch };
            f(&mut **tool, &mut ctx)?;
        }
        match switch.requested {
            Some(next) if self.set_tool(next) => Ok(Some(next)),
            _ => Ok(None),
        }
    }
}
