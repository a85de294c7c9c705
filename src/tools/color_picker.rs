use crate::core::error::CoreError;
use crate::core::palette::ColorSink;
use crate::tools::geometry::PointD;
use crate::tools::sampler::{sample_color, PickTarget, PixelSource, SampleConfig};
use super::tool_trait::{PointerButton, Tool, ToolContext, ToolRegistry, ToolType};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Which color slot the current gesture writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveButton {
    #[default]
    None,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub active: ActiveButton,
}

impl InteractionState {
    pub const IDLE: InteractionState = InteractionState { active: ActiveButton::None };

    pub fn is_sampling(&self) -> bool {
        self.active != ActiveButton::None
    }
}

/// What happens to tool selection once the button is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterSelect {
    #[default]
    None,
    Previous,
    SwitchToDefault,
}

impl AfterSelect {
    pub const ALL: [AfterSelect; 3] = [AfterSelect::None, AfterSelect::Previous, AfterSelect::SwitchToDefault];

    pub fn label(self) -> String {
        match self {
            AfterSelect::None => t!("after_select.none").to_string(),
            AfterSelect::Previous => t!("after_select.previous").to_string(),
            AfterSelect::SwitchToDefault => t!("after_select.default", tool = ToolType::DEFAULT.name()).to_string(),
        }
    }
}

/// Press/drag/release transitions of the picker. Each takes the current
/// state and returns the next one; at most one color is written per call.
pub struct InteractionController;

impl InteractionController {
    pub fn press(
        state: InteractionState,
        button: PointerButton,
        point: PointD,
        config: SampleConfig,
        target: &dyn PickTarget,
        sink: &mut dyn ColorSink,
    ) -> InteractionState {
        let active = match button {
            PointerButton::Primary => ActiveButton::Primary,
            PointerButton::Secondary => ActiveButton::Secondary,
            _ => state.active,
        };
        let next = InteractionState { active };
        Self::write_sample(next, point, config, target, sink);
        next
    }

    pub fn drag(
        state: InteractionState,
        point: PointD,
        config: SampleConfig,
        target: &dyn PickTarget,
        sink: &mut dyn ColorSink,
    ) -> InteractionState {
        Self::write_sample(state, point, config, target, sink);
        state
    }

    pub fn release(state: InteractionState, after_select: AfterSelect, registry: &mut dyn ToolRegistry) -> InteractionState {
        tracing::debug!(?state, ?after_select, "color picker released");
        match after_select {
            AfterSelect::None => {}
            AfterSelect::Previous => {
                if let Some(previous) = registry.previous_tool() {
                    registry.switch_to(previous);
                }
            }
            AfterSelect::SwitchToDefault => registry.switch_to(ToolType::DEFAULT),
        }
        InteractionState::IDLE
    }

    fn write_sample(
        state: InteractionState,
        point: PointD,
        config: SampleConfig,
        target: &dyn PickTarget,
        sink: &mut dyn ColorSink,
    ) {
        if !state.is_sampling() || !target.contains_point(point) {
            return;
        }
        let source = PixelSource::new(target, config.source);
        let color = sample_color(point, config, &source, target.bounds());
        match state.active {
            ActiveButton::Primary => sink.set_primary(color),
            ActiveButton::Secondary => sink.set_secondary(color),
            ActiveButton::None => {}
        }
    }
}

pub struct ColorPickerTool {
    pub state: InteractionState,
    pub config: SampleConfig,
    pub after_select: AfterSelect,
}

impl ColorPickerTool {
    pub fn new(config: SampleConfig, after_select: AfterSelect) -> Self {
        Self { state: InteractionState::IDLE, config, after_select }
    }
}

impl Default for ColorPickerTool {
    fn default() -> Self {
        Self::new(SampleConfig::default(), AfterSelect::default())
    }
}

impl Tool for ColorPickerTool {
    fn on_pointer_down(&mut self, button: PointerButton, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.state = InteractionController::press(self.state, button, point, self.config, &*ctx.store, &mut *ctx.palette);
        Ok(())
    }

    fn on_pointer_move(&mut self, point: PointD, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.state = InteractionController::drag(self.state, point, self.config, &*ctx.store, &mut *ctx.palette);
        Ok(())
    }

    fn on_pointer_up(&mut self, _button: PointerButton, ctx: &mut ToolContext<'_>) -> Result<(), CoreError> {
        self.state = InteractionController::release(self.state, self.after_select, &mut *ctx.tools);
        Ok(())
    }

    fn on_activated(&mut self) {
        self.state = InteractionState::IDLE;
    }

    fn status_text(&self) -> String {
        t!("tool.color_picker_status").to_string()
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}
