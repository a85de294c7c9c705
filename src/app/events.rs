use crate::core::error::CoreError;
use crate::tools::geometry::Rect;
use crate::tools::tool_trait::{PointerButton, ToolType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { button: PointerButton },
}

#[derive(Debug, PartialEq)]
pub enum EngineEffect {
    None,
    ColorsChanged,
    RedrawRect(Rect),
    ToolSwitched(ToolType),
    Error(CoreError),
}

impl EngineEffect {
    /// Combines two effects of one event; errors win, then tool switches,
    /// then redraws (merged to their bounding box), then color changes.
    pub fn merge(self, other: EngineEffect) -> EngineEffect {
        match (self, other) {
            (EngineEffect::Error(e), _) | (_, EngineEffect::Error(e)) => EngineEffect::Error(e),
            (EngineEffect::ToolSwitched(t), _) | (_, EngineEffect::ToolSwitched(t)) => EngineEffect::ToolSwitched(t),
            (EngineEffect::RedrawRect(a), EngineEffect::RedrawRect(b)) => {
                let x1 = a.x.min(b.x);
                let y1 = a.y.min(b.y);
                let x2 = (a.x + a.width).max(b.x + b.width);
                let y2 = (a.y + a.height).max(b.y + b.height);
                EngineEffect::RedrawRect(Rect::new(x1, y1, x2 - x1, y2 - y1))
            }
            (r @ EngineEffect::RedrawRect(_), _) | (_, r @ EngineEffect::RedrawRect(_)) => r,
            (e, EngineEffect::None) => e,
            (EngineEffect::None, e) => e,
            (EngineEffect::ColorsChanged, EngineEffect::ColorsChanged) => EngineEffect::ColorsChanged,
        }
    }
}
