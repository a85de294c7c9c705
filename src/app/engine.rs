use crate::app::events::{EngineEffect, InputEvent};
use crate::app::settings::PickerSettings;
use crate::app::tool_manager::ToolManager;
use crate::core::error::Result;
use crate::core::layer::Layer;
use crate::core::palette::PaletteColors;
use crate::core::store::PixelStore;
use crate::render::compositor::Compositor;
use crate::tools::geometry::PointD;
use crate::tools::tool_trait::{PointerButton, ToolType};
use rust_i18n::t;

pub struct PickerEngine {
    store: PixelStore,
    palette: PaletteColors,
    tool_manager: ToolManager,
    settings: PickerSettings,
}

impl PickerEngine {
    /// A blank `width` x `height` document with one transparent layer.
    pub fn new(width: u32, height: u32) -> Self {
        let mut store = PixelStore::new(width, height);
        store.add_layer(Layer::new("L1".to_string(), t!("layer.default_name", num = 1).to_string(), width, height));
        Self::with_store(store)
    }

    pub fn with_store(mut store: PixelStore) -> Self {
        Compositor::update_composite_cache(&mut store, None);
        Self {
            store,
            palette: PaletteColors::new(),
            tool_manager: ToolManager::new(),
            settings: PickerSettings::default(),
        }
    }

    pub fn store(&self) -> &PixelStore { &self.store }
    pub fn store_mut(&mut self) -> &mut PixelStore { &mut self.store }
    pub fn palette(&self) -> &PaletteColors { &self.palette }
    pub fn palette_mut(&mut self) -> &mut PaletteColors { &mut self.palette }
    pub fn tool_manager(&self) -> &ToolManager { &self.tool_manager }
    pub fn settings(&self) -> &PickerSettings { &self.settings }
    pub fn active_tool(&self) -> ToolType { self.tool_manager.active_type }

    pub fn set_tool(&mut self, tool: ToolType) {
        self.tool_manager.set_tool(tool);
    }

    pub fn apply_settings(&mut self, settings: PickerSettings) {
        self.settings = settings;
        if let Some(picker) = self.tool_manager.color_picker_mut() {
            picker.config = settings.sample_config();
            picker.after_select = settings.after_select;
        }
    }

    /// Rebuilds the composite after layers were edited directly through `store_mut`.
    pub fn refresh_composite(&mut self) {
        Compositor::update_composite_cache(&mut self.store, None);
    }

    pub fn toggle_layer_visibility(&mut self, layer_id: &str) -> Result<()> {
        let visible = self
            .store
            .get_layer(layer_id)
            .map(|l| l.visible)
            .ok_or_else(|| crate::core::error::CoreError::LayerNotFound(layer_id.to_string()))?;
        self.store.set_layer_visibility(layer_id, !visible)?;
        self.refresh_composite();
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) -> EngineEffect {
        let before = (self.palette.primary, self.palette.secondary);
        let result = match event {
            InputEvent::PointerDown { button, x, y } => {
                self.tool_manager.handle_pointer_down(button, PointD::new(x, y), &mut self.store, &mut self.palette)
            }
            InputEvent::PointerMove { x, y } => {
                self.tool_manager.handle_pointer_move(PointD::new(x, y), &mut self.store, &mut self.palette)
            }
            InputEvent::PointerUp { button } => {
                self.tool_manager.handle_pointer_up(button, &mut self.store, &mut self.palette)
            }
        };

        let mut effect = EngineEffect::None;
        if let Some(rect) = self.tool_manager.take_dirty_rect() {
            Compositor::update_composite_cache(&mut self.store, Some(rect));
            effect = effect.merge(EngineEffect::RedrawRect(rect));
        }
        if before != (self.palette.primary, self.palette.secondary) {
            effect = effect.merge(EngineEffect::ColorsChanged);
        }
        match result {
            Ok(Some(tool)) => effect.merge(EngineEffect::ToolSwitched(tool)),
            Ok(None) => effect,
            Err(e) => {
                tracing::warn!(error = %e, ?event, "tool input failed");
                effect.merge(EngineEffect::Error(e))
            }
        }
    }

    pub fn on_mouse_down(&mut self, button: PointerButton, x: f64, y: f64) -> EngineEffect {
        self.handle_input(InputEvent::PointerDown { button, x, y })
    }

    pub fn on_mouse_move(&mut self, x: f64, y: f64) -> EngineEffect {
        self.handle_input(InputEvent::PointerMove { x, y })
    }

    pub fn on_mouse_up(&mut self, button: PointerButton) -> EngineEffect {
        self.handle_input(InputEvent::PointerUp { button })
    }
}
