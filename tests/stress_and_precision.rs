use pxa_picker::app::engine::PickerEngine;
use pxa_picker::app::settings::PickerSettings;
use pxa_picker::core::color::Color;
use pxa_picker::core::layer::Layer;
use pxa_picker::core::store::PixelStore;
use pxa_picker::tools::color_picker::AfterSelect;
use pxa_picker::tools::sampler::{SampleSize, SampleSource};
use pxa_picker::tools::tool_trait::{PointerButton, ToolType};
use crc32fast::Hasher;

fn noisy_store(width: u32, height: u32) -> PixelStore {
    let mut store = PixelStore::new(width, height);
    let mut seed = 0x2545_f491u32;
    for id in ["base", "glaze"] {
        let mut layer = Layer::new(id.into(), id.into(), width, height);
        for y in 0..height {
            for x in 0..width {
                seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
                let [r, g, b, a] = seed.to_le_bytes();
                layer.set_color(x, y, Color::new(r, g, b, a)).unwrap();
            }
        }
        store.add_layer(layer);
    }
    store.get_layer_mut("glaze").unwrap().opacity = 180;
    store
}

fn picked_colors_hash(engine: &mut PickerEngine, path: &[(f64, f64)]) -> u32 {
    let mut hasher = Hasher::new();
    engine.on_mouse_down(PointerButton::Primary, path[0].0, path[0].1);
    for &(x, y) in &path[1..] {
        engine.on_mouse_move(x, y);
        let c = engine.palette().primary;
        hasher.update(&[c.r, c.g, c.b, c.a]);
    }
    engine.on_mouse_up(PointerButton::Primary);
    hasher.finalize()
}

fn drag_path() -> Vec<(f64, f64)> {
    // Sweeps across all four edges and beyond them.
    let mut path = Vec::new();
    for i in -3..=67 {
        path.push((i as f64 * 0.97, 0.0));
    }
    for i in -3..=67 {
        path.push((63.5, i as f64));
    }
    for i in 0..64 {
        path.push((i as f64 + 0.25, i as f64 + 0.75));
    }
    path
}

#[test]
fn test_replay_is_deterministic() {
    let path = drag_path();
    for size in SampleSize::ALL {
        for source in [SampleSource::Layer, SampleSource::Image] {
            let mut hashes = Vec::new();
            for _ in 0..2 {
                let mut engine = PickerEngine::with_store(noisy_store(64, 64));
                engine.set_tool(ToolType::ColorPicker);
                engine.apply_settings(PickerSettings { sample_size: size, sample_source: source, after_select: AfterSelect::None });
                hashes.push(picked_colors_hash(&mut engine, &path));
            }
            assert_eq!(hashes[0], hashes[1], "{size:?} {source:?}");
        }
    }
}

#[test]
fn test_nine_by_nine_corner_sweep_never_panics() {
    let mut engine = PickerEngine::with_store(noisy_store(5, 5));
    engine.set_tool(ToolType::ColorPicker);
    engine.apply_settings(PickerSettings { sample_size: SampleSize::Region9, sample_source: SampleSource::Image, after_select: AfterSelect::None });

    engine.on_mouse_down(PointerButton::Primary, 0.0, 0.0);
    for y in -2..8 {
        for x in -2..8 {
            engine.on_mouse_move(x as f64, y as f64);
        }
    }
    engine.on_mouse_up(PointerButton::Primary);
    // 9x9 on a 5x5 image from the center covers everything.
    engine.on_mouse_down(PointerButton::Primary, 2.0, 2.0);
    let whole = engine.palette().primary;
    engine.on_mouse_move(2.9, 2.9);
    assert_eq!(engine.palette().primary, whole);
}

#[test]
fn test_opaque_layer_round_trips_exactly() {
    let mut store = PixelStore::new(16, 16);
    let mut layer = Layer::new("L".into(), "L".into(), 16, 16);
    for y in 0..16 {
        for x in 0..16 {
            layer.set_color(x, y, Color::new((x * 16) as u8, (y * 16) as u8, 77, 255)).unwrap();
        }
    }
    store.add_layer(layer);
    let mut engine = PickerEngine::with_store(store);
    engine.set_tool(ToolType::ColorPicker);

    for y in 0..16 {
        for x in 0..16 {
            engine.on_mouse_down(PointerButton::Primary, x as f64, y as f64);
            engine.on_mouse_up(PointerButton::Primary);
            assert_eq!(engine.palette().primary, Color::new((x * 16) as u8, (y * 16) as u8, 77, 255));
        }
    }
}
