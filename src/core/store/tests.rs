use super::*;
use crate::core::color::Color;
use crate::core::layer::Layer;
use crate::tools::geometry::PointD;

#[test]
fn test_store_add_layer() {
    let mut s = PixelStore::new(10, 10);
    s.add_layer(Layer::new("L".into(), "L".into(), 10, 10));
    assert_eq!(s.layers.len(), 1);
    assert_eq!(s.composite_cache.len(), 100);
}

#[test]
fn test_store_active_id_logic() {
    let mut s = PixelStore::new(10, 10);
    s.add_layer(Layer::new("1".into(), "1".into(), 10, 10));
    s.add_layer(Layer::new("2".into(), "2".into(), 10, 10));
    assert_eq!(s.active_layer_id, Some("1".into()));
    s.set_active_layer("2").unwrap();
    assert_eq!(s.active_layer().unwrap().id, "2");
    assert_eq!(s.set_active_layer("X"), Err(CoreError::LayerNotFound("X".into())));
}

#[test]
fn test_store_pixel_routing() {
    let mut s = PixelStore::new(10, 10);
    s.add_layer(Layer::new("L".into(), "L".into(), 10, 10));
    s.set_pixel("L", 0, 0, Color::new(1, 1, 1, 255).to_premultiplied()).unwrap();
    assert_eq!(s.get_pixel("L", 0, 0).unwrap().r, 1);
}

#[test]
fn test_store_invalid_id() {
    let mut s = PixelStore::new(10, 10);
    assert!(s.set_pixel("X", 0, 0, ColorBgra::TRANSPARENT).is_err());
    assert_eq!(s.active_layer_mut().err(), Some(CoreError::NoActiveLayer));
}

#[test]
fn test_store_visibility() {
    let mut s = PixelStore::new(10, 10);
    s.add_layer(Layer::new("L".into(), "L".into(), 10, 10));
    s.set_layer_visibility("L", false).unwrap();
    assert!(!s.get_layer("L").unwrap().visible);
}

#[test]
fn test_store_pick_target_reads_active_layer() {
    let mut s = PixelStore::new(4, 4);
    s.add_layer(Layer::new("a".into(), "a".into(), 4, 4));
    s.add_layer(Layer::new("b".into(), "b".into(), 4, 4));
    let red = Color::new(255, 0, 0, 255).to_premultiplied();
    s.set_pixel("b", 1, 1, red).unwrap();

    assert_eq!(s.layer_pixel(1, 1), ColorBgra::TRANSPARENT);
    s.set_active_layer("b").unwrap();
    assert_eq!(s.layer_pixel(1, 1), red);
    assert_eq!(s.layer_pixel(-1, 1), ColorBgra::TRANSPARENT);
    assert_eq!(s.layer_pixel(4, 1), ColorBgra::TRANSPARENT);
}

#[test]
fn test_store_composite_out_of_range() {
    let s = PixelStore::new(2, 2);
    assert_eq!(s.composited_pixel(5, 0), ColorBgra::TRANSPARENT);
    assert_eq!(s.composited_pixel(0, -3), ColorBgra::TRANSPARENT);
}

#[test]
fn test_store_contains_point() {
    let s = PixelStore::new(10, 5);
    assert!(s.contains_point(PointD::new(0.0, 0.0)));
    assert!(s.contains_point(PointD::new(9.99, 4.5)));
    assert!(!s.contains_point(PointD::new(10.0, 0.0)));
    assert!(!s.contains_point(PointD::new(-0.1, 2.0)));
    assert!(!s.contains_point(PointD::new(3.0, 5.0)));
}
