use super::*;

#[test]
fn test_geom_line() {
    let mut p = Vec::new();
    Geometry::bresenham_line(0, 0, 2, 2, |x, y| p.push((x, y)));
    assert_eq!(p, vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_geom_point() {
    let mut p = Vec::new();
    Geometry::bresenham_line(1, 1, 1, 1, |x, y| p.push((x, y)));
    assert_eq!(p.len(), 1);
}

#[test]
fn test_point_truncates_toward_zero() {
    assert_eq!(PointD::new(2.9, 3.1).to_pixel(), (2, 3));
    assert_eq!(PointD::new(-0.5, 0.5).to_pixel(), (0, 0));
}

#[test]
fn test_rect_inclusive_edges() {
    let r = Rect::new(1, 2, 3, 4);
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (1, 2, 3, 5));
    assert_eq!(r.area(), 12);
}

#[test]
fn test_rect_intersect_clamps_corner() {
    let r = Rect::new(-1, -1, 3, 3).intersect(&Rect::from_size(10, 10));
    assert_eq!(r, Rect::new(0, 0, 2, 2));
}

#[test]
fn test_rect_intersect_far_corner() {
    let r = Rect::new(8, 8, 3, 3).intersect(&Rect::from_size(10, 10));
    assert_eq!(r, Rect::new(8, 8, 2, 2));
}

#[test]
fn test_rect_intersect_disjoint_is_empty() {
    let r = Rect::new(20, 20, 3, 3).intersect(&Rect::from_size(10, 10));
    assert!(r.is_empty());
    assert_eq!(r.area(), 0);
    assert!(r.width >= 0 && r.height >= 0);
}

#[test]
fn test_rect_contains() {
    let r = Rect::from_size(4, 4);
    assert!(r.contains(0, 0));
    assert!(r.contains(3, 3));
    assert!(!r.contains(4, 0));
    assert!(!r.contains(0, -1));
}
