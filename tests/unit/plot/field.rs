use super::*;

fn frame() -> FieldFrame {
    let field = FieldConfig::default();
    FieldFrame::new(field, FieldFrame::canvas_for(&field).unwrap())
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9,
        "({}, {}) != ({x}, {y})",
        p.x,
        p.y
    );
}

#[test]
fn default_canvas_is_twenty_px_per_foot() {
    let f = frame();
    assert_eq!(f.canvas(), Canvas::new(1080, 540).unwrap());
    assert_eq!(f.scale(), (20.0, 20.0));
}

#[test]
fn field_corners_land_on_canvas_corners() {
    let f = frame();
    assert_point(f.to_canvas(Point::new(-13.5, 0.0)), 0.0, 0.0);
    assert_point(f.to_canvas(Point::new(-13.5, 54.0)), 1080.0, 0.0);
    assert_point(f.to_canvas(Point::new(13.5, 0.0)), 0.0, 540.0);
    assert_point(f.to_canvas(Point::new(13.5, 54.0)), 1080.0, 540.0);
    assert_point(f.to_canvas(Point::new(0.0, 27.0)), 540.0, 270.0);
}

#[test]
fn background_canvas_stretches_each_axis_independently() {
    let f = FieldFrame::new(FieldConfig::default(), Canvas::new(540, 540).unwrap());
    assert_eq!(f.scale(), (10.0, 20.0));
    assert_point(f.to_canvas(Point::new(1.0, 2.0)), 20.0, 290.0);
    assert_eq!(
        f.map_all(&[Point::new(1.0, 2.0)]),
        vec![f.to_canvas(Point::new(1.0, 2.0))]
    );
}
