use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(1080, 540).unwrap();
    assert_eq!(c.aspect(), 2.0);
}

#[test]
fn rgba8_premultiplies_by_alpha() {
    assert_eq!(Rgba8::rgb(10, 20, 30).premultiplied(), [10, 20, 30, 255]);
    assert_eq!(Rgba8([200, 100, 0, 0]).premultiplied(), [0, 0, 0, 0]);
    assert_eq!(
        Rgba8([100, 50, 200, 128]).premultiplied(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn rgba8_serializes_as_array() {
    let json = serde_json::to_string(&Rgba8::rgb(178, 34, 34)).unwrap();
    assert_eq!(json, "[178,34,34,255]");
}
