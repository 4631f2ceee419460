use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = png_bytes(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn fully_transparent_pixels_zero_their_color() {
    let buf = png_bytes(2, 1, vec![255, 255, 255, 0, 10, 20, 30, 255]);
    let prepared = decode_image(&buf).unwrap();
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[0, 0, 0, 0, 10, 20, 30, 255]
    );
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_image(b"not an image").is_err());
}

#[test]
fn load_image_reads_from_disk() {
    let dir = std::path::PathBuf::from("target").join("unit_load_image");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("field.png");
    std::fs::write(&path, png_bytes(3, 2, vec![0; 3 * 2 * 4])).unwrap();

    let prepared = load_image(&path).unwrap();
    assert_eq!((prepared.width, prepared.height), (3, 2));

    let err = load_image(&dir.join("missing.png")).unwrap_err();
    assert!(err.to_string().contains("read image"), "{err}");
}
