// Host-side tests for texture decoding and viewport sizing.

use plane_core::*;
use std::io::Cursor;

fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x * 40) as u8, (y * 40) as u8, 200, 255])
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn decodes_png_to_rgba8() {
    let tex = TextureImage::decode(&encode_png(3, 2)).unwrap();
    assert_eq!((tex.width, tex.height), (3, 2));
    assert_eq!(tex.rgba.len(), 3 * 2 * 4);
    // Pixel (1, 1): rows run top to bottom
    let px = &tex.rgba[(1 * 3 + 1) * 4..][..4];
    assert_eq!(px, &[40, 40, 200, 255]);
}

#[test]
fn empty_bytes_are_rejected() {
    assert!(matches!(TextureImage::decode(&[]), Err(TextureError::Empty)));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = TextureImage::decode(b"definitely not an image").unwrap_err();
    assert!(matches!(err, TextureError::Decode(_)));
    assert!(err.to_string().contains("decode"));
}

#[test]
fn placeholder_is_single_white_texel() {
    let tex = TextureImage::placeholder();
    assert_eq!((tex.width, tex.height), (1, 1));
    assert_eq!(tex.rgba, vec![255, 255, 255, 255]);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    let vp = Viewport::new(1000.0, 500.0, 3.0);
    assert_eq!(vp.pixel_ratio, MAX_PIXEL_RATIO);
    assert_eq!(vp.physical_size(), (2000, 1000));
    assert_eq!(vp.aspect(), 2.0);
}

#[test]
fn invalid_pixel_ratio_falls_back_to_one() {
    assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).pixel_ratio, 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).pixel_ratio, 1.0);
}

#[test]
fn degenerate_viewport_stays_usable() {
    let vp = Viewport::new(0.0, 0.0, 1.0);
    assert_eq!(vp.aspect(), 1.0);
    assert_eq!(vp.physical_size(), (1, 1));
}

#[test]
fn native_viewport_matches_window_pixels() {
    let vp = Viewport::from_physical(3000, 1500, 2.5);
    assert_eq!((vp.width, vp.height), (1200.0, 600.0));
    assert_eq!(vp.physical_size(), (3000, 1500));
}
