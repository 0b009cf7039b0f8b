use std::io::Cursor;

use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, vec![200, 10, 10, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn png_bytes_become_a_data_uri() {
    let png = tiny_png();
    let uri = photo_data_uri_from_bytes(&png).unwrap();
    let b64 = uri.strip_prefix("data:image/png;base64,").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD.decode(b64).unwrap();
    assert_eq!(decoded, png);
}

#[test]
fn unknown_bytes_are_rejected() {
    let err = photo_data_uri_from_bytes(b"definitely not an image").unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn reads_from_disk() {
    let path = std::env::temp_dir().join(format!("cardsmith-photo-{}.png", std::process::id()));
    std::fs::write(&path, tiny_png()).unwrap();
    let uri = photo_data_uri(&path).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(photo_data_uri(&path), Err(CardError::Other(_))));
}
