use super::*;
use crate::catalog::templates::default_template;
use crate::compose::{ViewState, render};
use crate::model::record::DataRecord;

const RED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="5" viewBox="0 0 10 5"><rect width="10" height="5" fill="#ff0000"/></svg>"##;

#[test]
fn raster_size_follows_scale() {
    let cap = SvgCapture::new(2.0, &[]).unwrap();
    let img = cap.rasterize_svg(RED).unwrap();
    assert_eq!((img.width, img.height), (20, 10));
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(19, 9), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(20, 0), None);
    assert!(img.is_opaque());
}

#[test]
fn output_is_straight_alpha() {
    let svg = RED.replace("fill=\"#ff0000\"", "fill=\"#ff0000\" fill-opacity=\"0.5\"");
    let img = SvgCapture::new(1.0, &[]).unwrap().rasterize_svg(&svg).unwrap();
    let [r, g, b, a] = img.pixel(3, 3).unwrap();
    assert!(r >= 250, "red channel {r} still premultiplied");
    assert_eq!((g, b), (0, 0));
    assert!((120..=135).contains(&a));
}

#[test]
fn rejects_bad_scale_and_bad_svg() {
    assert!(SvgCapture::new(0.0, &[]).is_err());
    assert!(SvgCapture::new(f64::NAN, &[]).is_err());
    let err = SvgCapture::new(1.0, &[]).unwrap().rasterize_svg("<nope").unwrap_err();
    assert!(matches!(err, CardError::Export(_)));
}

#[test]
fn captures_a_composed_card() {
    let comp = render(&DataRecord::english(), default_template(), ViewState::thumbnail());
    let img = SvgCapture::new(1.0, &[]).unwrap().capture(&comp).unwrap();
    assert_eq!((img.width, img.height), (530, 750));
    assert!(img.is_opaque());
}

#[test]
fn raster_new_checks_length() {
    assert!(RasterImage::new(2, 2, vec![0; 16]).is_ok());
    assert!(RasterImage::new(2, 2, vec![0; 15]).is_err());
    assert!(RasterImage::new(0, 2, Vec::new()).is_err());
}

#[test]
fn split_alpha_planes() {
    let img = RasterImage::new(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let (rgb, alpha) = img.split_alpha();
    assert_eq!(rgb, vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(alpha, vec![4, 8]);
}

#[test]
fn png_round_trips_pixels() {
    let img = RasterImage::new(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 128]).unwrap();
    let png = encode_png(&img).unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    let back = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.into_raw(), img.rgba8);
}

#[test]
fn unreadable_font_files_are_skipped() {
    let dir = std::env::temp_dir().join(format!("cardsmith-fonts-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("broken.ttf"), b"not a font").unwrap();
    std::fs::write(dir.join("notes.txt"), b"ignored").unwrap();

    let mut db = usvg::fontdb::Database::new();
    load_fonts_from_dir(&mut db, &dir);
    assert_eq!(db.len(), 0);

    let capture = SvgCapture::new(1.0, &[dir]).unwrap();
    let img = capture
        .rasterize_svg(r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#)
        .unwrap();
    assert_eq!((img.width, img.height), (4, 4));
}
