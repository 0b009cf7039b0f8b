use std::fmt::Write as _;
use std::io::Write as _;

use miniz_oxide::deflate::compress_to_vec_zlib;

use crate::export::capture::RasterImage;
use crate::foundation::error::CardResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// A packaged document ready to be written to disk.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedDocument {
    pub bytes: Vec<u8>,
    pub page_width: f64,
    pub page_height: f64,
    pub orientation: Orientation,
}

/// Wraps a raster into a paged document.
pub trait DocumentPackager {
    fn package(&self, image: &RasterImage) -> CardResult<PagedDocument>;
}

/// Single-page PDF whose MediaBox equals the raster's pixel size.
#[derive(Clone, Copy, Debug)]
pub struct PdfPackager {
    /// zlib level passed to the deflater, 0 to 10.
    pub level: u8,
}

impl Default for PdfPackager {
    fn default() -> Self {
        Self { level: 6 }
    }
}

struct PdfObject {
    data: Vec<u8>,
}

impl DocumentPackager for PdfPackager {
    #[tracing::instrument(level = "info", skip_all, fields(width = image.width, height = image.height))]
    fn package(&self, image: &RasterImage) -> CardResult<PagedDocument> {
        let (w, h) = (f64::from(image.width), f64::from(image.height));
        let (rgb, alpha) = image.split_alpha();

        // Object 0 is the free-list head; ids below match vector indices.
        let mut objects: Vec<PdfObject> = vec![PdfObject { data: Vec::new() }];
        let catalog = push(&mut objects, b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
        let pages = push(&mut objects, b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec());
        let page = push(&mut objects, Vec::new());
        let content = {
            let mut ops = String::new();
            let _ = write!(ops, "q {w} 0 0 {h} 0 0 cm /Im0 Do Q");
            let compressed = compress_to_vec_zlib(ops.as_bytes(), self.level);
            push(&mut objects, stream("/Filter /FlateDecode", &compressed))
        };
        let smask = (!image.is_opaque()).then(|| {
            let compressed = compress_to_vec_zlib(&alpha, self.level);
            let dict = format!(
                "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceGray \
                 /BitsPerComponent 8 /Filter /FlateDecode",
                image.width, image.height
            );
            push(&mut objects, stream(&dict, &compressed))
        });
        let xobject = {
            let compressed = compress_to_vec_zlib(&rgb, self.level);
            let smask_ref = smask
                .map(|id| format!(" /SMask {id} 0 R"))
                .unwrap_or_default();
            let dict = format!(
                "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB \
                 /BitsPerComponent 8 /Filter /FlateDecode{smask_ref}",
                image.width, image.height
            );
            push(&mut objects, stream(&dict, &compressed))
        };
        objects[page].data = format!(
            "<< /Type /Page /Parent {pages} 0 R /MediaBox [0 0 {w} {h}] \
             /Resources << /XObject << /Im0 {xobject} 0 R >> >> /Contents {content} 0 R >>"
        )
        .into_bytes();

        let bytes = serialize(&objects, catalog);
        tracing::debug!(bytes = bytes.len(), "packaged pdf");
        Ok(PagedDocument {
            bytes,
            page_width: w,
            page_height: h,
            orientation: Orientation::of(w, h),
        })
    }
}

fn push(objects: &mut Vec<PdfObject>, data: Vec<u8>) -> usize {
    objects.push(PdfObject { data });
    objects.len() - 1
}

fn stream(dict: &str, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + dict.len() + 48);
    let _ = write!(out, "<< {dict} /Length {} >>\nstream\n", body.len());
    out.extend_from_slice(body);
    out.extend_from_slice(b"\nendstream");
    out
}

fn serialize(objects: &[PdfObject], root: usize) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    let mut offsets = vec![0usize; objects.len()];
    out.extend_from_slice(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n");
    for (i, obj) in objects.iter().enumerate().skip(1) {
        offsets[i] = out.len();
        let _ = write!(out, "{i} 0 obj\n");
        out.extend_from_slice(&obj.data);
        out.extend_from_slice(b"\nendobj\n\n");
    }
    let xref = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len());
    for off in offsets.iter().skip(1) {
        let _ = write!(out, "{off:010} 00000 n \n");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root {root} 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len()
    );
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/pdf.rs"]
mod tests;
