use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::compose::Composition;
use crate::foundation::config::EditorConfig;
use crate::foundation::error::{CardError, CardResult};

/// Largest raster edge the capture will allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> CardResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || rgba8.len() != expected {
            return Err(CardError::export(format!(
                "raster {width}x{height} needs {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba8.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Split into packed RGB and a separate alpha plane.
    pub fn split_alpha(&self) -> (Vec<u8>, Vec<u8>) {
        let n = (self.width as usize) * (self.height as usize);
        let mut rgb = Vec::with_capacity(n * 3);
        let mut alpha = Vec::with_capacity(n);
        for px in self.rgba8.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
            alpha.push(px[3]);
        }
        (rgb, alpha)
    }
}

/// Encode a raster as PNG bytes.
pub fn encode_png(image: &RasterImage) -> CardResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut buf),
        &image.rgba8,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")
    .map_err(|e| CardError::export(format!("{e:#}")))?;
    Ok(buf)
}

/// Turns a composed card into pixels.
pub trait CaptureService {
    fn capture(&self, composition: &Composition) -> CardResult<RasterImage>;
}

/// Rasterizes the composition's SVG with usvg/resvg at a fixed device scale.
#[derive(Clone)]
pub struct SvgCapture {
    scale: f64,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for SvgCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgCapture")
            .field("scale", &self.scale)
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl SvgCapture {
    pub fn new(scale: f64, font_dirs: &[PathBuf]) -> CardResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CardError::validation("capture scale must be > 0"));
        }
        Ok(Self {
            scale,
            fontdb: build_fontdb(font_dirs),
        })
    }

    pub fn from_config(cfg: &EditorConfig) -> CardResult<Self> {
        Self::new(cfg.capture_scale, &cfg.font_dirs)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[tracing::instrument(level = "debug", skip(self, svg), fields(bytes = svg.len()))]
    pub fn rasterize_svg(&self, svg: &str) -> CardResult<RasterImage> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .context("parse card svg")
            .map_err(|e| CardError::export(format!("{e:#}")))?;

        let size = tree.size();
        let width = to_px(f64::from(size.width()) * self.scale)?;
        let height = to_px(f64::from(size.height()) * self.scale)?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::export("failed to allocate capture pixmap"))?;
        let s = self.scale as f32;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(s, s),
            &mut pixmap.as_mut(),
        );

        let mut rgba8 = pixmap.take();
        demultiply_rgba8_in_place(&mut rgba8);
        tracing::debug!(width, height, "captured card raster");
        RasterImage::new(width, height, rgba8)
    }
}

impl Default for SvgCapture {
    fn default() -> Self {
        let cfg = EditorConfig::default();
        Self {
            scale: cfg.capture_scale,
            fontdb: build_fontdb(&cfg.font_dirs),
        }
    }
}

impl CaptureService for SvgCapture {
    #[tracing::instrument(level = "info", skip_all, fields(scale = self.scale))]
    fn capture(&self, composition: &Composition) -> CardResult<RasterImage> {
        self.rasterize_svg(&composition.to_svg())
    }
}

fn to_px(v: f64) -> CardResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(CardError::export("card has invalid width/height"));
    }
    let px = v.ceil() as u64;
    if px > u64::from(MAX_RASTER_DIM) {
        return Err(CardError::export(format!(
            "capture size too large: {px}px (max {MAX_RASTER_DIM})"
        )));
    }
    Ok((px as u32).max(1))
}

fn build_fontdb(font_dirs: &[PathBuf]) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    for dir in font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    db.load_system_fonts();
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory not readable");
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if path.is_file() && matches!(ext.as_str(), "ttf" | "otf" | "ttc") {
            if let Err(e) = db.load_font_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable font file");
            }
        }
    }
}

/// resvg renders premultiplied; exports want straight alpha.
fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/capture.rs"]
mod tests;
