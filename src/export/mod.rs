//! Export adapter: capture the composed card to pixels, encode it, and package it.
//!
//! - [`capture`]: the [`CaptureService`] port and the usvg/resvg [`SvgCapture`]
//! - [`pdf`]: single-page PDF packaging of a raster
//! - [`flow`]: the payment-gated print / image / document actions

pub mod capture;
pub mod flow;
pub mod pdf;

pub use capture::{CaptureService, RasterImage, SvgCapture, encode_png};
pub use flow::{
    BypassConfirm, ExportAction, ExportArtifact, ExportPorts, PaymentGate, PaymentOutcome,
    PaymentRequest, PrintSink, run_export,
};
pub use pdf::{DocumentPackager, Orientation, PagedDocument, PdfPackager};
