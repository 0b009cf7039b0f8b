//! Payment-gated export: print, image download and document download.

use crate::compose::Composition;
use crate::export::capture::{CaptureService, RasterImage, encode_png};
use crate::export::pdf::{DocumentPackager, PagedDocument};
use crate::foundation::error::{CardError, CardResult};
use crate::model::record::DataRecord;

/// Price of one premium export, in paise.
pub const EXPORT_PRICE_MINOR: u32 = 4900;
pub const EXPORT_CURRENCY: &str = "INR";

pub const BYPASS_PROMPT: &str = "Payment gateway is not available.\n\n\
     Click OK to simulate a successful payment for demo purposes.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportAction {
    Print,
    Image,
    Document,
}

impl ExportAction {
    pub fn label(self) -> &'static str {
        match self {
            ExportAction::Print => "print",
            ExportAction::Image => "image",
            ExportAction::Document => "document",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportAction::Print | ExportAction::Image => "png",
            ExportAction::Document => "pdf",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount_minor: u32,
    pub currency: &'static str,
    pub description: String,
    /// Payer name shown prefilled in the checkout form.
    pub prefill_name: String,
}

impl PaymentRequest {
    pub fn for_export(action: ExportAction, record: &DataRecord) -> Self {
        let name = record.groom_name.trim();
        Self {
            amount_minor: EXPORT_PRICE_MINOR,
            currency: EXPORT_CURRENCY,
            description: format!("Premium wedding card export ({})", action.label()),
            prefill_name: if name.is_empty() {
                "User Name".to_owned()
            } else {
                name.to_owned()
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    Paid,
    Declined(String),
    /// The gateway could not be reached or is misconfigured.
    Unavailable,
}

pub trait PaymentGate {
    fn request(&mut self, request: &PaymentRequest) -> PaymentOutcome;
}

/// Asked whether to continue without payment when the gateway is unavailable.
/// A demo affordance; it does not protect anything.
pub trait BypassConfirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> BypassConfirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Receives the rendered card for printing.
pub trait PrintSink {
    fn print(&mut self, png: &[u8], image: &RasterImage) -> CardResult<()>;
}

/// What an approved export produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportArtifact {
    Printed,
    Image { file_name: String, png: Vec<u8> },
    Document {
        file_name: String,
        document: PagedDocument,
    },
}

/// Collaborators an export run talks to.
pub struct ExportPorts<'a> {
    pub gate: &'a mut dyn PaymentGate,
    pub confirm: &'a mut dyn BypassConfirm,
    pub capture: &'a dyn CaptureService,
    pub packager: &'a dyn DocumentPackager,
    pub printer: &'a mut dyn PrintSink,
}

/// `<stem>.<ext>` for an action.
pub fn export_file_name(record: &DataRecord, action: ExportAction) -> String {
    format!("{}.{}", record.export_stem(), action.extension())
}

/// Take payment, then capture and package. The record is never touched.
#[tracing::instrument(level = "info", skip(composition, record, ports), fields(action = action.label()))]
pub fn run_export(
    action: ExportAction,
    composition: &Composition,
    record: &DataRecord,
    ports: ExportPorts<'_>,
) -> CardResult<ExportArtifact> {
    let request = PaymentRequest::for_export(action, record);
    match ports.gate.request(&request) {
        PaymentOutcome::Paid => {}
        PaymentOutcome::Declined(reason) => {
            tracing::warn!(%reason, "payment declined");
            return Err(CardError::payment(format!("payment failed: {reason}")));
        }
        PaymentOutcome::Unavailable => {
            if !ports.confirm.confirm(BYPASS_PROMPT) {
                return Err(CardError::payment("payment gateway unavailable"));
            }
            tracing::warn!("payment gateway unavailable, continuing on demo bypass");
        }
    }

    produce(action, composition, record, ports).map_err(|e| {
        tracing::warn!(error = %e, "export failed");
        match e {
            CardError::Export(_) => e,
            other => CardError::export(other.to_string()),
        }
    })
}

fn produce(
    action: ExportAction,
    composition: &Composition,
    record: &DataRecord,
    ports: ExportPorts<'_>,
) -> CardResult<ExportArtifact> {
    let raster = ports.capture.capture(composition)?;
    match action {
        ExportAction::Print => {
            let png = encode_png(&raster)?;
            ports.printer.print(&png, &raster)?;
            Ok(ExportArtifact::Printed)
        }
        ExportAction::Image => Ok(ExportArtifact::Image {
            file_name: export_file_name(record, action),
            png: encode_png(&raster)?,
        }),
        ExportAction::Document => Ok(ExportArtifact::Document {
            file_name: export_file_name(record, action),
            document: ports.packager.package(&raster)?,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/flow.rs"]
mod tests;
