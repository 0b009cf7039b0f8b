use super::*;
use crate::catalog::templates::default_template;
use crate::compose::{ViewState, render};
use crate::export::pdf::PdfPackager;

struct Gate(PaymentOutcome, Vec<PaymentRequest>);

impl PaymentGate for Gate {
    fn request(&mut self, request: &PaymentRequest) -> PaymentOutcome {
        self.1.push(request.clone());
        self.0.clone()
    }
}

struct FixedCapture(bool);

impl CaptureService for FixedCapture {
    fn capture(&self, _: &Composition) -> CardResult<RasterImage> {
        if self.0 {
            RasterImage::new(3, 2, [9u8, 9, 9, 255].repeat(6))
        } else {
            Err(CardError::Other(anyhow::anyhow!("canvas tainted")))
        }
    }
}

#[derive(Default)]
struct Printer(Vec<usize>);

impl PrintSink for Printer {
    fn print(&mut self, png: &[u8], _: &RasterImage) -> CardResult<()> {
        self.0.push(png.len());
        Ok(())
    }
}

fn card() -> (DataRecord, Composition) {
    let r = DataRecord::english();
    let c = render(&r, default_template(), ViewState::thumbnail());
    (r, c)
}

fn run(
    action: ExportAction,
    gate: &mut Gate,
    bypass: bool,
    capture_ok: bool,
    printer: &mut Printer,
) -> CardResult<ExportArtifact> {
    let (r, c) = card();
    let mut confirm = |_: &str| bypass;
    run_export(
        action,
        &c,
        &r,
        ExportPorts {
            gate,
            confirm: &mut confirm,
            capture: &FixedCapture(capture_ok),
            packager: &PdfPackager::default(),
            printer,
        },
    )
}

#[test]
fn paid_document_export_is_named_after_the_bride() {
    let mut gate = Gate(PaymentOutcome::Paid, Vec::new());
    let out = run(ExportAction::Document, &mut gate, false, true, &mut Printer::default()).unwrap();
    let ExportArtifact::Document { file_name, document } = out else {
        panic!("expected a document");
    };
    assert_eq!(file_name, "Ananya-wedding-card.pdf");
    assert_eq!((document.page_width, document.page_height), (3.0, 2.0));

    let req = &gate.1[0];
    assert_eq!(req.amount_minor, 4900);
    assert_eq!(req.currency, "INR");
    assert_eq!(req.prefill_name, "Aditya");
}

#[test]
fn paid_image_export_is_png() {
    let mut gate = Gate(PaymentOutcome::Paid, Vec::new());
    let out = run(ExportAction::Image, &mut gate, false, true, &mut Printer::default()).unwrap();
    let ExportArtifact::Image { file_name, png } = out else {
        panic!("expected an image");
    };
    assert_eq!(file_name, "Ananya-wedding-card.png");
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn print_hands_png_to_the_sink() {
    let mut gate = Gate(PaymentOutcome::Paid, Vec::new());
    let mut printer = Printer::default();
    let out = run(ExportAction::Print, &mut gate, false, true, &mut printer).unwrap();
    assert_eq!(out, ExportArtifact::Printed);
    assert_eq!(printer.0.len(), 1);
}

#[test]
fn declined_payment_stops_the_export() {
    let mut gate = Gate(PaymentOutcome::Declined("card expired".into()), Vec::new());
    let mut printer = Printer::default();
    let err = run(ExportAction::Print, &mut gate, true, true, &mut printer).unwrap_err();
    assert!(matches!(err, CardError::Payment(ref m) if m.contains("card expired")));
    assert!(printer.0.is_empty());
}

#[test]
fn unavailable_gateway_asks_for_bypass() {
    let mut gate = Gate(PaymentOutcome::Unavailable, Vec::new());
    assert!(run(ExportAction::Image, &mut gate, true, true, &mut Printer::default()).is_ok());
    let err = run(ExportAction::Image, &mut gate, false, true, &mut Printer::default()).unwrap_err();
    assert!(matches!(err, CardError::Payment(_)));
}

#[test]
fn capture_failures_surface_as_export_errors() {
    let mut gate = Gate(PaymentOutcome::Paid, Vec::new());
    let err = run(ExportAction::Document, &mut gate, false, false, &mut Printer::default()).unwrap_err();
    assert!(matches!(err, CardError::Export(ref m) if m.contains("canvas tainted")));
}

#[test]
fn prefill_falls_back_when_groom_name_is_blank() {
    let mut r = DataRecord::english();
    r.groom_name = "  ".into();
    let req = PaymentRequest::for_export(ExportAction::Print, &r);
    assert_eq!(req.prefill_name, "User Name");
}
