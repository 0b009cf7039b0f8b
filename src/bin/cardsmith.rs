use std::path::{Path, PathBuf};

use anyhow::Context as _;
use cardsmith::catalog::templates::{Category, resolve};
use cardsmith::persist::{DRAFT_VERSION, Draft, FileSlot, save_draft};
use cardsmith::{
    DataRecord, DocumentPackager as _, EditorConfig, Language, PdfPackager, SvgCapture,
    Template, ViewState, catalog, default_template, encode_png, find_template, render,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    /// Editor config JSON (capture scale, font dirs, ...).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a draft to SVG, PNG or PDF.
    Render(RenderArgs),
    /// List catalog templates.
    Templates(TemplatesArgs),
    /// Write a preset draft to start from.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Draft JSON (`{version, details, templateId}`) or a bare record. Defaults to the
    /// Marathi preset.
    #[arg(long)]
    draft: Option<PathBuf>,

    /// Template id; overrides the one stored in the draft.
    #[arg(long)]
    template: Option<String>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Capture device scale for raster outputs; overrides the config.
    #[arg(long)]
    scale: Option<f64>,
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Only list one category, e.g. `royal` or `photo-cards`.
    #[arg(long)]
    category: Option<String>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Output draft path.
    #[arg(long)]
    out: PathBuf,

    /// Use the English preset instead of Marathi.
    #[arg(long)]
    english: bool,

    /// Template id stored in the draft.
    #[arg(long)]
    template: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
    Pdf,
}

impl Format {
    fn infer(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("png") => Format::Png,
            Some("pdf") => Format::Pdf,
            _ => Format::Svg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EditorConfig::default(),
    };
    match cli.cmd {
        Command::Render(args) => cmd_render(args, &cfg),
        Command::Templates(args) => cmd_templates(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_draft(path: &Path) -> anyhow::Result<(DataRecord, &'static Template)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read draft '{}'", path.display()))?;
    if let Ok(draft) = serde_json::from_str::<Draft>(&raw) {
        anyhow::ensure!(
            draft.version == DRAFT_VERSION,
            "unsupported draft version {}",
            draft.version
        );
        return Ok((draft.details, resolve(&draft.template_id)));
    }
    let record: DataRecord =
        serde_json::from_str(&raw).with_context(|| "parse draft JSON")?;
    Ok((record, default_template()))
}

fn pick_template(id: &str) -> anyhow::Result<&'static Template> {
    find_template(id).with_context(|| format!("unknown template '{id}'"))
}

fn cmd_render(args: RenderArgs, cfg: &EditorConfig) -> anyhow::Result<()> {
    let (record, stored) = match &args.draft {
        Some(path) => read_draft(path)?,
        None => (DataRecord::marathi(), default_template()),
    };
    let template = match &args.template {
        Some(id) => pick_template(id)?,
        None => stored,
    };
    let composition = render(&record, template, ViewState::thumbnail());
    let format = args.format.unwrap_or_else(|| Format::infer(&args.out));

    let bytes = match format {
        Format::Svg => composition.to_svg().into_bytes(),
        Format::Png | Format::Pdf => {
            let capture = SvgCapture::new(args.scale.unwrap_or(cfg.capture_scale), &cfg.font_dirs)?;
            let raster = capture.rasterize_svg(&composition.to_svg())?;
            if format == Format::Png {
                encode_png(&raster)?
            } else {
                PdfPackager::default().package(&raster)?.bytes
            }
        }
    };

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    let category = match &args.category {
        Some(c) => Some(Category::parse(c).with_context(|| format!("unknown category '{c}'"))?),
        None => None,
    };
    for t in catalog()
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
    {
        println!(
            "{}\t{}\t{}\t{}{}",
            t.id,
            t.category.label(),
            t.layout.as_str(),
            t.name,
            if t.has_photo { "\t(photo)" } else { "" }
        );
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let lang = if args.english {
        Language::English
    } else {
        Language::Marathi
    };
    let template = match &args.template {
        Some(id) => pick_template(id)?,
        None => default_template(),
    };
    let mut slot = FileSlot::new(&args.out);
    save_draft(&mut slot, &DataRecord::preset(lang), template)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
