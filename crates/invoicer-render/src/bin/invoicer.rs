//! # invoicer
//!
//! Renders a JSON invoice draft into a JSON document.
//!
//! ```text
//! invoicer draft.json                       # print to stdout
//! invoicer draft.json --out invoice.json    # write to a file
//! invoicer draft.json --config invoices.toml
//! ```

use std::path::PathBuf;

use clap::Parser;
use invoicer_render::{
    init_tracing, EnglishWords, FsLogoSource, InvoiceConfig, InvoiceDraft, JsonRenderer,
    RenderResult,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "invoicer", version, about = "Render an invoice draft")]
struct Opts {
    /// JSON draft describing parties, items and overrides
    draft: PathBuf,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    init_tracing();

    let opts = Opts::parse();
    if let Err(e) = run(opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> RenderResult<()> {
    let config = InvoiceConfig::load(opts.config)?;

    let contents = std::fs::read_to_string(&opts.draft)?;
    let draft = InvoiceDraft::from_json(&contents)?;

    // Logo paths in a draft are relative to the draft itself
    let logos = match opts.draft.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => FsLogoSource::with_base_dir(dir),
        _ => FsLogoSource::new(),
    };

    let renderer = if opts.compact {
        JsonRenderer::new()
    } else {
        JsonRenderer::pretty()
    };

    let mut invoice = draft.into_builder(&config)?.build();
    let rendered = invoice.render_with_logo(&renderer, &logos)?;
    let in_words = invoice.total_amount_in_words(&EnglishWords)?;

    info!(
        invoice = %invoice.name(),
        serial = %invoice.serial_number(),
        in_words = %in_words,
        "Invoice rendered"
    );

    match opts.out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!(?path, "Written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
