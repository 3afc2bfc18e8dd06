//! # invoicer-render: Side Effects Around the Core
//!
//! Implements the collaborator traits of `invoicer-core` and owns every
//! interaction with the outside world.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  invoices.toml ──► InvoiceConfig ──┐                                   │
//! │  INVOICER_*    ────────────────────┤                                   │
//! │                                    ▼                                    │
//! │  draft.json ──► InvoiceDraft ──► InvoiceBuilder ──► Invoice            │
//! │                                                       │                 │
//! │                                   prepare() + snapshot │                │
//! │                                                       ▼                 │
//! │                FsLogoSource ──► logo data URI ──► JsonRenderer ──► out │
//! │                EnglishWords ──► total in words                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod draft;
pub mod error;
pub mod json;
pub mod logo;
pub mod telemetry;
pub mod words;

pub use config::InvoiceConfig;
pub use draft::InvoiceDraft;
pub use error::{RenderError, RenderResult};
pub use json::JsonRenderer;
pub use logo::FsLogoSource;
pub use telemetry::init_tracing;
pub use words::EnglishWords;
