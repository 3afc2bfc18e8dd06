//! # Collaborator Traits
//!
//! The seams through which the pure core reaches side effects. The core
//! never opens files or writes output; the embedding layer implements
//! these traits.
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────────────┐
//! │ Invoice (core)       │      │ invoicer-render              │
//! │                      │      │                              │
//! │ render() ───────────────────► Renderer      (JsonRenderer) │
//! │ logo_data_uri() ────────────► LogoSource    (FsLogoSource) │
//! │ total_amount_in_words() ────► AmountInWords (EnglishWords) │
//! └──────────────────────┘      └──────────────────────────────┘
//! ```

use std::io;

use crate::error::CoreResult;
use crate::snapshot::InvoiceSnapshot;

/// Turns a fully resolved invoice snapshot into output.
pub trait Renderer {
    type Output;

    fn render(&self, snapshot: &InvoiceSnapshot) -> CoreResult<Self::Output>;
}

/// Reads logo image bytes.
pub trait LogoSource {
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Spells whole numbers out in words ("one hundred twenty-three").
///
/// `u128` holds the integer part of any `Decimal`.
pub trait AmountInWords {
    fn spell_out(&self, value: u128) -> String;
}
