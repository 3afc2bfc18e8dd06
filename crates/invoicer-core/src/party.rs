//! # Parties
//!
//! Buyers and sellers are consumed through the [`Party`] capability. The
//! engine only needs a name, a few optional identifying lines and free-form
//! custom fields; callers may plug in their own customer types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimal contract for a buyer or seller.
pub trait Party: fmt::Debug + Send + Sync {
    /// Display name of the party.
    fn name(&self) -> &str;

    fn address(&self) -> Option<&str> {
        None
    }

    /// Customer or supplier code.
    fn code(&self) -> Option<&str> {
        None
    }

    /// VAT / tax registration number.
    fn vat(&self) -> Option<&str> {
        None
    }

    fn phone(&self) -> Option<&str> {
        None
    }

    /// Additional label/value pairs shown under the party block.
    fn custom_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Plain party value with builder-style setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn vat(mut self, vat: impl Into<String>) -> Self {
        self.vat = Some(vat.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn custom_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.insert(label.into(), value.into());
        self
    }
}

impl Party for Contact {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn vat(&self) -> Option<&str> {
        self.vat.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    fn custom_fields(&self) -> BTreeMap<String, String> {
        self.custom_fields.clone()
    }
}
