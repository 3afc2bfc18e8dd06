//! JSON renderer.
//!
//! Serializes the snapshot as a JSON document. Templates downstream consume
//! this document; the TypeScript bindings generated from the snapshot
//! types describe its shape.

use invoicer_core::{CoreError, CoreResult, InvoiceSnapshot, Renderer};

/// Renders an invoice snapshot to a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty() -> Self {
        JsonRenderer { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    type Output = String;

    fn render(&self, snapshot: &InvoiceSnapshot) -> CoreResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        };
        rendered.map_err(|e| CoreError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_core::{Contact, InvoiceBuilder, LineItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_renders_compact_and_pretty() {
        let build = || {
            InvoiceBuilder::new("Invoice")
                .buyer(Contact::new("Buyer"))
                .add_item(LineItem::new("Service").price_per_unit(dec!(10)))
                .build()
        };

        let compact = build().render(&JsonRenderer::new()).unwrap();
        assert!(!compact.contains('\n'));

        let pretty = build().render(&JsonRenderer::pretty()).unwrap();
        assert!(pretty.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(value["buyer"]["name"], "Buyer");
        assert_eq!(value["items"][0]["title"], "Service");
    }
}
