//! # Currency Settings
//!
//! Currency code, symbol, precision and display format of an invoice.
//! `decimals` is the precision every calculation stage rounds to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing;

/// Currency settings for one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    /// ISO 4217 code, as written on the document ("eur", "USD").
    pub code: String,
    /// Name of the minor unit used when spelling amounts ("ct.").
    pub fraction: String,
    pub symbol: String,
    /// Minor-unit precision; every calculation stage rounds to this.
    pub decimals: u32,
    pub decimal_point: String,
    pub thousands_separator: String,
    /// Display pattern with `{VALUE}`, `{SYMBOL}` and `{CODE}` placeholders.
    pub format: String,
}

impl Default for Currency {
    fn default() -> Self {
        Currency {
            code: "eur".to_string(),
            fraction: "ct.".to_string(),
            symbol: "€".to_string(),
            decimals: 2,
            decimal_point: ".".to_string(),
            thousands_separator: String::new(),
            format: "{VALUE} {SYMBOL}".to_string(),
        }
    }
}

impl Currency {
    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use invoicer_core::Currency;
    /// use rust_decimal::Decimal;
    ///
    /// let usd = Currency {
    ///     code: "USD".into(),
    ///     symbol: "$".into(),
    ///     thousands_separator: ",".into(),
    ///     format: "{SYMBOL}{VALUE}".into(),
    ///     ..Currency::default()
    /// };
    /// assert_eq!(usd.format_amount(Decimal::new(123456789, 2)), "$1,234,567.89");
    /// ```
    pub fn format_amount(&self, amount: Decimal) -> String {
        let value = self.format_number(amount);

        self.format
            .replace("{VALUE}", &value)
            .replace("{SYMBOL}", &self.symbol)
            .replace("{CODE}", &self.code)
    }

    /// Formats the bare number: rounded, grouped, with the decimal point.
    pub fn format_number(&self, amount: Decimal) -> String {
        let rounded = pricing::round(amount, self.decimals);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        // Fixed-width rendering pads the fraction with zeros.
        let plain = format!("{:.*}", self.decimals as usize, rounded.abs());
        let (whole, frac) = match plain.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (plain.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(whole, &self.thousands_separator));
        if let Some(frac) = frac {
            out.push_str(&self.decimal_point);
            out.push_str(frac);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let head = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - head) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
