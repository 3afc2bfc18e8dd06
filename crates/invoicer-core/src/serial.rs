//! # Serial Numbers
//!
//! Invoice serial numbers are built from a series, a sequence number and a
//! delimiter, laid out by a format pattern:
//!
//! ```text
//! format   = "{SERIES}{DELIMITER}{SEQUENCE}"
//! series   = "AA", delimiter = ".", sequence = 42, padding = 5
//!          → "AA.00042"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialNumber {
    pub series: String,
    pub sequence: u64,
    /// Minimum number of digits of the rendered sequence.
    pub sequence_padding: usize,
    pub delimiter: String,
    pub format: String,
}

impl Default for SerialNumber {
    fn default() -> Self {
        SerialNumber {
            series: "AA".to_string(),
            sequence: 1,
            sequence_padding: 5,
            delimiter: ".".to_string(),
            format: "{SERIES}{DELIMITER}{SEQUENCE}".to_string(),
        }
    }
}

impl SerialNumber {
    /// Renders the serial number.
    ///
    /// ## Example
    /// ```rust
    /// use invoicer_core::SerialNumber;
    ///
    /// let serial = SerialNumber { sequence: 42, ..SerialNumber::default() };
    /// assert_eq!(serial.render(), "AA.00042");
    /// ```
    pub fn render(&self) -> String {
        let sequence = format!("{:0width$}", self.sequence, width = self.sequence_padding);

        self.format
            .replace("{SERIES}", &self.series)
            .replace("{DELIMITER}", &self.delimiter)
            .replace("{SEQUENCE}", &sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render() {
        assert_eq!(SerialNumber::default().render(), "AA.00001");
    }

    #[test]
    fn test_custom_format() {
        let serial = SerialNumber {
            series: "INV".into(),
            sequence: 123,
            sequence_padding: 0,
            delimiter: "-".into(),
            format: "{SEQUENCE}{DELIMITER}{SERIES}".into(),
        };
        assert_eq!(serial.render(), "123-INV");
    }

    #[test]
    fn test_sequence_wider_than_padding() {
        let serial = SerialNumber {
            sequence: 1234567,
            sequence_padding: 3,
            ..SerialNumber::default()
        };
        assert_eq!(serial.render(), "AA.1234567");
    }
}
