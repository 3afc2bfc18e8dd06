//! English spelling of whole numbers.
//!
//! ```text
//! 0        → "zero"
//! 21       → "twenty-one"
//! 1_005    → "one thousand five"
//! 123_456  → "one hundred twenty-three thousand four hundred fifty-six"
//! ```

use invoicer_core::AmountInWords;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Largest first; u128::MAX is about 340 undecillion.
const SCALES: [(u128, &str); 12] = [
    (1_000_000_000_000_000_000_000_000_000_000_000_000, "undecillion"),
    (1_000_000_000_000_000_000_000_000_000_000_000, "decillion"),
    (1_000_000_000_000_000_000_000_000_000_000, "nonillion"),
    (1_000_000_000_000_000_000_000_000_000, "octillion"),
    (1_000_000_000_000_000_000_000_000, "septillion"),
    (1_000_000_000_000_000_000_000, "sextillion"),
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spells numbers in US English without "and".
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishWords;

impl AmountInWords for EnglishWords {
    fn spell_out(&self, value: u128) -> String {
        if value == 0 {
            return ONES[0].to_string();
        }

        let mut parts = Vec::new();
        let mut rest = value;

        for (scale, name) in SCALES {
            if rest >= scale {
                parts.push(format!("{} {}", below_thousand(rest / scale), name));
                rest %= scale;
            }
        }

        if rest > 0 {
            parts.push(below_thousand(rest));
        }

        parts.join(" ")
    }
}

/// Spells 1..=999.
fn below_thousand(n: u128) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut words = Vec::with_capacity(2);
    if hundreds > 0 {
        words.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        words.push(below_hundred(rest));
    }
    words.join(" ")
}

fn below_hundred(n: u128) -> String {
    let n = n as usize;
    if n < 20 {
        return ONES[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        ones => format!("{}-{}", TENS[n / 10], ONES[ones]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_core::{Contact, InvoiceBuilder, LineItem};
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_numbers() {
        let words = EnglishWords;
        assert_eq!(words.spell_out(0), "zero");
        assert_eq!(words.spell_out(7), "seven");
        assert_eq!(words.spell_out(13), "thirteen");
        assert_eq!(words.spell_out(40), "forty");
        assert_eq!(words.spell_out(99), "ninety-nine");
    }

    #[test]
    fn test_scales() {
        let words = EnglishWords;
        assert_eq!(words.spell_out(100), "one hundred");
        assert_eq!(words.spell_out(1_005), "one thousand five");
        assert_eq!(words.spell_out(20_000), "twenty thousand");
        assert_eq!(
            words.spell_out(123_456),
            "one hundred twenty-three thousand four hundred fifty-six"
        );
        assert_eq!(words.spell_out(2_000_000_001), "two billion one");
        assert!(words.spell_out(u64::MAX.into()).starts_with("eighteen quintillion"));
        assert_eq!(
            words.spell_out(18_446_744_073_709_551_616),
            "eighteen quintillion four hundred forty-six quadrillion seven hundred forty-four \
             trillion seventy-three billion seven hundred nine million five hundred fifty-one \
             thousand six hundred sixteen"
        );
        assert!(words.spell_out(u128::MAX).starts_with("three hundred forty undecillion"));
    }

    #[test]
    fn test_largest_decimal_total_in_words() {
        let mut invoice = InvoiceBuilder::new("Invoice")
            .buyer(Contact::new("Buyer"))
            .total_amount(rust_decimal::Decimal::MAX)
            .build();
        invoice.prepare().unwrap();

        let words = invoice.total_amount_in_words(&EnglishWords).unwrap();
        assert!(words.starts_with("Seventy-nine octillion two hundred twenty-eight septillion"));
        assert!(words.ends_with("EUR and zero ct."));
    }

    #[test]
    fn test_invoice_total_in_words() {
        let mut invoice = InvoiceBuilder::new("Invoice")
            .buyer(Contact::new("Buyer"))
            .add_item(LineItem::new("Service").price_per_unit(dec!(1250.07)))
            .build();
        invoice.prepare().unwrap();

        assert_eq!(
            invoice.total_amount_in_words(&EnglishWords).unwrap(),
            "One thousand two hundred fifty EUR and seven ct."
        );
    }
}
