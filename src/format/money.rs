//! Configurable money rendering for reconciliation output

use bigdecimal::RoundingMode;
use serde::{Deserialize, Serialize};

use crate::traits::MoneyFormatter;
use crate::types::*;

/// Largest precision a format may request
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Plain money format: symbol placement, precision and separators
///
/// Deserializes from JSON with every field optional, falling back to
/// the US dollar layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    /// Currency symbol, e.g. `$` or `CHF`
    pub symbol: String,
    /// Whether the symbol precedes the number (`$10.00`) or follows it (`10.00 CHF`)
    pub symbol_first: bool,
    /// Digits after the decimal separator, rounded half-even, at most
    /// [`MAX_DECIMAL_PLACES`]
    pub decimal_places: u32,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_first: true,
            decimal_places: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl MoneyFormat {
    /// Preset format for a currency code
    ///
    /// Unknown codes print the code after the amount.
    pub fn for_currency(code: &str) -> Self {
        let base = Self::default();
        match code {
            "USD" => base,
            "EUR" => Self {
                symbol: "€".to_string(),
                ..base
            },
            "GBP" => Self {
                symbol: "£".to_string(),
                ..base
            },
            "INR" => Self {
                symbol: "₹".to_string(),
                ..base
            },
            "JPY" => Self {
                symbol: "¥".to_string(),
                decimal_places: 0,
                ..base
            },
            other => Self {
                symbol: other.to_string(),
                symbol_first: false,
                ..base
            },
        }
    }

    /// Load a format from a JSON object
    pub fn from_json(json: &str) -> ReconciliationResult<Self> {
        let format: Self =
            serde_json::from_str(json).map_err(|e| ReconciliationError::Config(e.to_string()))?;
        format.validate()?;
        Ok(format)
    }

    /// Check that the format is usable for rendering
    pub fn validate(&self) -> ReconciliationResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ReconciliationError::Config(format!(
                "decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.decimal_places
            )));
        }

        Ok(())
    }

    /// Precision used for rendering, capped at [`MAX_DECIMAL_PLACES`]
    fn precision(&self) -> u32 {
        self.decimal_places.min(MAX_DECIMAL_PLACES)
    }

    fn render_number(&self, money: &Money) -> (bool, String) {
        let scale = i64::from(self.precision());
        let rounded = money.amount().with_scale_round(scale, RoundingMode::HalfEven);
        let (digits, _) = rounded.as_bigint_and_exponent();
        let digits = digits.to_string();

        let (negative, digits) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest.to_string()),
            None => (false, digits),
        };

        let places = self.precision() as usize;
        let digits = if digits.len() <= places {
            format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
        } else {
            digits
        };

        let (whole, fraction) = digits.split_at(digits.len() - places);
        let mut number = group_thousands(whole, &self.thousands_separator);
        if places > 0 {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        (negative, number)
    }
}

impl MoneyFormatter for MoneyFormat {
    fn format(&self, money: &Money) -> String {
        let (negative, number) = self.render_number(money);
        let sign = if negative { "-" } else { "" };

        if self.symbol_first {
            format!("{}{}{}", sign, self.symbol, number)
        } else {
            format!("{}{} {}", sign, number, self.symbol)
        }
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(amount: &str, currency: &str) -> Money {
        Money::parse(amount, currency).unwrap()
    }

    #[test]
    fn test_default_format() {
        let format = MoneyFormat::default();

        assert_eq!(format.format(&money("1234.5", "USD")), "$1,234.50");
        assert_eq!(format.format(&money("-20", "USD")), "-$20.00");
        assert_eq!(format.format(&money("0", "USD")), "$0.00");
        assert_eq!(format.format(&money("0.07", "USD")), "$0.07");
        assert_eq!(format.format(&money("1234567.891", "USD")), "$1,234,567.89");
    }

    #[test]
    fn test_half_even_rounding() {
        let format = MoneyFormat::default();

        assert_eq!(format.format(&money("0.125", "USD")), "$0.12");
        assert_eq!(format.format(&money("0.135", "USD")), "$0.14");
        assert_eq!(format.format(&money("-0.001", "USD")), "$0.00");
    }

    #[test]
    fn test_currency_presets() {
        assert_eq!(
            MoneyFormat::for_currency("JPY").format(&money("1234.6", "JPY")),
            "¥1,235"
        );
        assert_eq!(
            MoneyFormat::for_currency("INR").format(&money("-99.5", "INR")),
            "-₹99.50"
        );
        assert_eq!(
            MoneyFormat::for_currency("CHF").format(&money("1234.5", "CHF")),
            "1,234.50 CHF"
        );
    }

    #[test]
    fn test_from_json() {
        let format = MoneyFormat::from_json(
            r#"{"symbol": "€", "symbol_first": false, "thousands_separator": ".", "decimal_separator": ","}"#,
        )
        .unwrap();

        assert_eq!(format.decimal_places, 2);
        assert_eq!(format.format(&money("1234.5", "EUR")), "1.234,50 €");

        let err = MoneyFormat::from_json("{\"decimal_places\": \"two\"}").unwrap_err();
        assert!(matches!(err, ReconciliationError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_excessive_precision() {
        let err = MoneyFormat::from_json(r#"{"decimal_places": 4000000000}"#).unwrap_err();
        assert!(matches!(err, ReconciliationError::Config(_)));

        let format = MoneyFormat::from_json(r#"{"decimal_places": 18}"#).unwrap();
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_precision_is_capped_when_rendering() {
        let format = MoneyFormat {
            decimal_places: 4_000_000_000,
            ..MoneyFormat::default()
        };

        assert!(format.validate().is_err());
        assert_eq!(
            format.format(&money("1", "USD")),
            format!("$1.{}", "0".repeat(MAX_DECIMAL_PLACES as usize))
        );
    }
}
