//! Numeric formatting helpers.
//!
//! Conversions between standard and scientific notation, significant-figure
//! counting on numerals, and the rounding rules the generator relies on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decimal places kept on a coefficient produced by [`to_scientific_notation`].
pub const COEFFICIENT_DECIMALS: i32 = 4;

/// Most fractional digits [`format_standard`] will print.
pub const MAX_FRACTION_DIGITS: usize = 12;

/// A number written as `coefficient × 10^exponent`.
///
/// Normalized values keep `1 <= |coefficient| < 10`; zero is `{0, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScientificValue {
    pub coefficient: f64,
    pub exponent: i32,
}

impl ScientificValue {
    pub const ZERO: ScientificValue = ScientificValue {
        coefficient: 0.0,
        exponent: 0,
    };

    pub fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// The value in standard form.
    pub fn value(&self) -> f64 {
        self.coefficient * 10f64.powi(self.exponent)
    }

    /// Whether the coefficient sits in `[1, 10)` (or the value is zero).
    pub fn is_normalized(&self) -> bool {
        if self.coefficient == 0.0 {
            return self.exponent == 0;
        }
        (1.0..10.0).contains(&self.coefficient.abs())
    }

    /// Shift the coefficient into `[1, 10)`, adjusting the exponent, then
    /// round it to `decimals` places.
    ///
    /// If rounding carries the coefficient up to 10 it is shifted once more,
    /// so the result always satisfies [`is_normalized`](Self::is_normalized).
    pub fn normalized(self, decimals: i32) -> Self {
        let mut coefficient = self.coefficient;
        let mut exponent = self.exponent;

        if coefficient == 0.0 || !coefficient.is_finite() {
            return Self::ZERO;
        }

        while coefficient.abs() >= 10.0 {
            coefficient /= 10.0;
            exponent += 1;
        }
        while coefficient.abs() < 1.0 {
            coefficient *= 10.0;
            exponent -= 1;
        }

        let mut rounded = round_to_decimals(coefficient, decimals);
        if rounded.abs() >= 10.0 {
            rounded /= 10.0;
            exponent += 1;
        }

        Self {
            coefficient: rounded,
            exponent,
        }
    }
}

impl fmt::Display for ScientificValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × 10^{}", self.coefficient, self.exponent)
    }
}

/// Convert a number to scientific notation with a four-decimal coefficient.
///
/// Values whose rounded coefficient would reach 10 (e.g. `9.99996e3`) are
/// renormalized to `1 × 10^(n+1)`.
pub fn to_scientific_notation(x: f64) -> ScientificValue {
    if x == 0.0 || !x.is_finite() {
        return ScientificValue::ZERO;
    }

    let exponent = x.abs().log10().floor() as i32;
    let coefficient = x / 10f64.powi(exponent);

    ScientificValue::new(coefficient, exponent).normalized(COEFFICIENT_DECIMALS)
}

/// Count the significant figures of a numeral as written.
///
/// Significance is a property of notation, so this works on the text:
/// leading zeros never count, embedded zeros always count, trailing zeros
/// count only when a decimal point is present. Any exponent part
/// (`e`/`E`) is ignored.
pub fn count_significant_figures(numeral: &str) -> usize {
    let unsigned = numeral
        .trim()
        .strip_prefix(['-', '+'])
        .unwrap_or(numeral.trim());

    if let Some(marker) = unsigned.find(['e', 'E']) {
        return count_significant_figures(&unsigned[..marker]);
    }

    let digits: String = unsigned.chars().filter(|c| c.is_ascii_digit()).collect();
    let significant = digits.trim_start_matches('0');

    if unsigned.contains('.') {
        significant.len()
    } else {
        significant.trim_end_matches('0').len().max(1)
    }
}

/// Round to a fixed number of decimal places (negative values round to tens,
/// hundreds, ...). Halves round away from zero.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Dividing by an exact power of ten keeps the result on the nearest
    // representable decimal instead of accumulating `0.1`-style noise.
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    }
}

/// Round to `sig_figs` significant figures using the value's magnitude.
pub fn round_to_sig_figs(value: f64, sig_figs: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || sig_figs == 0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    round_to_decimals(value, sig_figs as i32 - 1 - magnitude)
}

/// Render a number in standard notation: no grouping separators, at most
/// twelve fractional digits, trailing zeros trimmed.
pub fn format_standard(x: f64) -> String {
    // Fifteen significant digits is what an f64 reliably carries; anything
    // past that is product noise such as `9990000.000000002`.
    let cleaned = round_to_sig_figs(x, 15);
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, cleaned);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
