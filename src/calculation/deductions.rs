//! Tax deducted at source (TDS) calculation.
//!
//! Rates are a closed table keyed by country name, matched
//! case-insensitively. Any country outside the table pays no TDS.

use serde::{Deserialize, Serialize};

/// TDS rate applied to employees in India (10%).
pub const INDIA_TDS_RATE: f64 = 0.10;

/// TDS rate applied to employees in the United States (12%).
pub const UNITED_STATES_TDS_RATE: f64 = 0.12;

/// Country names that resolve to the United States rate, lowercased.
const UNITED_STATES_ALIASES: [&str; 3] = ["united states", "usa", "us"];

/// The outcome of a deduction calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    /// Amount withheld as tax deducted at source.
    pub tds: f64,
    /// Gross amount minus `tds`.
    pub net: f64,
}

/// Returns the TDS rate for a country.
///
/// Matching ignores ASCII and Unicode case but not surrounding whitespace;
/// stored countries are already trimmed.
///
/// # Examples
///
/// ```
/// use employee_service::calculation::tds_rate;
///
/// assert_eq!(tds_rate("India"), 0.10);
/// assert_eq!(tds_rate("USA"), 0.12);
/// assert_eq!(tds_rate("Germany"), 0.0);
/// ```
pub fn tds_rate(country: &str) -> f64 {
    let country = country.to_lowercase();

    if country == "india" {
        INDIA_TDS_RATE
    } else if UNITED_STATES_ALIASES.contains(&country.as_str()) {
        UNITED_STATES_TDS_RATE
    } else {
        0.0
    }
}

/// Calculates TDS and net pay for a gross amount.
///
/// `gross` is expected to be finite and non-negative; the request guards
/// enforce that before this is reached. No rounding is applied.
///
/// # Examples
///
/// ```
/// use employee_service::calculation::calculate_deductions;
///
/// let result = calculate_deductions(100000.0, "India");
/// assert_eq!(result.tds, 10000.0);
/// assert_eq!(result.net, 90000.0);
/// ```
pub fn calculate_deductions(gross: f64, country: &str) -> Deductions {
    let tds = gross * tds_rate(country);
    Deductions {
        tds,
        net: gross - tds,
    }
}
