//! Provides a safe, self-contained type for representing on-chain token amounts.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

/// Number of fractional digits shown to the user. Anything beyond this is
/// truncated, never rounded.
pub const DISPLAY_DECIMALS: usize = 4;

/// An error that can occur when parsing a string into a `TokenAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTokenAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3", "-5").
    #[error("invalid token amount format")]
    InvalidFormat,
    /// The string has more decimal places than the token supports.
    #[error("too many decimal places for the token")]
    TooManyDecimals,
}

/// A non-negative token quantity in raw on-chain units, paired with the
/// power-of-ten scale separating raw units from display units.
///
/// On-chain balances are 10^18-scaled integers that do not fit in 64 bits, so
/// the raw value is kept as a `BigUint` and only ever converted to a decimal
/// string for display. The default `Display` implementation truncates to
/// [`DISPLAY_DECIMALS`] fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount {
    raw: BigUint,
    decimals: u32,
}

/// The serde wire shape: the raw integer as a base-10 string plus the scale,
/// matching what the chain and the indexer report.
#[derive(Serialize, Deserialize)]
struct TokenAmountRepr {
    raw: String,
    decimals: u32,
}

impl TokenAmount {
    // --- Constructors ---

    pub fn from_raw(raw: BigUint, decimals: u32) -> Self {
        Self { raw, decimals }
    }

    /// Parses a base-10 integer string of raw units (the form amounts arrive
    /// in from the chain and the indexer).
    pub fn from_raw_str(raw: &str, decimals: u32) -> Result<Self, ParseTokenAmountError> {
        let raw = raw
            .parse::<BigUint>()
            .map_err(|_| ParseTokenAmountError::InvalidFormat)?;
        Ok(Self { raw, decimals })
    }

    /// Parses a human-entered decimal string (e.g. "123.45") into raw units.
    ///
    /// This is the inverse of display scaling: `"1.5"` with 18 decimals
    /// becomes `15 * 10^17` raw units. Fails on malformed input, negative
    /// values, or more fractional digits than `decimals` allows.
    pub fn from_decimal_str(s: &str, decimals: u32) -> Result<Self, ParseTokenAmountError> {
        let s = s.trim();
        if s.starts_with('-') || s.starts_with('+') {
            return Err(ParseTokenAmountError::InvalidFormat);
        }

        let mut parts = s.split('.');
        let whole_str = parts.next().unwrap_or("");
        let frac_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (whole_str.is_empty() && frac_str.is_empty()) {
            return Err(ParseTokenAmountError::InvalidFormat);
        }

        if frac_str.len() > decimals as usize {
            return Err(ParseTokenAmountError::TooManyDecimals);
        }

        let whole = if whole_str.is_empty() {
            BigUint::zero()
        } else {
            whole_str
                .parse::<BigUint>()
                .map_err(|_| ParseTokenAmountError::InvalidFormat)?
        };

        let frac = if frac_str.is_empty() {
            BigUint::zero()
        } else {
            frac_str
                .parse::<BigUint>()
                .map_err(|_| ParseTokenAmountError::InvalidFormat)?
        };

        let ten = BigUint::from(10u32);
        let raw = whole * ten.pow(decimals) + frac * ten.pow(decimals - frac_str.len() as u32);
        Ok(Self { raw, decimals })
    }

    // --- Getters ---

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub(crate) fn raw(&self) -> &BigUint {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The raw integer value as a base-10 string, the form the staking SDK
    /// expects for submissions.
    pub fn raw_string(&self) -> String {
        self.raw.to_str_radix(10)
    }

    // --- Arithmetic ---

    /// Subtracts `rhs`, clamping at zero instead of underflowing.
    ///
    /// Panics if the two amounts use different scales.
    pub fn saturating_sub(&self, rhs: &Self) -> Self {
        if self.decimals != rhs.decimals {
            panic!(
                "Cannot subtract amounts of different scales: {} and {}",
                self.decimals, rhs.decimals
            );
        }
        let raw = if self.raw >= rhs.raw {
            &self.raw - &rhs.raw
        } else {
            BigUint::zero()
        };
        Self {
            raw,
            decimals: self.decimals,
        }
    }

    // --- Display Methods ---

    /// Formats the amount as a decimal string truncated to at most
    /// [`DISPLAY_DECIMALS`] fractional digits.
    ///
    /// A zero value is always `"0"`, and the fractional part is omitted
    /// entirely when its truncated digits are all zeros.
    pub fn to_decimal_string(&self) -> String {
        if self.raw.is_zero() {
            return "0".to_string();
        }
        if self.decimals == 0 {
            return self.raw.to_str_radix(10);
        }

        let divisor = BigUint::from(10u32).pow(self.decimals);
        let whole = &self.raw / &divisor;
        let fraction = &self.raw % &divisor;

        let full_fraction = format!(
            "{:0>width$}",
            fraction.to_str_radix(10),
            width = self.decimals as usize
        );
        let shown = &full_fraction[..full_fraction.len().min(DISPLAY_DECIMALS)];

        if shown.bytes().all(|b| b == b'0') {
            // Covers both "0.00001..." -> "0" and exact whole values.
            return whole.to_str_radix(10);
        }

        format!("{}.{}", whole, shown)
    }

    /// Formats the amount truncated to exactly `digits` fractional digits,
    /// padding with zeros where needed (e.g. "999.8500"). This is the form
    /// used for max-amount string comparisons.
    pub fn to_fixed_string(&self, digits: usize) -> String {
        if self.decimals == 0 {
            let mut s = self.raw.to_str_radix(10);
            if digits > 0 {
                s.push('.');
                s.push_str(&"0".repeat(digits));
            }
            return s;
        }

        let divisor = BigUint::from(10u32).pow(self.decimals);
        let whole = &self.raw / &divisor;
        let fraction = &self.raw % &divisor;

        let full_fraction = format!(
            "{:0>width$}",
            fraction.to_str_radix(10),
            width = self.decimals as usize
        );
        let mut shown = full_fraction[..full_fraction.len().min(digits)].to_string();
        while shown.len() < digits {
            shown.push('0');
        }

        if digits == 0 {
            whole.to_str_radix(10)
        } else {
            format!("{}.{}", whole, shown)
        }
    }

    /// The full-precision decimal string, with trailing fractional zeros
    /// removed. Used for tooltips where truncation would mislead.
    pub fn display_lossless(&self) -> String {
        if self.decimals == 0 || self.raw.is_zero() {
            return self.raw.to_str_radix(10);
        }

        let divisor = BigUint::from(10u32).pow(self.decimals);
        let whole = &self.raw / &divisor;
        let fraction = &self.raw % &divisor;

        if fraction.is_zero() {
            return whole.to_str_radix(10);
        }

        let full_fraction = format!(
            "{:0>width$}",
            fraction.to_str_radix(10),
            width = self.decimals as usize
        );
        let trimmed = full_fraction.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TokenAmountRepr {
            raw: self.raw_string(),
            decimals: self.decimals,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TokenAmountRepr::deserialize(deserializer)?;
        Self::from_raw_str(&repr.raw, repr.decimals).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(raw: &str, decimals: u32) -> String {
        TokenAmount::from_raw_str(raw, decimals)
            .unwrap()
            .to_decimal_string()
    }

    #[test]
    fn zero_is_always_bare_zero() {
        for d in [0, 4, 18, 30] {
            assert_eq!(fmt("0", d), "0");
        }
    }

    #[test]
    fn exactly_one_token() {
        assert_eq!(fmt("1000000000000000000", 18), "1");
    }

    #[test]
    fn truncates_to_four_fractional_digits() {
        assert_eq!(fmt("1234567890123456789", 18), "1.2345");
    }

    #[test]
    fn truncates_never_rounds() {
        // 1.99999... would round to 2.0000; truncation keeps 1.9999.
        assert_eq!(fmt("1999999999999999999", 18), "1.9999");
        // 0.12349 -> 0.1234, not 0.1235.
        assert_eq!(fmt("123490000000000000", 18), "0.1234");
    }

    #[test]
    fn subunit_dust_collapses_to_zero() {
        // Fraction is nonzero but all displayed digits are zero.
        assert_eq!(fmt("1", 18), "0");
        assert_eq!(fmt("99999999999999", 18), "0");
    }

    #[test]
    fn whole_with_zero_fraction_omits_point() {
        assert_eq!(fmt("5000000000000000000", 18), "5");
    }

    #[test]
    fn zero_decimals_returns_whole_part_only() {
        assert_eq!(fmt("12345", 0), "12345");
    }

    #[test]
    fn values_wider_than_64_bits_keep_precision() {
        // 2^64 is 18446744073709551616; raw below is well past u64::MAX.
        assert_eq!(
            fmt("123456789012345678901234567890", 18),
            "123456789012.3456"
        );
    }

    #[test]
    fn leading_fraction_zeros_are_preserved() {
        // 0.0012...
        assert_eq!(fmt("1200000000000000", 18), "0.0012");
    }

    #[test]
    fn fixed_string_pads_to_requested_digits() {
        let amt = TokenAmount::from_decimal_str("999.85", 18).unwrap();
        assert_eq!(amt.to_fixed_string(4), "999.8500");

        let whole = TokenAmount::from_decimal_str("7", 18).unwrap();
        assert_eq!(whole.to_fixed_string(4), "7.0000");
    }

    #[test]
    fn from_decimal_str_scales_to_raw() {
        let amt = TokenAmount::from_decimal_str("1.5", 18).unwrap();
        assert_eq!(amt.raw_string(), "1500000000000000000");

        let amt = TokenAmount::from_decimal_str("100", 18).unwrap();
        assert_eq!(amt.raw_string(), "100000000000000000000");

        let amt = TokenAmount::from_decimal_str(".25", 2).unwrap();
        assert_eq!(amt.raw_string(), "25");
    }

    #[test]
    fn from_decimal_str_rejects_garbage() {
        for bad in ["", ".", "abc", "1.2.3", "-5", "+5", "1,5", "1e18"] {
            assert_eq!(
                TokenAmount::from_decimal_str(bad, 18).unwrap_err(),
                ParseTokenAmountError::InvalidFormat,
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn from_decimal_str_rejects_excess_precision() {
        assert_eq!(
            TokenAmount::from_decimal_str("1.234", 2).unwrap_err(),
            ParseTokenAmountError::TooManyDecimals
        );
    }

    #[test]
    fn saturating_sub_clamps_at_zero() {
        let a = TokenAmount::from_decimal_str("1", 18).unwrap();
        let b = TokenAmount::from_decimal_str("2", 18).unwrap();
        assert!(a.saturating_sub(&b).is_zero());
        assert_eq!(b.saturating_sub(&a).to_decimal_string(), "1");
    }

    #[test]
    fn display_lossless_keeps_all_digits() {
        let amt = TokenAmount::from_raw_str("1234567890123456789", 18).unwrap();
        assert_eq!(amt.display_lossless(), "1.234567890123456789");

        let amt = TokenAmount::from_raw_str("1500000000000000000", 18).unwrap();
        assert_eq!(amt.display_lossless(), "1.5");
    }

    #[test]
    fn serde_round_trips_as_raw_string() {
        let amt = TokenAmount::from_raw_str("123456789012345678901", 18).unwrap();
        let json = serde_json::to_string(&amt).unwrap();
        assert_eq!(json, r#"{"raw":"123456789012345678901","decimals":18}"#);
        let back: TokenAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amt);
    }
}
