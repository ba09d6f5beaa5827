//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "teamgen",
    version,
    about = "Stream randomly generated teams as a JSON array"
)]
pub struct Args {
    /// Number of teams to generate. At least one team is always produced.
    #[arg(allow_hyphen_values = true)]
    pub count: Option<String>,

    /// Directory holding `config/` (and, by default, `data/`).
    #[arg(long, env = "TEAMGEN_ROOT", default_value = ".")]
    pub root: PathBuf,
}

/// How many teams the generation loop produces.
///
/// The first team is unconditional. After it, with an index starting at 1,
/// one more team follows for every index below the requested count. The
/// comparison is numeric against the coerced argument, so a count of 0, a
/// negative count, a missing argument or a non-numeric one all yield a single
/// team, and a fractional count rounds up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationCount(f64);

impl GenerationCount {
    /// Coerce the raw positional argument.
    #[must_use]
    pub fn parse(arg: Option<&str>) -> Self {
        Self(arg.map_or(f64::NAN, coerce_number))
    }

    /// Whether another team follows once `index` teams have been written.
    #[must_use]
    pub fn continues_after(self, index: u64) -> bool {
        (index as f64) < self.0
    }

    /// The number of teams that will be written, if finite.
    #[must_use]
    pub fn total(self) -> Option<u64> {
        if self.0.is_nan() || self.0 <= 1.0 {
            Some(1)
        } else if self.0.is_finite() {
            Some(self.0.ceil() as u64)
        } else {
            None
        }
    }
}

/// Numeric coercion of a command-line string: trimmed, empty is zero,
/// decimal with optional exponent, `0x`/`0o`/`0b` integers, and the literal
/// `Infinity`. Everything else is NaN.
fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return radix_integer(digits, radix);
        }
    }
    // `f64::from_str` also takes "inf" and "nan"; those are not numbers here.
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Unsigned digits after a radix prefix. No sign, at least one digit, and
/// no upper bound: wide literals lose precision instead of failing.
fn radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(arg: Option<&str>) -> Option<u64> {
        GenerationCount::parse(arg).total()
    }

    #[test]
    fn test_positive_counts() {
        assert_eq!(total(Some("1")), Some(1));
        assert_eq!(total(Some("3")), Some(3));
        assert_eq!(total(Some(" 12 ")), Some(12));
        assert_eq!(total(Some("1e2")), Some(100));
        assert_eq!(total(Some("0x10")), Some(16));
    }

    #[test]
    fn test_degenerate_counts_yield_one() {
        assert_eq!(total(Some("0")), Some(1));
        assert_eq!(total(Some("-4")), Some(1));
        assert_eq!(total(Some("")), Some(1));
        assert_eq!(total(Some("abc")), Some(1));
        assert_eq!(total(Some("inf")), Some(1));
        assert_eq!(total(Some("NaN")), Some(1));
        assert_eq!(total(None), Some(1));
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert!(coerce_number("0x1_0").is_nan());
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0b2").is_nan());
    }

    #[test]
    fn test_signed_radix_digits_are_not_numbers() {
        assert!(coerce_number("0x+5").is_nan());
        assert!(coerce_number("0x-5").is_nan());
        assert!(coerce_number("0b+1").is_nan());
        assert_eq!(total(Some("0x+5")), Some(1));
    }

    #[test]
    fn test_wide_hex_literal_is_finite() {
        let wide = coerce_number("0x10000000000000000");
        assert!(wide.is_finite());
        assert_eq!(wide, 18_446_744_073_709_551_616.0);
        assert_eq!(total(Some("0x10000000000000000")), Some(u64::MAX));
    }

    #[test]
    fn test_fractional_count_rounds_up() {
        assert_eq!(total(Some("2.5")), Some(3));
        let count = GenerationCount::parse(Some("2.5"));
        assert!(count.continues_after(1));
        assert!(count.continues_after(2));
        assert!(!count.continues_after(3));
    }

    #[test]
    fn test_infinite_count() {
        let count = GenerationCount::parse(Some("Infinity"));
        assert_eq!(count.total(), None);
        assert!(count.continues_after(u64::MAX));
    }

    #[test]
    fn test_loop_guard_matches_index_comparison() {
        let count = GenerationCount::parse(Some("3"));
        assert!(count.continues_after(1));
        assert!(count.continues_after(2));
        assert!(!count.continues_after(3));

        let nan = GenerationCount::parse(Some("three"));
        assert!(!nan.continues_after(1));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["teamgen", "5", "--root", "/srv/teamgen"]).unwrap();
        assert_eq!(args.count.as_deref(), Some("5"));
        assert_eq!(args.root, PathBuf::from("/srv/teamgen"));

        let negative = Args::try_parse_from(["teamgen", "-2"]).unwrap();
        assert_eq!(negative.count.as_deref(), Some("-2"));

        let bare = Args::try_parse_from(["teamgen"]).unwrap();
        assert!(bare.count.is_none());
    }
}
