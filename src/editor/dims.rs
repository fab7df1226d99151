use std::fmt;
use std::num::IntErrorKind;

use crate::{LOWER_BOUND, UPPER_BOUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("columns"),
            Dimension::Height => f.write_str("rows"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Values must be integers.")]
    NotInteger { field: Dimension, raw: String },
    #[error("Values must be between {} and {}.", LOWER_BOUND, UPPER_BOUND)]
    OutOfRange { field: Dimension, raw: String },
}

impl ValidationError {
    pub fn field(&self) -> Dimension {
        match self {
            ValidationError::NotInteger { field, .. }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

enum Parsed {
    Value(i64),
    Overflow,
}

fn parse_dimension(raw: &str, field: Dimension) -> Result<Parsed, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(v) => Ok(Parsed::Value(v)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(Parsed::Overflow)
        }
        Err(_) => Err(ValidationError::NotInteger {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn check_range(parsed: Parsed, raw: &str, field: Dimension) -> Result<usize, ValidationError> {
    let bounds = LOWER_BOUND as i64..=UPPER_BOUND as i64;
    match parsed {
        Parsed::Value(v) if bounds.contains(&v) => Ok(v as usize),
        _ => Err(ValidationError::OutOfRange {
            field,
            raw: raw.to_string(),
        }),
    }
}

/// Checks two free-form inputs from the reconfiguration form. Both inputs are
/// parsed before either is range checked, so a non-number always wins over an
/// out-of-range number.
pub fn validate_dimensions(
    raw_width: &str,
    raw_height: &str,
) -> Result<(usize, usize), ValidationError> {
    let width = parse_dimension(raw_width, Dimension::Width)?;
    let height = parse_dimension(raw_height, Dimension::Height)?;
    let width = check_range(width, raw_width, Dimension::Width)?;
    let height = check_range(height, raw_height, Dimension::Height)?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(validate_dimensions("3", "10"), Ok((3, 10)));
        assert_eq!(validate_dimensions("10", "3"), Ok((10, 3)));
        assert_eq!(validate_dimensions(" 7 ", "+4"), Ok((7, 4)));
    }

    #[test]
    fn rejects_values_outside_bounds() {
        assert!(matches!(
            validate_dimensions("2", "5"),
            Err(ValidationError::OutOfRange { field: Dimension::Width, .. })
        ));
        assert!(matches!(
            validate_dimensions("11", "5"),
            Err(ValidationError::OutOfRange { field: Dimension::Width, .. })
        ));
        assert!(matches!(
            validate_dimensions("5", "-4"),
            Err(ValidationError::OutOfRange { field: Dimension::Height, .. })
        ));
        assert!(matches!(
            validate_dimensions("5", "99999999999999999999999"),
            Err(ValidationError::OutOfRange { field: Dimension::Height, .. })
        ));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "", "  ", "5.0", "5x", "0x5"] {
            let err = validate_dimensions(raw, "5").unwrap_err();
            assert_eq!(
                err,
                ValidationError::NotInteger {
                    field: Dimension::Width,
                    raw: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn parse_failure_is_reported_before_range() {
        let err = validate_dimensions("1", "abc").unwrap_err();
        assert_eq!(err.field(), Dimension::Height);
        assert!(matches!(err, ValidationError::NotInteger { .. }));
    }

    #[test]
    fn messages_match_form_copy() {
        let not_int = validate_dimensions("abc", "5").unwrap_err();
        let range = validate_dimensions("2", "5").unwrap_err();
        assert_eq!(not_int.to_string(), "Values must be integers.");
        assert_eq!(range.to_string(), "Values must be between 3 and 10.");
    }
}
