//! Type-checked double-precision addition.

use crate::error::{AddError, Result};
use crate::value::Numeric;

/// Add two already-unboxed doubles. Overflow saturates to infinity.
#[inline]
pub fn add_numbers(a: f64, b: f64) -> f64 {
    a + b
}

/// Add two host values.
///
/// Both must carry a numeric tag; nothing is coerced. The first non-numeric
/// argument (by position, starting at 0) is reported in the error.
pub fn add<V: Numeric>(a: &V, b: &V) -> Result<f64> {
    let x = number_at(a, 0)?;
    let y = number_at(b, 1)?;
    Ok(add_numbers(x, y))
}

fn number_at<V: Numeric>(v: &V, position: usize) -> Result<f64> {
    v.as_f64().ok_or(AddError::InvalidArgument {
        position,
        found: v.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Value, ValueKind};

    #[test]
    fn test_scenarios() {
        let cases = [
            (Value::Integer(2), Value::Integer(3), 5.0),
            (Value::Float(-1.5), Value::Float(1.5), 0.0),
            (Value::Integer(0), Value::Integer(0), 0.0),
            (Value::Float(2.5), Value::Integer(1), 3.5),
        ];
        for (a, b, expected) in cases {
            assert_eq!(add(&a, &b), Ok(expected), "{a:?} + {b:?}");
        }
    }

    #[test]
    fn test_overflow_is_infinity() {
        let sum = add(&Value::Float(1e308), &Value::Float(1e308)).unwrap();
        assert_eq!(sum, f64::INFINITY);

        let sum = add(&Value::Float(f64::MAX), &Value::Float(f64::MAX)).unwrap();
        assert!(sum.is_infinite() && sum.is_sign_positive());

        let sum = add(&Value::Float(-f64::MAX), &Value::Float(-f64::MAX)).unwrap();
        assert_eq!(sum, f64::NEG_INFINITY);
    }

    #[test]
    fn test_identity_and_commutativity() {
        let samples = [0.0, -0.0, 1.0, -3.25, 1e-300, 6.02e23, f64::MIN_POSITIVE];
        for &a in &samples {
            assert_eq!(add(&Value::Float(a), &Value::Integer(0)).unwrap(), a);
            for &b in &samples {
                assert_eq!(
                    add(&Value::Float(a), &Value::Float(b)),
                    add(&Value::Float(b), &Value::Float(a))
                );
            }
        }
    }

    #[test]
    fn test_nan_passes_the_gate() {
        let sum = add(&Value::Float(f64::NAN), &Value::Integer(1)).unwrap();
        assert!(sum.is_nan());
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            add(&Value::from("x"), &Value::Integer(2)),
            Err(AddError::InvalidArgument {
                position: 0,
                found: ValueKind::String
            })
        );
        assert_eq!(
            add(&Value::Integer(2), &Value::Null),
            Err(AddError::InvalidArgument {
                position: 1,
                found: ValueKind::Null
            })
        );
        // Booleans are not numbers
        assert!(add(&Value::Boolean(true), &Value::Integer(1)).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = add(&Value::Undefined, &Value::Integer(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: expected two numeric values, argument 0 was undefined"
        );
    }
}
