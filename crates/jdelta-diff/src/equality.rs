//! Structural equality between value trees.

use jdelta_types::Value;

/// Deep structural equality.
///
/// Numbers compare by value (so `0.0 == -0.0`), except that NaN equals NaN
/// so every value is equal to itself. Strings by content, arrays element-wise, objects by key set and per-key
/// value. Values of different variants are never equal.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
