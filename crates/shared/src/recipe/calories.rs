use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalizes a raw `calories` field to a whole number of kcal.
///
/// Numbers are truncated, strings are read up to the first non-digit
/// (`"350 kcal"` gives 350). Anything missing, non-numeric, zero or negative
/// gives 0. Values too large for `u32` saturate.
pub fn coerce_calories(value: &Value) -> u32 {
    let kcal = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    };

    match kcal {
        Some(kcal) if kcal > 0 => u32::try_from(kcal).unwrap_or(u32::MAX),
        _ => 0,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value = digits
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        })
        .unwrap_or(i64::MAX);

    Some(if negative { -value } else { value })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_calories).unwrap_or_default())
}
