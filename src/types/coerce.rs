// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Lenient deserialization helpers.
//!
//! Input documents come from forms where empty or half typed fields are common. Numeric fields
//! take the value 0 when they are missing, null, or hold anything that is not a finite number.
//! Text fields accept numbers and booleans and keep their textual form.
//!
//! Numeric literals that overflow an f64 (`1e400`) are rejected by the JSON parser itself and the
//! whole document fails to load. The same value written as a string (`"1e400"`) reaches these
//! helpers as text, parses to infinity and is read as 0.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Number from a JSON value, or None if it isn't a finite number or a numeric string
fn value_as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Numeric field, 0.0 when absent or not numeric
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_number(&value).unwrap_or(0.0))
}

/// Optional numeric field, None when absent or not numeric
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_number(&value))
}

/// Text field. Numbers and booleans are converted to text, anything else is empty
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Any other field, default value when it can't be read as T
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_derive::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        v: f64,
        #[serde(default, deserialize_with = "optional_number")]
        o: Option<f64>,
        #[serde(default, deserialize_with = "string")]
        s: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn coerce_numbers() {
        assert_eq!(probe(r#"{"v": 2.5}"#).v, 2.5);
        assert_eq!(probe(r#"{"v": " 3.25 "}"#).v, 3.25);
        assert_eq!(probe(r#"{"v": -1}"#).v, -1.0);
        assert_eq!(probe(r#"{"v": ""}"#).v, 0.0);
        assert_eq!(probe(r#"{"v": "abc"}"#).v, 0.0);
        assert_eq!(probe(r#"{"v": "NaN"}"#).v, 0.0);
        assert_eq!(probe(r#"{"v": null}"#).v, 0.0);
        assert_eq!(probe(r#"{"v": true}"#).v, 0.0);
        assert_eq!(probe(r#"{}"#).v, 0.0);
    }

    #[test]
    fn coerce_optional_numbers() {
        assert_eq!(probe(r#"{"o": 1.1}"#).o, Some(1.1));
        assert_eq!(probe(r#"{"o": "0.9"}"#).o, Some(0.9));
        assert_eq!(probe(r#"{"o": "x"}"#).o, None);
        assert_eq!(probe(r#"{}"#).o, None);
    }

    #[test]
    fn coerce_strings() {
        assert_eq!(probe(r#"{"s": "r1"}"#).s, "r1");
        assert_eq!(probe(r#"{"s": 12}"#).s, "12");
        assert_eq!(probe(r#"{"s": 1.5}"#).s, "1.5");
        assert_eq!(probe(r#"{"s": true}"#).s, "true");
        assert_eq!(probe(r#"{"s": null}"#).s, "");
        assert_eq!(probe(r#"{"s": [1, 2]}"#).s, "");
        assert_eq!(probe(r#"{}"#).s, "");
    }

    #[test]
    fn overflowing_numbers() {
        assert_eq!(probe(r#"{"v": "1e400"}"#).v, 0.0);
        assert!(serde_json::from_str::<Probe>(r#"{"v": 1e400}"#).is_err());
    }
}
