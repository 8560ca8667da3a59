//! json case model and batch normalization
//!
//! wire shape of one case: numeric-string keys map to `{base, value}`
//! records, and a sibling `keys` record carries the threshold:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "10", "value": "7" },
//!   "3": { "base": "10", "value": "12" }
//! }
//! ```
//!
//! a batch document is a single case object, an array of them, or an object
//! wrapping a `test_cases` array. case-level problems are reported per case
//! so one bad case never poisons its siblings.

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::reconstruct::reconstruct;
use crate::share::Share;
use crate::{Error, Result};

/// one reconstruction problem: decoded shares plus threshold
#[derive(Clone, Debug)]
pub struct Case {
    pub shares: Vec<Share>,
    pub k: usize,
}

/// the `keys` record of a case
///
/// `n` is informational only and never validated against the number of
/// share entries actually present.
#[derive(Debug, Deserialize)]
struct KeysRecord {
    k: Option<Value>,
    #[allow(dead_code)]
    n: Option<Value>,
}

/// one share entry before decoding
///
/// `base` and `value` both arrive as strings in some producers and as
/// numbers in others, so both are accepted.
#[derive(Debug, Deserialize)]
struct ShareRecord {
    base: Value,
    value: Value,
}

/// parse a batch document into cases
///
/// the outer `Result` covers document-level failures (invalid json, an
/// unsupported root shape); each case then parses independently.
/// `default_k` is the threshold to assume for cases without `keys.k`;
/// with `None` such cases fail with [`Error::MissingThreshold`].
pub fn parse_batch(doc: &str, default_k: Option<usize>) -> Result<Vec<Result<Case>>> {
    let root: Value =
        serde_json::from_str(doc).map_err(|e| Error::MalformedBatch(e.to_string()))?;
    let objects = normalize_root(root)?;
    Ok(objects
        .into_iter()
        .map(|obj| parse_case(obj, default_k))
        .collect())
}

/// parse a batch and reconstruct every case, preserving submission order
pub fn solve_batch(doc: &str, default_k: Option<usize>) -> Result<Vec<Result<BigInt>>> {
    Ok(parse_batch(doc, default_k)?
        .into_iter()
        .map(|case| case.and_then(|c| reconstruct(&c.shares, c.k)))
        .collect())
}

/// flatten the accepted root shapes into a list of case objects
fn normalize_root(root: Value) -> Result<Vec<Map<String, Value>>> {
    match root {
        Value::Array(items) => items.into_iter().map(require_object).collect(),
        Value::Object(mut obj) => {
            if let Some(tc) = obj.remove("test_cases") {
                match tc {
                    Value::Array(items) => items.into_iter().map(require_object).collect(),
                    other => Err(Error::MalformedBatch(format!(
                        "test_cases must be an array, got {}",
                        kind_of(&other)
                    ))),
                }
            } else {
                Ok(vec![obj])
            }
        }
        other => Err(Error::MalformedBatch(format!(
            "root must be an object or array, got {}",
            kind_of(&other)
        ))),
    }
}

fn require_object(v: Value) -> Result<Map<String, Value>> {
    match v {
        Value::Object(obj) => Ok(obj),
        other => Err(Error::MalformedBatch(format!(
            "case must be an object, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_case(mut obj: Map<String, Value>, default_k: Option<usize>) -> Result<Case> {
    let k = match obj.remove("keys") {
        Some(keys) => {
            let keys: KeysRecord = serde_json::from_value(keys)
                .map_err(|e| Error::MalformedBatch(format!("invalid keys record: {e}")))?;
            match keys.k {
                Some(k) => scalar_u32(&k).ok_or_else(|| {
                    Error::MalformedBatch("keys.k must be an integer or integer string".into())
                })? as usize,
                None => default_k.ok_or(Error::MissingThreshold)?,
            }
        }
        None => default_k.ok_or(Error::MissingThreshold)?,
    };

    let mut shares = Vec::with_capacity(obj.len());
    for (key, entry) in obj {
        let x: u64 = key.parse().map_err(|_| Error::MalformedShare {
            index: key.clone(),
            reason: "index is not a non-negative integer".to_string(),
        })?;
        let record: ShareRecord =
            serde_json::from_value(entry).map_err(|e| Error::MalformedShare {
                index: key.clone(),
                reason: e.to_string(),
            })?;
        let base = scalar_u32(&record.base).ok_or_else(|| Error::MalformedShare {
            index: key.clone(),
            reason: "base must be an integer or integer string".to_string(),
        })?;
        let value = scalar_string(&record.value).ok_or_else(|| Error::MalformedShare {
            index: key.clone(),
            reason: "value must be a string or number".to_string(),
        })?;
        shares.push(Share::decode(x, &value, base)?);
    }

    Ok(Case { shares, k })
}

fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_u32(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUADRATIC: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "10", "value": "7" },
        "3": { "base": "10", "value": "12" }
    }"#;

    #[test]
    fn test_single_object_root() {
        let cases = parse_batch(QUADRATIC, None).unwrap();
        assert_eq!(cases.len(), 1);
        let case = cases[0].as_ref().unwrap();
        assert_eq!(case.k, 3);
        assert_eq!(case.shares.len(), 3);
    }

    #[test]
    fn test_array_root() {
        let doc = format!("[{QUADRATIC}, {QUADRATIC}]");
        let cases = parse_batch(&doc, None).unwrap();
        assert_eq!(cases.len(), 2);
        assert!(cases.iter().all(|c| c.is_ok()));
    }

    #[test]
    fn test_test_cases_wrapper() {
        let doc = format!(r#"{{ "test_cases": [{QUADRATIC}] }}"#);
        let cases = parse_batch(&doc, None).unwrap();
        assert_eq!(cases.len(), 1);
        assert!(cases[0].is_ok());
    }

    #[test]
    fn test_unsupported_root() {
        assert!(matches!(
            parse_batch(r#""just a string""#, None),
            Err(Error::MalformedBatch(_))
        ));
        assert!(matches!(
            parse_batch(r#"{ "test_cases": 5 }"#, None),
            Err(Error::MalformedBatch(_))
        ));
        assert!(matches!(
            parse_batch("[1, 2]", None),
            Err(Error::MalformedBatch(_))
        ));
        assert!(matches!(
            parse_batch("not json at all", None),
            Err(Error::MalformedBatch(_))
        ));
    }

    #[test]
    fn test_numeric_base_and_value() {
        let doc = r#"{
            "keys": { "k": "2" },
            "1": { "base": 16, "value": "a" },
            "2": { "base": 16, "value": 14 }
        }"#;
        let cases = parse_batch(doc, None).unwrap();
        let case = cases[0].as_ref().unwrap();
        assert_eq!(case.k, 2);
        // "14" in base 16 is 20
        let y2 = &case.shares.iter().find(|s| s.x == 2).unwrap().y;
        assert_eq!(*y2, BigInt::from(20));
    }

    #[test]
    fn test_missing_threshold() {
        let doc = r#"{ "1": { "base": "10", "value": "4" } }"#;
        let cases = parse_batch(doc, None).unwrap();
        assert!(matches!(cases[0], Err(Error::MissingThreshold)));

        // configured default fills the gap
        let cases = parse_batch(doc, Some(1)).unwrap();
        assert_eq!(cases[0].as_ref().unwrap().k, 1);
    }

    #[test]
    fn test_missing_share_fields() {
        let doc = r#"{
            "keys": { "k": 1 },
            "1": { "base": "10" }
        }"#;
        let cases = parse_batch(doc, None).unwrap();
        assert!(matches!(cases[0], Err(Error::MalformedShare { .. })));
    }

    #[test]
    fn test_bad_index() {
        let doc = r#"{
            "keys": { "k": 1 },
            "-1": { "base": "10", "value": "4" }
        }"#;
        let cases = parse_batch(doc, None).unwrap();
        assert!(matches!(cases[0], Err(Error::MalformedShare { .. })));

        let doc = r#"{
            "keys": { "k": 1 },
            "share one": { "base": "10", "value": "4" }
        }"#;
        let cases = parse_batch(doc, None).unwrap();
        assert!(matches!(cases[0], Err(Error::MalformedShare { .. })));
    }

    #[test]
    fn test_bad_case_does_not_poison_batch() {
        let doc = format!(
            r#"[{QUADRATIC}, {{ "keys": {{ "k": 1 }}, "1": {{ "base": "2", "value": "777" }} }}, {QUADRATIC}]"#
        );
        let outcomes = solve_batch(&doc, None).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(*outcomes[0].as_ref().unwrap(), BigInt::from(2));
        assert!(matches!(outcomes[1], Err(Error::Decode { .. })));
        assert_eq!(*outcomes[2].as_ref().unwrap(), BigInt::from(2));
    }

    #[test]
    fn test_solve_batch_quadratic() {
        let outcomes = solve_batch(QUADRATIC, None).unwrap();
        assert_eq!(*outcomes[0].as_ref().unwrap(), BigInt::from(2));
    }

    #[test]
    fn test_solve_batch_hex_case() {
        // (1, 0xa) and (2, 0x14) lie on y = 10x
        let doc = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "16", "value": "a" },
            "2": { "base": "16", "value": "14" }
        }"#;
        let outcomes = solve_batch(doc, None).unwrap();
        assert_eq!(*outcomes[0].as_ref().unwrap(), BigInt::from(0));
    }
}
