use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a clinical measurement the engine knows about.
///
/// Serialized as the snake_case id used by snapshot files and form front
/// ends ("temp", "hr", ..., "o2_therapy").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamId {
    Temp,
    Hr,
    Rr,
    Sbp,
    Dbp,
    Spo2,
    Wbc,
    Bands,
    Lactate,
    Gcs,
    Mental,
    O2Therapy,
    Pph,
}

/// Whether a parameter carries a decimal number or a categorical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Categorical,
}

impl ParamId {
    /// All known parameters, in snapshot key order.
    pub const ALL: [ParamId; 13] = [
        ParamId::Temp,
        ParamId::Hr,
        ParamId::Rr,
        ParamId::Sbp,
        ParamId::Dbp,
        ParamId::Spo2,
        ParamId::Wbc,
        ParamId::Bands,
        ParamId::Lactate,
        ParamId::Gcs,
        ParamId::Mental,
        ParamId::O2Therapy,
        ParamId::Pph,
    ];

    /// The stable id string, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamId::Temp => "temp",
            ParamId::Hr => "hr",
            ParamId::Rr => "rr",
            ParamId::Sbp => "sbp",
            ParamId::Dbp => "dbp",
            ParamId::Spo2 => "spo2",
            ParamId::Wbc => "wbc",
            ParamId::Bands => "bands",
            ParamId::Lactate => "lactate",
            ParamId::Gcs => "gcs",
            ParamId::Mental => "mental",
            ParamId::O2Therapy => "o2_therapy",
            ParamId::Pph => "pph",
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            ParamId::Mental | ParamId::O2Therapy | ParamId::Pph => ParamKind::Categorical,
            _ => ParamKind::Number,
        }
    }
}

/// A single raw measurement: a decimal number or a categorical token.
///
/// Form front ends submit numbers either as JSON numbers or as
/// numeric-looking strings; both coerce through [`PatientSnapshot::number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Token(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Token(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Token(value)
    }
}

/// Sparse mapping of parameter ids to raw input values.
///
/// Any subset of keys may be present. The evaluators never mutate a
/// snapshot; absent keys, explicit nulls, empty strings and
/// whitespace-only strings are all treated uniformly as "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientSnapshot {
    values: BTreeMap<ParamId, Option<ParamValue>>,
}

impl PatientSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ParamId, value: impl Into<ParamValue>) {
        self.values.insert(id, Some(value.into()));
    }

    /// The raw value for a parameter, if one was supplied (nulls excluded).
    pub fn get(&self, id: ParamId) -> Option<&ParamValue> {
        self.values.get(&id).and_then(|v| v.as_ref())
    }

    /// Coerce a parameter to a decimal number.
    ///
    /// Returns `Some` for a number or a numeric-looking token; `None` for
    /// absent, null, blank, or non-numeric values. Absence is never coerced
    /// to a default (a missing temperature is not 0).
    pub fn number(&self, id: ParamId) -> Option<f64> {
        match self.get(id)? {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Token(t) => {
                let t = t.trim();
                if t.is_empty() {
                    None
                } else {
                    t.parse().ok()
                }
            }
        }
    }

    /// The trimmed categorical token for a parameter.
    ///
    /// Returns `None` for absent, null, blank, or numeric values. The token
    /// is not checked against any option set here; unrecognized tokens
    /// simply match no scoring branch.
    pub fn token(&self, id: ParamId) -> Option<&str> {
        match self.get(id)? {
            ParamValue::Token(t) => {
                let t = t.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t)
                }
            }
            ParamValue::Number(_) => None,
        }
    }

    /// True when no parameter carries a usable value.
    pub fn is_empty(&self) -> bool {
        ParamId::ALL
            .iter()
            .all(|&id| self.number(id).is_none() && self.token(id).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_number() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Temp, 38.5);
        assert_eq!(s.number(ParamId::Temp), Some(38.5));
    }

    #[test]
    fn test_number_from_numeric_token() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Hr, " 95 ");
        assert_eq!(s.number(ParamId::Hr), Some(95.0));
    }

    #[test]
    fn test_number_absent() {
        let s = PatientSnapshot::new();
        assert_eq!(s.number(ParamId::Temp), None);
    }

    #[test]
    fn test_number_blank_token() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Temp, "");
        assert_eq!(s.number(ParamId::Temp), None);
        s.insert(ParamId::Temp, "   ");
        assert_eq!(s.number(ParamId::Temp), None);
    }

    #[test]
    fn test_number_malformed_token() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Temp, "abc");
        assert_eq!(s.number(ParamId::Temp), None);
    }

    #[test]
    fn test_token_trimmed() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Mental, " not_alert ");
        assert_eq!(s.token(ParamId::Mental), Some("not_alert"));
    }

    #[test]
    fn test_token_blank_is_absent() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Mental, "");
        assert_eq!(s.token(ParamId::Mental), None);
    }

    #[test]
    fn test_token_from_number_is_absent() {
        let mut s = PatientSnapshot::new();
        s.insert(ParamId::Mental, 1.0);
        assert_eq!(s.token(ParamId::Mental), None);
    }

    #[test]
    fn test_deserialize_json_object() {
        let s: PatientSnapshot =
            serde_json::from_str(r#"{"temp": 39, "hr": "95", "mental": "not_alert"}"#).unwrap();
        assert_eq!(s.number(ParamId::Temp), Some(39.0));
        assert_eq!(s.number(ParamId::Hr), Some(95.0));
        assert_eq!(s.token(ParamId::Mental), Some("not_alert"));
    }

    #[test]
    fn test_deserialize_null_is_absent() {
        let s: PatientSnapshot = serde_json::from_str(r#"{"temp": null}"#).unwrap();
        assert_eq!(s.number(ParamId::Temp), None);
        assert!(s.is_empty());
    }

    #[test]
    fn test_deserialize_unknown_key_rejected() {
        let result = serde_json::from_str::<PatientSnapshot>(r#"{"pulse": 90}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_yaml_object() {
        let s: PatientSnapshot = serde_saphyr::from_str("temp: 38.1\nmental: not_alert\n").unwrap();
        assert_eq!(s.number(ParamId::Temp), Some(38.1));
        assert_eq!(s.token(ParamId::Mental), Some("not_alert"));
    }

    #[test]
    fn test_is_empty() {
        let mut s = PatientSnapshot::new();
        assert!(s.is_empty());
        s.insert(ParamId::Mental, "");
        assert!(s.is_empty());
        s.insert(ParamId::Temp, 36.6);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_param_id_as_str_matches_serde() {
        for id in ParamId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_param_kinds() {
        assert_eq!(ParamId::Temp.kind(), ParamKind::Number);
        assert_eq!(ParamId::Gcs.kind(), ParamKind::Number);
        assert_eq!(ParamId::Mental.kind(), ParamKind::Categorical);
        assert_eq!(ParamId::O2Therapy.kind(), ParamKind::Categorical);
        assert_eq!(ParamId::Pph.kind(), ParamKind::Categorical);
    }
}
