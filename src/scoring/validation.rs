use crate::patient::{ParamId, ParamKind, ParamValue, PatientSnapshot};

/// Validate a snapshot before evaluation.
/// Returns all validation errors at once (not just the first).
///
/// Only malformed numeric input is an error: a non-blank token on a numeric
/// parameter that does not parse as a number. The engine itself would score
/// such a field as "not provided"; front ends call this first so the user
/// sees which fields need fixing. Unrecognized categorical tokens are not
/// errors, they simply award no points.
pub fn validate_snapshot(snapshot: &PatientSnapshot) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for id in ParamId::ALL {
        if id.kind() != ParamKind::Number {
            continue;
        }
        if let Some(ParamValue::Token(token)) = snapshot.get(id) {
            let token = token.trim();
            if !token.is_empty() && token.parse::<f64>().is_err() {
                errors.push(format!("{}: expected a number, got '{}'", id.as_str(), token));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
