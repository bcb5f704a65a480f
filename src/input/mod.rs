use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::patient::PatientSnapshot;

/// Load a patient snapshot from a file.
///
/// `.yaml`/`.yml` files parse as YAML, anything else as JSON. Either way the
/// document is a single object keyed by parameter id, e.g.
/// `{"temp": 38.5, "mental": "not_alert"}`.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or does not
/// parse as a snapshot (including unknown parameter keys).
pub fn load_snapshot(path: &Path) -> Result<PatientSnapshot> {
    if !path.exists() {
        anyhow::bail!("Snapshot file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file at {}", path.display()))?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let snapshot = if is_yaml {
        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse snapshot: invalid YAML in {}", path.display())
        })?
    } else {
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse snapshot: invalid JSON in {}", path.display())
        })?
    };

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::ParamId;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sepscreen-test-{}", name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_snapshot() {
        let path = write_temp("vitals.json", r#"{"temp": 38.5, "mental": "not_alert"}"#);
        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.number(ParamId::Temp), Some(38.5));
        assert_eq!(snapshot.token(ParamId::Mental), Some("not_alert"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_yaml_snapshot() {
        let path = write_temp("vitals.yaml", "temp: 38.5\nmental: not_alert\n");
        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.number(ParamId::Temp), Some(38.5));
        assert_eq!(snapshot.token(ParamId::Mental), Some("not_alert"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let json_path = write_temp("agree.json", r#"{"hr": 95, "sbp": 85}"#);
        let yaml_path = write_temp("agree.yaml", "hr: 95\nsbp: 85\n");
        let from_json = load_snapshot(&json_path).unwrap();
        let from_yaml = load_snapshot(&yaml_path).unwrap();
        assert_eq!(from_json, from_yaml);
        fs::remove_file(json_path).ok();
        fs::remove_file(yaml_path).ok();
    }

    #[test]
    fn test_missing_file() {
        let result = load_snapshot(Path::new("/nonexistent/vitals.json"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_json_mentions_path() {
        let path = write_temp("broken.json", "{not json");
        let err = load_snapshot(&path).unwrap_err();
        assert!(format!("{}", err).contains("invalid JSON"));
        fs::remove_file(path).ok();
    }
}
