//! JSON export of a held report

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, ResultExt};
use crate::report::AnalysisReport;

/// `arca_report_<regulation_id>.json`
///
/// Path separators and characters Windows rejects in file names become `_`,
/// so the file always lands directly in the export directory.
pub fn export_file_name(report: &AnalysisReport) -> String {
    let id: String = report
        .regulation_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("arca_report_{id}.json")
}

/// Serialize with two-space indentation.
pub fn to_pretty_json(report: &AnalysisReport) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the report into `dir`, creating it if needed. Returns the file path.
pub fn write_report(report: &AnalysisReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(export_file_name(report));
    std::fs::write(&path, to_pretty_json(report)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Exported report {} to {}", report.regulation_id, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{report, risk};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_file_name() {
        let r = report("REG_ABC123", vec![]);
        assert_eq!(export_file_name(&r), "arca_report_REG_ABC123.json");
    }

    #[test]
    fn test_file_name_replaces_separators() {
        let r = report("EU/2024\\1689:a?", vec![]);
        assert_eq!(export_file_name(&r), "arca_report_EU_2024_1689_a_.json");
    }

    #[test]
    fn test_write_report_with_path_like_id() {
        let temp = tempdir().unwrap();

        for id in ["EU/2024/1689", "../escaped"] {
            let r = report(id, vec![]);
            let path = write_report(&r, temp.path()).unwrap();

            assert_eq!(path.parent(), Some(temp.path()));
            let written = std::fs::read_to_string(&path).unwrap();
            assert_eq!(AnalysisReport::from_json(&written).unwrap(), r);
        }
        assert!(temp.path().join("arca_report_EU_2024_1689.json").exists());
        assert!(temp.path().join("arca_report_.._escaped.json").exists());
    }

    #[test]
    fn test_round_trip_equals_held_report() {
        let mut r = report(
            "R1",
            vec![
                risk("a", Some("LOW")),
                risk("b", Some("HIGH")),
                risk("c", Some("Unusual")),
                risk("d", None),
            ],
        );
        if let Some(meta) = r.metadata.as_mut() {
            meta.extra.insert("analysis_engine".into(), json!("ARCA v1.0"));
        }

        let exported = to_pretty_json(&r).unwrap();
        let parsed = AnalysisReport::from_json(&exported).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_export_keeps_received_order() {
        let r = report("R1", vec![risk("low", Some("LOW")), risk("high", Some("HIGH"))]);
        let value: serde_json::Value = serde_json::from_str(&to_pretty_json(&r).unwrap()).unwrap();
        assert_eq!(value["risks"][0]["policy_id"], "low");
        assert_eq!(value["risks"][1]["policy_id"], "high");
    }

    #[test]
    fn test_two_space_indent() {
        let r = report("R1", vec![]);
        let exported = to_pretty_json(&r).unwrap();
        assert!(exported.starts_with("{\n  \"regulation_id\": \"R1\""));
        assert!(!exported.contains("\t"));
    }

    #[test]
    fn test_write_report_creates_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("exports").join("nested");
        let r = report("R9", vec![risk("a", Some("MEDIUM"))]);

        let path = write_report(&r, &dir).unwrap();

        assert_eq!(path, dir.join("arca_report_R9.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(AnalysisReport::from_json(&written).unwrap(), r);
    }
}
