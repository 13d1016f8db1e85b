//! Analysis report returned by the ARCA service
//!
//! These types mirror the service's JSON contract field for field so that an
//! exported report has the same structure as the one received.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::severity::Severity;

/// One conflict between the new regulation and an existing internal policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub policy_id: String,

    /// Missing on the wire is tolerated and treated as the neutral bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    pub divergence_summary: String,
    pub conflicting_policy_excerpt: String,
    pub new_rule_excerpt: String,
    pub recommendation: String,
}

/// Open metadata map. Only `total_policies_analyzed` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_policies_analyzed: Option<u64>,

    /// Everything else the service sends (engine name, agents used, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Structured compliance-analysis result for one submitted regulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub regulation_id: String,
    pub regulation_title: String,
    pub date_of_law: String,
    pub date_processed: String,
    pub total_risks_flagged: u64,

    /// Risks in the order the service sent them. Display order is derived by
    /// [`crate::presentation::sort_risks`].
    pub risks: Vec<RiskEntry>,

    #[serde(default)]
    pub metadata: Option<ReportMetadata>,
}

impl AnalysisReport {
    /// Parse a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::decode(e.to_string()))
    }

    /// Number of policies the service compared against, 0 when not reported.
    pub fn policies_analyzed(&self) -> u64 {
        self.metadata
            .as_ref()
            .and_then(|m| m.total_policies_analyzed)
            .unwrap_or(0)
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub vectorstore_loaded: bool,
    #[serde(default)]
    pub agents_initialized: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_BODY: &str = r#"{
        "regulation_id": "REG_3F2A9C1B7E44",
        "regulation_title": "Employment Safety Act 2025",
        "date_of_law": "2025-06-01",
        "date_processed": "2025-06-02",
        "total_risks_flagged": 2,
        "risks": [
            {
                "policy_id": "POL-007",
                "severity": "LOW",
                "divergence_summary": "Minor wording gap",
                "conflicting_policy_excerpt": "...",
                "new_rule_excerpt": "...",
                "recommendation": "Clarify wording"
            },
            {
                "policy_id": "POL-002",
                "severity": "HIGH",
                "divergence_summary": "Retention exceeds limit",
                "conflicting_policy_excerpt": "90 days",
                "new_rule_excerpt": "30 days",
                "recommendation": "Reduce retention"
            }
        ],
        "metadata": {
            "total_policies_analyzed": 5,
            "analysis_engine": "ARCA v1.0",
            "agents_used": ["PolicyResearcher", "ComplianceAuditor", "ReportGenerator"]
        }
    }"#;

    #[test]
    fn test_parse_service_body() {
        let report = AnalysisReport::from_json(SERVICE_BODY).unwrap();
        assert_eq!(report.regulation_id, "REG_3F2A9C1B7E44");
        assert_eq!(report.total_risks_flagged, 2);
        assert_eq!(report.risks.len(), 2);
        assert_eq!(report.risks[0].severity, Some(Severity::Low));
        assert_eq!(report.policies_analyzed(), 5);
    }

    #[test]
    fn test_metadata_extra_keys_preserved() {
        let report = AnalysisReport::from_json(SERVICE_BODY).unwrap();
        let meta = report.metadata.unwrap();
        assert_eq!(meta.extra["analysis_engine"], "ARCA v1.0");
        assert_eq!(meta.extra["agents_used"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_null_metadata_is_accepted() {
        let body = r#"{
            "regulation_id": "R1", "regulation_title": "T", "date_of_law": "N/A",
            "date_processed": "2025-01-02", "total_risks_flagged": 0,
            "risks": [], "metadata": null
        }"#;
        let report = AnalysisReport::from_json(body).unwrap();
        assert!(report.metadata.is_none());
        assert_eq!(report.policies_analyzed(), 0);
    }

    #[test]
    fn test_missing_severity_is_accepted() {
        let body = r#"{
            "regulation_id": "R1", "regulation_title": "T", "date_of_law": "N/A",
            "date_processed": "2025-01-02", "total_risks_flagged": 1,
            "risks": [{
                "policy_id": "P", "divergence_summary": "d",
                "conflicting_policy_excerpt": "c", "new_rule_excerpt": "n",
                "recommendation": "r"
            }]
        }"#;
        let report = AnalysisReport::from_json(body).unwrap();
        assert_eq!(report.risks[0].severity, None);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = AnalysisReport::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_missing_required_field_is_decode_error() {
        let err = AnalysisReport::from_json(r#"{"regulation_id": "R1"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status":"healthy","timestamp":"2025-06-02T10:00:00","vectorstore_loaded":true,"agents_initialized":true}"#,
        )
        .unwrap();
        assert!(health.is_healthy());

        let health: HealthStatus = serde_json::from_str(r#"{"status":"unhealthy"}"#).unwrap();
        assert!(!health.is_healthy());
        assert!(!health.vectorstore_loaded);
    }
}
