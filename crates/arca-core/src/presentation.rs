//! Display-side derivations over a held report
//!
//! Everything here is read-only: the report passed in is never mutated, and
//! each function returns a fresh view.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::report::{AnalysisReport, RiskEntry};
use crate::severity::Severity;

/// Rank used for ordering: HIGH < MEDIUM < LOW < anything else.
pub fn severity_rank(severity: Option<&Severity>) -> u8 {
    match severity {
        Some(Severity::High) => 0,
        Some(Severity::Medium) => 1,
        Some(Severity::Low) => 2,
        Some(Severity::Other(_)) | None => 3,
    }
}

/// Risks in display order.
///
/// Stable: entries of equal rank keep their received order. Unknown and
/// missing severities sort after LOW.
pub fn sort_risks(risks: &[RiskEntry]) -> Vec<&RiskEntry> {
    let mut sorted: Vec<&RiskEntry> = risks.iter().collect();
    sorted.sort_by_key(|r| severity_rank(r.severity.as_ref()));
    sorted
}

/// Visual bucket for a severity. The TUI theme owns the colors and glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    /// HIGH: red/pink badge, flame icon, pulsing
    Critical,
    /// MEDIUM: yellow/orange badge, lightning icon
    Caution,
    /// LOW: blue/cyan badge, shield-check icon
    Safe,
    /// Anything else: gray badge, neutral icon
    Neutral,
}

impl SeverityClass {
    pub fn of(severity: Option<&Severity>) -> Self {
        match severity {
            Some(Severity::High) => SeverityClass::Critical,
            Some(Severity::Medium) => SeverityClass::Caution,
            Some(Severity::Low) => SeverityClass::Safe,
            Some(Severity::Other(_)) | None => SeverityClass::Neutral,
        }
    }

    /// Only HIGH risks pulse.
    pub fn is_alert(&self) -> bool {
        matches!(self, SeverityClass::Critical)
    }
}

/// Badge text, e.g. `HIGH SEVERITY`.
pub fn severity_label(severity: Option<&Severity>) -> String {
    match severity {
        Some(sev) if !sev.as_str().trim().is_empty() => format!("{} SEVERITY", sev.as_str()),
        _ => "UNSPECIFIED SEVERITY".to_string(),
    }
}

/// Per-bucket counts for the results header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub other: usize,
}

impl SeverityCounts {
    pub fn of(risks: &[RiskEntry]) -> Self {
        risks
            .iter()
            .fold(Self::default(), |mut acc, risk| {
                match SeverityClass::of(risk.severity.as_ref()) {
                    SeverityClass::Critical => acc.high += 1,
                    SeverityClass::Caution => acc.medium += 1,
                    SeverityClass::Safe => acc.low += 1,
                    SeverityClass::Neutral => acc.other += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.other
    }
}

/// The three summary figures shown above the risk list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_risks: u64,
    pub policies_analyzed: u64,
    pub date_processed: String,
}

impl ReportSummary {
    pub fn of(report: &AnalysisReport) -> Self {
        Self {
            total_risks: report.total_risks_flagged,
            policies_analyzed: report.policies_analyzed(),
            date_processed: display_date(&report.date_processed),
        }
    }
}

/// Format a service date for display (`Jan 2, 2025`).
///
/// Accepts RFC 3339, naive ISO date-times and plain `YYYY-MM-DD`. Anything
/// else is shown as received.
pub fn display_date(raw: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{report, risk};

    fn ids(sorted: &[&RiskEntry]) -> Vec<String> {
        sorted.iter().map(|r| r.policy_id.clone()).collect()
    }

    #[test]
    fn test_sort_orders_by_severity() {
        let risks = vec![
            risk("low", Some("LOW")),
            risk("high", Some("HIGH")),
            risk("medium", Some("MEDIUM")),
        ];
        assert_eq!(ids(&sort_risks(&risks)), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_is_stable_within_rank() {
        let risks = vec![
            risk("h1", Some("HIGH")),
            risk("l1", Some("LOW")),
            risk("h2", Some("HIGH")),
            risk("l2", Some("LOW")),
            risk("h3", Some("HIGH")),
        ];
        assert_eq!(ids(&sort_risks(&risks)), vec!["h1", "h2", "h3", "l1", "l2"]);
    }

    #[test]
    fn test_unknown_and_missing_sort_last_in_input_order() {
        let risks = vec![
            risk("unknown", Some("CRITICAL")),
            risk("missing", None),
            risk("low", Some("LOW")),
            risk("blank", Some("")),
            risk("high", Some("HIGH")),
        ];
        assert_eq!(
            ids(&sort_risks(&risks)),
            vec!["high", "low", "unknown", "missing", "blank"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_source() {
        let risks = vec![risk("low", Some("LOW")), risk("high", Some("HIGH"))];
        let before = risks.clone();
        let _ = sort_risks(&risks);
        assert_eq!(risks, before);
    }

    #[test]
    fn test_sorted_ranks_never_decrease() {
        let severities = [
            Some("MEDIUM"),
            None,
            Some("HIGH"),
            Some("LOW"),
            Some("weird"),
            Some("HIGH"),
            Some("MEDIUM"),
            Some("LOW"),
        ];
        let risks: Vec<RiskEntry> = severities
            .iter()
            .enumerate()
            .map(|(i, s)| risk(&format!("p{i}"), *s))
            .collect();

        let sorted = sort_risks(&risks);
        assert_eq!(sorted.len(), risks.len());
        for pair in sorted.windows(2) {
            let a = severity_rank(pair[0].severity.as_ref());
            let b = severity_rank(pair[1].severity.as_ref());
            assert!(a <= b);
            if a == b {
                let ia = risks.iter().position(|r| r.policy_id == pair[0].policy_id);
                let ib = risks.iter().position(|r| r.policy_id == pair[1].policy_id);
                assert!(ia < ib, "equal ranks must keep input order");
            }
        }
    }

    #[test]
    fn test_severity_class_mapping() {
        let high = SeverityClass::of(Some(&Severity::High));
        assert_eq!(high, SeverityClass::Critical);
        assert!(high.is_alert());

        assert_eq!(SeverityClass::of(Some(&Severity::Medium)), SeverityClass::Caution);
        assert_eq!(SeverityClass::of(Some(&Severity::Low)), SeverityClass::Safe);

        let other = SeverityClass::of(Some(&Severity::parse("SEVERE")));
        assert_eq!(other, SeverityClass::Neutral);
        assert_eq!(SeverityClass::of(None), SeverityClass::Neutral);
        assert!(!other.is_alert());
    }

    #[test]
    fn test_severity_label() {
        assert_eq!(severity_label(Some(&Severity::High)), "HIGH SEVERITY");
        assert_eq!(severity_label(Some(&Severity::parse("SEVERE"))), "SEVERE SEVERITY");
        assert_eq!(severity_label(None), "UNSPECIFIED SEVERITY");
        assert_eq!(severity_label(Some(&Severity::parse(""))), "UNSPECIFIED SEVERITY");
    }

    #[test]
    fn test_severity_counts() {
        let risks = vec![
            risk("a", Some("HIGH")),
            risk("b", Some("HIGH")),
            risk("c", Some("LOW")),
            risk("d", None),
        ];
        let counts = SeverityCounts::of(&risks);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 0);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.other, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_report_summary() {
        let report = report("R1", vec![risk("a", Some("LOW")), risk("b", Some("HIGH"))]);
        let summary = ReportSummary::of(&report);
        assert_eq!(summary.total_risks, 2);
        assert_eq!(summary.policies_analyzed, 5);
        assert_eq!(summary.date_processed, "Jan 2, 2025");
    }

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2025-06-01"), "Jun 1, 2025");
        assert_eq!(display_date("2025-06-01T13:45:00"), "Jun 1, 2025");
        assert_eq!(display_date("2025-06-01T13:45:00.123456"), "Jun 1, 2025");
        assert_eq!(display_date("2025-06-01T13:45:00Z"), "Jun 1, 2025");
        assert_eq!(display_date("N/A"), "N/A");
    }
}
