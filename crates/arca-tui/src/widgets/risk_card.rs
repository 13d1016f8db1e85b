//! One risk entry rendered as a block of lines for the results list.

use arca_core::{severity_label, RiskEntry, SeverityClass};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme::{icons::IconSet, styles};

/// Ticks per half pulse of a HIGH badge (50ms ticks, so ~0.5s)
const PULSE_TICKS: u64 = 10;

pub struct RiskCard<'a> {
    risk: &'a RiskEntry,
    icons: IconSet,
    tick: u64,
}

impl<'a> RiskCard<'a> {
    pub fn new(risk: &'a RiskEntry, icons: IconSet) -> Self {
        Self {
            risk,
            icons,
            tick: 0,
        }
    }

    /// Animation frame, used to pulse HIGH badges.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn class(&self) -> SeverityClass {
        SeverityClass::of(self.risk.severity.as_ref())
    }

    fn pulse_on(&self) -> bool {
        self.class().is_alert() && (self.tick / PULSE_TICKS) % 2 == 1
    }

    /// Badge line, labeled sections, then a blank separator.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let class = self.class();
        let accent = styles::severity_accent(class);

        let mut lines = vec![Line::from(vec![
            Span::styled(self.icons.severity(class), accent.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", severity_label(self.risk.severity.as_ref())),
                styles::severity_badge(class, self.pulse_on()),
            ),
            Span::raw("  "),
            Span::styled("Policy ", styles::text_muted()),
            Span::styled(self.risk.policy_id.as_str(), styles::accent_bold()),
        ])];

        lines.extend(section("Divergence", &self.risk.divergence_summary, false));
        lines.extend(section(
            "Conflicting policy",
            &self.risk.conflicting_policy_excerpt,
            true,
        ));
        lines.extend(section("New rule", &self.risk.new_rule_excerpt, true));
        lines.extend(section("Recommendation", &self.risk.recommendation, false));
        lines.push(Line::default());
        lines
    }
}

/// Label line followed by the indented body; excerpts are italicized.
fn section<'a>(label: &'static str, body: &'a str, excerpt: bool) -> Vec<Line<'a>> {
    let body_style = if excerpt {
        styles::text_secondary().add_modifier(Modifier::ITALIC)
    } else {
        styles::text_primary()
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("  {label}"),
        styles::text_muted().add_modifier(Modifier::BOLD),
    ))];
    if body.trim().is_empty() {
        lines.push(Line::from(Span::styled("    -", styles::text_muted())));
    } else {
        lines.extend(
            body.lines()
                .map(|l| Line::from(vec![Span::raw("    "), Span::styled(l, body_style)])),
        );
    }
    lines
}
