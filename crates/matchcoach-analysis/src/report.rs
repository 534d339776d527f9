//! Plain-text match report

use matchcoach_core::{AnalysisOutcome, MatchTelemetry};

/// Bullet prefix for every list item
pub const BULLET: &str = "• ";

const TITLE: &str = "Match Review Report";
const NO_HIGHLIGHTS: &str = "No notable highlights";
const NO_MISTAKES: &str = "Overall performance solid";

/// Renders an analysis outcome into the fixed report layout
///
/// Output is byte-stable: lines are joined with `\n` and there is no trailing
/// newline. The suggestions section disappears entirely when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the report
    pub fn render(&self, telemetry: &MatchTelemetry, outcome: &AnalysisOutcome) -> String {
        let mut lines = vec![
            TITLE.to_string(),
            format!("Subject: {} | Position: {}", telemetry.subject_name, telemetry.position),
            format!(
                "KDA: {:.1} | Participation: {:.1}%",
                telemetry.kda, telemetry.participation_rate
            ),
            format!(
                "Kills/Deaths/Assists: {}/{}/{}",
                telemetry.kills, telemetry.deaths, telemetry.assists
            ),
        ];

        push_section(&mut lines, "Highlights:", &outcome.highlights, Some(NO_HIGHLIGHTS));
        push_section(&mut lines, "Needs improvement:", &outcome.mistakes, Some(NO_MISTAKES));
        push_section(&mut lines, "Suggestions:", &outcome.suggestions, None);

        lines.join("\n")
    }
}

/// Append a blank separator, header and bulleted items
///
/// An empty list gets the placeholder line, or no section at all when there
/// is no placeholder.
fn push_section(lines: &mut Vec<String>, header: &str, items: &[String], placeholder: Option<&str>) {
    if items.is_empty() && placeholder.is_none() {
        return;
    }

    lines.push(String::new());
    lines.push(header.to_string());

    if items.is_empty() {
        lines.extend(placeholder.map(|p| format!("{}{}", BULLET, p)));
    } else {
        lines.extend(items.iter().map(|item| format!("{}{}", BULLET, item)));
    }
}
