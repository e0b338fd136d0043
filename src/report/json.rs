use crate::report::SessionSummary;

pub fn render_summary_json(summary: &SessionSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
