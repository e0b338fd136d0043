use crate::report::{SessionSummary, format_pct};

pub fn render_report_text(summary: &SessionSummary) -> String {
    let mut out = String::new();

    out.push_str("Crypto Basket Advisor Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Questionnaire\n");
    out.push_str(&format!(
        "Answered: {} of {}{}\n",
        summary.answered,
        summary.total_questions,
        if summary.finished { " (finished)" } else { "" }
    ));
    for line in &summary.answers {
        match (&line.answer, line.points) {
            (Some(answer), Some(points)) => {
                out.push_str(&format!("  {}: {} ({} pts)\n", line.title, answer, points))
            }
            _ => out.push_str(&format!("  {}: -\n", line.title)),
        }
    }
    out.push_str(&format!("Score: {}\n\n", format_pct(summary.score)));

    out.push_str("2. Allocation\n");
    out.push_str(&format!(
        "Risk tolerance: {}%\n",
        format_pct(summary.risk_tolerance)
    ));
    if summary.amount > 0 {
        out.push_str(&format!("Investment: {} USDC\n", summary.amount));
    }
    out.push_str(&format!("Mode: {}\n", summary.mode));
    for s in &summary.sliders {
        out.push_str(&format!(
            "  {:<12} {:>3}% (max {}%)\n",
            s.key, s.current, s.max
        ));
    }
    out.push_str(&format!(
        "Total: {}%{}\n",
        summary.allocation_sum,
        if summary.complete { "" } else { " (incomplete)" }
    ));
    if !summary.rejected.is_empty() {
        out.push_str("Rejected adjustments:\n");
        for r in &summary.rejected {
            out.push_str(&format!("  {} -> {}: {}\n", r.key, r.value, r.reason));
        }
    }
    for err in &summary.fetch_errors {
        out.push_str(&format!("Fetch error: {err}\n"));
    }
    out.push('\n');

    out.push_str("3. Basket match\n");
    for b in &summary.baskets {
        out.push_str(&format!(
            "  {} (risk {}%): {}% match\n",
            b.name,
            b.risk,
            format_pct(b.match_rate)
        ));
    }

    out
}
