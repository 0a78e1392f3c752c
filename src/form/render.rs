//! Render
//!
//! Pure string renderers for the form: determinate progress bar, position
//! line, and the completion summary panel. Kept free of terminal I/O so
//! they can be unit tested directly.

use crate::plan::ProjectPlan;

/// Width of the progress bar in cells.
const BAR_WIDTH: usize = 40;

/// Render a determinate progress bar for a fraction in `(0, 1]`.
///
/// The filled cell count is rounded to the nearest cell, so each of the
/// five steps lands on a whole number of cells.
pub fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let percent = (fraction * 100.0).round() as u32;

    format!(
        "[{}{}] {:>3}%",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// "Question i of n" position line.
pub fn position_line(current: usize, total: usize) -> String {
    format!("Question {} of {}", current, total)
}

/// Render the completion summary panel, one line per answered question.
pub fn summary_panel(plan: &ProjectPlan) -> String {
    let w = 58;

    let pad = |s: &str| -> String {
        let padding = if s.len() < w { w - s.len() } else { 0 };
        format!("{}{}", s, " ".repeat(padding))
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "  {}{}{}",
        "\u{256D}",
        "\u{2500}".repeat(w),
        "\u{256E}"
    ));
    lines.push(format!(
        "  \u{2502}{}\u{2502}",
        pad("  Setup complete")
    ));
    lines.push(format!("  \u{2502}{}\u{2502}", " ".repeat(w)));

    for (label, value) in plan.entries() {
        lines.push(format!(
            "  \u{2502}{}\u{2502}",
            pad(&format!("  {:<14} {}", format!("{}:", label), value))
        ));
    }

    lines.push(format!(
        "  {}{}{}",
        "\u{2570}",
        "\u{2500}".repeat(w),
        "\u{256F}"
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_fill_per_step() {
        // N=5 -> 8 cells per step on a 40-cell bar
        assert_eq!(progress_bar(0.2).matches('\u{2588}').count(), 8);
        assert_eq!(progress_bar(0.4).matches('\u{2588}').count(), 16);
        assert_eq!(progress_bar(0.6).matches('\u{2588}').count(), 24);
        assert_eq!(progress_bar(0.8).matches('\u{2588}').count(), 32);
        assert_eq!(progress_bar(1.0).matches('\u{2588}').count(), 40);
    }

    #[test]
    fn test_progress_bar_percent_label() {
        assert!(progress_bar(0.2).ends_with(" 20%"));
        assert!(progress_bar(1.0).ends_with("100%"));
    }

    #[test]
    fn test_progress_bar_is_constant_width() {
        for fraction in [0.2, 0.4, 0.6, 0.8, 1.0] {
            let bar = progress_bar(fraction);
            let cells = bar
                .chars()
                .filter(|c| *c == '\u{2588}' || *c == '\u{2591}')
                .count();
            assert_eq!(cells, BAR_WIDTH);
        }
    }

    #[test]
    fn test_position_line() {
        assert_eq!(position_line(1, 5), "Question 1 of 5");
        assert_eq!(position_line(5, 5), "Question 5 of 5");
    }

    #[test]
    fn test_summary_panel_lists_every_answer() {
        let answers: Vec<String> = ["cli-tool", "rust", "none", "cargo", "sqlite"]
            .map(String::from)
            .to_vec();
        let plan = ProjectPlan::from_answers(&answers).unwrap();
        let panel = summary_panel(&plan);

        assert!(panel.contains("Setup complete"));
        assert!(panel.contains("Project type:"));
        assert!(panel.contains("cli-tool"));
        assert!(panel.contains("Database:"));
        assert!(panel.contains("sqlite"));
        // 2 borders + title + blank + 5 entries
        assert_eq!(panel.lines().count(), 9);
    }
}
