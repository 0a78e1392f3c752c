//! Banner
//!
//! Startup banner shown before the first question.

use colored::Colorize;

const TITLE: &str = "Automanic Project Setup";
const SUBTITLE: &str = "Five quick questions about your new project.";

/// Print the startup banner.
pub fn show_banner() {
    let w = 58;

    let pad = |s: &str| -> String {
        let padding = if s.len() < w { w - s.len() } else { 0 };
        format!("{}{}", s, " ".repeat(padding))
    };

    let border_top = format!("  {}{}{}", "\u{256D}", "\u{2500}".repeat(w), "\u{256E}");
    let border_bot = format!("  {}{}{}", "\u{2570}", "\u{2500}".repeat(w), "\u{256F}");
    let empty_line = format!("  \u{2502}{}\u{2502}", " ".repeat(w));

    println!();
    println!("{}", border_top.cyan());
    println!("{}", empty_line.cyan());
    println!(
        "{}",
        format!("  \u{2502}{}\u{2502}", pad(&format!("  {}", TITLE))).cyan()
    );
    println!(
        "{}",
        format!("  \u{2502}{}\u{2502}", pad(&format!("  {}", SUBTITLE))).cyan()
    );
    println!("{}", empty_line.cyan());
    println!("{}", border_bot.cyan());
    println!();
}
