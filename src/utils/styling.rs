//! Terminal styling utilities for step-by-step console output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ___  _   _ ___    _   ___  ___ ___  ___ ___
    |   \| | | | _ \  /_\ / __|/ __/ _ \| _ \ __|
    | |) | |_| |   / / _ \\__ \ (_| (_) |  _/ _|
    |___/ \___/|_|_\/_/ \_\___/\___\___/|_| |___|
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⚽").magenta().bold(),
        style("Winger durability before and after 22").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Settings shown in the configuration card
pub struct ConfigCard<'a> {
    pub input: &'a Path,
    pub output_dir: &'a Path,
    pub format: &'a str,
    pub dpi: u32,
    pub compare: &'a [String],
    pub prospect: &'a str,
    pub growth: &'a str,
}

/// Print configuration card
pub fn print_config(card: &ConfigCard<'_>) {
    let box_width = 60;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!("    │ {:<57}│", style("⚙️  Configuration").cyan().bold());
    println!("    ├{}┤", line);
    println!(
        "    │  {}Input:     {:<43}│",
        FOLDER,
        truncate_path(card.input, 42)
    );
    println!(
        "    │  {}Visuals:   {:<43}│",
        SAVE,
        truncate_string(
            &format!(
                "{} ({}, {} dpi)",
                card.output_dir.display(),
                card.format,
                card.dpi
            ),
            42
        )
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {}Compare:   {:<43}│",
        LINK,
        truncate_string(&card.compare.join(" vs "), 42)
    );
    println!(
        "    │  {}Prospect:  {:<43}│",
        TARGET,
        truncate_string(card.prospect, 42)
    );
    println!(
        "    │  {}Growth:    {:<43}│",
        CHART,
        style(truncate_string(card.growth, 42)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a section rule with a centred title
pub fn print_rule(title: &str) {
    let width: usize = 72;
    let title_len = console::measure_text_width(title) + 2;
    let side = width.saturating_sub(title_len) / 2;
    println!();
    println!(
        "    {} {} {}",
        style("─".repeat(side)).magenta(),
        style(title).magenta().bold(),
        style("─".repeat(side)).magenta()
    );
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print elapsed time for a step
pub fn print_step_time(elapsed: std::time::Duration) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Durascope analysis complete!").green().bold()
    );
    println!();
}

/// Print a styled key/value statistic line
pub fn print_stat(label: &str, value: impl std::fmt::Display) {
    println!("      {}: {}", label, style(value).yellow().bold());
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
