use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

fn status_line(style: Style, label: &str, message: &str) -> String {
    format!("{:>12} {message}", style.for_stderr().apply_to(label))
}

fn print_status(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", status_line(style, label, message));
}

/// Print a step of the pipeline: `  Installing node v20.11.1 (from "^20")`.
///
/// The label is right-aligned to 12 columns in bold green.
pub fn status(label: &str, message: &str) {
    print_status(Style::new().green().bold(), label, message);
}

/// A step that was satisfied without work, such as a cache hit. Bold cyan.
pub fn status_info(label: &str, message: &str) {
    print_status(Style::new().cyan().bold(), label, message);
}

/// Something was skipped or degraded but the run continues. Bold yellow.
pub fn status_warn(label: &str, message: &str) {
    print_status(Style::new().yellow().bold(), label, message);
}

/// Create a byte-counting progress bar for downloads of known size.
pub fn download_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::with_template("  {bar:40.cyan/dim} {bytes}/{total_bytes} ({eta})")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_is_right_aligned() {
        assert_eq!(
            status_line(Style::new(), "Skipping", "packages/web"),
            "    Skipping packages/web"
        );
        assert_eq!(
            status_line(Style::new(), "Downloading", "node"),
            " Downloading node"
        );
    }
}
