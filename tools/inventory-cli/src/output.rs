//! Output formatting for the CLI.
//!
//! Human output goes to stdout with a status glyph per line; warnings and
//! errors go to stderr. In JSON mode only `json` and `error` print anything.

use console::{style, StyledObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Human { verbose: bool },
    Json,
}

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json { Mode::Json } else { Mode::Human { verbose } };
        Self { mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn is_human(&self) -> bool {
        !self.is_json()
    }

    fn line(&self, glyph: StyledObject<&str>, msg: &str) {
        if self.is_human() {
            println!("{} {}", glyph, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if self.is_human() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors print in both modes; JSON mode emits `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Human { .. } => eprintln!("{} {}", style("✗").red(), style(msg).red()),
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.mode == (Mode::Human { verbose: true }) {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if self.is_human() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.is_human() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.is_human() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.is_human() {
            println!("  {}", pad_columns(cols, widths));
        }
    }
}

/// Colored label for a guard decision.
pub fn decision_badge(decision: &str) -> String {
    match decision {
        "open" => style(decision).green().to_string(),
        "redirect_login" => style(decision).yellow().to_string(),
        "redirect_unauthorized" => style(decision).red().to_string(),
        _ => decision.to_string(),
    }
}

fn pad_columns(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}
