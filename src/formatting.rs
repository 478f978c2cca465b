use crate::host::{Reporter, Severity};
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),   // line text, separators
    pub header: (u8, u8, u8),  // table headers
    pub date: (u8, u8, u8),    // M/D/YY dates
    pub days: (u8, u8, u8),    // day counts
    pub info: (u8, u8, u8),
    pub warning: (u8, u8, u8),
    pub error: (u8, u8, u8),
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),   // Gray
        header: (148, 226, 213),  // Teal
        date: (137, 180, 250),    // Blue
        days: (166, 227, 161),    // Green
        info: (166, 227, 161),    // Green
        warning: (249, 226, 175), // Yellow
        error: (243, 139, 168),   // Red
    };
}

/// Formatting context passed through the console output
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }

    pub fn format_header(&self, text: &str) -> String {
        self.paint(text, self.palette.header, true)
    }

    pub fn format_date(&self, text: &str) -> String {
        self.paint(text, self.palette.date, false)
    }

    pub fn format_days(&self, days: u32) -> String {
        self.paint(&days.to_string(), self.palette.days, true)
    }

    pub fn format_muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }

    pub fn format_notice(&self, severity: Severity, message: &str) -> String {
        match severity {
            Severity::Info => self.paint(message, self.palette.info, false),
            Severity::Warning => {
                let label = self.paint("warning:", self.palette.warning, true);
                format!("{label} {message}")
            }
            Severity::Error => {
                let label = self.paint("error:", self.palette.error, true);
                format!("{label} {message}")
            }
        }
    }
}

/// Prints notices to the terminal. Info goes to stdout unless stdout is
/// carrying document text (`--dry-run`).
pub struct ConsoleReporter {
    ctx: FormatContext,
    stdout_busy: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool, stdout_busy: bool) -> Self {
        Self { ctx: FormatContext::new(use_color), stdout_busy }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        let line = self.ctx.format_notice(severity, message);
        if severity == Severity::Info && !self.stdout_busy {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_context_no_color() {
        let ctx = FormatContext::new(false);
        assert_eq!(ctx.format_header("Date"), "Date");
        assert_eq!(ctx.format_days(78), "78");
        assert_eq!(ctx.format_notice(Severity::Info, "done"), "done");
        assert_eq!(ctx.format_notice(Severity::Warning, "bad"), "warning: bad");
        assert_eq!(ctx.format_notice(Severity::Error, "worse"), "error: worse");
    }

    #[test]
    fn test_format_context_with_color() {
        let ctx = FormatContext::new(true);
        let date = ctx.format_date("3/1/25");
        assert!(date.contains("3/1/25"));
        assert!(date.len() > "3/1/25".len()); // Has ANSI codes
    }
}
