//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unzipr_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
    err_term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut result = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(
        &self,
        destination: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.term.write_line(&format!(
                "{} Extraction complete",
                style("✓").green().bold()
            ))?;
        } else {
            self.term.write_line("Extraction complete")?;
        }

        self.term
            .write_line(&format!("  Destination:     {}", destination.display()))?;
        self.term.write_line(&format!(
            "  Files extracted: {}",
            Self::format_number(report.files_extracted)
        ))?;
        self.term.write_line(&format!(
            "  Directories:     {}",
            Self::format_number(report.directories_created)
        ))?;
        self.term.write_line(&format!(
            "  Total size:      {}",
            Self::format_size(report.bytes_written)
        ))?;

        if self.verbose {
            self.term
                .write_line(&format!("  Duration:        {:?}", report.duration))?;
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        if console::colors_enabled_stderr() {
            let _ = self
                .err_term
                .write_line(&format!("{} {error:?}", style("Error:").red().bold()));
        } else {
            let _ = self.err_term.write_line(&format!("Error: {error:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(HumanFormatter::format_size(0), "0 B");
        assert_eq!(HumanFormatter::format_size(512), "512 B");
        assert_eq!(HumanFormatter::format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(HumanFormatter::format_size(1024), "1.0 KB");
        assert_eq!(HumanFormatter::format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(HumanFormatter::format_size(1024 * 1024), "1.0 MB");
        assert_eq!(HumanFormatter::format_size(1536 * 1024), "1.5 MB");
    }

    #[test]
    fn test_format_size_gigabytes() {
        assert_eq!(HumanFormatter::format_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(HumanFormatter::format_size(u64::MAX), "17179869184.0 GB");
    }

    #[test]
    fn test_format_number_small() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(42), "42");
        assert_eq!(HumanFormatter::format_number(999), "999");
    }

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(12_345), "12,345");
        assert_eq!(HumanFormatter::format_number(123_456), "123,456");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }
}
