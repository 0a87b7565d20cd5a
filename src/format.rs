use crate::compare::{Category, Comparison, Tint};
use anstyle::{AnsiColor, Style};
use std::fmt::{Display, Formatter, Result};

/// Struct used to adjust the formatting of a `Comparison`
#[derive(Debug)]
pub struct ReportFormatter {
    with_color: bool,

    plain: Style,
    green: Style,
    red: Style,
}

impl ReportFormatter {
    /// Construct a new formatter
    pub fn new() -> Self {
        Self {
            with_color: false,

            plain: Style::new(),
            green: AnsiColor::BrightGreen.on_default(),
            red: AnsiColor::BrightRed.on_default(),
        }
    }

    /// Enable formatting a report with color
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Returns a `Display` impl which can be used to print a Comparison
    pub fn fmt_report<'a>(&'a self, comparison: &'a Comparison<'a>) -> impl Display + 'a {
        ReportDisplay { f: self, comparison }
    }

    fn fmt_line<'a>(&'a self, category: Category, line: &'a str) -> impl Display + 'a {
        LineDisplay {
            f: self,
            category,
            line,
        }
    }

    fn style(&self, tint: Tint) -> Style {
        match tint {
            Tint::Plain => self.plain,
            Tint::Green => self.green,
            Tint::Red => self.red,
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Comparison<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", ReportFormatter::new().fmt_report(self))
    }
}

struct ReportDisplay<'a> {
    f: &'a ReportFormatter,
    comparison: &'a Comparison<'a>,
}

impl Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (category, line) in self.comparison.entries() {
            write!(f, "{}", self.f.fmt_line(category, line))?;
        }

        Ok(())
    }
}

struct LineDisplay<'a> {
    f: &'a ReportFormatter,
    category: Category,
    line: &'a str,
}

impl Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let style = self.f.style(self.category.tint());
        let with_color = self.f.with_color && style != self.f.plain;

        if with_color {
            write!(f, "{}", style.render())?;
        }

        write!(f, "{} {}", self.category.marker(), self.line)?;

        if with_color {
            write!(f, "{}", style.render_reset())?;
        }

        writeln!(f)
    }
}
