use std::fmt;
use std::io::{self, Write};

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Section,
    Banner,
}

/// Writes styled lines to any sink. `plain` disables colour and emphasis.
pub struct Output<'a, W: Write> {
    sink: &'a mut W,
    plain: bool,
}

impl<'a, W: Write> Output<'a, W> {
    pub fn new(sink: &'a mut W, plain: bool) -> Self {
        Self { sink, plain }
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = style(kind, message, self.plain);
        match kind {
            MessageKind::Section => writeln!(self.sink, "\n{}\n", formatted),
            _ => writeln!(self.sink, "{}", formatted),
        }
    }

    pub fn info(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Info, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    pub fn banner(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Banner, message)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.sink)
    }
}

pub fn style(kind: MessageKind, message: impl fmt::Display, plain: bool) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info | MessageKind::Banner => text,
    };
    if plain {
        return base;
    }
    match kind {
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Banner => base.bright_cyan().to_string(),
        MessageKind::Info => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_section_has_no_escape_codes() {
        assert_eq!(style(MessageKind::Section, " Documents ", true), "=== Documents ===");
    }

    #[test]
    fn output_writes_lines() {
        let mut buffer = Vec::new();
        {
            let mut out = Output::new(&mut buffer, true);
            out.info("Amount: $1.00").unwrap();
            out.section("Totals").unwrap();
        }
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Amount: $1.00\n\n=== Totals ===\n\n");
    }
}
