use crate::resolver::ResolvedError;
use crate::selector::SelectorPrefix;
use crate::traits::Reporter;
use std::io::{self, Write};

/// Writes one line per event and flushes, so list output streams.
pub struct LineReporter<W: Write> {
    out: W,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl LineReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn found(&mut self, error: &ResolvedError) -> io::Result<()> {
        self.line(format_args!(
            "Found error type: {} with selector: {}",
            error.name, error.selector
        ))
    }

    fn matched(&mut self, error: &ResolvedError) -> io::Result<()> {
        self.line(format_args!(
            "Matched Error: {} -> {}",
            error.signature, error.selector
        ))
    }

    fn no_match(&mut self, target: &SelectorPrefix) -> io::Result<()> {
        self.line(format_args!("No matching error found for selector {target}"))
    }
}
