use crate::resolver::ResolvedError;
use crate::selector::SelectorPrefix;
use std::io;

/// A pure, stateless 32-byte digest over the signature bytes.
pub trait SelectorHasher {
    fn digest(&self, data: &[u8]) -> [u8; 32];
}

impl<H: SelectorHasher + ?Sized> SelectorHasher for &H {
    fn digest(&self, data: &[u8]) -> [u8; 32] {
        (**self).digest(data)
    }
}

/// Sink for the human-readable result lines of a run.
pub trait Reporter {
    /// List mode, one call per error in declaration order.
    fn found(&mut self, error: &ResolvedError) -> io::Result<()>;

    /// Search mode, first match.
    fn matched(&mut self, error: &ResolvedError) -> io::Result<()>;

    /// Search mode, document exhausted.
    fn no_match(&mut self, target: &SelectorPrefix) -> io::Result<()>;
}
