use crate::abi::AbiFormat;
use crate::selector::SelectorPrefix;
use std::path::PathBuf;

/// What a single run reads and looks for.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub abi_path: PathBuf,
    pub format: AbiFormat,
    /// `None` lists every error; `Some` searches for the first match.
    pub target: Option<SelectorPrefix>,
}

impl ResolverConfig {
    pub fn new(abi_path: impl Into<PathBuf>) -> Self {
        let abi_path = abi_path.into();
        Self {
            format: AbiFormat::detect(&abi_path),
            abi_path,
            target: None,
        }
    }

    pub fn with_target(mut self, target: SelectorPrefix) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_format(mut self, format: AbiFormat) -> Self {
        self.format = format;
        self
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Number of `-v` flags: 0 warn, 1 info, 2 debug, 3+ trace.
    pub verbosity: u8,
    pub quiet: bool,
    pub color: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            quiet: false,
            color: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    pub fn console_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
