use clap::{ArgAction, Parser, ValueEnum};
use selector_core::{AbiFormat, LogConfig, ResolverConfig, SelectorPrefix, UsageError};
use std::path::PathBuf;

/// Find which custom error in a contract ABI produced a revert selector.
///
/// Without SELECTOR every error and its selector is listed. With SELECTOR
/// the first error whose selector starts with it is printed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ABI (JSON array, or an abigen Go binding)
    pub abi_path: Option<PathBuf>,

    /// Selector or selector prefix, hex with optional 0x
    pub selector: Option<String>,

    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable coloured log output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Go,
}

impl From<FormatArg> for AbiFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => AbiFormat::Json,
            FormatArg::Go => AbiFormat::GoBinding,
        }
    }
}

impl Args {
    pub fn to_resolver_config(&self) -> Result<ResolverConfig, UsageError> {
        let abi_path = self.abi_path.clone().ok_or(UsageError::MissingAbiPath)?;
        let mut config = ResolverConfig::new(abi_path);

        if let Some(format) = self.format {
            config = config.with_format(format.into());
        }
        if let Some(selector) = &self.selector {
            config = config.with_target(SelectorPrefix::parse(selector)?);
        }

        Ok(config)
    }

    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            verbosity: self.verbose,
            quiet: self.quiet,
            color: !self.no_color,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("find-error").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_mode_config() {
        let config = parse(&["abi/Store.json"]).to_resolver_config().unwrap();
        assert_eq!(config.abi_path, PathBuf::from("abi/Store.json"));
        assert_eq!(config.format, AbiFormat::Json);
        assert!(config.target.is_none());
    }

    #[test]
    fn test_search_mode_normalises_selector() {
        let config = parse(&["abi/Store.json", "7E27"]).to_resolver_config().unwrap();
        assert_eq!(config.target.unwrap().as_str(), "0x7e27");
    }

    #[test]
    fn test_go_binding_detected_and_overridden() {
        let config = parse(&["goabi/registry-relay.go"])
            .to_resolver_config()
            .unwrap();
        assert_eq!(config.format, AbiFormat::GoBinding);

        let config = parse(&["--format", "json", "goabi/registry-relay.go"])
            .to_resolver_config()
            .unwrap();
        assert_eq!(config.format, AbiFormat::Json);
    }

    #[test]
    fn test_missing_abi_path_is_usage_error() {
        let err = parse(&[]).to_resolver_config().unwrap_err();
        assert_eq!(err, UsageError::MissingAbiPath);
    }

    #[test]
    fn test_invalid_selector_is_usage_error() {
        let err = parse(&["abi.json", "0xnothex"])
            .to_resolver_config()
            .unwrap_err();
        assert!(matches!(err, UsageError::InvalidSelector { .. }));
    }

    #[test]
    fn test_log_config() {
        let log = parse(&["-vv", "--no-color", "abi.json"]).to_log_config();
        assert_eq!(log.verbosity, 2);
        assert!(!log.color);
        assert!(!log.quiet);
        assert!(log.log_file.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["find-error", "-q", "-v", "abi.json"]);
        assert!(result.is_err());
    }
}
