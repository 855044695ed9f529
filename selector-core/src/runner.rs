use crate::abi::load_abi;
use crate::config::ResolverConfig;
use crate::error::{CoreError, ReportError};
use crate::resolver::{ResolvedError, SearchOutcome, SelectorResolver};
use crate::traits::{Reporter, SelectorHasher};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Listed { count: usize },
    Matched(ResolvedError),
    NoMatch,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::NoMatch)
    }
}

pub struct SelectorRunner;

impl SelectorRunner {
    /// Load the ABI named by `config`, then list or search and report.
    ///
    /// Lines already written in list mode stay written if a later write fails.
    pub fn run<H, R>(
        config: &ResolverConfig,
        resolver: &SelectorResolver<H>,
        reporter: &mut R,
    ) -> Result<RunOutcome, CoreError>
    where
        H: SelectorHasher,
        R: Reporter,
    {
        let doc = load_abi(&config.abi_path, config.format)?;
        info!(
            "Loaded {} ABI entries ({} errors) from {}",
            doc.len(),
            doc.count_errors(),
            config.abi_path.display()
        );

        let Some(target) = &config.target else {
            let mut count = 0;
            for resolved in resolver.resolve(&doc) {
                reporter.found(&resolved).map_err(ReportError::from)?;
                count += 1;
            }
            debug!("Listed {} error selectors", count);
            return Ok(RunOutcome::Listed { count });
        };

        debug!("Searching for selector prefix {}", target);
        match resolver.search(&doc, target) {
            SearchOutcome::Matched(resolved) => {
                info!("Match found: {}", resolved.signature);
                reporter.matched(&resolved).map_err(ReportError::from)?;
                Ok(RunOutcome::Matched(resolved))
            }
            SearchOutcome::NoMatch => {
                reporter.no_match(target).map_err(ReportError::from)?;
                Ok(RunOutcome::NoMatch)
            }
        }
    }
}
