use crate::abi::{AbiDocument, AbiError};
use crate::selector::{ErrorSignature, Keccak256, Selector, SelectorPrefix};
use crate::traits::SelectorHasher;
use tracing::trace;

/// An error declaration paired with its computed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedError {
    pub name: String,
    pub signature: ErrorSignature,
    pub selector: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matched(ResolvedError),
    NoMatch,
}

impl SearchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, SearchOutcome::Matched(_))
    }
}

/// Maps error declarations to selectors with an injected hasher.
#[derive(Debug, Clone, Default)]
pub struct SelectorResolver<H = Keccak256> {
    hasher: H,
}

impl<H: SelectorHasher> SelectorResolver<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    pub fn selector_for(&self, signature: &ErrorSignature) -> Selector {
        Selector::compute(&self.hasher, signature)
    }

    pub fn resolve_error(&self, error: &AbiError) -> ResolvedError {
        let signature = ErrorSignature::new(&error.name, &error.inputs);
        let selector = self.selector_for(&signature);
        trace!("{} -> {}", signature, selector);

        ResolvedError {
            name: error.name.clone(),
            signature,
            selector,
        }
    }

    /// Lazily resolve every error in declaration order.
    pub fn resolve<'a>(
        &'a self,
        doc: &'a AbiDocument,
    ) -> impl Iterator<Item = ResolvedError> + 'a {
        doc.errors().map(move |error| self.resolve_error(error))
    }

    /// First error whose selector starts with `target`. Entries after the
    /// match are never hashed.
    pub fn search(&self, doc: &AbiDocument, target: &SelectorPrefix) -> SearchOutcome {
        match self.resolve(doc).find(|resolved| target.matches(&resolved.selector)) {
            Some(resolved) => SearchOutcome::Matched(resolved),
            None => SearchOutcome::NoMatch,
        }
    }
}
