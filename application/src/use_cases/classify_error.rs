//! Error classification
//!
//! Maps any failure raised while handling an inquiry to an [`ErrorKind`]
//! and its fixed [`ResolutionOutcome`].

use helpdesk_domain::{ErrorKind, HelpdeskError, ResolutionOutcome, Severity};
use std::error::Error;
use tracing::{error, warn};

/// Stateless classifier over the error's `source()` chain.
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Kind of the first [`HelpdeskError`] found in the chain, or
    /// [`ErrorKind::Unknown`].
    pub fn classify(err: &(dyn Error + 'static)) -> ErrorKind {
        let mut current: Option<&(dyn Error + 'static)> = Some(err);
        while let Some(e) = current {
            if let Some(tagged) = e.downcast_ref::<HelpdeskError>() {
                return tagged.kind;
            }
            current = e.source();
        }
        ErrorKind::Unknown
    }

    /// Fixed response for `kind`.
    pub fn respond(kind: ErrorKind) -> ResolutionOutcome {
        ResolutionOutcome::from_error_kind(kind)
    }

    /// Classify once, log at the kind's severity, and build the response.
    pub fn handle(err: &(dyn Error + 'static), context: &str) -> (ErrorKind, ResolutionOutcome) {
        let kind = Self::classify(err);
        match kind.severity() {
            Severity::Warning => warn!(kind = %kind, context, error = %err, "Inquiry failed"),
            Severity::Error => error!(kind = %kind, context, error = %err, "Inquiry failed"),
        }
        (kind, Self::respond(kind))
    }
}
