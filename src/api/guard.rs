use crate::{errorrate::EstimatorTrait, logging};
use thiserror::Error;

/// `GuardError` is returned by `guard` when the event was either bounced or attempted and failed.
#[derive(Debug, Error)]
pub enum GuardError<E> {
    /// The error rate is exceeded, the event was not attempted.
    #[error("error rate exceeded, event bounced")]
    Bounced,
    /// The event was attempted and failed, the failure has been recorded.
    #[error("{0}")]
    Failed(E),
}

impl<E> GuardError<E> {
    pub fn is_bounced(&self) -> bool {
        matches!(self, Self::Bounced)
    }

    /// `into_inner` returns the failure of the attempted event, if any.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Bounced => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// `guard` runs `task` under `estimator`.
/// Bounced events never run `task`; attempted ones report their outcome.
pub fn guard<H, F, T, E>(estimator: &H, task: F) -> Result<T, GuardError<E>>
where
    H: EstimatorTrait + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    if estimator.is_exceeded() {
        logging::debug!(
            "[ErrorRate] Event bounced, error probability {}",
            estimator.probability()
        );
        return Err(GuardError::Bounced);
    }
    let result = task();
    record_result(estimator, &result);
    result.map_err(GuardError::Failed)
}

/// `record_result` reports an event attempted outside of `guard`.
#[inline]
pub fn record_result<H, T, E>(estimator: &H, result: &Result<T, E>)
where
    H: EstimatorTrait + ?Sized,
{
    estimator.record_outcome(result.is_err());
}
