use crate::candidate::ZZCandidate;
use crate::event::Event;
use crate::observables::EventSummary;
use crate::selection::SelectionResult;

pub trait TryConvert<From, To> {
    type Error;

    fn try_convert(&mut self, f: From) -> Result<To, Self::Error>;
}

/// Build the ZZ candidates of an event
///
/// Implementations have to be pure: no shared mutable state, and
/// identical events yield identical candidate lists.
pub trait Reconstruct {
    fn reconstruct(&self, event: &Event) -> Vec<ZZCandidate>;
}

/// Evaluate the selection steps of an event
pub trait Select {
    fn select(
        &self,
        event: &Event,
        candidates: &[ZZCandidate],
    ) -> SelectionResult;
}

/// Write the per-event analysis records
pub trait WriteSummaries {
    type Error;

    fn write(&mut self, summaries: &[EventSummary])
        -> Result<(), Self::Error>;
}

pub trait Progress {
    fn inc(&self, i: u64);

    fn finish(&self);
}
