use crate::observables::EventSummary;
use crate::selection::SelectionResult;

use log::info;
use noisy_float::prelude::*;

/// Cut-flow bookkeeping over a batch of events
///
/// Counts per-step passes and sums event weights before and after
/// the selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionStats {
    pub n_events: u64,
    pub n_selected: u64,
    pub sum_wt: N64,
    pub sum_wt_selected: N64,
    step_passed: [u64; SelectionResult::STEP_NAMES.len()],
}

impl SelectionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one analyzed event
    pub fn record(&mut self, summary: &EventSummary) {
        self.n_events += 1;
        self.sum_wt += n64(summary.weight);
        if summary.accept {
            self.n_selected += 1;
            self.sum_wt_selected += n64(summary.weight);
        }
        for (passed, (_name, pass)) in
            self.step_passed.iter_mut().zip(summary.steps.steps())
        {
            if pass {
                *passed += 1;
            }
        }
    }

    /// Events passing each step, in step order
    pub fn step_counts(
        &self,
    ) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        SelectionResult::STEP_NAMES
            .iter()
            .copied()
            .zip(self.step_passed.iter().copied())
    }

    /// Merge the counts of another batch into this one
    pub fn combine(&mut self, other: &SelectionStats) {
        self.n_events += other.n_events;
        self.n_selected += other.n_selected;
        self.sum_wt += other.sum_wt;
        self.sum_wt_selected += other.sum_wt_selected;
        for (mine, theirs) in
            self.step_passed.iter_mut().zip(other.step_passed.iter())
        {
            *mine += theirs;
        }
    }

    /// Write the cut flow to the log
    pub fn log_summary(&self) {
        info!(
            "Selected {} of {} events (Σw = {:.3e} of {:.3e})",
            self.n_selected, self.n_events, self.sum_wt_selected, self.sum_wt
        );
        for (name, passed) in self.step_counts() {
            info!("  {name}: {passed} passed");
        }
    }
}
