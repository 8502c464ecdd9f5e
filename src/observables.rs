use crate::candidate::ZZCandidate;
use crate::category::{categorize, Category};
use crate::event::Event;
use crate::four_vector::FourVector;
use crate::selection::SelectionResult;

use noisy_float::prelude::*;
use serde::{Deserialize, Serialize};

/// Placeholder for observables that cannot be computed for an event
///
/// Far outside the physical mass range, so it never collides with a
/// real value.
pub const EMPTY_FLOAT: f64 = -99999.;

/// Invariant mass of the first four leptons of the combined
/// electron and muon collections, in collection order
///
/// `None` if the event has fewer than four leptons. This observable
/// deliberately ignores charges and flavors; it answers a different
/// question than the ZZ candidate masses and the two can disagree.
pub fn four_lepton_mass(event: &Event) -> Option<N64> {
    if event.n_leptons() < 4 {
        return None;
    }
    let p: FourVector = event.leptons().take(4).map(|l| l.p).sum();
    Some(p.m())
}

/// Per-event output record
///
/// Masses are in GeV, with [EMPTY_FLOAT] standing in for quantities
/// that cannot be computed. The candidate masses `mz1`, `mz2` and
/// `mzz` are taken from the first merged candidate, while the
/// selection steps quantify over all candidates of the event.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: usize,
    pub weight: f64,
    pub n_electron: usize,
    pub n_muon: usize,
    pub m4l: f64,
    pub mz1: f64,
    pub mz2: f64,
    pub mzz: f64,
    pub categories: Vec<Category>,
    pub steps: SelectionResult,
    pub accept: bool,
}

impl EventSummary {
    pub fn new(
        event: &Event,
        candidates: &[ZZCandidate],
        steps: SelectionResult,
    ) -> Self {
        let m4l = four_lepton_mass(event)
            .map(f64::from)
            .unwrap_or(EMPTY_FLOAT);
        let first = candidates.first();
        let mz1 = first.map(|c| f64::from(c.z1().m())).unwrap_or(EMPTY_FLOAT);
        let mz2 = first.map(|c| f64::from(c.z2().m())).unwrap_or(EMPTY_FLOAT);
        let mzz = first.map(|c| f64::from(c.m())).unwrap_or(EMPTY_FLOAT);
        Self {
            id: event.id(),
            weight: event.weight.into(),
            n_electron: event.electrons().len(),
            n_muon: event.muons().len(),
            m4l,
            mz1,
            mz2,
            mzz,
            categories: categorize(event),
            accept: steps.accepted(),
            steps,
        }
    }
}
