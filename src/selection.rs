use crate::candidate::ZZCandidate;
use crate::event::Event;
use crate::traits::Select;

use noisy_float::prelude::*;
use serde::{Deserialize, Serialize};

/// Thresholds of the four-lepton selection, in GeV where applicable
///
/// The defaults implement the standard selection: every Z candidate
/// inside 12 < m < 120, the Z1 candidate above 40, the ZZ candidate
/// above 70, leading and subleading lepton above 20 and 10.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionCuts {
    /// Minimum number of selected leptons
    pub min_leptons: usize,
    /// Lower edge of the Z candidate mass window
    pub z_mass_min: f64,
    /// Upper edge of the Z candidate mass window
    pub z_mass_max: f64,
    /// Minimum Z1 candidate mass
    pub z1_mass_min: f64,
    /// Minimum ZZ candidate mass
    pub zz_mass_min: f64,
    /// Lower edge of the diagnostic signal window
    pub h_window_min: f64,
    /// Upper edge of the diagnostic signal window
    pub h_window_max: f64,
    /// Minimum transverse momentum of the leading lepton
    pub leading_pt: f64,
    /// Minimum transverse momentum of the subleading lepton
    pub subleading_pt: f64,
}

impl Default for SelectionCuts {
    fn default() -> Self {
        Self {
            min_leptons: 4,
            z_mass_min: 12.,
            z_mass_max: 120.,
            z1_mass_min: 40.,
            zz_mass_min: 70.,
            h_window_min: 105.,
            h_window_max: 140.,
            leading_pt: 20.,
            subleading_pt: 10.,
        }
    }
}

/// Outcome of all selection steps for one event
///
/// Candidate-dependent steps hold if *any* candidate of the event
/// passes; an event without candidates fails all of them.
#[derive(
    Deserialize, Serialize, Clone, Copy, Debug, Default, Eq, PartialEq,
)]
pub struct SelectionResult {
    /// At least `min_leptons` selected leptons
    pub four_leptons: bool,
    /// Leading and subleading lepton pass their momentum thresholds
    pub lepton_pt: bool,
    /// Some candidate has both Z masses inside the mass window
    pub m_z: bool,
    /// Some candidate has a Z1 mass above the threshold
    pub m_z1: bool,
    /// Some candidate has a ZZ mass above the threshold
    pub m_zz: bool,
    /// Some candidate falls inside the signal window; diagnostic
    /// only, not part of the event decision
    pub h_window: bool,
}

impl SelectionResult {
    /// Names of all selection steps, in evaluation order
    pub const STEP_NAMES: [&'static str; 6] = [
        "four_leptons",
        "lepton_pt",
        "m_z",
        "m_z1",
        "m_zz",
        "h_window",
    ];

    /// All steps with their outcome, in evaluation order
    pub fn steps(&self) -> [(&'static str, bool); 6] {
        [
            ("four_leptons", self.four_leptons),
            ("lepton_pt", self.lepton_pt),
            ("m_z", self.m_z),
            ("m_z1", self.m_z1),
            ("m_zz", self.m_zz),
            ("h_window", self.h_window),
        ]
    }

    /// The event decision: the conjunction of all gating steps
    pub fn accepted(&self) -> bool {
        self.four_leptons && self.lepton_pt && self.m_z && self.m_z1 && self.m_zz
    }
}

/// The standard four-lepton selection
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StandardSelection {
    cuts: SelectionCuts,
}

impl StandardSelection {
    pub fn new(cuts: SelectionCuts) -> Self {
        Self { cuts }
    }

    pub fn cuts(&self) -> &SelectionCuts {
        &self.cuts
    }

    fn passes_lepton_pt(&self, event: &Event) -> bool {
        let mut pts: Vec<N64> = event.leptons().map(|l| l.pt()).collect();
        pts.sort_unstable_by(|a, b| b.cmp(a));
        pts.len() >= 2
            && pts[0] > self.cuts.leading_pt
            && pts[1] > self.cuts.subleading_pt
    }
}

impl Select for StandardSelection {
    fn select(
        &self,
        event: &Event,
        candidates: &[ZZCandidate],
    ) -> SelectionResult {
        let cuts = &self.cuts;
        let in_window =
            |m: N64| m > cuts.z_mass_min && m < cuts.z_mass_max;
        SelectionResult {
            four_leptons: event.n_leptons() >= cuts.min_leptons,
            lepton_pt: self.passes_lepton_pt(event),
            m_z: candidates
                .iter()
                .any(|c| in_window(c.z1().m()) && in_window(c.z2().m())),
            m_z1: candidates.iter().any(|c| c.z1().m() > cuts.z1_mass_min),
            m_zz: candidates.iter().any(|c| c.m() > cuts.zz_mass_min),
            h_window: candidates.iter().any(|c| {
                c.m() > cuts.h_window_min && c.m() < cuts.h_window_max
            }),
        }
    }
}
