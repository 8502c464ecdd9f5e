use crate::event::Event;
use crate::lepton::{Flavor, Lepton};

use noisy_float::prelude::*;
use serde::{Deserialize, Serialize};

/// Kinematic requirements on a single lepton
#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LeptonCuts {
    /// Minimum transverse momentum in GeV
    pub min_pt: f64,
    /// Maximum absolute pseudorapidity
    pub max_abs_eta: f64,
}

impl Default for LeptonCuts {
    fn default() -> Self {
        Self {
            min_pt: 7.,
            max_abs_eta: 2.5,
        }
    }
}

/// Object-level lepton preselection
///
/// Restricts the event's lepton collections to leptons passing
/// per-flavor kinematic requirements. Everything downstream operates
/// on the restricted collections only.
#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ObjectSelection {
    pub electron: LeptonCuts,
    pub muon: LeptonCuts,
}

impl Default for ObjectSelection {
    fn default() -> Self {
        Self {
            electron: LeptonCuts {
                min_pt: 7.,
                max_abs_eta: 2.5,
            },
            muon: LeptonCuts {
                min_pt: 5.,
                max_abs_eta: 2.4,
            },
        }
    }
}

impl ObjectSelection {
    /// Whether the given lepton passes its flavor's requirements
    pub fn passes(&self, lepton: &Lepton) -> bool {
        let cuts = match lepton.flavor {
            Flavor::Electron => &self.electron,
            Flavor::Muon => &self.muon,
        };
        lepton.pt() > cuts.min_pt
            && lepton.p.pseudorapidity().abs() < cuts.max_abs_eta
    }

    /// Drop all leptons failing the requirements
    pub fn select(&self, mut event: Event) -> Event {
        event.retain_leptons(|l| self.passes(l));
        event
    }
}
