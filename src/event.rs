use crate::four_vector::FourVector;
use crate::lepton::{Charge, Flavor, Lepton, LeptonRef};

use std::convert::From;
use std::default::Default;

use noisy_float::prelude::*;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone)]
pub struct EventBuilder {
    id: usize,
    weight: N64,

    electrons: Vec<Lepton>,
    muons: Vec<Lepton>,
}

impl EventBuilder {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            weight: n64(1.),
            electrons: Vec::new(),
            muons: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn weight(&mut self, weight: N64) -> &mut Self {
        self.weight = weight;
        self
    }

    /// Add a lepton to the collection matching its flavor
    pub fn add_lepton(&mut self, lepton: Lepton) -> &mut Self {
        match lepton.flavor {
            Flavor::Electron => self.electrons.push(lepton),
            Flavor::Muon => self.muons.push(lepton),
        }
        self
    }

    pub fn build(self) -> Event {
        Event {
            id: self.id,
            weight: self.weight,
            electrons: self.electrons,
            muons: self.muons,
        }
    }
}

impl From<EventBuilder> for Event {
    fn from(b: EventBuilder) -> Self {
        b.build()
    }
}

/// A scattering event with its selected lepton collections
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Default)]
pub struct Event {
    id: usize,
    pub weight: N64,

    electrons: Vec<Lepton>,
    muons: Vec<Lepton>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn electrons(&self) -> &[Lepton] {
        &self.electrons
    }

    pub fn muons(&self) -> &[Lepton] {
        &self.muons
    }

    /// The lepton collection of the given flavor
    pub fn leptons_of(&self, flavor: Flavor) -> &[Lepton] {
        match flavor {
            Flavor::Electron => &self.electrons,
            Flavor::Muon => &self.muons,
        }
    }

    /// All leptons, electrons before muons, in collection order
    pub fn leptons(&self) -> impl Iterator<Item = &Lepton> {
        self.electrons.iter().chain(self.muons.iter())
    }

    /// Total number of leptons
    pub fn n_leptons(&self) -> usize {
        self.electrons.len() + self.muons.len()
    }

    /// Resolve a lepton reference
    pub fn lepton(&self, lepton_ref: LeptonRef) -> &Lepton {
        &self.leptons_of(lepton_ref.flavor)[lepton_ref.idx]
    }

    /// Four-momentum of the lepton a reference points to
    pub fn momentum(&self, lepton_ref: LeptonRef) -> FourVector {
        self.lepton(lepton_ref).p
    }

    /// Indices of the leptons with the given flavor and charge
    pub fn charged_indices(
        &self,
        flavor: Flavor,
        charge: Charge,
    ) -> Vec<usize> {
        self.leptons_of(flavor)
            .iter()
            .enumerate()
            .filter(|(_idx, l)| l.charge == charge)
            .map(|(idx, _l)| idx)
            .collect()
    }

    /// Drop all leptons failing the given predicate
    pub fn retain_leptons<F: FnMut(&Lepton) -> bool>(&mut self, mut keep: F) {
        self.electrons.retain(|l| keep(l));
        self.muons.retain(|l| keep(l));
    }
}
