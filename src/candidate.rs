use crate::four_vector::FourVector;
use crate::lepton::LeptonRef;

use noisy_float::prelude::*;
use strum::Display;

/// Nominal Z boson mass in GeV
///
/// Used only to rank candidates, never as a cut threshold.
pub const M_Z: f64 = 91.1876;

/// Which lepton-flavor combination produced a ZZ candidate
#[derive(
    Display, Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
pub enum ChannelLabel {
    #[strum(serialize = "4e")]
    FourElectron,
    #[strum(serialize = "4mu")]
    FourMuon,
    #[strum(serialize = "2e2mu")]
    TwoElectronTwoMuon,
}

/// An opposite-charge same-flavor lepton pair treated as a Z decay
/// hypothesis
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct ZCandidate {
    plus: LeptonRef,
    minus: LeptonRef,
    p: FourVector,
}

impl ZCandidate {
    /// Build a candidate from its leptons
    ///
    /// `p` has to be the four-momentum sum of the two leptons
    pub fn new(plus: LeptonRef, minus: LeptonRef, p: FourVector) -> Self {
        debug_assert_eq!(plus.flavor, minus.flavor);
        Self { plus, minus, p }
    }

    /// The positively charged lepton
    pub fn plus(&self) -> LeptonRef {
        self.plus
    }

    /// The negatively charged lepton
    pub fn minus(&self) -> LeptonRef {
        self.minus
    }

    /// The four-momentum sum of the two leptons
    pub fn p(&self) -> FourVector {
        self.p
    }

    /// The invariant mass
    pub fn m(&self) -> N64 {
        self.p.m()
    }

    /// Absolute distance of the invariant mass to the nominal Z mass
    pub fn mass_distance(&self) -> N64 {
        (self.m() - n64(M_Z)).abs()
    }

    /// Whether this candidate shares a lepton with `other`
    pub fn overlaps(&self, other: &ZCandidate) -> bool {
        self.plus == other.plus
            || self.plus == other.minus
            || self.minus == other.plus
            || self.minus == other.minus
    }
}

/// A pair of disjoint Z candidates treated as a four-lepton event
/// hypothesis
///
/// `z1` is always the candidate whose mass is closer to the nominal
/// Z mass, `z2` the other one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct ZZCandidate {
    z1: ZCandidate,
    z2: ZCandidate,
    channel: ChannelLabel,
    p: FourVector,
}

impl ZZCandidate {
    /// Build a candidate from two disjoint Z candidates
    ///
    /// The one closer to the nominal Z mass becomes `z1`; on a tie
    /// `za` wins.
    pub fn new(za: ZCandidate, zb: ZCandidate, channel: ChannelLabel) -> Self {
        debug_assert!(!za.overlaps(&zb));
        let (z1, z2) = if zb.mass_distance() < za.mass_distance() {
            (zb, za)
        } else {
            (za, zb)
        };
        let p = z1.p() + z2.p();
        Self { z1, z2, channel, p }
    }

    pub fn z1(&self) -> &ZCandidate {
        &self.z1
    }

    pub fn z2(&self) -> &ZCandidate {
        &self.z2
    }

    pub fn channel(&self) -> ChannelLabel {
        self.channel
    }

    /// The four-momentum sum of all four leptons
    pub fn p(&self) -> FourVector {
        self.p
    }

    /// The invariant mass of the four-lepton system
    pub fn m(&self) -> N64 {
        self.p.m()
    }
}
