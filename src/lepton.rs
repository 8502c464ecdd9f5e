use crate::four_vector::FourVector;

use noisy_float::prelude::*;
use particle_id::{
    sm_elementary_particles::{electron, muon},
    ParticleID,
};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Electric charge of a lepton, in units of the positron charge
#[derive(
    Deserialize,
    Serialize,
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
)]
pub enum Charge {
    Plus,
    Minus,
}

impl Charge {
    /// The charge sign as an integer, +1 or -1
    pub fn sign(self) -> i32 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }

    /// Construct from an integer charge, `None` unless it is +1 or -1
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Self::Plus),
            -1 => Some(Self::Minus),
            _ => None,
        }
    }
}

/// Lepton flavor
///
/// Only the light charged flavors are reconstructed
#[derive(
    Deserialize,
    Serialize,
    Display,
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Flavor {
    Electron,
    Muon,
}

impl Flavor {
    /// The PDG Monte Carlo id of the negatively charged lepton
    pub fn pid(self) -> ParticleID {
        match self {
            Self::Electron => electron,
            Self::Muon => muon,
        }
    }

    /// The lepton mass in GeV
    pub fn mass(self) -> f64 {
        match self {
            Self::Electron => 0.000_510_999,
            Self::Muon => 0.105_658,
        }
    }
}

/// A reconstructed charged lepton
///
/// Immutable once built; owned by the per-event collection.
#[derive(
    Deserialize, Serialize, Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd,
)]
pub struct Lepton {
    /// Four-momentum
    pub p: FourVector,
    /// Electric charge
    pub charge: Charge,
    /// Flavor
    pub flavor: Flavor,
}

impl Lepton {
    pub fn new(p: FourVector, charge: Charge, flavor: Flavor) -> Self {
        Self { p, charge, flavor }
    }

    /// Construct from a PDG Monte Carlo id
    ///
    /// `None` if `pid` is not a charged light lepton. Following the
    /// PDG sign convention the particle (positive id) is the
    /// negatively charged lepton.
    pub fn from_pid(pid: ParticleID, p: FourVector) -> Option<Self> {
        let flavor = if pid.abs() == electron {
            Flavor::Electron
        } else if pid.abs() == muon {
            Flavor::Muon
        } else {
            return None;
        };
        let charge = if pid.id() > 0 {
            Charge::Minus
        } else {
            Charge::Plus
        };
        Some(Self::new(p, charge, flavor))
    }

    /// The PDG Monte Carlo id
    pub fn pid(&self) -> ParticleID {
        let particle = self.flavor.pid();
        match self.charge {
            Charge::Minus => particle,
            Charge::Plus => ParticleID::new(-particle.id()),
        }
    }

    /// The scalar transverse momentum
    pub fn pt(&self) -> N64 {
        self.p.pt()
    }
}

/// Reference to a lepton inside an event
///
/// `idx` is the position within the per-flavor collection of the
/// event. Two references denote the same lepton exactly if they
/// compare equal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LeptonRef {
    pub flavor: Flavor,
    pub idx: usize,
}

impl LeptonRef {
    pub fn new(flavor: Flavor, idx: usize) -> Self {
        Self { flavor, idx }
    }
}
