use crate::event::{Event, EventBuilder};
use crate::four_vector::FourVector;
use crate::lepton::Lepton;
use crate::object_selection::ObjectSelection;
use crate::traits::TryConvert;

use noisy_float::prelude::*;
use particle_id::ParticleID;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single lepton as found in an input record
///
/// Kinematics follow the (pt, η, φ, m) convention, `pid` is the PDG
/// Monte Carlo id (±11 for electrons, ±13 for muons).
#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq)]
pub struct LeptonRecord {
    pub pid: i32,
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    pub mass: f64,
}

impl LeptonRecord {
    fn is_finite(&self) -> bool {
        self.pt.is_finite()
            && self.eta.is_finite()
            && self.phi.is_finite()
            && self.mass.is_finite()
    }
}

/// A single event as found in an input file
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct EventRecord {
    #[serde(default = "unit_weight")]
    pub weight: f64,
    #[serde(default)]
    pub leptons: Vec<LeptonRecord>,
}

fn unit_weight() -> f64 {
    1.
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        let leptons = event
            .leptons()
            .map(|l| LeptonRecord {
                pid: l.pid().id(),
                pt: l.p.pt().into(),
                eta: l.p.pseudorapidity().into(),
                phi: l.p.phi().into(),
                mass: l.p.m().into(),
            })
            .collect();
        Self {
            weight: event.weight.into(),
            leptons,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Event {id}: particle id {pid} is not a charged light lepton")]
    UnsupportedParticle { id: usize, pid: i32 },
    #[error("Event {id}: invalid kinematics in lepton record {nr}")]
    BadKinematics { id: usize, nr: usize },
    #[error("Event {id}: weight is not finite")]
    BadWeight { id: usize },
}

/// Conversion of input records into the internal event format
///
/// Malformed records are rejected here; the reconstruction itself
/// never sees them. An optional object selection restricts the
/// lepton collections on the fly.
#[derive(Clone, Debug, Default)]
pub struct RecordConverter {
    object_selection: Option<ObjectSelection>,
}

impl RecordConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable an object-level lepton preselection
    pub fn with_object_selection(
        mut self,
        selection: ObjectSelection,
    ) -> Self {
        self.object_selection = Some(selection);
        self
    }
}

impl TryConvert<(EventRecord, EventBuilder), Event> for RecordConverter {
    type Error = ConversionError;

    fn try_convert(
        &mut self,
        (record, mut builder): (EventRecord, EventBuilder),
    ) -> Result<Event, Self::Error> {
        use ConversionError::*;

        let id = builder.id();
        if !record.weight.is_finite() {
            return Err(BadWeight { id });
        }
        builder.weight(n64(record.weight));
        for (nr, lepton) in record.leptons.iter().enumerate() {
            if !lepton.is_finite() || lepton.pt < 0. || lepton.mass < 0. {
                return Err(BadKinematics { id, nr });
            }
            let p = FourVector::from_pt_eta_phi_m(
                lepton.pt,
                lepton.eta,
                lepton.phi,
                lepton.mass,
            );
            let lepton = Lepton::from_pid(ParticleID::new(lepton.pid), p)
                .ok_or(UnsupportedParticle {
                    id,
                    pid: lepton.pid,
                })?;
            builder.add_lepton(lepton);
        }
        let mut event = builder.build();
        if let Some(selection) = &self.object_selection {
            event = selection.select(event);
        }
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lepton::{Charge, Flavor};

    fn record(pid: i32, pt: f64) -> LeptonRecord {
        LeptonRecord {
            pid,
            pt,
            eta: 0.5,
            phi: 1.,
            mass: 0.,
        }
    }

    #[test]
    fn convert() {
        let mut converter = RecordConverter::new();
        let record = EventRecord {
            weight: 0.5,
            leptons: vec![record(-11, 30.), record(13, 20.), record(11, 10.)],
        };
        let event = converter
            .try_convert((record, EventBuilder::new(3)))
            .unwrap();
        assert_eq!(event.id(), 3);
        assert_eq!(event.weight, 0.5);
        assert_eq!(event.electrons().len(), 2);
        assert_eq!(event.muons().len(), 1);
        assert_eq!(event.electrons()[0].charge, Charge::Plus);
        assert_eq!(event.electrons()[1].charge, Charge::Minus);
        assert_eq!(event.muons()[0].flavor, Flavor::Muon);
    }

    #[test]
    fn reject_malformed() {
        let mut converter = RecordConverter::new();

        let bad_pid = EventRecord {
            weight: 1.,
            leptons: vec![record(15, 30.)],
        };
        let err = converter
            .try_convert((bad_pid, EventBuilder::new(0)))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnsupportedParticle { pid: 15, .. }
        ));

        let bad_pt = EventRecord {
            weight: 1.,
            leptons: vec![record(11, f64::NAN)],
        };
        let err = converter
            .try_convert((bad_pt, EventBuilder::new(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::BadKinematics { id: 1, nr: 0 }
        ));

        let bad_weight = EventRecord {
            weight: f64::INFINITY,
            leptons: vec![],
        };
        let err = converter
            .try_convert((bad_weight, EventBuilder::new(2)))
            .unwrap_err();
        assert!(matches!(err, ConversionError::BadWeight { id: 2 }));
    }

    #[test]
    fn object_selection_applies() {
        let mut converter = RecordConverter::new()
            .with_object_selection(ObjectSelection::default());
        let record = EventRecord {
            weight: 1.,
            leptons: vec![record(-11, 30.), record(11, 2.)],
        };
        let event = converter
            .try_convert((record, EventBuilder::new(0)))
            .unwrap();
        // the 2 GeV electron fails the preselection
        assert_eq!(event.electrons().len(), 1);
    }

    #[test]
    fn record_round_trip() {
        let mut converter = RecordConverter::new();
        let record = EventRecord {
            weight: 2.,
            leptons: vec![record(-13, 25.), record(13, 35.)],
        };
        let event = converter
            .try_convert((record.clone(), EventBuilder::new(0)))
            .unwrap();
        let back = EventRecord::from(&event);
        assert_eq!(back.weight, record.weight);
        assert_eq!(back.leptons.len(), 2);
        for (orig, back) in record.leptons.iter().zip(back.leptons.iter()) {
            assert_eq!(orig.pid, back.pid);
            assert!((orig.pt - back.pt).abs() < 1e-9);
            assert!((orig.eta - back.eta).abs() < 1e-9);
            assert!((orig.phi - back.phi).abs() < 1e-9);
        }
    }
}
