use crate::candidate::{ChannelLabel, ZCandidate, ZZCandidate};
use crate::event::Event;
use crate::lepton::{Charge, Flavor, LeptonRef};
use crate::pairs::index_pairs;
use crate::traits::Reconstruct;

use itertools::iproduct;
use log::trace;

fn zcand(event: &Event, flavor: Flavor, plus: usize, minus: usize) -> ZCandidate {
    let plus = LeptonRef::new(flavor, plus);
    let minus = LeptonRef::new(flavor, minus);
    ZCandidate::new(plus, minus, event.momentum(plus) + event.momentum(minus))
}

/// All ZZ candidates built from four leptons of a single flavor
///
/// Every way to choose two positive and two negative leptons
/// contributes exactly one candidate: of the four opposite-charge
/// pairings within such a quadruplet, the one closest to the nominal
/// Z mass becomes Z1 and its disjoint complement Z2. Yields nothing
/// if either charge has fewer than two leptons.
pub fn same_flavor_candidates(
    event: &Event,
    flavor: Flavor,
) -> Vec<ZZCandidate> {
    let channel = match flavor {
        Flavor::Electron => ChannelLabel::FourElectron,
        Flavor::Muon => ChannelLabel::FourMuon,
    };
    let plus = event.charged_indices(flavor, Charge::Plus);
    let minus = event.charged_indices(flavor, Charge::Minus);

    let mut candidates = Vec::new();
    for (p1, p2) in index_pairs(plus.len()) {
        for (m1, m2) in index_pairs(minus.len()) {
            let z11 = zcand(event, flavor, plus[p1], minus[m1]);
            let z12 = zcand(event, flavor, plus[p1], minus[m2]);
            let z21 = zcand(event, flavor, plus[p2], minus[m1]);
            let z22 = zcand(event, flavor, plus[p2], minus[m2]);

            // Tournament over the four pairings. Only {z11, z22} and
            // {z12, z21} are disjoint splits of the quadruplet, so
            // the complement switches with the winner.
            let (mut z1, mut z2) = (z11, z22);
            if z12.mass_distance() < z1.mass_distance() {
                (z1, z2) = (z12, z21);
            }
            if z21.mass_distance() < z1.mass_distance() {
                (z1, z2) = (z21, z12);
            }
            if z22.mass_distance() < z1.mass_distance() {
                (z1, z2) = (z22, z11);
            }
            candidates.push(ZZCandidate::new(z1, z2, channel));
        }
    }
    candidates
}

/// All ZZ candidates built from an electron pair and a muon pair
///
/// Every combination of one opposite-charge muon pair with one
/// opposite-charge electron pair contributes one candidate; the pair
/// closer to the nominal Z mass becomes Z1. No disjointness
/// ambiguity arises since leptons cannot be shared across flavors.
pub fn mixed_flavor_candidates(event: &Event) -> Vec<ZZCandidate> {
    let mu_plus = event.charged_indices(Flavor::Muon, Charge::Plus);
    let mu_minus = event.charged_indices(Flavor::Muon, Charge::Minus);
    let el_plus = event.charged_indices(Flavor::Electron, Charge::Plus);
    let el_minus = event.charged_indices(Flavor::Electron, Charge::Minus);

    iproduct!(
        mu_plus.iter().copied(),
        mu_minus.iter().copied(),
        el_plus.iter().copied(),
        el_minus.iter().copied()
    )
    .map(|(mp, mm, ep, em)| {
        let z_mu = zcand(event, Flavor::Muon, mp, mm);
        let z_el = zcand(event, Flavor::Electron, ep, em);
        ZZCandidate::new(z_mu, z_el, ChannelLabel::TwoElectronTwoMuon)
    })
    .collect()
}

/// All ZZ candidates of an event, merged over the three channels
///
/// Channel order is 2e2mu, 4e, 4mu; within a channel candidates
/// appear in enumeration order.
pub fn zz_candidates(event: &Event) -> Vec<ZZCandidate> {
    let mut candidates = mixed_flavor_candidates(event);
    candidates.extend(same_flavor_candidates(event, Flavor::Electron));
    candidates.extend(same_flavor_candidates(event, Flavor::Muon));
    trace!(
        "event {}: {} ZZ candidate(s)",
        event.id(),
        candidates.len()
    );
    candidates
}

/// The default candidate reconstruction
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct StandardReconstruction {}

impl Reconstruct for StandardReconstruction {
    fn reconstruct(&self, event: &Event) -> Vec<ZZCandidate> {
        zz_candidates(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::M_Z;
    use crate::event::EventBuilder;
    use crate::four_vector::FourVector;
    use crate::lepton::Lepton;

    use noisy_float::prelude::*;

    // massless lepton with energy `e` flying in the (x, y) plane
    fn lepton(
        flavor: Flavor,
        charge: Charge,
        e: f64,
        dir: (f64, f64),
    ) -> Lepton {
        let norm = (dir.0 * dir.0 + dir.1 * dir.1).sqrt();
        let p: FourVector = [
            n64(e),
            n64(e * dir.0 / norm),
            n64(e * dir.1 / norm),
            n64(0.),
        ]
        .into();
        Lepton::new(p, charge, flavor)
    }

    fn pair_event(flavor: Flavor, e: f64) -> Event {
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(flavor, Charge::Plus, e, (1., 0.)))
            .add_lepton(lepton(flavor, Charge::Minus, e, (-1., 0.)));
        builder.build()
    }

    #[test]
    fn no_candidates_below_four_leptons() {
        let event = Event::new();
        assert!(zz_candidates(&event).is_empty());

        // one pair of each charge is not enough for a same-flavor
        // candidate
        let event = pair_event(Flavor::Electron, 45.);
        assert!(same_flavor_candidates(&event, Flavor::Electron).is_empty());
        assert!(mixed_flavor_candidates(&event).is_empty());

        // three leptons, one of them of the wrong charge
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 45., (1., 0.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 45., (0., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 45., (-1., 0.)));
        let event = builder.build();
        assert!(zz_candidates(&event).is_empty());
    }

    #[test]
    fn single_quadruplet() {
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 45., (1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 20., (0., 1.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 45., (-1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 20., (0., -1.)));
        let event = builder.build();

        let candidates = same_flavor_candidates(&event, Flavor::Electron);
        assert_eq!(candidates.len(), 1);
        let zz = &candidates[0];

        // z1 and z2 share no lepton and exhaust the quadruplet
        assert!(!zz.z1().overlaps(zz.z2()));
        let mut used = vec![
            zz.z1().plus(),
            zz.z1().minus(),
            zz.z2().plus(),
            zz.z2().minus(),
        ];
        used.sort();
        used.dedup();
        assert_eq!(used.len(), 4);

        // z1 is the global minimum over all four pairings
        let plus = event.charged_indices(Flavor::Electron, Charge::Plus);
        let minus = event.charged_indices(Flavor::Electron, Charge::Minus);
        let best = iproduct!(plus.iter(), minus.iter())
            .map(|(&p, &m)| {
                zcand(&event, Flavor::Electron, p, m).mass_distance()
            })
            .min()
            .unwrap();
        assert_eq!(zz.z1().mass_distance(), best);
        assert!(zz.z1().mass_distance() <= zz.z2().mass_distance());

        // the 90 GeV pairing beats the others
        assert!((f64::from(zz.z1().m()) - 90.).abs() < 1e-9);
    }

    #[test]
    fn candidate_multiplicity() {
        // three positive, two negative muons: C(3,2) * C(2,2) = 3
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 45., (1., 0.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 30., (0., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 25., (1., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 45., (-1., 0.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 20., (0., -1.)));
        let event = builder.build();

        let candidates = same_flavor_candidates(&event, Flavor::Muon);
        assert_eq!(candidates.len(), 3);
        for zz in &candidates {
            assert!(!zz.z1().overlaps(zz.z2()));
            assert!(zz.z1().mass_distance() <= zz.z2().mass_distance());
        }
    }

    #[test]
    fn mixed_channel_ranking() {
        // electron pair at 91.2 GeV, muon pair at 50 GeV
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 45.6, (1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 45.6, (-1., 0.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 25., (0., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 25., (0., -1.)));
        let event = builder.build();

        let candidates = mixed_flavor_candidates(&event);
        assert_eq!(candidates.len(), 1);
        let zz = &candidates[0];
        assert_eq!(zz.channel(), ChannelLabel::TwoElectronTwoMuon);
        assert_eq!(zz.z1().plus().flavor, Flavor::Electron);
        assert_eq!(zz.z2().plus().flavor, Flavor::Muon);
        assert!((f64::from(zz.z1().m()) - 91.2).abs() < 1e-9);
        assert!((f64::from(zz.z2().m()) - 50.).abs() < 1e-9);

        // zz mass is the invariant mass of the combined system
        let sum: FourVector = event.leptons().map(|l| l.p).sum();
        assert_eq!(zz.m(), sum.m());
    }

    #[test]
    fn merged_channel_order() {
        // two electron pairs and two muon pairs fill all channels
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 45., (1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 30., (0., 1.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 45., (-1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 30., (0., -1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 40., (1., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 40., (-1., -1.)));
        let event = builder.build();

        let candidates = zz_candidates(&event);
        // 2 e+ x 2 e-  mixed with 1 mu+ x 1 mu- -> 4 candidates,
        // plus C(2,2)^2 = 1 four-electron candidate
        assert_eq!(candidates.len(), 5);
        let channels: Vec<_> =
            candidates.iter().map(|c| c.channel()).collect();
        assert_eq!(
            channels,
            [
                ChannelLabel::TwoElectronTwoMuon,
                ChannelLabel::TwoElectronTwoMuon,
                ChannelLabel::TwoElectronTwoMuon,
                ChannelLabel::TwoElectronTwoMuon,
                ChannelLabel::FourElectron,
            ]
        );
    }

    #[test]
    fn rerun_is_identical() {
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 45., (1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Plus, 20., (0., 1.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 45., (-1., 0.)))
            .add_lepton(lepton(Flavor::Electron, Charge::Minus, 20., (0., -1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 40., (1., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 40., (-1., -1.)));
        let event = builder.build();
        assert_eq!(zz_candidates(&event), zz_candidates(&event));
    }

    #[test]
    fn tournament_closest_wins() {
        // masses engineered so that the cross pairing z12/z21 wins
        let mut builder = EventBuilder::new(0);
        builder
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 45.6, (1., 0.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Plus, 10., (0., 1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 10., (0., -1.)))
            .add_lepton(lepton(Flavor::Muon, Charge::Minus, 45.6, (-1., 0.)));
        let event = builder.build();

        let candidates = same_flavor_candidates(&event, Flavor::Muon);
        assert_eq!(candidates.len(), 1);
        let zz = &candidates[0];
        // the (plus 0, minus 1) pairing is back-to-back at 91.2 GeV
        assert!((f64::from(zz.z1().m()) - 91.2).abs() < 1e-9);
        assert!(f64::from(zz.z1().mass_distance()) < M_Z);
    }
}
