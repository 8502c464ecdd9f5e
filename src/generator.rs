use crate::candidate::M_Z;
use crate::event::{Event, EventBuilder};
use crate::four_vector::FourVector;
use crate::lepton::{Charge, Flavor, Lepton};

use noisy_float::prelude::*;
use rand::Rng;
use rand_distr::{Cauchy, Distribution, Exp, Poisson};

/// Total decay width of the Z boson in GeV
pub const GAMMA_Z: f64 = 2.4952;

/// Toy event generator
///
/// Produces events with one to three Z bosons decaying into
/// same-flavor lepton pairs, with the boson mass drawn from a
/// Cauchy lineshape around the nominal Z mass, plus an optional
/// admixture of soft uncorrelated leptons. Useful for demos and
/// integration tests; no attempt at physical accuracy beyond
/// energy-momentum conservation in the decays.
pub struct Generator<R> {
    mean_boson_pt: f64,
    max_abs_rapidity: f64,
    mean_extra_leptons: f64,
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            mean_boson_pt: 30.,
            max_abs_rapidity: 2.,
            mean_extra_leptons: 0.5,
            rng,
        }
    }

    /// Set the mean transverse momentum of the generated bosons
    pub fn mean_boson_pt(mut self, pt: f64) -> Self {
        self.mean_boson_pt = pt;
        self
    }

    /// Set the maximum absolute boson rapidity
    pub fn max_abs_rapidity(mut self, y: f64) -> Self {
        self.max_abs_rapidity = y;
        self
    }

    /// Set the mean number of additional soft leptons
    pub fn mean_extra_leptons(mut self, n: f64) -> Self {
        self.mean_extra_leptons = n;
        self
    }

    /// Generate a single event
    pub fn gen_event(&mut self, id: usize) -> Event {
        let mut builder = EventBuilder::new(id);
        builder.weight(n64(1.));
        // mostly boson pairs, with some single- and triple-boson
        // contamination
        let n_bosons = match self.rng.gen_range(0..10) {
            0 => 1,
            9 => 3,
            _ => 2,
        };
        for _ in 0..n_bosons {
            self.add_boson_decay(&mut builder);
        }
        if self.mean_extra_leptons > 0. {
            let poisson = Poisson::new(self.mean_extra_leptons).unwrap();
            let n_extra = poisson.sample(&mut self.rng) as usize;
            for _ in 0..n_extra {
                self.add_soft_lepton(&mut builder);
            }
        }
        builder.build()
    }

    /// Generate a batch of events with ids `0..n`
    pub fn gen_events(&mut self, n: usize) -> Vec<Event> {
        (0..n).map(|id| self.gen_event(id)).collect()
    }

    fn random_flavor(&mut self) -> Flavor {
        if self.rng.gen() {
            Flavor::Electron
        } else {
            Flavor::Muon
        }
    }

    fn add_boson_decay(&mut self, builder: &mut EventBuilder) {
        let flavor = self.random_flavor();
        let lineshape = Cauchy::new(M_Z, GAMMA_Z / 2.).unwrap();
        let m = loop {
            let m = lineshape.sample(&mut self.rng);
            if (1. ..500.).contains(&m) {
                break m;
            }
        };
        let pt = Exp::new(1. / self.mean_boson_pt)
            .unwrap()
            .sample(&mut self.rng);
        let y = self
            .rng
            .gen_range(-self.max_abs_rapidity..self.max_abs_rapidity);
        let phi = self.rng.gen_range(0. ..std::f64::consts::TAU);
        let mt = (m * m + pt * pt).sqrt();
        let boson: FourVector = [
            n64(mt * y.cosh()),
            n64(pt * phi.cos()),
            n64(pt * phi.sin()),
            n64(mt * y.sinh()),
        ]
        .into();

        // isotropic two-body decay in the boson rest frame
        let ml = flavor.mass();
        let e_star = m / 2.;
        let p_star = (e_star * e_star - ml * ml).max(0.).sqrt();
        let cos_theta: f64 = self.rng.gen_range(-1. ..=1.);
        let sin_theta = (1. - cos_theta * cos_theta).sqrt();
        let phi_star = self.rng.gen_range(0. ..std::f64::consts::TAU);
        let p = [
            p_star * sin_theta * phi_star.cos(),
            p_star * sin_theta * phi_star.sin(),
            p_star * cos_theta,
        ];
        let rest_minus: FourVector =
            [n64(e_star), n64(p[0]), n64(p[1]), n64(p[2])].into();
        let rest_plus: FourVector =
            [n64(e_star), n64(-p[0]), n64(-p[1]), n64(-p[2])].into();
        builder.add_lepton(Lepton::new(
            rest_minus.boosted_to(&boson),
            Charge::Minus,
            flavor,
        ));
        builder.add_lepton(Lepton::new(
            rest_plus.boosted_to(&boson),
            Charge::Plus,
            flavor,
        ));
    }

    fn add_soft_lepton(&mut self, builder: &mut EventBuilder) {
        let flavor = self.random_flavor();
        let charge = if self.rng.gen() {
            Charge::Plus
        } else {
            Charge::Minus
        };
        let pt = Exp::new(0.1).unwrap().sample(&mut self.rng);
        let eta = self.rng.gen_range(-2.5..2.5);
        let phi = self.rng.gen_range(0. ..std::f64::consts::TAU);
        let p = FourVector::from_pt_eta_phi_m(pt, eta, phi, flavor.mass());
        builder.add_lepton(Lepton::new(p, charge, flavor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn same_seed_same_events() {
        let mut first =
            Generator::new(Xoshiro256Plus::seed_from_u64(17));
        let mut second =
            Generator::new(Xoshiro256Plus::seed_from_u64(17));
        assert_eq!(first.gen_events(50), second.gen_events(50));

        let mut other = Generator::new(Xoshiro256Plus::seed_from_u64(18));
        assert_ne!(first.gen_events(50), other.gen_events(50));
    }

    #[test]
    fn boson_decays_balance() {
        let rng = Xoshiro256Plus::seed_from_u64(0);
        let mut generator = Generator::new(rng).mean_extra_leptons(0.);
        for event in generator.gen_events(100) {
            // pair production only: equal numbers of both charges
            // per flavor
            for flavor in [Flavor::Electron, Flavor::Muon] {
                assert_eq!(
                    event.charged_indices(flavor, Charge::Plus).len(),
                    event.charged_indices(flavor, Charge::Minus).len()
                );
            }
            // at least one boson decay per event
            assert!(event.n_leptons() >= 2);
        }
    }

    #[test]
    fn pair_masses_near_pole() {
        let rng = Xoshiro256Plus::seed_from_u64(1);
        let mut generator = Generator::new(rng).mean_extra_leptons(0.);
        let mut near_pole = 0;
        let events = generator.gen_events(200);
        for event in &events {
            for flavor in [Flavor::Electron, Flavor::Muon] {
                let plus = event.charged_indices(flavor, Charge::Plus);
                let minus = event.charged_indices(flavor, Charge::Minus);
                if plus.len() == 1 && minus.len() == 1 {
                    let leptons = event.leptons_of(flavor);
                    let m = (leptons[plus[0]].p + leptons[minus[0]].p).m();
                    if (m - M_Z).abs() < 10. {
                        near_pole += 1;
                    }
                }
            }
        }
        // the Cauchy width is a few GeV, so unambiguous pairs are
        // overwhelmingly within 10 GeV of the pole
        assert!(near_pole > 50);
    }
}
