use noisy_float::prelude::*;
use serde::{Deserialize, Serialize};

/// A basic four-vector
///
/// The zero component is the energy component. The remainder are
/// the spatial components
#[derive(
    Deserialize,
    Serialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Clone,
    Copy,
    Default,
)]
pub struct FourVector {
    pt: N64,
    p: [N64; 4],
}

impl FourVector {
    /// Construct a new four-vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a four-vector from transverse momentum,
    /// pseudorapidity, azimuthal angle, and mass
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let e = (m * m + pt * pt * eta.cosh() * eta.cosh()).sqrt();
        [n64(e), n64(px), n64(py), n64(pz)].into()
    }

    /// The energy component
    pub fn e(&self) -> N64 {
        self.p[0]
    }

    /// The spatial norm \sqrt{\sum v_i^2} with i = 1,2,3
    pub fn spatial_norm(&self) -> N64 {
        self.spatial_norm_sq().sqrt()
    }

    /// The square \sum v_i^2 with i = 1,2,3 of the spatial norm
    pub fn spatial_norm_sq(&self) -> N64 {
        self.p.iter().skip(1).map(|e| *e * *e).sum()
    }

    /// The scalar transverse momentum
    pub fn pt(&self) -> N64 {
        self.pt
    }

    /// The azimuthal angle
    pub fn phi(&self) -> N64 {
        self.p[2].atan2(self.p[1])
    }

    /// The pseudorapidity
    ///
    /// Vanishes for a vector with no spatial components
    pub fn pseudorapidity(&self) -> N64 {
        if self.pt == 0. && self.p[3] == 0. {
            return n64(0.);
        }
        (self.p[3] / self.pt).asinh()
    }

    const fn len() -> usize {
        4
    }

    fn update_pt(&mut self) {
        self.pt = (self.p[1] * self.p[1] + self.p[2] * self.p[2]).sqrt();
    }

    /// The invariant mass \sqrt{v_0^2 - \sum v_i^2} with i = 1,2,3
    ///
    /// Slightly spacelike vectors from rounding are treated as massless
    pub fn m(&self) -> N64 {
        self.m_sq().max(n64(0.)).sqrt()
    }

    /// The invariant mass square v_0^2 - \sum v_i^2 with i = 1,2,3
    pub fn m_sq(&self) -> N64 {
        self.p[0] * self.p[0] - self.spatial_norm_sq()
    }

    /// The vector boosted from the rest frame of `frame` into the
    /// frame where `frame` has the given four-momentum
    pub fn boosted_to(&self, frame: &FourVector) -> Self {
        let e = f64::from(frame.e());
        let b = [
            f64::from(frame[1]) / e,
            f64::from(frame[2]) / e,
            f64::from(frame[3]) / e,
        ];
        let b_sq: f64 = b.iter().map(|c| c * c).sum();
        if b_sq == 0. {
            return *self;
        }
        let gamma = 1. / (1. - b_sq).sqrt();
        let p = [
            f64::from(self.p[1]),
            f64::from(self.p[2]),
            f64::from(self.p[3]),
        ];
        let e0 = f64::from(self.p[0]);
        let bp = b[0] * p[0] + b[1] * p[1] + b[2] * p[2];
        let coeff = (gamma - 1.) * bp / b_sq + gamma * e0;
        [
            n64(gamma * (e0 + bp)),
            n64(p[0] + coeff * b[0]),
            n64(p[1] + coeff * b[1]),
            n64(p[2] + coeff * b[2]),
        ]
        .into()
    }
}

impl std::convert::From<[N64; 4]> for FourVector {
    fn from(p: [N64; 4]) -> FourVector {
        let mut res = FourVector {
            p,
            pt: std::default::Default::default(),
        };
        res.update_pt();
        res
    }
}

impl std::ops::Index<usize> for FourVector {
    type Output = N64;

    fn index(&self, i: usize) -> &Self::Output {
        &self.p[i]
    }
}

impl std::ops::AddAssign for FourVector {
    fn add_assign(&mut self, rhs: FourVector) {
        for i in 0..Self::len() {
            self.p[i] += rhs[i]
        }
        self.update_pt();
    }
}

impl std::ops::Add for FourVector {
    type Output = Self;

    fn add(mut self, rhs: FourVector) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::iter::Sum for FourVector {
    fn sum<I: Iterator<Item = FourVector>>(iter: I) -> Self {
        iter.fold(FourVector::new(), |acc, p| acc + p)
    }
}
