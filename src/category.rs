use crate::event::Event;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Event categories based on the selected lepton multiplicities
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
pub enum Category {
    /// Fully inclusive, assigned to every event
    #[serde(rename = "incl")]
    #[strum(serialize = "incl")]
    Inclusive,
    #[serde(rename = "4e")]
    #[strum(serialize = "4e")]
    FourElectron,
    #[serde(rename = "4mu")]
    #[strum(serialize = "4mu")]
    FourMuon,
    #[serde(rename = "2e2mu")]
    #[strum(serialize = "2e2mu")]
    TwoElectronTwoMuon,
}

/// The categories an event belongs to
pub fn categorize(event: &Event) -> Vec<Category> {
    use Category::*;
    let mut categories = vec![Inclusive];
    let n_ele = event.electrons().len();
    let n_muon = event.muons().len();
    match (n_ele, n_muon) {
        (4, 0) => categories.push(FourElectron),
        (0, 4) => categories.push(FourMuon),
        (2, 2) => categories.push(TwoElectronTwoMuon),
        _ => {}
    }
    categories
}
