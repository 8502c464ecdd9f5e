pub use crate::{
    analysis::{Analysis, AnalysisBuilder},
    candidate::{ZCandidate, ZZCandidate, M_Z},
    config::AnalysisConfig,
    converter::RecordConverter,
    generator::Generator,
    reader::CombinedReader,
    reconstruct::StandardReconstruction,
    selection::{SelectionCuts, StandardSelection},
    traits::{Reconstruct, Select},
    writer::{FileWriter, FileWriterBuilder},
};
