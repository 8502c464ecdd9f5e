use crate::event::{Event, EventBuilder};
use crate::observables::EventSummary;
use crate::progress_bar::{Progress, ProgressBar};
use crate::stats::SelectionStats;
use crate::traits::*;

use std::convert::From;
use std::iter::Iterator;

use log::info;
use rayon::prelude::*;
use thiserror::Error;

/// Builder for an [Analysis]
///
/// The stages are explicit values wired together here; there is no
/// global registry. Replace any of them to customize the pipeline.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AnalysisBuilder<R, C, Z, S, W> {
    /// Where to read event records from
    pub reader: R,
    /// How to convert records into the internal format
    pub converter: C,
    /// How to build ZZ candidates
    pub reconstructor: Z,
    /// How to evaluate the selection steps
    pub selector: S,
    /// Where to write the per-event records
    pub writer: W,
}

impl<R, C, Z, S, W> AnalysisBuilder<R, C, Z, S, W> {
    pub fn build(self) -> Analysis<R, C, Z, S, W> {
        Analysis {
            reader: self.reader,
            converter: self.converter,
            reconstructor: self.reconstructor,
            selector: self.selector,
            writer: self.writer,
        }
    }
}

impl<R, C, Z, S, W> From<Analysis<R, C, Z, S, W>>
    for AnalysisBuilder<R, C, Z, S, W>
{
    fn from(a: Analysis<R, C, Z, S, W>) -> Self {
        AnalysisBuilder {
            reader: a.reader,
            converter: a.converter,
            reconstructor: a.reconstructor,
            selector: a.selector,
            writer: a.writer,
        }
    }
}

/// The analysis pipeline
///
/// Reads and validates all event records, reconstructs the ZZ
/// candidates and evaluates the selection for every event in
/// parallel, then writes one record per event. Events are
/// independent, so the per-event stages run without any
/// synchronization.
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Analysis<R, C, Z, S, W> {
    reader: R,
    converter: C,
    reconstructor: Z,
    selector: S,
    writer: W,
}

impl<R, C, Z, S, W> From<AnalysisBuilder<R, C, Z, S, W>>
    for Analysis<R, C, Z, S, W>
{
    fn from(b: AnalysisBuilder<R, C, Z, S, W>) -> Self {
        b.build()
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError<E1, E2, E3> {
    #[error("Failed to read event: {0}")]
    ReadErr(E1),
    #[error("Failed to convert event: {0}")]
    ConversionErr(E2),
    #[error("Failed to write records: {0}")]
    WriteErr(E3),
}

impl<R, C, Z, S, W, E, Ev> Analysis<R, C, Z, S, W>
where
    R: Iterator<Item = Result<Ev, E>>,
    C: TryConvert<(Ev, EventBuilder), Event>,
    Z: Reconstruct + Sync,
    S: Select + Sync,
    W: WriteSummaries,
{
    pub fn run(
        &mut self,
    ) -> Result<SelectionStats, AnalysisError<E, C::Error, W::Error>> {
        use AnalysisError::*;

        let converter = &mut self.converter;
        let events: Result<Vec<_>, _> = (&mut self.reader)
            .enumerate()
            .map(|(id, ev)| match ev {
                Ok(ev) => {
                    let builder = EventBuilder::new(id);
                    converter
                        .try_convert((ev, builder))
                        .map_err(ConversionErr)
                }
                Err(err) => Err(ReadErr(err)),
            })
            .collect();
        let events = events?;
        info!("Read {} events", events.len());

        let progress =
            ProgressBar::new(events.len() as u64, "events analyzed:");
        let reconstructor = &self.reconstructor;
        let selector = &self.selector;
        let summaries: Vec<_> = events
            .par_iter()
            .map(|event| {
                let candidates = reconstructor.reconstruct(event);
                let steps = selector.select(event, &candidates);
                let summary = EventSummary::new(event, &candidates, steps);
                progress.inc(1);
                summary
            })
            .collect();
        progress.finish();

        let mut stats = SelectionStats::new();
        for summary in &summaries {
            stats.record(summary);
        }
        stats.log_summary();

        self.writer.write(&summaries).map_err(WriteErr)?;
        Ok(stats)
    }
}
