use rayon::prelude::*;
use tracing::{info, warn};

use crate::catalogue::Preset;
use crate::error::Result;
use crate::geometry::Rotation;
use crate::math::Point;
use crate::report::CurveReport;

use super::GenerationParams;

/// Result of one preset in a batch.
#[derive(Debug)]
pub struct BatchOutcome<const D: usize> {
    /// Title of the preset this outcome belongs to.
    pub title: String,
    /// The report, or the error that aborted this preset.
    pub result: Result<CurveReport<D>>,
}

/// Generates a report for every preset over the same base segment.
///
/// A failing preset does not stop the batch: its error is kept in its
/// [`BatchOutcome`] and the next preset runs. Outcomes keep the input order.
pub struct GenerateBatch<'a, const D: usize, R> {
    presets: &'a [Preset<R>],
    start: Point<D>,
    end: Point<D>,
    depth: u32,
    params: GenerationParams,
    parallel: bool,
}

impl<'a, const D: usize, R> GenerateBatch<'a, D, R>
where
    R: Rotation<D> + Sync,
{
    /// Creates a new sequential `GenerateBatch` operation with default limits.
    #[must_use]
    pub fn new(presets: &'a [Preset<R>], start: Point<D>, end: Point<D>, depth: u32) -> Self {
        Self {
            presets,
            start,
            end,
            depth,
            params: GenerationParams::default(),
            parallel: false,
        }
    }

    /// Replaces the generation limits applied to every preset.
    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Runs presets on the rayon thread pool instead of the calling thread.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Executes the batch.
    #[must_use]
    pub fn execute(&self) -> Vec<BatchOutcome<D>> {
        info!(
            presets = self.presets.len(),
            depth = self.depth,
            parallel = self.parallel,
            "generating batch"
        );
        if self.parallel {
            self.presets.par_iter().map(|p| self.run_one(p)).collect()
        } else {
            self.presets.iter().map(|p| self.run_one(p)).collect()
        }
    }

    fn run_one(&self, preset: &Preset<R>) -> BatchOutcome<D> {
        let result = CurveReport::build(
            preset.title.clone(),
            self.start,
            self.end,
            self.depth,
            &preset.motif,
            self.params,
        );
        if let Err(err) = &result {
            warn!(
                title = %preset.title,
                error = %err,
                "preset failed, continuing with next"
            );
        }
        BatchOutcome {
            title: preset.title.clone(),
            result,
        }
    }
}
