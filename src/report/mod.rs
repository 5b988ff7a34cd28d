use std::fmt::Write as _;

use crate::error::Result;
use crate::geometry::{Curve, Motif, Rotation};
use crate::math::Point;
use crate::operations::generation::{BatchOutcome, GenerateCurve, GenerationParams};
use crate::operations::query::estimate_dimension;

/// Everything a renderer needs to draw one generated curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveReport<const D: usize> {
    /// Display title, not interpreted.
    pub title: String,
    /// Number of refinements applied.
    pub depth: u32,
    /// The generated polyline.
    pub curve: Curve<D>,
    /// Total path length of `curve`.
    pub length: f64,
    /// Self-similarity dimension, `None` when not applicable to the motif.
    pub dimension: Option<f64>,
}

impl<const D: usize> CurveReport<D> {
    /// Generates a curve and derives its metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails (see [`GenerateCurve::execute`]).
    pub fn build<R: Rotation<D>>(
        title: impl Into<String>,
        start: Point<D>,
        end: Point<D>,
        depth: u32,
        motif: &Motif<R>,
        params: GenerationParams,
    ) -> Result<Self> {
        let curve = GenerateCurve::new(start, end, depth, motif)
            .with_params(params)
            .execute()?;
        Ok(Self {
            title: title.into(),
            depth,
            length: curve.length(),
            dimension: estimate_dimension(motif),
            curve,
        })
    }

    /// Returns the annotation block shown next to the curve.
    #[must_use]
    pub fn info_text(&self) -> String {
        let mut text = format!(
            "Iterations: {}\nPoints: {}\nLength: {:.5}",
            self.depth,
            self.curve.len(),
            self.length
        );
        if let Some(dimension) = self.dimension {
            let _ = write!(text, "\nFractal dimension: {dimension:.5}");
        }
        text
    }

    /// Returns the figure heading, e.g. `"Zigzag fractal (iteration: 6)"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} (iteration: {})", self.title, self.depth)
    }
}

/// Port implemented by renderers that draw finished curves.
pub trait CurveSink<const D: usize> {
    /// Error raised by the renderer.
    type Error;

    /// Draws one report.
    ///
    /// # Errors
    ///
    /// Returns the renderer's own error.
    fn present(&mut self, report: &CurveReport<D>) -> std::result::Result<(), Self::Error>;
}

/// Forwards the report of every successful batch outcome to `sink`, in
/// order, skipping failed ones.
///
/// Returns the number of reports presented.
///
/// # Errors
///
/// Returns the first error raised by the sink.
pub fn present_all<'r, const D: usize, S, I>(
    outcomes: I,
    sink: &mut S,
) -> std::result::Result<usize, S::Error>
where
    S: CurveSink<D>,
    I: IntoIterator<Item = &'r BatchOutcome<D>>,
{
    let mut presented = 0;
    for report in outcomes.into_iter().filter_map(|o| o.result.as_ref().ok()) {
        sink.present(report)?;
        presented += 1;
    }
    Ok(presented)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::geometry::PlanarMotif;
    use crate::math::Point2;

    #[derive(Default)]
    struct Recorder {
        titles: Vec<String>,
        fail_on: Option<String>,
    }

    impl CurveSink<2> for Recorder {
        type Error = String;

        fn present(&mut self, report: &CurveReport<2>) -> std::result::Result<(), String> {
            if self.fail_on.as_deref() == Some(report.title.as_str()) {
                return Err(format!("cannot draw {}", report.title));
            }
            self.titles.push(report.title.clone());
            Ok(())
        }
    }

    fn report(title: &str, ratios: &[f64], angles: &[f64], depth: u32) -> CurveReport<2> {
        let motif = PlanarMotif::planar(ratios, angles).unwrap();
        CurveReport::build(
            title,
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            depth,
            &motif,
            GenerationParams::default(),
        )
        .unwrap()
    }

    fn outcome(title: &str, result: Result<CurveReport<2>>) -> BatchOutcome<2> {
        BatchOutcome {
            title: title.into(),
            result,
        }
    }

    #[test]
    fn build_derives_metrics() {
        let r = report("Koch", &[1.0 / 3.0; 4], &[0.0, 60.0, -60.0, 0.0], 1);
        assert_eq!(r.curve.len(), 5);
        assert!((r.length - 4.0 / 3.0).abs() < 1e-12);
        assert!((r.dimension.unwrap() - 1.26186).abs() < 1e-5);
    }

    #[test]
    fn info_text_with_dimension() {
        let r = report("Koch", &[1.0 / 3.0; 4], &[0.0, 60.0, -60.0, 0.0], 1);
        assert_eq!(
            r.info_text(),
            "Iterations: 1\nPoints: 5\nLength: 1.33333\nFractal dimension: 1.26186"
        );
        assert_eq!(r.heading(), "Koch (iteration: 1)");
    }

    #[test]
    fn info_text_without_dimension() {
        let r = report("Mixed", &[1.0 / 3.0, 0.5], &[0.0, 0.0], 0);
        assert_eq!(r.info_text(), "Iterations: 0\nPoints: 2\nLength: 1.00000");
    }

    #[test]
    fn info_text_keeps_zero_dimension() {
        let mut r = report("Flat", &[0.5], &[0.0], 0);
        r.dimension = Some(0.0);
        assert!(r.info_text().ends_with("\nFractal dimension: 0.00000"));
    }

    #[test]
    fn present_all_skips_failures() {
        let ok = report("A", &[0.5, 0.5], &[45.0, -45.0], 2);
        let failed = GenerationError::InvalidInput("zero-length base".into());
        let b = CurveReport {
            title: "B".into(),
            ..ok.clone()
        };
        let outcomes = vec![
            outcome("A", Ok(ok)),
            outcome("Broken", Err(failed.into())),
            outcome("B", Ok(b)),
        ];

        let mut sink = Recorder::default();
        assert_eq!(present_all(&outcomes, &mut sink).unwrap(), 2);
        assert_eq!(sink.titles, vec!["A", "B"]);
    }

    #[test]
    fn present_all_propagates_sink_error() {
        let ok = report("A", &[0.5, 0.5], &[45.0, -45.0], 1);
        let outcomes = [outcome("A", Ok(ok))];
        let mut sink = Recorder {
            fail_on: Some("A".into()),
            ..Recorder::default()
        };
        assert_eq!(present_all(&outcomes, &mut sink).unwrap_err(), "cannot draw A");
    }
}
