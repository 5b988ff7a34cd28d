use crate::geometry::Motif;

/// Estimates the self-similarity dimension `ln(k) / ln(1/r)` of a motif.
///
/// Only defined when every step shares the same ratio `r` and the motif has
/// more than one step. Otherwise returns `None`, meaning "not applicable to
/// this motif" (not zero, not an error). A ratio of exactly `1` is also
/// `None`, since `ln(1/r)` is zero there. Growing motifs (`r > 1`) give a
/// negative value.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn estimate_dimension<R>(motif: &Motif<R>) -> Option<f64> {
    let k = motif.len();
    if k <= 1 {
        return None;
    }
    let r = motif.uniform_ratio()?;
    if r <= 0.0 {
        return None;
    }
    let scale = (1.0 / r).ln();
    if scale == 0.0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let k = k as f64;
    Some(k.ln() / scale)
}
