//! # Load-Deflection Curve Sampling
//!
//! Produces an ordered sequence of (load, deflection) samples for
//! plotting how a board bends as the load grows. The curve spans from
//! zero load up to 1.5x the recommended maximum, so the plot shows
//! headroom beyond the safe range.
//!
//! ## Example
//!
//! ```rust
//! use board_core::calculations::board::{calculate, BoardInput, LoadType};
//! use board_core::calculations::curve::{sample_curve, DEFAULT_SAMPLE_COUNT};
//! use board_core::materials::SAMANEA;
//!
//! let input = BoardInput {
//!     label: "Shelf".to_string(),
//!     length_cm: 120.0,
//!     width_cm: 60.0,
//!     thickness_cm: 3.0,
//!     load_kg: 80.0,
//!     load_type: LoadType::Center,
//! };
//!
//! let result = calculate(&input, &SAMANEA).unwrap();
//! let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();
//!
//! assert_eq!(curve.len(), DEFAULT_SAMPLE_COUNT);
//! assert_eq!(curve[0].load_kg, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::board::{BoardInput, BoardResult};
use crate::errors::{CalcError, CalcResult};
use crate::materials::WoodProperties;

/// Number of samples the UI plots by default (0 through 10 steps).
pub const DEFAULT_SAMPLE_COUNT: usize = 11;

/// The curve extends to this multiple of the recommended maximum load.
pub const PLOT_HEADROOM: f64 = 1.5;

/// One point on the load-deflection curve.
///
/// The current safe-load threshold rides along on every sample so a
/// chart consumer can draw the reference line without a second lookup.
///
/// ## JSON Example
///
/// ```json
/// { "load_kg": 138.0, "deflection_mm": 4.24, "safe_limit_kg": 917.43 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    /// Sampled load, rounded to the nearest kilogram for display
    pub load_kg: f64,

    /// Midspan deflection at that load (mm)
    pub deflection_mm: f64,

    /// Recommended maximum load of the current geometry (kg)
    pub safe_limit_kg: f64,
}

/// Sample the load-deflection curve for a board.
///
/// Deterministic and restartable: identical inputs always yield an
/// identical sequence. Loads ascend from zero to
/// `result.max_load_recommended_kg * PLOT_HEADROOM` in equal steps;
/// the deflection at each load is recomputed from the same formula
/// branch as [`calculate`](crate::calculations::board::calculate)
/// (deflection is load-dependent, so the result's single deflection
/// value cannot be reused).
///
/// # Errors
///
/// Fails with `CalcError::InvalidInput` if:
/// - `input` or `material` fail validation
/// - `sample_count < 2` (a curve needs at least its endpoints)
/// - `result.max_load_recommended_kg` is non-finite or negative, which
///   would produce a degenerate or infinite sequence
pub fn sample_curve(
    input: &BoardInput,
    material: &WoodProperties,
    result: &BoardResult,
    sample_count: usize,
) -> CalcResult<Vec<CurveSample>> {
    input.validate()?;
    material.validate()?;

    if sample_count < 2 {
        return Err(CalcError::invalid_input(
            "sample_count",
            sample_count.to_string(),
            "Curve needs at least 2 samples",
        ));
    }

    let safe_limit_kg = result.max_load_recommended_kg;
    if !safe_limit_kg.is_finite() || safe_limit_kg < 0.0 {
        return Err(CalcError::invalid_input(
            "max_load_recommended_kg",
            safe_limit_kg.to_string(),
            "Recommended load must be a non-negative finite number",
        ));
    }

    let max_plot_load = safe_limit_kg * PLOT_HEADROOM;
    let step = max_plot_load / (sample_count - 1) as f64;

    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let load_kg = i as f64 * step;
        samples.push(CurveSample {
            load_kg: load_kg.round(),
            deflection_mm: input.deflection_mm_under(load_kg, material),
            safe_limit_kg,
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::board::{calculate, LoadType};
    use crate::materials::SAMANEA;

    fn test_board() -> BoardInput {
        BoardInput {
            label: "Test Board".to_string(),
            length_cm: 120.0,
            width_cm: 60.0,
            thickness_cm: 3.0,
            load_kg: 80.0,
            load_type: LoadType::Center,
        }
    }

    fn analyzed() -> (BoardInput, BoardResult) {
        let input = test_board();
        let result = calculate(&input, &SAMANEA).unwrap();
        (input, result)
    }

    #[test]
    fn test_sample_count_and_origin() {
        let (input, result) = analyzed();
        let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();

        assert_eq!(curve.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(curve[0].load_kg, 0.0);
        assert_eq!(curve[0].deflection_mm, 0.0);
    }

    #[test]
    fn test_loads_ascend_to_headroom() {
        let (input, result) = analyzed();
        let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();

        for pair in curve.windows(2) {
            assert!(pair[1].load_kg > pair[0].load_kg);
            assert!(pair[1].deflection_mm > pair[0].deflection_mm);
        }

        // Last sample sits at 1.5x the recommended load (rounded)
        let expected_max = result.max_load_recommended_kg * PLOT_HEADROOM;
        let last = curve.last().unwrap();
        assert!((last.load_kg - expected_max.round()).abs() < 1.0);
    }

    #[test]
    fn test_safe_limit_attached_to_every_sample() {
        let (input, result) = analyzed();
        let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();

        for sample in &curve {
            assert_eq!(sample.safe_limit_kg, result.max_load_recommended_kg);
        }
    }

    #[test]
    fn test_deflection_matches_forward_formula() {
        let (input, result) = analyzed();
        let curve = sample_curve(&input, &SAMANEA, &result, 5).unwrap();

        // Deflection is linear in load, so each sample must agree with
        // a fresh forward calculation at the unrounded sample load.
        let step = result.max_load_recommended_kg * PLOT_HEADROOM / 4.0;
        for (i, sample) in curve.iter().enumerate() {
            let mut probe = input.clone();
            probe.load_kg = i as f64 * step;
            let fresh = calculate(&probe, &SAMANEA).unwrap();
            assert!((sample.deflection_mm - fresh.deflection_mm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_restartable() {
        let (input, result) = analyzed();
        let a = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();
        let b = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distributed_curve_is_flatter() {
        let (input, result) = analyzed();
        let mut distributed = input.clone();
        distributed.load_type = LoadType::Distributed;
        let d_result = calculate(&distributed, &SAMANEA).unwrap();

        let center_curve = sample_curve(&input, &SAMANEA, &result, 11).unwrap();
        let dist_curve = sample_curve(&distributed, &SAMANEA, &d_result, 11).unwrap();

        // At the center curve's top load the distributed board deflects
        // less: δ_dist = (5/8)·δ_center for equal load.
        let top_load = center_curve.last().unwrap().load_kg;
        let dist_at_top = distributed.deflection_mm_under(top_load, &SAMANEA);
        let center_at_top = input.deflection_mm_under(top_load, &SAMANEA);
        assert!(dist_at_top < center_at_top);

        // Both curves still start at the origin
        assert_eq!(dist_curve[0].deflection_mm, 0.0);
    }

    #[test]
    fn test_rejects_too_few_samples() {
        let (input, result) = analyzed();
        for count in [0, 1] {
            let err = sample_curve(&input, &SAMANEA, &result, count).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_rejects_non_finite_threshold() {
        let (input, result) = analyzed();
        let mut broken = result.clone();
        broken.max_load_recommended_kg = f64::INFINITY;
        assert!(sample_curve(&input, &SAMANEA, &broken, DEFAULT_SAMPLE_COUNT).is_err());

        broken.max_load_recommended_kg = f64::NAN;
        assert!(sample_curve(&input, &SAMANEA, &broken, DEFAULT_SAMPLE_COUNT).is_err());

        broken.max_load_recommended_kg = -10.0;
        assert!(sample_curve(&input, &SAMANEA, &broken, DEFAULT_SAMPLE_COUNT).is_err());
    }

    #[test]
    fn test_rejects_invalid_input_geometry() {
        let (input, result) = analyzed();
        let mut bad = input;
        bad.width_cm = 0.0;
        assert!(sample_curve(&bad, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).is_err());
    }

    #[test]
    fn test_sample_serialization() {
        let (input, result) = analyzed();
        let curve = sample_curve(&input, &SAMANEA, &result, DEFAULT_SAMPLE_COUNT).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        let roundtrip: Vec<CurveSample> = serde_json::from_str(&json).unwrap();
        assert_eq!(curve, roundtrip);
    }
}
