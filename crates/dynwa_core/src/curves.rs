//! Tabulation of a law over a saturation range, with exact derivatives of
//! the capillary pressure obtained through [`Dual`] numbers.

use crate::autodiff::Dual;
use crate::traits::TwoPhaseMaterialLaw;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One sample of the curves at a given wetting saturation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub sw: f64,
    pub pcnw: f64,
    pub dpcnw_dsw: f64,
    pub dpcnw_dwa: f64,
    pub krw: f64,
    /// Non-wetting relative permeability at `S_n = 1 - sw`.
    pub krn: f64,
}

/// Evaluates every curve of a law at a single point.
pub fn evaluate<L: TwoPhaseMaterialLaw>(params: &L::Params, sw: f64, wa: f64) -> CurvePoint {
    let pc = L::two_phase_sat_pcnw(params, Dual::<2>::variable(sw, 0), Dual::variable(wa, 1));
    CurvePoint {
        sw,
        pcnw: pc.value(),
        dpcnw_dsw: pc.derivative(0),
        dpcnw_dwa: pc.derivative(1),
        krw: L::two_phase_sat_krw(params, sw, wa),
        krn: L::two_phase_sat_krn(params, sw, wa),
    }
}

/// Samples `samples` equally spaced saturations in `[sw_min, sw_max]`.
///
/// The raw law only accepts ranges inside `(0, 1]`; regularized laws accept
/// any finite range.
pub fn tabulate<L: TwoPhaseMaterialLaw>(
    params: &L::Params,
    wa: f64,
    sw_min: f64,
    sw_max: f64,
    samples: usize,
) -> Result<Vec<CurvePoint>> {
    if samples < 2 {
        bail!("At least two samples are required, got {}.", samples);
    }
    if !sw_min.is_finite() || !sw_max.is_finite() || !wa.is_finite() {
        bail!("Saturation range and wetting agent state must be finite.");
    }
    if sw_min >= sw_max {
        bail!(
            "Saturation range is empty: sw_min = {}, sw_max = {}.",
            sw_min,
            sw_max
        );
    }
    if !L::TRAITS.is_regularized && (sw_min <= 0.0 || sw_max > 1.0) {
        bail!(
            "The unregularized law is only defined for 0 < Sw <= 1, got [{}, {}].",
            sw_min,
            sw_max
        );
    }

    let step = (sw_max - sw_min) / (samples - 1) as f64;
    let points = (0..samples)
        .map(|i| {
            let sw = if i + 1 == samples {
                sw_max
            } else {
                sw_min + step * i as f64
            };
            evaluate::<L>(params, sw, wa)
        })
        .collect();
    Ok(points)
}
