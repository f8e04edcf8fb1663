//! Regularized Dynamic-Wa law.
//!
//! - For `Sw <= pcnw_low_sw` the capillary pressure is extrapolated with a
//!   straight line tangent to the raw curve at the threshold.
//! - For `Sw >= 1` it is extrapolated with the tangent at `Sw = 1`.
//! - The relative permeabilities are clamped to 0 or 1 outside `(0, 1)`. This
//!   removes the out-of-range evaluations but not the kinks at the ends.
//!
//! Everything in between is delegated to [`DynamicWa`].

use crate::differentiate::{safe_slope, FD_EPSILON};
use crate::dynamic_wa::DynamicWa;
use crate::regularized_params::{RegularizedDynamicWaParams, SlopeStrategy};
use crate::traits::{MaterialLawTraits, Scalar, TwoPhaseMaterialLaw};

#[derive(Debug, Clone, Copy, Default)]
pub struct RegularizedDynamicWa;

impl RegularizedDynamicWa {
    /// Anchor value and tangent slope of the raw curve at `sw_anchor`.
    fn tangent<T: Scalar>(params: &RegularizedDynamicWaParams, sw_anchor: f64, wa: T) -> (T, T) {
        let base = params.base();
        match params.slope_strategy() {
            SlopeStrategy::LiveWa => {
                let pc = DynamicWa::two_phase_sat_pcnw(base, T::lit(sw_anchor), wa);
                let slope = safe_slope(
                    |s: T| DynamicWa::two_phase_sat_pcnw(base, s, wa),
                    sw_anchor,
                    FD_EPSILON,
                );
                (pc, slope)
            }
            SlopeStrategy::Precomputed if sw_anchor >= 1.0 => (
                T::lit(params.pcnw_high()),
                T::lit(params.pcnw_slope_high()),
            ),
            SlopeStrategy::Precomputed => {
                (T::lit(params.pcnw_low()), T::lit(params.pcnw_slope_low()))
            }
        }
    }
}

impl TwoPhaseMaterialLaw for RegularizedDynamicWa {
    type Params = RegularizedDynamicWaParams;

    const TRAITS: MaterialLawTraits = MaterialLawTraits::two_phase_saturation_law(true);

    fn two_phase_sat_pcnw<T: Scalar>(params: &RegularizedDynamicWaParams, sw: T, wa: T) -> T {
        let sw_low = params.pcnw_low_sw();

        if sw <= T::lit(sw_low) {
            let (pc, slope) = Self::tangent(params, sw_low, wa);
            return pc + slope * (sw - T::lit(sw_low));
        }
        if sw >= T::one() {
            let (pc, slope) = Self::tangent(params, 1.0, wa);
            return pc + slope * (sw - T::one());
        }

        DynamicWa::two_phase_sat_pcnw(params.base(), sw, wa)
    }

    fn two_phase_sat_krw<T: Scalar>(params: &RegularizedDynamicWaParams, sw: T, wa: T) -> T {
        if sw <= T::zero() {
            return T::zero();
        }
        if sw >= T::one() {
            return T::one();
        }

        DynamicWa::two_phase_sat_krw(params.base(), sw, wa)
    }

    fn two_phase_sat_krn<T: Scalar>(params: &RegularizedDynamicWaParams, sw: T, wa: T) -> T {
        if sw >= T::one() {
            return T::zero();
        }
        if sw <= T::zero() {
            return T::one();
        }

        DynamicWa::two_phase_sat_krn(params.base(), sw, wa)
    }
}
