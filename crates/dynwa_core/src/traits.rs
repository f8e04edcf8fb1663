use crate::fluid_state::FluidState;
use num_traits::{Float, FromPrimitive, NumCast};
use std::fmt::Debug;

/// Index of the wetting phase in per-phase containers.
pub const WETTING_PHASE_IDX: usize = 0;
/// Index of the non-wetting phase in per-phase containers.
pub const NON_WETTING_PHASE_IDX: usize = 1;
/// Number of fluid phases handled by the two-phase laws.
pub const NUM_PHASES: usize = 2;

/// A trait for types that can be used as scalars in the material laws.
/// Must support basic arithmetic, debug printing, and conversion from f64.
/// Implemented for `f64`, `f32` and [`crate::autodiff::Dual`].
pub trait Scalar: Float + FromPrimitive + Debug + 'static {
    /// Lifts a plain coefficient into the evaluation type.
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Drops any derivative information and returns the plain value.
    fn value(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Static description of what a material law depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialLawTraits {
    pub num_phases: usize,
    pub implements_two_phase_api: bool,
    pub implements_two_phase_sat_api: bool,
    pub is_saturation_dependent: bool,
    pub is_pressure_dependent: bool,
    pub is_temperature_dependent: bool,
    pub is_composition_dependent: bool,
    /// Whether the law accepts saturations slightly outside `[0, 1]`.
    pub is_regularized: bool,
}

impl MaterialLawTraits {
    /// Capabilities shared by the saturation-only two-phase laws.
    pub const fn two_phase_saturation_law(is_regularized: bool) -> Self {
        Self {
            num_phases: NUM_PHASES,
            implements_two_phase_api: true,
            implements_two_phase_sat_api: true,
            is_saturation_dependent: true,
            is_pressure_dependent: false,
            is_temperature_dependent: false,
            is_composition_dependent: false,
            is_regularized,
        }
    }
}

/// A two-phase capillary pressure / relative permeability law.
///
/// Implementors provide the saturation-only functions; the fluid-state and
/// batch entry points are derived from them.
pub trait TwoPhaseMaterialLaw {
    type Params;

    const TRAITS: MaterialLawTraits;

    /// Capillary pressure `p_n - p_w` for the wetting saturation `sw`.
    fn two_phase_sat_pcnw<T: Scalar>(params: &Self::Params, sw: T, wa: T) -> T;

    /// Wetting phase relative permeability.
    fn two_phase_sat_krw<T: Scalar>(params: &Self::Params, sw: T, wa: T) -> T;

    /// Non-wetting phase relative permeability, evaluated at the effective
    /// wetting saturation `sw = 1 - S_n`.
    fn two_phase_sat_krn<T: Scalar>(params: &Self::Params, sw: T, wa: T) -> T;

    fn pcnw<T: Scalar, F: FluidState<T>>(params: &Self::Params, fs: &F) -> T {
        let sw = fs.saturation(WETTING_PHASE_IDX);
        Self::two_phase_sat_pcnw(params, sw, fs.wetting_agent())
    }

    fn krw<T: Scalar, F: FluidState<T>>(params: &Self::Params, fs: &F) -> T {
        let sw = fs.saturation(WETTING_PHASE_IDX);
        Self::two_phase_sat_krw(params, sw, fs.wetting_agent())
    }

    fn krn<T: Scalar, F: FluidState<T>>(params: &Self::Params, fs: &F) -> T {
        let sw = T::one() - fs.saturation(NON_WETTING_PHASE_IDX);
        Self::two_phase_sat_krn(params, sw, fs.wetting_agent())
    }

    /// Writes the capillary pressure of each phase relative to the wetting
    /// phase, which is the reference and always receives zero.
    fn capillary_pressures<T: Scalar, F: FluidState<T>>(
        values: &mut [T; NUM_PHASES],
        params: &Self::Params,
        fs: &F,
    ) {
        values[WETTING_PHASE_IDX] = T::zero();
        values[NON_WETTING_PHASE_IDX] = Self::pcnw(params, fs);
    }

    fn relative_permeabilities<T: Scalar, F: FluidState<T>>(
        values: &mut [T; NUM_PHASES],
        params: &Self::Params,
        fs: &F,
    ) {
        values[WETTING_PHASE_IDX] = Self::krw(params, fs);
        values[NON_WETTING_PHASE_IDX] = Self::krn(params, fs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_and_value_round_trip_plain_floats() {
        assert_eq!(<f64 as Scalar>::lit(0.25), 0.25);
        assert_eq!(<f32 as Scalar>::lit(0.5), 0.5f32);
        assert_eq!(Scalar::value(2.5f64), 2.5);
    }

    #[test]
    fn two_phase_saturation_law_has_two_phases() {
        let traits = MaterialLawTraits::two_phase_saturation_law(true);
        assert_eq!(traits.num_phases, 2);
        assert!(traits.is_saturation_dependent);
        assert!(!traits.is_pressure_dependent);
        assert!(traits.is_regularized);
    }
}
