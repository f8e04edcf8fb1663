//! The unregularized Dynamic-Wa capillary pressure and relative
//! permeability curves.
//!
//! The capillary pressure follows a power-law entry pressure curve that is
//! blended towards a final entry pressure as `Sw * Wa` grows:
//!
//! ```text
//! pc  = pe * Sw^(-1/lambda) * (1 + (pf/pe - 1) * Sw*Wa / (beta + Sw*Wa))
//! krw = c * Sw^llambda / (1 - Sw + c * Sw^llambda)
//! krn = (1 - Sw)       / (1 - Sw + c * Sw^llambda)
//! c   = min(eta * Wa + ei, ef)
//! ```
//!
//! Every function expects `0 <= Sw <= 1`; `Sw = 0` is a singularity of the
//! capillary pressure. Use [`crate::RegularizedDynamicWa`] when saturations
//! can reach or leave the boundaries.

use crate::params::DynamicWaParams;
use crate::traits::{MaterialLawTraits, Scalar, TwoPhaseMaterialLaw};

/// The raw Dynamic-Wa material law.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicWa;

fn in_unit_interval<T: Scalar>(sw: T) -> bool {
    T::zero() <= sw && sw <= T::one()
}

/// `min(eta * Wa + ei, ef)`
fn permeability_coefficient<T: Scalar>(params: &DynamicWaParams, wa: T) -> T {
    (T::lit(params.eta()) * wa + T::lit(params.ei())).min(T::lit(params.ef()))
}

impl TwoPhaseMaterialLaw for DynamicWa {
    type Params = DynamicWaParams;

    const TRAITS: MaterialLawTraits = MaterialLawTraits::two_phase_saturation_law(false);

    fn two_phase_sat_pcnw<T: Scalar>(params: &DynamicWaParams, sw: T, wa: T) -> T {
        debug_assert!(in_unit_interval(sw), "saturation {sw:?} outside [0, 1]");

        let one = T::one();
        let pe = T::lit(params.entry_pressure());
        let pf = T::lit(params.final_entry_pressure());
        let sw_wa = sw * wa;
        let blend = one + (pf / pe - one) * sw_wa / (T::lit(params.beta()) + sw_wa);

        blend * pe * sw.powf(-one / T::lit(params.lambda()))
    }

    fn two_phase_sat_krw<T: Scalar>(params: &DynamicWaParams, sw: T, wa: T) -> T {
        debug_assert!(in_unit_interval(sw), "saturation {sw:?} outside [0, 1]");

        let weighted = permeability_coefficient(params, wa) * sw.powf(T::lit(params.llambda()));
        weighted / (T::one() - sw + weighted)
    }

    fn two_phase_sat_krn<T: Scalar>(params: &DynamicWaParams, sw: T, wa: T) -> T {
        debug_assert!(in_unit_interval(sw), "saturation {sw:?} outside [0, 1]");

        let sn = T::one() - sw;
        let weighted = permeability_coefficient(params, wa) * sw.powf(T::lit(params.llambda()));
        sn / (sn + weighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autodiff::Dual;
    use crate::fluid_state::TwoPhaseFluidState;
    use crate::params::DynamicWaParamsBuilder;
    use crate::traits::{NON_WETTING_PHASE_IDX, WETTING_PHASE_IDX};

    fn scenario() -> DynamicWaParams {
        DynamicWaParamsBuilder::new()
            .set_entry_pressure(1000.0)
            .set_final_entry_pressure(5000.0)
            .set_lambda(2.0)
            .set_llambda(2.0)
            .set_beta(1.0)
            .set_eta(0.0)
            .set_ei(0.5)
            .set_ef(1.0)
            .finalize()
            .expect("scenario params")
    }

    fn assert_close(actual: f64, expected: f64, rel: f64) {
        assert!(
            (actual - expected).abs() <= rel * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn pcnw_at_full_saturation_matches_closed_form() {
        let params = scenario();
        for wa in [0.0, 0.5, 1.0, 3.0, 25.0] {
            let expected = 1000.0 * (1.0 + (5000.0 / 1000.0 - 1.0) * wa / (1.0 + wa));
            let pc = DynamicWa::two_phase_sat_pcnw(&params, 1.0, wa);
            assert_close(pc, expected, 1e-12);
        }
    }

    #[test]
    fn pcnw_without_wetting_agent_is_power_law() {
        let params = scenario();
        for sw in [0.01, 0.1, 0.25, 0.5, 0.9] {
            let pc = DynamicWa::two_phase_sat_pcnw(&params, sw, 0.0);
            assert_close(pc, 1000.0 * sw.powf(-0.5), 1e-12);
        }
    }

    #[test]
    fn pcnw_is_non_increasing_in_saturation() {
        let params = scenario();
        for wa in [0.0, 0.2, 1.0] {
            let mut previous = f64::INFINITY;
            for i in 1..=100 {
                let sw = i as f64 / 100.0;
                let pc = DynamicWa::two_phase_sat_pcnw(&params, sw, wa);
                assert!(pc.is_finite());
                assert!(pc <= previous, "pc rose at sw = {sw}, wa = {wa}");
                previous = pc;
            }
        }
    }

    #[test]
    fn pcnw_diverges_at_zero_saturation() {
        let params = scenario();
        let pc: f64 = DynamicWa::two_phase_sat_pcnw(&params, 0.0, 0.0);
        assert!(pc.is_infinite());
    }

    #[test]
    fn relperm_endpoints() {
        let params = scenario();
        for wa in [0.0, 2.0] {
            assert_eq!(DynamicWa::two_phase_sat_krw(&params, 0.0, wa), 0.0);
            assert_close(DynamicWa::two_phase_sat_krw(&params, 1.0, wa), 1.0, 1e-15);
            assert_close(DynamicWa::two_phase_sat_krn(&params, 0.0, wa), 1.0, 1e-15);
            assert_eq!(DynamicWa::two_phase_sat_krn(&params, 1.0, wa), 0.0);
        }
    }

    #[test]
    fn krw_is_increasing_and_krn_decreasing() {
        let params = scenario();
        let mut last_krw = -1.0;
        let mut last_krn = 2.0;
        for i in 1..100 {
            let sw = i as f64 / 100.0;
            let krw = DynamicWa::two_phase_sat_krw(&params, sw, 0.3);
            let krn = DynamicWa::two_phase_sat_krn(&params, sw, 0.3);
            assert!(krw > last_krw && krn < last_krn);
            last_krw = krw;
            last_krn = krn;
        }
    }

    #[test]
    fn permeability_coefficient_is_clamped_by_ef() {
        let params = scenario()
            .to_builder()
            .set_eta(1.0)
            .finalize()
            .expect("params");
        // c = min(Wa + 0.5, 1): Wa = 0.5 and Wa = 10 give the same curve
        let at_limit = DynamicWa::two_phase_sat_krw(&params, 0.4, 0.5);
        let beyond = DynamicWa::two_phase_sat_krw(&params, 0.4, 10.0);
        assert_eq!(at_limit, beyond);

        let c = 0.75;
        let weighted = c * 0.4f64.powi(2);
        let expected = weighted / (0.6 + weighted);
        assert_close(DynamicWa::two_phase_sat_krw(&params, 0.4, 0.25), expected, 1e-14);
    }

    #[test]
    fn relperms_need_not_sum_to_one() {
        let params = scenario();
        let krw = DynamicWa::two_phase_sat_krw(&params, 0.5, 0.0);
        let krn = DynamicWa::two_phase_sat_krn(&params, 0.5, 0.0);
        assert_close(krw, 0.125 / 0.625, 1e-14);
        assert_close(krn, 0.5 / 0.625, 1e-14);
    }

    #[test]
    fn fluid_state_entry_points_read_the_right_phases() {
        let params = scenario();
        let mut fs = TwoPhaseFluidState::new(0.3, 0.4);
        fs.set_saturation(NON_WETTING_PHASE_IDX, 0.75);

        let mut pc = [f64::NAN; 2];
        DynamicWa::capillary_pressures(&mut pc, &params, &fs);
        assert_eq!(pc[WETTING_PHASE_IDX], 0.0);
        assert_eq!(
            pc[NON_WETTING_PHASE_IDX],
            DynamicWa::two_phase_sat_pcnw(&params, 0.3, 0.4)
        );

        let mut kr = [f64::NAN; 2];
        DynamicWa::relative_permeabilities(&mut kr, &params, &fs);
        assert_eq!(
            kr[WETTING_PHASE_IDX],
            DynamicWa::two_phase_sat_krw(&params, 0.3, 0.4)
        );
        // krn uses the effective wetting saturation 1 - S_n = 0.25
        assert_eq!(
            kr[NON_WETTING_PHASE_IDX],
            DynamicWa::two_phase_sat_krn(&params, 0.25, 0.4)
        );
    }

    #[test]
    fn dual_derivatives_match_analytic_slope() {
        let params = scenario();
        let sw = Dual::<2>::variable(0.25, 0);
        let wa = Dual::<2>::variable(0.0, 1);
        let pc = DynamicWa::two_phase_sat_pcnw(&params, sw, wa);

        assert_close(pc.val, 2000.0, 1e-12);
        // d/dSw (1000 Sw^-1/2) = -500 Sw^-3/2
        assert_close(pc.derivative(0), -500.0 * 0.25f64.powf(-1.5), 1e-12);
        // d/dWa at Wa = 0: pe * Sw^-1/2 * (pf/pe - 1) * Sw / beta
        assert_close(pc.derivative(1), 2000.0 * 4.0 * 0.25, 1e-12);
    }

    #[test]
    fn dual_and_plain_evaluations_agree() {
        let params = scenario();
        for sw in [0.05, 0.3, 0.8] {
            let plain = DynamicWa::two_phase_sat_krn(&params, sw, 0.7);
            let dual = DynamicWa::two_phase_sat_krn(
                &params,
                Dual::<1>::variable(sw, 0),
                Dual::constant(0.7),
            );
            assert_eq!(plain, dual.val);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 1]")]
    fn pcnw_rejects_saturation_above_one() {
        let params = scenario();
        let _: f64 = DynamicWa::two_phase_sat_pcnw(&params, 1.1, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 1]")]
    fn krw_rejects_negative_saturation() {
        let params = scenario();
        let _: f64 = DynamicWa::two_phase_sat_krw(&params, -0.1, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside [0, 1]")]
    fn krn_rejects_saturation_above_one() {
        let params = scenario();
        let _: f64 = DynamicWa::two_phase_sat_krn(&params, 1.1, 0.0);
    }
}
