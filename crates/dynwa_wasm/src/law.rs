//! JavaScript handle around a finalized Dynamic-Wa law.

use anyhow::{anyhow, bail, Result};
use dynwa_core::config::RegularizedDynamicWaConfig;
use dynwa_core::curves::{evaluate, tabulate, CurvePoint};
use dynwa_core::traits::{NON_WETTING_PHASE_IDX, NUM_PHASES};
use dynwa_core::{
    DynamicWa, DynamicWaParams, RegularizedDynamicWa, RegularizedDynamicWaParams,
    TwoPhaseFluidState, TwoPhaseMaterialLaw,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub(crate) enum LawKind {
    Raw(DynamicWaParams),
    Regularized(RegularizedDynamicWaParams),
}

/// Extrapolation anchors of the regularized law, as seen from JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegularizationAnchors {
    pcnw_low_sw: f64,
    pcnw_low: f64,
    pcnw_slope_low: f64,
    pcnw_high: f64,
    pcnw_slope_high: f64,
}

pub(crate) fn to_js_error(err: anyhow::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub struct WasmDynamicWa {
    pub(crate) law: LawKind,
}

impl WasmDynamicWa {
    pub(crate) fn from_config(config: &RegularizedDynamicWaConfig, law: &str) -> Result<Self> {
        let law = match law {
            "raw" => LawKind::Raw(config.base.build()?),
            "regularized" => LawKind::Regularized(config.build()?),
            other => bail!("Unknown law \"{}\"; expected \"raw\" or \"regularized\".", other),
        };
        Ok(WasmDynamicWa { law })
    }

    fn point(&self, sw: f64, wa: f64) -> CurvePoint {
        match &self.law {
            LawKind::Raw(params) => evaluate::<DynamicWa>(params, sw, wa),
            LawKind::Regularized(params) => evaluate::<RegularizedDynamicWa>(params, sw, wa),
        }
    }

    pub(crate) fn anchors(&self) -> Result<RegularizationAnchors> {
        match &self.law {
            LawKind::Raw(_) => Err(anyhow!("The raw law has no regularization anchors.")),
            LawKind::Regularized(params) => Ok(RegularizationAnchors {
                pcnw_low_sw: params.pcnw_low_sw(),
                pcnw_low: params.pcnw_low(),
                pcnw_slope_low: params.pcnw_slope_low(),
                pcnw_high: params.pcnw_high(),
                pcnw_slope_high: params.pcnw_slope_high(),
            }),
        }
    }

    pub(crate) fn table(
        &self,
        wa: f64,
        sw_min: f64,
        sw_max: f64,
        samples: usize,
    ) -> Result<Vec<CurvePoint>> {
        match &self.law {
            LawKind::Raw(params) => tabulate::<DynamicWa>(params, wa, sw_min, sw_max, samples),
            LawKind::Regularized(params) => {
                tabulate::<RegularizedDynamicWa>(params, wa, sw_min, sw_max, samples)
            }
        }
    }
}

#[wasm_bindgen]
impl WasmDynamicWa {
    /// `config` is a `RegularizedDynamicWaConfig` object; `law` is `"raw"` or
    /// `"regularized"`. The raw law ignores the regularization fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, law: &str) -> Result<WasmDynamicWa, JsValue> {
        console_error_panic_hook::set_once();

        let config: RegularizedDynamicWaConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|err| JsValue::from_str(&format!("Invalid configuration: {err}")))?;
        Self::from_config(&config, law).map_err(to_js_error)
    }

    pub fn law_name(&self) -> String {
        match self.law {
            LawKind::Raw(_) => "raw".to_string(),
            LawKind::Regularized(_) => "regularized".to_string(),
        }
    }

    pub fn pcnw(&self, sw: f64, wa: f64) -> f64 {
        match &self.law {
            LawKind::Raw(params) => DynamicWa::two_phase_sat_pcnw(params, sw, wa),
            LawKind::Regularized(params) => {
                RegularizedDynamicWa::two_phase_sat_pcnw(params, sw, wa)
            }
        }
    }

    pub fn krw(&self, sw: f64, wa: f64) -> f64 {
        match &self.law {
            LawKind::Raw(params) => DynamicWa::two_phase_sat_krw(params, sw, wa),
            LawKind::Regularized(params) => {
                RegularizedDynamicWa::two_phase_sat_krw(params, sw, wa)
            }
        }
    }

    /// Non-wetting relative permeability at the effective wetting saturation.
    pub fn krn(&self, sw: f64, wa: f64) -> f64 {
        match &self.law {
            LawKind::Raw(params) => DynamicWa::two_phase_sat_krn(params, sw, wa),
            LawKind::Regularized(params) => {
                RegularizedDynamicWa::two_phase_sat_krn(params, sw, wa)
            }
        }
    }

    /// `[pc_w, pc_n]` with the wetting phase as reference.
    pub fn capillary_pressures(&self, sw: f64, sn: f64, wa: f64) -> Vec<f64> {
        let fs = fluid_state(sw, sn, wa);
        let mut values = [0.0; NUM_PHASES];
        match &self.law {
            LawKind::Raw(params) => DynamicWa::capillary_pressures(&mut values, params, &fs),
            LawKind::Regularized(params) => {
                RegularizedDynamicWa::capillary_pressures(&mut values, params, &fs)
            }
        }
        values.to_vec()
    }

    /// `[kr_w, kr_n]`.
    pub fn relative_permeabilities(&self, sw: f64, sn: f64, wa: f64) -> Vec<f64> {
        let fs = fluid_state(sw, sn, wa);
        let mut values = [0.0; NUM_PHASES];
        match &self.law {
            LawKind::Raw(params) => DynamicWa::relative_permeabilities(&mut values, params, &fs),
            LawKind::Regularized(params) => {
                RegularizedDynamicWa::relative_permeabilities(&mut values, params, &fs)
            }
        }
        values.to_vec()
    }

    /// `[pc, dpc/dSw, dpc/dWa]`.
    pub fn pcnw_gradient(&self, sw: f64, wa: f64) -> Vec<f64> {
        let point = self.point(sw, wa);
        vec![point.pcnw, point.dpcnw_dsw, point.dpcnw_dwa]
    }

    pub fn derived(&self) -> Result<JsValue, JsValue> {
        let anchors = self.anchors().map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&anchors)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize anchors: {err}")))
    }

    pub fn tabulate(
        &self,
        wa: f64,
        sw_min: f64,
        sw_max: f64,
        samples: usize,
    ) -> Result<JsValue, JsValue> {
        let points = self
            .table(wa, sw_min, sw_max, samples)
            .map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&points)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize curves: {err}")))
    }
}

fn fluid_state(sw: f64, sn: f64, wa: f64) -> TwoPhaseFluidState<f64> {
    let mut fs = TwoPhaseFluidState::new(sw, wa);
    fs.set_saturation(NON_WETTING_PHASE_IDX, sn);
    fs
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynwa_core::config::DynamicWaConfig;
    use dynwa_core::SlopeStrategy;

    fn config() -> RegularizedDynamicWaConfig {
        RegularizedDynamicWaConfig {
            base: DynamicWaConfig {
                entry_pressure: 1000.0,
                lambda: 2.0,
                final_entry_pressure: Some(5000.0),
                llambda: Some(2.0),
                beta: Some(1.0),
                eta: Some(0.0),
                ei: Some(0.5),
                ef: Some(1.0),
            },
            pcnw_low_sw: 0.01,
            slope_strategy: SlopeStrategy::Precomputed,
        }
    }

    #[test]
    fn from_config_selects_law() {
        let raw = WasmDynamicWa::from_config(&config(), "raw").expect("raw");
        assert_eq!(raw.law_name(), "raw");
        assert!(raw.anchors().is_err());

        let regularized = WasmDynamicWa::from_config(&config(), "regularized").expect("law");
        assert_eq!(regularized.law_name(), "regularized");
        let anchors = regularized.anchors().expect("anchors");
        assert!((anchors.pcnw_low - 10_000.0).abs() < 1e-6);

        let unknown = WasmDynamicWa::from_config(&config(), "spline");
        assert!(unknown.is_err());
    }

    #[test]
    fn from_config_reports_invalid_threshold() {
        let mut bad = config();
        bad.pcnw_low_sw = 1.5;
        let err = WasmDynamicWa::from_config(&bad, "regularized")
            .err()
            .expect("error");
        assert!(err.to_string().contains("threshold"));
        // the raw law does not look at the threshold
        assert!(WasmDynamicWa::from_config(&bad, "raw").is_ok());
    }

    #[test]
    fn batch_values_follow_phase_order() {
        let law = WasmDynamicWa::from_config(&config(), "regularized").expect("law");
        let pc = law.capillary_pressures(0.25, 0.75, 0.0);
        assert_eq!(pc.len(), 2);
        assert_eq!(pc[0], 0.0);
        assert!((pc[1] - 2000.0).abs() < 1e-6);

        let kr = law.relative_permeabilities(1.2, -0.2, 0.0);
        assert_eq!(kr, vec![1.0, 0.0]);
    }

    #[test]
    fn gradient_matches_single_evaluations() {
        let law = WasmDynamicWa::from_config(&config(), "raw").expect("law");
        let gradient = law.pcnw_gradient(0.25, 0.0);
        assert_eq!(gradient[0], law.pcnw(0.25, 0.0));
        assert!((gradient[1] - (-4000.0)).abs() < 1e-6);
        assert!((gradient[2] - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn table_respects_law_domain() {
        let raw = WasmDynamicWa::from_config(&config(), "raw").expect("raw");
        assert!(raw.table(0.0, -0.1, 1.0, 5).is_err());

        let regularized = WasmDynamicWa::from_config(&config(), "regularized").expect("law");
        let points = regularized.table(0.0, -0.1, 1.1, 5).expect("table");
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].krw, 0.0);
        assert_eq!(points[4].krn, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::WasmDynamicWa;
    use dynwa_core::config::{DynamicWaConfig, RegularizedDynamicWaConfig};
    use dynwa_core::SlopeStrategy;
    use serde::Serialize;
    use serde_wasm_bindgen::Serializer;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn config_value() -> wasm_bindgen::JsValue {
        let config = RegularizedDynamicWaConfig {
            base: DynamicWaConfig {
                entry_pressure: 1000.0,
                lambda: 2.0,
                final_entry_pressure: Some(5000.0),
                llambda: None,
                beta: None,
                eta: None,
                ei: None,
                ef: None,
            },
            pcnw_low_sw: 0.01,
            slope_strategy: SlopeStrategy::LiveWa,
        };
        config
            .serialize(&Serializer::json_compatible())
            .expect("config")
    }

    #[wasm_bindgen_test]
    fn constructor_accepts_camel_case_config() {
        let law = WasmDynamicWa::new(config_value(), "regularized").expect("law");
        assert!(law.pcnw(0.005, 0.0).is_finite());
        assert!(law.derived().is_ok());
        assert!(law.tabulate(0.0, 0.0, 1.0, 11).is_ok());
    }

    #[wasm_bindgen_test]
    fn constructor_rejects_unknown_law() {
        let result = WasmDynamicWa::new(config_value(), "spline");
        assert!(result.is_err(), "should reject unknown law");
    }
}
