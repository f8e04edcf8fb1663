//! Serializable configuration of the Dynamic-Wa coefficients, as produced by
//! a deck parser or a JavaScript front end.

use crate::error::ParamsError;
use crate::params::{DynamicWaParams, DynamicWaParamsBuilder};
use crate::regularized_params::{
    RegularizedDynamicWaParams, RegularizedDynamicWaParamsBuilder, SlopeStrategy,
    DEFAULT_PCNW_LOW_SW,
};
use serde::{Deserialize, Serialize};

/// Coefficients of the raw law. Unset optional coefficients take the
/// defaults of [`DynamicWaParamsBuilder::finalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicWaConfig {
    pub entry_pressure: f64,
    pub lambda: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_entry_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llambda: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ei: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef: Option<f64>,
}

impl DynamicWaConfig {
    pub fn to_builder(&self) -> DynamicWaParamsBuilder {
        let mut builder = DynamicWaParamsBuilder::new();
        builder
            .set_entry_pressure(self.entry_pressure)
            .set_lambda(self.lambda);

        if let Some(v) = self.final_entry_pressure {
            builder.set_final_entry_pressure(v);
        }
        if let Some(v) = self.llambda {
            builder.set_llambda(v);
        }
        if let Some(v) = self.beta {
            builder.set_beta(v);
        }
        if let Some(v) = self.eta {
            builder.set_eta(v);
        }
        if let Some(v) = self.ei {
            builder.set_ei(v);
        }
        if let Some(v) = self.ef {
            builder.set_ef(v);
        }
        builder
    }

    pub fn build(&self) -> Result<DynamicWaParams, ParamsError> {
        self.to_builder().finalize()
    }
}

fn default_pcnw_low_sw() -> f64 {
    DEFAULT_PCNW_LOW_SW
}

/// Coefficients of the regularized law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularizedDynamicWaConfig {
    #[serde(flatten)]
    pub base: DynamicWaConfig,
    #[serde(default = "default_pcnw_low_sw")]
    pub pcnw_low_sw: f64,
    #[serde(default)]
    pub slope_strategy: SlopeStrategy,
}

impl RegularizedDynamicWaConfig {
    pub fn to_builder(&self) -> RegularizedDynamicWaParamsBuilder {
        let mut builder = RegularizedDynamicWaParamsBuilder::from_base(self.base.to_builder());
        builder
            .set_pcnw_low_sw(self.pcnw_low_sw)
            .set_slope_strategy(self.slope_strategy);
        builder
    }

    pub fn build(&self) -> Result<RegularizedDynamicWaParams, ParamsError> {
        self.to_builder().finalize()
    }
}
