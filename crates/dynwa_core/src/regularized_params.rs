//! Coefficients of the regularized Dynamic-Wa law.
//!
//! Finalizing computes the anchors of the linear extrapolations once, at the
//! reference state `Wa = 0`: the capillary pressure and its slope at the low
//! threshold saturation and at `Sw = 1`.

use crate::differentiate::{safe_slope, FD_EPSILON};
use crate::dynamic_wa::DynamicWa;
use crate::error::ParamsError;
use crate::params::{DynamicWaParams, DynamicWaParamsBuilder};
use crate::traits::TwoPhaseMaterialLaw;
use serde::{Deserialize, Serialize};

/// Default saturation below which the capillary pressure is extrapolated.
pub const DEFAULT_PCNW_LOW_SW: f64 = 0.01;

/// Where the regularized law takes its extrapolation tangents from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlopeStrategy {
    /// Recompute anchor value and slope on every call at the live `Wa`.
    /// Below a threshold of `1e-7` the slope is a forward difference, never probing `Sw <= 0`.
    #[default]
    LiveWa,
    /// Use the anchors computed by `finalize` at `Wa = 0`.
    Precomputed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegularizedDynamicWaParamsBuilder {
    base: DynamicWaParamsBuilder,
    pcnw_low_sw: f64,
    slope_strategy: SlopeStrategy,
}

impl Default for RegularizedDynamicWaParamsBuilder {
    fn default() -> Self {
        Self::from_base(DynamicWaParamsBuilder::default())
    }
}

impl RegularizedDynamicWaParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_base(base: DynamicWaParamsBuilder) -> Self {
        Self {
            base,
            pcnw_low_sw: DEFAULT_PCNW_LOW_SW,
            slope_strategy: SlopeStrategy::default(),
        }
    }

    /// The coefficients of the underlying raw law.
    pub fn base_mut(&mut self) -> &mut DynamicWaParamsBuilder {
        &mut self.base
    }

    /// Threshold saturation below which the capillary pressure is regularized.
    pub fn set_pcnw_low_sw(&mut self, v: f64) -> &mut Self {
        self.pcnw_low_sw = v;
        self
    }

    pub fn set_slope_strategy(&mut self, strategy: SlopeStrategy) -> &mut Self {
        self.slope_strategy = strategy;
        self
    }

    pub fn finalize(&self) -> Result<RegularizedDynamicWaParams, ParamsError> {
        let base = self.base.finalize()?;

        let sw_low = self.pcnw_low_sw;
        if !(sw_low > 0.0 && sw_low < 1.0) {
            return Err(ParamsError::ThresholdOutOfRange(sw_low));
        }

        let pcnw_low = derived("pcnw_low", DynamicWa::two_phase_sat_pcnw(&base, sw_low, 0.0))?;
        let pcnw_slope_low = derived("pcnw_slope_low", reference_slope(&base, sw_low))?;
        let pcnw_high = derived("pcnw_high", DynamicWa::two_phase_sat_pcnw(&base, 1.0, 0.0))?;
        let pcnw_slope_high = derived("pcnw_slope_high", reference_slope(&base, 1.0))?;

        log::debug!(
            "regularized Dynamic-Wa anchors: pc({sw_low}) = {pcnw_low}, slope {pcnw_slope_low}; \
             pc(1) = {pcnw_high}, slope {pcnw_slope_high}"
        );

        Ok(RegularizedDynamicWaParams {
            base,
            pcnw_low_sw: sw_low,
            slope_strategy: self.slope_strategy,
            pcnw_low,
            pcnw_slope_low,
            pcnw_high,
            pcnw_slope_high,
        })
    }
}

/// dPc/dSw of the raw curve at the reference state `Wa = 0`.
fn reference_slope(base: &DynamicWaParams, sw: f64) -> f64 {
    safe_slope(
        |s: f64| DynamicWa::two_phase_sat_pcnw(base, s, 0.0),
        sw,
        FD_EPSILON,
    )
}

fn derived(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamsError::NonFiniteDerived { name, value })
    }
}

/// Finalized coefficients plus the extrapolation anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularizedDynamicWaParams {
    base: DynamicWaParams,
    pcnw_low_sw: f64,
    slope_strategy: SlopeStrategy,
    pcnw_low: f64,
    pcnw_slope_low: f64,
    pcnw_high: f64,
    pcnw_slope_high: f64,
}

impl RegularizedDynamicWaParams {
    /// Finalized parameters with default coefficients, the default threshold
    /// and the default slope strategy.
    pub fn new(entry_pressure: f64, lambda: f64) -> Result<Self, ParamsError> {
        let mut builder = RegularizedDynamicWaParamsBuilder::new();
        builder
            .base_mut()
            .set_entry_pressure(entry_pressure)
            .set_lambda(lambda);
        builder.finalize()
    }

    pub fn to_builder(&self) -> RegularizedDynamicWaParamsBuilder {
        RegularizedDynamicWaParamsBuilder {
            base: self.base.to_builder(),
            pcnw_low_sw: self.pcnw_low_sw,
            slope_strategy: self.slope_strategy,
        }
    }

    /// Coefficients of the underlying raw law.
    pub fn base(&self) -> &DynamicWaParams {
        &self.base
    }

    pub fn pcnw_low_sw(&self) -> f64 {
        self.pcnw_low_sw
    }

    pub fn slope_strategy(&self) -> SlopeStrategy {
        self.slope_strategy
    }

    /// Capillary pressure at the low threshold saturation (`Wa = 0`).
    pub fn pcnw_low(&self) -> f64 {
        self.pcnw_low
    }

    /// Slope used to extrapolate below the low threshold (`Wa = 0`).
    pub fn pcnw_slope_low(&self) -> f64 {
        self.pcnw_slope_low
    }

    /// Capillary pressure at `Sw = 1` (`Wa = 0`).
    pub fn pcnw_high(&self) -> f64 {
        self.pcnw_high
    }

    /// Slope used to extrapolate above `Sw = 1` (`Wa = 0`).
    pub fn pcnw_slope_high(&self) -> f64 {
        self.pcnw_slope_high
    }
}
