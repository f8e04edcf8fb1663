//! Coefficients of the Dynamic-Wa law.
//!
//! Setters live on [`DynamicWaParamsBuilder`]; only a successful
//! [`DynamicWaParamsBuilder::finalize`] yields the read-only
//! [`DynamicWaParams`] the laws evaluate against.

use crate::error::ParamsError;

/// Mutable, not yet validated coefficients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicWaParamsBuilder {
    entry_pressure: Option<f64>,
    final_entry_pressure: Option<f64>,
    lambda: Option<f64>,
    llambda: Option<f64>,
    beta: Option<f64>,
    eta: Option<f64>,
    ei: Option<f64>,
    ef: Option<f64>,
}

impl DynamicWaParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry pressure [Pa].
    pub fn set_entry_pressure(&mut self, v: f64) -> &mut Self {
        self.entry_pressure = Some(v);
        self
    }

    /// Entry pressure approached for large `Sw * Wa` [Pa].
    pub fn set_final_entry_pressure(&mut self, v: f64) -> &mut Self {
        self.final_entry_pressure = Some(v);
        self
    }

    /// Shape exponent of the capillary pressure curve.
    pub fn set_lambda(&mut self, v: f64) -> &mut Self {
        self.lambda = Some(v);
        self
    }

    /// Shape exponent of the relative permeability curves.
    pub fn set_llambda(&mut self, v: f64) -> &mut Self {
        self.llambda = Some(v);
        self
    }

    /// Wa sensitivity of the capillary pressure.
    pub fn set_beta(&mut self, v: f64) -> &mut Self {
        self.beta = Some(v);
        self
    }

    /// Wa slope of the relative permeability coefficient.
    pub fn set_eta(&mut self, v: f64) -> &mut Self {
        self.eta = Some(v);
        self
    }

    /// Relative permeability coefficient at `Wa = 0`.
    pub fn set_ei(&mut self, v: f64) -> &mut Self {
        self.ei = Some(v);
        self
    }

    /// Upper clamp of the relative permeability coefficient.
    pub fn set_ef(&mut self, v: f64) -> &mut Self {
        self.ef = Some(v);
        self
    }

    /// Validates the coefficients and freezes them.
    ///
    /// `entry_pressure` and `lambda` are required. The others default to a
    /// Wa-neutral law: `final_entry_pressure = entry_pressure`,
    /// `llambda = lambda`, `beta = 1`, `eta = 0`, `ei = ef = 1`.
    pub fn finalize(&self) -> Result<DynamicWaParams, ParamsError> {
        let entry_pressure = positive(
            "entry_pressure",
            self.entry_pressure
                .ok_or(ParamsError::MissingCoefficient("entry_pressure"))?,
        )?;
        let lambda = positive(
            "lambda",
            self.lambda.ok_or(ParamsError::MissingCoefficient("lambda"))?,
        )?;
        let final_entry_pressure = positive(
            "final_entry_pressure",
            self.final_entry_pressure.unwrap_or(entry_pressure),
        )?;
        let llambda = positive("llambda", self.llambda.unwrap_or(lambda))?;
        let beta = positive("beta", self.beta.unwrap_or(1.0))?;
        let eta = finite("eta", self.eta.unwrap_or(0.0))?;
        let ei = finite("ei", self.ei.unwrap_or(1.0))?;
        let ef = finite("ef", self.ef.unwrap_or(1.0))?;

        if ei > ef {
            log::warn!("ei ({ei}) exceeds ef ({ef}); the permeability coefficient is pinned to ef");
        }

        Ok(DynamicWaParams {
            entry_pressure,
            final_entry_pressure,
            lambda,
            llambda,
            beta,
            eta,
            ei,
            ef,
        })
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamsError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ParamsError> {
    let value = finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}

/// Finalized, immutable coefficients of the Dynamic-Wa law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicWaParams {
    entry_pressure: f64,
    final_entry_pressure: f64,
    lambda: f64,
    llambda: f64,
    beta: f64,
    eta: f64,
    ei: f64,
    ef: f64,
}

impl DynamicWaParams {
    /// Finalized parameters from an entry pressure and `lambda`; every other
    /// coefficient takes its default.
    pub fn new(entry_pressure: f64, lambda: f64) -> Result<Self, ParamsError> {
        DynamicWaParamsBuilder::new()
            .set_entry_pressure(entry_pressure)
            .set_lambda(lambda)
            .finalize()
    }

    /// A builder seeded with these coefficients.
    pub fn to_builder(&self) -> DynamicWaParamsBuilder {
        DynamicWaParamsBuilder {
            entry_pressure: Some(self.entry_pressure),
            final_entry_pressure: Some(self.final_entry_pressure),
            lambda: Some(self.lambda),
            llambda: Some(self.llambda),
            beta: Some(self.beta),
            eta: Some(self.eta),
            ei: Some(self.ei),
            ef: Some(self.ef),
        }
    }

    pub fn entry_pressure(&self) -> f64 {
        self.entry_pressure
    }

    pub fn final_entry_pressure(&self) -> f64 {
        self.final_entry_pressure
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn llambda(&self) -> f64 {
        self.llambda
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn ei(&self) -> f64 {
        self.ei
    }

    pub fn ef(&self) -> f64 {
        self.ef
    }
}
