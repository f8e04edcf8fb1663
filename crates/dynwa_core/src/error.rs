use thiserror::Error;

/// Reasons a parameter object refuses to finalize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("coefficient `{0}` was never set")]
    MissingCoefficient(&'static str),

    #[error("coefficient `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("coefficient `{name}` must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("regularization threshold saturation must lie in (0, 1), got {0}")]
    ThresholdOutOfRange(f64),

    #[error("derived quantity `{name}` is not finite ({value}); check the coefficients")]
    NonFiniteDerived { name: &'static str, value: f64 },
}
