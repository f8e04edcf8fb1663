//! The `dynwa_core` crate provides the Dynamic-Wa two-phase material laws:
//! capillary pressure and relative permeabilities that depend on the wetting
//! saturation and on a wetting-agent state `Wa`.
//! Every curve is generic over the scalar type, supporting both standard
//! floating-point arithmetic (`f64`) and automatic differentiation via Dual numbers.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `TwoPhaseMaterialLaw` (curve API), `MaterialLawTraits` (capabilities).
//! - **Params**: builders whose `finalize` yields immutable, validated parameter objects.
//! - **Laws**: `DynamicWa` (raw curves) and `RegularizedDynamicWa` (linear extrapolation near the saturation bounds).
//! - **Autodiff**: `Dual<N>` forward-mode numbers for exact derivatives of the curves.

pub mod autodiff;
pub mod config;
pub mod curves;
pub mod differentiate;
pub mod dynamic_wa;
pub mod error;
pub mod fluid_state;
pub mod params;
pub mod regularized_dynamic_wa;
pub mod regularized_params;
pub mod traits;

pub use dynamic_wa::DynamicWa;
pub use error::ParamsError;
pub use fluid_state::{FluidState, TwoPhaseFluidState};
pub use params::{DynamicWaParams, DynamicWaParamsBuilder};
pub use regularized_dynamic_wa::RegularizedDynamicWa;
pub use regularized_params::{
    RegularizedDynamicWaParams, RegularizedDynamicWaParamsBuilder, SlopeStrategy,
};
pub use traits::{Scalar, TwoPhaseMaterialLaw};
