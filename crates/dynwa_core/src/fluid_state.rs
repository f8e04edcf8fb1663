//! The narrow view of a fluid state the material laws read from.

use crate::traits::{Scalar, NON_WETTING_PHASE_IDX, NUM_PHASES, WETTING_PHASE_IDX};

/// Phase saturations and the wetting-agent state of one control volume.
pub trait FluidState<T: Scalar> {
    /// Saturation of the phase at `phase_idx` (see the phase index constants).
    fn saturation(&self, phase_idx: usize) -> T;

    /// The accumulated wetting-agent state `Wa`.
    fn wetting_agent(&self) -> T;
}

/// Minimal two-phase fluid state holding saturations and `Wa`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseFluidState<T: Scalar> {
    saturations: [T; NUM_PHASES],
    wetting_agent: T,
}

impl<T: Scalar> TwoPhaseFluidState<T> {
    /// Builds a state with `S_n = 1 - sw`.
    pub fn new(sw: T, wa: T) -> Self {
        let mut saturations = [T::zero(); NUM_PHASES];
        saturations[WETTING_PHASE_IDX] = sw;
        saturations[NON_WETTING_PHASE_IDX] = T::one() - sw;
        Self {
            saturations,
            wetting_agent: wa,
        }
    }

    pub fn set_saturation(&mut self, phase_idx: usize, value: T) {
        self.saturations[phase_idx] = value;
    }

    pub fn set_wetting_agent(&mut self, value: T) {
        self.wetting_agent = value;
    }
}

impl<T: Scalar> FluidState<T> for TwoPhaseFluidState<T> {
    fn saturation(&self, phase_idx: usize) -> T {
        self.saturations[phase_idx]
    }

    fn wetting_agent(&self) -> T {
        self.wetting_agent
    }
}
