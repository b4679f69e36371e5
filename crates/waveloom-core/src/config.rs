use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplerError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PacketConfig {
    pub amplitude: f64,
    pub sigma: f64,
    pub k0: f64,
}

impl Default for PacketConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            sigma: 1.0,
            k0: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterferenceConfig {
    pub enabled: bool,
    pub k1: f64,
}

impl Default for InterferenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            k1: 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhaseGateConfig {
    pub enabled: bool,
    pub center: f64,
    pub width: f64,
    pub phase: f64,
}

impl Default for PhaseGateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            center: 2.0,
            width: 1.0,
            phase: FRAC_PI_2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SamplerConfig {
    pub packet: PacketConfig,
    pub interference: InterferenceConfig,
    pub phase_gate: PhaseGateConfig,
}

impl SamplerConfig {
    /// Width parameters must stay strictly positive; the Gaussian terms
    /// divide by them. The gate width is checked even while the gate is
    /// disabled. NaN fails the comparisons and is rejected the same way.
    pub fn validate(&self) -> Result<()> {
        if !(self.packet.sigma > 0.0) {
            return Err(SamplerError::InvalidParameter {
                name: "sigma",
                value: self.packet.sigma,
            });
        }
        if !(self.phase_gate.width > 0.0) {
            return Err(SamplerError::InvalidParameter {
                name: "phase_gate.width",
                value: self.phase_gate.width,
            });
        }
        Ok(())
    }
}
