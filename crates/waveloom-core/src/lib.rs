pub mod config;
pub mod dsp;
pub mod error;
pub mod sampler;

pub use config::{InterferenceConfig, PacketConfig, PhaseGateConfig, SamplerConfig};
pub use dsp::{gate_phase, gaussian, plane_wave_phase, Amplitude, HBAR, MASS};
pub use error::{Result, SamplerError};
pub use sampler::{amplitude_at, sample_frame, SampleFrame, HALF_SPAN, SAMPLE_COUNT, VIEW_HALF_SPAN};
