use crate::config::SamplerConfig;
use crate::dsp::{gate_phase, gaussian, plane_wave_phase, Amplitude, HBAR, MASS};
use crate::error::Result;

pub const SAMPLE_COUNT: usize = 500;
pub const HALF_SPAN: f64 = 10.0;
pub const VIEW_HALF_SPAN: f64 = 5.0;

/// One frame of sampled wavefunction data. Built fresh per invocation and
/// handed straight to the renderers; nothing is retained across frames.
#[derive(Debug, Clone)]
pub struct SampleFrame {
    pub positions: Vec<f64>,
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
    pub window_center: f64,
}

impl SampleFrame {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn probability_density(&self) -> Vec<f64> {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(re, im)| re * re + im * im)
            .collect()
    }

    pub fn peak_probability(&self) -> f64 {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(re, im)| re * re + im * im)
            .fold(0.0, f64::max)
    }
}

/// Complex amplitude at a single position. The envelope of both wave terms
/// rides at x0 = v·t, the primary wave's group position; the secondary term
/// differs only in carrier wavenumber.
pub fn amplitude_at(x: f64, t: f64, config: &SamplerConfig) -> Amplitude {
    let packet = &config.packet;
    let v = HBAR * packet.k0 / MASS;
    let x0 = v * t;

    let env = packet.amplitude * gaussian(x, x0, packet.sigma);
    let phase = plane_wave_phase(packet.k0, x, t);
    let mut psi = Amplitude {
        re: env * phase.cos(),
        im: env * phase.sin(),
    };

    if config.interference.enabled {
        let phase2 = plane_wave_phase(config.interference.k1, x, t);
        psi = psi.add(Amplitude {
            re: env * phase2.cos(),
            im: env * phase2.sin(),
        });
    }

    if config.phase_gate.enabled {
        psi = psi.rotated(gate_phase(x, &config.phase_gate));
    }

    psi
}

/// Sample the wavefunction over the co-moving window at time t. The window
/// is centered on the primary wave's group position v·t and spans
/// ±HALF_SPAN, SAMPLE_COUNT points with both endpoints included.
pub fn sample_frame(t: f64, config: &SamplerConfig) -> Result<SampleFrame> {
    config.validate()?;

    let v = HBAR * config.packet.k0 / MASS;
    let window_center = v * t;
    let xmin = window_center - HALF_SPAN;
    let xmax = window_center + HALF_SPAN;

    let mut positions = Vec::with_capacity(SAMPLE_COUNT);
    let mut real = Vec::with_capacity(SAMPLE_COUNT);
    let mut imag = Vec::with_capacity(SAMPLE_COUNT);

    for i in 0..SAMPLE_COUNT {
        let x = xmin + (i as f64 / (SAMPLE_COUNT - 1) as f64) * (xmax - xmin);
        let psi = amplitude_at(x, t, config);
        positions.push(x);
        real.push(psi.re);
        imag.push(psi.im);
    }

    Ok(SampleFrame {
        positions,
        real,
        imag,
        window_center,
    })
}
