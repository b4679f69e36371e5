use std::f64::consts::FRAC_PI_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use waveloom_core::{
    amplitude_at, sample_frame, Amplitude, SamplerConfig, SamplerError, HALF_SPAN, SAMPLE_COUNT,
};

fn quiet_config() -> SamplerConfig {
    let mut config = SamplerConfig::default();
    config.interference.enabled = false;
    config.phase_gate.enabled = false;
    config
}

#[test]
fn window_tracks_group_velocity() {
    let config = quiet_config();
    for &t in &[0.0, 0.5, 1.0, 7.25] {
        let frame = sample_frame(t, &config).unwrap();
        assert_eq!(frame.len(), SAMPLE_COUNT);
        assert_relative_eq!(frame.window_center, config.packet.k0 * t);
        assert_abs_diff_eq!(frame.positions[0], frame.window_center - HALF_SPAN);
        assert_abs_diff_eq!(
            frame.positions[SAMPLE_COUNT - 1],
            frame.window_center + HALF_SPAN
        );
    }
}

#[test]
fn positions_are_evenly_spaced() {
    let frame = sample_frame(1.5, &quiet_config()).unwrap();
    let step = 2.0 * HALF_SPAN / (SAMPLE_COUNT - 1) as f64;
    for pair in frame.positions.windows(2) {
        assert_abs_diff_eq!(pair[1] - pair[0], step, epsilon = 1e-9);
    }
}

#[test]
fn probability_matches_squared_envelope() {
    let config = quiet_config();
    let frame = sample_frame(0.0, &config).unwrap();
    let prob = frame.probability_density();
    let a = config.packet.amplitude;
    let sigma = config.packet.sigma;
    for (x, p) in frame.positions.iter().zip(&prob) {
        let expected = a * a * (-(x * x) / (sigma * sigma)).exp();
        assert_abs_diff_eq!(*p, expected, epsilon = 1e-9);
    }
}

#[test]
fn phase_gate_preserves_probability() {
    let mut gated = SamplerConfig::default();
    gated.phase_gate.enabled = true;
    let mut ungated = gated;
    ungated.phase_gate.enabled = false;

    let t = 0.8;
    let with_gate = sample_frame(t, &gated).unwrap();
    let without_gate = sample_frame(t, &ungated).unwrap();
    for (p, q) in with_gate
        .probability_density()
        .iter()
        .zip(without_gate.probability_density())
    {
        assert_abs_diff_eq!(*p, q, epsilon = 1e-9);
    }
}

#[test]
fn rotation_preserves_norm() {
    let psi = Amplitude { re: 0.37, im: -1.2 };
    for &phi in &[0.0, 0.1, FRAC_PI_2, 3.0, -2.5] {
        assert_abs_diff_eq!(psi.rotated(phi).norm_sqr(), psi.norm_sqr(), epsilon = 1e-9);
    }
}

#[test]
fn sampler_is_pure() {
    let config = SamplerConfig::default();
    let a = sample_frame(2.3, &config).unwrap();
    let b = sample_frame(2.3, &config).unwrap();
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.real, b.real);
    assert_eq!(a.imag, b.imag);
    assert_eq!(a.window_center, b.window_center);
}

#[test]
fn second_wave_leaves_grid_unchanged() {
    let mut config = quiet_config();
    let single = sample_frame(1.1, &config).unwrap();
    config.interference.enabled = true;
    let doubled = sample_frame(1.1, &config).unwrap();
    assert_eq!(single.positions, doubled.positions);
    assert_eq!(single.window_center, doubled.window_center);
    assert_ne!(single.real, doubled.real);
}

#[test]
fn packet_peak_at_origin() {
    let psi = amplitude_at(0.0, 0.0, &quiet_config());
    assert_abs_diff_eq!(psi.re, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(psi.im, 0.0, epsilon = 1e-9);
}

#[test]
fn gate_at_peak_rotates_into_imaginary() {
    let mut config = quiet_config();
    config.phase_gate.enabled = true;
    config.phase_gate.center = 0.0;
    config.phase_gate.width = 1.0;
    config.phase_gate.phase = FRAC_PI_2;

    let psi = amplitude_at(0.0, 0.0, &config);
    assert_abs_diff_eq!(psi.re, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(psi.im, 0.5, epsilon = 1e-9);
}

#[test]
fn rejects_nonpositive_widths() {
    let mut config = SamplerConfig::default();
    config.packet.sigma = 0.0;
    assert_eq!(
        sample_frame(0.0, &config).unwrap_err(),
        SamplerError::InvalidParameter {
            name: "sigma",
            value: 0.0,
        }
    );

    let mut config = SamplerConfig::default();
    config.phase_gate.width = -1.0;
    config.phase_gate.enabled = false;
    assert!(sample_frame(0.0, &config).is_err());
}
