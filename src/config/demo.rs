/// Shape of the synthetic light curve used for demos and smoke tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleCurveConfig {
    pub num_points: usize,
    /// Time step between samples.
    pub dt: f64,
    /// Baseline flux outside transit.
    pub baseline: f64,
    /// Transit recurrence, in samples.
    pub period_samples: usize,
    /// Transit width, in samples. The dip covers phases `[p/2 - w/2, p/2 + w/2]`.
    pub width_samples: usize,
    /// Fractional flux loss inside the transit.
    pub depth: f64,
    /// Gaussian noise sigma. Zero gives a clean box curve.
    pub noise_sigma: f64,
}

pub const SAMPLE: SampleCurveConfig = SampleCurveConfig {
    num_points: 1000,
    dt: 0.1,
    baseline: 1.0,
    period_samples: 200,
    width_samples: 20,
    depth: 0.015,
    noise_sigma: 0.002,
};
