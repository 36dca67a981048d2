use serde::Deserialize;

/// 12-6 Lennard-Jones energy `4ε[(σ/z)¹² − (σ/z)⁶]` at separation `z`.
///
/// The zero crossing is at `z = σ` and the minimum `−ε` at `z = 2^(1/6) σ`. There is no
/// short-distance cap; the energy diverges as `z → 0`.
#[inline]
pub fn lennard_jones(z: f64, sigma: f64, epsilon: f64) -> f64 {
    let sigz6 = (sigma / z).powi(6);
    4.0 * epsilon * (sigz6 * sigz6 - sigz6)
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct LennardJones {
    pub sigma: f64,
    pub epsilon: f64,
}

impl LennardJones {
    pub fn new(sigma: f64, epsilon: f64) -> Self {
        Self { sigma, epsilon }
    }

    #[inline]
    pub fn energy(&self, z: f64) -> f64 {
        lennard_jones(z, self.sigma, self.epsilon)
    }

    /// Separation of the energy minimum, `2^(1/6) σ`.
    pub fn minimum_distance(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }
}
