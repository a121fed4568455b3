use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::StandardNormal;

/// An explicitly owned random stream.
///
/// One instance is seeded per field object so that the placement phase is
/// reproducible: identical seed and draw order give bit-identical layouts.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniform deviate in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// A normal deviate with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }
}
