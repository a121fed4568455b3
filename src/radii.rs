use crate::random::RandomSource;

/// Distribution the per-void radii are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadiusVariation {
    /// `radius * (1 + (1 - 2u) * variation)` with `u ~ Uniform(0,1)`.
    Uniform,
    /// Normal with mean `radius` and standard deviation `variation`.
    Normal,
    /// Constant nominal radius.
    None,
}

/// Draws one radius per population slot, left to right, floored at zero.
///
/// No spatial correlation: radii are drawn before any center is placed.
pub fn sample_radii(
    count: usize,
    radius: f64,
    variation: f64,
    kind: RadiusVariation,
    random: &mut RandomSource,
) -> Vec<f64> {
    let mut radii = Vec::with_capacity(count);
    for _ in 0..count {
        let r = match kind {
            RadiusVariation::Uniform => {
                radius * (1.0 + (1.0 - 2.0 * random.uniform()) * variation)
            }
            RadiusVariation::Normal => random.normal(radius, variation),
            RadiusVariation::None => radius,
        };
        radii.push(r.max(0.0));
    }
    radii
}
