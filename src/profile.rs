use std::f64::consts::PI;

/// The smooth function blending the inside and outside field values across
/// an inclusion's boundary band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Inside value within `radius - width/2`, outside beyond
    /// `radius + width/2`, cosine interpolation in between. A zero width
    /// degenerates to a sharp interface.
    Cosine,
    /// Hyperbolic tangent centered on the radius. Requires a strictly
    /// positive width.
    Tanh,
}

impl Profile {
    /// Field value at distance `dist` from an inclusion center.
    pub fn value(
        self,
        dist: f64,
        radius: f64,
        width: f64,
        invalue: f64,
        outvalue: f64,
    ) -> f64 {
        match self {
            Profile::Cosine => {
                if dist <= radius - width / 2.0 {
                    invalue
                } else if dist < radius + width / 2.0 {
                    let t = (dist - radius + width / 2.0) / width;
                    outvalue + (invalue - outvalue) * (1.0 + (t * PI).cos()) / 2.0
                } else {
                    outvalue
                }
            }
            Profile::Tanh => {
                (invalue - outvalue) * 0.5 * ((2.0 * (radius - dist) / width).tanh() + 1.0)
                    + outvalue
            }
        }
    }

    /// Derivative of [`Profile::value`] with respect to `dist`.
    pub fn radial_derivative(
        self,
        dist: f64,
        radius: f64,
        width: f64,
        invalue: f64,
        outvalue: f64,
    ) -> f64 {
        match self {
            Profile::Cosine => {
                if dist < radius + width / 2.0 && dist > radius - width / 2.0 {
                    let t = (dist - radius + width / 2.0) / width;
                    (invalue - outvalue) * (-(t * PI).sin() * PI) / (2.0 * width)
                } else {
                    0.0
                }
            }
            Profile::Tanh => {
                let th = (4.0 * (radius - dist) / width).tanh();
                -(invalue - outvalue) * 0.5 / width * PI * (1.0 - th * th)
            }
        }
    }
}
