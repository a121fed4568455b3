use crate::profile::Profile;
use crate::radii::RadiusVariation;

/// Default equidistance tolerance, as a fraction of the nominal radius.
///
/// A candidate counts as a triple junction (or facet point) when its
/// nearest-center distances agree within `factor * nominal radius`. The 0.1
/// factor is a placement heuristic with no derivation; it is exposed here so
/// callers can tighten or relax it.
pub const EQUIDISTANCE_TOL_FACTOR: f64 = 0.1;

/// How the periodic-image expansion is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodicMode {
    /// Replicate when the domain is periodic on every relevant axis.
    Auto,
    /// Never replicate, even for a fully periodic domain.
    ForcedOff,
}

/// Configuration surface of the void field.
///
/// The defaults mirror the host application's parameter table: sharp cosine
/// interface, spheres, seed 12345, 1000 placement tries, no radius
/// variation.
#[derive(Clone, Debug)]
pub struct VoidFieldConfig {
    /// Field value inside a void.
    pub invalue: f64,
    /// Field value in the surrounding material.
    pub outvalue: f64,
    /// Width of the interface band. Zero means a sharp interface (cosine
    /// profile only).
    pub int_width: f64,
    /// In 3D, whether voids are spheres; `false` makes them columnar
    /// cylinders (the out-of-plane coordinate is ignored at evaluation).
    pub spheres_3d: bool,
    /// In 3D, whether the grains themselves are columnar.
    pub columnar_grains: bool,
    /// Skip all gradient computation and return the zero vector.
    pub zero_gradient: bool,
    /// Seed for the placement random stream.
    pub rand_seed: u64,
    /// Interface profile shape.
    pub profile: Profile,

    /// Number of grain-boundary (face) voids.
    pub num_face_voids: usize,
    /// Minimum center-to-center spacing between face voids.
    pub face_spacing: f64,
    /// Number of triple-junction (corner) voids.
    pub num_corner_voids: usize,
    /// Minimum center-to-center spacing between corner voids.
    pub corner_spacing: f64,
    /// Retry ceiling per slot before placement is declared infeasible.
    pub max_tries: usize,

    /// Nominal face void radius.
    pub face_radius: f64,
    /// Variation magnitude for face radii (fraction for uniform, standard
    /// deviation for normal).
    pub face_radius_variation: f64,
    pub face_radius_variation_type: RadiusVariation,
    /// Nominal corner void radius.
    pub corner_radius: f64,
    /// Variation magnitude for corner radii.
    pub corner_radius_variation: f64,
    pub corner_radius_variation_type: RadiusVariation,

    /// Number of order parameters in the host problem. The host ANDs its
    /// per-(order parameter, axis) periodicity over this many populations
    /// when building the [`crate::Domain`].
    pub op_num: usize,
    /// Periodic-image override.
    pub periodic_mode: PeriodicMode,
    /// Equidistance tolerance as a fraction of the nominal radius.
    pub equidistance_tol_factor: f64,
}

impl Default for VoidFieldConfig {
    fn default() -> Self {
        Self {
            invalue: 1.0,
            outvalue: 0.0,
            int_width: 0.0,
            spheres_3d: true,
            columnar_grains: false,
            zero_gradient: false,
            rand_seed: 12345,
            profile: Profile::Cosine,
            num_face_voids: 0,
            face_spacing: 0.0,
            num_corner_voids: 0,
            corner_spacing: 0.0,
            max_tries: 1000,
            face_radius: 0.0,
            face_radius_variation: 0.0,
            face_radius_variation_type: RadiusVariation::None,
            corner_radius: 0.0,
            corner_radius_variation: 0.0,
            corner_radius_variation_type: RadiusVariation::None,
            op_num: 1,
            periodic_mode: PeriodicMode::Auto,
            equidistance_tol_factor: EQUIDISTANCE_TOL_FACTOR,
        }
    }
}
