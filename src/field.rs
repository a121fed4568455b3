use rayon::prelude::*;

use crate::bounds::Domain;
use crate::config::{PeriodicMode, VoidFieldConfig};
use crate::error::VoidFieldError;
use crate::geometry::Point;
use crate::images::PeriodicImages;
use crate::locate::{self, CornerGeometry, FaceGeometry};
use crate::profile::Profile;
use crate::radii;
use crate::random::RandomSource;

/// A smoothed indicator field of void inclusions placed on the boundaries
/// and triple junctions of a Voronoi-tessellated polycrystal.
///
/// Two-phase lifecycle: [`VoidField::new`] validates the configuration,
/// [`VoidField::initialize`] runs image expansion, radius sampling and the
/// corner/face placement exactly once. Afterwards [`VoidField::value`] and
/// [`VoidField::gradient`] are pure per-query evaluations and may run
/// concurrently from multiple threads.
#[derive(Debug)]
pub struct VoidField {
    config: VoidFieldConfig,
    domain: Domain,
    grain_centers: Vec<Point>,
    corner_centers: Vec<Point>,
    corner_radii: Vec<f64>,
    face_centers: Vec<Point>,
    face_radii: Vec<f64>,
    initialized: bool,
}

impl VoidField {
    /// Validates the configuration and stores the grain structure.
    ///
    /// Placement does not happen here; call [`VoidField::initialize`] next.
    pub fn new(
        config: VoidFieldConfig,
        grain_centers: Vec<Point>,
        domain: Domain,
    ) -> Result<Self, VoidFieldError> {
        if config.profile == Profile::Tanh && config.int_width <= 0.0 {
            return Err(VoidFieldError::NonPositiveTanhWidth);
        }
        if config.invalue < config.outvalue {
            log::warn!(
                "invalue < outvalue; unusual for a void field, check the intended usage"
            );
        }

        Ok(Self {
            config,
            domain,
            grain_centers,
            corner_centers: Vec::new(),
            corner_radii: Vec::new(),
            face_centers: Vec::new(),
            face_radii: Vec::new(),
            initialized: false,
        })
    }

    /// Expands the periodic images, draws the radii and places the corner
    /// then face voids. Must run exactly once before any evaluation.
    ///
    /// All randomness comes from one sequential stream seeded with
    /// `rand_seed`; identical configuration gives bit-identical layouts.
    pub fn initialize(&mut self) -> Result<(), VoidFieldError> {
        if self.initialized {
            return Err(VoidFieldError::AlreadyInitialized);
        }
        let cfg = &self.config;
        let mut random = RandomSource::from_seed(cfg.rand_seed);

        self.corner_radii = radii::sample_radii(
            cfg.num_corner_voids,
            cfg.corner_radius,
            cfg.corner_radius_variation,
            cfg.corner_radius_variation_type,
            &mut random,
        );
        self.face_radii = radii::sample_radii(
            cfg.num_face_voids,
            cfg.face_radius,
            cfg.face_radius_variation,
            cfg.face_radius_variation_type,
            &mut random,
        );

        let images = PeriodicImages::expand(
            &self.grain_centers,
            &self.domain,
            cfg.columnar_grains,
            cfg.periodic_mode == PeriodicMode::ForcedOff,
        );
        log::debug!(
            "expanded {} grain centers into {} image copies",
            self.grain_centers.len(),
            images.copies()
        );

        let corner = CornerGeometry {
            columnar: cfg.columnar_grains,
            tol: cfg.equidistance_tol_factor * cfg.corner_radius,
            spacing: cfg.corner_spacing,
        };
        self.corner_centers = locate::place_sites(
            &corner,
            cfg.num_corner_voids,
            cfg.max_tries,
            &self.domain,
            &images,
            &mut random,
        )?;

        let face = FaceGeometry {
            tol: cfg.equidistance_tol_factor * cfg.face_radius,
            spacing: cfg.face_spacing,
            corner_spacing: cfg.corner_spacing,
            corners: &self.corner_centers,
        };
        self.face_centers = locate::place_sites(
            &face,
            cfg.num_face_voids,
            cfg.max_tries,
            &self.domain,
            &images,
            &mut random,
        )?;

        self.initialized = true;
        Ok(())
    }

    /// Field value at a query point.
    ///
    /// Scans all face then corner voids and keeps the most inside-like
    /// contribution, stopping early once the exact inside value is reached.
    pub fn value(&self, p: &Point) -> f64 {
        assert!(self.initialized, "initialize() must run before evaluation");
        let cfg = &self.config;
        let mut best = cfg.outvalue;

        let populations = [
            (&self.face_centers, &self.face_radii),
            (&self.corner_centers, &self.corner_radii),
        ];
        'scan: for (centers, radii) in populations {
            for (center, &radius) in centers.iter().zip(radii.iter()) {
                if best == cfg.invalue {
                    break 'scan;
                }
                let val = self.circle_value(p, center, radius);
                if Self::more_inside(val, best, cfg.invalue, cfg.outvalue) {
                    best = val;
                }
            }
        }
        best
    }

    /// Analytic gradient of [`VoidField::value`] at a query point.
    ///
    /// Tracks the gradient of the selected (most inside-like) void. Returns
    /// the zero vector when the `zero_gradient` flag is set or the point
    /// coincides with a void center.
    pub fn gradient(&self, p: &Point) -> Point {
        assert!(self.initialized, "initialize() must run before evaluation");
        let cfg = &self.config;
        if cfg.zero_gradient {
            return [0.0; 3];
        }

        let mut best = cfg.outvalue;
        let mut grad = [0.0; 3];

        let populations = [
            (&self.face_centers, &self.face_radii),
            (&self.corner_centers, &self.corner_radii),
        ];
        for (centers, radii) in populations {
            for (center, &radius) in centers.iter().zip(radii.iter()) {
                let val = self.circle_value(p, center, radius);
                if Self::more_inside(val, best, cfg.invalue, cfg.outvalue) {
                    best = val;
                    grad = self.circle_gradient(p, center, radius);
                }
            }
        }
        grad
    }

    /// Evaluates a slice of query points in parallel. Evaluation is
    /// read-only, so the parallelism does not affect reproducibility.
    pub fn values(&self, points: &[Point]) -> Vec<f64> {
        points.par_iter().map(|p| self.value(p)).collect()
    }

    /// Parallel counterpart of [`VoidField::gradient`] over a point slice.
    pub fn gradients(&self, points: &[Point]) -> Vec<Point> {
        points.par_iter().map(|p| self.gradient(p)).collect()
    }

    /// True when `val` is further from the outside value than `best`, in
    /// the direction of the inside value.
    fn more_inside(val: f64, best: f64, invalue: f64, outvalue: f64) -> bool {
        (val > best && invalue > outvalue) || (val < best && outvalue > invalue)
    }

    fn circle_value(&self, p: &Point, center: &Point, radius: f64) -> f64 {
        let cfg = &self.config;
        let mut lp = *p;
        let mut lc = *center;
        // Cylinders ignore the out-of-plane coordinate.
        if !cfg.spheres_3d {
            lp[2] = 0.0;
            lc[2] = 0.0;
        }
        let dist = self.domain.distance(&lp, &lc);
        cfg.profile
            .value(dist, radius, cfg.int_width, cfg.invalue, cfg.outvalue)
    }

    fn circle_gradient(&self, p: &Point, center: &Point, radius: f64) -> Point {
        let cfg = &self.config;
        let mut lp = *p;
        let mut lc = *center;
        if !cfg.spheres_3d {
            lp[2] = 0.0;
            lc[2] = 0.0;
        }
        let dist = self.domain.distance(&lp, &lc);

        // Probing the exact center: no direction, no gradient.
        if dist == 0.0 {
            return [0.0; 3];
        }

        let dvalue_dr = cfg.profile.radial_derivative(
            dist,
            radius,
            cfg.int_width,
            cfg.invalue,
            cfg.outvalue,
        );
        let dir = self.domain.displacement(center, p);
        let s = dvalue_dr / dist;
        [dir[0] * s, dir[1] * s, dir[2] * s]
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &VoidFieldConfig {
        &self.config
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn grain_centers(&self) -> &[Point] {
        &self.grain_centers
    }

    /// Accepted triple-junction void centers, in slot order.
    pub fn corner_centers(&self) -> &[Point] {
        &self.corner_centers
    }

    pub fn corner_radii(&self) -> &[f64] {
        &self.corner_radii
    }

    /// Accepted grain-boundary void centers, in slot order.
    pub fn face_centers(&self) -> &[Point] {
        &self.face_centers
    }

    pub fn face_radii(&self) -> &[f64] {
        &self.face_radii
    }
}
