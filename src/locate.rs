//! Rejection sampling of void centers on the Voronoi skeleton.
//!
//! Corners (triple junctions) and faces (grain-boundary facets) share one
//! placement loop: draw a uniform point, rank the periodic-image grain
//! centers around it, run a geometric construction, then a chain of
//! validity checks. The two populations differ only in their construction
//! and checks, expressed through [`SiteGeometry`].

use crate::bounds::Domain;
use crate::error::VoidFieldError;
use crate::geometry::{self, Point};
use crate::images::PeriodicImages;
use crate::random::RandomSource;

/// Transient (distance, grain index) pair used to rank centers around a
/// candidate point.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DistanceRank {
    pub dist: f64,
    pub index: usize,
}

/// Running top-k selection of the nearest points, ordered by (distance,
/// index). k is at most 4 here, so insertion into a fixed-capacity buffer
/// beats a full sort over the replicated center set.
pub(crate) fn nearest_k(p: &Point, points: &[Point], k: usize) -> Vec<DistanceRank> {
    let mut best: Vec<DistanceRank> = Vec::with_capacity(k + 1);
    for (index, q) in points.iter().enumerate() {
        let dist = geometry::norm(&geometry::sub(p, q));
        if best.len() == k && dist >= best[k - 1].dist {
            continue;
        }
        let pos = best
            .iter()
            .position(|r| (dist, index) < (r.dist, r.index))
            .unwrap_or(best.len());
        best.insert(pos, DistanceRank { dist, index });
        best.truncate(k);
    }
    best
}

/// Geometric construction and validity checks for one void population.
pub(crate) trait SiteGeometry {
    /// Population name used in error and log messages.
    const POPULATION: &'static str;

    /// Builds a candidate center from a random point, or `None` when the
    /// local grain configuration is degenerate (triggers a retry).
    fn construct(&self, rand_point: &Point, images: &[Point], domain: &Domain) -> Option<Point>;

    /// Confirms the candidate sits on the intended Voronoi feature.
    fn on_feature(&self, candidate: &Point, images: &[Point], domain: &Domain) -> bool;

    /// Minimum-spacing checks against already accepted centers.
    fn clear_of_accepted(&self, candidate: &Point, accepted: &[Point], domain: &Domain) -> bool;
}

/// Fills `count` slots in index order. Later slots only check spacing
/// against earlier ones; a slot never changes once accepted. Exceeding
/// `max_tries` for any single slot is fatal.
pub(crate) fn place_sites<G: SiteGeometry>(
    geometry: &G,
    count: usize,
    max_tries: usize,
    domain: &Domain,
    images: &PeriodicImages,
    random: &mut RandomSource,
) -> Result<Vec<Point>, VoidFieldError> {
    let span = domain.bounds.span();
    let mut accepted: Vec<Point> = Vec::with_capacity(count);

    for slot in 0..count {
        let mut tries = 0;
        loop {
            tries += 1;
            if tries > max_tries {
                return Err(VoidFieldError::GeometrySaturated {
                    population: G::POPULATION,
                    slot,
                    max_tries,
                });
            }

            let mut rand_point = [0.0; 3];
            for i in 0..3 {
                rand_point[i] = domain.bounds.min[i] + span[i] * random.uniform();
            }

            let Some(candidate) = geometry.construct(&rand_point, images.points(), domain)
            else {
                continue;
            };
            if !domain.bounds.contains(&candidate) {
                continue;
            }
            if !geometry.on_feature(&candidate, images.points(), domain) {
                continue;
            }
            if !geometry.clear_of_accepted(&candidate, &accepted, domain) {
                continue;
            }

            log::debug!(
                "accepted {} void {} after {} tries",
                G::POPULATION,
                slot,
                tries
            );
            accepted.push(candidate);
            break;
        }
    }

    Ok(accepted)
}

/// Triple-junction (corner) placement.
pub(crate) struct CornerGeometry {
    /// Treat the problem as planar: 2D domain or columnar grains.
    pub columnar: bool,
    /// Absolute equidistance tolerance (`factor * nominal corner radius`).
    pub tol: f64,
    /// Minimum corner-to-corner spacing.
    pub spacing: f64,
}

impl SiteGeometry for CornerGeometry {
    const POPULATION: &'static str = "corner";

    fn construct(&self, rand_point: &Point, images: &[Point], domain: &Domain) -> Option<Point> {
        let planar = domain.dim == 2 || self.columnar;

        if planar {
            if images.len() < 3 {
                return None;
            }
            let ranked = nearest_k(rand_point, images, 3);
            let a = &images[ranked[0].index];
            let b = &images[ranked[1].index];
            let c = &images[ranked[2].index];

            // Collinear centers have no circumcenter.
            if geometry::signed_area_2d(a, b, c).abs() < 1e-10 {
                return None;
            }
            let mut corner = geometry::circumcenter_2d(a, b, c);
            if self.columnar {
                corner[2] = rand_point[2];
            }
            Some(corner)
        } else {
            if images.len() < 4 {
                return None;
            }
            let ranked = nearest_k(rand_point, images, 4);
            let a = &images[ranked[0].index];
            let b = &images[ranked[1].index];
            let c = &images[ranked[2].index];
            let d = &images[ranked[3].index];

            let vertex = geometry::circumcenter_3d(a, b, c, d)?;

            // The triple-junction ridge through the vertex runs along the
            // cross product of two edge directions at the nearest center;
            // project the random point onto that line.
            let u_ab = geometry::unit(&geometry::sub(b, a))?;
            let u_ac = geometry::unit(&geometry::sub(c, a))?;
            let ridge = geometry::unit(&geometry::cross(&u_ac, &u_ab))?;

            let to_rand = geometry::sub(rand_point, &vertex);
            let lambda = geometry::dot(&to_rand, &ridge);
            Some(geometry::add(&vertex, &geometry::scale(&ridge, lambda)))
        }
    }

    fn on_feature(&self, candidate: &Point, images: &[Point], _domain: &Domain) -> bool {
        if images.len() < 3 {
            return false;
        }
        // A genuine triple junction is equidistant to its three nearest
        // grain centers.
        let ranked = nearest_k(candidate, images, 3);
        let (d1, d2, d3) = (ranked[0].dist, ranked[1].dist, ranked[2].dist);
        (d1 - d2).abs() <= self.tol && (d2 - d3).abs() <= self.tol && (d1 - d3).abs() <= self.tol
    }

    fn clear_of_accepted(&self, candidate: &Point, accepted: &[Point], domain: &Domain) -> bool {
        accepted
            .iter()
            .all(|prev| domain.distance(candidate, prev) >= self.spacing)
    }
}

/// Grain-boundary (face) placement. Depends on the corners already being
/// placed: candidates too close to any accepted corner are rejected.
pub(crate) struct FaceGeometry<'a> {
    /// Absolute equidistance tolerance (`factor * nominal face radius`).
    pub tol: f64,
    /// Minimum face-to-face spacing.
    pub spacing: f64,
    /// Corner spacing, for the averaged cross check.
    pub corner_spacing: f64,
    /// All accepted corner centers.
    pub corners: &'a [Point],
}

impl SiteGeometry for FaceGeometry<'_> {
    const POPULATION: &'static str = "face";

    fn construct(&self, rand_point: &Point, images: &[Point], domain: &Domain) -> Option<Point> {
        if images.len() < 2 {
            return None;
        }
        let ranked = nearest_k(rand_point, images, 2);

        // Wrap both centers to their images nearest the random point.
        let pa = geometry::add(
            rand_point,
            &domain.displacement(rand_point, &images[ranked[0].index]),
        );
        let pb = geometry::add(
            rand_point,
            &domain.displacement(rand_point, &images[ranked[1].index]),
        );
        let pair = geometry::sub(&pb, &pa);

        // In-plane projection direction on the bisecting facet.
        let to_rand = geometry::sub(rand_point, &pa);
        let normal = geometry::cross(&pair, &to_rand);
        let slope = geometry::cross(&normal, &pair);

        let slope_dot = geometry::dot(&slope, &slope);
        debug_assert!(slope_dot > 0.0, "degenerate nearest pair");

        let midpoint = geometry::add(&pa, &geometry::scale(&pair, 0.5));
        let mid_rand = domain.displacement(&midpoint, rand_point);
        let lambda = geometry::dot(&mid_rand, &slope) / slope_dot;

        Some(geometry::add(&midpoint, &geometry::scale(&slope, lambda)))
    }

    fn on_feature(&self, candidate: &Point, images: &[Point], _domain: &Domain) -> bool {
        if images.len() < 2 {
            return false;
        }
        let ranked = nearest_k(candidate, images, 3);
        let (d1, d2) = (ranked[0].dist, ranked[1].dist);

        // On a bisecting facet the two nearest centers are equidistant.
        if (d1 - d2).abs() > self.tol {
            return false;
        }

        // But not equidistant to a third: that is a triple junction and
        // belongs to the corner population.
        if ranked.len() >= 3 {
            let d3 = ranked[2].dist;
            if (d1 - d2).abs() < self.tol
                && (d2 - d3).abs() < self.tol
                && (d1 - d3).abs() < self.tol
            {
                return false;
            }
        }
        true
    }

    fn clear_of_accepted(&self, candidate: &Point, accepted: &[Point], domain: &Domain) -> bool {
        if accepted
            .iter()
            .any(|prev| domain.distance(candidate, prev) < self.spacing)
        {
            return false;
        }
        let cross_spacing = 0.5 * (self.corner_spacing + self.spacing);
        self.corners
            .iter()
            .all(|corner| domain.distance(candidate, corner) >= cross_spacing)
    }
}
