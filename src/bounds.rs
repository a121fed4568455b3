use crate::geometry::Point;

/// Axis-aligned bounding box of the simulation domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Extent of the box along each axis.
    pub fn span(&self) -> Point {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Length of the box diagonal. Used as an upper bound for any
    /// in-domain distance.
    pub fn diagonal(&self) -> f64 {
        let s = self.span();
        (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]).sqrt()
    }

    /// Checks whether a point lies inside the box (boundary inclusive).
    pub fn contains(&self, p: &Point) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

/// The simulation domain: a bounding box, per-axis periodicity flags and the
/// spatial dimension (2 or 3).
///
/// The host decides periodicity per (order parameter, axis); a `Domain` is
/// built with the per-axis AND of those flags. All wrap-around aware
/// geometry goes through [`Domain::distance`] and [`Domain::displacement`];
/// nothing else in the crate recomputes minimum images.
#[derive(Clone, Copy, Debug)]
pub struct Domain {
    pub bounds: BoundingBox,
    pub periodic: [bool; 3],
    pub dim: usize,
}

impl Domain {
    pub fn new(bounds: BoundingBox, periodic: [bool; 3], dim: usize) -> Self {
        Self {
            bounds,
            periodic,
            dim,
        }
    }

    /// A planar domain; the z extent collapses to zero and z never wraps.
    pub fn planar(min: [f64; 2], max: [f64; 2], periodic: [bool; 2]) -> Self {
        Self {
            bounds: BoundingBox::new([min[0], min[1], 0.0], [max[0], max[1], 0.0]),
            periodic: [periodic[0], periodic[1], false],
            dim: 2,
        }
    }

    /// True when every axis relevant for image replication wraps.
    /// Columnar grains leave the last axis out of the check.
    pub fn fully_periodic(&self, columnar: bool) -> bool {
        let axes = if columnar { self.dim - 1 } else { self.dim };
        self.periodic[..axes].iter().all(|&p| p)
    }

    /// Minimum-image displacement from `from` to `to`.
    ///
    /// On periodic axes the raw difference is wrapped into
    /// `[-span/2, span/2]`; on non-periodic axes it is returned unchanged.
    pub fn displacement(&self, from: &Point, to: &Point) -> Point {
        let span = self.bounds.span();
        let mut d = [0.0; 3];
        for i in 0..3 {
            let mut di = to[i] - from[i];
            if self.periodic[i] && span[i] > 0.0 {
                if di > 0.5 * span[i] {
                    di -= span[i];
                } else if di < -0.5 * span[i] {
                    di += span[i];
                }
            }
            d[i] = di;
        }
        d
    }

    /// Minimum-image distance between two points.
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        let d = self.displacement(a, b);
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
    }
}
