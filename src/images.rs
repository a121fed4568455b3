use crate::bounds::Domain;
use crate::geometry::Point;

/// Grain centers replicated into the neighboring periodic copies of the
/// domain.
///
/// With full periodicity this holds 9 (planar or columnar) or 27 (3D)
/// translated copies of the input set, offset by -1/0/+1 domain widths along
/// each replicated axis. Without periodicity it is the input set itself,
/// exactly one copy. Built once during initialization, immutable afterwards.
#[derive(Clone, Debug)]
pub struct PeriodicImages {
    points: Vec<Point>,
    copies: usize,
}

/// Per-axis lattice offsets, identity first.
const SHIFTS: [f64; 3] = [0.0, 1.0, -1.0];

impl PeriodicImages {
    /// Expands `centers` according to the domain's periodicity.
    ///
    /// `columnar` keeps the last axis un-replicated; `force_off` disables
    /// replication regardless of the domain flags (the host's
    /// `periodic_graincenters = false` override).
    pub fn expand(centers: &[Point], domain: &Domain, columnar: bool, force_off: bool) -> Self {
        let replicate = !force_off && domain.fully_periodic(columnar);
        if !replicate {
            return Self {
                points: centers.to_vec(),
                copies: 1,
            };
        }

        let span = domain.bounds.span();
        let planar = domain.dim == 2 || columnar;
        let copies = if planar { 9 } else { 27 };

        let mut points = Vec::with_capacity(copies * centers.len());
        for &sx in &SHIFTS {
            for &sy in &SHIFTS {
                if planar {
                    for c in centers {
                        points.push([c[0] + sx * span[0], c[1] + sy * span[1], c[2]]);
                    }
                } else {
                    for &sz in &SHIFTS {
                        for c in centers {
                            points.push([
                                c[0] + sx * span[0],
                                c[1] + sy * span[1],
                                c[2] + sz * span[2],
                            ]);
                        }
                    }
                }
            }
        }

        Self { points, copies }
    }

    /// All replicated centers, identity copy first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of translated copies of the input set (1, 9 or 27).
    pub fn copies(&self) -> usize {
        self.copies
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
