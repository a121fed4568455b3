//! # polyvoid
//!
//! `polyvoid` computes smoothed indicator fields of void inclusions placed
//! along the grain boundaries and triple junctions of a Voronoi-tessellated
//! polycrystalline microstructure. Given the grain-center points, a domain
//! bounding box and per-axis periodicity, it locates geometrically valid
//! void positions by rejection sampling and evaluates the resulting field
//! (value and gradient) at arbitrary query points.
//!
//! ## Features
//!
//! - **Periodic images**: grain centers are replicated into a 9- or 27-copy
//!   stencil so wrap-around geometry stays local.
//! - **Two void populations**: triple-junction (corner) voids via
//!   circumcenter construction, grain-boundary (face) voids via bisecting
//!   facet projection, each with configurable counts, radii and spacings.
//! - **Smooth interfaces**: cosine or tanh profiles with analytic gradients.
//! - **Reproducible**: one seeded random stream per field; identical
//!   configuration gives bit-identical layouts.
//!
//! ## Example
//!
//! ```
//! use polyvoid::{BoundingBox, Domain, VoidField, VoidFieldConfig};
//!
//! let config = VoidFieldConfig {
//!     invalue: 1.0,
//!     outvalue: 0.0,
//!     int_width: 0.2,
//!     num_face_voids: 1,
//!     face_radius: 1.0,
//!     face_spacing: 0.5,
//!     ..Default::default()
//! };
//! let grain_centers = vec![[2.5, 5.0, 5.0], [7.5, 5.0, 5.0]];
//! let domain = Domain::new(
//!     BoundingBox::new([0.0; 3], [10.0; 3]),
//!     [false, false, false],
//!     3,
//! );
//!
//! let mut field = VoidField::new(config, grain_centers, domain).unwrap();
//! field.initialize().unwrap();
//! let v = field.value(&[5.0, 5.0, 5.0]);
//! assert!((0.0..=1.0).contains(&v));
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`VoidField`] struct with its two-phase
//! lifecycle: construct, initialize once, then evaluate freely.

mod bounds;
mod config;
mod error;
pub mod geometry;
mod field;
mod images;
mod locate;
mod profile;
mod radii;
mod random;

pub use bounds::BoundingBox;
pub use bounds::Domain;
pub use config::EQUIDISTANCE_TOL_FACTOR;
pub use config::PeriodicMode;
pub use config::VoidFieldConfig;
pub use error::VoidFieldError;
pub use field::VoidField;
pub use geometry::Point;
pub use images::PeriodicImages;
pub use profile::Profile;
pub use radii::RadiusVariation;
pub use random::RandomSource;
