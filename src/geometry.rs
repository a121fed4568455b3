//! Small fixed-dimension vector helpers and circumcenter constructions.
//!
//! Everything works on flat `[f64; 3]` points; planar problems carry a zero
//! (or constant) z coordinate.

/// A 3D point or vector as a flat coordinate array.
pub type Point = [f64; 3];

pub fn sub(a: &Point, b: &Point) -> Point {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn add(a: &Point, b: &Point) -> Point {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn scale(a: &Point, s: f64) -> Point {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub fn dot(a: &Point, b: &Point) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &Point, b: &Point) -> Point {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(a: &Point) -> f64 {
    dot(a, a).sqrt()
}

/// Unit vector along `a`, or `None` for the zero vector.
pub fn unit(a: &Point) -> Option<Point> {
    let n = norm(a);
    if n > 0.0 { Some(scale(a, 1.0 / n)) } else { None }
}

/// Twice the signed area of the triangle `abc` in the xy plane.
/// Zero means the points are collinear.
pub fn signed_area_2d(a: &Point, b: &Point, c: &Point) -> f64 {
    a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1])
}

/// Circumcenter of the triangle `abc` in the xy plane (z is returned as 0).
///
/// The caller must have rejected collinear triples via [`signed_area_2d`];
/// for a degenerate triangle the result is non-finite.
pub fn circumcenter_2d(a: &Point, b: &Point, c: &Point) -> Point {
    let d = 2.0
        * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));
    let a2 = a[0] * a[0] + a[1] * a[1];
    let b2 = b[0] * b[0] + b[1] * b[1];
    let c2 = c[0] * c[0] + c[1] * c[1];
    let ux = (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d;
    let uy = (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d;
    [ux, uy, 0.0]
}

/// Circumcenter of the tetrahedron `abcd`, the point equidistant from all
/// four vertices.
///
/// Solves the 3x3 linear system of bisector planes by Cramer's rule and
/// returns `None` when the four points are degenerate (coplanar or
/// coincident), matching the NaN check the callers would otherwise need.
pub fn circumcenter_3d(a: &Point, b: &Point, c: &Point, d: &Point) -> Option<Point> {
    let ab = sub(b, a);
    let ac = sub(c, a);
    let ad = sub(d, a);

    let det = ab[0] * (ac[1] * ad[2] - ac[2] * ad[1])
        - ab[1] * (ac[0] * ad[2] - ac[2] * ad[0])
        + ab[2] * (ac[0] * ad[1] - ac[1] * ad[0]);
    if det.abs() < 1e-12 || !det.is_finite() {
        return None;
    }

    let rb = 0.5 * dot(&ab, &ab);
    let rc = 0.5 * dot(&ac, &ac);
    let rd = 0.5 * dot(&ad, &ad);

    let dx = rb * (ac[1] * ad[2] - ac[2] * ad[1])
        - ab[1] * (rc * ad[2] - ac[2] * rd)
        + ab[2] * (rc * ad[1] - ac[1] * rd);
    let dy = ab[0] * (rc * ad[2] - ac[2] * rd)
        - rb * (ac[0] * ad[2] - ac[2] * ad[0])
        + ab[2] * (ac[0] * rd - rc * ad[0]);
    let dz = ab[0] * (ac[1] * rd - rc * ad[1])
        - ab[1] * (ac[0] * rd - rc * ad[0])
        + rb * (ac[0] * ad[1] - ac[1] * ad[0]);

    let center = [a[0] + dx / det, a[1] + dy / det, a[2] + dz / det];
    if center.iter().all(|v| v.is_finite()) {
        Some(center)
    } else {
        None
    }
}
