use polyvoid::{
    BoundingBox, Domain, Point, VoidField, VoidFieldConfig, VoidFieldError,
};

fn norm(d: [f64; 3]) -> f64 {
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

#[test]
fn test_corner_lands_on_planar_circumcenter() {
    // Three non-collinear grains have exactly one triple junction: the
    // circumcenter of the triangle.
    let config = VoidFieldConfig {
        num_corner_voids: 1,
        corner_radius: 1.0,
        corner_spacing: 0.5,
        ..Default::default()
    };
    let centers = vec![[2.0, 2.0, 0.0], [8.0, 2.0, 0.0], [5.0, 8.0, 0.0]];
    let domain = Domain::planar([0.0, 0.0], [10.0, 10.0], [false, false]);

    let mut field = VoidField::new(config, centers, domain).unwrap();
    field.initialize().unwrap();

    let c = field.corner_centers()[0];
    assert!((c[0] - 5.0).abs() < 1e-9);
    assert!((c[1] - 4.25).abs() < 1e-9);
    assert_eq!(c[2], 0.0);
}

#[test]
fn test_columnar_corner_uses_xy_circumcenter() {
    let config = VoidFieldConfig {
        num_corner_voids: 1,
        corner_radius: 1.0,
        corner_spacing: 0.5,
        columnar_grains: true,
        ..Default::default()
    };
    // Columnar grains share the mid-plane z.
    let centers = vec![[2.0, 2.0, 5.0], [8.0, 2.0, 5.0], [5.0, 8.0, 5.0]];
    let domain = Domain::new(
        BoundingBox::new([0.0; 3], [10.0; 3]),
        [false, false, false],
        3,
    );

    let mut field = VoidField::new(config, centers, domain).unwrap();
    field.initialize().unwrap();

    let c = field.corner_centers()[0];
    assert!((c[0] - 5.0).abs() < 1e-9);
    assert!((c[1] - 4.25).abs() < 1e-9);
    assert!((0.0..=10.0).contains(&c[2]));
}

#[test]
fn test_3d_corner_sits_on_triple_line() {
    let config = VoidFieldConfig {
        num_corner_voids: 1,
        corner_radius: 1.0,
        corner_spacing: 0.5,
        max_tries: 5000,
        ..Default::default()
    };
    let centers = vec![
        [2.0, 2.0, 2.0],
        [8.0, 2.0, 2.0],
        [5.0, 8.0, 2.0],
        [5.0, 4.0, 8.0],
    ];
    let domain = Domain::new(
        BoundingBox::new([0.0; 3], [10.0; 3]),
        [false, false, false],
        3,
    );

    let mut field = VoidField::new(config.clone(), centers.clone(), domain).unwrap();
    field.initialize().unwrap();

    let c = field.corner_centers()[0];
    assert!(domain.bounds.contains(&c));

    // The accepted point is equidistant (within tolerance) to its three
    // nearest grain centers.
    let mut dists: Vec<f64> = centers
        .iter()
        .map(|g| norm([c[0] - g[0], c[1] - g[1], c[2] - g[2]]))
        .collect();
    dists.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let tol = config.equidistance_tol_factor * config.corner_radius;
    assert!(dists[1] - dists[0] <= tol);
    assert!(dists[2] - dists[1] <= tol);
}

fn periodic_setup() -> (VoidFieldConfig, Vec<Point>, Domain) {
    let config = VoidFieldConfig {
        num_corner_voids: 2,
        corner_radius: 1.0,
        corner_spacing: 1.0,
        num_face_voids: 3,
        face_radius: 1.0,
        face_spacing: 1.0,
        int_width: 0.4,
        max_tries: 5000,
        ..Default::default()
    };
    let centers = vec![
        [3.0, 4.0, 0.0],
        [13.0, 5.0, 0.0],
        [7.0, 12.0, 0.0],
        [17.0, 15.0, 0.0],
        [5.0, 17.0, 0.0],
    ];
    let domain = Domain::planar([0.0, 0.0], [20.0, 20.0], [true, true]);
    (config, centers, domain)
}

#[test]
fn test_periodic_placement_invariants() {
    let (config, centers, domain) = periodic_setup();
    let mut field = VoidField::new(config.clone(), centers, domain).unwrap();
    field.initialize().unwrap();

    for c in field.corner_centers().iter().chain(field.face_centers()) {
        assert!(domain.bounds.contains(c), "center out of domain: {c:?}");
    }

    let corners = field.corner_centers();
    for i in 0..corners.len() {
        for j in 0..i {
            assert!(domain.distance(&corners[i], &corners[j]) >= config.corner_spacing);
        }
    }

    let faces = field.face_centers();
    for i in 0..faces.len() {
        for j in 0..i {
            assert!(domain.distance(&faces[i], &faces[j]) >= config.face_spacing);
        }
    }

    let cross = 0.5 * (config.corner_spacing + config.face_spacing);
    for f in faces {
        for c in corners {
            assert!(domain.distance(f, c) >= cross);
        }
    }

    for r in field.corner_radii().iter().chain(field.face_radii()) {
        assert!(*r >= 0.0);
    }
}

#[test]
fn test_identical_seeds_give_identical_layouts() {
    let (config, centers, domain) = periodic_setup();
    let mut a = VoidField::new(config.clone(), centers.clone(), domain).unwrap();
    let mut b = VoidField::new(config, centers, domain).unwrap();
    a.initialize().unwrap();
    b.initialize().unwrap();

    assert_eq!(a.corner_centers(), b.corner_centers());
    assert_eq!(a.face_centers(), b.face_centers());
    assert_eq!(a.corner_radii(), b.corner_radii());
    assert_eq!(a.face_radii(), b.face_radii());

    for p in [[0.1, 0.2, 0.0], [10.0, 10.0, 0.0], [19.5, 3.3, 0.0]] {
        assert_eq!(a.value(&p).to_bits(), b.value(&p).to_bits());
        let (ga, gb) = (a.gradient(&p), b.gradient(&p));
        for i in 0..3 {
            assert_eq!(ga[i].to_bits(), gb[i].to_bits());
        }
    }
}

#[test]
fn test_different_seeds_differ() {
    let (config, centers, domain) = periodic_setup();
    let other = VoidFieldConfig {
        rand_seed: 99999,
        ..config.clone()
    };
    let mut a = VoidField::new(config, centers.clone(), domain).unwrap();
    let mut b = VoidField::new(other, centers, domain).unwrap();
    a.initialize().unwrap();
    b.initialize().unwrap();
    assert_ne!(a.face_centers(), b.face_centers());
}

#[test]
fn test_single_grain_face_placement_is_infeasible() {
    let config = VoidFieldConfig {
        num_face_voids: 1,
        face_radius: 1.0,
        face_spacing: 0.5,
        max_tries: 100,
        ..Default::default()
    };
    let centers = vec![[5.0, 5.0, 0.0]];
    let domain = Domain::planar([0.0, 0.0], [10.0, 10.0], [false, false]);

    let mut field = VoidField::new(config, centers, domain).unwrap();
    let err = field.initialize().unwrap_err();
    assert!(matches!(
        err,
        VoidFieldError::GeometrySaturated {
            population: "face",
            slot: 0,
            max_tries: 100,
        }
    ));
}

#[test]
fn test_zero_void_counts_initialize_cleanly() {
    let config = VoidFieldConfig::default();
    let centers = vec![[5.0, 5.0, 0.0]];
    let domain = Domain::planar([0.0, 0.0], [10.0, 10.0], [false, false]);

    let mut field = VoidField::new(config.clone(), centers, domain).unwrap();
    field.initialize().unwrap();
    assert!(field.corner_centers().is_empty());
    assert!(field.face_centers().is_empty());
    assert_eq!(field.value(&[3.0, 3.0, 0.0]), config.outvalue);
}
