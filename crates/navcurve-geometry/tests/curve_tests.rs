use approx::assert_relative_eq;
use navcurve_geometry::{chord_length, discretize, estimate_length, smooth_curve, Curve, SmoothCurve, Waypoint};
use navcurve_math::{decompose_forward, DQuat, DVec3, Orientation, Point3};
use std::f64::consts::FRAC_PI_2;

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[test]
fn test_orientation_seeds_tangent_heading() {
    // Rotating -90 degrees about X swings the +Y reference onto -Z (yaw 0).
    let north = DQuat::from_rotation_x(-FRAC_PI_2);
    let angles = decompose_forward(north.forward());
    assert!(angles.yaw.abs() < 1e-9 || (angles.yaw - 360.0).abs() < 1e-9);
    assert!(angles.pitch.abs() < 1e-9);

    let w2 = dvec3(0.0, 0.0, -20.0);
    let points = discretize(Point3::ZERO, &north, w2, &north, 8).unwrap();
    let first_step = points[1] - points[0];
    assert!(first_step.z < 0.0);
    assert!(first_step.x.abs() < 1e-9);
}

#[test]
fn test_discretized_polyline_approaches_curve_length() {
    let east = DQuat::from_rotation_z(-FRAC_PI_2);
    let north = DQuat::from_rotation_x(-FRAC_PI_2);
    let w1 = dvec3(0.0, 0.0, 0.0);
    let w2 = dvec3(30.0, 0.0, -30.0);

    let coarse = polyline_length(&discretize(w1, &east, w2, &north, 4).unwrap());
    let fine = polyline_length(&discretize(w1, &east, w2, &north, 64).unwrap());
    assert!(coarse <= fine + 1e-9);

    // The fine polyline tracks the estimate of the rescaled curve.
    let seed = SmoothCurve::from_parts(w1, east.forward(), w2, north.forward());
    let length = seed.length(300).unwrap();
    let scaled = seed.scaled(length / 3.0);
    let scaled_length = chord_length(&scaled, 300).unwrap();
    assert_relative_eq!(fine, scaled_length, max_relative = 1e-3);
}

#[test]
fn test_turning_curve_stays_between_its_waypoints() {
    let start = Waypoint::new(dvec3(0.0, 0.0, 0.0), dvec3(5.0, 0.0, 0.0));
    let end = Waypoint::new(dvec3(10.0, 0.0, 10.0), dvec3(0.0, 0.0, 5.0));
    let curve = SmoothCurve::new(start, end);
    for i in 0..=20 {
        let p = curve.point_at(i as f64 / 20.0);
        assert!((-1e-9..=10.0 + 1e-9).contains(&p.x), "x out of range at {i}: {p}");
        assert!((-1e-9..=10.0 + 1e-9).contains(&p.z), "z out of range at {i}: {p}");
    }

    let free = smooth_curve(start.position, start.tangent, end.position, end.tangent, 0.5);
    assert_eq!(free, curve.point_at(0.5));

    let estimated = estimate_length(start.position, start.tangent, end.position, end.tangent, 300).unwrap();
    // Between the straight chord and the two-leg detour.
    assert!(estimated > 10.0 * 2f64.sqrt());
    assert!(estimated < 20.0);
}
