use super::*;
use crate::footprint::corners::{compute_footprint, segment_poses, DegeneratePolicy};

#[test]
fn rejects_non_positive_and_non_finite_dimensions() {
    assert!(Envelope::new(0.0, 1.0).is_err());
    assert!(Envelope::new(1.0, -2.0).is_err());
    assert!(Envelope::new(f64::NAN, 1.0).is_err());
    assert!(Envelope::new(1.0, f64::INFINITY).is_err());

    let e = Envelope::new(2.83333333, 3.25).unwrap();
    assert_eq!(e.lateral_width(), 2.83333333);
    assert_eq!(e.longitudinal_length(), 3.25);
}

#[test]
fn outline_at_identity_is_axis_aligned() {
    let e = Envelope::new(2.0, 4.0).unwrap();
    let [fo, fi, bi, bo] = e.outline(RigidTransform::IDENTITY);
    assert_eq!(fo, Point::new(2.0, 1.0));
    assert_eq!(fi, Point::new(2.0, -1.0));
    assert_eq!(bi, Point::new(-2.0, -1.0));
    assert_eq!(bo, Point::new(-2.0, 1.0));
}

#[test]
fn outline_at_segment_pose_matches_footprint_corners() {
    let path = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(-1.0, 6.0),
    ];
    let e = Envelope::new(1.25, 2.5).unwrap();
    let corners = compute_footprint(&path, &e).unwrap();
    let poses = segment_poses(&path, DegeneratePolicy::Fail).unwrap();
    assert_eq!(poses.len(), corners.len());

    for (i, pose) in poses.iter().enumerate() {
        let [fo, fi, bi, bo] = e.outline(*pose);
        for (a, b) in [
            (fo, corners.front_outer[i]),
            (fi, corners.front_inner[i]),
            (bi, corners.back_inner[i]),
            (bo, corners.back_outer[i]),
        ] {
            assert!((a - b).hypot() < 1e-9, "{a:?} vs {b:?}");
        }
    }
}
