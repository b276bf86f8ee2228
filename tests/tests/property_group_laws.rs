//! Property-based tests for the curve group law and scalar multiplication

use eccrypt::algorithms::{CurvePoint, EllipticCurve};
use eccrypt_tests::{demo_curve, small_curve};
use proptest::prelude::*;

/// Every affine point of a small curve, found by scanning x.
fn all_points(curve: &EllipticCurve) -> Vec<CurvePoint> {
    let mut points = Vec::new();
    for x in 0..curve.q() {
        if let Ok((p, neg)) = curve.point_at(x) {
            points.push(p);
            if neg != p {
                points.push(neg);
            }
        }
    }
    points
}

/// A point on the demo curve: `k·g` for the first base point `g`.
fn demo_point() -> impl Strategy<Value = CurvePoint> {
    (0u64..4093).prop_map(|k| {
        let curve = demo_curve();
        let g = CurvePoint::new(1, 181);
        curve.mul(&g, k).unwrap()
    })
}

#[test]
fn small_curve_group_laws_exhaustive() {
    let curve = small_curve();
    let mut points = all_points(&curve);
    points.push(CurvePoint::identity());

    for p in &points {
        assert_eq!(curve.add(p, &CurvePoint::identity()).unwrap(), *p);
        assert!(curve.add(p, &curve.negate(p)).unwrap().is_identity());
        for r in &points {
            let sum = curve.add(p, r).unwrap();
            assert!(curve.is_valid(&sum));
            assert_eq!(sum, curve.add(r, p).unwrap());
            for s in &points {
                let left = curve.add(&sum, s).unwrap();
                let right = curve.add(p, &curve.add(r, s).unwrap()).unwrap();
                assert_eq!(left, right);
            }
        }
    }
}

proptest! {
    #[test]
    fn addition_commutes(p in demo_point(), r in demo_point()) {
        let curve = demo_curve();
        prop_assert_eq!(curve.add(&p, &r).unwrap(), curve.add(&r, &p).unwrap());
    }

    #[test]
    fn addition_associates(p in demo_point(), r in demo_point(), s in demo_point()) {
        let curve = demo_curve();
        let left = curve.add(&curve.add(&p, &r).unwrap(), &s).unwrap();
        let right = curve.add(&p, &curve.add(&r, &s).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn negation_cancels(p in demo_point()) {
        let curve = demo_curve();
        prop_assert!(curve.add(&p, &curve.negate(&p)).unwrap().is_identity());
        prop_assert_eq!(curve.negate(&curve.negate(&p)), p);
    }

    #[test]
    fn mul_matches_repeated_addition(p in demo_point(), k in 0u64..64) {
        let curve = demo_curve();
        let mut acc = CurvePoint::identity();
        for _ in 0..k {
            acc = curve.add(&acc, &p).unwrap();
        }
        prop_assert_eq!(curve.mul(&p, k).unwrap(), acc);
    }

    #[test]
    fn mul_distributes_over_scalars(p in demo_point(), j in 0u64..10_000, k in 0u64..10_000) {
        let curve = demo_curve();
        let sum = curve.add(&curve.mul(&p, j).unwrap(), &curve.mul(&p, k).unwrap()).unwrap();
        prop_assert_eq!(curve.mul(&p, j + k).unwrap(), sum);
        prop_assert_eq!(
            curve.mul(&curve.mul(&p, j).unwrap(), k).unwrap(),
            curve.mul(&p, j * k).unwrap()
        );
    }

    #[test]
    fn mul_signed_negates(p in demo_point(), k in 1i64..5_000) {
        let curve = demo_curve();
        prop_assert_eq!(curve.mul_signed(&p, -k).unwrap(), curve.negate(&curve.mul(&p, k as u64).unwrap()));
    }

    #[test]
    fn order_annihilates(k in 1u64..4093) {
        let curve = demo_curve();
        let p = curve.mul(&CurvePoint::new(1, 181), k).unwrap();
        prop_assert_eq!(curve.mul(&p, 4093).unwrap(), CurvePoint::identity());
    }
}
