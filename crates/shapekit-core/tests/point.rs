use proptest::prelude::*;
use shapekit_core::{Point, ScaleMode, ShapeError};

proptest! {
    #[test]
    fn translate_round_trip_restores_point(
        x in -1_000_000i32..1_000_000,
        y in -1_000_000i32..1_000_000,
        dx in -1_000_000i32..1_000_000,
        dy in -1_000_000i32..1_000_000,
    ) {
        let original = Point::new(x, y);
        let mut p = original;
        p.translate(dx, dy);
        p.translate(-dx, -dy);
        prop_assert_eq!(p, original);
    }

    #[test]
    fn multiply_then_divide_restores_point(
        x in -10_000i32..10_000,
        y in -10_000i32..10_000,
        factor in 1i32..100,
    ) {
        let original = Point::new(x, y);
        let mut p = original;
        p.scale(factor, ScaleMode::Multiply).unwrap();
        p.scale(factor, ScaleMode::Divide).unwrap();
        prop_assert_eq!(p, original);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative(
        ax in -10_000i32..10_000,
        ay in -10_000i32..10_000,
        bx in -10_000i32..10_000,
        by in -10_000i32..10_000,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert!(a.distance(&b) >= 0.0);
        prop_assert_eq!(a.distance(&b), b.distance(&a));
    }
}

#[test]
fn test_divide_then_multiply_is_lossy() {
    let mut p = Point::new(7, 9);
    p.scale(2, ScaleMode::Divide).unwrap();
    p.scale(2, ScaleMode::Multiply).unwrap();
    assert_eq!(p, Point::new(6, 8));
}

#[test]
fn test_divide_by_zero_is_reported() {
    let mut p = Point::new(1, 1);
    let err = p.scale(0, ScaleMode::Divide).unwrap_err();
    assert_eq!(err, ShapeError::DivisionByZero);
}
