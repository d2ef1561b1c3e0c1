/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_geometry::*;

#[test]
fn fixed_from_int() {
    assert!(Fixed::from_int(3).unwrap() == Fixed(3 * 256));
    assert!(Fixed::from_int(-2).unwrap() == Fixed(-512));
}

#[test]
fn fixed_from_int_out_of_range() {
    assert!(Fixed::from_int(1 << 24) == Err(GeometryError::Limit));
    assert!(Fixed::from_int((1 << 23) - 1).is_ok());
}

#[test]
fn fixed_from_f64_rounds() {
    assert!(Fixed::from_f64(1.5).unwrap() == Fixed(384));
    assert!(Fixed::from_f64(0.001).unwrap() == Fixed(0));
    assert!(Fixed::from_f64(-0.25).unwrap() == Fixed(-64));
}

#[test]
fn fixed_from_f64_rejects_nan_and_huge() {
    assert!(Fixed::from_f64(f64::NAN) == Err(GeometryError::Limit));
    assert!(Fixed::from_f64(1.0e12) == Err(GeometryError::Limit));
}

#[test]
fn fixed_clamped_saturates() {
    assert!(Fixed::from_f64_clamped(1.0e12) == Fixed::MAX);
    assert!(Fixed::from_f64_clamped(-1.0e12) == Fixed::MIN);
    assert!(Fixed::from_f64_clamped(f64::NAN) == Fixed::ZERO);
}

#[test]
fn floor_and_ceiling() {
    let val = Fixed::from_f64(2.25).unwrap();

    assert!(val.floor() == Fixed::from_int(2).unwrap());
    assert!(val.ceiling() == Fixed::from_int(3).unwrap());
    assert!(val.rounded() == Fixed::from_int(2).unwrap());
}

#[test]
fn floor_of_negative_value() {
    let val = Fixed::from_f64(-0.5).unwrap();

    assert!(val.floor() == Fixed::from_int(-1).unwrap());
    assert!(val.ceiling() == Fixed::ZERO);
    assert!(val.to_int() == -1);
}

#[test]
fn rounding_halves_goes_up() {
    assert!(Fixed::from_f64(2.5).unwrap().rounded() == Fixed::from_int(3).unwrap());
    assert!(Fixed::from_f64(-2.5).unwrap().rounded() == Fixed::from_int(-2).unwrap());
}

#[test]
fn whole_values_are_unchanged_by_rounding() {
    let val = Fixed::from_int(7).unwrap();

    assert!(val.floor() == val);
    assert!(val.ceiling() == val);
    assert!(val.rounded() == val);
}

#[test]
fn checked_add_overflows() {
    assert!(Fixed::MAX.checked_add(Fixed::ONE) == Err(GeometryError::Limit));
    assert!(Fixed::ONE.checked_add(Fixed::ONE) == Ok(Fixed(512)));
}

#[test]
fn scale_exp2_up_and_down() {
    assert!(Fixed::ONE.scale_exp2(3).unwrap() == Fixed::from_int(8).unwrap());
    assert!(Fixed::from_int(8).unwrap().scale_exp2(-2).unwrap() == Fixed::from_int(2).unwrap());
    assert!(Fixed::from_int(1 << 20).unwrap().scale_exp2(4) == Err(GeometryError::Limit));
}

#[test]
fn same_half_pixel() {
    assert!(Fixed(10).same_half_pixel(Fixed(100)));
    assert!(!Fixed(100).same_half_pixel(Fixed(130)));
    assert!(Fixed(130).same_half_pixel(Fixed(255)));
}

#[test]
fn fixed_point_arithmetic() {
    let a = FixedPoint::from_int(3, 4).unwrap();
    let b = FixedPoint::from_int(1, -2).unwrap();

    assert!(a + b == FixedPoint::from_int(4, 2).unwrap());
    assert!(a - b == FixedPoint::from_int(2, 6).unwrap());
    assert!(-a == FixedPoint::from_int(-3, -4).unwrap());
    assert!(a.to_coord2() == Coord2(3.0, 4.0));
}

#[test]
fn rect_from_points_is_normalized() {
    let rect = FixedRect::from_points(FixedPoint::from_int(10, 2).unwrap(), FixedPoint::from_int(4, 8).unwrap());

    assert!(rect.p == FixedPoint::from_int(4, 2).unwrap());
    assert!(rect.q == FixedPoint::from_int(10, 8).unwrap());
    assert!(rect.width() == Fixed::from_int(6).unwrap());
}

#[test]
fn disjoint_rect_intersection_is_empty() {
    let a = FixedRect::from_points(FixedPoint::from_int(0, 0).unwrap(), FixedPoint::from_int(10, 10).unwrap());
    let b = FixedRect::from_points(FixedPoint::from_int(20, 20).unwrap(), FixedPoint::from_int(30, 30).unwrap());

    let overlap = a.intersection(&b);

    assert!(overlap.is_empty());
    assert!(overlap.p.x <= overlap.q.x && overlap.p.y <= overlap.q.y);
    assert!(!a.overlaps(&b));
}

#[test]
fn contained_rect() {
    let outer = FixedRect::from_points(FixedPoint::from_int(0, 0).unwrap(), FixedPoint::from_int(10, 10).unwrap());
    let inner = FixedRect::from_points(FixedPoint::from_int(2, 2).unwrap(), FixedPoint::from_int(8, 8).unwrap());

    assert!(outer.contains_rect(&inner));
    assert!(!inner.contains_rect(&outer));
    assert!(FixedRect::everything().contains_rect(&outer));
}

#[test]
fn pixel_bounds() {
    let rect    = FixedRect::new(FixedPoint::from_f64(0.5, 1.25).unwrap(), FixedPoint::from_f64(3.5, 4.0).unwrap());
    let pixels  = rect.to_pixel_bounds();

    assert!(pixels.p == FixedPoint::from_int(0, 1).unwrap());
    assert!(pixels.q == FixedPoint::from_int(4, 4).unwrap());
}

#[test]
fn operators_saturate_at_the_ends_of_the_range() {
    assert!(Fixed::MAX + Fixed::ONE == Fixed::MAX);
    assert!(Fixed::MIN - Fixed::ONE == Fixed::MIN);
    assert!(-Fixed::MIN == Fixed::MAX);

    let mut sum = Fixed::MAX;
    sum += Fixed::ONE;
    assert!(sum == Fixed::MAX);
}

#[test]
fn checked_point_difference_reports_overflow() {
    let far_left    = FixedPoint::from_int(-8_000_000, 0).unwrap();
    let far_right   = FixedPoint::from_int(8_000_000, 0).unwrap();

    assert!(far_right.checked_sub(far_left) == Err(GeometryError::Limit));
    assert!(far_right.offset_from(far_left) == Coord2(16_000_000.0, 0.0));

    let near = FixedPoint::from_int(3, 4).unwrap();
    assert!(near.checked_sub(FixedPoint::from_int(1, 1).unwrap()) == Ok(FixedPoint::from_int(2, 3).unwrap()));
}

#[test]
fn rectangle_covering_everything_has_the_largest_width() {
    let everything = FixedRect::everything();

    assert!(everything.width() == Fixed::MAX);
    assert!(everything.height() == Fixed::MAX);
}
