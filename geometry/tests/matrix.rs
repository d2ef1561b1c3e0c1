/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_geometry::*;

fn close(a: Coord2, b: Coord2) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

#[test]
fn rotation_by_right_angles_is_exact() {
    let rotate = Matrix::rotation(90.0);

    assert!(rotate.xx == 0.0 && rotate.yy == 0.0);
    assert!(rotate.transform_point(Coord2(1.0, 0.0)) == Coord2(0.0, 1.0));

    let half_turn = Matrix::rotation(180.0);
    assert!(half_turn.transform_point(Coord2(2.0, 3.0)) == Coord2(-2.0, -3.0));
}

#[test]
fn multiply_applies_left_first() {
    let scale_then_move = Matrix::scaling(2.0, 2.0).multiply(&Matrix::translation(10.0, 0.0));

    assert!(scale_then_move.transform_point(Coord2(1.0, 1.0)) == Coord2(12.0, 2.0));
}

#[test]
fn invert_round_trips_a_point() {
    let matrix  = Matrix::rotation(30.0).scale(2.0, 3.0).translate(5.0, -7.0);
    let inverse = matrix.invert().unwrap();
    let point   = Coord2(4.0, 9.0);

    assert!(close(inverse.transform_point(matrix.transform_point(point)), point));
    assert!(close(matrix.inverse_transform_point(matrix.transform_point(point)).unwrap(), point));
}

#[test]
fn singular_matrix_cannot_be_inverted() {
    let singular = Matrix::scaling(0.0, 1.0);

    assert!(singular.invert() == Err(GeometryError::UndefinedResult));
    assert!(singular.inverse_transform_distance(Coord2(1.0, 1.0)) == Err(GeometryError::UndefinedResult));
}

#[test]
fn distances_ignore_translation() {
    let matrix = Matrix::translation(100.0, 100.0).scale(2.0, 4.0);

    assert!(matrix.transform_distance(Coord2(1.0, 1.0)) == Coord2(2.0, 4.0));
    assert!(matrix.inverse_transform_distance(Coord2(2.0, 4.0)).unwrap() == Coord2(1.0, 1.0));
}

#[test]
fn swapped_axes_inverse_distance() {
    let swap = Matrix { xx: 0.0, xy: 2.0, yx: 4.0, yy: 0.0, tx: 0.0, ty: 0.0 };

    assert!(swap.is_xyyx());
    assert!(swap.inverse_transform_distance(swap.transform_distance(Coord2(3.0, 5.0))).unwrap() == Coord2(3.0, 5.0));
}

#[test]
fn reflection() {
    assert!(Matrix::scaling(1.0, -1.0).is_reflected());
    assert!(!Matrix::scaling(-1.0, -1.0).is_reflected());
    assert!(!Matrix::rotation(45.0).is_reflected());
}

#[test]
fn transform_bbox_covers_rotated_corners() {
    let (min, max) = Matrix::rotation(90.0).transform_bbox(Coord2(0.0, 0.0), Coord2(2.0, 1.0));

    assert!(min == Coord2(-1.0, 0.0));
    assert!(max == Coord2(0.0, 2.0));
}

#[test]
fn transform_kinds() {
    assert!(TransformKind::of(&Matrix::identity()) == TransformKind::Identity);
    assert!(TransformKind::of(&Matrix::scaling(2.0, 3.0)) == TransformKind::ScaleTranslate { sx: 2.0, sy: 3.0 });
    assert!(TransformKind::of(&Matrix::scaling(2.0, 2.0)) == TransformKind::UniformRotation { scale: 2.0, reflected: false });
    assert!(TransformKind::of(&Matrix::rotation(90.0)) == TransformKind::UniformRotation { scale: 1.0, reflected: false });
    assert!(TransformKind::of(&Matrix { xx: 1.0, xy: 0.5, yx: 0.0, yy: 1.0, tx: 0.0, ty: 0.0 }) == TransformKind::General);
}

#[test]
fn translation_that_does_not_fit() {
    let matrix = FixedMatrix::new(Matrix::translation(1.0e10, 0.0));

    assert!(!matrix.translation_fits());
    assert!(matrix.transform_to_fixed(0.0, 0.0) == Err(GeometryError::Limit));
    assert!(matrix.transform_to_fixed_clamped(0.0, 0.0).x == Fixed::MAX);
}

#[test]
fn fixed_transform() {
    let matrix = FixedMatrix::new(Matrix::translation(0.5, 0.25).scale(2.0, 2.0));

    assert!(matrix.translation_fits());
    assert!(matrix.transform_to_fixed(1.0, 2.0).unwrap() == FixedPoint::from_f64(2.5, 4.25).unwrap());
    assert!(matrix.distance_to_fixed(1.0, 2.0).unwrap() == FixedPoint::from_int(2, 4).unwrap());
}

#[test]
fn translation_brings_a_far_point_back_into_range() {
    let matrix = FixedMatrix::new(Matrix::translation(-8.0e6, 0.0));

    assert!(matrix.translation_fits());
    assert!(matrix.transform_to_fixed(9.0e6, 0.0) == Ok(FixedPoint::from_int(1_000_000, 0).unwrap()));
    assert!(matrix.transform_to_fixed(2.0e7, 0.0) == Err(GeometryError::Limit));
}
