/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_geometry::*;

fn pt(x: i32, y: i32) -> FixedPoint {
    FixedPoint::from_int(x, y).unwrap()
}

#[test]
fn new_path_is_null() {
    let path = Path::new();

    assert!(path.is_null());
    assert!(path.is_void());
    assert!(path.current_point() == Err(GeometryError::NoCurrentPoint));
    assert!(path.bounding_box() == Err(GeometryError::NoCurrentPoint));
}

#[test]
fn line_without_current_point_fails() {
    let mut path = Path::new();

    assert!(path.add_line(pt(10, 10)) == Err(GeometryError::NoCurrentPoint));
    assert!(path.is_null());
}

#[test]
fn moveto_only_path() {
    let mut path = Path::new();
    path.add_point(pt(5, 6)).unwrap();

    assert!(path.is_void());
    assert!(!path.is_null());
    assert!(path.last_op_was_moveto());
    assert!(path.bounding_box().unwrap() == FixedRect::at_point(pt(5, 6)));
}

#[test]
fn second_moveto_replaces_the_first() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_point(pt(5, 5)).unwrap();
    path.add_line(pt(10, 5)).unwrap();

    assert!(path.subpath_count() == 1);
    assert!(path.subpaths()[0].start_point() == pt(5, 5));
}

#[test]
fn close_returns_to_start() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_line(pt(10, 0)).unwrap();
    path.add_line(pt(10, 10)).unwrap();
    path.close_subpath().unwrap();

    assert!(path.current_point().unwrap() == pt(0, 0));
    assert!(path.subpaths()[0].is_closed());

    // A line after a close starts a new subpath at the old start point
    path.add_line(pt(0, 10)).unwrap();
    assert!(path.subpath_count() == 2);
    assert!(path.subpaths()[1].start_point() == pt(0, 0));
}

#[test]
fn clones_share_storage_until_changed() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_line(pt(10, 0)).unwrap();

    let copy = path.clone();
    assert!(path.is_shared());
    assert!(copy == path);

    path.add_line(pt(10, 10)).unwrap();

    assert!(copy.subpaths()[0].segments().len() == 2);
    assert!(path.subpaths()[0].segments().len() == 3);
    assert!(!copy.is_shared());
}

#[test]
fn assign_free_empties_the_source() {
    let mut source = Path::new();
    source.add_point(pt(1, 1)).unwrap();
    source.add_line(pt(2, 2)).unwrap();

    let mut target = Path::new();
    target.assign_free(&mut source);

    assert!(source.is_null());
    assert!(target.subpath_count() == 1);
}

#[test]
fn rectangle_is_recognised() {
    let mut path = Path::new();
    path.add_rectangle(pt(10, 20), pt(30, 50)).unwrap();

    let (bounds, closure) = path.is_rectangular().unwrap();

    assert!(bounds == FixedRect::from_points(pt(10, 20), pt(30, 50)));
    assert!(closure == RectangleClosure::Explicit);
}

#[test]
fn open_rectangle_is_recognised() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(10, 0), pt(10, 10), pt(0, 10)]).unwrap();

    let (bounds, closure) = path.is_rectangular().unwrap();

    assert!(bounds == FixedRect::from_points(pt(0, 0), pt(10, 10)));
    assert!(closure == RectangleClosure::Open);
}

#[test]
fn triangle_is_not_rectangular() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(10, 0), pt(5, 10)]).unwrap();
    path.close_subpath().unwrap();

    assert!(path.is_rectangular().is_none());
}

#[test]
fn bbox_includes_control_points() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_curve(pt(0, 20), pt(10, 20), pt(10, 0)).unwrap();

    let bounds = path.bounding_box().unwrap();

    assert!(bounds == FixedRect::from_points(pt(0, 0), pt(10, 20)));
    assert!(path.has_curves());
    assert!(path.curve_count() == 1);
}

#[test]
fn bbox_limit_rejects_points() {
    let mut path = Path::new();
    path.set_bbox_limit(Some(FixedRect::from_points(pt(0, 0), pt(100, 100))));
    path.add_point(pt(50, 50)).unwrap();

    assert!(path.add_line(pt(200, 50)) == Err(GeometryError::Limit));
    assert!(path.is_void());
    assert!(path.current_point().unwrap() == pt(50, 50));
}

#[test]
fn add_path_appends_and_resets_source() {
    let mut first = Path::new();
    first.add_rectangle(pt(0, 0), pt(10, 10)).unwrap();

    let mut second = Path::new();
    second.add_point(pt(20, 20)).unwrap();
    second.add_line(pt(30, 20)).unwrap();

    first.add_path(&mut second).unwrap();

    assert!(first.subpath_count() == 2);
    assert!(first.current_point().unwrap() == pt(30, 20));
    assert!(second.is_null());
}

#[test]
fn reversed_closed_subpath_keeps_start() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(10, 0), pt(10, 10), pt(0, 10)]).unwrap();
    path.close_subpath().unwrap();

    let reversed = path.copy_reversed().unwrap();
    let elements = reversed.elements().collect::<Vec<_>>();

    assert!(elements == vec![
        PathElement::MoveTo(pt(0, 0)),
        PathElement::LineTo(pt(0, 10), SegmentNotes::NONE),
        PathElement::LineTo(pt(10, 10), SegmentNotes::NONE),
        PathElement::LineTo(pt(10, 0), SegmentNotes::NONE),
        PathElement::ClosePath,
    ]);
}

#[test]
fn reversed_open_subpath_starts_at_end() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_line(pt(10, 0)).unwrap();
    path.add_curve(pt(15, 0), pt(20, 5), pt(20, 10)).unwrap();

    let reversed = path.copy_reversed().unwrap();
    let elements = reversed.elements().collect::<Vec<_>>();

    assert!(elements == vec![
        PathElement::MoveTo(pt(20, 10)),
        PathElement::CurveTo(pt(20, 5), pt(15, 0), pt(10, 0), SegmentNotes::NONE),
        PathElement::LineTo(pt(0, 0), SegmentNotes::NONE),
    ]);
}

#[test]
fn elements_round_trip_through_from_elements() {
    let mut path = Path::new();
    path.add_point(pt(1, 2)).unwrap();
    path.add_line(pt(3, 4)).unwrap();
    path.add_curve(pt(5, 6), pt(7, 8), pt(9, 10)).unwrap();
    path.close_subpath().unwrap();
    path.add_point(pt(11, 12)).unwrap();

    let rebuilt = Path::from_elements(path.elements()).unwrap();

    assert!(rebuilt == path);
}

#[test]
fn translate_and_scale() {
    let mut path = Path::new();
    path.add_rectangle(pt(1, 1), pt(2, 3)).unwrap();

    path.translate(pt(1, 1)).unwrap();
    path.scale_exp2(1, 2).unwrap();

    assert!(path.bounding_box().unwrap() == FixedRect::from_points(pt(4, 8), pt(6, 16)));
}

#[test]
fn user_path_uses_the_ctm() {
    let state       = ImagerState::default().with_ctm(Matrix::scaling(2.0, 2.0).translate(10.0, 10.0));
    let mut path    = Path::new();

    {
        let mut user = UserPath::new(&mut path, &state);
        user.rectangle(0.0, 0.0, 5.0, 5.0).unwrap();

        assert!(user.current_point().unwrap() == Coord2(0.0, 0.0));
    }

    assert!(path.bounding_box().unwrap() == FixedRect::from_points(pt(20, 20), pt(30, 30)));
}

#[test]
fn user_path_relative_moves() {
    let state       = ImagerState::default();
    let mut path    = Path::new();

    {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(10.0, 10.0).unwrap()
            .rel_line_to(5.0, 0.0).unwrap()
            .rel_move_to(0.0, 5.0).unwrap()
            .rel_line_to(-5.0, 0.0).unwrap();
    }

    assert!(path.subpath_count() == 2);
    assert!(path.current_point().unwrap() == pt(10, 15));
}

#[test]
fn full_circle_is_four_curves() {
    let state       = ImagerState::default();
    let mut path    = Path::new();

    UserPath::new(&mut path, &state).arc(50.0, 50.0, 10.0, 0.0, 360.0).unwrap();

    assert!(path.subpath_count() == 1);
    assert!(path.curve_count() == 4);
    assert!(path.subpaths()[0].start_point() == pt(60, 50));
    assert!(path.current_point().unwrap() == pt(60, 50));
    assert!(path.bounding_box().unwrap() == FixedRect::from_points(pt(40, 40), pt(60, 60)));
}

#[test]
fn arc_connects_with_a_line() {
    let state       = ImagerState::default();
    let mut path    = Path::new();

    {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(0.0, 0.0).unwrap();
        user.arc(20.0, 0.0, 10.0, 180.0, 270.0).unwrap();
    }

    let segments = path.subpaths()[0].segments();

    assert!(segments.len() == 3);
    assert!(segments[1] == Segment::Line { to: pt(10, 0), notes: SegmentNotes::NONE });
    assert!(segments[2].is_curve());
    assert!(path.current_point().unwrap() == pt(20, -10));
}

#[test]
fn arc_to_returns_tangent_points() {
    let state       = ImagerState::default();
    let mut path    = Path::new();

    let (t0, t2) = {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(0.0, 0.0).unwrap();
        user.arc_to(10.0, 0.0, 10.0, 10.0, 5.0).unwrap()
    };

    assert!((t0.0 - 5.0).abs() < 1e-9 && t0.1.abs() < 1e-9);
    assert!((t2.0 - 10.0).abs() < 1e-9 && (t2.1 - 5.0).abs() < 1e-9);
    assert!(path.current_point().unwrap() == pt(10, 5));
}

#[test]
fn arc_to_collinear_points_draws_a_line() {
    let state       = ImagerState::default();
    let mut path    = Path::new();

    let (t0, t2) = {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(0.0, 0.0).unwrap();
        user.arc_to(10.0, 0.0, 20.0, 0.0, 5.0).unwrap()
    };

    assert!(t0 == Coord2(10.0, 0.0) && t2 == Coord2(10.0, 0.0));
    assert!(!path.has_curves());
    assert!(path.current_point().unwrap() == pt(10, 0));
}

#[test]
fn arc_to_negative_radius_is_undefined() {
    let state       = ImagerState::default();
    let mut path    = Path::new();
    let mut user    = UserPath::new(&mut path, &state);

    user.move_to(0.0, 0.0).unwrap();
    assert!(user.arc_to(10.0, 0.0, 10.0, 10.0, -1.0) == Err(GeometryError::UndefinedResult));
}

#[test]
fn clamped_user_path_pins_far_points_to_the_edge() {
    let state       = ImagerState::default().with_clamp_coordinates(true);
    let mut path    = Path::new();

    {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(0.0, 0.0).unwrap()
            .line_to(1.0e9, 0.0).unwrap()
            .line_to(0.0, -1.0e9).unwrap();
    }

    assert!(path.subpaths()[0].segments()[1].end_point() == FixedPoint::new(Fixed::MAX, Fixed::ZERO));
    assert!(path.current_point().unwrap() == FixedPoint::new(Fixed::ZERO, Fixed::MIN));

    let mut unclamped = Path::new();
    let mut user = UserPath::new(&mut unclamped, &ImagerState::default());
    user.move_to(0.0, 0.0).unwrap();
    assert!(user.line_to(1.0e9, 0.0).is_err());
}

#[test]
fn clamped_relative_moves_stop_at_the_edge() {
    let state       = ImagerState::default().with_clamp_coordinates(true);
    let mut path    = Path::new();

    {
        let mut user = UserPath::new(&mut path, &state);
        user.move_to(8_000_000.0, 0.0).unwrap()
            .rel_line_to(1_000_000.0, 0.0).unwrap();
    }
    assert!(path.current_point().unwrap() == FixedPoint::new(Fixed::MAX, Fixed::ZERO));

    {
        let mut user = UserPath::new(&mut path, &state);
        user.rel_curve_to(-1.0, 0.0, 1.0, 0.0, 1.0e9, 0.0).unwrap()
            .rel_move_to(0.0, 1.0e9).unwrap();
    }
    assert!(path.curve_count() == 1);
    assert!(path.current_point().unwrap() == FixedPoint::new(Fixed::MAX, Fixed::MAX));
}

#[test]
fn unclamped_relative_moves_past_the_edge_fail() {
    let mut path    = Path::new();
    let mut user    = UserPath::new(&mut path, &ImagerState::default());

    user.move_to(8_000_000.0, 0.0).unwrap();

    assert!(user.rel_line_to(1_000_000.0, 0.0).err() == Some(GeometryError::Limit));
    assert!(user.rel_move_to(1_000_000.0, 0.0).err() == Some(GeometryError::Limit));
}

#[test]
fn relative_point_moves_the_current_point() {
    let mut path = Path::new();

    assert!(path.add_relative_point(pt(1, 1)) == Err(GeometryError::NoCurrentPoint));

    path.add_point(pt(2, 3)).unwrap();
    path.add_relative_point(pt(4, 5)).unwrap();

    assert!(path.current_point().unwrap() == pt(6, 8));
}
