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

fn dashed(pattern: &[f64], offset: f64, adapt: bool) -> ImagerState {
    let dash = DashPattern::new(pattern, offset, adapt).unwrap();
    ImagerState::default().with_line_params(LineParams::default().with_dash(Some(dash)))
}

fn line(from: FixedPoint, to: FixedPoint) -> Path {
    let mut path = Path::new();
    path.add_point(from).unwrap();
    path.add_line(to).unwrap();
    path
}

fn closed_square() -> Path {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(10, 0), pt(10, 10), pt(0, 10)]).unwrap();
    path.close_subpath().unwrap();
    path
}

fn dash_ends(path: &Path) -> Vec<(FixedPoint, FixedPoint)> {
    path.subpaths().iter()
        .map(|subpath| (subpath.start_point(), subpath.current_point()))
        .collect()
}

#[test]
fn dashes_along_a_line() {
    let dashes = expand_dashes(&line(pt(0, 0), pt(10, 0)), &dashed(&[3.0, 2.0], 0.0, false)).unwrap();

    assert!(dashes.subpath_count() == 2);
    assert!(dash_ends(&dashes) == vec![(pt(0, 0), pt(3, 0)), (pt(5, 0), pt(8, 0))]);
    assert!(dashes.subpaths().iter().all(|subpath| !subpath.is_closed()));
}

#[test]
fn offset_shifts_the_pattern() {
    let dashes = expand_dashes(&line(pt(0, 0), pt(10, 0)), &dashed(&[3.0, 2.0], 4.0, false)).unwrap();

    assert!(dash_ends(&dashes) == vec![(pt(1, 0), pt(4, 0)), (pt(6, 0), pt(9, 0))]);
}

#[test]
fn ink_length_is_conserved() {
    let dashes = expand_dashes(&line(pt(0, 0), pt(100, 0)), &dashed(&[3.0, 2.0], 0.0, false)).unwrap();

    let ink: f64 = dash_ends(&dashes).iter()
        .map(|(start, end)| start.to_coord2().distance_to(&end.to_coord2()))
        .sum();

    assert!(dashes.subpath_count() == 20);
    assert!(ink == 60.0);
}

#[test]
fn odd_length_pattern_repeats_with_swapped_ink() {
    let dash = DashPattern::new(&[2.0], 0.0, false).unwrap();
    assert!(dash.pattern_length() == 4.0);

    let state   = ImagerState::default().with_line_params(LineParams::default().with_dash(Some(dash)));
    let dashes  = expand_dashes(&line(pt(0, 0), pt(8, 0)), &state).unwrap();

    assert!(dash_ends(&dashes) == vec![(pt(0, 0), pt(2, 0)), (pt(4, 0), pt(6, 0))]);
}

#[test]
fn dashes_carry_over_corners() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(2, 0), pt(2, 4)]).unwrap();

    let dashes = expand_dashes(&path, &dashed(&[3.0, 1.0], 0.0, false)).unwrap();

    // The first dash turns the corner at (2, 0)
    let first = &dashes.subpaths()[0];
    assert!(first.start_point() == pt(0, 0));
    assert!(first.segments()[1].end_point() == pt(2, 0));
    assert!(first.current_point() == pt(2, 1));

    assert!(dashes.subpath_count() == 2);
    assert!(dashes.subpaths()[1].start_point() == pt(2, 2));
    assert!(dashes.subpaths()[1].current_point() == pt(2, 4));
}

#[test]
fn adapted_pattern_fits_the_segment() {
    let plain   = expand_dashes(&line(pt(0, 0), pt(9, 0)), &dashed(&[2.0, 2.0], 0.0, false)).unwrap();
    let adapted = expand_dashes(&line(pt(0, 0), pt(9, 0)), &dashed(&[2.0, 2.0], 0.0, true)).unwrap();

    assert!(plain.subpath_count() == 3);
    assert!(adapted.subpath_count() == 2);

    let ends = dash_ends(&adapted);
    assert!(ends[0] == (pt(0, 0), FixedPoint::from_f64(2.25, 0.0).unwrap()));
    assert!(ends[1] == (FixedPoint::from_f64(4.5, 0.0).unwrap(), FixedPoint::from_f64(6.75, 0.0).unwrap()));
}

#[test]
fn pattern_is_measured_in_user_space() {
    let dash    = DashPattern::new(&[3.0, 2.0], 0.0, false).unwrap();
    let state   = ImagerState::default()
        .with_ctm(Matrix::scaling(2.0, 2.0))
        .with_line_params(LineParams::default().with_dash(Some(dash)));

    let dashes = expand_dashes(&line(pt(0, 0), pt(20, 0)), &state).unwrap();

    assert!(dash_ends(&dashes) == vec![(pt(0, 0), pt(6, 0)), (pt(10, 0), pt(16, 0))]);
}

#[test]
fn closed_subpath_breaks_into_open_dashes() {
    let dashes = expand_dashes(&closed_square(), &dashed(&[6.0, 4.0], 0.0, false)).unwrap();

    assert!(dashes.subpath_count() == 4);
    assert!(dashes.subpaths().iter().all(|subpath| !subpath.is_closed()));

    // The first dash is held back until the end of the subpath
    assert!(dash_ends(&dashes).contains(&(pt(0, 0), pt(6, 0))));
    assert!(dash_ends(&dashes).contains(&(pt(0, 10), pt(0, 4))));
}

#[test]
fn last_dash_runs_into_the_first() {
    let dashes = expand_dashes(&closed_square(), &dashed(&[15.0, 5.0], 5.0, false)).unwrap();

    assert!(dashes.subpath_count() == 2);

    let joined = &dashes.subpaths()[1];
    assert!(joined.start_point() == pt(0, 5));
    assert!(joined.segments()[1].end_point() == pt(0, 0));
    assert!(joined.current_point() == pt(10, 0));
}

#[test]
fn pattern_that_never_goes_off_keeps_the_subpath_closed() {
    let dashes = expand_dashes(&closed_square(), &dashed(&[100.0, 1.0], 0.0, false)).unwrap();

    assert!(dashes.subpath_count() == 1);
    assert!(dashes.subpaths()[0].is_closed());
    assert!(dashes.subpaths()[0].start_point() == pt(0, 0));
}

#[test]
fn zero_length_closed_subpath_becomes_a_dot_with_round_caps() {
    let mut path = Path::new();
    path.add_point(pt(5, 5)).unwrap();
    path.add_line(pt(5, 5)).unwrap();
    path.close_subpath().unwrap();

    let round   = dashed(&[3.0, 2.0], 0.0, false).with_line_cap(LineCap::Round);
    let butt    = dashed(&[3.0, 2.0], 0.0, false);

    let dot     = expand_dashes(&path, &round).unwrap();
    assert!(dot.subpath_count() == 1);
    assert!(dot.subpaths()[0].start_point() == pt(5, 5));
    assert!(dot.subpaths()[0].current_point() == pt(5, 5));

    assert!(expand_dashes(&path, &butt).unwrap().subpath_count() == 0);
}

#[test]
fn curves_are_flattened_before_dashing() {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_curve(pt(0, 50), pt(50, 50), pt(50, 0)).unwrap();

    let dashes = expand_dashes(&path, &dashed(&[5.0, 5.0], 0.0, false)).unwrap();

    assert!(!dashes.has_curves());
    assert!(dashes.subpath_count() > 1);
}

#[test]
fn solid_line_is_unchanged() {
    let path    = line(pt(0, 0), pt(10, 0));
    let state   = ImagerState::default()
        .with_line_params(LineParams::default().with_dash(Some(DashPattern::new(&[], 0.0, false).unwrap())));

    let solid   = expand_dashes(&path, &state).unwrap();
    let plain   = expand_dashes(&path, &ImagerState::default()).unwrap();

    assert!(solid == path);
    assert!(plain == path);
    assert!(path.is_shared());
}

#[test]
fn invalid_patterns_are_rejected() {
    assert!(DashPattern::new(&[3.0, -1.0], 0.0, false) == Err(GeometryError::InvalidArgument));
    assert!(DashPattern::new(&[0.0, 0.0], 0.0, false) == Err(GeometryError::InvalidArgument));
    assert!(DashPattern::new(&[1.0, f64::NAN], 0.0, false) == Err(GeometryError::InvalidArgument));
    assert!(DashPattern::new(&[1.0, 1.0], f64::INFINITY, false) == Err(GeometryError::InvalidArgument));

    assert!(DashPattern::new(&[0.0, 2.0], 0.0, false).is_ok());
}

#[test]
fn offset_lands_in_the_pattern() {
    let dash = DashPattern::new(&[3.0, 2.0], 4.0, false).unwrap();

    assert!(!dash.init_ink_on());
    assert!(dash.init_index() == 1);
    assert!(dash.init_dist_left() == 1.0);

    let wrapped = DashPattern::new(&[3.0, 2.0], -1.0, false).unwrap();
    assert!(!wrapped.init_ink_on());
    assert!(wrapped.init_dist_left() == 1.0);
}

#[test]
fn dashes_along_a_line_longer_than_the_fixed_range() {
    let long    = line(pt(-8_000_000, 0), pt(8_000_000, 0));
    let dashes  = expand_dashes(&long, &dashed(&[1_000_000.0, 1_000_000.0], 0.0, false)).unwrap();

    assert!(dashes.subpath_count() == 8);
    assert!(dash_ends(&dashes)[0] == (pt(-8_000_000, 0), pt(-7_000_000, 0)));
    assert!(dash_ends(&dashes)[7] == (pt(6_000_000, 0), pt(7_000_000, 0)));
}
