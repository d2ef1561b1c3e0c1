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

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> FixedRect {
    FixedRect::from_points(pt(x0, y0), pt(x1, y1))
}

fn rectangle_path(x0: i32, y0: i32, x1: i32, y1: i32) -> Path {
    let mut path = Path::new();
    path.add_rectangle(pt(x0, y0), pt(x1, y1)).unwrap();
    path
}

fn triangle_path() -> Path {
    let mut path = Path::new();
    path.add_point(pt(0, 0)).unwrap();
    path.add_lines(&[pt(10, 0), pt(0, 10)]).unwrap();
    path.close_subpath().unwrap();
    path
}

fn ring() -> ClipList {
    let mut accumulator = ClipAccumulator::new();
    accumulator.add(ClipRect::new(0, 0, 10, 3)).unwrap();
    accumulator.add(ClipRect::new(0, 3, 3, 7)).unwrap();
    accumulator.add(ClipRect::new(7, 3, 10, 7)).unwrap();
    accumulator.add(ClipRect::new(0, 7, 10, 10)).unwrap();
    accumulator.finish().unwrap()
}

#[test]
fn overlapping_rectangles_intersect_directly() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));

    clip.intersect(&rectangle_path(5, 5, 15, 15), WindingRule::NonZero, &state).unwrap();

    assert!(clip.is_rectangle() == Some(rect(5, 5, 10, 10)));
    assert!(clip.inner_box() == rect(5, 5, 10, 10));
    assert!(clip.outer_box() == rect(5, 5, 10, 10));
}

#[test]
fn intersecting_with_a_point_leaves_an_empty_rectangle() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));

    let mut point = Path::new();
    point.add_point(pt(4, 4)).unwrap();

    clip.intersect(&point, WindingRule::NonZero, &state).unwrap();

    assert!(clip.inner_box() == FixedRect::at_point(pt(4, 4)));
    assert!(clip.outer_box() == FixedRect::at_point(pt(4, 4)));
    assert!(clip.outer_box().is_empty());
    assert!(clip.list().unwrap().is_empty());
}

#[test]
fn intersecting_with_an_empty_path_uses_the_origin() {
    let state       = ImagerState::default().with_ctm(Matrix::translation(3.0, 5.0));
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));

    clip.intersect(&Path::new(), WindingRule::NonZero, &state).unwrap();

    assert!(clip.outer_box() == FixedRect::at_point(pt(3, 5)));
}

#[test]
fn intersection_changes_the_id() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    let before      = clip.id();

    clip.intersect(&rectangle_path(2, 2, 8, 8), WindingRule::NonZero, &state).unwrap();

    assert!(clip.id() != before);
}

#[test]
fn triangle_clip_covers_pixel_centres() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));

    clip.intersect(&triangle_path(), WindingRule::NonZero, &state).unwrap();

    let list = clip.list().unwrap();
    assert!(list.is_normalized());
    assert!(list.area() == 45);
    assert!(list.contains_pixel(0, 0));
    assert!(list.contains_pixel(8, 0));
    assert!(!list.contains_pixel(9, 0));
    assert!(!list.contains_pixel(0, 9));
}

#[test]
fn intersection_order_does_not_matter() {
    let state = ImagerState::default();

    let mut first = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    first.intersect(&triangle_path(), WindingRule::NonZero, &state).unwrap();
    first.intersect(&rectangle_path(2, 2, 8, 8), WindingRule::NonZero, &state).unwrap();

    let mut second = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    second.intersect(&rectangle_path(2, 2, 8, 8), WindingRule::NonZero, &state).unwrap();
    second.intersect(&triangle_path(), WindingRule::NonZero, &state).unwrap();

    let first_list  = first.list().unwrap().clone();
    let second_list = second.list().unwrap().clone();

    assert!(first_list == second_list);
    assert!(first_list.area() == 5 + 4 + 3 + 2 + 1);
}

#[test]
fn even_odd_rule_leaves_overlap_out() {
    let mut path = rectangle_path(0, 0, 6, 4);
    path.add_rectangle(pt(4, 0), pt(10, 4)).unwrap();

    let even_odd    = scan_convert_path(&path, WindingRule::EvenOdd, 1.0, None).unwrap();
    let non_zero    = scan_convert_path(&path, WindingRule::NonZero, 1.0, None).unwrap();

    assert!(non_zero.rects() == &[ClipRect::new(0, 0, 10, 4)]);
    assert!(even_odd.rects() == &[ClipRect::new(0, 0, 4, 4), ClipRect::new(6, 0, 10, 4)]);
}

#[test]
fn outside_region_covers_the_rest() {
    let mut clip = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    clip.set_outside(true);

    assert!(clip.is_rectangle().is_none());
    assert!(clip.outer_box() == FixedRect::everything());
    assert!(clip.inner_box().is_empty());

    let outside = clip.rectangles_in(&ClipRect::new(0, 0, 20, 10)).unwrap();
    assert!(outside == vec![ClipRect::new(10, 0, 20, 10)]);
}

#[test]
fn intersect_with_outside_clip_subtracts() {
    let mut clip        = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    let mut excluded    = ClipPath::from_rectangle(rect(5, 0, 10, 10));
    excluded.set_outside(true);

    clip.intersect_clip(&mut excluded).unwrap();

    assert!(clip.is_rectangle() == Some(rect(0, 0, 5, 10)));
}

#[test]
fn rectangles_in_clips_the_query() {
    let list = ring();

    let inside = list.rectangles_in(&ClipRect::new(2, 2, 8, 8), false).unwrap();

    assert!(inside == vec![
        ClipRect::new(2, 2, 8, 3),
        ClipRect::new(2, 3, 3, 7),
        ClipRect::new(7, 3, 8, 7),
        ClipRect::new(2, 7, 8, 8),
    ]);
}

#[test]
fn accumulator_merges_overlaps() {
    let mut accumulator = ClipAccumulator::new();
    accumulator.add(ClipRect::new(0, 0, 5, 5)).unwrap();
    accumulator.add(ClipRect::new(3, 0, 8, 5)).unwrap();
    accumulator.add(ClipRect::new(0, 5, 8, 6)).unwrap();
    accumulator.add(ClipRect::new(20, 20, 20, 30)).unwrap();

    let list = accumulator.finish().unwrap();

    assert!(list.rects() == &[ClipRect::new(0, 0, 8, 6)]);
    assert!(list.is_rectangle() == Some(ClipRect::new(0, 0, 8, 6)));
}

#[test]
fn accumulator_keeps_bands_apart() {
    let mut accumulator = ClipAccumulator::new();
    accumulator.add(ClipRect::new(0, 0, 10, 2)).unwrap();
    accumulator.add(ClipRect::new(0, 1, 4, 4)).unwrap();

    let list = accumulator.finish().unwrap();

    assert!(list.is_normalized());
    assert!(list.rects() == &[ClipRect::new(0, 0, 10, 2), ClipRect::new(0, 2, 4, 4)]);
    assert!(list.area() == 28);
}

#[test]
fn list_intersection() {
    let ring        = ring();
    let square      = ClipList::from_rect(ClipRect::new(0, 0, 5, 5));
    let overlap     = ring.intersect(&square).unwrap();

    assert!(overlap.rects() == &[ClipRect::new(0, 0, 5, 3), ClipRect::new(0, 3, 3, 5)]);
}

#[test]
fn outline_of_a_ring_has_a_hole() {
    let list        = ring();
    let elements    = ClipOutline::new(&list).collect::<Vec<_>>();

    let moves       = elements.iter().filter(|element| matches!(element, PathElement::MoveTo(_))).count();
    let lines       = elements.iter().filter(|element| matches!(element, PathElement::LineTo(..))).count();
    let closes      = elements.iter().filter(|element| matches!(element, PathElement::ClosePath)).count();

    assert!(moves == 2);
    assert!(closes == 2);
    assert!(moves + lines == 8);

    assert!(elements[0] == PathElement::MoveTo(pt(0, 0)));
}

#[test]
fn outline_converts_back_to_the_same_region() {
    let list    = ring();
    let path    = Path::from_elements(ClipOutline::new(&list)).unwrap();
    let again   = scan_convert_path(&path, WindingRule::NonZero, 1.0, None).unwrap();

    assert!(again == list);
}

#[test]
fn outline_of_rectangle() {
    let list        = ClipList::from_rect(ClipRect::new(1, 2, 3, 4));
    let elements    = ClipOutline::new(&list).collect::<Vec<_>>();

    assert!(elements == vec![
        PathElement::MoveTo(pt(1, 2)),
        PathElement::LineTo(pt(1, 4), SegmentNotes::NONE),
        PathElement::LineTo(pt(3, 4), SegmentNotes::NONE),
        PathElement::LineTo(pt(3, 2), SegmentNotes::NONE),
        PathElement::ClosePath,
    ]);
}

#[test]
fn clip_path_traces_a_rectangle_list() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    clip.intersect(&triangle_path(), WindingRule::NonZero, &state).unwrap();

    let id          = clip.id();
    let outline     = clip.path().unwrap().clone();

    assert!(clip.id() == id);
    assert!(outline.subpath_count() == 1);
    assert!(outline.bounding_box().unwrap() == rect(0, 0, 9, 9));
}

#[test]
fn whole_pixel_translation_moves_the_list() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    clip.intersect(&triangle_path(), WindingRule::NonZero, &state).unwrap();

    clip.translate(pt(5, 5)).unwrap();

    let list = clip.list().unwrap();
    assert!(list.contains_pixel(5, 5));
    assert!(!list.contains_pixel(4, 4));
    assert!(list.area() == 45);
}

#[test]
fn path_clip_includes_no_rectangle_until_it_has_an_inner_box() {
    let state   = ImagerState::default();
    let clip    = ClipPath::from_path(&triangle_path(), WindingRule::NonZero, &state).unwrap();

    assert!(clip.outer_box() == rect(0, 0, 10, 10));
    assert!(!clip.includes_rectangle(&FixedRect::at_point(pt(0, 0))));
    assert!(!clip.includes_rectangle(&rect(1, 1, 2, 2)));

    let square = ClipPath::from_rectangle(rect(0, 0, 10, 10));
    assert!(square.includes_rectangle(&rect(1, 1, 2, 2)));
    assert!(!square.includes_rectangle(&rect(5, 5, 15, 15)));
}

#[test]
fn empty_clip_includes_nothing() {
    let state       = ImagerState::default();
    let mut clip    = ClipPath::from_rectangle(rect(0, 0, 10, 10));

    let mut point = Path::new();
    point.add_point(pt(4, 4)).unwrap();
    clip.intersect(&point, WindingRule::NonZero, &state).unwrap();

    assert!(!clip.includes_rectangle(&FixedRect::at_point(pt(4, 4))));
    assert!(!ClipPath::new().includes_rectangle(&FixedRect::default()));
}
