//! Unit tests for the area selection entity

use cams_shared::Coordinate;

use crate::domain::entities::area_selection::AreaSelection;

#[test]
fn test_add_and_undo_points() {
    let mut area = AreaSelection::new();
    assert!(area.add_point(Coordinate::new(37.77, -122.42)));
    assert!(area.add_point(Coordinate::new(37.78, -122.41)));
    assert_eq!(area.len(), 2);

    let last = area.undo_last_point().unwrap();
    assert_eq!(last, Coordinate::new(37.78, -122.41));
    assert_eq!(area.points(), &[Coordinate::new(37.77, -122.42)]);
}

#[test]
fn test_out_of_range_points_rejected() {
    let mut area = AreaSelection::new();
    assert!(!area.add_point(Coordinate::new(91.0, 0.0)));
    assert!(!area.add_point(Coordinate::new(0.0, 200.0)));
    assert!(area.is_empty());
}

#[test]
fn test_clear() {
    let mut area = AreaSelection::new();
    area.add_point(Coordinate::new(1.0, 1.0));
    area.clear();
    assert!(area.is_empty());
    assert!(area.undo_last_point().is_none());
}

#[test]
fn test_perimeter_of_closed_outline() {
    let mut area = AreaSelection::new();
    assert_eq!(area.perimeter_m(), 0.0);

    area.add_point(Coordinate::new(0.0, 0.0));
    area.add_point(Coordinate::new(0.0, 1.0));
    // Two points: out and back
    let one_way = Coordinate::new(0.0, 0.0).distance_to(&Coordinate::new(0.0, 1.0));
    assert!((area.perimeter_m() - 2.0 * one_way).abs() < 1e-6);
}
