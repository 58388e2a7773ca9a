use super::*;

#[test]
fn shortest_arc_wraps_through_zero() {
    assert_eq!(shortest_arc_deg(10, 350), -20);
    assert_eq!(shortest_arc_deg(350, 10), 20);
    assert_eq!(shortest_arc_deg(0, 180), 180);
    assert_eq!(shortest_arc_deg(90, 100), 10);
}

#[test]
fn angular_distance_is_symmetric_and_bounded() {
    assert_eq!(angular_distance_deg(10, 350), 20);
    assert_eq!(angular_distance_deg(350, 10), 20);
    assert_eq!(angular_distance_deg(0, 180), 180);
    assert_eq!(angular_distance_deg(45, 45), 0);
    assert_eq!(angular_distance_deg(0, 359), 1);
}
