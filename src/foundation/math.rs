/// Shortest signed angular offset from `from` to `to`, in `(-180, 180]` degrees.
pub(crate) fn shortest_arc_deg(from: i32, to: i32) -> i32 {
    let mut delta = to - from;
    if delta > 180 {
        delta -= 360;
    } else if delta < -180 {
        delta += 360;
    }
    delta
}

/// Circular distance between two angles in degrees, always in `[0, 180]`.
pub(crate) fn angular_distance_deg(a: u16, b: u16) -> u16 {
    let d = (i32::from(a) - i32::from(b)).unsigned_abs() % 360;
    d.min(360 - d) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
