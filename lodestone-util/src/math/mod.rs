pub mod vector3;

pub use vector3::Vector3;

/// Brings any finite angle back into `[-180, 180)` degrees.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let mut wrapped = degrees % 360.0;
    if wrapped >= 180.0 {
        wrapped -= 360.0;
    }

    if wrapped < -180.0 {
        wrapped += 360.0;
    }

    wrapped
}

pub fn squared_horizontal_distance(from: &Vector3<f64>, to: &Vector3<f64>) -> f64 {
    from.sub(to).horizontal_length_squared()
}

/// Distance between two points in the x/z plane, ignoring height.
pub fn horizontal_distance(from: &Vector3<f64>, to: &Vector3<f64>) -> f64 {
    from.sub(to).horizontal_length()
}

/// Bearing of `target` relative to an observer standing at `observer_pos` and
/// facing `observer_yaw` degrees, normalized into `[-180, 180)`.
///
/// `0` means the target is straight ahead, positive values are to the left
/// and negative values to the right, matching the yaw convention of the game.
pub fn relative_yaw(
    observer_pos: &Vector3<f64>,
    observer_yaw: f32,
    target_pos: &Vector3<f64>,
) -> f32 {
    let dx = target_pos.x - observer_pos.x;
    let dz = target_pos.z - observer_pos.z;
    let to_target = f64::atan2(dx, dz).to_degrees() as f32;

    wrap_degrees(to_target + wrap_degrees(observer_yaw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_degrees_identity_inside_domain() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(-179.9), -179.9);
        assert_eq!(wrap_degrees(90.0), 90.0);
    }

    #[test]
    fn wrap_degrees_folds_over_the_boundary() {
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(540.0), -180.0);
        assert_eq!(wrap_degrees(-270.0), 90.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }

    #[test]
    fn horizontal_distance_ignores_height() {
        let from = Vector3::new(0.0, 64.0, 0.0);
        let to = Vector3::new(3.0, -12.0, 4.0);
        assert_eq!(horizontal_distance(&from, &to), 5.0);
    }

    #[test]
    fn relative_yaw_of_a_target_straight_ahead() {
        // Facing positive z (yaw 0), target further along z.
        let observer = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(0.0, 0.0, 10.0);
        assert_eq!(relative_yaw(&observer, 0.0, &target), 0.0);
    }

    #[test]
    fn relative_yaw_accounts_for_the_observer_facing() {
        let observer = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(10.0, 0.0, 0.0);
        // Target due +x: bearing 90 when facing +z, straight ahead when
        // already turned to -90.
        assert_eq!(relative_yaw(&observer, 0.0, &target), 90.0);
        assert_eq!(relative_yaw(&observer, -90.0, &target), 0.0);
    }

    #[test]
    fn relative_yaw_normalizes_an_unwrapped_observer_yaw() {
        let observer = Vector3::new(0.0, 0.0, 0.0);
        let target = Vector3::new(0.0, 0.0, 10.0);
        assert_eq!(relative_yaw(&observer, 720.0, &target), 0.0);
    }
}
