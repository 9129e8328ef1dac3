use lodestone_util::math::{self, Vector3};

use crate::arrow::Arrow;

/// Where an entity stands and looks: its world, position and yaw in degrees.
///
/// The world identifier is any comparable value (a name, a uuid, an index);
/// tracking only needs to know whether two entities share a world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint<W> {
    pub world: W,
    pub position: Vector3<f64>,
    pub yaw: f32,
}

impl<W> Viewpoint<W> {
    pub const fn new(world: W, position: Vector3<f64>, yaw: f32) -> Self {
        Self {
            world,
            position,
            yaw,
        }
    }
}

/// How a target sits relative to a viewer: how far, at what bearing, and
/// which compass arrow to display for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tracking {
    /// Horizontal distance, or `None` when the two are in different worlds.
    pub distance: Option<f64>,
    /// Target bearing relative to the viewer's facing, in `[-180, 180)`.
    pub bearing: f32,
    pub arrow: Arrow,
    pub cross_world: bool,
}

impl Tracking {
    pub fn between<W: PartialEq>(viewer: &Viewpoint<W>, target: &Viewpoint<W>) -> Self {
        let cross_world = viewer.world != target.world;
        let bearing = math::relative_yaw(&viewer.position, viewer.yaw, &target.position);
        Self {
            distance: (!cross_world)
                .then(|| math::horizontal_distance(&viewer.position, &target.position)),
            bearing,
            arrow: Arrow::from_yaw(bearing),
            cross_world,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_straight_ahead_is_a_top_arrow() {
        let viewer = Viewpoint::new("overworld", Vector3::new(0.0, 64.0, 0.0), 0.0);
        let target = Viewpoint::new("overworld", Vector3::new(0.0, 70.0, 12.0), 0.0);
        let tracking = Tracking::between(&viewer, &target);

        assert_eq!(tracking.distance, Some(12.0));
        assert_eq!(tracking.bearing, 0.0);
        assert_eq!(tracking.arrow, Arrow::Top);
        assert!(!tracking.cross_world);
    }

    #[test]
    fn target_behind_the_viewer_is_a_bottom_arrow() {
        let viewer = Viewpoint::new(1u32, Vector3::new(0.0, 0.0, 0.0), 0.0);
        let target = Viewpoint::new(1u32, Vector3::new(0.0, 0.0, -9.0), 0.0);
        let tracking = Tracking::between(&viewer, &target);

        assert_eq!(tracking.distance, Some(9.0));
        assert_eq!(tracking.arrow, Arrow::Bottom);
    }

    #[test]
    fn bearing_follows_the_viewer_when_it_turns() {
        let pos = Vector3::new(0.0, 0.0, 0.0);
        let target = Viewpoint::new(1u32, Vector3::new(10.0, 0.0, 0.0), 0.0);

        let facing_forward = Tracking::between(&Viewpoint::new(1u32, pos, 0.0), &target);
        assert_eq!(facing_forward.arrow, Arrow::Left);

        let turned_onto_it = Tracking::between(&Viewpoint::new(1u32, pos, -90.0), &target);
        assert_eq!(turned_onto_it.bearing, 0.0);
        assert_eq!(turned_onto_it.arrow, Arrow::Top);
    }

    #[test]
    fn cross_world_targets_have_no_distance() {
        let viewer = Viewpoint::new("overworld", Vector3::new(0.0, 0.0, 0.0), 0.0);
        let target = Viewpoint::new("nether", Vector3::new(3.0, 0.0, 4.0), 0.0);
        let tracking = Tracking::between(&viewer, &target);

        assert!(tracking.cross_world);
        assert_eq!(tracking.distance, None);
        // The arrow is still computed from the raw coordinates.
        assert_eq!(tracking.arrow, Arrow::TopLeft);
    }
}
