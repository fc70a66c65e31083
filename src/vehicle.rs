pub use self::acceleration::{AccelerationModel, IdmParameters, CONTROLLED_VEHICLE_TYPE};
use crate::math::Point2d;

mod acceleration;

/// The neighbour slot which identifies the nearest vehicle ahead in the same lane.
/// Observations of every other slot are ignored.
pub const LEADER_SLOT: (i64, i64) = (0, 1);

/// The observed state of the vehicle under control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleSnapshot {
    /// The vehicle's ID, as assigned by the host.
    pub id: i64,
    /// The host's vehicle class code.
    pub vehicle_type: i64,
    /// The simulation time in s.
    pub time: f64,
    /// The velocity in m/s.
    pub velocity: f64,
    /// The acceleration in m/s<sup>2</sup>.
    pub acceleration: f64,
    /// The vehicle length in m.
    pub length: f64,
    /// The world space coordinates of the vehicle.
    pub position: Point2d,
    /// The desired velocity the host would apply, in m/s.
    pub desired_velocity: f64,
    /// The ID of the link the vehicle is travelling on.
    pub current_link: i64,
    /// The distance to the next signal head in m.
    pub signal_distance: f64,
    /// The state of the next signal head.
    pub signal_state: i64,
}

impl Default for VehicleSnapshot {
    fn default() -> Self {
        Self {
            id: 0,
            vehicle_type: 0,
            time: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            length: 0.0,
            position: Point2d::new(0.0, 0.0),
            desired_velocity: 13.9,
            current_link: 0,
            signal_distance: 0.0,
            signal_state: 0,
        }
    }
}

impl VehicleSnapshot {
    /// Whether the car following model applies to this vehicle.
    pub fn is_controlled(&self) -> bool {
        self.vehicle_type == CONTROLLED_VEHICLE_TYPE
    }
}

/// The observed state of the vehicle ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LeaderObservation {
    /// The leader's ID. Negative if there is no vehicle ahead.
    pub leader_id: i64,
    /// The distance to the leader's reference point in m.
    pub gross_distance: f64,
    /// The leader's velocity minus own velocity, in m/s.
    pub relative_velocity: f64,
    /// The leader's acceleration in m/s<sup>2</sup>.
    pub acceleration: f64,
}

impl LeaderObservation {
    /// Whether there is no vehicle ahead.
    pub fn is_absent(&self) -> bool {
        self.leader_id < 0
    }

    /// The bumper to bumper gap to the leader, given own vehicle length.
    pub fn net_distance(&self, length: f64) -> f64 {
        self.gross_distance - length
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn net_distance() {
        let leader = LeaderObservation {
            gross_distance: 10.0,
            ..Default::default()
        };
        assert_eq!(leader.net_distance(5.0), 5.0);
        assert_eq!(leader.net_distance(12.0), -2.0);
    }

    #[test]
    fn absent_leader() {
        let mut leader = LeaderObservation::default();
        assert!(!leader.is_absent());
        leader.leader_id = -1;
        assert!(leader.is_absent());
    }

    #[test]
    fn controlled_type() {
        let mut veh = VehicleSnapshot::default();
        assert!(!veh.is_controlled());
        veh.vehicle_type = 700;
        assert!(veh.is_controlled());
    }
}
