use crate::debug::{debug_follow, debug_hold};
use crate::selector::{Field, Value};
use crate::vehicle::{AccelerationModel, IdmParameters, LeaderObservation, VehicleSnapshot};
use log::{debug, trace};

/// `RGB(225, 225, 225)` in the host's colour encoding.
const DEFAULT_COLOR: i64 = 0x00E1_E1E1;

/// The single "held vehicle" register.
///
/// There is exactly one slot, shared by every vehicle evaluated by a controller.
/// A vehicle leaves the held state only when another vehicle replaces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateState {
    stopped_vehicle_id: i64,
}

impl GateState {
    /// The ID of the currently held vehicle.
    pub fn stopped_vehicle_id(&self) -> i64 {
        self.stopped_vehicle_id
    }

    /// Whether the given vehicle is currently held.
    pub fn holds(&self, vehicle_id: i64) -> bool {
        self.stopped_vehicle_id == vehicle_id
    }

    /// Holds the given vehicle, releasing whichever vehicle was held before.
    /// Returns the ID of the previously held vehicle.
    pub fn hold(&mut self, vehicle_id: i64) -> i64 {
        std::mem::replace(&mut self.stopped_vehicle_id, vehicle_id)
    }
}

/// The suggestions returned to the host after each step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesiredOutputs {
    /// The desired acceleration in m/s<sup>2</sup>.
    pub desired_acceleration: f64,
    /// The desired angle relative to the lane, in rad.
    pub desired_lane_angle: f64,
    /// The direction of an active lane change.
    pub active_lane_change: i64,
    /// The target lane relative to the current lane.
    pub rel_target_lane: i64,
    /// The state of the turning indicator.
    pub turning_indicator: i64,
    /// The vehicle colour.
    pub color: i64,
}

impl Default for DesiredOutputs {
    fn default() -> Self {
        Self {
            desired_acceleration: 3.5,
            desired_lane_angle: 0.0,
            active_lane_change: 0,
            rel_target_lane: 0,
            turning_indicator: 0,
            color: DEFAULT_COLOR,
        }
    }
}

/// The car following controller.
///
/// A single instance serves every vehicle in the simulation, one at a time:
/// the host overwrites the snapshot of the vehicle in flight, calls [Self::step],
/// then reads back the outputs.
#[derive(Clone, Debug)]
pub struct CarFollowingModel {
    acc: AccelerationModel,
    vehicle: VehicleSnapshot,
    leader: LeaderObservation,
    outputs: DesiredOutputs,
    gate: GateState,
}

impl CarFollowingModel {
    /// Creates a new controller.
    pub fn new(params: &IdmParameters) -> Self {
        Self {
            acc: AccelerationModel::new(params),
            vehicle: Default::default(),
            leader: Default::default(),
            outputs: Default::default(),
            gate: Default::default(),
        }
    }

    /// The parameters of the acceleration model.
    pub fn params(&self) -> &IdmParameters {
        self.acc.params()
    }

    /// The observed state of the vehicle in flight.
    pub fn vehicle(&self) -> &VehicleSnapshot {
        &self.vehicle
    }

    /// The observed state of the vehicle ahead.
    pub fn leader(&self) -> &LeaderObservation {
        &self.leader
    }

    /// The current suggestions.
    pub fn outputs(&self) -> &DesiredOutputs {
        &self.outputs
    }

    /// The held vehicle register.
    pub fn gate(&self) -> &GateState {
        &self.gate
    }

    /// Updates a single field of the observed state or of the outputs.
    pub fn observe(&mut self, field: Field, value: Value) {
        let veh = &mut self.vehicle;
        let out = &mut self.outputs;
        match field {
            Field::Time => veh.time = value.as_double(),
            Field::VehicleId => veh.id = value.as_long(),
            Field::Velocity => veh.velocity = value.as_double(),
            Field::Acceleration => veh.acceleration = value.as_double(),
            Field::Length => veh.length = value.as_double(),
            Field::DesiredVelocity => veh.desired_velocity = value.as_double(),
            Field::XCoordinate => veh.position.x = value.as_double(),
            Field::YCoordinate => veh.position.y = value.as_double(),
            Field::VehicleType => veh.vehicle_type = value.as_long(),
            Field::CurrentLink => veh.current_link = value.as_long(),
            Field::SignalDistance => veh.signal_distance = value.as_double(),
            Field::SignalState => veh.signal_state = value.as_long(),
            Field::LeaderId => self.leader.leader_id = value.as_long(),
            Field::LeaderDistance => self.leader.gross_distance = value.as_double(),
            Field::LeaderRelVelocity => self.leader.relative_velocity = value.as_double(),
            Field::LeaderAcceleration => self.leader.acceleration = value.as_double(),
            Field::TurningIndicator => out.turning_indicator = value.as_long(),
            Field::Color => out.color = value.as_long(),
            Field::DesiredAcceleration => out.desired_acceleration = value.as_double(),
            Field::DesiredLaneAngle => out.desired_lane_angle = value.as_double(),
            Field::ActiveLaneChange => out.active_lane_change = value.as_long(),
            Field::RelTargetLane => out.rel_target_lane = value.as_long(),
        }
    }

    /// Reads a single field of the observed state or of the outputs.
    pub fn result(&self, field: Field) -> Value {
        let veh = &self.vehicle;
        let out = &self.outputs;
        match field {
            Field::Time => Value::Double(veh.time),
            Field::VehicleId => Value::Long(veh.id),
            Field::Velocity => Value::Double(veh.velocity),
            Field::Acceleration => Value::Double(veh.acceleration),
            Field::Length => Value::Double(veh.length),
            Field::DesiredVelocity => Value::Double(veh.desired_velocity),
            Field::XCoordinate => Value::Double(veh.position.x),
            Field::YCoordinate => Value::Double(veh.position.y),
            Field::VehicleType => Value::Long(veh.vehicle_type),
            Field::CurrentLink => Value::Long(veh.current_link),
            Field::SignalDistance => Value::Double(veh.signal_distance),
            Field::SignalState => Value::Long(veh.signal_state),
            Field::LeaderId => Value::Long(self.leader.leader_id),
            Field::LeaderDistance => Value::Double(self.leader.gross_distance),
            Field::LeaderRelVelocity => Value::Double(self.leader.relative_velocity),
            Field::LeaderAcceleration => Value::Double(self.leader.acceleration),
            Field::TurningIndicator => Value::Long(out.turning_indicator),
            Field::Color => Value::Long(out.color),
            Field::DesiredAcceleration => Value::Double(out.desired_acceleration),
            Field::DesiredLaneAngle => Value::Double(out.desired_lane_angle),
            Field::ActiveLaneChange => Value::Long(out.active_lane_change),
            Field::RelTargetLane => Value::Long(out.rel_target_lane),
        }
    }

    /// Evaluates the car following model for the vehicle in flight.
    pub fn step(&mut self) {
        if !self.vehicle.is_controlled() {
            return;
        }

        let id = self.vehicle.id;
        if !self.gate.holds(id) {
            self.follow_leader();
        }

        if self.leader.is_absent() {
            let previous = self.gate.hold(id);
            if previous != id {
                debug!("holding vehicle {} (released {})", id, previous);
                debug_hold(id, previous);
            }
        }
    }

    /// Applies the intelligent driver model to the vehicle in flight,
    /// unless it is within the jam distance of its leader.
    fn follow_leader(&mut self) {
        let vel = self.vehicle.velocity;
        let rel_vel = self.leader.relative_velocity;
        let net_dist = self.leader.net_distance(self.vehicle.length);
        let acc = self.acc.idm(net_dist, vel, rel_vel);
        let applied = self.acc.beyond_jam_distance(self.leader.gross_distance);
        if applied {
            self.outputs.desired_acceleration = acc;
        }
        trace!(
            "t={:.2} veh={} gap={:.3} vel={:.3} dv={:.3} acc={:.4} applied={}",
            self.vehicle.time,
            self.vehicle.id,
            net_dist,
            vel,
            rel_vel,
            acc,
            applied
        );
        debug_follow(
            self.vehicle.id,
            net_dist,
            self.acc.s_star(vel, rel_vel),
            acc,
            applied,
        );
    }
}
