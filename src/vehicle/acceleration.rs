#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The vehicle class code which is controlled by the car following model.
pub const CONTROLLED_VEHICLE_TYPE: i64 = 700;

/// The parameters of the intelligent driver model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdmParameters {
    /// The maximum acceleration in m/s<sup>2</sup>.
    pub max_acceleration: f64,
    /// The comfortable deceleration in m/s<sup>2</sup>.
    pub comf_deceleration: f64,
    /// The desired free-flow velocity in m/s.
    pub desired_velocity: f64,
    /// The minimum gross distance to the vehicle ahead in m.
    pub jam_distance: f64,
    /// The safe time headway in seconds.
    pub time_headway: f64,
}

impl Default for IdmParameters {
    fn default() -> Self {
        Self {
            max_acceleration: 1.5,
            comf_deceleration: 3.0,
            desired_velocity: 15.0,
            jam_distance: 0.6,
            time_headway: 0.6,
        }
    }
}

#[cfg(feature = "serde")]
impl IdmParameters {
    /// Parses parameters from a JSON object. Missing fields take their default values.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads parameters from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// The acceleration model of a vehicle.
///
/// No input validation is performed: a zero gap, a zero desired velocity or
/// parameters of opposite sign yield NaN or infinite accelerations.
#[derive(Clone, Debug)]
pub struct AccelerationModel {
    params: IdmParameters,
    /// Precomputed `1 / (2 * sqrt(a * b))`.
    factor: f64,
}

impl AccelerationModel {
    /// Creates a new acceleration model.
    pub fn new(params: &IdmParameters) -> Self {
        let factor = 1. / (2. * (params.max_acceleration * params.comf_deceleration).sqrt());
        Self {
            params: *params,
            factor,
        }
    }

    /// The parameters of the model.
    pub fn params(&self) -> &IdmParameters {
        &self.params
    }

    /// Whether the gross distance to the vehicle ahead exceeds the jam distance.
    ///
    /// This is deliberately measured on the gross distance, before the vehicle
    /// length is subtracted.
    pub fn beyond_jam_distance(&self, gross_dist: f64) -> bool {
        gross_dist > self.params.jam_distance
    }

    /// Computes the desired minimum gap to the vehicle ahead.
    ///
    /// # Arguments
    /// * `my_vel` - The velocity of the simulated vehicle (m/s).
    /// * `rel_vel` - The velocity of the vehicle ahead relative to this one (m/s).
    pub fn s_star(&self, my_vel: f64, rel_vel: f64) -> f64 {
        let p = &self.params;
        p.jam_distance + (my_vel * p.time_headway) + (my_vel * rel_vel * self.factor)
    }

    /// Computes an acceleration using the intelligent driver model.
    ///
    /// # Arguments
    /// * `net_dist` - The bumper to bumper distance to the vehicle ahead (m).
    /// * `my_vel` - The velocity of the simulated vehicle (m/s).
    /// * `rel_vel` - The velocity of the vehicle ahead relative to this one (m/s).
    pub fn idm(&self, net_dist: f64, my_vel: f64, rel_vel: f64) -> f64 {
        let p = &self.params;
        let ss = self.s_star(my_vel, rel_vel);
        let term = ss / net_dist;
        p.max_acceleration * (1. - (my_vel / p.desired_velocity).powi(4) - (term * term))
    }
}
