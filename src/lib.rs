//! An external driver model for microscopic traffic simulators.
//!
//! The host pushes the state of one vehicle at a time, asks the model to move
//! the driver, and reads back a desired acceleration computed with the
//! intelligent driver model.

pub use cgmath;
pub use controller::{CarFollowingModel, DesiredOutputs, GateState};
pub use error::{Error, Result};
pub use protocol::DriverModel;
pub use selector::{Command, Field, Selector, Value};
pub use vehicle::{
    AccelerationModel, IdmParameters, LeaderObservation, VehicleSnapshot,
    CONTROLLED_VEHICLE_TYPE, LEADER_SLOT,
};

mod controller;
mod debug;
mod error;
pub mod ffi;
pub mod math;
mod protocol;
pub mod selector;
mod vehicle;
