//! Tests that drive the model the way a host simulator does.

use assert_approx_eq::assert_approx_eq;
use driver_model::{Command, DriverModel, Error, Selector, Value};

/// The observed state of one vehicle for one step.
struct Observation {
    id: i64,
    vehicle_type: i64,
    vel: f64,
    length: f64,
    leader_id: i64,
    gross_distance: f64,
    rel_vel: f64,
}

impl Observation {
    fn following(id: i64, gross_distance: f64) -> Self {
        Self {
            id,
            vehicle_type: 700,
            vel: 15.0,
            length: 5.0,
            leader_id: id + 100,
            gross_distance,
            rel_vel: 0.0,
        }
    }

    fn without_leader(id: i64) -> Self {
        Self {
            leader_id: -1,
            ..Self::following(id, 10.0)
        }
    }
}

/// Performs one host step for a vehicle and returns the suggested acceleration.
fn drive(dm: &mut DriverModel, obs: &Observation, suggestion: f64) -> f64 {
    let set = |dm: &mut DriverModel, s: Selector, i2: i64, l: i64, d: f64| {
        dm.set_value(s.code(), 0, i2, l, d, None).unwrap();
    };
    set(dm, Selector::VehId, 0, obs.id, 0.0);
    set(dm, Selector::VehType, 0, obs.vehicle_type, 0.0);
    set(dm, Selector::VehVelocity, 0, 0, obs.vel);
    set(dm, Selector::VehLength, 0, 0, obs.length);
    set(dm, Selector::VehWidth, 0, 0, 2.0);
    set(dm, Selector::NvehId, 1, obs.leader_id, 0.0);
    set(dm, Selector::NvehDistance, 1, 0, obs.gross_distance);
    set(dm, Selector::NvehRelVelocity, 1, 0, obs.rel_vel);
    set(dm, Selector::DesiredAcceleration, 0, 0, suggestion);
    dm.execute_command(Command::MoveDriver as i64).unwrap();
    match dm.get_value(Selector::DesiredAcceleration.code(), 0, 0).unwrap() {
        Value::Double(acc) => acc,
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn other_vehicle_classes_keep_suggestion() {
    let mut dm = DriverModel::default();
    for vehicle_type in [100, 200, 630] {
        let obs = Observation {
            vehicle_type,
            ..Observation::following(4, 10.0)
        };
        assert_eq!(drive(&mut dm, &obs, 0.75), 0.75);
    }
}

#[test]
fn follower_brakes_behind_close_leader() {
    let mut dm = DriverModel::default();
    assert_approx_eq!(drive(&mut dm, &Observation::following(4, 10.0), 1.0), -5.5296);
}

#[test]
fn jammed_follower_keeps_suggestion() {
    let mut dm = DriverModel::default();
    assert_eq!(drive(&mut dm, &Observation::following(4, 0.5), 1.0), 1.0);
}

#[test]
fn gate_is_shared_between_vehicles() {
    let mut dm = DriverModel::default();

    // Vehicle 42 loses its leader and becomes the held vehicle.
    drive(&mut dm, &Observation::without_leader(42), 1.0);
    assert_eq!(dm.model().gate().stopped_vehicle_id(), 42);
    assert_eq!(drive(&mut dm, &Observation::following(42, 10.0), 1.0), 1.0);
    assert_approx_eq!(drive(&mut dm, &Observation::following(9, 10.0), 1.0), -5.5296);

    // Vehicle 7 loses its leader, which releases vehicle 42.
    drive(&mut dm, &Observation::without_leader(7), 1.0);
    assert_eq!(dm.model().gate().stopped_vehicle_id(), 7);
    assert_approx_eq!(drive(&mut dm, &Observation::following(42, 10.0), 1.0), -5.5296);
    assert_eq!(drive(&mut dm, &Observation::following(7, 10.0), 1.0), 1.0);
}

#[test]
fn outputs_echo_host_values() {
    let mut dm = DriverModel::default();
    dm.set_value(Selector::DesiredLaneAngle.code(), 0, 0, 0, 0.05, None).unwrap();
    dm.set_value(Selector::ActiveLaneChange.code(), 0, 0, -1, 0.0, None).unwrap();
    dm.set_value(Selector::RelTargetLane.code(), 0, 0, 1, 0.0, None).unwrap();
    dm.set_value(Selector::VehTurningIndicator.code(), 0, 0, 1, 0.0, None).unwrap();
    dm.set_value(Selector::VehDesiredVelocity.code(), 0, 0, 0, 22.2, None).unwrap();

    let get = |s: Selector| dm.get_value(s.code(), 0, 0).unwrap();
    assert_eq!(get(Selector::DesiredLaneAngle), Value::Double(0.05));
    assert_eq!(get(Selector::ActiveLaneChange), Value::Long(-1));
    assert_eq!(get(Selector::RelTargetLane), Value::Long(1));
    assert_eq!(get(Selector::VehTurningIndicator), Value::Long(1));
    assert_eq!(get(Selector::VehDesiredVelocity), Value::Double(22.2));
    assert_eq!(get(Selector::VehColor), Value::Long(0x00E1E1E1));
}

#[test]
fn unsupported_requests_fail() {
    let mut dm = DriverModel::default();
    assert!(matches!(
        dm.set_value(900, 0, 0, 0, 0.0, None),
        Err(Error::UnsupportedSelector(900))
    ));
    assert!(matches!(
        dm.get_value(Selector::NvehId.code(), 0, 1),
        Err(Error::UnsupportedGet(_))
    ));
    assert!(dm.execute_command(4).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn parameters_from_file() {
    use driver_model::IdmParameters;

    let path = std::env::temp_dir().join(format!("idm-params-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "max_acceleration": 2.0, "jam_distance": 1.0 }"#).unwrap();
    let params = IdmParameters::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(params.max_acceleration, 2.0);
    assert_eq!(params.jam_distance, 1.0);
    assert_eq!(params.desired_velocity, 15.0);

    // A gross distance of 0.8 m is now within the jam distance.
    let mut dm = DriverModel::new(&params);
    assert_eq!(drive(&mut dm, &Observation::following(4, 0.8), 1.0), 1.0);

    assert!(matches!(
        IdmParameters::load(std::env::temp_dir().join("no-such-idm-params.json")),
        Err(Error::Io(_))
    ));
}
