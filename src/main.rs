//! Drives a short platoon along a straight road through the driver model
//! protocol, printing the suggested accelerations.
//!
//! Usage: `platoon [steps] [dt]`

use driver_model::math::{point_distance, Point2d};
use driver_model::{Command, DriverModel, Selector, Value};

/// The vehicle class controlled by the model.
const VEHICLE_TYPE: i64 = 700;

/// The vehicle length in m.
const VEHICLE_LENGTH: f64 = 4.5;

/// The host's own desired velocity in m/s.
const HOST_DESIRED_VEL: f64 = 13.9;

struct HostVehicle {
    id: i64,
    pos: Point2d,
    vel: f64,
    acc: f64,
}

fn main() {
    if let Err(err) = env_logger::try_init() {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let mut args = std::env::args().skip(1);
    let steps: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let dt: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0.1);

    // Vehicles are ordered front to back.
    let mut vehicles: Vec<HostVehicle> = (0..4)
        .map(|i| HostVehicle {
            id: i as i64 + 1,
            pos: Point2d::new(100.0 - 12.0 * i as f64, 0.0),
            vel: 8.0 + 2.0 * i as f64,
            acc: 0.0,
        })
        .collect();

    let mut dm = DriverModel::default();
    let params = dm.model().params();
    println!(
        "a={} b={} v0={} s0={} T={}",
        params.max_acceleration,
        params.comf_deceleration,
        params.desired_velocity,
        params.jam_distance,
        params.time_headway
    );
    dm.execute_command(Command::Init as i64).ok();
    for veh in &vehicles {
        dm.set_value(Selector::VehId.code(), 0, 0, veh.id, 0.0, None).ok();
        dm.execute_command(Command::CreateDriver as i64).ok();
    }

    for frame in 0..steps {
        let time = frame as f64 * dt;
        for i in 0..vehicles.len() {
            let leader = i.checked_sub(1).map(|j| (vehicles[j].id, vehicles[j].pos, vehicles[j].vel));
            let veh = &vehicles[i];
            let suggestion = 2.0 * (1.0 - veh.vel / HOST_DESIRED_VEL);

            let set_long = |dm: &mut DriverModel, s: Selector, v: i64| {
                dm.set_value(s.code(), 0, 0, v, 0.0, None).ok();
            };
            let set_double = |dm: &mut DriverModel, s: Selector, v: f64| {
                dm.set_value(s.code(), 0, 0, 0, v, None).ok();
            };

            set_double(&mut dm, Selector::Time, time);
            set_long(&mut dm, Selector::VehId, veh.id);
            set_long(&mut dm, Selector::VehType, VEHICLE_TYPE);
            set_double(&mut dm, Selector::VehVelocity, veh.vel);
            set_double(&mut dm, Selector::VehAcceleration, veh.acc);
            set_double(&mut dm, Selector::VehLength, VEHICLE_LENGTH);
            set_double(&mut dm, Selector::VehXCoordinate, veh.pos.x);
            set_double(&mut dm, Selector::VehYCoordinate, veh.pos.y);
            set_double(&mut dm, Selector::DesiredAcceleration, suggestion);

            let (leader_id, gross, rel_vel) = match leader {
                Some((id, pos, vel)) => (id, point_distance(veh.pos, pos), vel - veh.vel),
                None => (-1, 250.0, 0.0),
            };
            dm.set_value(Selector::NvehId.code(), 0, 1, leader_id, 0.0, None).ok();
            dm.set_value(Selector::NvehDistance.code(), 0, 1, 0, gross, None).ok();
            dm.set_value(Selector::NvehRelVelocity.code(), 0, 1, 0, rel_vel, None).ok();

            dm.execute_command(Command::MoveDriver as i64).ok();
            let acc = match dm.get_value(Selector::DesiredAcceleration.code(), 0, 0) {
                Ok(Value::Double(acc)) => acc,
                _ => suggestion,
            };
            vehicles[i].acc = acc;
        }

        for veh in &mut vehicles {
            let vel = f64::max(veh.vel + dt * veh.acc, 0.0);
            veh.pos.x += 0.5 * (veh.vel + vel) * dt;
            veh.vel = vel;
        }

        let row = vehicles
            .iter()
            .map(|v| format!("{:>3}: x={:7.2} v={:5.2} a={:6.2}", v.id, v.pos.x, v.vel, v.acc))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("t={:6.2} {}", time, row);
    }

    for _ in &vehicles {
        dm.execute_command(Command::KillDriver as i64).ok();
    }
    println!("held vehicle: {}", dm.model().gate().stopped_vehicle_id());
}
