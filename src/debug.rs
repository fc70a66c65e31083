#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

/// Records a single evaluation of the car following model.
#[allow(unused)]
pub fn debug_follow(vehicle_id: i64, net_dist: f64, s_star: f64, acc: f64, applied: bool) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "follow",
            "vehicle": vehicle_id,
            "net_dist": net_dist,
            "s_star": s_star,
            "acc": acc,
            "applied": applied,
        }))
    })
}

/// Records a change of the held vehicle.
#[allow(unused)]
pub fn debug_hold(vehicle_id: i64, previous: i64) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "hold",
            "vehicle": vehicle_id,
            "previous": previous,
        }))
    })
}

#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
