use std::{env, time::Duration};

// Runtime/server constants (not vehicle tuning).

pub fn http_port() -> u16 {
    env::var("DRIVE_SIM_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

/// How often the sim loop logs a vehicle diagnostic snapshot, in ticks.
/// 0 disables the diagnostic log entirely.
pub fn diag_every_ticks() -> u64 {
    env::var("DRIVE_SIM_DIAG_EVERY_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;
pub const UPDATE_BROADCAST_CAPACITY: usize = 128;

// The vehicle tuning constants assume this cadence; see VehicleTuning.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 30);
