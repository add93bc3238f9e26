//! # Event Vocabulary
//!
//! Standard event-type and actor names. Both are open enumerations: the
//! ledger accepts any non-empty string, these are the conventional values.

/// Standard flight event types.
pub mod event_types {
    pub const SCHEDULED: &str = "SCHEDULED";
    pub const GATE_ASSIGNED: &str = "GATE_ASSIGNED";
    pub const CHECK_IN_OPEN: &str = "CHECK_IN_OPEN";
    pub const CHECK_IN_CLOSED: &str = "CHECK_IN_CLOSED";
    pub const BOARDING_OPEN: &str = "BOARDING_OPEN";
    pub const BOARDING_CLOSED: &str = "BOARDING_CLOSED";
    pub const PUSHBACK: &str = "PUSHBACK";
    pub const TAXI_OUT: &str = "TAXI_OUT";
    pub const TAKEOFF: &str = "TAKEOFF";
    pub const AIRBORNE: &str = "AIRBORNE";
    pub const DEPARTURE: &str = "DEPARTURE";
    pub const CRUISE: &str = "CRUISE";
    pub const DESCENT: &str = "DESCENT";
    pub const APPROACH: &str = "APPROACH";
    pub const LANDING: &str = "LANDING";
    pub const TAXI_IN: &str = "TAXI_IN";
    pub const ARRIVAL: &str = "ARRIVAL";
    pub const GATE_ARRIVAL: &str = "GATE_ARRIVAL";
    pub const DELAY_ANNOUNCED: &str = "DELAY_ANNOUNCED";
    pub const GATE_CHANGE: &str = "GATE_CHANGE";
    pub const CANCELLED: &str = "CANCELLED";
    pub const DIVERTED: &str = "DIVERTED";
}

/// Standard event actors.
pub mod actors {
    pub const SYSTEM: &str = "SYSTEM";
    pub const AIRLINE: &str = "AIRLINE";
    pub const ATC: &str = "ATC";
    pub const AIRPORT: &str = "AIRPORT";
    pub const GATE_AGENT: &str = "GATE_AGENT";
    pub const PILOT: &str = "PILOT";
    pub const GROUND_CREW: &str = "GROUND_CREW";
    pub const WEATHER: &str = "WEATHER";
}
