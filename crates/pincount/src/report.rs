use crate::group::{PinGroup, PINS_MAX};
use serde::{Deserialize, Serialize};

/// Snapshot of one group's counters intended for telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GroupReport {
    pub name: String,
    pub current: i64,
    /// `None` when the group is unlimited.
    pub limit: Option<u64>,
    pub events_threshold: u64,
}

impl PinGroup {
    /// Point-in-time snapshot; eventually consistent with concurrent
    /// charge activity.
    pub fn report(&self) -> GroupReport {
        let limit = match self.limit() {
            PINS_MAX => None,
            limit => Some(limit),
        };
        GroupReport {
            name: self.name().to_string(),
            current: self.current(),
            limit,
            events_threshold: self.events_threshold(),
        }
    }
}
