//! Hierarchical accounting and limiting of long-term page pins.
//!
//! Groups form a tree; each group holds an atomic pin counter and an
//! atomic limit. A charge lands on the group it is issued against and on
//! every strict ancestor below the root (the root itself is never
//! charged or limit-checked).
//!
//! Design notes:
//! - All counter mutations are wait-free atomics; the cost of an
//!   operation is one atomic per ancestor, never a lock.
//! - [`PinGroup::try_charge`] is optimistic add-then-check: a concurrent
//!   reader may briefly observe an over-limit value that is about to be
//!   rolled back. This is intentional.
//! - Migration ([`can_attach`] / [`cancel_attach`]) charges the
//!   destination before uncharging the source, so concurrent observers
//!   can see a transient over-count but never an under-count.
//! - Group lifecycle is owned by the embedding framework; parent links
//!   are non-owning [`std::sync::Weak`] references.

mod charge;
mod error;
mod files;
mod group;
mod migrate;
mod report;

pub use error::{Error, Result};
pub use files::{parse_limit, read_current, read_events, read_max, write_max, MAX_TOKEN};
pub use group::{PinGroup, PINS_MAX};
pub use migrate::{can_attach, cancel_attach};
pub use report::GroupReport;
