use crate::error::{Error, Result};
use crate::group::{PinGroup, PINS_MAX};
use std::sync::Arc;

impl PinGroup {
    /// Hierarchically charge `n` pins, subject to the configured limits.
    ///
    /// Walks from this group up to (not including) the root. Each hop is
    /// a single fetch-add followed by a limit read: the add is applied
    /// first, so a concurrent reader can briefly observe an over-limit
    /// value that this call is about to roll back.
    ///
    /// On failure every node this call charged is rolled back,
    /// nearest-first, by exactly the delta this call applied; counters
    /// are then numerically identical to their pre-call values as far
    /// as this call is concerned.
    pub fn try_charge(&self, n: u64) -> Result<()> {
        let delta = n as i64;
        let mut charged: Vec<Arc<PinGroup>> = Vec::new();

        for p in self.walk_charged() {
            let new = p.usage_add(delta);
            let limit = p.limit();

            // The counter is signed and the limit unsigned; the cast
            // makes a (caller-bug) negative counter compare as huge and
            // trip the limit path instead of admitting charges.
            if limit != PINS_MAX && new as u64 > limit {
                for q in &charged {
                    q.cancel(n);
                }
                p.cancel(n);
                tracing::debug!(
                    target: "pincount",
                    group = %p.name(),
                    limit,
                    amount = n,
                    "charge denied by pin limit"
                );
                return Err(Error::LimitExceeded {
                    group: p.name().to_string(),
                    limit,
                    amount: n,
                });
            }

            charged.push(p);
        }

        Ok(())
    }

    /// Hierarchically charge `n` pins with no limit check.
    ///
    /// Cannot fail; the new counts may exceed limits. Only used where
    /// failure is not an option, i.e. the migration paths that must be
    /// able to move or revert an already-held charge unconditionally.
    pub fn charge(&self, n: u64) {
        let delta = n as i64;
        for p in self.walk_charged() {
            p.usage_add(delta);
        }
    }

    /// Hierarchically uncharge `n` pins.
    ///
    /// The inverse of a prior successful charge: always succeeds and
    /// never checks limits.
    pub fn uncharge(&self, n: u64) {
        for p in self.walk_charged() {
            p.cancel(n);
        }
    }
}
