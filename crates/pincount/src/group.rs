use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Reserved limit value meaning "no ceiling enforced".
pub const PINS_MAX: u64 = u64::MAX;

/// One node in the group tree.
///
/// The counter is signed so that an over-uncharge by a buggy caller
/// shows up as a negative value (logged and counted, never fatal)
/// instead of wrapping silently. The limit is unsigned with
/// [`PINS_MAX`] as the unlimited sentinel.
pub struct PinGroup {
    name: String,
    usage: AtomicI64,
    limit: AtomicU64,
    events_threshold: AtomicU64,
    underflows: AtomicU64,
    parent: Option<Weak<PinGroup>>,
    // Set by `Arc::new_cyclic`; lets `&self` methods hand out owned
    // handles for the upward walk.
    weak_self: Weak<PinGroup>,
}

impl PinGroup {
    /// Create the distinguished root group.
    ///
    /// The root is excluded from charging by contract: the upward walk
    /// visits a node only when it has a parent, so the root's own
    /// counter is never charged, checked, or required.
    pub fn root(name: impl Into<String>) -> Arc<Self> {
        Self::new(name.into(), None)
    }

    /// Create a child group under `parent`.
    ///
    /// New groups start with zero usage, an unlimited limit and a zero
    /// events threshold. The parent link is non-owning; the caller is
    /// responsible for keeping `parent` alive while this group may
    /// still be walked.
    pub fn child(parent: &Arc<Self>, name: impl Into<String>) -> Arc<Self> {
        Self::new(name.into(), Some(Arc::downgrade(parent)))
    }

    fn new(name: String, parent: Option<Weak<PinGroup>>) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            name,
            usage: AtomicI64::new(0),
            limit: AtomicU64::new(PINS_MAX),
            events_threshold: AtomicU64::new(0),
            underflows: AtomicU64::new(0),
            parent,
            weak_self: weak_self.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point-in-time snapshot of the pin count; eventually consistent
    /// with concurrent charge activity.
    pub fn current(&self) -> i64 {
        self.usage.load(Ordering::Relaxed)
    }

    pub fn limit(&self) -> u64 {
        self.limit.load(Ordering::Relaxed)
    }

    /// Store a limit verbatim, including the [`PINS_MAX`] sentinel.
    ///
    /// A plain atomic store: updates are deliberately not coordinated
    /// with in-flight charges, so a racing charge may be decided under
    /// either the old or the new limit.
    pub fn set_limit(&self, limit: u64) {
        self.limit.store(limit, Ordering::Relaxed);
    }

    pub fn events_threshold(&self) -> u64 {
        self.events_threshold.load(Ordering::Relaxed)
    }

    /// Configure the events threshold. The value is stored and reported
    /// only; no charge path increments or consults it.
    pub fn set_events_threshold(&self, value: u64) {
        self.events_threshold.store(value, Ordering::Relaxed);
    }

    /// Number of times this group's counter went negative, which
    /// indicates unbalanced charge/uncharge calls in a caller.
    pub fn underflow_count(&self) -> u64 {
        self.underflows.load(Ordering::Relaxed)
    }

    pub fn parent(&self) -> Option<Arc<PinGroup>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    /// Subtract `n` from this group's counter only (not hierarchical).
    ///
    /// A negative result means a caller charged and uncharged
    /// mismatched amounts; that is reported as a warning plus an
    /// underflow count and accounting continues degraded rather than
    /// aborting.
    pub fn cancel(&self, n: u64) {
        let delta = n as i64;
        let new = self.usage.fetch_sub(delta, Ordering::Relaxed) - delta;
        if new < 0 {
            self.underflows.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(
                target: "pincount",
                group = %self.name,
                amount = n,
                usage = new,
                "pin count went negative; charge/uncharge calls are unbalanced"
            );
        }
    }

    /// Add `delta` to this group's counter and return the new value.
    pub(crate) fn usage_add(&self, delta: i64) -> i64 {
        self.usage.fetch_add(delta, Ordering::Relaxed) + delta
    }

    /// Walk from this group upward, yielding every node that has a
    /// parent. The root never satisfies that condition, so it is never
    /// yielded.
    pub(crate) fn walk_charged(&self) -> ChargedAncestors {
        ChargedAncestors {
            next: self.weak_self.upgrade(),
        }
    }
}

impl std::fmt::Debug for PinGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinGroup")
            .field("name", &self.name)
            .field("usage", &self.current())
            .field("limit", &self.limit())
            .field("events_threshold", &self.events_threshold())
            .finish()
    }
}

pub(crate) struct ChargedAncestors {
    next: Option<Arc<PinGroup>>,
}

impl Iterator for ChargedAncestors {
    type Item = Arc<PinGroup>;

    fn next(&mut self) -> Option<Arc<PinGroup>> {
        let node = self.next.take()?;
        let parent = node.parent.as_ref()?;
        self.next = parent.upgrade();
        Some(node)
    }
}
