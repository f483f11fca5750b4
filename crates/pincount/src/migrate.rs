use crate::group::PinGroup;

/// Move a task's already-held charge of `pinned` pins from `src` to
/// `dst` as part of reassigning the task to `dst`'s group.
///
/// The destination is charged before the source is uncharged, so
/// between the two phases the amount is counted in both hierarchies and
/// a concurrent observer sees a transient over-count, never an
/// under-count. Under-reporting could let another task slip past a
/// limit based on stale numbers.
///
/// Neither phase can fail, which means this does not enforce `dst`'s
/// limit against the migrating task; a caller that needs admission
/// control must check before invoking this. `pinned` is trusted as
/// supplied by the membership framework.
pub fn can_attach(dst: &PinGroup, src: &PinGroup, pinned: u64) {
    dst.charge(pinned);
    src.uncharge(pinned);
}

/// Exact inverse of [`can_attach`], for unwinding an aborted
/// reassignment after `can_attach` already ran.
///
/// Also unconditional and non-failing: an unwind must never itself be
/// rejectable.
pub fn cancel_attach(dst: &PinGroup, src: &PinGroup, pinned: u64) {
    src.charge(pinned);
    dst.uncharge(pinned);
}
