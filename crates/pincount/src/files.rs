//! Value semantics of the control-file surface (`pins.max`,
//! `pins.current`, `pins.events`). Transport and file plumbing belong
//! to the embedding framework; this module only parses and formats.

use crate::error::{Error, Result};
use crate::group::{PinGroup, PINS_MAX};

/// Literal accepted and emitted for an unlimited `pins.max`.
pub const MAX_TOKEN: &str = "max";

/// Parse a `pins.max` write.
///
/// Accepts the [`MAX_TOKEN`] literal or a decimal non-negative integer
/// strictly below the unlimited sentinel. This is a pure helper; it
/// does not touch any group.
pub fn parse_limit(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    if raw == MAX_TOKEN {
        return Ok(PINS_MAX);
    }

    let limit: u64 = raw
        .parse()
        .map_err(|_| Error::InvalidLimit(raw.to_string()))?;
    if limit == PINS_MAX {
        // The sentinel is reserved; it can only be requested as `max`.
        return Err(Error::InvalidLimit(raw.to_string()));
    }

    Ok(limit)
}

/// Apply a `pins.max` write to `group`.
pub fn write_max(group: &PinGroup, raw: &str) -> Result<()> {
    let limit = parse_limit(raw)?;
    group.set_limit(limit);
    Ok(())
}

/// Format `pins.max` for reading.
pub fn read_max(group: &PinGroup) -> String {
    match group.limit() {
        PINS_MAX => MAX_TOKEN.to_string(),
        limit => limit.to_string(),
    }
}

/// Format `pins.current` for reading.
pub fn read_current(group: &PinGroup) -> String {
    group.current().to_string()
}

/// Format `pins.events` for reading.
pub fn read_events(group: &PinGroup) -> String {
    format!("max {}", group.events_threshold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_max_token() {
        assert_eq!(parse_limit("0"), Ok(0));
        assert_eq!(parse_limit("8"), Ok(8));
        assert_eq!(parse_limit(" 42\n"), Ok(42));
        assert_eq!(parse_limit("max"), Ok(PINS_MAX));
        assert_eq!(parse_limit("  max  "), Ok(PINS_MAX));
    }

    #[test]
    fn rejects_negative_garbage_and_sentinel_collisions() {
        for raw in ["-1", "-9", "", "maxx", "0x10", "1 2", "18446744073709551615"] {
            assert_eq!(parse_limit(raw), Err(Error::InvalidLimit(raw.trim().to_string())));
        }
    }

    #[test]
    fn formats_limit_current_and_events() {
        let group = PinGroup::root("root");
        assert_eq!(read_max(&group), "max");
        assert_eq!(read_current(&group), "0");
        assert_eq!(read_events(&group), "max 0");

        write_max(&group, "16").unwrap();
        assert_eq!(read_max(&group), "16");

        group.set_events_threshold(3);
        assert_eq!(read_events(&group), "max 3");

        write_max(&group, "max").unwrap();
        assert_eq!(read_max(&group), "max");
    }

    #[test]
    fn rejected_write_leaves_limit_untouched() {
        let group = PinGroup::root("root");
        write_max(&group, "7").unwrap();
        assert!(write_max(&group, "-5").is_err());
        assert_eq!(group.limit(), 7);
    }
}
