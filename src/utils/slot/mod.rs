//! Slot and time coordinate conversions for the 24-hour day grid.
//!
//! Three coordinate systems cover the same axis: wall-clock times, vertical
//! pixel offsets within a fixed-height day column, and discrete 15-minute
//! slot indices 0-95. All conversions clamp out-of-range input at both ends,
//! so hour 24 / slot 96 can never be produced. Minutes that fall between
//! slot boundaries round to the nearest slot, ties rounding up.

use chrono::{NaiveTime, Timelike};

/// Minutes covered by one grid slot.
pub const SLOT_INTERVAL_MINUTES: u32 = 15;
/// Slots per hour.
pub const SLOTS_PER_HOUR: u32 = 4;
/// Slots in a full 24-hour day.
pub const SLOT_COUNT: usize = 96;
/// Height of one slot in pixels.
pub const SLOT_HEIGHT: f32 = 30.0;
/// Height of one hour in pixels.
pub const HOUR_HEIGHT: f32 = SLOT_HEIGHT * SLOTS_PER_HOUR as f32;
/// Total height of the day column in pixels.
pub const DAY_HEIGHT: f32 = HOUR_HEIGHT * 24.0;

/// Prefix shared by every calendar slot droppable id.
pub const SLOT_ID_PREFIX: &str = "calendar-slot-";

/// Vertical pixel offset of a wall-clock time within the day column.
pub fn time_to_pixels(time: NaiveTime) -> f32 {
    let minutes = time.hour() * 60 + time.minute();
    minutes as f32 / 60.0 * HOUR_HEIGHT
}

/// Convert a pixel offset back to a wall-clock time on a 15-minute boundary.
///
/// Inverse of [`time_to_pixels`] for slot-aligned times. Offsets above the
/// column clamp to 00:00, offsets at or below the bottom clamp to 23:45.
pub fn pixels_to_time(pixels: f32) -> NaiveTime {
    slot_index_to_time(pixels_to_slot_index(pixels))
}

/// Nearest slot index for a pixel offset, clamped to `[0, 95]`.
pub fn pixels_to_slot_index(pixels: f32) -> usize {
    if pixels <= 0.0 {
        return 0;
    }
    // f32::round is half-away-from-zero; pixels are positive here, so a
    // pointer exactly between two slot boundaries rounds to the later slot.
    let index = (pixels / SLOT_HEIGHT).round() as usize;
    index.min(SLOT_COUNT - 1)
}

/// Wall-clock time at the start of a slot. Indices past the last slot clamp
/// to 23:45.
pub fn slot_index_to_time(index: usize) -> NaiveTime {
    let clamped = index.min(SLOT_COUNT - 1) as u32;
    let hour = clamped / SLOTS_PER_HOUR;
    let minute = (clamped % SLOTS_PER_HOUR) * SLOT_INTERVAL_MINUTES;
    // hour < 24 and minute < 60 by construction
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Nearest slot index for a wall-clock time, clamped to `[0, 95]`.
///
/// Round-trips exactly with [`slot_index_to_time`] for all 96 valid indices.
/// Non-aligned minutes round to the nearest slot (23:53 and later clamp to
/// the 23:45 slot rather than wrapping to midnight). Seconds are ignored.
pub fn time_to_slot_index(time: NaiveTime) -> usize {
    let minutes = time.hour() * 60 + time.minute();
    let index = (minutes + SLOT_INTERVAL_MINUTES / 2) / SLOT_INTERVAL_MINUTES;
    (index as usize).min(SLOT_COUNT - 1)
}

/// Number of slots a duration occupies, rounded up. Never zero for positive
/// durations.
pub fn slot_span(duration_minutes: i64) -> usize {
    if duration_minutes <= 0 {
        return 0;
    }
    ((duration_minutes + SLOT_INTERVAL_MINUTES as i64 - 1) / SLOT_INTERVAL_MINUTES as i64) as usize
}

/// Textual droppable id for the slot starting at `hour`:`minute`, e.g.
/// `calendar-slot-0930`.
pub fn format_slot_id(hour: u32, minute: u32) -> String {
    format!("{}{:02}{:02}", SLOT_ID_PREFIX, hour, minute)
}

/// Droppable id for the slot containing `time`.
pub fn slot_id_for_time(time: NaiveTime) -> String {
    let start = slot_index_to_time(time_to_slot_index(time));
    format_slot_id(start.hour(), start.minute())
}

/// Parse a slot droppable id back into its wall-clock start time.
///
/// Returns `None` for a wrong prefix, a suffix that is not exactly four
/// digits, an hour outside 0-23, or a minute not on a 15-minute boundary.
/// Never panics: the input originates from UI gesture libraries whose
/// invariants are not guaranteed.
pub fn parse_slot_id(id: &str) -> Option<NaiveTime> {
    let suffix = id.strip_prefix(SLOT_ID_PREFIX)?;
    if suffix.len() != 4 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = suffix[..2].parse().ok()?;
    let minute: u32 = suffix[2..].parse().ok()?;
    if hour > 23 || minute >= 60 || minute % SLOT_INTERVAL_MINUTES != 0 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Pixel offset of the current-time indicator line.
pub fn current_time_offset(now: NaiveTime) -> f32 {
    time_to_pixels(now)
}

/// Initial scroll position for the day view: one hour above the current
/// time, floored at the top of the column.
pub fn initial_scroll_offset(now: NaiveTime) -> f32 {
    (time_to_pixels(now) - HOUR_HEIGHT).max(0.0)
}
