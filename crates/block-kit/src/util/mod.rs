//! Utility modules.

pub mod datetime;

pub use datetime::{
    Clock, DateTimeParseError, FixedClock, SystemClock, format_hh_mm, parse_calendar_date,
    parse_clock_time, round_up_to_five,
};
