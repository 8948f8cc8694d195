#![allow(dead_code)]

pub mod mock_data;

use helpdesk::display::DisplayOptions;
use jiff::tz::TimeZone;

/// Uncolored output in UTC so rendered text is stable
pub fn plain_options() -> DisplayOptions {
    DisplayOptions::plain(TimeZone::UTC)
}
