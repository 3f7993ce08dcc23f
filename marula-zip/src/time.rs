//! MS-DOS packed date/time encoding for ZIP headers.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// A date/time pair packed into the legacy 16-bit MS-DOS fields that ZIP
/// local and central headers carry.
///
/// Date: `(year - 1980) << 9 | month << 5 | day`.
/// Time: `hour << 11 | minute << 5 | second / 2` (2-second resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime {
    /// Packed date field.
    pub date: u16,
    /// Packed time field.
    pub time: u16,
}

impl DosDateTime {
    /// Pack a UTC instant into DOS date/time fields.
    ///
    /// The DOS epoch starts at 1980; earlier instants clamp to
    /// 1980-01-01 00:00:00 rather than wrapping.
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        let year = datetime.year();
        if year < 1980 {
            return Self {
                date: 1 << 5 | 1,
                time: 0,
            };
        }

        let date = (((year - 1980) as u16) << 9)
            | ((datetime.month() as u16) << 5)
            | datetime.day() as u16;
        let time = ((datetime.hour() as u16) << 11)
            | ((datetime.minute() as u16) << 5)
            | (datetime.second() as u16 / 2);

        Self { date, time }
    }

    /// Pack the current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }
}
