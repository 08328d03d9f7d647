//! Date system selection.

use chrono::NaiveDate;

/// The date system used for serial number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateSystem {
    /// Windows default (1900-based, includes the phantom 1900-02-29)
    #[default]
    Date1900,
    /// Mac legacy (1904-based)
    Date1904,
}

impl DateSystem {
    /// Returns the epoch year for this date system.
    pub fn epoch_year(&self) -> i32 {
        match self {
            DateSystem::Date1900 => 1900,
            DateSystem::Date1904 => 1904,
        }
    }

    /// Returns true for the 1904 system.
    pub fn is_1904(&self) -> bool {
        matches!(self, DateSystem::Date1904)
    }

    /// Base date that whole serial days are added to on the linear path.
    pub fn epoch(&self) -> NaiveDate {
        match self {
            DateSystem::Date1900 => NaiveDate::from_ymd_opt(1899, 12, 30),
            DateSystem::Date1904 => NaiveDate::from_ymd_opt(1904, 1, 1),
        }
        .expect("valid epoch date")
    }

    /// Offset added to `serial + 0.5` to obtain a Julian date.
    ///
    /// For the 1900 system serial 0 lands on 1899-12-31, so serial 1 is
    /// 1900-01-01 and serial 60 is the day after 1900-02-28.
    pub fn julian_offset(&self) -> f64 {
        match self {
            DateSystem::Date1900 => 2_415_019.5,
            DateSystem::Date1904 => 2_416_480.5,
        }
    }
}

impl From<bool> for DateSystem {
    /// Maps the `date1904` workbook flag.
    fn from(date1904: bool) -> Self {
        if date1904 {
            DateSystem::Date1904
        } else {
            DateSystem::Date1900
        }
    }
}
