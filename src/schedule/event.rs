use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::errors::ScheduleError;

/// Swatch color a new event starts with.
pub const DEFAULT_EVENT_COLOR: &str = "#3788d8";

// Working-hours defaults applied when an all-day event becomes timed.
const TIMED_START_HOUR: u32 = 9;
const TIMED_END_HOUR: u32 = 18;

/// When an event happens. All-day events carry dates only, with an
/// inclusive end: a one-day event starts and ends on the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum EventSchedule {
    AllDay {
        start: NaiveDate,
        end: NaiveDate,
    },
    Timed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl EventSchedule {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let ordered = match self {
            Self::AllDay { start, end } => start <= end,
            Self::Timed { start, end } => start <= end,
        };
        if ordered {
            Ok(())
        } else {
            Err(ScheduleError::EndBeforeStart)
        }
    }

    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checking the all-day box keeps the dates and drops the times.
    #[must_use]
    pub fn into_all_day(self) -> Self {
        match self {
            all_day @ Self::AllDay { .. } => all_day,
            Self::Timed { start, end } => Self::AllDay {
                start: start.date(),
                end: end.date(),
            },
        }
    }

    /// Unchecking it reapplies the working-hours defaults to the kept dates.
    #[must_use]
    pub fn into_timed(self) -> Self {
        match self {
            timed @ Self::Timed { .. } => timed,
            Self::AllDay { start, end } => Self::Timed {
                start: start
                    .and_hms_opt(TIMED_START_HOUR, 0, 0)
                    .expect("valid literal time"),
                end: end
                    .and_hms_opt(TIMED_END_HOUR, 0, 0)
                    .expect("valid literal time"),
            },
        }
    }

    /// The calendar widget reports all-day ranges with an *exclusive* end
    /// date; a missing end means a single day.
    #[must_use]
    pub fn from_calendar_all_day(start: NaiveDate, exclusive_end: Option<NaiveDate>) -> Self {
        let end = exclusive_end
            .and_then(|end| end.checked_sub_days(Days::new(1)))
            .filter(|end| *end >= start)
            .unwrap_or(start);
        Self::AllDay { start, end }
    }

    /// Start formatted for the events endpoint: `%Y-%m-%dT%H:%M:%S` for
    /// timed events, a bare date for all-day ones. No zone suffix.
    #[must_use]
    pub fn server_start(&self) -> String {
        match self {
            Self::AllDay { start, .. } => start.format("%Y-%m-%d").to_string(),
            Self::Timed { start, .. } => start.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    #[must_use]
    pub fn server_end(&self) -> String {
        match self {
            Self::AllDay { end, .. } => end.format("%Y-%m-%d").to_string(),
            Self::Timed { end, .. } => end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Who can see a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    Private,
}

/// Form state of the event modal, validated before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub content: String,
    pub color: String,
    pub visibility: Visibility,
    pub schedule: EventSchedule,
}

impl EventDraft {
    /// A blank private draft with the default color.
    #[must_use]
    pub fn new(schedule: EventSchedule) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            color: DEFAULT_EVENT_COLOR.to_string(),
            visibility: Visibility::Private,
            schedule,
        }
    }

    #[tracing::instrument(name = "Validate event draft", skip(self), fields(title = %self.title))]
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.title.trim().is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        if !is_valid_color(&self.color) {
            return Err(ScheduleError::InvalidColor(self.color.clone()));
        }
        self.schedule.validate()
    }

    /// Applies the all-day checkbox to the draft's schedule.
    pub fn set_all_day(&mut self, all_day: bool) {
        self.schedule = if all_day {
            self.schedule.into_all_day()
        } else {
            self.schedule.into_timed()
        };
    }
}

/// A `#rrggbb` hex triplet, as the palette swatches carry.
fn is_valid_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
