// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{Event, EventColor, EventDraft, EventTiming, TimeOfDay};

/// What the event form is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new event on the given day.
    Create { date: NaiveDate },

    /// Editing an existing event, which may also be deleted.
    Edit { event: Event },
}

impl FormMode {
    /// The day the submitted event will be scheduled on.
    pub fn date(&self) -> NaiveDate {
        match self {
            FormMode::Create { date } => *date,
            FormMode::Edit { event } => event.date,
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create { .. })
    }

    pub fn can_delete(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }
}

/// Why a form submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("name is required")]
    EmptyName,

    #[error("start and end time are required unless the event is all day")]
    MissingTime,

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("end time must not be before start time")]
    EndBeforeStart,
}

/// The fields of the event form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFormData {
    pub name: String,
    pub all_day: bool,
    pub start_time: String,
    pub end_time: String,
    pub color: EventColor,
}

impl Default for EventFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            all_day: false,
            start_time: String::new(),
            end_time: String::new(),
            color: EventColor::PALETTE[0],
        }
    }
}

impl EventFormData {
    /// The initial fields for the given mode.
    pub fn new(mode: &FormMode) -> Self {
        match mode {
            FormMode::Create { .. } => Self::default(),
            FormMode::Edit { event } => Self::from_event(event),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            all_day: event.timing.is_all_day(),
            start_time: event
                .timing
                .start()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            end_time: event
                .timing
                .end()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            color: event.color,
        }
    }

    /// Validates the fields and assembles the event scheduled on `date`.
    ///
    /// Times are ignored for all-day events.
    pub fn validate(&self, date: NaiveDate) -> Result<EventDraft, FormError> {
        if self.name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let timing = if self.all_day {
            EventTiming::AllDay
        } else {
            let (start, end) = (self.start_time.trim(), self.end_time.trim());
            if start.is_empty() || end.is_empty() {
                return Err(FormError::MissingTime);
            }

            let start = parse_time(start)?;
            let end = parse_time(end)?;
            if end < start {
                return Err(FormError::EndBeforeStart);
            }
            EventTiming::Timed { start, end }
        };

        Ok(EventDraft {
            name: self.name.clone(),
            color: self.color,
            date,
            timing,
        })
    }
}

fn parse_time(s: &str) -> Result<TimeOfDay, FormError> {
    s.parse().map_err(|_| FormError::InvalidTime(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn timed_form(start: &str, end: &str) -> EventFormData {
        EventFormData {
            name: "Review".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_color_is_first_palette_entry() {
        let data = EventFormData::new(&FormMode::Create { date: date() });
        assert_eq!(data.color, EventColor::PALETTE[0]);
        assert!(!data.all_day);
        assert!(data.name.is_empty());
    }

    #[test]
    fn rejects_empty_name() {
        let data = EventFormData {
            all_day: true,
            ..Default::default()
        };
        assert_eq!(data.validate(date()), Err(FormError::EmptyName));
    }

    #[test]
    fn keeps_name_as_typed() {
        for name in ["   ", " Lunch "] {
            let data = EventFormData {
                name: name.to_string(),
                all_day: true,
                ..Default::default()
            };
            assert_eq!(data.validate(date()).unwrap().name, name);
        }
    }

    #[test]
    fn rejects_missing_times_unless_all_day() {
        assert_eq!(timed_form("", "10:00").validate(date()), Err(FormError::MissingTime));
        assert_eq!(timed_form("09:00", "").validate(date()), Err(FormError::MissingTime));

        let mut all_day = timed_form("", "");
        all_day.all_day = true;
        let draft = all_day.validate(date()).unwrap();
        assert_eq!(draft.timing, EventTiming::AllDay);
    }

    #[test]
    fn rejects_invalid_and_reversed_times() {
        assert_eq!(
            timed_form("9am", "10:00").validate(date()),
            Err(FormError::InvalidTime("9am".to_string()))
        );
        assert_eq!(
            timed_form("11:00", "10:00").validate(date()),
            Err(FormError::EndBeforeStart)
        );
    }

    #[test]
    fn builds_timed_draft() {
        let draft = timed_form("09:00", "09:00").validate(date()).unwrap();
        assert_eq!(draft.name, "Review");
        assert_eq!(draft.date, date());
        assert_eq!(
            draft.timing,
            EventTiming::Timed {
                start: TimeOfDay::new(9, 0).unwrap(),
                end: TimeOfDay::new(9, 0).unwrap(),
            }
        );
    }

    #[test]
    fn all_day_drops_typed_times() {
        let mut data = timed_form("11:00", "10:00");
        data.all_day = true;
        assert_eq!(data.validate(date()).unwrap().timing, EventTiming::AllDay);
    }

    #[test]
    fn edit_mode_prefills_from_event() {
        let event = Event {
            id: "x".into(),
            name: "Lunch".to_string(),
            color: EventColor::Green,
            date: date(),
            timing: EventTiming::Timed {
                start: TimeOfDay::new(12, 0).unwrap(),
                end: TimeOfDay::new(13, 30).unwrap(),
            },
        };
        let mode = FormMode::Edit {
            event: event.clone(),
        };

        let data = EventFormData::new(&mode);
        assert_eq!(data.name, "Lunch");
        assert_eq!(data.start_time, "12:00");
        assert_eq!(data.end_time, "13:30");
        assert_eq!(data.color, EventColor::Green);
        assert!(mode.can_delete());
        assert_eq!(data.validate(mode.date()).unwrap(), event.draft());
    }
}
