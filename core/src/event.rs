// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::datetime::{STABLE_FORMAT_DATEONLY, STABLE_FORMAT_TIME};

/// The unique identifier of an event, assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The fixed color palette of events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl EventColor {
    /// All colors in palette order, the first one is the default.
    pub const PALETTE: [EventColor; 3] = [EventColor::Red, EventColor::Green, EventColor::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Red => "red",
            EventColor::Green => "green",
            EventColor::Blue => "blue",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventColor::PALETTE
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown event color: {s}"))
    }
}

/// A wall-clock time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STABLE_FORMAT_TIME))
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // time inputs may carry seconds, which are dropped
        let time = NaiveTime::parse_from_str(s, STABLE_FORMAT_TIME)
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))?;
        Ok(Self(time.with_second(0).unwrap_or(time)))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        Self(value.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(value))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// When an event happens within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    /// The event covers the whole calendar day.
    AllDay,

    /// The event happens between two times of the day.
    Timed { start: TimeOfDay, end: TimeOfDay },
}

impl EventTiming {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTiming::AllDay)
    }

    pub fn start(&self) -> Option<TimeOfDay> {
        match self {
            EventTiming::AllDay => None,
            EventTiming::Timed { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<TimeOfDay> {
        match self {
            EventTiming::AllDay => None,
            EventTiming::Timed { end, .. } => Some(*end),
        }
    }
}

/// The details of an event without its identifier, used for creating and
/// replacing events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub color: EventColor,
    pub date: NaiveDate,
    pub timing: EventTiming,
}

/// A day-scoped calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub color: EventColor,
    pub date: NaiveDate,
    pub timing: EventTiming,
}

impl Event {
    pub fn new(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            date: draft.date,
            timing: draft.timing,
        }
    }

    /// The details of this event without its identifier.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            color: self.color,
            date: self.date,
            timing: self.timing,
        }
    }
}

/// Errors of a persisted event record that cannot become an [`Event`].
#[derive(Debug, thiserror::Error)]
pub enum EventRecordError {
    #[error("timed event {0} must have both a start time and an end time")]
    MissingTime(String),
}

/// The persisted shape of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: String,
    name: String,
    color: EventColor,
    #[serde(with = "record_date")]
    date: NaiveDate,
    all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<TimeOfDay>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventRecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let timing = match (record.all_day, record.start_time, record.end_time) {
            (true, _, _) => EventTiming::AllDay,
            (false, Some(start), Some(end)) => EventTiming::Timed { start, end },
            (false, _, _) => return Err(EventRecordError::MissingTime(record.id)),
        };

        Ok(Event {
            id: record.id.into(),
            name: record.name,
            color: record.color,
            date: record.date,
            timing,
        })
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        EventRecord {
            id: event.id.0,
            name: event.name,
            color: event.color,
            date: event.date,
            all_day: event.timing.is_all_day(),
            start_time: event.timing.start(),
            end_time: event.timing.end(),
        }
    }
}

/// Dates are written as `YYYY-MM-DD`. Full timestamps, as produced by
/// JavaScript's `Date#toJSON`, are accepted on read and mapped to the local
/// calendar day.
mod record_date {
    use super::*;

    pub fn serialize<S: serde::Serializer>(
        date: &NaiveDate,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(STABLE_FORMAT_DATEONLY))
    }

    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
    }

    pub fn parse(s: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY) {
            return Some(date);
        }

        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_time_of_day() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t, TimeOfDay::new(9, 30).unwrap());
        assert_eq!(t.to_string(), "09:30");

        let t: TimeOfDay = "18:05:42".parse().unwrap();
        assert_eq!(t.to_string(), "18:05");

        assert!("".parse::<TimeOfDay>().is_err());
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn parses_color_case_insensitively() {
        assert_eq!("Green".parse::<EventColor>().unwrap(), EventColor::Green);
        assert_eq!(" blue ".parse::<EventColor>().unwrap(), EventColor::Blue);
        assert!("purple".parse::<EventColor>().is_err());
        assert_eq!(EventColor::default(), EventColor::PALETTE[0]);
    }

    #[test]
    fn serializes_timed_event_with_camel_case_fields() {
        let event = Event {
            id: "a1".into(),
            name: "Standup".to_string(),
            color: EventColor::Blue,
            date: date(2026, 10, 17),
            timing: EventTiming::Timed {
                start: TimeOfDay::new(9, 0).unwrap(),
                end: TimeOfDay::new(9, 15).unwrap(),
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "a1",
                "name": "Standup",
                "color": "blue",
                "date": "2026-10-17",
                "allDay": false,
                "startTime": "09:00",
                "endTime": "09:15",
            })
        );
    }

    #[test]
    fn all_day_event_omits_times() {
        let event = Event {
            id: "b2".into(),
            name: "Holiday".to_string(),
            color: EventColor::Green,
            date: date(2026, 12, 25),
            timing: EventTiming::AllDay,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["allDay"], true);
        assert!(value.get("startTime").is_none());
        assert!(value.get("endTime").is_none());
    }

    #[test]
    fn all_day_record_ignores_stray_times() {
        let json = r#"{"id":"c3","name":"Trip","color":"red","date":"2026-01-02","allDay":true,"startTime":"10:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.timing, EventTiming::AllDay);
    }

    #[test]
    fn timed_record_without_end_is_rejected() {
        let json = r#"{"id":"d4","name":"Call","color":"red","date":"2026-01-02","allDay":false,"startTime":"10:00"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn accepts_javascript_timestamps_as_dates() {
        let local = Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let json = format!(
            r#"{{"id":"e5","name":"Pi","color":"green","date":"{}","allDay":true}}"#,
            local.to_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ")
        );
        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event.date, date(2026, 3, 14));
    }

    #[test]
    fn rejects_garbage_dates() {
        let json = r#"{"id":"f6","name":"?","color":"red","date":"someday","allDay":true}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(EventId::generate(), EventId::generate());
    }
}
