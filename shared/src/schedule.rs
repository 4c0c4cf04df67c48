//! Treatment and vaccination schedules.
//!
//! A [`ScheduleRecord`] is fetched read-only from the backend. Its display
//! [`Bucket`] is never stored: it is recomputed from the record's date, its
//! status and an injected reference date every time a list is filtered.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::animal::AnimalRef;

/// A planned veterinary action tied to one animal and one due date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(alias = "_id")]
    pub id: String,
    /// Bare animal id on list endpoints, populated animal on the detail endpoint
    pub animal_id: AnimalRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vaccine_name: Option<String>,
    /// Calendar date as sent by the backend; may be malformed
    #[serde(default)]
    pub scheduled_date: String,
    pub status: ScheduleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ScheduleRecord {
    /// Label shown in lists: schedule name, then vaccine name
    pub fn display_label(&self) -> &str {
        self.schedule_name
            .as_deref()
            .or(self.vaccine_name.as_deref())
            .filter(|label| !label.trim().is_empty())
            .unwrap_or("Untitled schedule")
    }

    /// The scheduled calendar day, or `None` when the date cannot be parsed
    pub fn scheduled_on(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.scheduled_date)
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_scheduled()
    }
}

/// Backend status of a schedule. Compared case-insensitively; values outside
/// the known set are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleStatus {
    Scheduled,
    Treated,
    Missed,
    Other(String),
}

impl ScheduleStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scheduled" => ScheduleStatus::Scheduled,
            "treated" => ScheduleStatus::Treated,
            "missed" => ScheduleStatus::Missed,
            _ => ScheduleStatus::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScheduleStatus::Scheduled => "scheduled",
            ScheduleStatus::Treated => "treated",
            ScheduleStatus::Missed => "missed",
            ScheduleStatus::Other(raw) => raw,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduleStatus::Scheduled)
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScheduleStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScheduleStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ScheduleStatus::parse(&raw))
    }
}

/// Display category derived from a record's date and status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Today,
    /// Still scheduled but the date has passed. Not the backend `missed` status.
    Missed,
    Upcoming,
    /// Any status other than `scheduled`
    Completed,
    /// Scheduled, but the date could not be parsed
    Undated,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Today => "today",
            Bucket::Missed => "missed",
            Bucket::Upcoming => "upcoming",
            Bucket::Completed => "completed",
            Bucket::Undated => "undated",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected narrowing of the schedule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScheduleFilter {
    #[default]
    All,
    Today,
    Missed,
    Upcoming,
}

impl ScheduleFilter {
    /// Tab order in the schedules view
    pub const ALL: [ScheduleFilter; 4] = [
        ScheduleFilter::All,
        ScheduleFilter::Today,
        ScheduleFilter::Missed,
        ScheduleFilter::Upcoming,
    ];

    /// Reads the `filter` URL query value. Absent or unknown values mean `All`.
    pub fn from_query_value(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleFilter::All => "all",
            ScheduleFilter::Today => "today",
            ScheduleFilter::Missed => "missed",
            ScheduleFilter::Upcoming => "upcoming",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScheduleFilter::All => "All",
            ScheduleFilter::Today => "Today",
            ScheduleFilter::Missed => "Missed",
            ScheduleFilter::Upcoming => "Upcoming",
        }
    }

    /// The bucket a record must fall into to pass this filter; `None` for `All`
    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            ScheduleFilter::All => None,
            ScheduleFilter::Today => Some(Bucket::Today),
            ScheduleFilter::Missed => Some(Bucket::Missed),
            ScheduleFilter::Upcoming => Some(Bucket::Upcoming),
        }
    }
}

impl fmt::Display for ScheduleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown schedule filter: {}", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for ScheduleFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ScheduleFilter::All),
            "today" => Ok(ScheduleFilter::Today),
            "missed" => Ok(ScheduleFilter::Missed),
            "upcoming" => Ok(ScheduleFilter::Upcoming),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// Parse a backend date into a calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the day is taken in the
/// timestamp's own offset) and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`.
/// Time of day is dropped.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Truncate "now" to the calendar day used as the classification reference
pub fn reference_date(now: NaiveDateTime) -> NaiveDate {
    now.date()
}

/// Map a record to its display bucket relative to `today`
pub fn classify(record: &ScheduleRecord, today: NaiveDate) -> Bucket {
    if !record.status.is_scheduled() {
        return Bucket::Completed;
    }

    match record.scheduled_on() {
        None => Bucket::Undated,
        Some(date) if date == today => Bucket::Today,
        Some(date) if date < today => Bucket::Missed,
        Some(_) => Bucket::Upcoming,
    }
}

/// Narrow `records` to the ones visible under `filter`, preserving order.
///
/// `All` returns every record. Bucket filters only ever return records that
/// are still `scheduled`.
pub fn apply_filter(
    records: &[ScheduleRecord],
    filter: ScheduleFilter,
    today: NaiveDate,
) -> Vec<&ScheduleRecord> {
    match filter.bucket() {
        None => records.iter().collect(),
        Some(bucket) => records
            .iter()
            .filter(|record| record.is_pending() && classify(record, today) == bucket)
            .collect(),
    }
}

/// Badge counts for the filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketCounts {
    pub all: usize,
    pub today: usize,
    pub missed: usize,
    pub upcoming: usize,
}

impl BucketCounts {
    pub fn get(&self, filter: ScheduleFilter) -> usize {
        match filter {
            ScheduleFilter::All => self.all,
            ScheduleFilter::Today => self.today,
            ScheduleFilter::Missed => self.missed,
            ScheduleFilter::Upcoming => self.upcoming,
        }
    }
}

pub fn bucket_counts(records: &[ScheduleRecord], today: NaiveDate) -> BucketCounts {
    records
        .iter()
        .fold(BucketCounts::default(), |mut counts, record| {
            counts.all += 1;
            match classify(record, today) {
                Bucket::Today => counts.today += 1,
                Bucket::Missed => counts.missed += 1,
                Bucket::Upcoming => counts.upcoming += 1,
                Bucket::Completed | Bucket::Undated => {}
            }
            counts
        })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    pub(crate) fn record(id: &str, date: &str, status: &str) -> ScheduleRecord {
        ScheduleRecord {
            id: id.to_string(),
            animal_id: AnimalRef::Id(format!("animal-{}", id)),
            schedule_name: Some(format!("Schedule {}", id)),
            vaccine_name: None,
            scheduled_date: date.to_string(),
            status: ScheduleStatus::parse(status),
            notes: None,
        }
    }

    fn ids(records: &[&ScheduleRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_classify_scheduled_by_date() {
        let today = day(2026, 3, 15);

        assert_eq!(classify(&record("a", "2026-03-15", "scheduled"), today), Bucket::Today);
        assert_eq!(classify(&record("b", "2026-03-14", "scheduled"), today), Bucket::Missed);
        assert_eq!(classify(&record("c", "2026-03-16", "scheduled"), today), Bucket::Upcoming);
        assert_eq!(classify(&record("d", "2025-12-31", "scheduled"), today), Bucket::Missed);
    }

    #[test]
    fn test_classify_non_scheduled_is_completed_regardless_of_date() {
        let today = day(2026, 3, 15);

        for date in ["2026-03-14", "2026-03-15", "2026-03-16", "garbage"] {
            assert_eq!(classify(&record("t", date, "treated"), today), Bucket::Completed);
            assert_eq!(classify(&record("m", date, "missed"), today), Bucket::Completed);
            assert_eq!(classify(&record("o", date, "postponed"), today), Bucket::Completed);
        }
    }

    #[test]
    fn test_classify_status_is_case_insensitive() {
        let today = day(2026, 3, 15);
        assert_eq!(classify(&record("a", "2026-03-15", "SCHEDULED"), today), Bucket::Today);
        assert_eq!(classify(&record("b", "2026-03-15", " Scheduled "), today), Bucket::Today);
        assert_eq!(classify(&record("c", "2026-03-15", "Treated"), today), Bucket::Completed);
    }

    #[test]
    fn test_classify_ignores_time_of_day() {
        let today = day(2026, 3, 15);

        assert_eq!(classify(&record("a", "2026-03-15T23:59:59Z", "scheduled"), today), Bucket::Today);
        assert_eq!(classify(&record("b", "2026-03-15T00:00:00.000Z", "scheduled"), today), Bucket::Today);
        assert_eq!(classify(&record("c", "2026-03-15T08:30:00", "scheduled"), today), Bucket::Today);
        assert_eq!(classify(&record("d", "2026-03-16T00:00:01+02:00", "scheduled"), today), Bucket::Upcoming);
    }

    #[test]
    fn test_classify_unparseable_date_is_undated() {
        let today = day(2026, 3, 15);

        assert_eq!(classify(&record("a", "not a date", "scheduled"), today), Bucket::Undated);
        assert_eq!(classify(&record("b", "", "scheduled"), today), Bucket::Undated);
        assert_eq!(classify(&record("c", "2026-02-30", "scheduled"), today), Bucket::Undated);
    }

    #[test]
    fn test_reference_date_truncates_to_midnight() {
        let now = day(2026, 3, 15).and_hms_opt(17, 45, 3).expect("valid time");
        assert_eq!(reference_date(now), day(2026, 3, 15));
    }

    #[test]
    fn test_apply_filter_scenario() {
        let today = day(2026, 3, 15);
        let records = vec![
            record("today", "2026-03-15", "scheduled"),
            record("yesterday", "2026-03-14", "scheduled"),
            record("tomorrow", "2026-03-16", "scheduled"),
            record("done", "2026-03-14", "treated"),
        ];

        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::Today, today)), vec!["today"]);
        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::Missed, today)), vec!["yesterday"]);
        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::Upcoming, today)), vec!["tomorrow"]);
        assert_eq!(
            ids(&apply_filter(&records, ScheduleFilter::All, today)),
            vec!["today", "yesterday", "tomorrow", "done"]
        );
    }

    #[test]
    fn test_apply_filter_excludes_unparseable_dates_from_buckets() {
        let today = day(2026, 3, 15);
        let records = vec![
            record("bad", "15/03/2026", "scheduled"),
            record("good", "2026-03-15", "scheduled"),
        ];

        for filter in [ScheduleFilter::Today, ScheduleFilter::Missed, ScheduleFilter::Upcoming] {
            assert!(!ids(&apply_filter(&records, filter, today)).contains(&"bad".to_string()));
        }
        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::All, today)), vec!["bad", "good"]);
    }

    #[test]
    fn test_apply_filter_is_idempotent_and_stable() {
        let today = day(2026, 3, 15);
        let records = vec![
            record("u2", "2026-04-01", "scheduled"),
            record("m1", "2026-03-01", "scheduled"),
            record("u1", "2026-03-20", "scheduled"),
            record("t1", "2026-03-20", "treated"),
            record("m2", "2026-03-14", "scheduled"),
        ];

        for filter in ScheduleFilter::ALL {
            let once: Vec<ScheduleRecord> = apply_filter(&records, filter, today)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<ScheduleRecord> = apply_filter(&once, filter, today)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice);
            assert!(once.len() <= records.len());
        }

        // Order follows the input, not the date
        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::Upcoming, today)), vec!["u2", "u1"]);
        assert_eq!(ids(&apply_filter(&records, ScheduleFilter::Missed, today)), vec!["m1", "m2"]);
    }

    #[test]
    fn test_bucket_counts() {
        let today = day(2026, 3, 15);
        let records = vec![
            record("a", "2026-03-15", "scheduled"),
            record("b", "2026-03-14", "scheduled"),
            record("c", "2026-03-13", "scheduled"),
            record("d", "2026-03-16", "scheduled"),
            record("e", "2026-03-15", "treated"),
            record("f", "???", "scheduled"),
        ];

        let counts = bucket_counts(&records, today);
        assert_eq!(counts, BucketCounts { all: 6, today: 1, missed: 2, upcoming: 1 });
        for filter in ScheduleFilter::ALL {
            assert_eq!(counts.get(filter), apply_filter(&records, filter, today).len());
        }
    }

    #[test]
    fn test_filter_from_query_value() {
        assert_eq!(ScheduleFilter::from_query_value(None), ScheduleFilter::All);
        assert_eq!(ScheduleFilter::from_query_value(Some("today")), ScheduleFilter::Today);
        assert_eq!(ScheduleFilter::from_query_value(Some("Missed")), ScheduleFilter::Missed);
        assert_eq!(ScheduleFilter::from_query_value(Some("upcoming")), ScheduleFilter::Upcoming);
        assert_eq!(ScheduleFilter::from_query_value(Some("overdue")), ScheduleFilter::All);
        assert_eq!(ScheduleFilter::from_query_value(Some("")), ScheduleFilter::All);

        for filter in ScheduleFilter::ALL {
            assert_eq!(filter.as_str().parse::<ScheduleFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_deserialize_list_record() {
        let json = r#"{
            "_id": "sch-1",
            "animalId": "cow-7",
            "vaccineName": "Brucellosis",
            "scheduledDate": "2026-03-15T00:00:00.000Z",
            "status": "Scheduled"
        }"#;

        let record: ScheduleRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.id, "sch-1");
        assert_eq!(record.animal_id.id(), "cow-7");
        assert_eq!(record.display_label(), "Brucellosis");
        assert_eq!(record.status, ScheduleStatus::Scheduled);
        assert_eq!(record.scheduled_on(), Some(day(2026, 3, 15)));
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_unknown_status_survives_round_trip_for_display() {
        let json = r#"{"id":"x","animalId":"a","scheduledDate":"2026-03-15","status":"Postponed"}"#;
        let record: ScheduleRecord = serde_json::from_str(json).expect("record should parse");

        assert_eq!(record.status, ScheduleStatus::Other("Postponed".to_string()));
        assert_eq!(record.status.to_string(), "Postponed");
        assert_eq!(record.display_label(), "Untitled schedule");
    }
}
