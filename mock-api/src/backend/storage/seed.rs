//! Fixture data, dated relative to the day the server starts so that every
//! bucket of the schedules view has something in it.

use chrono::{Duration, NaiveDate};
use shared::{AnimalRef, AnimalSummary, HealthStatus, Notification, ScheduleRecord, ScheduleStatus};

use super::memory::InMemoryStore;

fn animal(id: &str, tag: &str, name: &str, species: &str, health: HealthStatus) -> AnimalSummary {
    AnimalSummary {
        id: id.to_string(),
        tag_number: Some(tag.to_string()),
        name: Some(name.to_string()),
        species: Some(species.to_string()),
        health_status: Some(health),
    }
}

fn schedule(
    id: &str,
    animal_id: &str,
    label: &str,
    date: String,
    status: ScheduleStatus,
    notes: Option<&str>,
) -> ScheduleRecord {
    let is_vaccine = label.ends_with("vaccine");
    ScheduleRecord {
        id: id.to_string(),
        animal_id: AnimalRef::Id(animal_id.to_string()),
        schedule_name: (!is_vaccine).then(|| label.to_string()),
        vaccine_name: is_vaccine.then(|| label.to_string()),
        scheduled_date: date,
        status,
        notes: notes.map(str::to_string),
    }
}

fn offset(today: NaiveDate, days: i64) -> String {
    (today + Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn fixture_schedules(today: NaiveDate) -> Vec<ScheduleRecord> {
    vec![
        schedule("sch-001", "cow-101", "FMD vaccine", offset(today, 0), ScheduleStatus::Scheduled, None),
        schedule(
            "sch-002",
            "cow-102",
            "Mastitis follow-up",
            format!("{}T09:30:00.000Z", offset(today, 0)),
            ScheduleStatus::Scheduled,
            Some("Check left rear quarter"),
        ),
        schedule("sch-003", "goat-201", "Deworming", offset(today, -1), ScheduleStatus::Scheduled, None),
        schedule("sch-004", "cow-101", "Hoof trimming", offset(today, -6), ScheduleStatus::Scheduled, None),
        schedule("sch-005", "sheep-301", "Clostridial vaccine", offset(today, 1), ScheduleStatus::Scheduled, None),
        schedule("sch-006", "goat-201", "Booster vaccine", offset(today, 14), ScheduleStatus::Scheduled, None),
        schedule("sch-007", "cow-102", "Antibiotic course", offset(today, -2), ScheduleStatus::Treated, None),
        schedule("sch-008", "sheep-301", "Foot bath", offset(today, -3), ScheduleStatus::Missed, None),
        schedule(
            "sch-009",
            "sheep-301",
            "Pregnancy scan",
            "TBD".to_string(),
            ScheduleStatus::Scheduled,
            Some("Vet to confirm date"),
        ),
    ]
}

pub fn fixture_animals() -> Vec<AnimalSummary> {
    vec![
        animal("cow-101", "A-101", "Daisy", "cattle", HealthStatus::Healthy),
        animal("cow-102", "A-102", "Bessie", "cattle", HealthStatus::Sick),
        animal("goat-201", "G-201", "Pepper", "goat", HealthStatus::Recovering),
        animal("sheep-301", "S-301", "Clover", "sheep", HealthStatus::Healthy),
    ]
}

pub fn fixture_notifications(today: NaiveDate) -> Vec<Notification> {
    let stamp = |days: i64| format!("{}T07:00:00Z", offset(today, days));
    vec![
        Notification {
            id: "ntf-1".to_string(),
            message: "FMD vaccine due today for Daisy (#A-101)".to_string(),
            read: false,
            created_at: Some(stamp(0)),
        },
        Notification {
            id: "ntf-2".to_string(),
            message: "Deworming for Pepper (#G-201) is overdue".to_string(),
            read: false,
            created_at: Some(stamp(0)),
        },
        Notification {
            id: "ntf-3".to_string(),
            message: "Antibiotic course recorded for Bessie (#A-102)".to_string(),
            read: true,
            created_at: Some(stamp(-2)),
        },
    ]
}

/// A store filled with the fixtures above
pub async fn seeded_store(today: NaiveDate) -> InMemoryStore {
    let store = InMemoryStore::new();
    for animal in fixture_animals() {
        store.insert_animal(animal).await;
    }
    for schedule in fixture_schedules(today) {
        store.insert_schedule(schedule).await;
    }
    store.replace_notifications(fixture_notifications(today)).await;
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{apply_filter, ScheduleFilter};

    #[test]
    fn test_fixtures_cover_every_bucket() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let schedules = fixture_schedules(today);

        assert_eq!(apply_filter(&schedules, ScheduleFilter::Today, today).len(), 2);
        assert_eq!(apply_filter(&schedules, ScheduleFilter::Missed, today).len(), 2);
        assert_eq!(apply_filter(&schedules, ScheduleFilter::Upcoming, today).len(), 2);
        assert_eq!(apply_filter(&schedules, ScheduleFilter::All, today).len(), schedules.len());
    }

    #[test]
    fn test_fixture_schedules_reference_known_animals() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let animals = fixture_animals();
        for schedule in fixture_schedules(today) {
            assert!(animals.iter().any(|a| a.id == schedule.animal_id.id()), "{}", schedule.id);
        }
    }
}
