// Test fixtures - reusable test data
// Provides consistent test data across all test files

use event_calendar::models::day::DayKey;
use event_calendar::models::event::{Event, EventColor};

/// Sample day keys for testing
pub mod days {
    use super::*;

    pub fn may_first() -> DayKey {
        DayKey::from_ymd(2024, 5, 1).unwrap()
    }

    pub fn may_second() -> DayKey {
        DayKey::from_ymd(2024, 5, 2).unwrap()
    }

    pub fn may_ninth() -> DayKey {
        DayKey::from_ymd(2024, 5, 9).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A plain morning meeting
    pub fn team_sync() -> Event {
        Event::builder()
            .id("team-sync")
            .name("Team sync")
            .start_time("09:00")
            .end_time("09:30")
            .description("Weekly planning round")
            .color(EventColor::Green)
            .build()
            .unwrap()
    }

    /// An appointment with no description
    pub fn dentist() -> Event {
        Event::builder()
            .id("dentist")
            .name("Dentist")
            .start_time("14:00")
            .end_time("15:00")
            .color(EventColor::Red)
            .build()
            .unwrap()
    }

    /// An all-afternoon workshop
    pub fn workshop() -> Event {
        Event::builder()
            .id("workshop")
            .name("Design workshop")
            .start_time("13:00")
            .end_time("17:00")
            .description("Team offsite preparation")
            .color(EventColor::Purple)
            .build()
            .unwrap()
    }
}
