// Drag model
// Typed payload for drag-to-reschedule, replacing raw day-string pairs

use crate::models::day::DayKey;

/// A drag-release reschedule request: move the event with `event_id`
/// from `source_day` to `destination_day`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source_day: DayKey,
    pub destination_day: DayKey,
    pub event_id: String,
}

impl MoveRequest {
    pub fn new(source_day: DayKey, destination_day: DayKey, event_id: impl Into<String>) -> Self {
        Self {
            source_day,
            destination_day,
            event_id: event_id.into(),
        }
    }

    /// A drop on the source cell is not a move; the drag handler skips it
    /// before ever reaching the store.
    pub fn validate(&self) -> Result<(), String> {
        if self.source_day == self.destination_day {
            return Err("Source and destination day are the same".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_distinct_days() {
        let request = MoveRequest::new(
            DayKey::from_ymd(2024, 5, 1).unwrap(),
            DayKey::from_ymd(2024, 5, 2).unwrap(),
            "evt-1",
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_same_day_drop() {
        let day = DayKey::from_ymd(2024, 5, 1).unwrap();
        let request = MoveRequest::new(day, day, "evt-1");
        assert!(request.validate().is_err());
    }
}
