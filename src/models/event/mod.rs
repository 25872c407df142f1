// Event module
// Calendar event model matching the persisted snapshot shape

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display color for an event marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl EventColor {
    pub const ALL: [EventColor; 5] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Yellow,
        EventColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Red => "red",
            EventColor::Yellow => "yellow",
            EventColor::Purple => "purple",
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
        match s {
            "blue" => Ok(EventColor::Blue),
            "green" => Ok(EventColor::Green),
            "red" => Ok(EventColor::Red),
            "yellow" => Ok(EventColor::Yellow),
            "purple" => Ok(EventColor::Purple),
            other => Err(format!(
                "Unknown color '{}' (expected blue, green, red, yellow or purple)",
                other
            )),
        }
    }
}

/// A user-created calendar entry.
///
/// Field names serialize in camelCase to stay compatible with existing
/// snapshot data. `start_time` and `end_time` are kept as plain `HH:MM`
/// strings rather than typed times: the store accepts whatever was
/// persisted, and validation happens at the editor boundary via
/// [`Event::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: EventColor,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// # Examples
    /// ```
    /// use event_calendar::models::event::Event;
    ///
    /// let event = Event::new("evt-1", "Team Meeting", "09:00", "10:00").unwrap();
    /// assert_eq!(event.name, "Team Meeting");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: None,
            color: EventColor::default(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Form-level validation: non-empty name, parseable `HH:MM` times,
    /// start before end. The store itself never calls this.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        let start = parse_clock_time(&self.start_time)
            .ok_or_else(|| format!("Invalid start time '{}' (expected HH:MM)", self.start_time))?;
        let end = parse_clock_time(&self.end_time)
            .ok_or_else(|| format!("Invalid end time '{}' (expected HH:MM)", self.end_time))?;

        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Case-insensitive substring match against name and description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&keyword))
    }
}

fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    name: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    description: Option<String>,
    color: EventColor,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            start_time: None,
            end_time: None,
            description: None,
            color: EventColor::default(),
        }
    }

    /// Set the event id (caller-generated, unique within its day)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the start time (HH:MM)
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// Set the end time (HH:MM)
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the display color
    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    /// Build the event, running form-level validation
    pub fn build(self) -> Result<Event, String> {
        let event = Event {
            id: self.id.ok_or("Event id is required")?,
            name: self.name.ok_or("Event name is required")?,
            start_time: self.start_time.ok_or("Event start time is required")?,
            end_time: self.end_time.ok_or("Event end time is required")?,
            description: self.description,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
