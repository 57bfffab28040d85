//! Situational hints supplied by the host alongside the text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const USER_ACTIVITY_KEY: &str = "userActivity";
pub const TIME_OF_DAY_KEY: &str = "timeOfDay";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserActivity {
    Working,
    Relaxing,
    Socializing,
}

impl UserActivity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "working" => Some(UserActivity::Working),
            "relaxing" => Some(UserActivity::Relaxing),
            "socializing" => Some(UserActivity::Socializing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Night,
}

impl TimeOfDay {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "night" => Some(TimeOfDay::Night),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHints {
    pub user_activity: Option<UserActivity>,
    pub time_of_day: Option<TimeOfDay>,
}

impl ContextHints {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_activity(mut self, activity: UserActivity) -> Self {
        self.user_activity = Some(activity);
        self
    }

    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Read the recognized keys out of a loose key-value map.
    /// Anything unrecognized is skipped.
    pub fn from_map(map: &HashMap<String, Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(Value::as_str);
        Self {
            user_activity: text(USER_ACTIVITY_KEY).and_then(UserActivity::parse),
            time_of_day: text(TIME_OF_DAY_KEY).and_then(TimeOfDay::parse),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_activity.is_none() && self.time_of_day.is_none()
    }
}
