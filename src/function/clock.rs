//! Wall clock source for the greeting timestamp

use chrono::{Local, NaiveDateTime, Utc};
use serde::Deserialize;

use super::FunctionError;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> Result<NaiveDateTime, FunctionError>;
}

/// Clock backed by the system time
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SystemClock {
    /// Server local time
    #[default]
    Local,
    Utc,
}

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveDateTime, FunctionError> {
        Ok(match self {
            Self::Local => Local::now().naive_local(),
            Self::Utc => Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_clock_tracks_system_time() {
        let before = Utc::now().naive_utc();
        let now = SystemClock::Utc.now().unwrap();
        let after = Utc::now().naive_utc();
        assert!(before <= now && now <= after);
    }

    #[test]
    fn test_clock_kind_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            clock: SystemClock,
        }
        let w: Wrapper = serde_json::from_str(r#"{"clock":"utc"}"#).unwrap();
        assert_eq!(w.clock, SystemClock::Utc);
    }
}
