//! Injected collaborators that keep time and identifiers deterministic under test

use chrono::{DateTime, Utc};

use crate::domain::user::UserId;

#[cfg(test)]
use mockall::automock;

/// Source of the current time
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh user identifiers
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> UserId;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mock_clock() {
        let fixed = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(fixed);

        assert_eq!(clock.now().format("%d/%m/%Y").to_string(), "01/01/2023");
    }

    #[test]
    fn test_mock_id_generator() {
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id().times(1).return_const(UserId::new(12345));

        assert_eq!(ids.next_id().value(), 12345);
    }
}
