//! Decides whether the cached prices are still worth showing.

use chrono::{NaiveDateTime, Timelike};

/// The page publishes the next day's figures daily around this local time.
const CUTOVER: (u32, u32) = (13, 45);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    ReuseCache,
    Refetch,
}

/// Apply the freshness rule to the cached record's timestamp.
///
/// Only the calendar-date portion of the timestamps is compared, never
/// elapsed duration: a same-date record is fresh all day, and a prior-date
/// record goes stale the moment the cutover time passes. There is no guard
/// against a cache timestamped in the future.
#[must_use]
pub fn decide(now: NaiveDateTime, cached_at: Option<NaiveDateTime>) -> Decision {
    let Some(cached_at) = cached_at else {
        return Decision::Refetch;
    };
    if (now.hour(), now.minute()) >= CUTOVER && now.date() != cached_at.date() {
        Decision::Refetch
    } else {
        Decision::ReuseCache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: &str) -> NaiveDateTime {
        timestamp.parse().unwrap()
    }

    #[test]
    fn test_no_cache_refetches() {
        assert_eq!(decide(at("2024-03-01T00:00:00"), None), Decision::Refetch);
        assert_eq!(decide(at("2024-03-01T13:45:00"), None), Decision::Refetch);
        assert_eq!(decide(at("2024-03-01T23:59:59"), None), Decision::Refetch);
    }

    #[test]
    fn test_same_date_reused_all_day() {
        let cached_at = Some(at("2024-03-01T10:00:00"));
        assert_eq!(decide(at("2024-03-01T10:01:00"), cached_at), Decision::ReuseCache);
        assert_eq!(decide(at("2024-03-01T13:45:00"), cached_at), Decision::ReuseCache);
        assert_eq!(decide(at("2024-03-01T20:00:00"), cached_at), Decision::ReuseCache);
    }

    #[test]
    fn test_previous_date_after_cutover_refetches() {
        let cached_at = Some(at("2024-03-01T10:00:00"));
        assert_eq!(decide(at("2024-03-02T13:45:00"), cached_at), Decision::Refetch);
        assert_eq!(decide(at("2024-03-02T14:00:00"), cached_at), Decision::Refetch);
    }

    #[test]
    fn test_previous_date_before_cutover_reused() {
        let cached_at = Some(at("2024-03-01T23:59:00"));
        assert_eq!(decide(at("2024-03-02T00:01:00"), cached_at), Decision::ReuseCache);
        assert_eq!(decide(at("2024-03-02T13:44:59"), cached_at), Decision::ReuseCache);
    }

    #[test]
    fn test_minutes_compared_within_cutover_hour() {
        let cached_at = Some(at("2024-03-01T10:00:00"));
        assert_eq!(decide(at("2024-03-02T13:44:00"), cached_at), Decision::ReuseCache);
        assert_eq!(decide(at("2024-03-02T13:46:00"), cached_at), Decision::Refetch);
    }

    #[test]
    fn test_future_date_before_cutover_reused() {
        // No clock-skew guard: only the date inequality is consulted.
        let cached_at = Some(at("2024-03-05T10:00:00"));
        assert_eq!(decide(at("2024-03-02T09:00:00"), cached_at), Decision::ReuseCache);
        assert_eq!(decide(at("2024-03-02T14:00:00"), cached_at), Decision::Refetch);
    }
}
