use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_business_owner::BusinessOwner;

/// An owner counts as active when seen within this many days
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Numbers shown on the overview cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_business_owners: usize,
    pub active_business_owners: usize,
    /// Taken from the pagination info of a one-item product page
    pub total_products: u64,
}

impl OverviewStats {
    pub fn from_parts(owners: &[BusinessOwner], total_products: u64, now: DateTime<Utc>) -> Self {
        Self {
            total_business_owners: owners.len(),
            active_business_owners: count_active_owners(owners, now),
            total_products,
        }
    }

    /// Share of active owners in percent, 0 when there are none
    pub fn active_share(&self) -> u32 {
        if self.total_business_owners == 0 {
            return 0;
        }
        ((self.active_business_owners * 100) / self.total_business_owners) as u32
    }
}

/// Owners whose `lastActive` is strictly after `now - 30 days`.
/// Missing or unparsable timestamps count as inactive.
pub fn count_active_owners(owners: &[BusinessOwner], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(ACTIVE_WINDOW_DAYS);
    owners
        .iter()
        .filter_map(|o| o.last_active.as_deref())
        .filter_map(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .filter(|seen| seen.with_timezone(&Utc) > cutoff)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(last_active: Option<&str>) -> BusinessOwner {
        BusinessOwner {
            last_active: last_active.map(str::to_string),
            ..BusinessOwner::default()
        }
    }

    #[test]
    fn test_active_window_is_30_days() {
        let now = DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let owners = vec![
            owner(Some("2024-06-29T08:00:00.000Z")),
            owner(Some("2024-05-31T12:00:01Z")),
            owner(Some("2024-05-31T12:00:00Z")),
            owner(Some("2024-01-01T00:00:00Z")),
            owner(Some("not a date")),
            owner(None),
        ];

        assert_eq!(count_active_owners(&owners, now), 2);

        let stats = OverviewStats::from_parts(&owners, 42, now);
        assert_eq!(stats.total_business_owners, 6);
        assert_eq!(stats.active_business_owners, 2);
        assert_eq!(stats.total_products, 42);
        assert_eq!(stats.active_share(), 33);
    }

    #[test]
    fn test_empty_share() {
        assert_eq!(OverviewStats::default().active_share(), 0);
    }
}
