use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Bucket size used when rolling records up into balance rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalancePeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl BalancePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalancePeriod::Daily => "daily",
            BalancePeriod::Weekly => "weekly",
            BalancePeriod::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Some(BalancePeriod::Daily),
            "weekly" | "week" => Some(BalancePeriod::Weekly),
            "monthly" | "month" => Some(BalancePeriod::Monthly),
            _ => None,
        }
    }

    /// First day of the bucket containing `date`.
    /// Weeks start on Monday, months on the 1st.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            BalancePeriod::Daily => date,
            BalancePeriod::Weekly => {
                let offset = date.weekday().num_days_from_monday();
                date - Duration::days(offset as i64)
            }
            BalancePeriod::Monthly => date - Duration::days(date.day0() as i64),
        }
    }

    /// Last day (inclusive) of the bucket containing `date`.
    pub fn bucket_end(&self, date: NaiveDate) -> NaiveDate {
        let start = self.bucket_start(date);
        match self {
            BalancePeriod::Daily => start,
            BalancePeriod::Weekly => start + Duration::days(6),
            BalancePeriod::Monthly => {
                let (year, month) = if start.month() == 12 {
                    (start.year() + 1, 1)
                } else {
                    (start.year(), start.month() + 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1)
                    .map(|next| next - Duration::days(1))
                    .unwrap_or(NaiveDate::MAX)
            }
        }
    }
}

impl std::fmt::Display for BalancePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_daily_bucket_is_identity() {
        let date = day("2024-02-29");
        assert_eq!(BalancePeriod::Daily.bucket_start(date), date);
        assert_eq!(BalancePeriod::Daily.bucket_end(date), date);
    }

    #[test]
    fn test_weekly_bucket_starts_monday() {
        // 2024-01-03 is a Wednesday
        let period = BalancePeriod::Weekly;
        assert_eq!(period.bucket_start(day("2024-01-03")), day("2024-01-01"));
        assert_eq!(period.bucket_end(day("2024-01-03")), day("2024-01-07"));
        // Sunday belongs to the week that started the previous Monday
        assert_eq!(period.bucket_start(day("2024-01-07")), day("2024-01-01"));
        assert_eq!(period.bucket_start(day("2024-01-08")), day("2024-01-08"));
    }

    #[test]
    fn test_monthly_bucket() {
        let period = BalancePeriod::Monthly;
        assert_eq!(period.bucket_start(day("2024-02-17")), day("2024-02-01"));
        assert_eq!(period.bucket_end(day("2024-02-17")), day("2024-02-29"));
        assert_eq!(period.bucket_end(day("2023-12-05")), day("2023-12-31"));
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(BalancePeriod::from_str("Weekly"), Some(BalancePeriod::Weekly));
        assert_eq!(BalancePeriod::from_str("month"), Some(BalancePeriod::Monthly));
        assert_eq!(BalancePeriod::from_str("yearly"), None);
    }
}
