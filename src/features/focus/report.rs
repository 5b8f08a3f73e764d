//! Session aggregation and reports.
//!
//! Turns the stored session list into the series the charts draw: seconds
//! per weekday for the current week and seconds per calendar date for all
//! time.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::session::SessionRecord;
use super::storage::SessionStore;
use super::timer::format_duration;
use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Reads stored sessions and derives chart series from them.
pub struct SessionAggregator<'a, S: KeyValueStore> {
    store: &'a mut SessionStore<S>,
}

impl<'a, S: KeyValueStore> SessionAggregator<'a, S> {
    /// Aggregate over the sessions in `store`.
    pub fn new(store: &'a mut SessionStore<S>) -> Self {
        Self { store }
    }

    /// Every stored session, newest first. Empty when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn load_all(&self) -> Result<Vec<SessionRecord>, FocusError> {
        self.store.load_all()
    }

    /// Delete every stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    pub fn clear_all(&mut self) -> Result<(), FocusError> {
        self.store.clear_all()
    }
}

/// Focus seconds for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Local calendar date
    pub date: NaiveDate,
    /// Summed session length in seconds
    pub total_sec: u64,
}

impl DailyTotal {
    /// Chart label for this date.
    #[must_use]
    pub fn label(&self, date_format: &str) -> String {
        self.date.format(date_format).to_string()
    }
}

/// Local midnight of the most recent Sunday, as a naive local datetime.
fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> chrono::NaiveDateTime {
    let today = now.date_naive();
    let offset = i64::from(today.weekday().num_days_from_sunday());
    (today - Duration::days(offset)).and_time(chrono::NaiveTime::MIN)
}

/// Sum session seconds per weekday, Sunday through Saturday, for the week
/// containing `now`.
///
/// Sessions before the most recent Sunday midnight (in `now`'s timezone) are
/// left out entirely.
#[must_use]
pub fn weekly_totals<Tz: TimeZone>(records: &[SessionRecord], now: &DateTime<Tz>) -> [u64; 7] {
    let start = week_start(now);
    let tz = now.timezone();
    let mut totals = [0u64; 7];

    for record in records {
        let local = record.timestamp.with_timezone(&tz).naive_local();
        if local >= start {
            let day = local.weekday().num_days_from_sunday() as usize;
            totals[day] += record.length_sec;
        }
    }

    totals
}

/// Sum session seconds per local calendar date.
///
/// Dates keep the order in which they first appear in `records`, and that
/// order is then reversed once. With the newest-first stored list this puts
/// the oldest date first. Out-of-order input is not re-sorted.
#[must_use]
pub fn daily_totals<Tz: TimeZone>(records: &[SessionRecord], tz: &Tz) -> Vec<DailyTotal> {
    let mut totals: Vec<DailyTotal> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        let slot = *index.entry(date).or_insert_with(|| {
            totals.push(DailyTotal { date, total_sec: 0 });
            totals.len() - 1
        });
        totals[slot].total_sec += record.length_sec;
    }

    totals.reverse();
    totals
}

/// Focus report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusReport {
    /// Total focus time in seconds across all sessions
    pub total_sec: u64,
    /// Number of stored sessions
    pub session_count: usize,
    /// Seconds per weekday of the current week, Sunday first
    pub weekly: [u64; 7],
    /// Seconds per date, in chart order
    pub daily: Vec<DailyTotal>,
}

impl FocusReport {
    /// Build a report from the stored sessions as of `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn generate<S: KeyValueStore>(
        aggregator: &SessionAggregator<'_, S>,
        now: &DateTime<Local>,
    ) -> Result<Self, FocusError> {
        let sessions = aggregator.load_all()?;
        Ok(Self::from_sessions(&sessions, now))
    }

    /// Build a report from an in-memory session list.
    #[must_use]
    pub fn from_sessions<Tz: TimeZone>(sessions: &[SessionRecord], now: &DateTime<Tz>) -> Self {
        Self {
            total_sec: sessions.iter().map(|s| s.length_sec).sum(),
            session_count: sessions.len(),
            weekly: weekly_totals(sessions, now),
            daily: daily_totals(sessions, &now.timezone()),
        }
    }

    /// Seconds focused so far this week.
    #[must_use]
    pub fn week_total_sec(&self) -> u64 {
        self.weekly.iter().sum()
    }

    /// Weekly series paired with weekday labels.
    #[must_use]
    pub fn weekly_series(&self) -> Vec<(String, u64)> {
        WEEKDAY_LABELS
            .iter()
            .zip(self.weekly)
            .map(|(label, sec)| ((*label).to_string(), sec))
            .collect()
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self, date_format: &str) -> String {
        use crate::features::stats::visualization::render_bar_chart;

        let mut lines = Vec::new();

        lines.push("📊 Focus Report".to_string());
        lines.push("═".repeat(50));
        lines.push(String::new());

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!(
            "  Total focus time:  {}",
            format_duration(self.total_sec)
        ));
        lines.push(format!("  Sessions:          {}", self.session_count));
        lines.push(format!(
            "  This week:         {}",
            format_duration(self.week_total_sec())
        ));
        lines.push(String::new());

        lines.push("This Week".to_string());
        lines.push("─".repeat(40));
        lines.push(render_bar_chart(&self.weekly_series(), 4, 24));
        lines.push(String::new());

        if !self.daily.is_empty() {
            lines.push("Daily (All Time)".to_string());
            lines.push("─".repeat(40));
            let daily: Vec<(String, u64)> = self
                .daily
                .iter()
                .map(|d| (d.label(date_format), d.total_sec))
                .collect();
            let width = daily.iter().map(|(l, _)| l.len()).max().unwrap_or(10);
            lines.push(render_bar_chart(&daily, width, 24));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn record(id: i64, length_sec: u64, ts: DateTime<Utc>) -> SessionRecord {
        SessionRecord::new(id, length_sec, "Focus", ts)
    }

    #[test]
    fn test_weekly_totals_buckets_by_weekday() {
        // Wednesday 2024-03-13; the week starts Sunday 2024-03-10
        let now = at(2024, 3, 13, 15, 0);
        let records = vec![
            record(4, 300, at(2024, 3, 13, 9, 0)),  // Wed
            record(3, 200, at(2024, 3, 11, 9, 0)),  // Mon
            record(2, 100, at(2024, 3, 11, 18, 0)), // Mon
            record(1, 50, at(2024, 3, 10, 8, 0)),   // Sun
        ];

        let totals = weekly_totals(&records, &now);
        assert_eq!(totals, [50, 300, 0, 300, 0, 0, 0]);
    }

    #[test]
    fn test_weekly_totals_week_start_boundary() {
        let now = at(2024, 3, 13, 15, 0);
        let records = vec![
            // exactly Sunday midnight
            record(2, 60, at(2024, 3, 10, 0, 0)),
            // the Saturday before
            record(1, 999, at(2024, 3, 10, 0, 0) - Duration::seconds(1)),
        ];

        let totals = weekly_totals(&records, &now);
        assert_eq!(totals[0], 60);
        assert_eq!(totals[6], 0);
        assert_eq!(totals.iter().sum::<u64>(), 60);
    }

    #[test]
    fn test_weekly_totals_on_sunday() {
        let now = at(2024, 3, 10, 0, 0);
        let records = vec![
            record(2, 60, at(2024, 3, 10, 0, 0)),
            record(1, 30, at(2024, 3, 9, 23, 59)),
        ];

        assert_eq!(weekly_totals(&records, &now), [60, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_weekly_totals_uses_local_timezone() {
        // 02:00 UTC Monday is still Sunday evening at UTC-5
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = at(2024, 3, 13, 15, 0).with_timezone(&tz);
        let records = vec![record(1, 120, at(2024, 3, 11, 2, 0))];

        let totals = weekly_totals(&records, &now);
        assert_eq!(totals[0], 120);
        assert_eq!(totals[1], 0);
    }

    #[test]
    fn test_daily_totals_reverses_first_seen_order() {
        let d3 = at(2024, 3, 13, 12, 0);
        let d2 = at(2024, 3, 12, 12, 0);
        let d1 = at(2024, 3, 11, 12, 0);
        let records = vec![
            record(4, 100, d3),
            record(3, 50, d3),
            record(2, 70, d2),
            record(1, 30, d1),
        ];

        let totals = daily_totals(&records, &Utc);
        assert_eq!(
            totals,
            vec![
                DailyTotal {
                    date: d1.date_naive(),
                    total_sec: 30,
                },
                DailyTotal {
                    date: d2.date_naive(),
                    total_sec: 70,
                },
                DailyTotal {
                    date: d3.date_naive(),
                    total_sec: 150,
                },
            ]
        );
    }

    #[test]
    fn test_daily_totals_does_not_sort() {
        let d1 = at(2024, 3, 11, 12, 0);
        let d2 = at(2024, 3, 12, 12, 0);
        let d3 = at(2024, 3, 13, 12, 0);
        // Out of order input: first-seen order is [D2, D1, D3]
        let records = vec![
            record(1, 10, d2),
            record(2, 20, d1),
            record(3, 30, d3),
            record(4, 5, d2),
        ];

        let dates: Vec<NaiveDate> = daily_totals(&records, &Utc)
            .iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(dates, vec![d3.date_naive(), d1.date_naive(), d2.date_naive()]);
    }

    #[test]
    fn test_daily_totals_empty() {
        assert!(daily_totals(&[], &Utc).is_empty());
    }

    #[test]
    fn test_daily_label() {
        let total = DailyTotal {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            total_sec: 10,
        };
        assert_eq!(total.label("%Y-%m-%d"), "2024-03-09");
        assert_eq!(total.label("%m/%d"), "03/09");
    }

    #[test]
    fn test_aggregator_load_and_clear() {
        let mut store = SessionStore::new(MemoryStore::new());
        store.prepend(record(1, 60, at(2024, 3, 11, 12, 0))).unwrap();
        store.prepend(record(2, 90, at(2024, 3, 12, 12, 0))).unwrap();

        let mut aggregator = SessionAggregator::new(&mut store);
        assert_eq!(aggregator.load_all().unwrap().len(), 2);

        aggregator.clear_all().unwrap();
        assert!(aggregator.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_report_from_sessions() {
        let now = at(2024, 3, 13, 15, 0);
        let records = vec![
            record(3, 3600, at(2024, 3, 13, 9, 0)),
            record(2, 60, at(2024, 3, 12, 9, 0)),
            record(1, 600, at(2024, 3, 1, 9, 0)),
        ];

        let report = FocusReport::from_sessions(&records, &now);
        assert_eq!(report.total_sec, 4260);
        assert_eq!(report.session_count, 3);
        assert_eq!(report.week_total_sec(), 3660);
        assert_eq!(report.daily.len(), 3);
        assert_eq!(report.daily[0].total_sec, 600);

        let series = report.weekly_series();
        assert_eq!(series[3], ("Wed".to_string(), 3600));

        let text = report.format("%Y-%m-%d");
        assert!(text.contains("1h 11m"));
        assert!(text.contains("Wed"));
        assert!(text.contains("2024-03-01"));
    }
}
