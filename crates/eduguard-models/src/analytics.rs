//! Usage analytics report models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// App usage for one weekday, in hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub day: String,
    pub hours: f32,
}

/// The weekly usage report behind the analytics screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    pub generated_at: DateTime<Utc>,
    pub daily_usage: Vec<DailyUsage>,
    pub avg_screen_time_hours: f32,
    pub violations_this_week: u32,
    /// Percentage, 0..=100.
    pub compliance_rate: u8,
    pub total_active_students: usize,
    pub devices_monitored: usize,
    pub devices_with_alerts: u32,
}

impl UsageReport {
    /// Largest daily value, or 1.0 when there is nothing to scale against.
    pub fn max_usage(&self) -> f32 {
        self.daily_usage
            .iter()
            .map(|d| d.hours)
            .fold(None, |acc: Option<f32>, h| Some(acc.map_or(h, |m| m.max(h))))
            .filter(|m| *m > 0.0)
            .unwrap_or(1.0)
    }

    /// Height of each bar as a fraction of the tallest one.
    pub fn bar_fractions(&self) -> Vec<f32> {
        let max = self.max_usage();
        self.daily_usage.iter().map(|d| d.hours / max).collect()
    }

    /// Rows of the "Weekly Summary" card.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Active Students", self.total_active_students.to_string()),
            ("Total Devices Monitored", self.devices_monitored.to_string()),
            ("Average Compliance", format!("{}%", self.compliance_rate)),
            ("Policy Violations", self.violations_this_week.to_string()),
            ("Devices with Alerts", self.devices_with_alerts.to_string()),
        ]
    }
}
