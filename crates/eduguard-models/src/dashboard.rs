//! Dashboard stat cards.

use serde::Serialize;

/// Numbers shown on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub active_students: usize,
    pub violations_today: u32,
    pub pending_approvals: u32,
    pub total_students: usize,
    pub linked_devices: usize,
}

/// A single dashboard card: big value, title and optional subtitle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<&'static str>,
}

impl DashboardStats {
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Active Students",
                value: self.active_students.to_string(),
                subtitle: None,
            },
            StatCard {
                title: "Violations",
                value: self.violations_today.to_string(),
                subtitle: Some("Today"),
            },
            StatCard {
                title: "Pending",
                value: self.pending_approvals.to_string(),
                subtitle: Some("Approvals"),
            },
            StatCard {
                title: "Students",
                value: self.total_students.to_string(),
                subtitle: Some("Total"),
            },
        ]
    }
}
