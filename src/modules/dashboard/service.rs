use tracing::instrument;

use eduguard_models::{DashboardStats, RosterState};

/// Policy violations reported today. Sample figure until device reports exist.
pub const VIOLATIONS_TODAY: u32 = 12;
/// Pending approval requests. Sample figure.
pub const PENDING_APPROVALS: u32 = 3;

pub struct DashboardService;

impl DashboardService {
    /// Dashboard numbers for the current roster.
    #[instrument(skip(roster), fields(roster_version = roster.version))]
    pub fn stats(roster: &RosterState) -> DashboardStats {
        DashboardStats {
            active_students: roster.students.iter().filter(|s| s.is_active).count(),
            violations_today: VIOLATIONS_TODAY,
            pending_approvals: PENDING_APPROVALS,
            total_students: roster.len(),
            linked_devices: roster
                .students
                .iter()
                .filter(|s| s.device_id.is_some())
                .count(),
        }
    }
}
