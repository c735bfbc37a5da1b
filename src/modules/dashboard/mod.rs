pub mod controller;
pub mod service;

pub use service::DashboardService;
