//! Screen navigation.
//!
//! The shell starts on the login screen. A successful login replaces it with
//! the dashboard; every other screen is opened on top of the dashboard, and
//! logging out drops the whole history and returns to login.

use anyhow::anyhow;
use eduguard_core::AppError;
use std::fmt;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    AdminLogin,
    AdminDashboard,
    ManageStudents,
    Analytics,
    Settings,
}

impl Screen {
    pub const fn route(self) -> &'static str {
        match self {
            Screen::AdminLogin => "admin_login",
            Screen::AdminDashboard => "admin_dashboard",
            Screen::ManageStudents => "manage_students",
            Screen::Analytics => "analytics",
            Screen::Settings => "settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Screen::AdminLogin => "Admin Login",
            Screen::AdminDashboard => "Admin Dashboard",
            Screen::ManageStudents => "Manage Students",
            Screen::Analytics => "Usage Analytics",
            Screen::Settings => "Settings",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        [
            Screen::AdminLogin,
            Screen::AdminDashboard,
            Screen::ManageStudents,
            Screen::Analytics,
            Screen::Settings,
        ]
        .into_iter()
        .find(|screen| screen.route() == route)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Entries of the navigation drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerItem {
    Open(Screen),
    Logout,
}

impl DrawerItem {
    pub const ALL: [DrawerItem; 5] = [
        DrawerItem::Open(Screen::AdminDashboard),
        DrawerItem::Open(Screen::ManageStudents),
        DrawerItem::Open(Screen::Analytics),
        DrawerItem::Open(Screen::Settings),
        DrawerItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DrawerItem::Open(Screen::AdminDashboard) => "Dashboard",
            DrawerItem::Open(Screen::ManageStudents) => "Students",
            DrawerItem::Open(Screen::Analytics) => "Analytics",
            DrawerItem::Open(screen) => screen.title(),
            DrawerItem::Logout => "Logout",
        }
    }
}

/// Back stack of screens plus the signed-in flag.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
    authenticated: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::AdminLogin],
            authenticated: false,
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::AdminLogin)
    }

    pub fn history(&self) -> &[Screen] {
        &self.stack
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Login succeeded: the dashboard replaces the login screen.
    pub fn on_login_success(&mut self) {
        self.authenticated = true;
        self.stack = vec![Screen::AdminDashboard];
        info!("Navigated to dashboard after login");
    }

    /// Open `screen` on top of the dashboard.
    pub fn navigate(&mut self, screen: Screen) -> Result<(), AppError> {
        if !self.authenticated {
            return Err(AppError::unauthorized(anyhow!(
                "Log in before opening {}",
                screen.title()
            )));
        }
        if screen == Screen::AdminLogin {
            self.logout();
            return Ok(());
        }
        if self.current() == screen {
            return Ok(());
        }

        self.stack = vec![Screen::AdminDashboard];
        if screen != Screen::AdminDashboard {
            self.stack.push(screen);
        }
        debug!(route = screen.route(), "Navigated");
        Ok(())
    }

    pub fn select_drawer_item(&mut self, item: DrawerItem) -> Result<(), AppError> {
        match item {
            DrawerItem::Open(screen) => self.navigate(screen),
            DrawerItem::Logout => {
                self.logout();
                Ok(())
            }
        }
    }

    /// Pop the current screen. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.stack = vec![Screen::AdminLogin];
        info!("Logged out");
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
