//! Static route table and access classification.
//!
//! Every navigable screen is tagged public or protected here and nowhere
//! else. Paths missing from the table are treated as protected.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable regardless of session state.
    Public,
    /// Requires a logged-in session.
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    SignUp,
    Dashboard,
    Books,
    Readers,
    IssueBook,
}

impl AppRoute {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::SignUp,
        Self::Dashboard,
        Self::Books,
        Self::Readers,
        Self::IssueBook,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => LOGIN_PATH,
            Self::SignUp => "/signup",
            Self::Dashboard => DASHBOARD_PATH,
            Self::Books => "/dashboard/book",
            Self::Readers => "/dashboard/reader",
            Self::IssueBook => "/dashboard/issuebook",
        }
    }

    pub fn access(self) -> RouteAccess {
        match self {
            Self::Home | Self::Login | Self::SignUp => RouteAccess::Public,
            Self::Dashboard | Self::Books | Self::Readers | Self::IssueBook => RouteAccess::Protected,
        }
    }

    /// Human-readable screen title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home | Self::Login => "Login",
            Self::SignUp => "Sign Up",
            Self::Dashboard => "Dashboard",
            Self::Books => "Books",
            Self::Readers => "Readers",
            Self::IssueBook => "Issue Book",
        }
    }

    /// Look up a route by path. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Access class for an arbitrary path; unknown paths fail closed.
pub fn classify(path: &str) -> RouteAccess {
    AppRoute::from_path(path).map_or(RouteAccess::Protected, AppRoute::access)
}
