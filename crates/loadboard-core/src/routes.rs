// crates/loadboard-core/src/routes.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the freight board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Signup,
    Loads,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Loads => "/loads",
        }
    }

    /// Resolve a URL path. The root path redirects to the login screen;
    /// unknown paths resolve to nothing.
    pub fn resolve(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" | "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/loads" => Some(Route::Loads),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
