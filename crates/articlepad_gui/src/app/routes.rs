//! In-app navigation targets and their path form.

use articlepad_core::constants::{EDITOR_ROUTE_PREFIX, LISTING_ROUTE_PATH};
use articlepad_core::AppError;
use std::fmt;

/// Screens the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    /// Fixed listing of the user's articles.
    Listing,
    /// Editor for one article.
    Editor { id: i64 },
}

impl Route {
    /// Parse `/generation-history` or `/edit-article/{id}`.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidRoute`] for any other path.
    pub(crate) fn parse(path: &str) -> Result<Self, AppError> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        if normalized == LISTING_ROUTE_PATH {
            return Ok(Self::Listing);
        }
        normalized
            .strip_prefix(EDITOR_ROUTE_PREFIX)
            .and_then(|id| id.parse::<i64>().ok())
            .map(|id| Self::Editor { id })
            .ok_or_else(|| AppError::InvalidRoute(path.to_string()))
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Self::Listing => LISTING_ROUTE_PATH.to_string(),
            Self::Editor { id } => format!("{}{}", EDITOR_ROUTE_PREFIX, id),
        }
    }

    pub(crate) fn article_id(&self) -> Option<i64> {
        match self {
            Self::Editor { id } => Some(*id),
            Self::Listing => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn parses_listing_and_editor_paths() {
        assert_eq!(Route::parse("/generation-history").ok(), Some(Route::Listing));
        assert_eq!(Route::parse("/generation-history/").ok(), Some(Route::Listing));
        assert_eq!(
            Route::parse("/edit-article/42").ok(),
            Some(Route::Editor { id: 42 })
        );
    }

    #[test]
    fn rejects_unknown_or_malformed_paths() {
        for path in ["/", "", "/edit-article/", "/edit-article/abc", "/settings"] {
            assert!(Route::parse(path).is_err(), "path: {:?}", path);
        }
    }

    #[test]
    fn path_round_trips_through_parse() {
        for route in [Route::Listing, Route::Editor { id: 7 }] {
            assert_eq!(Route::parse(&route.path()).ok(), Some(route));
        }
        assert_eq!(Route::Editor { id: 7 }.article_id(), Some(7));
        assert_eq!(Route::Listing.to_string(), "/generation-history");
    }
}
