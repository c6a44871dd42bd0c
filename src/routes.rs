//! Routes
//!
//! Maps browser paths to pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Spots,
    SpotDetail(u32),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["spots"] => Route::Spots,
            ["spots", id] => id.parse().map(Route::SpotDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    /// Route for the page currently loaded in the browser
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self::from_path(&path)
    }

    pub fn href(self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Spots => "/spots".to_string(),
            Route::SpotDetail(id) => format!("/spots/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/spots"), Route::Spots);
        assert_eq!(Route::from_path("/spots/"), Route::Spots);
        assert_eq!(Route::from_path("/spots/42"), Route::SpotDetail(42));
        assert_eq!(Route::from_path("/spots/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/spots/1/edit"), Route::NotFound);
        assert_eq!(Route::from_path("/offer-a-spot"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trips() {
        for route in [Route::Home, Route::Spots, Route::SpotDetail(3)] {
            assert_eq!(Route::from_path(&route.href()), route);
        }
    }
}
