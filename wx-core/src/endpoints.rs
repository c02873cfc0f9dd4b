//! URL construction for the backend endpoints.

/// Builds request URLs relative to a configurable base.
///
/// An empty base produces root-relative paths (`/states`), i.e. the backend
/// is assumed to share the page's origin. The base is fixed at build time.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Endpoints {
    base: &'static str,
}

impl Endpoints {
    pub fn new(base: &'static str) -> Self {
        Self {
            base: base.trim_end_matches('/'),
        }
    }

    /// `GET /states`
    pub fn states(&self) -> String {
        format!("{}/states", self.base)
    }

    /// `GET /months/{state}`
    pub fn months(&self, state: &str) -> String {
        format!("{}/months/{}", self.base, urlencoding::encode(state))
    }

    /// `GET /analysis/{state}`
    pub fn analysis(&self, state: &str) -> String {
        format!("{}/analysis/{}", self.base, urlencoding::encode(state))
    }

    /// `GET /charts/{state}/{month}`
    pub fn charts(&self, state: &str, month: &str) -> String {
        format!(
            "{}/charts/{}/{}",
            self.base,
            urlencoding::encode(state),
            urlencoding::encode(month)
        )
    }
}
