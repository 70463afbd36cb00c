//! The current request, as seen by the menu.

use url::Url;

use crate::error::{MenuError, Result};

/// Supplies the URL of the request being served.
///
/// Passed explicitly to every active-state check and render call.
#[cfg_attr(test, mockall::automock)]
pub trait RequestContext {
    /// Full URL including the query string
    fn full_url(&self) -> String;

    /// URL without the query string
    fn url(&self) -> String;
}

/// A request known only by its URL.
#[derive(Debug, Clone)]
pub struct StaticRequest {
    full: Url,
    bare: Url,
}

impl StaticRequest {
    pub fn parse(input: &str) -> Result<Self> {
        let mut full = Url::parse(input).map_err(|source| MenuError::InvalidUrl {
            url: input.to_string(),
            source,
        })?;
        full.set_fragment(None);

        let mut bare = full.clone();
        bare.set_query(None);

        Ok(Self { full, bare })
    }
}

impl RequestContext for StaticRequest {
    fn full_url(&self) -> String {
        self.full.to_string()
    }

    fn url(&self) -> String {
        self.bare.to_string()
    }
}

/// Resolves a link target against the current request.
///
/// Absolute targets are normalized; relative ones are joined onto the request
/// URL. An empty target means the site root. If nothing works the target comes
/// back untouched.
pub fn resolve(request: &dyn RequestContext, target: &str) -> String {
    let target = match target.trim() {
        "" => "/",
        trimmed => trimmed,
    };

    if let Ok(absolute) = Url::parse(target) {
        return absolute.to_string();
    }

    let base = request.url();
    match Url::parse(&base).and_then(|base| base.join(target)) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!(link = target, base = %base, error = %e, "unresolvable link target");
            target.to_string()
        }
    }
}
