//! Request building for SL API calls
//!
//! Turns typed option sets into encoded query parameters and absolute URLs.
//! Encodes the omit-when-empty rules and the exclusion-flag inversion the
//! upstream API expects, and redacts the API key from URLs that end up in
//! errors or logs.

use url::Url;

use crate::error::SlError;

/// Placeholder substituted for the API key value in redacted URLs
pub(crate) const REDACTED_KEY: &str = "REDACTED";

/// Ordered query parameters for a single request
///
/// Built once per call from a consumed option set, so transformations such
/// as flag inversion can never apply twice to the same logical call.
#[derive(Debug, Default)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    /// Create an empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// Append a string parameter, omitted when empty
    pub fn push_nonempty(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.push(name, value);
        }
    }

    /// Append an integer parameter, omitted when zero
    pub fn push_nonzero(&mut self, name: &'static str, value: i64) {
        if value != 0 {
            self.push(name, value.to_string());
        }
    }

    /// Append a boolean parameter, omitted when false
    pub fn push_true(&mut self, name: &'static str, value: bool) {
        if value {
            self.push(name, bool_str(true));
        }
    }

    /// Append the negation of an exclusion flag.
    ///
    /// The upstream parameters carry include semantics while the option
    /// fields expose exclude semantics, so the flag is flipped exactly once
    /// here, at the point of serialization.
    pub fn push_inverted(&mut self, name: &'static str, exclude: bool) {
        self.push(name, bool_str(!exclude));
    }

    /// Like [`Self::push_inverted`], but omitted when the inverted value is false
    pub fn push_inverted_or_omit(&mut self, name: &'static str, exclude: bool) {
        self.push_true(name, !exclude);
    }

    /// Whether any parameter has been appended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Convert bool to "true"/"false" str for query params
pub(crate) const fn bool_str(val: bool) -> &'static str {
    if val { "true" } else { "false" }
}

/// Resolve an endpoint path against the base URL and attach the query
pub(crate) fn build_url(base: &Url, endpoint: &str, query: &QueryPairs) -> Result<Url, SlError> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| SlError::InvalidEndpoint(format!("{endpoint}: {e}")))?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    Ok(url)
}

/// Replace the API key query parameter with [`REDACTED_KEY`].
///
/// Covers both spellings in use on the wire: `key` (typeahead and travel
/// planner) and `Key` (realtime).
pub(crate) fn redact_key(mut url: Url) -> Url {
    let is_key = |name: &str| name == "key" || name == "Key";

    if url.query_pairs().any(|(name, _)| is_key(&name)) {
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(name, value)| {
                if is_key(&name) {
                    (name.into_owned(), REDACTED_KEY.to_string())
                } else {
                    (name.into_owned(), value.into_owned())
                }
            })
            .collect();

        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url
}
