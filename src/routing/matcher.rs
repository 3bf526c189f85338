//! Endpoint matching strategies.
//!
//! # Responsibilities
//! - Decide whether a request targets a given service endpoint
//!
//! # Design Decisions
//! - `Substring` is the default: one endpoint slug matches a path-style
//!   request and a query/body fragment alike, without separate query or
//!   path parsing. The cost is false positives when one endpoint is a
//!   substring of another; the dispatcher's ambiguity rule absorbs that.
//! - `ExactPath` is the stricter alternative, selectable in config.

use serde::{Deserialize, Serialize};

use crate::http::request::Request;

/// Strategy for matching a request against a service endpoint slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// The endpoint appears anywhere in the request target.
    #[default]
    Substring,
    /// The request path equals `/` followed by the endpoint; any query
    /// string is ignored.
    ExactPath,
}

impl MatchStrategy {
    /// Returns true if `request` targets `endpoint` under this strategy.
    pub fn matches(&self, request: &Request, endpoint: &str) -> bool {
        match self {
            MatchStrategy::Substring => request.target().contains(endpoint),
            MatchStrategy::ExactPath => request
                .path()
                .strip_prefix('/')
                .is_some_and(|path| path == endpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matches_path_and_query() {
        let strategy = MatchStrategy::Substring;

        let path = Request::parse("GET /blender-farm HTTP/1.1\r\n\r\n");
        assert!(strategy.matches(&path, "blender-farm"));

        let query = Request::parse("GET /run?service=blender-farm HTTP/1.1\r\n\r\n");
        assert!(strategy.matches(&query, "blender-farm"));

        let other = Request::parse("GET /adder HTTP/1.1\r\n\r\n");
        assert!(!strategy.matches(&other, "blender-farm"));
    }

    #[test]
    fn substring_false_positive_on_contained_endpoint() {
        // Documented cost of the strategy: "farm" also matches a
        // "blender-farm" request.
        let request = Request::parse("GET /blender-farm HTTP/1.1\r\n\r\n");
        assert!(MatchStrategy::Substring.matches(&request, "farm"));
    }

    #[test]
    fn exact_path_requires_full_equality() {
        let strategy = MatchStrategy::ExactPath;

        let exact = Request::parse("GET /adder HTTP/1.1\r\n\r\n");
        assert!(strategy.matches(&exact, "adder"));

        let longer = Request::parse("GET /adder/extra HTTP/1.1\r\n\r\n");
        assert!(!strategy.matches(&longer, "adder"));

        let contained = Request::parse("GET /blender-farm HTTP/1.1\r\n\r\n");
        assert!(!strategy.matches(&contained, "farm"));
    }
}
