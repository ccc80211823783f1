//! Syntactic validation of long URLs submitted for shortening.
//!
//! The check is a yes/no answer. Callers that need to tell the user what went
//! wrong can only point at the whole input.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};
use validator::Validate;

/// Schemes accepted for long URLs.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// A single DNS label: alphanumerics with inner hyphens.
static DOMAIN_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$").unwrap());

/// Top-level label: alphabetic, or an IDNA (punycode) label.
///
/// The shape is checked, not membership in the IANA root zone list, so
/// `foo.notarealtld` passes. Keeping a TLD list current is left to operators.
static TOP_LEVEL_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z]{2,63}|xn--[a-z0-9-]{1,59})$").unwrap());

#[derive(Debug, Validate)]
struct UrlCandidate {
    #[validate(url)]
    value: String,
}

/// Returns `true` if `candidate` is a URL with a scheme, an authority and
/// optional path, query and fragment.
///
/// # Rules
///
/// - No whitespace or control characters
/// - Scheme is one of [`ALLOWED_SCHEMES`]
/// - `scheme://` is followed by a non-empty authority
/// - Host is an IP literal or a domain name ending in a top-level label
///   shaped like one (unregistered TLDs are accepted)
///
/// # Examples
///
/// ```
/// use tinyurl::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/a?b=c#d"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url("mailto:someone@example.com"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty()
        || candidate
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let parsed_candidate = UrlCandidate {
        value: candidate.to_string(),
    };
    if parsed_candidate.validate().is_err() {
        return false;
    }

    let Ok(url) = Url::parse(candidate) else {
        return false;
    };

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return false;
    }

    if !has_authority(candidate) {
        return false;
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        None => false,
    }
}

/// Checks that the raw input spells out `scheme://authority`.
///
/// `Url::parse` is lenient here (`https:example.com` parses), so the raw text
/// is inspected as well.
fn has_authority(candidate: &str) -> bool {
    let Some((_, rest)) = candidate.split_once("://") else {
        return false;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !authority.is_empty()
}

fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((top_level, rest)) = labels.split_last() else {
        return false;
    };

    if rest.is_empty() {
        return false;
    }

    rest.iter().all(|label| DOMAIN_LABEL_REGEX.is_match(label))
        && TOP_LEVEL_LABEL_REGEX.is_match(top_level)
}
