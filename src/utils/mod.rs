//! Utility functions for short codes, URL checks and request handling.
//!
//! - [`codec`] - Bijective id <-> short code conversion
//! - [`url_validator`] - Long URL syntax validation
//! - [`correlation`] - Correlation id extraction from HTTP headers

pub mod codec;
pub mod correlation;
pub mod url_validator;
