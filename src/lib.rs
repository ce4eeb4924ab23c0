//! Browser-style `location` over a mutable URL value.
//!
//! [`UrlValue`] holds a URL as raw components kept consistent with one
//! canonical string; [`Location`] exposes them with `location`-style names
//! and formatting.

pub mod config;
pub mod location;
pub mod url_value;
pub mod utils;

pub use location::{is_absolute, make_absolute, Location, LocationProperties};
pub use url_value::{Components, UrlValue};
