//! Browser-style `location` facade over an owned [`UrlValue`].
//!
//! Reads format a component of the owned value, writes forward to the
//! matching setter or replace the value wholesale. Nothing here parses or
//! serializes on its own and no navigation happens.

pub mod resolve;


use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::url_value::UrlValue;

pub use resolve::{is_absolute, make_absolute};

/// Every readable property of a [`Location`], formatted as its getters
/// return it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationProperties {
    pub origin: String,
    pub protocol: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub search: String,
    pub hash: String,
    pub href: String,
    pub data: String,
    pub is_relative: bool,
}

/// Location object exclusively owning one [`UrlValue`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    url: UrlValue,
}

impl Location {
    /// Creates a location over a freshly parsed URL
    ///
    /// # Arguments
    /// * `href` - The initial URL; any string is accepted, including ""
    ///
    /// # Returns
    /// * `Location` - A location owning the parsed value
    pub fn new(href: &str) -> Self {
        Self {
            url: UrlValue::parse(href),
        }
    }

    /// The owned value, for read-only inspection
    pub fn url(&self) -> &UrlValue {
        &self.url
    }

    pub fn into_inner(self) -> UrlValue {
        self.url
    }

    /// Serialized whole URL. Unlike WHATWG origins, credentials, path,
    /// query and fragment are all included.
    pub fn origin(&self) -> String {
        self.url.href()
    }

    pub fn is_relative(&self) -> bool {
        self.url.is_relative()
    }

    pub fn user_name(&self) -> &str {
        self.url.username()
    }

    pub fn set_user_name(&mut self, user_name: &str) {
        self.url.set_username(user_name);
    }

    pub fn password(&self) -> &str {
        self.url.password()
    }

    pub fn set_password(&mut self, password: &str) {
        self.url.set_password(password);
    }

    pub fn data(&self) -> &str {
        self.url.data()
    }

    /// `#fragment`, or empty when there is no fragment
    pub fn hash(&self) -> String {
        prefixed('#', self.url.fragment())
    }

    /// Stores `hash` as the fragment verbatim; a leading `#` is kept.
    pub fn set_hash(&mut self, hash: &str) {
        self.url.set_fragment(hash);
    }

    pub fn host(&self) -> &str {
        self.url.host()
    }

    pub fn set_host(&mut self, host: &str) {
        self.url.set_host(host);
    }

    pub fn host_name(&self) -> &str {
        self.url.hostname()
    }

    pub fn set_host_name(&mut self, host_name: &str) {
        self.url.set_hostname(host_name);
    }

    pub fn href(&self) -> String {
        self.url.href()
    }

    pub fn set_href(&mut self, href: &str) {
        self.url.set_href(href);
    }

    /// `/` followed by the stored path.
    ///
    /// The slash is always added, so a stored path of `/a/b` reads back as
    /// `//a/b`.
    pub fn path_name(&self) -> String {
        format!("/{}", self.url.path())
    }

    /// Stores `path_name` verbatim; a leading `/` is kept.
    pub fn set_path_name(&mut self, path_name: &str) {
        self.url.set_path(path_name);
    }

    pub fn port(&self) -> &str {
        self.url.port()
    }

    pub fn set_port(&mut self, port: &str) {
        self.url.set_port(port);
    }

    /// `scheme:`, or empty when there is no scheme
    pub fn protocol(&self) -> String {
        if self.url.scheme().is_empty() {
            String::new()
        } else {
            format!("{}:", self.url.scheme())
        }
    }

    /// Stores `protocol` as the scheme verbatim; a trailing `:` is kept.
    pub fn set_protocol(&mut self, protocol: &str) {
        self.url.set_scheme(protocol);
    }

    /// `?query`, or empty when there is no query
    pub fn search(&self) -> String {
        prefixed('?', self.url.query())
    }

    /// Stores `search` as the query verbatim; a leading `?` is kept.
    pub fn set_search(&mut self, search: &str) {
        self.url.set_query(search);
    }

    /// Decoded query parameters, see [`UrlValue::query_pairs`]
    pub fn search_params(&self) -> Vec<(String, String)> {
        self.url.query_pairs()
    }

    /// Snapshot of every getter, for reporting
    pub fn properties(&self) -> LocationProperties {
        LocationProperties {
            origin: self.origin(),
            protocol: self.protocol(),
            username: self.user_name().to_string(),
            password: self.password().to_string(),
            host: self.host().to_string(),
            hostname: self.host_name().to_string(),
            port: self.port().to_string(),
            pathname: self.path_name(),
            search: self.search(),
            hash: self.hash(),
            href: self.href(),
            data: self.data().to_string(),
            is_relative: self.is_relative(),
        }
    }

    /// Replaces the whole URL with `url`.
    pub fn assign(&mut self, url: &str) {
        debug!("Assigning location: {}", url);
        self.url.set_href(url);
    }

    /// Same effect as [`Location::assign`]; no history is kept.
    pub fn replace(&mut self, url: &str) {
        debug!("Replacing location: {}", url);
        self.url.set_href(url);
    }

    /// Re-parses the current href in place.
    pub fn reload(&mut self) {
        let href = self.url.href();
        debug!("Reloading location: {}", href);
        self.url.set_href(&href);
    }
}

fn prefixed(prefix: char, component: &str) -> String {
    if component.is_empty() {
        String::new()
    } else {
        format!("{prefix}{component}")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl From<UrlValue> for Location {
    fn from(url: UrlValue) -> Self {
        Self { url }
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
