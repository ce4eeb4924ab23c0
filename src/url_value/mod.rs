//! Mutable URL value kept in sync with its canonical string form.
//!
//! A [`UrlValue`] stores each component as raw text. Component setters touch
//! exactly one field; only [`UrlValue::set_href`] re-derives everything from
//! a string. `host` and `hostname` are two views of the same stored host.

pub mod parser;
pub mod reconstructor;
pub mod validator;


use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A parsed URL whose components are independently readable and settable
///
/// The whole-string form is never stored: [`UrlValue::href`] serializes the
/// current fields on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlValue {
    pub(crate) scheme: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
    pub(crate) data: String,
}

/// Snapshot of every raw component plus the derived values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
    pub data: String,
    pub href: String,
    pub is_relative: bool,
}

impl UrlValue {
    /// Parses `input` into a new value
    ///
    /// Parsing never fails: text that does not map onto a component is kept
    /// in [`UrlValue::data`]. See [`parser::parse`] for the accepted shapes.
    ///
    /// # Arguments
    /// * `input` - Any string; the empty string gives an empty value
    ///
    /// # Returns
    /// * `UrlValue` - The parsed components, relative when scheme or host is missing
    pub fn parse(input: &str) -> Self {
        parser::parse(input)
    }

    /// Reconstructs the canonical string from the current fields.
    pub fn serialize(&self) -> String {
        reconstructor::reconstruct(self)
    }

    pub fn href(&self) -> String {
        self.serialize()
    }

    /// Replaces every field with the result of parsing `href`.
    pub fn set_href(&mut self, href: &str) {
        *self = Self::parse(href);
    }

    /// True when the value lacks a scheme or an authority host.
    pub fn is_relative(&self) -> bool {
        self.scheme.is_empty() || self.host.is_empty()
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = scheme.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Authority host as written, IPv6 brackets included
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    /// Authority host without IPv6 brackets
    pub fn hostname(&self) -> &str {
        strip_ipv6_brackets(&self.host)
    }

    /// Stores `hostname` as the host, bracketed when it contains `:`.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        let hostname = hostname.into();
        self.host = if hostname.contains(':') && strip_ipv6_brackets(&hostname) == hostname {
            format!("[{}]", hostname)
        } else {
            hostname
        };
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn set_port(&mut self, port: impl Into<String>) {
        self.port = port.into();
    }

    /// Path without its leading separator
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// Input the parser could not map onto a component. Read-only.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decoded `key=value` pairs of the query, in order.
    ///
    /// `+` reads as a space. A side that fails to percent-decode is kept raw.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        if self.query.is_empty() {
            return Vec::new();
        }
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query_text(key), decode_query_text(value))
            })
            .collect()
    }

    pub fn components(&self) -> Components {
        Components {
            scheme: self.scheme.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            host: self.host.clone(),
            hostname: self.hostname().to_string(),
            port: self.port.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
            data: self.data.clone(),
            href: self.href(),
            is_relative: self.is_relative(),
        }
    }
}

fn strip_ipv6_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host)
}

fn decode_query_text(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for UrlValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UrlValue {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
