use tracing::{debug, instrument, trace};

use super::validator::{is_port_text, split_scheme};
use super::UrlValue;

/// Parses `input` into a [`UrlValue`]
///
/// Recognized shapes:
/// - `scheme://[user[:pass]@]host[:port][/path][?query][#fragment]`
/// - `//authority...` (network-path reference, no scheme)
/// - `/path`, `?query`, `#fragment` without scheme or authority
///
/// Anything else after the scheme (for example `mailto:x@y`), schemeless
/// text such as `../c`, or an authority whose host would itself end in
/// `:digits` (`//a:1:80`) is kept verbatim in `data`. Nothing is trimmed or
/// case-folded and no input is rejected.
#[instrument(level = "trace", skip_all, fields(input = %input))]
pub fn parse(input: &str) -> UrlValue {
    let mut value = UrlValue::default();
    if input.is_empty() {
        return value;
    }

    let rest = match split_scheme(input) {
        Some((scheme, rest)) => {
            value.scheme = scheme.to_string();
            rest
        }
        None => input,
    };

    if let Some(after_slashes) = rest.strip_prefix("//") {
        let authority_end = after_slashes
            .find(['/', '?', '#'])
            .unwrap_or(after_slashes.len());
        if parse_authority(&after_slashes[..authority_end], &mut value) {
            parse_path_query_fragment(&after_slashes[authority_end..], &mut value);
        } else {
            debug!("Keeping ambiguous authority as data: {}", rest);
            value.data = rest.to_string();
        }
    } else if value.scheme.is_empty() && rest.starts_with(['/', '?', '#']) {
        parse_path_query_fragment(rest, &mut value);
    } else {
        debug!("Keeping unrecognized URL text as data: {}", rest);
        value.data = rest.to_string();
    }

    trace!("Parsed URL components: {:?}", value);
    value
}

/// Splits `[user[:pass]@]host[:port]` into the value's authority fields.
///
/// Returns `false`, leaving `value` untouched, when the host left after
/// taking the port still ends in `:digits`. Such a host could not be told
/// apart from host plus port once written back.
fn parse_authority(authority: &str, value: &mut UrlValue) -> bool {
    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((userinfo, host_port)) => (Some(userinfo), host_port),
        None => (None, authority),
    };

    let (host, port) = split_host_port(host_port);
    if !split_host_port(host).1.is_empty() {
        return false;
    }

    if let Some(userinfo) = userinfo {
        match userinfo.split_once(':') {
            Some((username, password)) => {
                value.username = username.to_string();
                value.password = password.to_string();
            }
            None => value.username = userinfo.to_string(),
        }
    }
    value.host = host.to_string();
    value.port = port.to_string();
    true
}

fn split_host_port(host_port: &str) -> (&str, &str) {
    if host_port.starts_with('[') {
        if let Some(close) = host_port.find(']') {
            let (host, suffix) = host_port.split_at(close + 1);
            if suffix.is_empty() {
                return (host, "");
            }
            if let Some(port) = suffix.strip_prefix(':').filter(|port| is_port_text(port)) {
                return (host, port);
            }
        }
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) if is_port_text(port) => (host, port),
        _ => (host_port, ""),
    }
}

/// Fills path, query and fragment from the text after the authority.
///
/// One leading `/` belongs to the separator and is not stored.
fn parse_path_query_fragment(tail: &str, value: &mut UrlValue) {
    let (before_fragment, fragment) = match tail.split_once('#') {
        Some((before, fragment)) => (before, fragment),
        None => (tail, ""),
    };
    let (path, query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (before_fragment, ""),
    };

    value.path = path.strip_prefix('/').unwrap_or(path).to_string();
    value.query = query.to_string();
    value.fragment = fragment.to_string();
}
