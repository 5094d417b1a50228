//! Server-side locale from the request cookie

use super::{DEFAULT_LOCALE, LOCALE_COOKIE};

/// One year, in seconds
const COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Active locale for a request given its `Cookie` header.
///
/// The `NEXT_LOCALE` value wins when present and non-empty; otherwise
/// `DEFAULT_LOCALE`.
pub fn locale_from_cookie_header(header: Option<&str>) -> String {
    locale_from_cookie_header_or(header, DEFAULT_LOCALE)
}

/// Same as `locale_from_cookie_header` with a configured fallback.
pub fn locale_from_cookie_header_or(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(|h| cookie_value(h, LOCALE_COOKIE))
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// `Set-Cookie` value persisting `code` as the locale preference.
pub fn locale_cookie(code: &str) -> String {
    format!("{LOCALE_COOKIE}={code}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax")
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k.trim() == name).then(|| v.trim().trim_matches('"'))
    })
}
