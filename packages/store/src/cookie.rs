//! Formatting and lookup of `document.cookie` strings.

use chrono::{DateTime, Duration, Utc};

/// Expiry timestamp `ttl_days` after `now`.
pub fn expiry_after(now: DateTime<Utc>, ttl_days: u32) -> DateTime<Utc> {
    now + Duration::days(i64::from(ttl_days))
}

/// Render `expires` as an HTTP date (`Tue, 18 Nov 2026 10:00:00 GMT`).
pub fn http_date(expires: DateTime<Utc>) -> String {
    expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Assignment that sets `name` for the whole application until `expires`.
pub fn format_cookie(name: &str, value: &str, expires: Option<DateTime<Utc>>) -> String {
    match expires {
        Some(at) => format!("{name}={value}; expires={}; path=/; SameSite=Lax", http_date(at)),
        None => format!("{name}={value}; path=/; SameSite=Lax"),
    }
}

/// Assignment that expires `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=-99999999; path=/; SameSite=Lax")
}

/// Find the value of `name` in a `document.cookie` string (`a=1; b=2`).
///
/// An empty value counts as absent.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim_start)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_cookie_with_expiry() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let expires = expiry_after(now, 30);
        assert_eq!(
            format_cookie("userToken", "tok123", Some(expires)),
            "userToken=tok123; expires=Wed, 18 Nov 2026 08:30:00 GMT; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_format_cookie_session_only() {
        assert_eq!(format_cookie("a", "b", None), "a=b; path=/; SameSite=Lax");
    }

    #[test]
    fn test_expired_cookie() {
        assert_eq!(
            expired_cookie("userToken"),
            "userToken=; Max-Age=-99999999; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_find_cookie() {
        let jar = "theme=dark; userToken=tok123; other=x";
        assert_eq!(find_cookie(jar, "userToken").as_deref(), Some("tok123"));
        assert_eq!(find_cookie(jar, "theme").as_deref(), Some("dark"));
        assert!(find_cookie(jar, "missing").is_none());
    }

    #[test]
    fn test_find_cookie_requires_exact_name() {
        // "xuserToken" must not satisfy a lookup for "userToken"
        assert!(find_cookie("xuserToken=a", "userToken").is_none());
        assert!(find_cookie("userToken2=a", "userToken").is_none());
    }

    #[test]
    fn test_find_cookie_empty_value_is_absent() {
        assert!(find_cookie("userToken=; theme=dark", "userToken").is_none());
        assert!(find_cookie("", "userToken").is_none());
    }

    #[test]
    fn test_find_cookie_keeps_equals_in_value() {
        assert_eq!(find_cookie("userToken=abc==", "userToken").as_deref(), Some("abc=="));
    }
}
