use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration as TimeDuration;

pub const TOKEN_COOKIE: &str = "token";

/// The cookie carrying a freshly issued session token.
///
/// `SameSite=None` lets the trusted frontend origin send it cross-site, which browsers
/// only accept together with `Secure`. No `Max-Age` is set; the token's own `exp` bounds
/// its lifetime.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .build()
}

/// Tells the client to drop its session cookie. Clearing is advisory: a client that keeps
/// the old token can still use it until it expires.
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(TimeDuration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let rendered = session_cookie("abc.def.ghi".into()).to_string();
        assert!(rendered.starts_with("token=abc.def.ghi"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=None"));
        assert!(rendered.contains("Path=/"));
        assert!(!rendered.contains("Max-Age"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let rendered = cleared_session_cookie().to_string();
        assert!(rendered.starts_with("token=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=None"));
    }
}
