/**
 * Client Session
 *
 * Holds the session token the way the browser does: as a `token` cookie
 * that lives for seven days and is readable by the page. The payload is
 * decoded locally, without verification, only to decide where a visitor
 * should be sent. The server re-verifies the token on every request.
 */

use uuid::Uuid;

use crate::shared::{peek_claims, SessionClaims};

/// Name of the cookie holding the token
pub const SESSION_COOKIE: &str = "token";

/// Cookie lifetime in seconds (7 days)
pub const SESSION_COOKIE_MAX_AGE: i64 = 7 * 24 * 60 * 60;

/// A held session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Set-Cookie` value storing this session
    pub fn cookie(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; Max-Age={SESSION_COOKIE_MAX_AGE}; Path=/",
            self.token
        )
    }

    /// `Set-Cookie` value that removes the session (logout)
    pub fn expired_cookie() -> String {
        format!("{SESSION_COOKIE}=; Max-Age=0; Path=/")
    }

    /// Find the session in a `Cookie` request header
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(Self::new)
    }

    /// Unverified claims of the token
    pub fn claims(&self) -> Option<SessionClaims> {
        match peek_claims(&self.token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!(error = %e, "undecodable session token");
                None
            }
        }
    }

    /// User id from the unverified payload
    pub fn user_id(&self) -> Option<Uuid> {
        self.claims().map(|claims| claims.id)
    }
}

/// Where a page request should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested page
    Continue,
    /// Send the visitor elsewhere
    Redirect(String),
}

fn is_auth_page(path: &str) -> bool {
    path.starts_with("/sign-in") || path.starts_with("/sign-up")
}

/// `/board...` or a user's home page `/{id}`
fn is_protected(path: &str) -> bool {
    if path.starts_with("/board") {
        return true;
    }
    let rest = path.trim_start_matches('/').trim_end_matches('/');
    !rest.is_empty() && !rest.contains('/') && Uuid::parse_str(rest).is_ok()
}

/// Routing rule for page requests
///
/// A signed-in visitor is sent from the sign-in, sign-up and landing pages
/// to their home page; an anonymous visitor is sent from protected pages to
/// sign-in. A token whose payload cannot be decoded counts as anonymous.
pub fn route(path: &str, session: Option<&Session>) -> RouteDecision {
    match session.and_then(Session::user_id) {
        Some(user_id) if is_auth_page(path) || path == "/" => {
            RouteDecision::Redirect(format!("/{user_id}"))
        }
        Some(_) => RouteDecision::Continue,
        None if is_protected(path) => RouteDecision::Redirect("/sign-in".to_string()),
        None => RouteDecision::Continue,
    }
}
