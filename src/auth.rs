//! Authentication Check
//!
//! Authenticated requests bypass the conditional checks so personalised
//! pages are never answered with a 304 keyed on a site-wide timestamp.
//! When no authentication layer is installed, [`Anonymous`] treats every
//! request as unauthenticated.

use axum::extract::Request;

/// Tells the validation stage whether a request comes from a logged-in user.
pub trait AuthenticationCheck: Send + Sync {
    fn is_authenticated(&self, request: &Request) -> bool;
}

/// Every request is anonymous.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl AuthenticationCheck for Anonymous {
    fn is_authenticated(&self, _request: &Request) -> bool {
        false
    }
}

/// Request extension inserted by the host's auth middleware for a
/// logged-in principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Treats a request as authenticated when it carries an [`AuthenticatedUser`]
/// extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionAuth;

impl AuthenticationCheck for ExtensionAuth {
    fn is_authenticated(&self, request: &Request) -> bool {
        request.extensions().get::<AuthenticatedUser>().is_some()
    }
}
