//! Typed endpoint methods on [`ApiClient`](crate::ApiClient), one file per
//! backend resource. Paths are relative to the configured base URL.
//!
//! List endpoints wrap their payload in a named envelope (`{ "events": [...] }`);
//! a missing key decodes as an empty list. Mutations discard the response body.

mod auth;
mod celebrants;
mod events;
mod messages;
mod users;
