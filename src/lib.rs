//! Nylas Contacts Client
//!
//! Schema-validated request building for the Nylas contacts API.
//!
//! Every operation validates its loosely-typed field map against a declared
//! schema before any network traffic, then routes the validated fields into
//! a transport-agnostic [`RequestDescriptor`] (path segments, query string,
//! body, auth header) and hands it to a [`Transport`] collaborator.
//!
//! # Example
//!
//! ```
//! use nylas_contacts::{Contacts, Options, RequestDescriptor, Transport, TransportError};
//! use serde_json::{json, Value};
//!
//! // Any Transport implementation works; production code uses HttpTransport.
//! struct Echo;
//!
//! impl Transport for Echo {
//!     fn send(&self, request: &RequestDescriptor) -> Result<Value, TransportError> {
//!         Ok(json!({ "path": request.endpoint.expand(&request.path_params) }))
//!     }
//! }
//!
//! let contacts = Contacts::new(Options::new("tok_abc"), Echo);
//!
//! let reply = contacts.get("c_123", None).unwrap();
//! assert_eq!(reply["path"], "/contacts/c_123");
//!
//! // Malformed input fails locally, before the transport is touched.
//! let err = contacts
//!     .list(json!({ "limit": 0 }).as_object().unwrap().clone())
//!     .unwrap_err();
//! assert_eq!(err.violations()[0].field, "limit");
//! ```
//!
//! # Field Routing
//!
//! | Operation | Required | Routing |
//! |-----------|----------|---------|
//! | `list` | token | rest → query, token → header |
//! | `get` / `delete` / `picture` | `id`, token | `id` → path, token → header |
//! | `add` | token | rest → body, token → header |
//! | `update` | `id`, token | `id` → path, rest → body, token → header |
//! | `groups` | token | token → header only |
//!
//! The `access_token` field never reaches the query or body: it always
//! becomes the `Authorization` header. Unknown extra fields are accepted
//! and ride along untouched, keeping payloads forward-compatible.

mod contacts;
mod error;
mod options;
mod predicate;
mod request;
mod schema;
mod transport;

pub use contacts::Contacts;
pub use error::{Error, TransportError, Violation};
pub use options::{resolve_token, CredentialStore, Options};
pub use predicate::Predicate;
pub use request::{
    Endpoint, Placement, RequestDescriptor, Routing, Verb, AUTH_FIELD, AUTH_HEADER,
};
pub use schema::{validate, Field, Params, Schema};
pub use transport::Transport;

#[cfg(feature = "remote")]
pub use transport::HttpTransport;
