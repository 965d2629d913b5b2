//! Request descriptors and declarative field routing.
//!
//! After validation, each operation partitions its field map into transport
//! components with one generic [`Routing::apply`] call driven by a small
//! per-operation table, instead of hand-placing fields per method.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::schema::Params;

/// Input-map field carrying the bearer token.
pub const AUTH_FIELD: &str = "access_token";

/// Header the token is moved into.
pub const AUTH_HEADER: &str = "Authorization";

/// HTTP verb for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Logical endpoint keys and their URL templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Contacts,
    OneContact,
    ContactGroups,
    ContactPicture,
}

impl Endpoint {
    /// Logical key, matching the upstream API listing.
    pub fn key(&self) -> &'static str {
        match self {
            Endpoint::Contacts => "contacts",
            Endpoint::OneContact => "oneContact",
            Endpoint::ContactGroups => "contactsGroups",
            Endpoint::ContactPicture => "contactPic",
        }
    }

    /// URL template with `{}`-style placeholders for path segments.
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Contacts => "/contacts",
            Endpoint::OneContact => "/contacts/{id}",
            Endpoint::ContactGroups => "/contacts/groups",
            Endpoint::ContactPicture => "/contacts/{id}/picture",
        }
    }

    /// Substitute path segments into the template, in order.
    pub fn expand(&self, segments: &[String]) -> String {
        let mut segments = segments.iter();
        self.template()
            .split('/')
            .map(|part| {
                if part.starts_with('{') {
                    segments.next().map(String::as_str).unwrap_or(part)
                } else {
                    part
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Transport-agnostic request, built fresh per call and immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub endpoint: Endpoint,
    pub verb: Verb,
    /// Path segments in template order.
    pub path_params: Vec<String>,
    /// Headers; carries exactly the bearer token, nothing else.
    pub header_params: BTreeMap<String, String>,
    pub query_params: Map<String, Value>,
    pub body_params: Map<String, Value>,
}

/// Where the non-auth, non-path remainder of a validated map goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Query,
    Body,
    /// Discard the remainder (operations that send auth and path only).
    Drop,
}

/// Per-operation routing table.
#[derive(Debug, Clone, Copy)]
pub struct Routing {
    /// Fields lifted out of the map into path segments, in this order.
    pub path_fields: &'static [&'static str],
    /// Placement for every remaining field.
    pub rest: Placement,
}

impl Routing {
    pub const fn new(path_fields: &'static [&'static str], rest: Placement) -> Self {
        Self { path_fields, rest }
    }

    /// Partition a validated map into a request descriptor.
    ///
    /// The `access_token` field always becomes the `Authorization` header
    /// and never reaches the query or body maps. Path fields are taken in
    /// the order the table declares them. Everything else goes where
    /// `rest` says; unknown extra fields ride along untouched.
    pub fn apply(&self, endpoint: Endpoint, verb: Verb, mut params: Params) -> RequestDescriptor {
        let mut header_params = BTreeMap::new();
        if let Some(Value::String(token)) = params.remove(AUTH_FIELD) {
            header_params.insert(AUTH_HEADER.to_string(), token);
        }

        let mut path_params = Vec::new();
        for name in self.path_fields {
            if let Some(Value::String(segment)) = params.remove(*name) {
                path_params.push(segment);
            }
        }

        let (query_params, body_params) = match self.rest {
            Placement::Query => (params, Map::new()),
            Placement::Body => (Map::new(), params),
            Placement::Drop => (Map::new(), Map::new()),
        };

        RequestDescriptor {
            endpoint,
            verb,
            path_params,
            header_params,
            query_params,
            body_params,
        }
    }
}
