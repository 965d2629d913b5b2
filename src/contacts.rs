//! The contacts facade: validated operations against the remote API.
//!
//! Every operation follows the same shape: assemble the field map, fill in
//! the default token, validate against the operation's schema, route the
//! validated fields into a request descriptor, and make exactly one
//! transport call. Validation failures never reach the transport.

use serde_json::Value;

use crate::error::Error;
use crate::options::{resolve_token, CredentialStore};
use crate::predicate::Predicate;
use crate::request::{Endpoint, Placement, Routing, Verb, AUTH_FIELD};
use crate::schema::{validate, Field, Params, Schema};
use crate::transport::Transport;

const LIST_ROUTING: Routing = Routing::new(&[], Placement::Query);
const ADD_ROUTING: Routing = Routing::new(&[], Placement::Body);
const UPDATE_ROUTING: Routing = Routing::new(&["id"], Placement::Body);
const ONE_ROUTING: Routing = Routing::new(&["id"], Placement::Drop);
const GROUPS_ROUTING: Routing = Routing::new(&[], Placement::Drop);

/// Client facade for the contacts endpoints.
///
/// Holds only read-only references to its two collaborators, so concurrent
/// use from multiple callers needs no coordination.
#[derive(Debug, Clone)]
pub struct Contacts<C, T> {
    credentials: C,
    transport: T,
}

impl<C, T> Contacts<C, T>
where
    C: CredentialStore,
    T: Transport,
{
    pub fn new(credentials: C, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    /// List contacts, with optional filters routed into the query string.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` before any I/O when the map fails validation,
    /// otherwise whatever the transport raises.
    pub fn list(&self, mut params: Params) -> Result<Value, Error> {
        self.fill_token(&mut params);
        validate(&list_schema(), &params)?;
        let request = LIST_ROUTING.apply(Endpoint::Contacts, Verb::Get, params);
        Ok(self.transport.send(&request)?)
    }

    /// Fetch one contact by id.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` for an empty id or missing token, otherwise
    /// whatever the transport raises.
    pub fn get(&self, contact_id: &str, access_token: Option<&str>) -> Result<Value, Error> {
        let params = self.id_params(contact_id, access_token);
        validate(&one_contact_schema(), &params)?;
        let request = ONE_ROUTING.apply(Endpoint::OneContact, Verb::Get, params);
        Ok(self.transport.send(&request)?)
    }

    /// Create a contact; non-auth fields are routed into the request body.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` before any I/O when the map fails validation,
    /// otherwise whatever the transport raises.
    pub fn add(&self, mut params: Params) -> Result<Value, Error> {
        self.fill_token(&mut params);
        validate(&add_schema(), &params)?;
        let request = ADD_ROUTING.apply(Endpoint::Contacts, Verb::Post, params);
        Ok(self.transport.send(&request)?)
    }

    /// Update a contact. Accepts exactly the [`add`](Contacts::add) fields
    /// plus a required `id`, which becomes the path segment.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` before any I/O when the map fails validation,
    /// otherwise whatever the transport raises.
    pub fn update(&self, mut params: Params) -> Result<Value, Error> {
        self.fill_token(&mut params);
        validate(&update_schema(), &params)?;
        let request = UPDATE_ROUTING.apply(Endpoint::OneContact, Verb::Put, params);
        Ok(self.transport.send(&request)?)
    }

    /// Delete a contact by id.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` for an empty id or missing token, otherwise
    /// whatever the transport raises.
    pub fn delete(&self, contact_id: &str, access_token: Option<&str>) -> Result<Value, Error> {
        let params = self.id_params(contact_id, access_token);
        validate(&one_contact_schema(), &params)?;
        let request = ONE_ROUTING.apply(Endpoint::OneContact, Verb::Delete, params);
        Ok(self.transport.send(&request)?)
    }

    /// Fetch the contact groups for the account.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` when no token is available, otherwise
    /// whatever the transport raises.
    pub fn groups(&self, access_token: Option<&str>) -> Result<Value, Error> {
        let mut params = Params::new();
        if let Some(token) = resolve_token(access_token, &self.credentials) {
            params.insert(AUTH_FIELD.to_string(), Value::String(token));
        }
        validate(&groups_schema(), &params)?;
        let request = GROUPS_ROUTING.apply(Endpoint::ContactGroups, Verb::Get, params);
        Ok(self.transport.send(&request)?)
    }

    /// Fetch a contact's picture.
    ///
    /// # Errors
    ///
    /// `Error::InvalidParams` for an empty id or missing token, otherwise
    /// whatever the transport raises.
    pub fn picture(&self, contact_id: &str, access_token: Option<&str>) -> Result<Value, Error> {
        let params = self.id_params(contact_id, access_token);
        validate(&one_contact_schema(), &params)?;
        let request = ONE_ROUTING.apply(Endpoint::ContactPicture, Verb::Get, params);
        Ok(self.transport.send(&request)?)
    }

    /// Assemble the map for the scalar-argument operations.
    fn id_params(&self, contact_id: &str, access_token: Option<&str>) -> Params {
        let mut params = Params::new();
        params.insert("id".to_string(), Value::String(contact_id.to_string()));
        if let Some(token) = resolve_token(access_token, &self.credentials) {
            params.insert(AUTH_FIELD.to_string(), Value::String(token));
        }
        params
    }

    /// Default-fill the token before validation, so a missing default
    /// surfaces as a `missing required field` violation. A token already
    /// present in the map is left alone, even if it would fail validation.
    fn fill_token(&self, params: &mut Params) {
        if params.contains_key(AUTH_FIELD) {
            return;
        }
        if let Some(token) = resolve_token(None, &self.credentials) {
            params.insert(AUTH_FIELD.to_string(), Value::String(token));
        }
    }
}

/// Filters accepted by [`Contacts::list`].
fn list_schema() -> Schema {
    Schema::new(vec![
        Field::optional("limit", Predicate::IntMin(1)),
        Field::optional("offset", Predicate::IntMin(0)),
        Field::optional("email", Predicate::Email),
        Field::optional("state", Predicate::StringNonEmpty),
        Field::optional("group", Predicate::StringNonEmpty),
        Field::optional("source", Predicate::StringNonEmpty),
        Field::optional("country", Predicate::StringNonEmpty),
        Field::optional("recurse", Predicate::Bool),
        Field::optional("postal_code", Predicate::StringNonEmpty),
        Field::optional("phone_number", Predicate::StringNonEmpty),
        Field::optional("street_address", Predicate::StringNonEmpty),
        Field::required(AUTH_FIELD, Predicate::StringNonEmpty),
    ])
}

/// Contact payload accepted by [`Contacts::add`].
fn add_schema() -> Schema {
    Schema::new(vec![
        Field::optional("given_name", Predicate::StringNonEmpty),
        Field::optional("middle_name", Predicate::StringNonEmpty),
        Field::optional("surname", Predicate::StringNonEmpty),
        Field::optional("birthday", Predicate::DateTime),
        Field::optional("suffix", Predicate::StringNonEmpty),
        Field::optional("nickname", Predicate::StringNonEmpty),
        Field::optional("company_name", Predicate::StringNonEmpty),
        Field::optional("job_title", Predicate::StringNonEmpty),
        Field::optional("manager_name", Predicate::StringNonEmpty),
        Field::optional("office_location", Predicate::StringNonEmpty),
        Field::optional("notes", Predicate::StringNonEmpty),
        Field::optional("emails", Predicate::ArrayOf(Box::new(Predicate::Email))),
        Field::optional("im_addresses", Predicate::Array),
        Field::optional("physical_addresses", Predicate::Array),
        Field::optional("phone_numbers", Predicate::Array),
        Field::optional("web_pages", Predicate::Array),
        Field::required(AUTH_FIELD, Predicate::StringNonEmpty),
    ])
}

/// Exactly the add schema plus a required `id`.
fn update_schema() -> Schema {
    add_schema().with(Field::required("id", Predicate::StringNonEmpty))
}

/// Schema for the scalar-argument operations (get, delete, picture).
fn one_contact_schema() -> Schema {
    Schema::new(vec![
        Field::required("id", Predicate::StringNonEmpty),
        Field::required(AUTH_FIELD, Predicate::StringNonEmpty),
    ])
}

/// Schema for [`Contacts::groups`].
fn groups_schema() -> Schema {
    Schema::new(vec![Field::required(AUTH_FIELD, Predicate::StringNonEmpty)])
}
