//! Integration tests for the bundled HTTP transport.
//!
//! A mockito server stands in for the remote API, so these tests observe
//! the actual wire framing: URL expansion, the auth header, query string
//! encoding, JSON bodies, and error mapping.

#![cfg(feature = "remote")]

use std::collections::BTreeMap;

use mockito::Matcher;
use nylas_contacts::{
    Contacts, Endpoint, HttpTransport, Options, RequestDescriptor, Transport, TransportError, Verb,
};
use serde_json::{json, Map, Value};

fn descriptor(endpoint: Endpoint, verb: Verb) -> RequestDescriptor {
    RequestDescriptor {
        endpoint,
        verb,
        path_params: Vec::new(),
        header_params: BTreeMap::new(),
        query_params: Map::new(),
        body_params: Map::new(),
    }
}

fn auth_header(token: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("Authorization".to_string(), token.to_string())])
}

#[test]
fn get_sends_header_and_query() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/contacts")
        .match_header("authorization", "tok_abc")
        .match_query(Matcher::UrlEncoded("limit".into(), "5".into()))
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"c_1"}]"#)
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::Contacts, Verb::Get);
    request.header_params = auth_header("tok_abc");
    request.query_params.insert("limit".to_string(), json!(5));

    let reply = transport.send(&request).unwrap();

    mock.assert();
    assert_eq!(reply, json!([{ "id": "c_1" }]));
}

#[test]
fn post_frames_body_as_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/contacts")
        .match_header("authorization", "tok")
        .match_body(Matcher::Json(json!({
            "given_name": "Jo",
            "emails": ["a@b.com"]
        })))
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"c_9","given_name":"Jo"}"#)
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::Contacts, Verb::Post);
    request.header_params = auth_header("tok");
    request
        .body_params
        .insert("given_name".to_string(), json!("Jo"));
    request
        .body_params
        .insert("emails".to_string(), json!(["a@b.com"]));

    let reply = transport.send(&request).unwrap();

    mock.assert();
    assert_eq!(reply["id"], "c_9");
}

#[test]
fn path_params_expand_into_url() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/contacts/c_123")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"c_123"}"#)
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::OneContact, Verb::Put);
    request.path_params.push("c_123".to_string());
    request.body_params.insert("notes".to_string(), json!("x"));

    transport.send(&request).unwrap();
    mock.assert();
}

#[test]
fn non_json_body_comes_back_as_string() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/contacts/c_123/picture")
        .with_header("content-type", "image/jpeg")
        .with_body("jpeg-bytes")
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::ContactPicture, Verb::Get);
    request.path_params.push("c_123".to_string());

    let reply = transport.send(&request).unwrap();

    mock.assert();
    assert_eq!(reply, Value::String("jpeg-bytes".to_string()));
}

#[test]
fn empty_body_comes_back_as_null() {
    let mut server = mockito::Server::new();
    let mock = server.mock("DELETE", "/contacts/c_1").with_status(200).create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::OneContact, Verb::Delete);
    request.path_params.push("c_1".to_string());

    let reply = transport.send(&request).unwrap();

    mock.assert();
    assert_eq!(reply, Value::Null);
}

#[test]
fn non_success_status_maps_to_status_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/contacts/missing")
        .with_status(404)
        .with_body("not found")
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let mut request = descriptor(Endpoint::OneContact, Verb::Get);
    request.path_params.push("missing".to_string());

    let err = transport.send(&request).unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn garbage_json_maps_to_decode_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/contacts")
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let request = descriptor(Endpoint::Contacts, Verb::Get);

    let err = transport.send(&request).unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[test]
fn facade_round_trip_over_http() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/contacts/c_123")
        .match_header("authorization", "tok_abc")
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"c_123","given_name":"Jo"}"#)
        .create();

    let transport = HttpTransport::new(server.url()).unwrap();
    let contacts = Contacts::new(Options::new("tok_abc"), transport);

    let reply = contacts.get("c_123", None).unwrap();

    mock.assert();
    assert_eq!(reply["given_name"], "Jo");
}
