// src/tests/router_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::make_db;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

const ROSTER_JSON: &str = r#"[
    {"Piloto": "GOMEZ", "Vencimiento": "01/01/2020", "Licencia": "TLA-112"},
    {"Piloto": "SOSA", "Vencimiento": "05/03/2099", "Licencia": "TLA-204"}
]"#;

fn request(method: Method, path: &str, body: Body, content_type: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(method).uri(path);
    if let Some(ct) = content_type {
        builder = builder.header("Content-Type", ct);
    }
    builder.body(body).unwrap()
}

fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[test]
fn upload_map_and_review_flow() {
    let db = make_db("router_flow");

    // Step 1: upload the roster as raw JSON
    let req = request(Method::POST, "/roster", Body::new(ROSTER_JSON), None);
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/mapping");

    // Step 2: the mapping form offers the observed columns, pre-guessed
    let req = request(Method::GET, "/mapping", Body::empty(), None);
    let mut resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Piloto"));
    assert!(body.contains("Vencimiento"));

    // Step 3: confirm the mapping
    let form = "name=Piloto&expiration=Vencimiento&license=Licencia&threshold=30";
    let req = request(
        Method::POST,
        "/mapping",
        Body::new(form),
        Some("application/x-www-form-urlencoded"),
    );
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/dashboard");

    // Step 4: the dashboard lists the expired pilot, not the valid one
    let req = request(Method::GET, "/dashboard", Body::empty(), None);
    let mut resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("GOMEZ"));
    assert!(body.contains("NO VIGENTE"));
    assert!(!body.contains("SOSA"));

    // Step 5: the XLSX report downloads
    let req = request(Method::GET, "/report.xlsx", Body::empty(), None);
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.contains("spreadsheetml"));

    // Step 6: the briefing prompt mentions the expired pilot
    let req = request(Method::GET, "/briefing", Body::empty(), None);
    let mut resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("GOMEZ"));
}

#[test]
fn upload_accepts_the_form_variant() {
    let db = make_db("router_form_upload");

    let encoded: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("rows", ROSTER_JSON)
        .finish();
    let req = request(
        Method::POST,
        "/roster",
        Body::new(encoded),
        Some("application/x-www-form-urlencoded"),
    );
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 303);
}

#[test]
fn dashboard_without_a_roster_redirects_home() {
    let db = make_db("router_no_roster");

    let req = request(Method::GET, "/dashboard", Body::empty(), None);
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
}

#[test]
fn bad_mapping_posts_are_rejected() {
    let db = make_db("router_bad_mapping");

    let req = request(Method::POST, "/roster", Body::new(ROSTER_JSON), None);
    handle(req, &db).unwrap();

    // Unknown column
    let form = "name=Piloto&expiration=Fecha&threshold=30";
    let req = request(
        Method::POST,
        "/mapping",
        Body::new(form),
        Some("application/x-www-form-urlencoded"),
    );
    assert!(matches!(
        handle(req, &db),
        Err(ServerError::MappingError(_))
    ));

    // Non-positive threshold
    let form = "name=Piloto&expiration=Vencimiento&threshold=0";
    let req = request(
        Method::POST,
        "/mapping",
        Body::new(form),
        Some("application/x-www-form-urlencoded"),
    );
    assert!(matches!(handle(req, &db), Err(ServerError::BadRequest(_))));
}

#[test]
fn malformed_roster_payload_is_rejected() {
    let db = make_db("router_bad_payload");

    let req = request(Method::POST, "/roster", Body::new("not json"), None);
    assert!(matches!(handle(req, &db), Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_routes_are_not_found() {
    let db = make_db("router_not_found");

    let req = request(Method::GET, "/nope", Body::empty(), None);
    assert!(matches!(handle(req, &db), Err(ServerError::NotFound)));
}
