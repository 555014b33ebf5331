//! End-to-end tests for the save protocol against a mock contents API

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use gridbook_core::{Sheet, Workbook};
use gridbook_remote::{RemoteClient, RemoteConfig, RemoteError};
use mockito::{Matcher, Server};
use serde_json::json;

fn config_for(server: &Server) -> RemoteConfig {
    RemoteConfig {
        token: "tok".into(),
        owner: "alice".into(),
        repo: "sheets".into(),
        api_base: server.url(),
        ..Default::default()
    }
}

fn report_sheet() -> Sheet {
    let mut sheet = Sheet::with_size("Report", 1, 1);
    sheet.set_cell(0, 0, "caf\u{e9}").unwrap();
    sheet
}

/// The full PUT body the client should send for `sheet`
fn expected_put_body(sheet: &Sheet, sha: Option<&str>) -> serde_json::Value {
    let content = serde_json::to_string_pretty(sheet).unwrap();
    let mut body = json!({
        "message": format!("Save sheet {}", sheet.name()),
        "content": BASE64.encode(content.as_bytes()),
        "committer": { "name": "web-app", "email": "noreply@example.com" },
    });
    if let Some(sha) = sha {
        body["sha"] = json!(sha);
    }
    body
}

#[test]
fn test_create_path_omits_sha() {
    let mut server = Server::new();
    let sheet = report_sheet();

    let check = server
        .mock("GET", "/repos/alice/sheets/contents/Report.json")
        .match_header("authorization", "token tok")
        .with_status(404)
        .create();
    // Exact body match: a PUT carrying a sha would not match and the
    // save would fail.
    let write = server
        .mock("PUT", "/repos/alice/sheets/contents/Report.json")
        .match_header("authorization", "token tok")
        .match_body(Matcher::Json(expected_put_body(&sheet, None)))
        .with_status(201)
        .with_body("{\"content\":{}}")
        .create();

    let client = RemoteClient::new(config_for(&server)).unwrap();
    let path = client.save_sheet(&sheet).unwrap();

    assert_eq!(path, "Report.json");
    check.assert();
    write.assert();
}

#[test]
fn test_update_path_includes_fetched_sha() {
    let mut server = Server::new();
    let sheet = report_sheet();

    let check = server
        .mock("GET", "/repos/alice/sheets/contents/Report.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"sha\":\"abc123\",\"size\":42}")
        .create();
    let write = server
        .mock("PUT", "/repos/alice/sheets/contents/Report.json")
        .match_body(Matcher::Json(expected_put_body(&sheet, Some("abc123"))))
        .with_status(200)
        .with_body("{\"content\":{}}")
        .create();

    let client = RemoteClient::new(config_for(&server)).unwrap();
    client.save_sheet(&sheet).unwrap();

    check.assert();
    write.assert();
}

#[test]
fn test_existence_check_failure_aborts_before_write() {
    let mut server = Server::new();

    server
        .mock("GET", "/repos/alice/sheets/contents/Report.json")
        .with_status(500)
        .create();
    let write = server
        .mock("PUT", "/repos/alice/sheets/contents/Report.json")
        .expect(0)
        .create();

    let client = RemoteClient::new(config_for(&server)).unwrap();
    let err = client.save_sheet(&report_sheet()).unwrap_err();

    assert!(matches!(err, RemoteError::Protocol(500)));
    write.assert();
}

#[test]
fn test_write_failure_surfaces_remote_message_verbatim() {
    let mut server = Server::new();

    server
        .mock("GET", "/repos/alice/sheets/contents/Report.json")
        .with_status(404)
        .create();
    server
        .mock("PUT", "/repos/alice/sheets/contents/Report.json")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body("{\"message\":\"Invalid request\",\"documentation_url\":\"x\"}")
        .create();

    let client = RemoteClient::new(config_for(&server)).unwrap();
    let err = client.save_sheet(&report_sheet()).unwrap_err();

    match err {
        RemoteError::Remote(message) => assert_eq!(message, "Invalid request"),
        other => panic!("expected Remote error, got {:?}", other),
    }
}

#[test]
fn test_write_failure_without_message_falls_back_to_status() {
    let mut server = Server::new();

    server
        .mock("GET", "/repos/alice/sheets/contents/Report.json")
        .with_status(404)
        .create();
    server
        .mock("PUT", "/repos/alice/sheets/contents/Report.json")
        .with_status(500)
        .create();

    let client = RemoteClient::new(config_for(&server)).unwrap();
    let err = client.save_sheet(&report_sheet()).unwrap_err();

    match err {
        RemoteError::Remote(message) => assert_eq!(message, "HTTP 500"),
        other => panic!("expected Remote error, got {:?}", other),
    }
}

#[test]
fn test_save_all_continues_past_failures() {
    let mut server = Server::new();

    // First sheet fails its existence check; the second still saves.
    server
        .mock("GET", "/repos/alice/sheets/contents/Alpha.json")
        .with_status(500)
        .create();
    server
        .mock("GET", "/repos/alice/sheets/contents/Beta.json")
        .with_status(404)
        .create();
    let write = server
        .mock("PUT", "/repos/alice/sheets/contents/Beta.json")
        .with_status(201)
        .with_body("{\"content\":{}}")
        .create();

    let mut workbook = Workbook::new();
    workbook.rename_active("Alpha");
    workbook.add_sheet(Some("Beta"));

    let client = RemoteClient::new(config_for(&server)).unwrap();
    let report = client.save_all(&workbook);

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_all_ok());
    assert_eq!(report.outcomes[0].sheet, "Alpha");
    assert!(matches!(
        report.outcomes[0].result,
        Err(RemoteError::Protocol(500))
    ));
    assert!(report.outcomes[1].result.is_ok());
    write.assert();
}
