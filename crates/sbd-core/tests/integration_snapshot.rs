//! Integration tests: the full snapshot pipeline against a local API server.
//!
//! Starts a canned-response server, points the config's `api_base` at it,
//! and exercises both sinks plus the error taxonomy end to end.

mod common;

use std::io::{Cursor, Read};
use std::time::Duration;

use sbd_core::config::SbdConfig;
use sbd_core::control::AbortHandle;
use sbd_core::error::SnapshotError;
use sbd_core::snapshot::{snapshot_to_archive, snapshot_to_dir, SnapshotRequest};
use serde_json::json;
use tempfile::tempdir;

use common::api_server::{self, ApiServerOptions};

fn project_json() -> String {
    json!({
        "project": {
            "appFiles": {
                "package.json": {
                    "name": "package.json",
                    "type": "file",
                    "contents": "{\n  \"name\": \"demo\"\n}\n",
                    "fullPath": "/app/package.json"
                },
                "src": { "name": "src", "type": "directory", "contents": "" },
                "src/index.js": {
                    "name": "index.js",
                    "type": "file",
                    "contents": "console.log('hi');\n"
                },
                "node_modules/x.js": {
                    "name": "x.js",
                    "type": "file",
                    "contents": "module.exports = 1;\n"
                },
                "../escape.txt": {
                    "name": "escape.txt",
                    "type": "file",
                    "contents": "escaped\n"
                }
            }
        }
    })
    .to_string()
}

fn cfg_for(api_base: String) -> SbdConfig {
    SbdConfig {
        api_base,
        ..SbdConfig::default()
    }
}

#[test]
fn dir_snapshot_writes_sanitized_tree() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);
    let out = tempdir().unwrap();
    let root = out.path().join("demo-app");

    let request = SnapshotRequest::new("demo-app");
    let written = snapshot_to_dir(&request, &cfg, &root, None).unwrap();
    assert_eq!(written, root);

    assert_eq!(
        std::fs::read_to_string(root.join("package.json")).unwrap(),
        "{\n  \"name\": \"demo\"\n}\n"
    );
    assert_eq!(
        std::fs::read_to_string(root.join("src/index.js")).unwrap(),
        "console.log('hi');\n"
    );
    // The traversal attempt lands at the root, flattened.
    assert_eq!(
        std::fs::read_to_string(root.join("escape.txt")).unwrap(),
        "escaped\n"
    );
    assert!(!root.join("node_modules").exists());
    // Nothing escaped above the output root.
    assert!(!out.path().join("escape.txt").exists());
}

#[test]
fn archive_snapshot_round_trips() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);

    // Exercise the edit-URL path of the host API as well.
    let request = SnapshotRequest::new("https://stackblitz.com/edit/demo-app?file=src/index.js");
    let artifact = snapshot_to_archive(&request, &cfg, None).unwrap();
    assert_eq!(artifact.filename(), "demo-app.zip");

    let mut archive = zip::ZipArchive::new(Cursor::new(artifact.into_bytes())).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, ["escape.txt", "package.json", "src/index.js"]);

    let mut contents = String::new();
    archive
        .by_name("src/index.js")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "console.log('hi');\n");
}

#[test]
fn archive_response_is_attachment_shaped() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);

    let request = SnapshotRequest::new("demo-app");
    let response = snapshot_to_archive(&request, &cfg, None)
        .unwrap()
        .into_response();
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, "application/zip");
    assert_eq!(
        response.content_disposition,
        "attachment; filename=\"demo-app.zip\""
    );
    assert!(!response.body.is_empty());
}

#[test]
fn remote_error_carries_status() {
    let base = api_server::start_with_options(
        "not found".to_string(),
        ApiServerOptions {
            status: "404 Not Found",
            ..Default::default()
        },
    );
    let cfg = cfg_for(base);

    let err = snapshot_to_archive(&SnapshotRequest::new("demo-app"), &cfg, None).unwrap_err();
    match err {
        SnapshotError::Remote { status } => assert_eq!(status, 404),
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[test]
fn missing_file_collection_is_malformed() {
    let base = api_server::start_json(json!({ "project": {} }).to_string());
    let cfg = cfg_for(base);

    let err = snapshot_to_archive(&SnapshotRequest::new("demo-app"), &cfg, None).unwrap_err();
    assert!(matches!(err, SnapshotError::MalformedResponse(_)));
}

#[test]
fn total_budget_fails_whole_archive() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);

    let mut request = SnapshotRequest::new("demo-app");
    request.max_total_size = Some(10);
    let err = snapshot_to_archive(&request, &cfg, None).unwrap_err();
    assert!(matches!(err, SnapshotError::TotalSizeExceeded { .. }));
}

#[test]
fn per_file_budget_names_the_offender() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);

    let mut request = SnapshotRequest::new("demo-app");
    request.max_file_size = Some(4);
    let err = snapshot_to_archive(&request, &cfg, None).unwrap_err();
    match err {
        SnapshotError::FileTooLarge { path, .. } => {
            // First over-limit file in iteration order.
            assert_eq!(path, "escape.txt");
        }
        other => panic!("expected FileTooLarge, got {other:?}"),
    }
}

#[test]
fn stalled_server_times_out() {
    let base = api_server::start_with_options(
        project_json(),
        ApiServerOptions {
            delay: Some(Duration::from_secs(3)),
            ..Default::default()
        },
    );
    let cfg = cfg_for(base);

    let mut request = SnapshotRequest::new("demo-app");
    request.timeout = Some(Duration::from_secs(1));
    let err = snapshot_to_archive(&request, &cfg, None).unwrap_err();
    assert!(matches!(err, SnapshotError::RequestTimeout(_)));
}

#[test]
fn abort_handle_cancels_the_snapshot() {
    let base = api_server::start_json(project_json());
    let cfg = cfg_for(base);

    let handle = AbortHandle::new();
    handle.abort();
    let err =
        snapshot_to_archive(&SnapshotRequest::new("demo-app"), &cfg, Some(&handle)).unwrap_err();
    assert!(matches!(err, SnapshotError::Aborted));
}
