//! Integration tests for the routeproto binary.
//!
//! Each test runs the compiled binary inside its own temporary directory.

#![allow(non_snake_case)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const ROUTES: &str = r#"[
  {
    "method": "GET",
    "url": "/users/:id",
    "schema": {
      "params": {
        "type": "object",
        "properties": { "id": { "type": "number" } },
        "required": ["id"]
      },
      "response": {
        "200": {
          "type": "object",
          "properties": { "name": { "type": "string" } }
        }
      }
    }
  },
  { "method": "DELETE", "url": "/users/:id" }
]"#;

fn routeproto(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routeproto"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn write_routes(dir: &TempDir) {
    fs::write(dir.path().join("routes.json"), ROUTES).unwrap();
}

// =============================================================================
// Compile Command Tests
// =============================================================================

mod compile {
    use super::*;

    #[test]
    fn compile___routes_and_service_name___prints_document() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);

        let output = routeproto(
            dir.path(),
            &["compile", "--routes", "routes.json", "--service-name", "users"],
        );

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.starts_with("message GetUsersByIdRequest {"));
        assert!(stdout.contains("  required uint32 id = 0;"));
        assert!(stdout.contains(
            "rpc GetUsersById( GetUsersByIdRequest ) returns( GetUsersByIdResponse )"
        ));
        assert!(stdout.contains("rpc DeleteUsersById( google.protobuf.Empty ) returns( string )"));
        assert!(stdout.contains("option (msp.http).templatedUrl = \"/users/users/:id\";"));
    }

    #[test]
    fn compile___document_title___names_service() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);
        fs::write(
            dir.path().join("openapi.json"),
            r#"{"info":{"title":"accounts"}}"#,
        )
        .unwrap();

        let output = routeproto(
            dir.path(),
            &["compile", "--routes", "routes.json", "--document", "openapi.json"],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("option (msp.net).alias = \"accounts\";"));
    }

    #[test]
    fn compile___output_flag___writes_file() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);

        let output = routeproto(
            dir.path(),
            &[
                "compile",
                "--routes",
                "routes.json",
                "--service-name",
                "users",
                "--output",
                "users.proto",
            ],
        );

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        let written = fs::read_to_string(dir.path().join("users.proto")).unwrap();
        assert!(written.trim_end().ends_with('}'));
        assert!(written.contains("service Service {"));
    }

    #[test]
    fn compile___manifest_in_working_dir___is_picked_up() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);
        fs::write(
            dir.path().join("routeproto.toml"),
            r#"
[service]
name = "users"

[input]
routes = "routes.json"

[output]
path = "out/users.proto"

[compiler]
presence = "comment"
"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("out")).unwrap();

        let output = routeproto(dir.path(), &["compile"]);

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let written = fs::read_to_string(dir.path().join("out/users.proto")).unwrap();
        assert!(written.contains("  uint32 id = 0; // required"));
    }

    #[test]
    fn compile___missing_service_name___fails() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);

        let output = routeproto(dir.path(), &["compile", "--routes", "routes.json"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.to_lowercase().contains("service name"));
    }

    #[test]
    fn compile___missing_routes___fails() {
        let dir = TempDir::new().unwrap();

        let output = routeproto(dir.path(), &["compile", "--service-name", "users"]);

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("No routes file given"));
    }

    #[test]
    fn compile___debug_log_level___logs_to_stderr() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);

        let output = routeproto(
            dir.path(),
            &[
                "compile",
                "--routes",
                "routes.json",
                "--service-name",
                "users",
                "--log-level",
                "debug",
            ],
        );

        assert!(output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("[DEBUG]"));
        assert!(stderr.contains("compiling route"));
    }

    #[test]
    fn compile___invalid_log_level___fails() {
        let dir = TempDir::new().unwrap();
        write_routes(&dir);

        let output = routeproto(
            dir.path(),
            &["compile", "--routes", "routes.json", "--log-level", "chatty"],
        );

        assert!(!output.status.success());
    }
}

// =============================================================================
// Check Command Tests
// =============================================================================

mod check {
    use super::*;

    #[test]
    fn check___valid_manifest___succeeds() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("routeproto.toml"),
            "[service]\nname = \"users\"\n",
        )
        .unwrap();

        let output = routeproto(dir.path(), &["check"]);

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Manifest is valid!"));
        assert!(stdout.contains("Service: users"));
    }

    #[test]
    fn check___empty_service_name___fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.toml"), "[service]\nname = \"\"\n").unwrap();

        let output = routeproto(dir.path(), &["check", "--manifest", "custom.toml"]);

        assert!(!output.status.success());
    }

    #[test]
    fn check___missing_manifest___fails() {
        let dir = TempDir::new().unwrap();

        let output = routeproto(dir.path(), &["check"]);

        assert!(!output.status.success());
    }
}
