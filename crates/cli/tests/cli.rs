//! End-to-end runs of the `oasproto` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PETSTORE_YAML: &str = r#"
openapi: 3.0.1
paths:
  /pets/{petId}:
    get:
      operationId: showPetById
      responses:
        '200':
          description: A pet
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Pet'
components:
  schemas:
    Pet:
      type: object
      required: [id]
      properties:
        id:
          type: integer
        kind:
          type: string
          enum: [cat, dog]
"#;

fn oasproto(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_oasproto"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn writes_proto_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("petstore.yaml");
    let output = dir.path().join("petstore.proto");
    fs::write(&input, PETSTORE_YAML).unwrap();

    let out = oasproto(&[path_str(&input), path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Wrote proto to "), "unexpected stdout: {stdout}");
    assert!(stdout.trim_end().ends_with("petstore.proto"));

    let proto = fs::read_to_string(&output).unwrap();
    assert!(proto.starts_with("syntax = \"proto3\";\n\npackage generated;\n"));
    assert!(proto.contains(
        "message Pet {\n  enum KindEnum {\n    CAT = 0;\n    DOG = 1;\n  }\n  int32 id = 1;\n  optional KindEnum kind = 2;\n}\n"
    ));
    assert!(proto.contains("  rpc showPetById (google.protobuf.Empty) returns (Pet) {\n"));
    assert!(proto.contains("      get: \"/pets/{petId}\"\n"));
}

#[test]
fn wrong_argument_count_exits_one() {
    let out = oasproto(&["only-one.yaml"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());

    let out = oasproto(&[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_exits_zero() {
    let out = oasproto(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[test]
fn unreadable_or_invalid_input_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.proto");

    let missing = dir.path().join("missing.yaml");
    let out = oasproto(&[path_str(&missing), path_str(&output)]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Errors parsing OpenAPI spec:"), "stderr: {stderr}");
    assert!(stderr.contains("  - "), "stderr: {stderr}");

    let swagger = dir.path().join("swagger.json");
    fs::write(&swagger, r#"{ "swagger": "2.0", "paths": {} }"#).unwrap();
    let out = oasproto(&[path_str(&swagger), path_str(&output)]);
    assert_eq!(out.status.code(), Some(2));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ \"openapi\": ").unwrap();
    let out = oasproto(&[path_str(&broken), path_str(&output)]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!output.exists());
}

#[test]
fn null_document_exits_three() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("null.yaml");
    fs::write(&input, "null\n").unwrap();

    let out = oasproto(&[path_str(&input), path_str(&dir.path().join("out.proto"))]);
    assert_eq!(out.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&out.stderr).contains("result is null"));
}

#[test]
fn write_failure_exits_four() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("petstore.yaml");
    fs::write(&input, PETSTORE_YAML).unwrap();
    let output = dir.path().join("no-such-dir").join("out.proto");

    let out = oasproto(&[path_str(&input), path_str(&output)]);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to write proto file:"));
}

#[test]
fn config_file_and_flags_set_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("petstore.yaml");
    let output = dir.path().join("out.proto");
    let config = dir.path().join("oasproto.toml");
    fs::write(&input, PETSTORE_YAML).unwrap();
    fs::write(&config, "[proto]\npackage = \"pets.v1\"\nservice = \"PetStore\"\n").unwrap();

    let out = oasproto(&[
        path_str(&input),
        path_str(&output),
        "--config",
        path_str(&config),
        "--service",
        "Pets",
    ]);
    assert_eq!(out.status.code(), Some(0));

    let proto = fs::read_to_string(&output).unwrap();
    assert!(proto.contains("package pets.v1;\n"));
    assert!(proto.contains("service Pets {\n"));
}

#[test]
fn bad_config_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("petstore.yaml");
    fs::write(&input, PETSTORE_YAML).unwrap();

    let out = oasproto(&[
        path_str(&input),
        path_str(&dir.path().join("out.proto")),
        "--config",
        path_str(&dir.path().join("absent.toml")),
    ]);
    assert_eq!(out.status.code(), Some(2));
}
