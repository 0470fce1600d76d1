use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn postboard_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("postboard"))
}

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    postboard_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    temp_dir
}

/// Run a command in `dir` and parse its stdout as a GraphQL JSON response.
fn run_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = postboard_cmd()
        .args(args)
        .current_dir(dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    postboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    postboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("postboard"));
}

#[test]
fn test_schema_prints_sdl() {
    postboard_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type User"))
        .stdout(predicate::str::contains("type Post"))
        .stdout(predicate::str::contains("createUser(name: String!, email: String!): User!"))
        .stdout(predicate::str::contains("userId: Int!"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    postboard_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".postboard.toml").exists());
    assert!(temp_dir.path().join(".postboard").is_dir());

    let config = std::fs::read_to_string(temp_dir.path().join(".postboard.toml")).unwrap();
    assert!(config.contains("port = 4000"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_project();

    postboard_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_custom_database() {
    let temp_dir = TempDir::new().unwrap();

    postboard_cmd()
        .args(["init", "--database", "data/board.json"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".postboard.toml")).unwrap();
    assert!(config.contains("data/board.json"));
    assert!(temp_dir.path().join("data").is_dir());
}

// =============================================================================
// Query and Mutate
// =============================================================================

#[test]
fn test_mutate_then_query_persists() {
    let temp_dir = setup_project();

    let created = run_json(
        &temp_dir,
        &[
            "mutate",
            r#"createUser(name: "Ada", email: "ada@x.com") { id }"#,
        ],
    );
    assert_eq!(created["data"]["createUser"]["id"], 1);

    let created = run_json(
        &temp_dir,
        &["mutate", r#"createPost(details: "hello", userId: 1) { id }"#],
    );
    assert_eq!(created["data"]["createPost"]["id"], 1);

    let fetched = run_json(
        &temp_dir,
        &["query", "{ user(id: 1) { name posts { details } } }"],
    );
    assert_eq!(fetched["data"]["user"]["name"], "Ada");
    assert_eq!(
        fetched["data"]["user"]["posts"],
        serde_json::json!([{ "details": "hello" }])
    );

    assert!(temp_dir.path().join(".postboard/db.json").exists());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = setup_project();

    run_json(
        &temp_dir,
        &[
            "mutate",
            r#"createUser(name: "Grace", email: "grace@x.com") { id }"#,
        ],
    );

    let fetched = run_json(
        &temp_dir,
        &[
            "query",
            "query($id: Int!) { user(id: $id) { email } }",
            "--variables",
            r#"{"id": 1}"#,
        ],
    );
    assert_eq!(fetched["data"]["user"]["email"], "grace@x.com");
}

#[test]
fn test_failed_mutation_reports_generic_error() {
    let temp_dir = setup_project();

    let response = run_json(
        &temp_dir,
        &[
            "mutate",
            r#"updateUser(id: 5, name: "x", email: "y") { id }"#,
        ],
    );
    assert_eq!(response["errors"][0]["message"], "Failed to update user");
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[test]
fn test_in_memory_does_not_persist() {
    let temp_dir = TempDir::new().unwrap();

    run_json(
        &temp_dir,
        &[
            "--in-memory",
            "mutate",
            r#"createUser(name: "Ada", email: "ada@x.com") { id }"#,
        ],
    );

    let listed = run_json(&temp_dir, &["--in-memory", "query", "{ users { id } }"]);
    assert_eq!(listed["data"]["users"], serde_json::json!([]));
    assert!(!temp_dir.path().join(".postboard").exists());
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = setup_project();

    postboard_cmd()
        .args(["query", "{ users { id } }", "--variables", "not json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --variables JSON"));
}

// =============================================================================
// Serve
// =============================================================================

#[test]
fn test_serve_on_taken_port_fails_without_announcing() {
    let temp_dir = TempDir::new().unwrap();
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();

    postboard_cmd()
        .args(["--in-memory", "serve", "--host", "127.0.0.1", "--port", &port])
        .current_dir(temp_dir.path())
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stdout(predicate::str::contains("listening").not())
        .stderr(predicate::str::contains("Failed to bind"));
}
