/// End-to-end tests for the CLI
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::http_fixture::FixtureServer;

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("stock-fetcher").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("stock-fetcher").arg("--version").assert().code(0);
    }

    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("stock-fetcher")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_invalid_mode() {
        cargo_bin_cmd!("stock-fetcher")
            .args(["--mode", "query"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_missing_config_file() {
        cargo_bin_cmd!("stock-fetcher")
            .args(["--config", "/nonexistent/stock-fetcher.config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_exit_code_output_directory_missing() {
        cargo_bin_cmd!("stock-fetcher")
            .args(["-o", "/nonexistent/directory/stock.html"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}

#[test]
fn test_missing_dealer_id_renders_message() {
    cargo_bin_cmd!("stock-fetcher")
        .arg("--no-stylesheet")
        .assert()
        .code(0)
        .stdout("<p class=\"message\">Dealer ID not provided.</p>\n");
}

#[test]
fn test_dealer_stock_rendered_to_stdout() {
    let server = FixtureServer::start(vec![(
        "200 OK",
        r#"[{"make":"Toyota","model":"Corolla","images":[]}]"#.to_string(),
    )]);

    cargo_bin_cmd!("stock-fetcher")
        .args(["-d", "2343", "-b", &server.base_url, "--quiet"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "<link rel=\"stylesheet\" href=\"./wc-stock-fetcher/wc-stock-fetcher.css\" />",
        ))
        .stdout(predicate::str::contains(
            "<h3 class=\"numberOfStock\">1 Stock Items</h3>",
        ))
        .stdout(predicate::str::contains("Toyota - Corolla"))
        .stdout(predicate::str::contains("placehold.co"));

    assert_eq!(server.paths(), vec!["/dealer_2343/stock.json".to_string()]);
}

#[test]
fn test_server_error_renders_message_and_succeeds() {
    let server = FixtureServer::start(vec![("500 Internal Server Error", "{}".to_string())]);

    cargo_bin_cmd!("stock-fetcher")
        .args(["-d", "2343", "-b", &server.base_url, "--no-stylesheet"])
        .assert()
        .code(0)
        .stdout("<p class=\"message\">Network response was not ok</p>\n")
        .stderr(predicate::str::contains("Network response was not ok"));
}

#[test]
fn test_query_string_attributes() {
    let server = FixtureServer::start(vec![("200 OK", "[]".to_string())]);

    cargo_bin_cmd!("stock-fetcher")
        .args([
            "-q",
            "?dealer-id=88&primary-col=%23c00",
            "-b",
            &server.base_url,
            "--no-stylesheet",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "<style>:host { --primaryCol: #c00; }</style>",
        ))
        .stdout(predicate::str::contains("0 Stock Items"));

    assert_eq!(server.paths(), vec!["/dealer_88/stock.json".to_string()]);
}

#[test]
fn test_endpoint_mode() {
    let server = FixtureServer::start(vec![(
        "200 OK",
        r#"{"message":"Nothing listed yet"}"#.to_string(),
    )]);

    cargo_bin_cmd!("stock-fetcher")
        .args([
            "-e",
            "inventory/latest.json",
            "-b",
            &server.base_url,
            "--no-stylesheet",
        ])
        .assert()
        .code(0)
        .stdout("<p class=\"message\">Nothing listed yet</p>\n");

    assert_eq!(server.paths(), vec!["/inventory/latest.json".to_string()]);
}

#[test]
fn test_output_file_and_config() {
    let server = FixtureServer::start(vec![(
        "200 OK",
        r#"[{"make":"Ford","model":"Ranger","colour":"Blue"}]"#.to_string(),
    )]);
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("stock-fetcher.config.yml");
    fs::write(
        &config_path,
        format!(
            "base_url: {}\nstylesheet: ./theme.css\nprimary_col: teal\n",
            server.base_url
        ),
    )
    .unwrap();
    let output_path = dir.path().join("stock.html");

    cargo_bin_cmd!("stock-fetcher")
        .current_dir(dir.path())
        .args(["-d", "5", "-o", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stdout("");

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("href=\"./theme.css\""));
    assert!(html.contains("--primaryCol: teal;"));
    assert!(html.contains("<strong>Color</strong> Blue"));
    assert_eq!(server.paths(), vec!["/dealer_5/stock.json".to_string()]);
}
