//! Integration tests for pubcheck
//!
//! These tests verify:
//! - Loading pubspec.yaml files from disk
//! - The full check against a local registry server
//! - Text report output for the documented scenarios

use mockito::{Mock, Server, ServerGuard};
use pubcheck::check::Checker;
use pubcheck::domain::{CheckReport, SkipReason};
use pubcheck::error::{CheckError, ManifestError};
use pubcheck::manifest::{load_pubspec, Pubspec};
use pubcheck::output::{OutputFormatter, TextFormatter, Verbosity};
use pubcheck::registry::{HttpClient, PubDevAdapter};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a pubspec.yaml into a fresh temp directory
fn write_pubspec(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("pubspec.yaml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

async fn mock_latest(server: &mut ServerGuard, package: &str, version: &str) -> Mock {
    server
        .mock("GET", format!("/api/packages/{}", package).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"name": "{}", "latest": {{"version": "{}"}}}}"#,
            package, version
        ))
        .create_async()
        .await
}

async fn run_check(server: &ServerGuard, pubspec: &Pubspec) -> Result<CheckReport, CheckError> {
    let registry = PubDevAdapter::with_base_url(HttpClient::new().unwrap(), &server.url());
    Checker::new(&registry).check(pubspec).await
}

fn render(report: &CheckReport) -> String {
    let mut buf = Vec::new();
    TextFormatter::new(Verbosity::Normal)
        .format(report, &mut buf)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

mod manifest_loading {
    use super::*;

    #[test]
    fn test_load_flutter_style_pubspec() {
        let (_dir, path) = write_pubspec(
            r#"name: my_app
description: A new Flutter project.
version: 1.0.0+1

environment:
  sdk: ">=3.0.0 <4.0.0"

dependencies:
  flutter:
    sdk: flutter
  http: ^1.1.0
  provider: 6.0.5
  my_fork:
    git:
      url: https://github.com/me/my_fork.git
      ref: main
  local_pkg:
    path: ../local_pkg

dev_dependencies:
  flutter_test:
    sdk: flutter
"#,
        );

        let pubspec = load_pubspec(&path).unwrap();
        assert_eq!(pubspec.name.as_deref(), Some("my_app"));
        let names: Vec<_> = pubspec.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["flutter", "http", "provider", "my_fork", "local_pkg"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_pubspec(&dir.path().join("pubspec.yaml"));
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_fatal() {
        let (_dir, path) = write_pubspec("dependencies:\n  http: [unclosed\n");
        let result = load_pubspec(&path);
        assert!(matches!(result, Err(ManifestError::YamlParseError { .. })));
    }
}

mod scenarios {
    use super::*;

    #[tokio::test]
    async fn test_caret_dependency_outdated() {
        let mut server = Server::new_async().await;
        let mock = mock_latest(&mut server, "foo", "1.2.0").await;
        let (_dir, path) = write_pubspec("dependencies:\n  foo: ^1.0.0\n");

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(render(&report), "Outdated packages:\nfoo: 1.0.0 -> 1.2.0\n");
    }

    #[tokio::test]
    async fn test_equal_version_up_to_date() {
        let mut server = Server::new_async().await;
        let _mock = mock_latest(&mut server, "foo", "1.2.0").await;
        let (_dir, path) = write_pubspec("dependencies:\n  foo: 1.2.0\n");

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        assert_eq!(render(&report), "All packages are up to date!\n");
    }

    #[tokio::test]
    async fn test_git_dependency_skipped_without_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let (_dir, path) =
            write_pubspec("dependencies:\n  bar:\n    git: https://example.com/bar.git\n");

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        let output = render(&report);
        assert!(output.contains("Skipping git repository: bar"));
        assert!(report.is_up_to_date());
    }

    #[tokio::test]
    async fn test_path_dependency_skipped_without_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let (_dir, path) = write_pubspec("dependencies:\n  baz:\n    path: ../baz\n");

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(render(&report).contains("Skipping complex dependency: baz"));
        assert_eq!(report.outdated_count(), 0);
    }

    #[tokio::test]
    async fn test_not_found_package_silently_omitted() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/packages/qux")
            .with_status(404)
            .create_async()
            .await;
        let (_dir, path) = write_pubspec("dependencies:\n  qux: 1.0.0\n");

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        let output = render(&report);
        assert!(!output.contains("qux"));
        assert_eq!(output, "All packages are up to date!\n");
        assert!(matches!(
            report.outcomes[0].skip_reason(),
            Some(SkipReason::LatestUnknown)
        ));
    }

    #[tokio::test]
    async fn test_mixed_manifest_keeps_order() {
        let mut server = Server::new_async().await;
        let _a = mock_latest(&mut server, "zeta", "3.0.0").await;
        let _b = mock_latest(&mut server, "alpha", "1.0.0").await;
        let _c = mock_latest(&mut server, "mid", "0.2.0").await;
        let (_dir, path) = write_pubspec(
            r#"dependencies:
  zeta: ^2.0.0
  bar:
    git: https://example.com/bar.git
  alpha: 1.0.0
  mid: ^0.1.0
"#,
        );

        let report = run_check(&server, &load_pubspec(&path).unwrap())
            .await
            .unwrap();

        assert_eq!(
            render(&report),
            "Skipping git repository: bar\n\
             Outdated packages:\n\
             zeta: 2.0.0 -> 3.0.0\n\
             mid: 0.1.0 -> 0.2.0\n"
        );
    }

    #[tokio::test]
    async fn test_unparseable_version_aborts() {
        let mut server = Server::new_async().await;
        let _mock = mock_latest(&mut server, "foo", "1.2.0").await;
        let (_dir, path) = write_pubspec("dependencies:\n  foo: \">=1.0.0 <2.0.0\"\n");

        let result = run_check(&server, &load_pubspec(&path).unwrap()).await;

        assert!(matches!(result, Err(CheckError::InvalidVersion { .. })));
    }

    #[tokio::test]
    async fn test_repeated_checks_are_identical() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/packages/foo")
            .with_status(200)
            .with_body(r#"{"latest": {"version": "2.0.0"}}"#)
            .expect(2)
            .create_async()
            .await;
        let (_dir, path) = write_pubspec("dependencies:\n  foo: ^1.0.0\n");
        let pubspec = load_pubspec(&path).unwrap();

        let first = run_check(&server, &pubspec).await.unwrap();
        let second = run_check(&server, &pubspec).await.unwrap();

        assert_eq!(first, second);
    }
}
