use hf_proxy_rust::config::{self, Config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"
inference:
  api_base: "http://localhost:8000"
  model: "facebook/blenderbot-400M-distill"
  timeout_secs: 30
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, content).await.unwrap();
    path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from_file(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.inference.api_base, "http://localhost:8000");
    assert_eq!(config.inference.model, "facebook/blenderbot-400M-distill");
    assert_eq!(config.inference.timeout_secs, Some(30));
    assert!(config.inference.token().is_none());
}

#[tokio::test]
async fn test_environment_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let mut config = config::load_from_file(&path).await.unwrap();
    config
        .apply_overrides(|key| match key {
            "PORT" => Some("7000".to_string()),
            "HF_TOKEN" => Some("hf_from_env".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.inference.token(), Some("hf_from_env"));
    assert_eq!(config.inference.model, "facebook/blenderbot-400M-distill");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = config::load_from_file(&path.to_string_lossy())
        .await
        .unwrap_err();

    assert!(matches!(err, hf_proxy_rust::Error::Io(_)));
}

#[tokio::test]
async fn test_invalid_yaml_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "server: [not, a, map]").await;

    let err = config::load_from_file(&path).await.unwrap_err();
    assert!(matches!(err, hf_proxy_rust::Error::Yaml(_)));
}

#[test]
fn test_empty_environment_keeps_defaults() {
    let mut config = Config::default();
    config.apply_overrides(|_| None).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.inference.model, "Claude 3.5 Haiku");
}
