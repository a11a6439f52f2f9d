//! Commands that work from the built-in catalog or local config only.

use trendlens_testing::{MockTrendsServer, TestWorld, assertions};

#[test]
fn test_topics_lists_catalog() -> anyhow::Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&["topics"])?.json()?;
    assert_eq!(json["content"]["source"], "catalog");
    assertions::assert_content_len(&json, "topics", 3)?;
    assert_eq!(json["content"]["topics"][0]["id"], "broadband");
    assert_eq!(
        json["content"]["topics"][0]["sub_topics"][0]["keywords"][1],
        "Xfinity"
    );
    Ok(())
}

#[test]
fn test_topics_single_topic() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["topics", "--topic", "mobile"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Mobile"));
    assert!(!result.stdout().contains("Broadband"));
    Ok(())
}

#[test]
fn test_topics_unknown_topic_lists_available() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["topics", "--topic", "satellite"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Unknown topic 'satellite'"));
    assert!(result.stderr().contains("broadband, cord_cutting, mobile"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_topics_remote() -> anyhow::Result<()> {
    let server = MockTrendsServer::start().await.with_topics().await;
    let world = TestWorld::new().with_api_url(&server.uri()).json();

    let json = world.run(&["topics", "--remote"])?.json()?;
    assert_eq!(json["content"]["source"], "remote");
    assert_eq!(json["content"]["topics"][0]["keywords"][1], "Starlink");
    Ok(())
}

#[test]
fn test_config_show_defaults_without_file() -> anyhow::Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&["config", "show"])?.json()?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["base_url"], "http://localhost:8000");
    assert_eq!(json["content"]["geo"], "US");
    assert_eq!(json["content"]["timeframe"], "today 12-m");
    assert_eq!(json["suggestions"][0]["command"], "trendlens config init");
    Ok(())
}

#[test]
fn test_api_url_overrides() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_api_url("http://from-file:8000")
        .with_env("TRENDLENS_API_URL", "http://from-env:8000")
        .json();

    let json = world.run(&["config", "show"])?.json()?;
    assert_eq!(json["content"]["base_url"], "http://from-env:8000");

    let json = world
        .run(&["config", "show", "--api-url", "http://from-flag:8000"])?
        .json()?;
    assert_eq!(json["content"]["base_url"], "http://from-flag:8000");
    Ok(())
}

#[test]
fn test_config_init_refuses_overwrite() -> anyhow::Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&["config", "init"])?.json()?;
    assert_eq!(json["content"]["overwritten"], false);
    assert!(world.config_path().exists());

    let again = world.run(&["config", "init"])?;
    assert!(!again.success());
    assert!(again.stderr().contains("--force"));

    let json = world.run(&["config", "init", "--force"])?.json()?;
    assert_eq!(json["content"]["overwritten"], true);

    let written = std::fs::read_to_string(world.config_path())?;
    assert!(written.contains("base_url = \"http://localhost:8000\""));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[api]\nbase_url = \"localhost\"\n");

    let result = world.run(&["topics"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("api.base_url"));
    Ok(())
}

#[test]
fn test_env_url_rescues_invalid_file_url() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config("[api]\nbase_url = \"localhost:8000\"\n")
        .with_env("TRENDLENS_API_URL", "http://127.0.0.1:9000")
        .json();

    let result = world.run(&["config", "show"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json()?["content"]["base_url"], "http://127.0.0.1:9000");
    Ok(())
}

#[test]
fn test_no_command_prints_guidance() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("trendlens health"));
    assert!(result.stdout().contains("trendlens config init"));
    Ok(())
}

#[test]
fn test_dashboard_requires_terminal() -> anyhow::Result<()> {
    let world = TestWorld::new().with_api_url("http://127.0.0.1:9");
    let log_file = world.temp_dir().join("dash.log");
    let log_arg = log_file.to_string_lossy().to_string();

    let result = world.run(&["dashboard", "--log-file", &log_arg])?;
    assert!(!result.success());
    assert!(result.stderr().contains("interactive terminal"));
    Ok(())
}
