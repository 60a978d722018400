use anyhow::Result;
use httpmock::prelude::*;
use job_match::app::build_engine;
use job_match::{CliConfig, LocalStorage, MatchError, RecommendationResult, TomlConfig};
use tempfile::TempDir;

fn cli_config(jobs: String, members: String, output: Option<String>) -> CliConfig {
    CliConfig {
        jobs,
        members,
        output,
        format: None,
        strict: false,
        timeout_seconds: 5,
        config: None,
        verbose: false,
        log_json: false,
    }
}

fn read_results(path: &std::path::Path) -> Result<Vec<RecommendationResult>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[tokio::test]
async fn test_end_to_end_over_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let jobs_mock = server.mock(|when, then| {
        when.method(GET).path("/jobs.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"title": "Backend Engineer", "location": "Berlin"},
                {"title": "Backend Engineer", "location": "Paris"},
                {"title": "Pastry Chef", "location": "Paris"}
            ]));
    });
    let members_mock = server.mock(|when, then| {
        when.method(GET).path("/members.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"name": "Ana", "bio": "I am a backend engineer living in berlin"},
                {"name": "Ben", "bio": "I love painting and hiking"},
                {"name": "Cleo", "bio": "Engineer relocating to Paris!"},
                {"name": "Dev", "bio": ""}
            ]));
    });

    let config = cli_config(
        server.url("/jobs.json"),
        server.url("/members.json"),
        Some("results.json".to_string()),
    );
    let engine = build_engine(&config, LocalStorage::new(temp_dir.path()))?;
    let summary = engine.run().await?;

    jobs_mock.assert();
    members_mock.assert();
    assert_eq!(summary.jobs, 3);
    assert_eq!(summary.members, 4);
    assert_eq!(summary.members_with_matches, 2);
    assert_eq!(summary.output, "results.json");

    let results = read_results(&temp_dir.path().join("results.json"))?;
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Ben", "Cleo", "Dev"]);
    assert_eq!(results[0].recommended_jobs, vec!["Backend Engineer, Berlin"]);
    assert_eq!(results[1].recommended_jobs, vec!["No suitable job found"]);
    assert_eq!(results[2].recommended_jobs, vec!["Backend Engineer, Paris"]);
    assert_eq!(results[3].recommended_jobs, vec!["No suitable job found"]);

    Ok(())
}

#[tokio::test]
async fn test_provider_failure_stops_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/jobs.json");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/members.json");
        then.status(500);
    });

    let config = cli_config(
        server.url("/jobs.json"),
        server.url("/members.json"),
        Some("results.json".to_string()),
    );
    let engine = build_engine(&config, LocalStorage::new(temp_dir.path()))?;
    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MatchError::Provider { status: 500, .. }));
    assert!(!temp_dir.path().join("results.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_file_sources_with_csv_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("jobs.json"),
        r#"[{"title": "UX Designer", "location": "London"}, {"title": "Data Analyst", "location": "Leeds"}]"#,
    )?;
    std::fs::write(
        temp_dir.path().join("members.json"),
        r#"[{"name": "Hassan", "bio": "Designer who also enjoys data analysis"}]"#,
    )?;

    let mut config = cli_config(
        "jobs.json".to_string(),
        "members.json".to_string(),
        Some("out/results.csv".to_string()),
    );
    config.format = Some(job_match::OutputFormat::Csv);

    build_engine(&config, LocalStorage::new(temp_dir.path()))?
        .run()
        .await?;

    let csv = std::fs::read_to_string(temp_dir.path().join("out/results.csv"))?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "name,recommended_job",
            "Hassan,\"UX Designer, London\"",
            "Hassan,\"Data Analyst, Leeds\"",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_toml_config_with_strict_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("jobs.json"),
        r#"[{"title": "Chef", "location": "Rome"}]"#,
    )?;
    std::fs::write(
        temp_dir.path().join("members.json"),
        r#"[{"name": "", "bio": "chef"}]"#,
    )?;

    let config = TomlConfig::from_toml_str(
        r#"
[source]
jobs = "jobs.json"
members = "members.json"

[output]
path = "results.json"

[matching]
strict = true
"#,
    )?;

    let err = build_engine(&config, LocalStorage::new(temp_dir.path()))?
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, MatchError::InvalidRecord { .. }));
    assert!(!temp_dir.path().join("results.json").exists());

    Ok(())
}
