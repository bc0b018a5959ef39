use crate::remote_harness::{any_request, completion, config_for, quota_exhausted};
use soulmirror::{Category, ReflectionEntries, ReflectionPipeline};
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

fn entries() -> ReflectionEntries {
    ReflectionEntries::new(
        "We talk past each other whenever money comes up.",
        "She asked how my day went and actually listened.",
        "I wonder whether moving in together is too soon.",
    )
}

#[tokio::test]
async fn quota_exhaustion_persists_across_restarts_until_reset() {
    let server = MockServer::start().await;
    // The three analyses run concurrently and may all be in flight before
    // the first rejection trips the breaker; the suggestion call never is.
    any_request(quota_exhausted())
        .expect(1..=3)
        .named("quota rejections")
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));

    let report = ReflectionPipeline::from_config(&config).run(&entries()).await;
    for category in Category::ALL {
        assert_eq!(report.analysis(category).score, 50);
    }
    assert!(report.offline);
    assert!(config.state_path.exists());
    server.verify().await;

    // A fresh pipeline over the same state file stays offline.
    server.reset().await;
    any_request(ResponseTemplate::new(200).set_body_json(completion("{\"score\": 90}")))
        .expect(0)
        .named("calls while disabled")
        .mount(&server)
        .await;

    let restarted = ReflectionPipeline::from_config(&config);
    assert!(restarted.circuit().is_disabled());
    let report = restarted.run(&entries()).await;
    assert!(report.offline);
    assert_eq!(report.overall.average_score, 50);
    server.verify().await;

    // Explicit reset re-enables remote calls.
    server.reset().await;
    any_request(ResponseTemplate::new(200).set_body_json(completion("{\"score\": 90}")))
        .expect(1)
        .named("calls after reset")
        .mount(&server)
        .await;

    restarted.circuit().reset().unwrap();
    let analysis = restarted
        .analysis()
        .analyze("We talk past each other.", Category::Misaligned)
        .await;
    assert_eq!(analysis.score, 90);
    assert!(!restarted.circuit().is_disabled());
}

#[tokio::test]
async fn server_errors_fall_back_without_tripping() {
    let server = MockServer::start().await;
    any_request(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .expect(4)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let pipeline = ReflectionPipeline::from_config(&config);
    let report = pipeline.run(&entries()).await;

    assert_eq!(report.overall.average_score, 50);
    assert!(!report.offline);
    assert!(!pipeline.circuit().is_disabled());
}

#[tokio::test]
async fn insufficient_credits_deep_in_a_long_body_trips_breaker() {
    let server = MockServer::start().await;
    // The signal sits past the prefix kept for logging.
    let body = format!(
        "{{\"error\":{{\"metadata\":\"{}\",\"message\":\"Insufficient credits\"}}}}",
        "x".repeat(250)
    );
    any_request(ResponseTemplate::new(400).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let pipeline = ReflectionPipeline::from_config(&config);

    let analysis = pipeline
        .analysis()
        .analyze("we argue", Category::Misaligned)
        .await;

    assert_eq!(analysis.score, 50);
    assert!(pipeline.circuit().is_disabled());
}

#[tokio::test]
async fn insufficient_credits_body_trips_even_without_402() {
    let server = MockServer::start().await;
    any_request(
        ResponseTemplate::new(400)
            .set_body_string("{\"error\":{\"message\":\"INSUFFICIENT CREDITS for this request\"}}"),
    )
    .expect(1..=3)
    .mount(&server)
    .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let report = ReflectionPipeline::from_config(&config).run(&entries()).await;

    assert!(report.offline);
}
