use crate::remote_harness::{
    analysis_mock, any_request, completion, config_for, suggestion_mock,
};
use soulmirror::{
    Category, ReflectionEntries, ReflectionPipeline, Stage, SuggestionKind,
};
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

fn entries() -> ReflectionEntries {
    ReflectionEntries::new(
        "We keep having the same fight about chores and it never resolves.",
        "We started walking together after dinner and it feels good.",
        "I'm not sure we want the same things in five years.",
    )
}

#[tokio::test]
async fn full_run_uses_remote_analyses_and_suggestions() {
    let server = MockServer::start().await;
    analysis_mock(ResponseTemplate::new(200).set_body_json(completion(
        r#"{"score": 72, "insights": "You name the pattern.", "suggestions": "Say it sooner."}"#,
    )))
    .expect(3)
    .mount(&server)
    .await;
    suggestion_mock(ResponseTemplate::new(200).set_body_json(completion(
        "```json\n[\n{\"type\":\"growth\",\"title\":\"Keep Walking\",\"message\":\"Guard the evening walks.\"},\n{\"type\":\"caution\",\"title\":\"Old Fights\",\"message\":\"Chores are a proxy.\"},\n{\"type\":\"action\",\"title\":\"Extra\",\"message\":\"Dropped.\"}\n]\n```",
    )))
    .expect(1)
    .mount(&server)
    .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let report = ReflectionPipeline::from_config(&config).run(&entries()).await;

    for category in Category::ALL {
        let analysis = report.analysis(category);
        assert_eq!(analysis.score, 72);
        assert_eq!(analysis.insights, "You name the pattern.");
    }
    assert_eq!(report.overall.average_score, 72);
    assert_eq!(report.overall.stage, Stage::AdvancedUnderstanding);
    assert_eq!(report.suggestions.len(), 2);
    assert_eq!(report.suggestions[0].kind, SuggestionKind::Growth);
    assert_eq!(report.suggestions[1].title, "Old Fights");
    assert!(report.share_summary.contains("honest wandering"));
    assert!(!report.offline);
}

#[tokio::test]
async fn free_form_and_malformed_replies_still_produce_a_report() {
    let server = MockServer::start().await;
    analysis_mock(ResponseTemplate::new(200).set_body_json(completion(
        "Honestly I'd put this at 64/100.\nInsight: the chores are a stand-in.\nYou could ask what the chores mean.",
    )))
    .expect(3)
    .mount(&server)
    .await;
    suggestion_mock(ResponseTemplate::new(200).set_body_json(completion("not an array")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let report = ReflectionPipeline::from_config(&config).run(&entries()).await;

    assert_eq!(report.misaligned.score, 64);
    assert_eq!(report.misaligned.insights, "the chores are a stand-in.");
    assert_eq!(report.overall.average_score, 64);
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.suggestions[0].kind, SuggestionKind::Growth);
    assert!(!report.offline);
}

#[tokio::test]
async fn blank_entries_never_reach_the_network() {
    let server = MockServer::start().await;
    any_request(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, Some("or-test-key"));
    let report = ReflectionPipeline::from_config(&config)
        .run(&ReflectionEntries::new("", "   ", "\n"))
        .await;

    assert_eq!(report.overall.average_score, 0);
    assert_eq!(report.overall.stage, Stage::Beginning);
    assert_eq!(report.suggestions[0].title, "Beginning Your Journey");
    assert!(report.personalized_feedback.starts_with("Share your reflections"));
}

#[tokio::test]
async fn missing_credential_uses_offline_voice_without_tripping() {
    let server = MockServer::start().await;
    any_request(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, None);
    let pipeline = ReflectionPipeline::from_config(&config);
    let report = pipeline.run(&entries()).await;

    assert_eq!(report.overall.average_score, 50);
    assert_eq!(report.suggestions[0].kind, SuggestionKind::Growth);
    assert!(!report.offline);
    assert!(!pipeline.circuit().is_disabled());
}

#[tokio::test]
async fn report_serializes_for_json_output() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, None);
    let report = ReflectionPipeline::from_config(&config).run(&entries()).await;

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overall"]["averageScore"], 50);
    assert_eq!(json["overall"]["stage"], "Developing Awareness");
    assert_eq!(json["suggestions"][0]["type"], "growth");
    assert!(json["journalPrompts"].as_array().unwrap().len() >= 2);
    assert_eq!(json["offline"], false);
}
