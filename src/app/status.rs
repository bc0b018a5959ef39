use soulmirror::{CircuitBreaker, Config, ReflectionReport, SuggestionResponse};

pub fn render_status(config: &Config, circuit: &CircuitBreaker) -> String {
    let mode = if circuit.is_disabled() {
        "offline (quota exhausted; run `soulmirror reset` to retry online)"
    } else if config.api_key().is_none() {
        "offline (no API key configured)"
    } else {
        "online"
    };

    [
        "◆ soulmirror status".to_string(),
        String::new(),
        format!("  Version     {}", env!("CARGO_PKG_VERSION")),
        format!("  Config      {}", config.config_path.display()),
        format!("  State       {}", config.state_path.display()),
        String::new(),
        format!("  Endpoint    {}", config.remote.base_url),
        format!("  Model       {}", config.remote.model),
        format!("  API key     {}", if config.api_key().is_some() { "set" } else { "missing" }),
        format!("  Mode        {mode}"),
    ]
    .join("\n")
}

fn render_suggestion(suggestion: &SuggestionResponse) -> String {
    format!(
        "  [{}] {}\n      {}",
        suggestion.kind, suggestion.title, suggestion.message
    )
}

pub fn render_report(report: &ReflectionReport) -> String {
    let mut lines = Vec::new();

    for category in soulmirror::Category::ALL {
        let analysis = report.analysis(category);
        lines.push(format!("◆ {category} ({}/100)", analysis.score));
        if !analysis.insights.is_empty() {
            lines.push(format!("  {}", analysis.insights));
        }
        if !analysis.suggestions.is_empty() {
            lines.push(format!("  → {}", analysis.suggestions));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "◆ Overall {}/100 · {}",
        report.overall.average_score, report.overall.stage
    ));
    lines.push(format!("  {}", report.overall.message));
    lines.push(String::new());

    lines.push("◆ Suggestions".to_string());
    lines.extend(report.suggestions.iter().map(render_suggestion));
    lines.push(String::new());

    lines.push("◆ Journal prompts".to_string());
    lines.extend(report.journal_prompts.iter().map(|prompt| format!("  - {prompt}")));
    lines.push(String::new());

    lines.push("◆ Share".to_string());
    lines.push(format!("  {}", report.share_summary));
    lines.push(String::new());

    lines.push(report.personalized_feedback.clone());

    if report.offline {
        lines.push(String::new());
        lines.push("(offline mode: remote analysis is disabled)".to_string());
    }

    lines.join("\n")
}
