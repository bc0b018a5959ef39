use crate::error::AnalysisError;
use async_trait::async_trait;

/// Per-request model parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ModelSettings {
    pub fn new(model: impl Into<String>, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }
}

/// A remote chat-completion backend.
///
/// Implementations make exactly one attempt per call. Retries and fallback
/// are decided by the caller, which sees every failure as an
/// [`AnalysisError`].
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        settings: &ModelSettings,
    ) -> Result<String, AnalysisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    #[async_trait]
    impl Provider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn chat_with_system(
            &self,
            system_prompt: Option<&str>,
            message: &str,
            settings: &ModelSettings,
        ) -> Result<String, AnalysisError> {
            Ok(format!(
                "{}|{message}|{}",
                system_prompt.unwrap_or("-"),
                settings.model
            ))
        }
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let provider: Box<dyn Provider> = Box::new(EchoProvider);
        let settings = ModelSettings::new("m", 0.5, 10);

        let reply = provider
            .chat_with_system(Some("sys"), "hi", &settings)
            .await
            .unwrap();

        assert_eq!(provider.name(), "echo");
        assert_eq!(reply, "sys|hi|m");
    }
}
