//! Shared test doubles.

use crate::error::AnalysisError;
use crate::providers::{ModelSettings, Provider};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type Reply = Box<dyn Fn() -> Result<String, AnalysisError> + Send + Sync>;

/// Provider that returns a fixed reply and records every prompt it receives.
pub(crate) struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(Option<String>, String)>>,
}

impl ScriptedProvider {
    pub(crate) fn replying(content: &str) -> Self {
        let content = content.to_string();
        Self::with_reply(Box::new(move || Ok(content.clone())))
    }

    pub(crate) fn failing(error: fn() -> AnalysisError) -> Self {
        Self::with_reply(Box::new(move || Err(error())))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<(Option<String>, String)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn chat_with_system(
        &self,
        system_prompt: Option<&str>,
        message: &str,
        _settings: &ModelSettings,
    ) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.map(str::to_string), message.to_string()));
        (self.reply)()
    }
}
