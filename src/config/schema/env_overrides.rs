use super::Config;

/// Value of `name`, treating a set-but-blank variable as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(key) =
            non_empty_var("SOULMIRROR_API_KEY").or_else(|| non_empty_var("OPENROUTER_API_KEY"))
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("SOULMIRROR_MODEL")
            && !model.is_empty()
        {
            self.remote.model = model;
        }

        if let Ok(base_url) = std::env::var("SOULMIRROR_BASE_URL")
            && !base_url.is_empty()
        {
            self.remote.base_url = base_url;
        }

        if let Ok(temp_str) = std::env::var("SOULMIRROR_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.remote.temperature = temp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::{ENV_LOCK, EnvVarGuard};
    use super::*;

    #[test]
    fn env_key_overrides_config_key() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _primary = EnvVarGuard::set("SOULMIRROR_API_KEY", "sm-env");
        let _secondary = EnvVarGuard::set("OPENROUTER_API_KEY", "or-env");

        let mut config = Config {
            api_key: Some("from-file".into()),
            ..Config::default()
        };
        config.apply_env_overrides();

        assert_eq!(config.api_key(), Some("sm-env"));
    }

    #[test]
    fn openrouter_key_is_used_when_primary_unset() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _primary = EnvVarGuard::unset("SOULMIRROR_API_KEY");
        let _secondary = EnvVarGuard::set("OPENROUTER_API_KEY", "or-env");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key(), Some("or-env"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _primary = EnvVarGuard::set("SOULMIRROR_API_KEY", "");
        let _secondary = EnvVarGuard::unset("OPENROUTER_API_KEY");
        let _model = EnvVarGuard::set("SOULMIRROR_MODEL", "");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert!(config.api_key().is_none());
        assert_eq!(config.remote.model, "anthropic/claude-3-opus-20240229");

        let _fallback = EnvVarGuard::set("OPENROUTER_API_KEY", "or-env");
        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.api_key(), Some("or-env"));
    }

    #[test]
    fn out_of_range_temperature_is_ignored() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _temp = EnvVarGuard::set("SOULMIRROR_TEMPERATURE", "3.5");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert!((config.remote.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn model_and_base_url_overrides_apply() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _model = EnvVarGuard::set("SOULMIRROR_MODEL", "openai/gpt-4o-mini");
        let _url = EnvVarGuard::set("SOULMIRROR_BASE_URL", "http://127.0.0.1:9999/v1");
        let _temp = EnvVarGuard::set("SOULMIRROR_TEMPERATURE", "0.3");

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.remote.model, "openai/gpt-4o-mini");
        assert_eq!(config.remote.base_url, "http://127.0.0.1:9999/v1");
        assert!((config.remote.temperature - 0.3).abs() < f64::EPSILON);
    }
}
