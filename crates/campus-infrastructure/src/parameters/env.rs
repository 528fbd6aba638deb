//! Environment-backed parameter source for local development

use std::collections::HashMap;

use async_trait::async_trait;

use super::{ParameterError, ParameterSource};

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves each parameter name through [`env_var_name`].
pub struct EnvParameterSource {
    lookup: Lookup,
}

impl EnvParameterSource {
    pub fn new() -> Self {
        Self::with_lookup(|var| std::env::var(var).ok())
    }

    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self { lookup: Box::new(lookup) }
    }
}

impl Default for EnvParameterSource {
    fn default() -> Self {
        Self::new()
    }
}

/// `/backend/db/host` -> `BACKEND_DB_HOST`
pub fn env_var_name(parameter: &str) -> String {
    let mut var = String::with_capacity(parameter.len());
    for ch in parameter.chars() {
        if ch.is_ascii_alphanumeric() {
            var.push(ch.to_ascii_uppercase());
        } else if !var.ends_with('_') {
            var.push('_');
        }
    }
    var.trim_matches('_').to_string()
}

#[async_trait]
impl ParameterSource for EnvParameterSource {
    async fn get_parameters(&self, names: &[String]) -> Result<HashMap<String, String>, ParameterError> {
        Ok(names
            .iter()
            .filter_map(|name| (self.lookup)(&env_var_name(name)).map(|value| (name.clone(), value)))
            .collect())
    }
}
