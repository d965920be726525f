use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub refresh_minutes: u64,
    pub daily_count: usize,
    pub model: String,
    pub api_key: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "3000"),
            refresh_minutes: try_load("REFRESH_MINUTES", "120"),
            daily_count: try_load("DAILY_QUESTION_COUNT", "5"),
            model: try_load("OPENAI_MODEL", "gpt-4o-mini"),
            api_key: must_load("OPENAI_API_KEY"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn must_load(key: &str) -> String {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} is not set");
        })
        .expect("Environment misconfigured!")
}
