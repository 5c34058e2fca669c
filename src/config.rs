//! Quiz configuration from the environment.
//!
//! `main` loads `.env` with `dotenv` first, so every key can live there.
//!
//! | key              | values                    | default    |
//! |------------------|---------------------------|------------|
//! | `QUIZ_MODE`      | `classful`, `subnetting`  | `classful` |
//! | `QUIZ_SEED`      | u64                       | random     |
//! | `QUIZ_ATTEMPTS`  | 1..                       | 3          |
//! | `QUIZ_MAP_STYLE` | `abstract`, `resolved`    | `abstract` |
//! | `QUIZ_OUTPUT`    | `text`, `json`            | `text`     |

use crate::models::QuizMode;
use crate::processing::MapStyle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;

pub const DEFAULT_ATTEMPTS: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub mode: QuizMode,
    pub seed: Option<u64>,
    pub attempts: u32,
    pub map_style: MapStyle,
    pub output: OutputFormat,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            mode: QuizMode::Classful,
            seed: None,
            attempts: DEFAULT_ATTEMPTS,
            map_style: MapStyle::Abstract,
            output: OutputFormat::Text,
        }
    }
}

impl QuizConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> QuizConfig {
        QuizConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Values that do not parse are
    /// logged and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> QuizConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = QuizConfig::default();

        if let Some(mode) = lookup("QUIZ_MODE") {
            match mode.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => log::warn!("QUIZ_MODE: {e}, using {:?}", config.mode),
            }
        }
        if let Some(seed) = lookup("QUIZ_SEED") {
            match seed.trim().parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => log::warn!("QUIZ_SEED={seed:?}: {e}, using a random seed"),
            }
        }
        if let Some(attempts) = lookup("QUIZ_ATTEMPTS") {
            match attempts.trim().parse::<u32>() {
                Ok(n) if n >= 1 => config.attempts = n,
                _ => log::warn!(
                    "QUIZ_ATTEMPTS={attempts:?} is not a positive number, using {}",
                    config.attempts
                ),
            }
        }
        if let Some(style) = lookup("QUIZ_MAP_STYLE") {
            match style.trim().to_ascii_lowercase().as_str() {
                "abstract" => config.map_style = MapStyle::Abstract,
                "resolved" => config.map_style = MapStyle::Resolved,
                _ => log::warn!("QUIZ_MAP_STYLE={style:?} unknown, using abstract"),
            }
        }
        if let Some(output) = lookup("QUIZ_OUTPUT") {
            match output.parse() {
                Ok(output) => config.output = output,
                Err(e) => log::warn!("QUIZ_OUTPUT: {e}, using text"),
            }
        }

        log::debug!("{config:?}");
        config
    }

    /// Random source for the session: seeded when `QUIZ_SEED` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
