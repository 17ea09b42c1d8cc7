use log::LevelFilter;
use log4rs::config::Logger;
use std::{collections::HashMap, env, mem};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("Logger spec parsing error: {0}")]
    ParseLoggerSpecError(String),

    #[error("Logger configuration error: {0}")]
    ConfigError(String),

    #[error("A global logger is already installed: {0}")]
    SetLoggerError(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct LoggerSpec {
    pub name: String,
    pub level: LevelFilter,
}

impl LoggerSpec {
    pub fn new(name: String, level: LevelFilter) -> Self {
        Self { name, level }
    }

    pub fn logger(&self) -> Logger {
        Logger::builder().build(self.name.clone(), self.level)
    }
}

pub(super) struct Loggers {
    loggers: Vec<LoggerSpec>,
    root_level: LevelFilter,
}

impl Loggers {
    pub fn root_level(&self) -> LevelFilter {
        self.root_level
    }

    pub fn items(&self) -> impl IntoIterator<Item = Logger> + '_ {
        self.loggers.iter().map(|x| x.logger())
    }
}

pub(super) struct Builder {
    loggers: HashMap<String, LevelFilter>,
    root_level: Option<LevelFilter>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { loggers: HashMap::new(), root_level: None }
    }

    pub fn parse_env(&mut self, env: &str) -> &mut Self {
        self.parse_expression(&env::var(env).unwrap_or_default())
    }

    /// Parses a comma separated list of `[target=]level` specs.
    pub fn parse_expression(&mut self, expression: &str) -> &mut Self {
        for spec in expression.split(',').map(|x| x.trim()) {
            if spec.is_empty() {
                continue;
            }
            match parse_spec(spec) {
                Ok((level, Some(name))) => {
                    self.logger(name.to_string(), level);
                }
                Ok((level, None)) => {
                    self.root_level(level);
                }
                Err(err) => println!("Ignoring invalid logging spec '{}'", err),
            }
        }
        self
    }

    pub fn root_level(&mut self, root_level: LevelFilter) -> &mut Self {
        self.root_level.replace(root_level);
        self
    }

    pub fn logger(&mut self, name: String, level: LevelFilter) -> &mut Self {
        self.loggers.insert(name, level);
        self
    }

    pub fn build(&mut self) -> Loggers {
        let loggers = mem::take(&mut self.loggers).into_iter().map(|(name, level)| LoggerSpec::new(name, level)).collect::<Vec<_>>();
        Loggers { loggers, root_level: self.root_level.take().unwrap_or(LevelFilter::Error) }
    }
}

fn parse_spec(spec: &str) -> Result<(LevelFilter, Option<&str>), LogError> {
    let mut parts = spec.split('=');
    match (parts.next(), parts.next().map(|x| x.trim()), parts.next()) {
        // A single log-level token defines the root level, anything else names a target
        (Some(part0), None, None) => match part0.parse() {
            Ok(level) => Ok((level, None)),
            Err(_) => Ok((LevelFilter::max(), Some(part0))),
        },
        (Some(part0), Some(""), None) => Ok((LevelFilter::max(), Some(part0))),
        (Some(part0), Some(part1), None) => {
            part1.parse().map(|level| (level, Some(part0))).map_err(|_| LogError::ParseLoggerSpecError(part1.to_string()))
        }
        _ => Err(LogError::ParseLoggerSpecError(spec.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expression() {
        let loggers = Builder::new().parse_expression("warn, likr_consensus_core=debug, likr_hashes").build();
        assert_eq!(loggers.root_level(), LevelFilter::Warn);

        let mut specs = loggers.loggers.clone();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            specs,
            vec![
                LoggerSpec::new("likr_consensus_core".to_string(), LevelFilter::Debug),
                LoggerSpec::new("likr_hashes".to_string(), LevelFilter::max()),
            ]
        );
    }

    #[test]
    fn test_invalid_specs_are_skipped() {
        let loggers = Builder::new().root_level(LevelFilter::Info).parse_expression("likr=loud,a=b=c").build();
        assert_eq!(loggers.root_level(), LevelFilter::Info);
        assert!(loggers.loggers.is_empty());
        assert_eq!(parse_spec("a=b=c"), Err(LogError::ParseLoggerSpecError("a=b=c".to_string())));
    }

    #[test]
    fn test_default_root_level() {
        let loggers = Builder::new().build();
        assert_eq!(loggers.root_level(), LevelFilter::Error);
    }
}
