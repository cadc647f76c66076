#![cfg(feature = "std")]

//! Stderr logger configured from `SEABATTLE_LOG`.
//!
//! The variable holds comma separated directives: a bare level sets the
//! default, `target=level` overrides it for one module and its children.
//! `warn,game=info` keeps the engine quiet but shows turn reports;
//! `fleet=debug` traces placement retries. Targets may be written with or
//! without the `sea_battle::` prefix.

use std::env;
use std::sync::OnceLock;

use log::{LevelFilter, Metadata, Record};

const CRATE_PREFIX: &str = "sea_battle::";

/// Parsed `SEABATTLE_LOG` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogFilter {
    default: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

impl LogFilter {
    /// Parse a directive list. Directives with an unknown level are skipped.
    pub(crate) fn parse(spec: &str, default: LevelFilter) -> Self {
        let mut filter = LogFilter {
            default,
            targets: Vec::new(),
        };
        for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    if let Ok(level) = level.trim().parse() {
                        let target = target.trim();
                        let target = target.strip_prefix(CRATE_PREFIX).unwrap_or(target);
                        filter.targets.push((target.to_string(), level));
                    }
                }
                None => {
                    if let Ok(level) = directive.parse() {
                        filter.default = level;
                    }
                }
            }
        }
        // longest target wins, later directives break ties
        filter.targets.reverse();
        filter.targets.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        filter
    }

    /// Level in force for a record target such as `sea_battle::agent::computer`.
    pub(crate) fn level_for(&self, target: &str) -> LevelFilter {
        let target = short_target(target);
        self.targets
            .iter()
            .find(|(prefix, _)| {
                target == prefix
                    || target
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with("::"))
            })
            .map(|(_, level)| *level)
            .unwrap_or(self.default)
    }

    /// Loosest level any target can reach, for `log::set_max_level`.
    pub(crate) fn max_level(&self) -> LevelFilter {
        self.targets
            .iter()
            .map(|(_, level)| *level)
            .fold(self.default, Ord::max)
    }
}

fn short_target(target: &str) -> &str {
    target.strip_prefix(CRATE_PREFIX).unwrap_or(target)
}

struct StderrLogger {
    filter: OnceLock<LogFilter>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.filter.get() {
            Some(filter) => metadata.level() <= filter.level_for(metadata.target()),
            None => false,
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{:<5} [{}] {}",
                record.level(),
                short_target(record.target()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    filter: OnceLock::new(),
};

/// Install the stderr logger. Defaults to `warn` so engine chatter stays out
/// of the game screen. Calling it twice keeps the first configuration.
pub fn init_logging() {
    let spec = env::var("SEABATTLE_LOG").unwrap_or_default();
    let filter = LOGGER
        .filter
        .get_or_init(|| LogFilter::parse(&spec, LevelFilter::Warn));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(filter.max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_sets_the_default() {
        let filter = LogFilter::parse("debug", LevelFilter::Warn);
        assert_eq!(filter.level_for("sea_battle::grid"), LevelFilter::Debug);
        assert_eq!(filter.max_level(), LevelFilter::Debug);
    }

    #[test]
    fn empty_or_garbage_keeps_the_fallback() {
        assert_eq!(
            LogFilter::parse("", LevelFilter::Warn).level_for("sea_battle::game"),
            LevelFilter::Warn
        );
        let filter = LogFilter::parse("loud,game=shouting", LevelFilter::Warn);
        assert_eq!(filter.level_for("sea_battle::game"), LevelFilter::Warn);
        assert_eq!(filter.max_level(), LevelFilter::Warn);
    }

    #[test]
    fn turn_and_engine_levels_are_separate() {
        let filter = LogFilter::parse("warn,game=info,sea_battle::fleet=debug", LevelFilter::Off);
        assert_eq!(filter.level_for("sea_battle::game"), LevelFilter::Info);
        assert_eq!(filter.level_for("sea_battle::fleet"), LevelFilter::Debug);
        assert_eq!(filter.level_for("sea_battle::grid"), LevelFilter::Warn);
        assert_eq!(filter.max_level(), LevelFilter::Debug);
    }

    #[test]
    fn targets_match_whole_module_segments() {
        let filter = LogFilter::parse("off,agent=debug,agent::console=error", LevelFilter::Warn);
        assert_eq!(filter.level_for("sea_battle::agent::computer"), LevelFilter::Debug);
        assert_eq!(filter.level_for("sea_battle::agent::console"), LevelFilter::Error);
        assert_eq!(filter.level_for("sea_battle::agents"), LevelFilter::Off);
    }

    #[test]
    fn later_directive_wins_for_the_same_target() {
        let filter = LogFilter::parse("game=debug, game = error", LevelFilter::Warn);
        assert_eq!(filter.level_for("sea_battle::game"), LevelFilter::Error);
    }
}
