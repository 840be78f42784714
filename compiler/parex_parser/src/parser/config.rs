/// Nesting limit applied by [`ParserConfig::default`]
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Environment variable holding the nesting limit (a number, `none` or `unlimited`)
pub const MAX_DEPTH_ENV: &str = "PAREX_MAX_DEPTH";

/// Environment variable enabling several top-level expressions per input
pub const ALLOW_TRAILING_ENV: &str = "PAREX_ALLOW_TRAILING";

/// Tunables for [`Parser`](crate::parser::Parser)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested groups, or `None` for no limit
    pub max_depth: Option<usize>,
    /// Accept a sequence of top-level expressions instead of exactly one
    pub allow_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            allow_trailing: false,
        }
    }
}

impl ParserConfig {
    /// A configuration without a nesting limit
    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Allow or forbid trailing top-level expressions
    pub fn with_allow_trailing(mut self, allow_trailing: bool) -> Self {
        self.allow_trailing = allow_trailing;
        self
    }

    /// Defaults overridden by `PAREX_MAX_DEPTH` and `PAREX_ALLOW_TRAILING`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the environment keys.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            match parse_max_depth(&raw) {
                Some(max_depth) => config.max_depth = max_depth,
                None => log::warn!("ignoring {MAX_DEPTH_ENV}={raw:?}: expected a number or 'none'"),
            }
        }
        if let Some(raw) = lookup(ALLOW_TRAILING_ENV) {
            match parse_flag(&raw) {
                Some(flag) => config.allow_trailing = flag,
                None => log::warn!("ignoring {ALLOW_TRAILING_ENV}={raw:?}: expected true or false"),
            }
        }
        config
    }
}

/// Parse a depth limit: a number, or `none`/`unlimited` for no limit
pub fn parse_max_depth(raw: &str) -> Option<Option<usize>> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("unlimited") {
        return Some(None);
    }
    raw.parse::<usize>().ok().map(Some)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
