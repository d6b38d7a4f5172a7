//! Indentation style loaded from TOML.
//!
//! ```toml
//! [indent]
//! width = 4
//! fill = "\t"
//! level = 0
//! ```
//!
//! Every key is optional; an empty document yields two spaces per level
//! starting at level 0.

use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::{DEFAULT_INDENT_WIDTH, Indent, Result, error::SourceContext};

/// Default filename used in diagnostics.
const DEFAULT_FILENAME: &str = "cppcodegen.toml";

/// Root of the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub indent: IndentConfig,
}

/// The `[indent]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndentConfig {
    /// Fill characters per level.
    pub width: usize,
    /// The fill character, as a one-character string.
    pub fill: String,
    /// Nesting level of the root node.
    pub level: usize,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_INDENT_WIDTH,
            fill: " ".to_string(),
            level: 0,
        }
    }
}

impl FromStr for Config {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, DEFAULT_FILENAME)
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// The configured root indent.
    pub fn indent(&self) -> Indent {
        // Validated on parse; a hand-built config with a bad fill keeps the default.
        let fill = single_char(&self.indent.fill).unwrap_or(' ');
        Indent::new(self.indent.level, self.indent.width).with_fill(fill)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    debug!(
        filename,
        width = config.indent.width,
        fill = ?config.indent.fill,
        level = config.indent.level,
        "loaded indentation config"
    );
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if single_char(&config.indent.fill).is_none() {
        return Err(ctx.invalid_fill_error(config.indent.fill.as_str()));
    }
    if config.indent.width == 0 {
        return Err(
            ctx.validation_error_at("indent width must be positive", ctx.find_key("width")),
        );
    }
    Ok(())
}
