//! Terminal styling and display helpers for catalog fields.

pub mod fields;

pub use fields::{format_capacities, format_rw_speed, or_na, SpeedDisplay};

use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Apply NO_COLOR / CLICOLOR / CLICOLOR_FORCE on top of a base mode
    pub fn from_env(base: ColorMode) -> Self {
        let mut config = Self::new(base);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Build the formatter matching this configuration
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new(*self))
        } else {
            Box::new(PlainFormatter)
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn label(&self, text: &str) -> String;
    fn highlight(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn styled(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.styled(text, |t| t.blue().bold())
    }

    fn label(&self, text: &str) -> String {
        self.styled(text, |t| t.bold())
    }

    fn highlight(&self, text: &str) -> String {
        self.styled(text, |t| t.cyan())
    }

    fn dim(&self, text: &str) -> String {
        self.styled(text, |t| t.dimmed())
    }

    fn warning(&self, text: &str) -> String {
        self.styled(text, |t| t.yellow())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
