use crate::domain::{Layout, TumbleweedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Stdout,
    Log,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub layout: Layout,
    pub sink: SinkKind,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Layout::default();
        Self {
            layout: Layout {
                label_width: parse_usize_env("TUMBLEWEED_LABEL_WIDTH", defaults.label_width),
                bar_width: parse_usize_env("TUMBLEWEED_BAR_WIDTH", defaults.bar_width),
                duration_width: parse_usize_env("TUMBLEWEED_DURATION_WIDTH", defaults.duration_width),
                fill: parse_char_env("TUMBLEWEED_FILL", defaults.fill),
                blank: parse_char_env("TUMBLEWEED_BLANK", defaults.blank),
                border: parse_char_env("TUMBLEWEED_BORDER", defaults.border),
            },
            sink: parse_sink_env("TUMBLEWEED_SINK", SinkKind::Stdout),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    pub fn validate(&self) -> Result<(), TumbleweedError> {
        if self.layout.bar_width < Layout::MIN_BAR_WIDTH {
            return Err(TumbleweedError::config(format!(
                "bar width {} is too narrow (min {})",
                self.layout.bar_width,
                Layout::MIN_BAR_WIDTH
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_usize_env(key: &str, default: usize) -> usize {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_char_env(key: &str, default: char) -> char {
    std::env::var(key).ok().and_then(|v| single_char(&v)).unwrap_or(default)
}

fn parse_sink_env(key: &str, default: SinkKind) -> SinkKind {
    std::env::var(key).ok().and_then(|v| parse_sink(&v)).unwrap_or(default)
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_sink(value: &str) -> Option<SinkKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "stdout" => Some(SinkKind::Stdout),
        "log" => Some(SinkKind::Log),
        _ => None,
    }
}
