use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub status: u16,
    pub mime_type: Option<String>,
}

impl ResponseSummary {
    pub fn new(status: u16, mime_type: Option<String>) -> Self {
        Self { status, mime_type }
    }

    /// `"<status> <mime>"`, with an empty MIME slot when none was reported.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.mime_type.as_deref().unwrap_or(""))
    }
}

/// How the response was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchType {
    #[default]
    Unknown,
    NetworkLoad,
    ServerPush,
    LocalCache,
}

impl FetchType {
    pub fn name(&self) -> &'static str {
        match self {
            FetchType::Unknown => "unknown",
            FetchType::NetworkLoad => "network-load",
            FetchType::ServerPush => "server-push",
            FetchType::LocalCache => "local-cache",
        }
    }
}

impl std::fmt::Display for FetchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_keeps_mime_slot() {
        assert_eq!(ResponseSummary::new(200, Some("text/plain".into())).status_line(), "200 text/plain");
        assert_eq!(ResponseSummary::new(204, None).status_line(), "204 ");
    }

    #[test]
    fn fetch_type_names_are_kebab_case() {
        assert_eq!(FetchType::NetworkLoad.to_string(), "network-load");
        assert_eq!(FetchType::LocalCache.name(), "local-cache");
        let parsed: FetchType = serde_json::from_str("\"server-push\"").unwrap();
        assert_eq!(parsed, FetchType::ServerPush);
    }
}
