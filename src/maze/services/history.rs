//! # Request History
//!
//! Every call made against the maze server, kept for the debug pane and for
//! the operator-paced replay after a fatal failure.

/// One request/response round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub url: String,
    /// HTTP status, `None` when no response was received
    pub status: Option<u16>,
    /// Raw response body, or the transport error text
    pub body: String,
}

impl Exchange {
    pub fn new(url: impl Into<String>, status: Option<u16>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(code) if (200..300).contains(&code))
    }

    /// Text shown for entry `index` while replaying
    pub fn replay_entry(&self, index: usize) -> String {
        format!("{}: {}\n{}", index, self.url, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_success_should_require_2xx_status() {
        assert!(Exchange::new("u", Some(200), "").is_success());
        assert!(!Exchange::new("u", Some(404), "").is_success());
        assert!(!Exchange::new("u", None, "connection refused").is_success());
    }

    #[test]
    fn replay_entry_should_show_index_url_and_body() {
        let exchange = Exchange::new("http://maze/api/init", Some(200), "{}");
        assert_eq!(exchange.replay_entry(3), "3: http://maze/api/init\n{}");
    }
}
