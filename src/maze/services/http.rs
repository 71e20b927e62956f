//! # HTTP Maze Client
//!
//! Blocking reqwest implementation of [`RemoteMaze`]. Every call is a `POST`
//! with an empty body; the answer is a `{"currentCell": {...}}` document.

use crate::maze::models::{Cell, Coordinate, Direction};
use crate::maze::services::history::Exchange;
use crate::maze::services::remote::{RemoteError, RemoteMaze};
use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Default public endpoint of the maze API
pub const DEFAULT_BASE_URL: &str = "http://www.epdeveloperchallenge.com/api";

pub struct HttpMazeClient {
    client: Client,
    base_url: String,
    history: Vec<Exchange>,
}

impl HttpMazeClient {
    /// Create a client for `base_url`; `timeout` bounds each request when set
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        tracing::debug!("Creating maze client for {} (timeout {:?})", base_url, timeout);

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            history: Vec::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn init_url(&self) -> Result<Url, RemoteError> {
        self.endpoint("init", &[])
    }

    pub fn move_url(&self, token: &str, direction: Direction) -> Result<Url, RemoteError> {
        self.endpoint("move", &[("mazeGuid", token), ("direction", direction.name())])
    }

    pub fn jump_url(&self, token: &str, to: Coordinate) -> Result<Url, RemoteError> {
        let (x, y) = (to.x.to_string(), to.y.to_string());
        self.endpoint("jump", &[("mazeGuid", token), ("x", x.as_str()), ("y", y.as_str())])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, RemoteError> {
        let raw = format!("{}/{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| RemoteError::Transport {
            url: raw.clone(),
            message: format!("invalid url: {e}"),
        })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Send one request, record it in the history, then decode the cell
    fn post(&mut self, url: Url) -> Result<Cell, RemoteError> {
        let url_text = url.to_string();
        tracing::debug!("POST {}", url_text);

        let response = match self.client.post(url).send() {
            Ok(response) => response,
            Err(e) => return Err(self.transport_failure(url_text, None, e)),
        };

        let status = response.status();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => return Err(self.transport_failure(url_text, Some(status.as_u16()), e)),
        };

        self.receive(url_text, status.as_u16(), body)
    }

    /// Record an answered request, then check its status and decode the cell
    fn receive(&mut self, url: String, status: u16, body: String) -> Result<Cell, RemoteError> {
        tracing::debug!("Response {}: {}", status, body);
        self.history
            .push(Exchange::new(url.clone(), Some(status), body.clone()));

        if !(200..300).contains(&status) {
            tracing::error!("{} returned status {}", url, status);
            return Err(RemoteError::Status { url, status, body });
        }

        Cell::from_response_body(&body).map_err(|source| {
            tracing::error!("Undecodable response from {}: {}", url, source);
            RemoteError::Decode {
                url,
                status,
                body,
                source,
            }
        })
    }

    fn transport_failure(
        &mut self,
        url: String,
        status: Option<u16>,
        error: reqwest::Error,
    ) -> RemoteError {
        let message = error.to_string();
        tracing::error!("Request to {} failed: {}", url, message);
        self.history
            .push(Exchange::new(url.clone(), status, message.clone()));
        RemoteError::Transport { url, message }
    }
}

impl RemoteMaze for HttpMazeClient {
    fn init(&mut self) -> Result<Cell, RemoteError> {
        let url = self.init_url()?;
        self.post(url)
    }

    fn move_toward(&mut self, token: &str, direction: Direction) -> Result<Cell, RemoteError> {
        let url = self.move_url(token, direction)?;
        self.post(url)
    }

    fn jump(&mut self, token: &str, to: Coordinate) -> Result<Cell, RemoteError> {
        let url = self.jump_url(token, to)?;
        self.post(url)
    }

    fn history(&self) -> &[Exchange] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::error::TraversalError;

    fn client() -> HttpMazeClient {
        HttpMazeClient::new("http://maze.test/api/", None).unwrap()
    }

    #[test]
    fn new_should_trim_trailing_slash() {
        assert_eq!(client().base_url(), "http://maze.test/api");
    }

    #[test]
    fn init_url_should_point_at_init_endpoint() {
        assert_eq!(client().init_url().unwrap().as_str(), "http://maze.test/api/init");
    }

    #[test]
    fn move_url_should_carry_token_and_direction() {
        let url = client().move_url("abc-123", Direction::South).unwrap();
        assert_eq!(
            url.as_str(),
            "http://maze.test/api/move?mazeGuid=abc-123&direction=SOUTH"
        );
    }

    #[test]
    fn jump_url_should_carry_token_and_coordinate() {
        let url = client().jump_url("abc", Coordinate::new(12, 7)).unwrap();
        assert_eq!(url.as_str(), "http://maze.test/api/jump?mazeGuid=abc&x=12&y=7");
    }

    #[test]
    fn urls_without_params_should_have_no_query() {
        let url = client().init_url().unwrap();
        assert_eq!(url.query(), None);
        assert!(!url.as_str().ends_with('?'));
    }

    #[test]
    fn undecodable_success_body_should_be_recorded_and_rejected() {
        let mut client = client();
        let url = "http://maze.test/api/init".to_string();

        let err = client
            .receive(url.clone(), 200, "<html>maintenance</html>".to_string())
            .unwrap_err();

        assert!(matches!(err, RemoteError::Decode { .. }));
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("<html>maintenance</html>"));
        assert_eq!(
            client.history(),
            &[Exchange::new(url, Some(200), "<html>maintenance</html>")][..]
        );

        let traversal: TraversalError = err.into();
        assert!(traversal.is_transport());
    }

    #[test]
    fn error_status_should_be_recorded_before_failing() {
        let mut client = client();

        let err = client
            .receive("http://maze.test/api/move".to_string(), 400, "bad move".to_string())
            .unwrap_err();

        assert!(matches!(err, RemoteError::Status { status: 400, .. }));
        assert_eq!(client.history().len(), 1);
        assert_eq!(client.history()[0].body, "bad move");
    }

    #[test]
    fn current_cell_body_should_decode() {
        let mut client = client();
        let body = r#"{"currentCell":{"mazeGuid":"g","atEnd":false,"north":"BLOCKED","east":"UNEXPLORED","south":"BLOCKED","west":"BLOCKED","x":2,"y":3}}"#;

        let cell = client
            .receive("http://maze.test/api/init".to_string(), 200, body.to_string())
            .unwrap();

        assert_eq!(cell.coordinate(), Coordinate::new(2, 3));
        assert!(client.history()[0].is_success());
    }

    #[test]
    fn invalid_base_url_should_fail_without_sending() {
        let mut client = HttpMazeClient::new("not a url", None).unwrap();
        let err = client.init().unwrap_err();

        assert!(matches!(err, RemoteError::Transport { .. }));
        assert!(client.history().is_empty());
    }

    #[test]
    fn failed_request_should_be_recorded_in_history() {
        let mut client =
            HttpMazeClient::new("http://127.0.0.1:1/api", Some(Duration::from_secs(2))).unwrap();

        let err = client.init().unwrap_err();

        assert_ne!(err.status(), Some(200));
        assert_eq!(client.history().len(), 1);
        assert_eq!(client.history()[0].url, "http://127.0.0.1:1/api/init");
        assert!(!client.history()[0].is_success());
    }
}
