//! HTTP reachability probe.
//!
//! Sends a single GET to the local server with an explicit `Host` header so
//! the request lands on the blog's virtual host rather than the default one.

use reqwest::blocking::Client;
use reqwest::header::HOST;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::config::ProbeConfig;
use crate::error::{PublishError, Result};

use super::ReachabilityProbe;

/// Outcome of a probe that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
}

impl ProbeResponse {
    /// 2xx and 3xx count as reachable; redirects are not followed.
    pub fn is_reachable(&self) -> bool {
        (200..400).contains(&self.status)
    }
}

/// Probes the site with `reqwest`'s blocking client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    url: String,
    host: String,
    timeout: Duration,
}

impl HttpProbe {
    /// Build a probe from configuration.
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            url: config.url.clone(),
            host: config.host.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn probe_error(&self, e: reqwest::Error) -> PublishError {
        PublishError::Probe {
            url: self.url.clone(),
            message: e.to_string(),
        }
    }
}

impl ReachabilityProbe for HttpProbe {
    fn describe(&self) -> String {
        format!("{} (Host: {})", self.url, self.host)
    }

    fn probe(&self) -> Result<ProbeResponse> {
        tracing::debug!("Probing {} with Host {}", self.url, self.host);

        // Built per call: a client that fails to initialise is a probe
        // failure, not a startup failure.
        let client = Client::builder()
            .user_agent(concat!("blogship/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| self.probe_error(e))?;

        let response = client
            .get(&self.url)
            .header(HOST, &self.host)
            .send()
            .map_err(|e| self.probe_error(e))?;

        Ok(ProbeResponse {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn probe_for(url: String, host: &str) -> HttpProbe {
        HttpProbe::new(&ProbeConfig {
            url,
            host: host.to_string(),
            timeout_secs: 5,
        })
    }

    #[test]
    fn sends_host_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/").header("host", "blog.example.com");
            then.status(200).body("<html></html>");
        });

        let response = probe_for(server.url("/"), "blog.example.com").probe().unwrap();

        mock.assert();
        assert_eq!(response.status, 200);
        assert!(response.is_reachable());
    }

    #[test]
    fn redirect_is_reachable_and_not_followed() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(301).header("location", "https://blog.example.com/");
        });

        let response = probe_for(server.url("/"), "blog.example.com").probe().unwrap();

        mock.assert_calls(1);
        assert_eq!(response.status, 301);
        assert!(response.is_reachable());
    }

    #[test]
    fn server_error_is_not_reachable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(502);
        });

        let response = probe_for(server.url("/"), "blog.example.com").probe().unwrap();

        assert_eq!(response.status, 502);
        assert!(!response.is_reachable());
    }

    #[test]
    fn connection_refused_is_probe_error() {
        // Port 9 (discard) is essentially never served on loopback.
        let err = probe_for("http://127.0.0.1:9/".to_string(), "localhost")
            .probe()
            .unwrap_err();
        assert!(matches!(err, PublishError::Probe { .. }));
    }

    #[test]
    fn describe_includes_host() {
        let probe = probe_for("http://127.0.0.1/".to_string(), "blog.example.com");
        assert_eq!(probe.describe(), "http://127.0.0.1/ (Host: blog.example.com)");
    }
}
