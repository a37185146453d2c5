//! Blocking HTTP plumbing shared by the geocoder and the sun-times lookup.

use crate::error::FetchError;
use std::error::Error as _;
use std::io;
use std::time::Duration;
use tracing::{debug, warn};

pub(crate) const USER_AGENT: &str = concat!("SunPanel/", env!("CARGO_PKG_VERSION"));

/// Agent with the request bound applied to connect, send and read.
pub(crate) fn agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Send the request and return the body text of a 2xx response.
pub(crate) fn fetch_body(request: ureq::Request) -> Result<String, FetchError> {
    let url = request.url().to_string();
    let response = request.call().map_err(|e| {
        let err = classify(e);
        warn!(%url, error = %err, "request failed");
        err
    })?;
    debug!(%url, status = response.status(), "response received");
    response.into_string().map_err(classify_io)
}

fn classify(err: ureq::Error) -> FetchError {
    match err {
        ureq::Error::Status(code, response) => {
            FetchError::Network(format!("HTTP {} from {}", code, response.get_url()))
        }
        ureq::Error::Transport(transport) => {
            if is_timeout(&transport) {
                FetchError::Timeout(transport.to_string())
            } else {
                FetchError::Network(transport.to_string())
            }
        }
    }
}

fn classify_io(err: io::Error) -> FetchError {
    if is_timeout_kind(err.kind()) {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}

fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = transport.source();
    while let Some(err) = source {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if is_timeout_kind(io_err.kind()) {
                return true;
            }
        }
        source = err.source();
    }
    false
}

// Read deadlines surface as WouldBlock on some platforms.
fn is_timeout_kind(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_timeout_classification() {
        let err = classify_io(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        assert!(matches!(err, FetchError::Timeout(_)));

        let err = classify_io(io::Error::new(io::ErrorKind::WouldBlock, "slow"));
        assert!(matches!(err, FetchError::Timeout(_)));

        let err = classify_io(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert!(matches!(err, FetchError::Network(_)));
    }
}
