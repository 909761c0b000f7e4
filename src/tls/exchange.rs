//! Minimal HTTP/1.1 exchange over an established stream.
//!
//! Writes a single root-path GET and performs exactly one read. Only the first
//! line of whatever arrives is kept, which keeps the probe tolerant of any
//! response shape, well-formed or not.

use std::io::ErrorKind;
use std::time::Duration;

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::config::{EMPTY_STATUS_LINE, NO_RESPONSE, READ_BUFFER_SIZE};
use crate::error_handling::{categorize_io_error, ProbeError, ProbePhase};

/// Builds the request sent to every backend.
pub fn build_request(host: &str) -> String {
    format!("GET / HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n")
}

/// Returns the first line of a response, without its terminator.
pub fn first_line(response: &[u8]) -> String {
    let text = String::from_utf8_lossy(response);
    match text.split_once("\r\n") {
        Some((line, _)) => line.to_string(),
        None => text.into_owned(),
    }
}

/// Sends the request and returns the response's status line.
///
/// Each of the write and the read is bounded by `limit`. A peer that closes
/// before sending anything yields `"(no response)"`, and a response starting
/// with a bare `\r\n` yields `"(empty status line)"`. Both are successes.
pub async fn fetch_status_line<S>(
    stream: &mut S,
    host: &str,
    limit: Duration,
) -> Result<String, ProbeError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let request = build_request(host);

    let write = async {
        stream.write_all(request.as_bytes()).await?;
        stream.flush().await?;
        Ok::<_, std::io::Error>(())
    };
    match timeout(limit, write).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => return Err(categorize_io_error(ProbePhase::Write, e)),
        Err(_) => return Err(timeout_error(ProbePhase::Write, limit)),
    }

    let mut buf = [0u8; READ_BUFFER_SIZE];
    let n = match timeout(limit, stream.read(&mut buf)).await {
        Ok(Ok(n)) => n,
        // A TCP close without close_notify is still "closed without bytes"
        Ok(Err(e)) if e.kind() == ErrorKind::UnexpectedEof => 0,
        Ok(Err(e)) => return Err(categorize_io_error(ProbePhase::Read, e)),
        Err(_) => return Err(timeout_error(ProbePhase::Read, limit)),
    };

    if n == 0 {
        debug!("Peer for {host} closed without sending a response");
        return Ok(NO_RESPONSE.to_string());
    }

    let line = first_line(&buf[..n]);
    if line.is_empty() {
        return Ok(EMPTY_STATUS_LINE.to_string());
    }
    Ok(line)
}

pub(crate) fn timeout_error(phase: ProbePhase, limit: Duration) -> ProbeError {
    ProbeError::Timeout {
        phase,
        timeout_ms: limit.as_millis() as u64,
    }
}
