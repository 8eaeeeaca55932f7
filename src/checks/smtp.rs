//! SMTP connectivity health check

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::check::{Check, Severity};

/// Checks that the configured SMTP server accepts connections
///
/// Only verifies the socket connection and service banner, it does not send
/// mail. The connect and read times are bounded by the configured timeout.
pub struct SmtpConnectCheck {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpConnectCheck {
    /// Creates a check against localhost:25 with a 15 second timeout
    pub fn new() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 25,
            timeout: Duration::from_secs(15),
        }
    }

    /// Creates a check against a specific server
    pub fn with_server(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the connect/read timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SmtpConnectCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for SmtpConnectCheck {
    fn check(&self) -> anyhow::Result<(Severity, String)> {
        let address = format!("{}:{}", self.host, self.port);
        let mut addrs = address.to_socket_addrs()?;
        let Some(addr) = addrs.next() else {
            return Ok((
                Severity::Error,
                format!("No address resolved for {address}"),
            ));
        };

        let mut stream = match TcpStream::connect_timeout(&addr, self.timeout) {
            Ok(stream) => stream,
            Err(e) => {
                return Ok((
                    Severity::Error,
                    format!("Couldn't connect to SMTP on {address} ({e})"),
                ));
            }
        };
        stream.set_read_timeout(Some(self.timeout))?;

        stream.write_all(b"HELO healthgate\r\n")?;

        let mut buffer = [0u8; 64];
        let read = stream.read(&mut buffer)?;
        let response = String::from_utf8_lossy(&buffer[..read]);

        if !response.starts_with("220") {
            return Ok((
                Severity::Error,
                format!("Invalid mail server response: {}", response.trim_end()),
            ));
        }

        Ok((Severity::Ok, format!("SMTP server on {address} responded")))
    }
}
