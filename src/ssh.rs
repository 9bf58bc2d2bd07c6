//! Remote command execution over SSH.
//!
//! One TCP session per command: connect, handshake, public-key auth, exec,
//! read output, close. No pooling and no retry.

use crate::config;
use colored::Colorize;
use ssh2::Session;
use std::error::Error;
use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::PathBuf;

/// A remote host reachable over SSH with public-key authentication.
#[derive(Debug, Clone)]
pub struct SshHost {
    /// Hostname or IP address of the remote host.
    pub hostname: String,
    /// Username to authenticate as.
    pub username: String,
    /// Path of the private key file.
    pub private_key_path: PathBuf,
    /// SSH port, normally 22.
    pub port: u16,
}

impl SshHost {
    /// Build a host using the harness defaults: user `azureadmin`,
    /// key `$HOME/.ssh/id_rsa`, port 22.
    pub fn new(hostname: &str) -> Result<SshHost, Box<dyn Error>> {
        Ok(SshHost {
            hostname: hostname.to_string(),
            username: config::SSH_USERNAME.to_string(),
            private_key_path: config::default_private_key_path()?,
            port: config::SSH_PORT,
        })
    }

    /// Run a command on the remote host and return its stdout.
    ///
    /// # Errors
    /// Fails on connect, handshake or authentication errors, and when the
    /// remote command exits non-zero (the error carries the exit status and
    /// both captured streams).
    pub fn run_command(&self, command: &str) -> Result<String, Box<dyn Error>> {
        log::debug!(
            "ssh {user}@{host}: {command}",
            user = self.username,
            host = self.hostname,
            command = command.on_blue()
        );

        let addr = (self.hostname.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| format!("failed to resolve {}: {e}", self.hostname))?
            .next()
            .ok_or_else(|| format!("no address found for {}", self.hostname))?;

        let stream = TcpStream::connect_timeout(&addr, config::SSH_CONNECT_TIMEOUT)
            .map_err(|e| format!("failed to connect to {addr}: {e}"))?;

        let mut session = Session::new().map_err(|e| format!("failed to create session: {e}"))?;
        session.set_tcp_stream(stream);
        session
            .handshake()
            .map_err(|e| format!("SSH handshake failed: {e}"))?;
        session
            .userauth_pubkey_file(&self.username, None, &self.private_key_path, None)
            .map_err(|e| {
                format!(
                    "public key authentication failed for {user} with key {key:?}: {e}",
                    user = self.username,
                    key = self.private_key_path
                )
            })?;

        let mut channel = session
            .channel_session()
            .map_err(|e| format!("failed to open channel: {e}"))?;
        channel
            .exec(command)
            .map_err(|e| format!("failed to exec '{command}': {e}"))?;

        let mut stdout = String::new();
        channel
            .read_to_string(&mut stdout)
            .map_err(|e| format!("failed to read stdout of '{command}': {e}"))?;
        let mut stderr = String::new();
        channel
            .stderr()
            .read_to_string(&mut stderr)
            .map_err(|e| format!("failed to read stderr of '{command}': {e}"))?;

        channel
            .wait_close()
            .map_err(|e| format!("failed to close channel: {e}"))?;
        let exit_status = channel
            .exit_status()
            .map_err(|e| format!("failed to get exit status: {e}"))?;

        if exit_status != 0 {
            log::warn!(
                "{failed} remote command {command}",
                failed = "failed".on_red(),
                command = command.on_blue()
            );
            return Err(format!(
                "remote command '{command}' exited with status {exit_status}: \
stdout={stdout:?} stderr={stderr:?}"
            )
            .into());
        }

        log::debug!("remote command ok, stdout.len()={}", stdout.len());
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_harness_defaults() {
        let host = SshHost::new("203.0.113.10").expect("Error building host");
        assert_eq!(host.hostname, "203.0.113.10");
        assert_eq!(host.username, "azureadmin");
        assert_eq!(host.port, 22);
        assert!(
            host.private_key_path.ends_with(".ssh/id_rsa"),
            "Unexpected key path: {:?}",
            host.private_key_path
        );
    }
}
