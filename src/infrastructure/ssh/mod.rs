//! OpenSSH remote shell
//!
//! Implements the RemoteShell port with the system `ssh` client: one
//! process per command, key auth only (`BatchMode=yes`), bounded by a
//! session timeout after which the client is killed.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::domain::entities::RemoteCommand;
use crate::domain::ports::{RemoteOutput, RemoteShell, RemoteTarget};
use crate::domain::value_objects::HostKeyPolicy;
use crate::error::{LaunchpadError, LaunchpadResult};

const WAIT_TICK: Duration = Duration::from_millis(100);

/// Where remote output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Inherit stdout/stderr so the operator sees output live
    Stream,
    /// Collect output and hand it back verbatim
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SshOptions {
    pub host_key_policy: HostKeyPolicy,
    pub connect_timeout: Duration,
    pub session_timeout: Duration,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            host_key_policy: HostKeyPolicy::default(),
            connect_timeout: Duration::from_secs(15),
            session_timeout: Duration::from_secs(300),
        }
    }
}

pub struct SshShell {
    options: SshOptions,
    mode: OutputMode,
    program: String,
    program_args: Vec<String>,
}

impl SshShell {
    pub fn new(options: SshOptions, mode: OutputMode) -> Self {
        Self {
            options,
            mode,
            program: "ssh".to_string(),
            program_args: Vec::new(),
        }
    }

    /// Use a different client, with arguments placed before the ssh ones
    pub fn with_program(mut self, program: impl Into<String>, program_args: Vec<String>) -> Self {
        self.program = program.into();
        self.program_args = program_args;
        self
    }

    /// Arguments passed to the ssh client, destination and script last
    pub fn build_args(&self, target: &RemoteTarget, command: &RemoteCommand) -> Vec<String> {
        let mut args = Vec::new();
        if !target.identity_file.as_os_str().is_empty() {
            args.push("-i".to_string());
            args.push(target.identity_file.to_string_lossy().to_string());
        }
        args.push("-o".to_string());
        args.push(format!(
            "StrictHostKeyChecking={}",
            self.options.host_key_policy.as_ssh_option()
        ));
        args.push("-o".to_string());
        args.push("BatchMode=yes".to_string());
        args.push("-o".to_string());
        args.push(format!(
            "ConnectTimeout={}",
            self.options.connect_timeout.as_secs().max(1)
        ));
        args.push(target.destination());
        args.push(command.script().to_string());
        args
    }

    fn wait_with_deadline(&self, child: &mut Child, host: &str) -> LaunchpadResult<ExitStatus> {
        let deadline = Instant::now() + self.options.session_timeout;
        loop {
            let polled = child.try_wait().map_err(|e| LaunchpadError::RemoteSpawn {
                host: host.to_string(),
                message: e.to_string(),
            })?;
            if let Some(status) = polled {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                warn!(host, "remote session timed out; killing ssh");
                let _ = child.kill();
                let _ = child.wait();
                return Err(LaunchpadError::RemoteTimeout {
                    host: host.to_string(),
                    seconds: self.options.session_timeout.as_secs(),
                });
            }
            thread::sleep(WAIT_TICK);
        }
    }
}

fn drain<R: Read + Send + 'static>(reader: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = reader {
            let _ = reader.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

impl RemoteShell for SshShell {
    fn execute(
        &self,
        target: &RemoteTarget,
        command: &RemoteCommand,
    ) -> LaunchpadResult<RemoteOutput> {
        let args = self.build_args(target, command);
        debug!(
            program = %self.program,
            destination = %target.destination(),
            "opening remote session"
        );

        let (stdout, stderr) = match self.mode {
            OutputMode::Stream => (Stdio::inherit(), Stdio::inherit()),
            OutputMode::Capture => (Stdio::piped(), Stdio::piped()),
        };

        let mut child = Command::new(&self.program)
            .args(&self.program_args)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|e| LaunchpadError::RemoteSpawn {
                host: target.host.clone(),
                message: e.to_string(),
            })?;

        let readers = match self.mode {
            OutputMode::Capture => {
                let out = drain(child.stdout.take());
                let err = drain(child.stderr.take());
                Some((out, err))
            }
            OutputMode::Stream => None,
        };

        let status = self.wait_with_deadline(&mut child, &target.host)?;

        let captured = readers.map(|(out, err)| {
            let mut text = out.join().unwrap_or_default();
            text.push_str(&err.join().unwrap_or_default());
            text
        });

        debug!(code = ?status.code(), "remote session finished");
        Ok(RemoteOutput {
            exit_code: status.code(),
            captured,
        })
    }
}
