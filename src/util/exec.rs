//! Child-process execution with inherited or captured stdio.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    /// Killed by a signal; `None` when the platform does not report one.
    Signaled(Option<i32>),
}

impl Termination {
    pub fn success(self) -> bool {
        self == Termination::Exited(0)
    }

    pub fn code(self) -> Option<i32> {
        match self {
            Termination::Exited(c) => Some(c),
            Termination::Signaled(_) => None,
        }
    }

    /// Process exit status to relay: the child's own code, or 1 when it has none.
    pub fn exit_code(self) -> u8 {
        match self.code() {
            Some(c) => (c & 0xff) as u8,
            None => 1,
        }
    }
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Termination::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            Termination::Signaled(status.signal())
        }
        #[cfg(not(unix))]
        {
            Termination::Signaled(None)
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(c) => write!(f, "exit code {c}"),
            Termination::Signaled(Some(sig)) => match signal_name(*sig) {
                Some(name) => write!(f, "signal {name}"),
                None => write!(f, "signal {sig}"),
            },
            Termination::Signaled(None) => write!(f, "an unknown signal"),
        }
    }
}

#[cfg(unix)]
fn signal_name(sig: i32) -> Option<&'static str> {
    nix::sys::signal::Signal::try_from(sig)
        .ok()
        .map(|s| s.as_str())
}

#[cfg(not(unix))]
fn signal_name(_sig: i32) -> Option<&'static str> {
    None
}

/// Runs one child to completion. Stdio is inherited unless output capture is requested.
#[derive(Debug, Clone, Default)]
pub struct ExecService;

impl ExecService {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, request: ExecRequest) -> Result<ExecOutput> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args);
        if let Some(ref cwd) = request.cwd {
            cmd.current_dir(cwd);
        }

        if !request.inherit_env {
            cmd.env_clear();
        }
        for (key, value) in &request.env {
            cmd.env(key, value);
        }

        if request.capture_output {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        } else {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }

        let started = Instant::now();
        let mut child = cmd.spawn().with_context(|| {
            format!(
                "failed to spawn {:?} with args {:?}",
                request.program, request.args
            )
        })?;

        let (stdout, stderr) = if request.capture_output {
            let stdout = read_stream(child.stdout.take().as_mut())?;
            let stderr = read_stream(child.stderr.take().as_mut())?;
            (stdout, stderr)
        } else {
            (String::new(), String::new())
        };

        let status = child.wait().context("failed to wait for process")?;

        Ok(ExecOutput {
            status: Termination::from(status),
            duration: started.elapsed(),
            stdout,
            stderr,
        })
    }
}

fn read_stream(stream: Option<&mut impl io::Read>) -> Result<String> {
    let mut buf = String::new();
    if let Some(reader) = stream {
        reader
            .read_to_string(&mut buf)
            .context("failed to read process output")?;
    }
    Ok(buf)
}

#[derive(Debug, Default)]
pub struct ExecRequest {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
    env: Vec<(OsString, OsString)>,
    inherit_env: bool,
    capture_output: bool,
}

impl ExecRequest {
    /// A request with the parent's environment inherited and stdio passed through.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            inherit_env: true,
            ..Self::default()
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn inherit_env(mut self, inherit: bool) -> Self {
        self.inherit_env = inherit;
        self
    }

    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }
}

#[derive(Debug)]
pub struct ExecOutput {
    pub status: Termination,
    pub duration: Duration,
    pub stdout: String,
    pub stderr: String,
}
