//! External checker invocation
//!
//! The checker is an opaque, pre-built executable invoked once per selected
//! file with that file's path as its sole argument. Both output streams are
//! captured as text and handed back verbatim; the exit status is logged but
//! never drives behavior.
//!
//! Spawning happens on the caller's thread so launch failures surface
//! immediately, before the output pane is touched. Draining and waiting run
//! on a background worker that reports the settled outcome over a channel,
//! which the GUI polls from its event loop.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::error::{Result, SyncheckError};
use crate::logging;

/// Poll interval while waiting for the child to exit.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// Captured output of one finished check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Outcome of one check, sent back to the UI thread.
pub enum CheckMessage {
    /// The checker ran to completion, whatever its exit status was.
    Completed(CheckOutput),
    /// The pipes or the wait failed after a successful spawn.
    Failed(SyncheckError),
    /// The user killed the run.
    Cancelled,
}

/// The external checker as an injectable collaborator.
#[derive(Debug, Clone)]
pub struct Checker {
    program: PathBuf,
}

impl Checker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The fixed program name the original build shipped with, resolved
    /// against the working directory on every platform.
    pub fn default_program() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from("CSyntaxChecker.exe")
        } else {
            PathBuf::from("./CSyntaxChecker")
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Launch one check of `source`.
    pub fn spawn(&self, source: &Path) -> Result<RunningCheck> {
        logging::info(
            "CHECK",
            &format!(
                "running {} on {}",
                self.program.display(),
                source.display()
            ),
        );

        let mut child = Command::new(&self.program)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SyncheckError::from_spawn(&self.program, e))?;

        // Reader threads drain both pipes so a chatty checker cannot fill a
        // pipe buffer and wedge against our wait.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_reader = thread::spawn(move || drain(stdout_pipe));
        let stderr_reader = thread::spawn(move || drain(stderr_pipe));

        let child = Arc::new(Mutex::new(child));
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = channel();

        let worker_child = Arc::clone(&child);
        let worker_cancelled = Arc::clone(&cancelled);
        thread::spawn(move || {
            let message =
                wait_and_collect(worker_child, worker_cancelled, stdout_reader, stderr_reader);
            let _ = tx.send(message);
        });

        Ok(RunningCheck {
            child,
            cancelled,
            receiver: rx,
            source: source.to_path_buf(),
        })
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Self::default_program())
    }
}

/// Handle to an in-flight check, owned by the UI thread.
pub struct RunningCheck {
    child: Arc<Mutex<Child>>,
    cancelled: Arc<AtomicBool>,
    receiver: Receiver<CheckMessage>,
    source: PathBuf,
}

impl RunningCheck {
    /// File being checked.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Non-blocking poll for the settled outcome.
    pub fn try_message(&self) -> Option<CheckMessage> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(CheckMessage::Failed(
                SyncheckError::CaptureFailed("checker worker disappeared".to_string()),
            )),
        }
    }

    /// Kill the checker; the worker then reports `Cancelled`.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = match self.child.lock() {
            Ok(mut child) => child.kill(),
            Err(poisoned) => poisoned.into_inner().kill(),
        };
        logging::warn("CHECK", "check cancelled by user");
    }

    /// Block until the check settles. Used by headless callers and tests;
    /// the GUI polls `try_message` instead.
    pub fn wait(self) -> CheckMessage {
        self.receiver.recv().unwrap_or_else(|_| {
            CheckMessage::Failed(SyncheckError::CaptureFailed(
                "checker worker disappeared".to_string(),
            ))
        })
    }
}

fn drain<R: Read>(pipe: Option<R>) -> std::io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf)?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn join_reader(handle: thread::JoinHandle<std::io::Result<String>>) -> std::io::Result<String> {
    handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("output reader thread panicked")))
}

fn wait_and_collect(
    child: Arc<Mutex<Child>>,
    cancelled: Arc<AtomicBool>,
    stdout_reader: thread::JoinHandle<std::io::Result<String>>,
    stderr_reader: thread::JoinHandle<std::io::Result<String>>,
) -> CheckMessage {
    // Poll instead of blocking in `wait()` so the mutex stays available for
    // `RunningCheck::cancel` to kill the child.
    let status = loop {
        let polled = match child.lock() {
            Ok(mut guard) => guard.try_wait(),
            Err(poisoned) => poisoned.into_inner().try_wait(),
        };
        match polled {
            Ok(Some(status)) => break status,
            Ok(None) => thread::sleep(WAIT_POLL),
            Err(e) => {
                return CheckMessage::Failed(SyncheckError::CaptureFailed(format!(
                    "wait failed: {e}"
                )));
            }
        }
    };

    let stdout = join_reader(stdout_reader);
    let stderr = join_reader(stderr_reader);

    if cancelled.load(Ordering::SeqCst) {
        logging::info("CHECK", &format!("checker killed, last status {status}"));
        return CheckMessage::Cancelled;
    }

    match (stdout, stderr) {
        (Ok(stdout), Ok(stderr)) => {
            logging::debug(
                "CHECK",
                &format!(
                    "checker exited ({status}), stdout {} bytes, stderr {} bytes",
                    stdout.len(),
                    stderr.len()
                ),
            );
            CheckMessage::Completed(CheckOutput { stdout, stderr })
        }
        (Err(e), _) | (_, Err(e)) => {
            CheckMessage::Failed(SyncheckError::CaptureFailed(e.to_string()))
        }
    }
}
