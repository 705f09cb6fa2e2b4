//! System clipboard.
//!
//! Text goes to the first clipboard program found on `PATH` (`wl-copy`,
//! `xclip`, `xsel`, `pbcopy`, `clip`). Without one, an OSC 52 escape asks the
//! terminal to set the clipboard, which also works over SSH.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX: &str = "\x07";
const OSC52_TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const OSC52_TMUX_SUFFIX: &str = "\x07\x1b\\";

// Terminals cap OSC 52 payloads, often well below this.
pub const OSC52_MAX_BYTES: usize = 100 * 1024;

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    Spawn { program: String, source: io::Error },
    Failed { program: String, status: Option<i32> },
    TooLarge { bytes: usize },
    Io(io::Error),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "no clipboard available"),
            ClipboardError::Spawn { program, source } => {
                write!(f, "failed to run {}: {}", program, source)
            }
            ClipboardError::Failed { program, status } => match status {
                Some(code) => write!(f, "{} exited with status {}", program, code),
                None => write!(f, "{} was terminated", program),
            },
            ClipboardError::TooLarge { bytes } => write!(
                f,
                "text too large for the terminal clipboard ({} KB, limit {} KB)",
                bytes / 1024,
                OSC52_MAX_BYTES / 1024
            ),
            ClipboardError::Io(e) => write!(f, "clipboard io error: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::Spawn { source, .. } => Some(source),
            ClipboardError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardBackend {
    /// A program that reads the new clipboard content from stdin.
    Program { program: String, args: Vec<String> },
    Osc52 { tmux: bool },
}

impl ClipboardBackend {
    pub fn program(program: &str, args: &[&str]) -> Self {
        Self::Program {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClipboardBackend::Program { program, .. } => program,
            ClipboardBackend::Osc52 { .. } => "osc52",
        }
    }
}

pub struct ClipboardService {
    backends: Vec<ClipboardBackend>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self::detect()
    }

    /// Installed clipboard programs in preference order, then OSC 52.
    pub fn detect() -> Self {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        let mut backends: Vec<ClipboardBackend> = candidate_programs(wayland)
            .into_iter()
            .filter(|backend| {
                matches!(backend, ClipboardBackend::Program { program, .. }
                    if find_in_path(program, &path).is_some())
            })
            .collect();
        backends.push(ClipboardBackend::Osc52 {
            tmux: std::env::var_os("TMUX").is_some(),
        });
        tracing::debug!(
            backends = ?backends.iter().map(ClipboardBackend::name).collect::<Vec<_>>(),
            "clipboard backends"
        );
        Self { backends }
    }

    pub fn with_backends(backends: Vec<ClipboardBackend>) -> Self {
        Self { backends }
    }

    pub fn backends(&self) -> &[ClipboardBackend] {
        &self.backends
    }

    pub fn is_available(&self) -> bool {
        !self.backends.is_empty()
    }

    /// Tries each backend in turn; returns the last error if all fail.
    pub fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::NotAvailable;
        for backend in &self.backends {
            match set_with_backend(backend, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "clipboard backend failed");
                    last_err = e;
                }
            }
        }
        Err(last_err)
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

fn candidate_programs(wayland: bool) -> Vec<ClipboardBackend> {
    let mut out = Vec::new();
    if cfg!(target_os = "macos") {
        out.push(ClipboardBackend::program("pbcopy", &[]));
    } else if cfg!(target_os = "windows") {
        out.push(ClipboardBackend::program("clip", &[]));
    } else {
        if wayland {
            out.push(ClipboardBackend::program("wl-copy", &[]));
        }
        out.push(ClipboardBackend::program("xclip", &["-selection", "clipboard"]));
        out.push(ClipboardBackend::program("xsel", &["--clipboard", "--input"]));
    }
    out
}

fn find_in_path(program: &str, path: &OsString) -> Option<PathBuf> {
    std::env::split_paths(path).find_map(|dir| {
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
        let exe = dir.join(format!("{program}.exe"));
        is_executable(&exe).then_some(exe)
    })
}

fn is_executable(path: &Path) -> bool {
    path.is_file()
}

fn set_with_backend(backend: &ClipboardBackend, text: &str) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::Program { program, args } => run_program(program, args, text),
        ClipboardBackend::Osc52 { tmux } => {
            let seq = osc52_sequence(text, *tmux)?;
            let mut out = io::stdout();
            out.write_all(seq.as_bytes())
                .and_then(|_| out.flush())
                .map_err(ClipboardError::Io)
        }
    }
}

fn run_program(program: &str, args: &[String], text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A program that exits early closes the pipe; its exit status says why.
        match stdin.write_all(text.as_bytes()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                return Err(ClipboardError::Io(e));
            }
            _ => {}
        }
    }

    let status = child.wait().map_err(ClipboardError::Io)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed {
            program: program.to_string(),
            status: status.code(),
        })
    }
}

pub fn osc52_sequence(text: &str, tmux: bool) -> Result<String, ClipboardError> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(ClipboardError::TooLarge { bytes: bytes.len() });
    }

    let payload = base64_encode(bytes);
    if tmux {
        Ok(format!("{OSC52_TMUX_PREFIX}{payload}{OSC52_TMUX_SUFFIX}"))
    } else {
        Ok(format!("{OSC52_PREFIX}{payload}{OSC52_SUFFIX}"))
    }
}

fn base64_encode(bytes: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (16 - 8 * i)));
        for i in 0..4 {
            if i <= chunk.len() {
                let idx = (n >> (18 - 6 * i)) & 0x3f;
                out.push(ALPHABET[idx as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;
