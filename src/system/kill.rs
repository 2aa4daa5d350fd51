use super::platform::{self, ProcessSignal, SignalStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillResult {
    Success(u32, &'static str),
    /// The process exited (or never existed) before the signal landed.
    NotFound(u32),
    PermissionDenied(u32),
    Failed(u32, String),
}

impl KillResult {
    pub fn is_success(&self) -> bool {
        matches!(self, KillResult::Success(..))
    }

    pub fn message(&self) -> String {
        match self {
            KillResult::Success(pid, signal) => format!("Sent {signal} to PID {pid}"),
            KillResult::NotFound(pid) => format!("Process {pid} not found (already exited?)"),
            KillResult::PermissionDenied(pid) => {
                format!("Permission denied: cannot signal PID {pid}")
            }
            KillResult::Failed(_, err) => err.clone(),
        }
    }
}

/// Graceful shutdown request.
pub fn terminate_process(pid: u32) -> KillResult {
    send_signal(pid, ProcessSignal::Terminate)
}

/// Forced, immediate termination.
pub fn kill_process(pid: u32) -> KillResult {
    send_signal(pid, ProcessSignal::Kill)
}

pub fn send_signal(pid: u32, signal: ProcessSignal) -> KillResult {
    let signal_name = signal.name();
    match platform::signal_process(pid, signal) {
        SignalStatus::Delivered => {
            tracing::info!(pid, signal = signal_name, "signal delivered");
            KillResult::Success(pid, signal_name)
        }
        SignalStatus::NoSuchProcess => KillResult::NotFound(pid),
        SignalStatus::AccessDenied => {
            tracing::warn!(pid, signal = signal_name, "permission denied");
            KillResult::PermissionDenied(pid)
        }
        SignalStatus::Os(code) => {
            tracing::warn!(pid, signal = signal_name, code, "signal failed");
            KillResult::Failed(
                pid,
                format!("Failed to send {signal_name} to PID {pid} (os error {code})"),
            )
        }
    }
}
