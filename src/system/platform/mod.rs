#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessSignal {
    /// Ask the process to shut down (SIGTERM).
    Terminate,
    /// Stop the process immediately (SIGKILL).
    Kill,
}

impl ProcessSignal {
    pub fn name(self) -> &'static str {
        match self {
            ProcessSignal::Terminate => "SIGTERM",
            ProcessSignal::Kill => "SIGKILL",
        }
    }
}

/// Raw outcome of delivering a signal, before it is turned into a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStatus {
    Delivered,
    NoSuchProcess,
    AccessDenied,
    Os(i32),
}

pub trait PlatformExtensions {
    fn signal_process(pid: u32, signal: ProcessSignal) -> SignalStatus;
}

#[cfg(unix)]
mod unix;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(unix)]
use unix as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn signal_process(pid: u32, signal: ProcessSignal) -> SignalStatus {
    platform_impl::Platform::signal_process(pid, signal)
}
