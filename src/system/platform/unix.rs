use super::{PlatformExtensions, ProcessSignal, SignalStatus};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn signal_process(pid: u32, signal: ProcessSignal) -> SignalStatus {
        // 0 and negative pids address process groups, never a single process.
        let raw_pid = match libc::pid_t::try_from(pid) {
            Ok(p) if p > 0 => p,
            _ => return SignalStatus::NoSuchProcess,
        };
        let sig = match signal {
            ProcessSignal::Terminate => libc::SIGTERM,
            ProcessSignal::Kill => libc::SIGKILL,
        };

        let rc = unsafe { libc::kill(raw_pid, sig) };
        if rc == 0 {
            return SignalStatus::Delivered;
        }
        match std::io::Error::last_os_error().raw_os_error() {
            Some(libc::ESRCH) => SignalStatus::NoSuchProcess,
            Some(libc::EPERM) => SignalStatus::AccessDenied,
            Some(code) => SignalStatus::Os(code),
            None => SignalStatus::Os(-1),
        }
    }
}
