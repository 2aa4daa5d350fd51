use super::{PlatformExtensions, ProcessSignal, SignalStatus};

use windows_sys::Win32::{
    Foundation::{CloseHandle, ERROR_ACCESS_DENIED, ERROR_INVALID_PARAMETER, GetLastError},
    System::Threading::{OpenProcess, PROCESS_TERMINATE, TerminateProcess},
};

pub struct Platform;

fn last_error_status() -> SignalStatus {
    let code = unsafe { GetLastError() };
    match code {
        ERROR_ACCESS_DENIED => SignalStatus::AccessDenied,
        ERROR_INVALID_PARAMETER => SignalStatus::NoSuchProcess,
        other => SignalStatus::Os(other as i32),
    }
}

impl PlatformExtensions for Platform {
    // Windows has no graceful signal for arbitrary processes; both variants
    // end in TerminateProcess and differ only in the exit code.
    fn signal_process(pid: u32, signal: ProcessSignal) -> SignalStatus {
        if pid == 0 || i32::try_from(pid).is_err() {
            return SignalStatus::NoSuchProcess;
        }
        let exit_code = match signal {
            ProcessSignal::Terminate => 0,
            ProcessSignal::Kill => 1,
        };
        unsafe {
            let handle = OpenProcess(PROCESS_TERMINATE, 0, pid);
            if handle.is_null() {
                return last_error_status();
            }
            let ok = TerminateProcess(handle, exit_code);
            let status = if ok == 0 {
                last_error_status()
            } else {
                SignalStatus::Delivered
            };
            CloseHandle(handle);
            status
        }
    }
}
