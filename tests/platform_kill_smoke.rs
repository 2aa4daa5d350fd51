use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tasktop::system::kill::{KillResult, kill_process, terminate_process};

fn spawn_long_lived_child() -> Child {
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("powershell");
        c.args([
            "-NoProfile",
            "-NonInteractive",
            "-Command",
            "Start-Sleep -Seconds 30",
        ]);
        c
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut c = Command::new("sh");
        c.args(["-c", "sleep 30"]);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn child process")
}

fn wait_for_exit(child: &mut Child, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return,
            Ok(None) if Instant::now() < deadline => {
                thread::sleep(Duration::from_millis(50));
            }
            Ok(None) => {
                let _ = child.kill();
                panic!("child process did not exit before timeout");
            }
            Err(err) => {
                let _ = child.kill();
                panic!("failed waiting for child exit: {err}");
            }
        }
    }
}

#[test]
fn terminate_nonexistent_pid_returns_not_found() {
    let result = terminate_process(u32::MAX);
    assert_eq!(result, KillResult::NotFound(u32::MAX));
    assert!(result.message().contains("not found"));
}

#[test]
fn kill_nonexistent_pid_returns_not_found() {
    let pid = i32::MAX as u32;
    assert_eq!(kill_process(pid), KillResult::NotFound(pid));
}

#[test]
fn terminate_spawned_child_exits() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    match terminate_process(pid) {
        KillResult::Success(signalled, _) => assert_eq!(signalled, pid),
        other => {
            let _ = child.kill();
            panic!("terminate_process failed: {}", other.message());
        }
    }
    wait_for_exit(&mut child, Duration::from_secs(5));
}

#[test]
fn kill_spawned_child_exits() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    let result = kill_process(pid);
    if !result.is_success() {
        let _ = child.kill();
        panic!("kill_process failed: {}", result.message());
    }
    assert!(result.message().starts_with("Sent "));
    wait_for_exit(&mut child, Duration::from_secs(5));
}

#[test]
fn signalling_reaped_child_reports_not_found() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();
    let _ = child.kill();
    let _ = child.wait();

    let result = terminate_process(pid);
    assert!(
        matches!(result, KillResult::NotFound(_) | KillResult::PermissionDenied(_)),
        "unexpected result {result:?}"
    );
}
