use std::cell::RefCell;
use std::ffi::OsString;
use std::io;

use run_elevated::app::run;
use run_elevated::elevation::Launcher;
use run_elevated::error::{LaunchError, Result};
use run_elevated::notify::Notifier;
use run_elevated::types::{LaunchOutcome, LaunchRequest, WaitMode, EXIT_FAILURE_STATUS};

enum Behavior {
    Start,
    ExitWith(i32),
    NoHandle,
    Refuse,
}

struct FakeLauncher {
    elevation: bool,
    behavior: Behavior,
    calls: RefCell<Vec<(LaunchRequest, WaitMode)>>,
}

impl FakeLauncher {
    fn new(behavior: Behavior) -> Self {
        Self {
            elevation: true,
            behavior,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn without_elevation(mut self) -> Self {
        self.elevation = false;
        self
    }

    fn calls(&self) -> Vec<(LaunchRequest, WaitMode)> {
        self.calls.borrow().clone()
    }
}

impl Launcher for FakeLauncher {
    fn supports_elevation(&self) -> bool {
        self.elevation
    }

    fn start(&self, request: &LaunchRequest, wait: WaitMode) -> Result<LaunchOutcome> {
        self.calls.borrow_mut().push((request.clone(), wait));

        match self.behavior {
            Behavior::Start => Ok(LaunchOutcome::Started),
            Behavior::ExitWith(code) if wait == WaitMode::WaitForExit => Ok(LaunchOutcome::Exited(code)),
            Behavior::ExitWith(_) => Ok(LaunchOutcome::Started),
            Behavior::NoHandle => Err(LaunchError::NotStarted {
                target: request.target.clone(),
            }),
            Behavior::Refuse => Err(LaunchError::StartFailed {
                target: request.target.clone(),
                source: io::Error::new(io::ErrorKind::Other, "The operation was canceled by the user."),
            }),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn os_args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[test]
fn no_arguments_is_usage_error() {
    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&[]), &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert!(launcher.calls().is_empty(), "no start may be attempted");
    assert_eq!(notifier.messages(), vec!["No arguments specified.".to_string()]);
}

#[test]
fn wait_flag_alone_is_usage_error() {
    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["/WAIT"]), &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert!(launcher.calls().is_empty());
    assert_eq!(notifier.messages(), vec!["No arguments specified.".to_string()]);
}

#[test]
fn detached_launch_returns_zero() {
    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["cmd", "/c", "dir"]), &launcher, &notifier);

    assert_eq!(status, 0);
    assert!(notifier.messages().is_empty());

    let calls = launcher.calls();
    assert_eq!(calls.len(), 1);
    let (request, wait) = &calls[0];
    assert_eq!(request.target, "cmd");
    assert_eq!(request.arguments.as_deref(), Some("/c dir"));
    assert!(request.elevate);
    assert!(request.use_shell);
    assert!(request.show_window);
    assert_eq!(*wait, WaitMode::Detach);
}

#[test]
fn wait_mode_relays_child_exit_code() {
    let launcher = FakeLauncher::new(Behavior::ExitWith(7));
    let notifier = RecordingNotifier::default();

    let status = run(
        os_args(&["/wait", "notepad.exe", "C:\\temp\\a file.txt"]),
        &launcher,
        &notifier,
    );

    assert_eq!(status, 7);
    assert!(notifier.messages().is_empty());

    let calls = launcher.calls();
    let (request, wait) = &calls[0];
    assert_eq!(request.target, "notepad.exe");
    assert_eq!(request.arguments.as_deref(), Some("\"C:\\temp\\a file.txt\""));
    assert_eq!(*wait, WaitMode::WaitForExit);
}

#[test]
fn wait_mode_relays_failing_exit_code() {
    let launcher = FakeLauncher::new(Behavior::ExitWith(-1073741510));
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["--wait", "cmd"]), &launcher, &notifier);

    assert_eq!(status, -1073741510);
    assert!(notifier.messages().is_empty());
}

#[test]
fn target_without_arguments_has_none() {
    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    run(os_args(&["regedit"]), &launcher, &notifier);

    let calls = launcher.calls();
    assert_eq!(calls[0].0.arguments, None);
}

#[test]
fn missing_handle_reports_target() {
    let launcher = FakeLauncher::new(Behavior::NoHandle);
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["C:\\tools\\setup.exe"]), &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert_eq!(
        notifier.messages(),
        vec!["Process 'C:\\tools\\setup.exe' couldn't be started.".to_string()]
    );
}

#[test]
fn declined_prompt_reports_target_and_reason() {
    let launcher = FakeLauncher::new(Behavior::Refuse);
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["/wait", "mmc.exe", "compmgmt.msc"]), &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("'mmc.exe'"));
    assert!(messages[0].contains("canceled by the user"));
}

#[test]
fn missing_elevation_capability_skips_launch() {
    let launcher = FakeLauncher::new(Behavior::Start).without_elevation();
    let notifier = RecordingNotifier::default();

    let status = run(os_args(&["cmd"]), &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert!(launcher.calls().is_empty());
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("not supported on this platform"));
}

#[cfg(unix)]
#[test]
fn non_unicode_argument_is_fault() {
    use std::os::unix::ffi::OsStringExt;

    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    let args = vec![OsString::from("cmd"), OsString::from_vec(vec![0x66, 0x6f, 0xff])];
    let status = run(args, &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert!(launcher.calls().is_empty());
    let messages = notifier.messages();
    assert!(messages[0].starts_with("Argument 1 is not valid Unicode"));
    assert!(messages[0].contains("InvalidArgument"));
}

#[cfg(windows)]
#[test]
fn non_unicode_argument_is_fault() {
    use std::os::windows::ffi::OsStringExt;

    let launcher = FakeLauncher::new(Behavior::Start);
    let notifier = RecordingNotifier::default();

    let args = vec![OsString::from("cmd"), OsString::from_wide(&[0x0066, 0xD800])];
    let status = run(args, &launcher, &notifier);

    assert_eq!(status, EXIT_FAILURE_STATUS);
    assert!(launcher.calls().is_empty());
    let messages = notifier.messages();
    assert!(messages[0].starts_with("Argument 1 is not valid Unicode"));
    assert!(messages[0].contains("InvalidArgument"));
}
