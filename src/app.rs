use std::ffi::OsString;

use tracing::{debug, error};

use crate::args::{collect_arguments, parse_invocation};
use crate::cmdline::join_arguments;
use crate::elevation::Launcher;
use crate::error::{LaunchError, Result};
use crate::notify::Notifier;
use crate::types::{LaunchOutcome, LaunchRequest, WaitMode, EXIT_FAILURE_STATUS};

/// Runs one launch attempt and returns the process exit status.
///
/// Every failure is shown through `notifier` before `EXIT_FAILURE_STATUS`
/// is returned.
pub fn run<I>(args: I, launcher: &dyn Launcher, notifier: &dyn Notifier) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    match launch(args, launcher) {
        Ok(outcome) => outcome.exit_status(),
        Err(err) => {
            error!(kind = ?err.kind(), "{err}");
            notifier.show_error(&err.user_message());
            EXIT_FAILURE_STATUS
        }
    }
}

fn launch<I>(args: I, launcher: &dyn Launcher) -> Result<LaunchOutcome>
where
    I: IntoIterator<Item = OsString>,
{
    let invocation = parse_invocation(collect_arguments(args)?);
    debug!(?invocation, "parsed invocation");

    let (target, rest) = invocation.split_target()?;
    let request = LaunchRequest::elevated(target, join_arguments(rest));

    if request.elevate && !launcher.supports_elevation() {
        return Err(LaunchError::ElevationUnsupported);
    }

    launcher.start(&request, WaitMode::from_flag(invocation.wait_for_exit))
}
