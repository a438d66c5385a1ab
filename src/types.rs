/// Exit status reported for every failure path.
pub const EXIT_FAILURE_STATUS: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitMode {
    Detach,
    WaitForExit,
}

impl WaitMode {
    pub fn from_flag(wait_for_exit: bool) -> Self {
        if wait_for_exit {
            WaitMode::WaitForExit
        } else {
            WaitMode::Detach
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub target: String,
    pub arguments: Option<String>,
    pub elevate: bool,
    pub show_window: bool,
    pub use_shell: bool,
}

impl LaunchRequest {
    /// Shell-association launch with the "runas" verb and a visible window.
    pub fn elevated(target: impl Into<String>, arguments: Option<String>) -> Self {
        Self {
            target: target.into(),
            arguments: arguments.filter(|value| !value.is_empty()),
            elevate: true,
            show_window: true,
            use_shell: true,
        }
    }

    pub fn with_elevate(mut self, elevate: bool) -> Self {
        self.elevate = elevate;
        self
    }

    pub fn with_show_window(mut self, show_window: bool) -> Self {
        self.show_window = show_window;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    Exited(i32),
}

impl LaunchOutcome {
    pub fn exit_status(self) -> i32 {
        match self {
            LaunchOutcome::Started => 0,
            LaunchOutcome::Exited(code) => code,
        }
    }
}
