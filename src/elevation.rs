use tracing::{debug, info};

use crate::error::{LaunchError, Result};
use crate::types::{LaunchOutcome, LaunchRequest, WaitMode};

pub trait Launcher {
    /// Whether this launcher can honour `LaunchRequest::elevate`.
    fn supports_elevation(&self) -> bool;

    fn start(&self, request: &LaunchRequest, wait: WaitMode) -> Result<LaunchOutcome>;
}

/// Starts processes through the host shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellLauncher;

impl Launcher for ShellLauncher {
    fn supports_elevation(&self) -> bool {
        cfg!(windows)
    }

    fn start(&self, request: &LaunchRequest, wait: WaitMode) -> Result<LaunchOutcome> {
        debug!(?request, ?wait, "starting process");

        if !request.use_shell {
            return Err(LaunchError::ShellRequired);
        }

        let outcome = platform::shell_execute(request, wait)?;

        match outcome {
            LaunchOutcome::Started => info!(program = %request.target, "process started"),
            LaunchOutcome::Exited(code) => {
                info!(program = %request.target, code, "process exited")
            }
        }

        Ok(outcome)
    }
}

#[cfg(windows)]
mod platform {
    use std::ffi::OsStr;
    use std::io;
    use std::mem::size_of;
    use std::os::windows::ffi::OsStrExt;

    use windows_sys::Win32::Foundation::{
        CloseHandle, HANDLE, INVALID_HANDLE_VALUE, RPC_E_CHANGED_MODE, WAIT_FAILED,
    };
    use windows_sys::Win32::System::Com::{
        CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE,
    };
    use windows_sys::Win32::System::Threading::{GetExitCodeProcess, WaitForSingleObject, INFINITE};
    use windows_sys::Win32::UI::Shell::{
        ShellExecuteExW, SEE_MASK_FLAG_NO_UI, SEE_MASK_NOASYNC, SEE_MASK_NOCLOSEPROCESS,
        SHELLEXECUTEINFOW,
    };
    use windows_sys::Win32::UI::WindowsAndMessaging::{SW_HIDE, SW_SHOWNORMAL};

    use crate::error::{LaunchError, Result};
    use crate::types::{LaunchOutcome, LaunchRequest, WaitMode};

    const RUNAS_VERB: &str = "runas";

    struct OwnedHandle(HANDLE);

    impl OwnedHandle {
        fn is_valid(&self) -> bool {
            !self.0.is_null() && self.0 != INVALID_HANDLE_VALUE
        }
    }

    impl Drop for OwnedHandle {
        fn drop(&mut self) {
            if self.is_valid() {
                unsafe {
                    let _ = CloseHandle(self.0);
                }
            }
        }
    }

    /// Keeps the calling thread in a single-threaded COM apartment. Shell
    /// extensions reached through file associations require one.
    pub(super) struct ComApartment {
        owned: bool,
    }

    impl ComApartment {
        pub(super) fn enter() -> Result<Self> {
            let flags = (COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) as u32;
            let hr = unsafe { CoInitializeEx(std::ptr::null(), flags) };

            // S_OK and S_FALSE both need a matching CoUninitialize.
            if hr >= 0 {
                return Ok(Self { owned: true });
            }

            // Someone already put this thread in a multithreaded apartment.
            if hr == RPC_E_CHANGED_MODE {
                return Ok(Self { owned: false });
            }

            Err(LaunchError::ComInit {
                source: io::Error::from_raw_os_error(hr),
            })
        }
    }

    impl Drop for ComApartment {
        fn drop(&mut self) {
            if self.owned {
                unsafe { CoUninitialize() };
            }
        }
    }

    fn to_wide_null(value: &str, target: &str) -> Result<Vec<u16>> {
        if value.contains('\0') {
            return Err(LaunchError::InvalidTarget {
                target: target.to_string(),
            });
        }

        Ok(OsStr::new(value)
            .encode_wide()
            .chain(std::iter::once(0))
            .collect())
    }

    pub fn shell_execute(request: &LaunchRequest, wait: WaitMode) -> Result<LaunchOutcome> {
        let target = &request.target;
        let file = to_wide_null(target, target)?;
        let parameters = request
            .arguments
            .as_deref()
            .map(|arguments| to_wide_null(arguments, target))
            .transpose()?;
        let verb = if request.elevate {
            Some(to_wide_null(RUNAS_VERB, target)?)
        } else {
            None
        };

        let _apartment = ComApartment::enter()?;

        let mut info: SHELLEXECUTEINFOW = unsafe { std::mem::zeroed() };
        info.cbSize = size_of::<SHELLEXECUTEINFOW>() as u32;
        info.fMask = SEE_MASK_NOCLOSEPROCESS | SEE_MASK_NOASYNC | SEE_MASK_FLAG_NO_UI;
        info.lpFile = file.as_ptr();
        info.lpParameters = parameters
            .as_ref()
            .map_or(std::ptr::null(), |value| value.as_ptr());
        info.lpVerb = verb.as_ref().map_or(std::ptr::null(), |value| value.as_ptr());
        info.nShow = if request.show_window { SW_SHOWNORMAL } else { SW_HIDE };

        let ok = unsafe { ShellExecuteExW(&mut info) };
        if ok == 0 {
            return Err(LaunchError::StartFailed {
                target: target.clone(),
                source: io::Error::last_os_error(),
            });
        }

        let process = OwnedHandle(info.hProcess);
        if !process.is_valid() {
            return Err(LaunchError::NotStarted {
                target: target.clone(),
            });
        }

        match wait {
            WaitMode::Detach => Ok(LaunchOutcome::Started),
            WaitMode::WaitForExit => wait_for_exit(&process, target).map(LaunchOutcome::Exited),
        }
    }

    fn wait_for_exit(process: &OwnedHandle, target: &str) -> Result<i32> {
        let wait_error = || LaunchError::Wait {
            target: target.to_string(),
            source: io::Error::last_os_error(),
        };

        if unsafe { WaitForSingleObject(process.0, INFINITE) } == WAIT_FAILED {
            return Err(wait_error());
        }

        let mut code: u32 = 0;
        if unsafe { GetExitCodeProcess(process.0, &mut code) } == 0 {
            return Err(wait_error());
        }

        // Exit codes are DWORDs; NTSTATUS-style values wrap to negatives.
        Ok(code as i32)
    }
}

#[cfg(not(windows))]
mod platform {
    use crate::error::{LaunchError, Result};
    use crate::types::{LaunchOutcome, LaunchRequest, WaitMode};

    pub fn shell_execute(_request: &LaunchRequest, _wait: WaitMode) -> Result<LaunchOutcome> {
        Err(LaunchError::ElevationUnsupported)
    }
}
