pub const ERROR_CAPTION: &str = "Error";

pub trait Notifier {
    /// Blocks until the user has acknowledged `message`.
    fn show_error(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxNotifier;

#[cfg(windows)]
impl Notifier for MessageBoxNotifier {
    fn show_error(&self, message: &str) {
        use std::ffi::OsStr;
        use std::os::windows::ffi::OsStrExt;

        use windows_sys::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        fn to_wide_null(value: &str) -> Vec<u16> {
            OsStr::new(value)
                .encode_wide()
                .map(|unit| if unit == 0 { u16::from(b' ') } else { unit })
                .chain(std::iter::once(0))
                .collect()
        }

        let text = to_wide_null(message);
        let caption = to_wide_null(ERROR_CAPTION);

        unsafe {
            let _ = MessageBoxW(
                std::ptr::null_mut(),
                text.as_ptr(),
                caption.as_ptr(),
                MB_OK | MB_ICONERROR,
            );
        }
    }
}

#[cfg(not(windows))]
impl Notifier for MessageBoxNotifier {
    fn show_error(&self, message: &str) {
        eprintln!("{ERROR_CAPTION}: {message}");
    }
}
