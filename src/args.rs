use std::ffi::OsString;

use crate::error::{LaunchError, Result};

const WAIT_FLAGS: [&str; 2] = ["/wait", "--wait"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub wait_for_exit: bool,
    pub payload: Vec<String>,
}

impl Invocation {
    /// Splits the payload into the target and the arguments forwarded to it.
    pub fn split_target(&self) -> Result<(&str, &[String])> {
        match self.payload.split_first() {
            Some((target, rest)) => Ok((target.as_str(), rest)),
            None => Err(LaunchError::NoArguments),
        }
    }
}

/// Converts raw OS arguments (program name already removed) to strings.
pub fn collect_arguments<I>(raw: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .into_string()
                .map_err(|value| LaunchError::InvalidArgument { index, value })
        })
        .collect()
}

fn is_wait_flag(arg: &str) -> bool {
    WAIT_FLAGS.iter().any(|flag| arg.eq_ignore_ascii_case(flag))
}

/// Only the first argument is ever checked for the wait flag.
pub fn parse_invocation(args: Vec<String>) -> Invocation {
    match args.first() {
        Some(first) if is_wait_flag(first) => Invocation {
            wait_for_exit: true,
            payload: args.into_iter().skip(1).collect(),
        },
        _ => Invocation {
            wait_for_exit: false,
            payload: args,
        },
    }
}
