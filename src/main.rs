#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use run_elevated::elevation::ShellLauncher;
use run_elevated::notify::MessageBoxNotifier;
use run_elevated::{app, logging};

fn main() {
    logging::init();

    let status = app::run(std::env::args_os().skip(1), &ShellLauncher, &MessageBoxNotifier);

    std::process::exit(status);
}
