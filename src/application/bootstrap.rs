#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;

use std::env;
use std::future::Future;
use std::process;

use anyhow::Result;

/// Marker set by the launcher on the re-executed child. Its presence means
/// the process is already running under the host and the target can execute
/// in place.
pub const HOSTED_ENV: &str = "BLAUPAUSE_HOSTED";

/// Optional launcher command the process re-executes itself through. When
/// unset the executable relaunches itself directly.
pub const HOST_ENV: &str = "BLAUPAUSE_HOST";

pub fn hosted() -> bool {
    return env::var(HOSTED_ENV).is_ok();
}

/// Drives an asynchronous target to completion on a fresh single-threaded
/// runtime when already hosted, and hands the process over to the launcher
/// otherwise.
pub fn run_async<F>(target: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    if hosted() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        return runtime.block_on(target);
    }

    return relaunch();
}

/// Same two-branch logic for a plain callable target.
pub fn run_fn<F>(target: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    if hosted() {
        return target();
    }

    return relaunch();
}

fn relaunch() -> Result<()> {
    let exe = env::current_exe()?;
    let launcher = env::var(HOST_ENV).unwrap_or_default();

    let mut command = if launcher.is_empty() {
        process::Command::new(exe)
    } else {
        let mut command = process::Command::new(launcher);
        command.arg(exe);
        command
    };

    command.args(env::args().skip(1));
    command.env(HOSTED_ENV, "1");

    let status = command.status()?;
    process::exit(status.code().unwrap_or(1));
}
