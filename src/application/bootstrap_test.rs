use std::env;

use anyhow::bail;
use anyhow::Result;

use super::hosted;
use super::run_async;
use super::run_fn;
use super::HOSTED_ENV;

// Environment mutation is process-wide, so the hosted-mode behaviors are
// exercised in a single sequential test.
#[test]
fn it_runs_targets_in_place_when_hosted() -> Result<()> {
    env::set_var(HOSTED_ENV, "1");
    assert!(hosted());

    let mut called = false;
    run_fn(|| {
        called = true;
        return Ok(());
    })?;
    assert!(called);

    run_async(async {
        return Ok(());
    })?;

    let res = run_async(async {
        bail!("kaputt")
    });
    assert!(res.is_err());

    env::remove_var(HOSTED_ENV);
    assert!(!hosted());

    return Ok(());
}
