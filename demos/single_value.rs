//! Single-value parsing example
//!
//! `parse` binds one environment variable into one scalar. An unset
//! variable is a recoverable NotPresent error, so "fall back to a
//! default" is an explicit match rather than silent behavior.

use envbind::BindError;

fn main() -> anyhow::Result<()> {
    std::env::set_var("WORKER_COUNT", "4");

    let mut workers = 0usize;
    envbind::parse("WORKER_COUNT", Some(&mut workers))?;
    println!("Workers: {workers}");

    let mut timeout = 30u64;
    match envbind::parse("REQUEST_TIMEOUT", Some(&mut timeout)) {
        Ok(()) => println!("Timeout: {timeout}s (configured)"),
        Err(BindError::NotPresent { .. }) => println!("Timeout: {timeout}s (default)"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
