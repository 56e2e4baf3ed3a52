//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Settings tests create a `scenario-forge.toml` and export
//! `SCENARIO_FORGE_*` variables inside a jail so nothing leaks into other
//! tests. These helpers hide the `Option` plumbing needed to get a value out
//! of the jail closure.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Runs `f` in a jail after writing `contents` to `file_name`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or `f` fails.
pub fn with_config_file<F, T>(file_name: &str, contents: &str, f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    with_jail(|jail| {
        jail.create_file(file_name, contents)?;
        f(jail)
    })
}
