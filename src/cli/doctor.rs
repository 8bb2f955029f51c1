//! Check the environment before deploying.

use anyhow::{bail, Result};

use crate::config::{AppConfig, ENV_VARS};

/// Report which configuration variables are present and whether the
/// resulting configuration parses. Exits non-zero on problems.
pub fn run() -> Result<()> {
    let mut missing = 0;
    for (name, required) in ENV_VARS {
        let present = std::env::var(name)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false);
        let mark = match (present, required) {
            (true, _) => "ok  ",
            (false, true) => "MISS",
            (false, false) => "opt ",
        };
        println!("  [{mark}] {name}");
        if !present && required {
            missing += 1;
        }
    }

    if missing > 0 {
        bail!("{missing} required variable(s) missing");
    }

    match AppConfig::from_env() {
        Ok(config) => {
            println!("  base URL: {}", config.base_url);
            println!("  configuration OK");
            Ok(())
        }
        Err(e) => bail!("configuration invalid: {e}"),
    }
}
