use std::{collections::HashSet, process::Command};

use anyhow::anyhow;

use crate::{run_capturing_stdout, run_command};

/// Targets the `no_std` crates are checked for: one without atomic compare-and-swap, one with an
/// FPU.
pub const CROSS: [&str; 2] = ["thumbv6m-none-eabi", "thumbv7em-none-eabihf"];

/// Make sure the [`CROSS`] targets are installed
///
/// Returns the `added_targets`.
pub fn install() -> anyhow::Result<Vec<String>> {
    let required_targets = CROSS
        .iter()
        .map(|item| item.to_string())
        .collect::<HashSet<_>>();

    let installed_targets = get_installed()?;
    let added_targets = required_targets
        .difference(&installed_targets)
        .cloned()
        .collect::<Vec<_>>();

    if !added_targets.is_empty() {
        println!("⏳ installing targets");

        let mut args = vec!["target", "add"];
        args.extend(added_targets.iter().map(|s| s.as_str()));
        run_command("rustup", &args, None, &[])
            .map_err(|e| anyhow!("Error installing targets {}: {}", added_targets.join(" "), e))?;
    }

    Ok(added_targets)
}

fn get_installed() -> anyhow::Result<HashSet<String>> {
    let stdout = run_capturing_stdout(Command::new("rustup").args(["target", "list"]))?;

    const INSTALLED_MARKER: &str = " (installed)";
    let targets = stdout
        .lines()
        .filter(|target| target.contains(INSTALLED_MARKER))
        .map(|target| target.replace(INSTALLED_MARKER, ""))
        .collect::<HashSet<_>>();
    Ok(targets)
}

pub fn uninstall(targets: Vec<String>) {
    println!("⏳ uninstalling targets");

    let mut args = vec!["target", "remove"];
    args.extend(targets.iter().map(|s| s.as_str()));

    // only print uninstall errors so the user can fix those manually if needed
    run_command("rustup", &args, None, &[])
        .unwrap_or_else(|e| eprintln!("Error uninstalling targets {}: {}", targets.join(" "), e));
}
