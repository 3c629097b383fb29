use std::{process::Command, str::FromStr, sync::Mutex};

use anyhow::{anyhow, Context};
use colored::Colorize;
use once_cell::sync::Lazy;
use similar::{ChangeTag, TextDiff};
use structopt::StructOpt;

mod targets;
mod utils;

use crate::utils::{
    load_expected_output, overwrite_expected_output, run_capturing_stdout, run_command,
};

static ALL_ERRORS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(vec![]));

const ALL_SNAPSHOT_TESTS: [&str; 3] = ["log", "levels", "specifiers"];

/// Feature sets the library is checked and tested with on the host.
const HOST_FEATURES: [&str; 4] = ["", "std", "uart", "std,uart,usb"];

#[derive(Debug)]
struct Snapshot(String);

impl Snapshot {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Snapshot {
    type Err = String;

    fn from_str(test: &str) -> Result<Self, Self::Err> {
        if ALL_SNAPSHOT_TESTS.contains(&test) {
            Ok(Self(String::from(test)))
        } else {
            Err(format!(
                "Specified test '{}' does not exist, available tests are: {:?}",
                test, ALL_SNAPSHOT_TESTS
            ))
        }
    }
}

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(subcommand)]
    cmd: TestCommand,
    /// Treat compiler warnings as errors (`RUSTFLAGS="--deny warnings"`)
    #[structopt(long, short)]
    deny_warnings: bool,
    /// Keep target toolchains that were installed as dependency
    #[structopt(long, short)]
    keep_targets: bool,
}

#[derive(Debug, StructOpt)]
#[allow(clippy::enum_variant_names)]
enum TestCommand {
    TestAll,
    TestCross,
    TestHost,
    TestLint,
    /// Run snapshot tests or optionally overwrite the expected output
    TestSnapshot {
        /// Overwrite the expected output instead of comparing it.
        #[structopt(long)]
        overwrite: bool,
        /// Runs a single snapshot test in Debug mode
        #[structopt()]
        single: Option<Snapshot>,
    },
}

fn main() -> anyhow::Result<()> {
    let opt: Options = Options::from_args();
    let mut added_targets = None;

    match opt.cmd {
        TestCommand::TestHost => test_host(opt.deny_warnings),
        TestCommand::TestLint => test_lint(),
        TestCommand::TestSnapshot { overwrite, single } => test_snapshot(overwrite, single),

        // following tests need to install additional targets
        cmd => {
            added_targets = Some(targets::install()?);
            match cmd {
                TestCommand::TestCross => test_cross(),
                TestCommand::TestAll => {
                    test_host(opt.deny_warnings);
                    test_cross();
                    test_snapshot(false, None);
                    test_lint();
                }
                _ => unreachable!("get handled in outer `match`"),
            }
        }
    }

    if let Some(added_targets) = added_targets {
        if !opt.keep_targets && !added_targets.is_empty() {
            targets::uninstall(added_targets)
        }
    }

    let all_errors = ALL_ERRORS.lock().unwrap();
    if !all_errors.is_empty() {
        eprintln!();
        Err(anyhow!("😔 some tests failed: {:#?}", all_errors))
    } else {
        Ok(())
    }
}

fn do_test(test: impl FnOnce() -> anyhow::Result<()>, context: &str) {
    test().unwrap_or_else(|e| ALL_ERRORS.lock().unwrap().push(format!("{}: {}", context, e)));
}

fn test_host(deny_warnings: bool) {
    println!("🧪 host");

    let env = if deny_warnings {
        vec![("RUSTFLAGS", "--deny warnings")]
    } else {
        vec![]
    };

    for features in HOST_FEATURES {
        let mut args = vec!["check", "-p", "emlog"];
        if !features.is_empty() {
            args.extend_from_slice(&["--features", features]);
        }
        do_test(|| run_command("cargo", &args, None, &env), "host");
    }

    do_test(
        || run_command("cargo", &["test", "--workspace"], None, &env),
        "host",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &["test", "-p", "emlog", "--all-features"],
                None,
                &env,
            )
        },
        "host",
    );
}

fn test_cross() {
    println!("🧪 cross");

    for target in targets::CROSS {
        for package in ["emlog-convert", "emlog-parser"] {
            do_test(
                || run_command("cargo", &["check", "--target", target, "-p", package], None, &[]),
                "cross",
            );
        }

        do_test(
            || {
                run_command(
                    "cargo",
                    &[
                        "check",
                        "--target",
                        target,
                        "-p",
                        "emlog",
                        "--features",
                        "uart,usb",
                    ],
                    None,
                    &[],
                )
            },
            "cross",
        );
    }
}

fn test_snapshot(overwrite: bool, snapshot: Option<Snapshot>) {
    println!("🧪 snapshot");

    match snapshot {
        None => test_all_snapshots(overwrite),
        Some(snapshot) => {
            do_test(
                || test_single_snapshot(snapshot.name(), false, overwrite),
                "snapshot",
            );
        }
    }
}

fn test_all_snapshots(overwrite: bool) {
    for test in ALL_SNAPSHOT_TESTS {
        do_test(
            || test_single_snapshot(test, false, overwrite),
            "snapshot",
        );
        // release output must not differ, so it is compared against the same file
        if !overwrite {
            do_test(|| test_single_snapshot(test, true, false), "snapshot");
        }
    }
}

fn test_single_snapshot(name: &str, release_mode: bool, overwrite: bool) -> anyhow::Result<()> {
    let display_name = format!("{} ({})", name, if release_mode { "release" } else { "dev" });
    println!("{}", display_name.bold());

    let mut args = vec!["run", "-q", "-p", "emlog-snapshot", "--bin", name];
    if release_mode {
        args.push("--release");
    }

    let actual = run_capturing_stdout(Command::new("cargo").args(&args))
        .with_context(|| display_name.clone())?;

    if overwrite {
        overwrite_expected_output(name, actual.as_bytes())?;
        return Ok(());
    }

    let expected = load_expected_output(name)?;
    let diff = TextDiff::from_lines(&expected, &actual);

    // if anything isn't ChangeTag::Equal, print it and turn on error flag
    let mut actual_matches_expected = true;
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            let styled_change = match change.tag() {
                ChangeTag::Delete => Some(("-".bold().red(), escape(&change.to_string()).red())),
                ChangeTag::Insert => Some(("+".bold().green(), escape(&change.to_string()).green())),
                ChangeTag::Equal => None,
            };
            if let Some((sign, change)) = styled_change {
                actual_matches_expected = false;
                eprintln!("{}{}", sign, change);
            }
        }
    }

    if actual_matches_expected {
        Ok(())
    } else {
        Err(anyhow!("{}", display_name))
    }
}

// the snapshots are full of escape sequences and `\r`; show them instead of interpreting them
fn escape(line: &str) -> String {
    line.escape_debug().to_string()
}

fn test_lint() {
    println!("🧪 lint");
    do_test(|| run_command("cargo", &["clean"], None, &[]), "lint");
    do_test(
        || run_command("cargo", &["fmt", "--all", "--", "--check"], None, &[]),
        "lint",
    );

    do_test(
        || {
            run_command(
                "cargo",
                &["clippy", "--workspace", "--all-features"],
                None,
                &[],
            )
        },
        "lint",
    );
}
