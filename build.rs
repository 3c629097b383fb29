use std::{env, error::Error, fs, path::PathBuf};

#[path = "build/env_levels.rs"]
mod env_levels;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-env-changed=EMLOG_LEVELS");
    println!("cargo:rerun-if-changed=build/env_levels.rs");

    let mask = match env::var("EMLOG_LEVELS") {
        Ok(spec) => env_levels::parse_levels(&spec)?,
        Err(_) => env_levels::all(),
    };

    // Put the default enable mask where `src/levels.rs` can `include!` it
    let out = &PathBuf::from(env::var("OUT_DIR")?);
    fs::write(
        out.join("default_levels.rs"),
        format!("{:#07b}\n", mask),
    )?;

    Ok(())
}
