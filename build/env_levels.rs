//! Parsing of `EMLOG_LEVELS`, shared by `build.rs` and the tests of `src/levels.rs`.

use std::error::Error;

pub const LEVELS: [&str; 5] = ["debug", "info", "warning", "error", "fatal"];

pub fn all() -> u8 {
    (1 << LEVELS.len()) - 1
}

/// `EMLOG_LEVELS=info,error`, `EMLOG_LEVELS=all` or `EMLOG_LEVELS=none`
pub fn parse_levels(spec: &str) -> Result<u8, Box<dyn Error>> {
    let mut mask = 0;
    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let entry = entry.to_ascii_lowercase();
        mask |= match entry.as_str() {
            "all" => all(),
            "none" => 0,
            "warn" => 1 << 2,
            name => match LEVELS.iter().position(|level| *level == name) {
                Some(bit) => 1 << bit,
                None => {
                    return Err(format!(
                        "EMLOG_LEVELS: unknown level `{}` (expected one of {:?}, `all` or `none`)",
                        name, LEVELS
                    )
                    .into())
                }
            },
        };
    }
    Ok(mask)
}
