pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub static GIT_HASH: Option<&str> = option_env!("DICE_GUESS_GIT_HASH");

/// `v0.1.0`, or `v0.1.0 (abc1234)` when built inside a git checkout.
pub fn version_text() -> String {
    match GIT_HASH {
        Some(hash) => format!("v{VERSION} ({hash})"),
        None => format!("v{VERSION}"),
    }
}
