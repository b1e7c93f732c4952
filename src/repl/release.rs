pub const GIT_HASH: &str = env!("GIT_HASH");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn session_header() -> String {
    let dev = if GIT_HASH.is_empty() || GIT_HASH == "unknown" {
        String::from("")
    } else {
        format!(" (dev {:.8})", GIT_HASH)
    };

    format!("rsubset {VERSION}{dev}\nType 'q()' to quit.")
}
