use regex::{Captures, RegexBuilder};
use std::{env, fs};

/// Log to cargo's warning output
///
/// Only enabled if environment variable "LOG" is set.
///
/// ```text
/// LOG=1 cargo build
/// ```
///
macro_rules! log {
    ($($tokens: tt)*) => {
        if env::var("LOG").is_ok() {
            println!("cargo:warning={}", format!($($tokens)*));
        }
    }
}

type BuildResult<T> = Result<T, String>;

fn scrape_builtins(path: &str) -> BuildResult<Vec<(String, String)>> {
    let mut builtins = vec![];
    let entries = fs::read_dir(path).map_err(|e| format!("unable to read {path}: {e}"))?;

    let re = RegexBuilder::new(r#"#\[builtin\(.*\bsym\s*=\s*\"(.*)\".*\)\].*struct\s+(\w+?)"#)
        .multi_line(true)
        .dot_matches_new_line(true)
        .swap_greed(true)
        .crlf(true)
        .build()
        .map_err(|e| e.to_string())?;

    let mut entries: Vec<_> = entries.filter_map(Result::ok).collect();
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();
        match entry.file_type() {
            Ok(filetype) if filetype.is_file() => {
                let content = fs::read_to_string(&path)
                    .map_err(|e| format!("unable to read {}: {e}", path.display()))?;

                log!("Scanning file {}", path.display());
                for (_, [sym, ty]) in re.captures_iter(&content).map(|c| c.extract()) {
                    log!("  - {ty} as '{sym}'");
                    builtins.push((String::from(sym), String::from(ty)))
                }
            }
            Ok(filetype) if filetype.is_dir() => {
                let dir = path.to_string_lossy().into_owned();
                builtins.append(&mut scrape_builtins(&dir)?);
            }
            _ => continue,
        }
    }

    Ok(builtins)
}

fn update_builtins_table(path: &str, builtins: &[(String, String)]) -> BuildResult<()> {
    let content = fs::read_to_string(path).map_err(|e| format!("unable to read {path}: {e}"))?;

    let re = RegexBuilder::new(r#"(// builtins start)\s*(\n\s*?).*(\n\s*?// builtins end)"#)
        .multi_line(true)
        .dot_matches_new_line(true)
        .swap_greed(true)
        .crlf(true)
        .build()
        .map_err(|e| e.to_string())?;

    let updated = re.replace(&content, |cap: &Captures| {
        let (_, [head, ws, tail]) = cap.extract();
        let mut res = String::from(head);
        for (sym, ty) in builtins {
            res.push_str(&format!(r#"{ws}("{sym}", Box::new({ty}) as Box<dyn Builtin>),"#));
        }
        res.push_str(tail);
        res
    });

    // avoid touching the file, and retriggering a build, when nothing changed
    if updated != content {
        log!("Updating {path} ... ");
        fs::write(path, updated.as_ref()).map_err(|e| format!("unable to write {path}: {e}"))?;
    }

    Ok(())
}

fn git_hash() -> String {
    use std::process::Command;
    let unknown = String::from("unknown");

    let clean = Command::new("git")
        .args(["diff", "--cached", "--exit-code"])
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if !clean {
        return unknown;
    }

    Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or(unknown)
}

fn main() -> BuildResult<()> {
    // embed git hash as environment variable GIT_HASH for use in header
    println!("cargo:rustc-env=GIT_HASH={}", git_hash());

    // iterate through callable module files and scan for uses of
    // `#[builtin(.. sym = "sym" ..)]`
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/callable");
    let builtins = scrape_builtins("src/callable")?;
    update_builtins_table("src/callable/builtins.rs", &builtins)?;

    Ok(())
}
