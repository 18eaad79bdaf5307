use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `diarium` binary with a clean environment whose
/// data and export directories live under `root`.
pub fn base_diarium_command(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diarium").expect("diarium binary not built");
    cmd.env_clear()
        .env("HOME", root)
        .env("DIARIUM_DIR", root.join("data"))
        .env("DIARIUM_EXPORT_DIR", root.join("exports"));
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    cmd
}
