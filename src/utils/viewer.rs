//! Open a rendered chart with the platform's default image viewer.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawn the viewer detached; the caller does not wait for it.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
