#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub const PASSWORD: &str = "correct horse";

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_ROOT");
    cmd.env_remove("DAYBOOK_USER");
    cmd.env_remove("DAYBOOK_PASSWORD");
    cmd.env_remove("DAYBOOK_LOG");
    cmd
}

/// Initialize a workspace in `temp`
pub fn init_workspace(temp: &TempDir) {
    daybook_cmd().arg("init").arg(temp.path()).assert().success();
}

/// Register `user` with the shared test password
pub fn register(temp: &TempDir, user: &str) {
    daybook_cmd()
        .current_dir(temp.path())
        .args(["register", user, "--password", PASSWORD, "--confirm", PASSWORD])
        .assert()
        .success();
}

/// Command running inside `temp` with `user` logged in
pub fn as_user(temp: &TempDir, user: &str) -> Command {
    let mut cmd = daybook_cmd();
    cmd.current_dir(temp.path())
        .env("DAYBOOK_USER", user)
        .env("DAYBOOK_PASSWORD", PASSWORD);
    cmd
}

/// Write an entry row directly with a chosen date
pub fn insert_entry(temp: &TempDir, owner: &str, text: &str, date: Option<&str>) {
    let conn = rusqlite::Connection::open(temp.path().join(".daybook/daybook.db")).unwrap();
    conn.execute(
        "INSERT INTO journals (username, entry, date) VALUES (?1, ?2, ?3)",
        (owner, text, date),
    )
    .unwrap();
}

/// Add an entry through the CLI and return its id
pub fn add_entry(temp: &TempDir, user: &str, text: &str) -> i64 {
    let output = as_user(temp, user).args(["add", text]).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .trim()
        .parse()
        .unwrap()
}
