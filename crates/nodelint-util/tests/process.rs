use nodelint_util::process::{ensure_exit_code, CommandBuilder, Exec, SystemExec};

#[test]
fn test_builder_simple_command() {
    let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "hello");
}

#[test]
fn test_builder_multiple_args() {
    let output = CommandBuilder::new("echo")
        .args(["one", "two", "three"])
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "one two three");
}

#[cfg(unix)]
#[test]
fn test_builder_with_env() {
    let output = CommandBuilder::new("sh")
        .arg("-c")
        .arg("echo $MY_TEST_VAR")
        .env("MY_TEST_VAR", "nodelint_test_value")
        .exec()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "nodelint_test_value");
}

#[cfg(unix)]
#[test]
fn test_builder_with_cwd() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("nodelint_cwd_test.marker"), "ok").unwrap();

    let output = SystemExec
        .run(
            &CommandBuilder::new("ls")
                .arg("nodelint_cwd_test.marker")
                .cwd(tmp.path()),
        )
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nodelint_cwd_test.marker"));
}

#[test]
fn test_builder_nonexistent_program() {
    let result = CommandBuilder::new("nonexistent_program_xyz_123").exec();
    let err = result.unwrap_err();
    assert!(err.to_string().contains("nonexistent_program_xyz_123"));
}

#[test]
fn test_builder_accessors() {
    let cmd = CommandBuilder::new("npm")
        .args(["install", "-g", "pnpm"])
        .env("PATH", "/opt/node/bin")
        .cwd("/work");
    assert_eq!(cmd.program(), "npm");
    assert_eq!(cmd.get_args(), ["install", "-g", "pnpm"]);
    assert_eq!(cmd.get_env("PATH"), Some("/opt/node/bin"));
    assert_eq!(cmd.get_env("HOME"), None);
    assert_eq!(cmd.get_cwd(), Some(std::path::Path::new("/work")));
}

#[cfg(unix)]
#[test]
fn test_ensure_exit_code_accepts_listed_codes() {
    let cmd = CommandBuilder::new("sh").args(["-c", "exit 1"]);
    let output = cmd.exec().unwrap();
    assert!(ensure_exit_code(&cmd, &output, &[0, 1]).is_ok());
}

#[cfg(unix)]
#[test]
fn test_ensure_exit_code_rejects_other_codes() {
    let cmd = CommandBuilder::new("sh").args(["-c", "echo boom >&2; exit 2"]);
    let output = cmd.exec().unwrap();
    let err = ensure_exit_code(&cmd, &output, &[0, 1]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("status 2"), "got: {msg}");
    assert!(msg.contains("boom"), "got: {msg}");
}
