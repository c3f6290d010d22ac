mod common;

use common::{stdout, TestEnv};

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();
    let output = env.run(&["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["browse", "list", "render"] {
        assert!(out.contains(command), "missing {} in help:\n{}", command, out);
    }
}

#[test]
fn version_matches_package() {
    let env = TestEnv::new();
    let output = env.run(&["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn browse_requires_a_terminal() {
    let env = TestEnv::new();
    // stdout is a pipe here
    let output = env.run(&["browse", "--source", "cases.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("interactive terminal"));
}

#[test]
fn unknown_config_key_warns() {
    let env = TestEnv::new();
    env.write("cases.txt", common::CATALOG);
    env.write("testrun.toml", "[source]\nurll = \"cases.txt\"\n");
    let output = env.run(&["list", "--source", "cases.txt"]);

    assert!(output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("Unknown config key 'urll'"), "stderr: {}", err);
    assert!(err.contains("Did you mean 'url'?"));
}
