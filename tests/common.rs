use assert_cmd::{cargo::cargo_bin_cmd, Command};

pub fn digraph() -> Command {
    let mut cmd = cargo_bin_cmd!("digraph");
    cmd.env_remove("RUST_LOG")
        .env_remove("DIGRAPH_LOG")
        .env_remove("DIGRAPH_LOG_LEVEL");
    cmd
}

/// head -> foo, head -> bar (weight 1), foo -> baz, bar -> baz (weight 2)
pub const DIAMOND: [&str; 8] = [
    "--edge",
    "head>foo:1",
    "--edge",
    "head>bar:1",
    "--edge",
    "foo>baz:2",
    "--edge",
    "bar>baz:2",
];

/// A command preloaded with the weighted diamond graph
#[allow(dead_code)]
pub fn diamond() -> Command {
    let mut cmd = digraph();
    cmd.args(DIAMOND);
    cmd
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
