use assert_cmd::Command;

pub fn encyclo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.env_remove("ENCYCLO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
