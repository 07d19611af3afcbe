use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the wordladder binary, isolated from the user's environment
pub fn wordladder(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wordladder");
    cmd.env("WORDLADDER_CONFIG_DIR", config_dir)
        .env_remove("WORDLADDER_WORD_LIST")
        .env_remove("WORDLADDER_LOG");
    cmd
}

/// Write `words` to a word list file inside `dir`
pub fn write_word_list(dir: &Path, words: &[&str]) -> PathBuf {
    let path = dir.join("words.txt");
    fs::write(&path, words.join("\n")).expect("write word list");
    path
}
