use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn sound_status_defaults_to_on() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child("settings.yaml");
    let settings_arg = settings.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("arborquote");
    cmd.args(["sound", "status", "--settings", &settings_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sound: on"));
    settings.assert(predicate::path::missing());
}

#[test]
fn mute_is_persisted_between_runs() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child("prefs").child("settings.yaml");
    let settings_arg = settings.path().to_str().unwrap().to_string();

    let mut mute = assert_cmd::cargo_bin_cmd!("arborquote");
    mute.args(["sound", "mute", "--settings", &settings_arg]);
    mute.assert()
        .success()
        .stdout(predicate::str::contains("Sound: off"))
        .stdout(predicate::str::contains("Sound preference written to"));

    let contents = fs::read_to_string(settings.path()).unwrap();
    assert!(contents.contains("SoundMuted: true"));

    let mut status = assert_cmd::cargo_bin_cmd!("arborquote");
    status.args(["sound", "status", "--settings", &settings_arg]);
    status
        .assert()
        .success()
        .stdout(predicate::str::contains("Sound: off"));

    let mut unmute = assert_cmd::cargo_bin_cmd!("arborquote");
    unmute.args(["sound", "unmute", "--settings", &settings_arg]);
    unmute
        .assert()
        .success()
        .stdout(predicate::str::contains("Sound: on"));

    let contents = fs::read_to_string(settings.path()).unwrap();
    assert!(contents.contains("SoundMuted: false"));
}

#[test]
fn settings_path_can_come_from_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child("from-config.yaml");
    let config = temp.child("config.yaml");
    config
        .write_str(&format!(
            "settings_file: {}\ndefault_volume: 0.3\n",
            settings.path().display()
        ))
        .unwrap();
    let config_arg = config.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("arborquote");
    cmd.args(["--config", &config_arg, "sound", "mute"]);
    cmd.assert().success();

    settings.assert(predicate::str::contains("SoundMuted: true"));
}

#[test]
fn malformed_settings_file_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let settings = temp.child("settings.yaml");
    settings.write_str("SoundMuted: [oops\n").unwrap();
    let settings_arg = settings.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("arborquote");
    cmd.args(["sound", "status", "--settings", &settings_arg]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to open settings"));
}
