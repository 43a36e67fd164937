mod common;

use anyhow::Result;
use common::TestServer;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_set_get_roundtrip() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .args(["config", "paths.world"])
        .arg(&server.world)
        .assert()
        .success();

    server
        .bare_cmd()?
        .args(["config", "paths.world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bedrock level"));

    // The saved world is used without ADDON_WORLD
    server
        .bare_cmd()?
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration World"));

    Ok(())
}

#[test]
fn test_config_list_shows_sections() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[paths]"))
        .stdout(predicate::str::contains("[display]"))
        .stdout(predicate::str::contains("hide_default_packs = true"))
        .stdout(predicate::str::contains("[performance]"));

    Ok(())
}

#[test]
fn test_config_rejects_invalid_values() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .args(["config", "display.clean_names", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid boolean"));

    server
        .bare_cmd()?
        .args(["config", "paths.server_root", "/srv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));

    Ok(())
}

#[test]
fn test_config_unset_hide_default_packs() -> Result<()> {
    let server = TestServer::new()?;
    server.add_resource("vanilla", "resourcePack.vanilla.001")?;

    server
        .bare_cmd()?
        .args(["config", "display.hide_default_packs", "false"])
        .assert()
        .success();
    server
        .cmd()?
        .args(["list", "resource"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resourcePack.vanilla.001"));

    server
        .bare_cmd()?
        .args(["config", "display.hide_default_packs", "--unset"])
        .assert()
        .success();
    server
        .cmd()?
        .args(["list", "resource"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resourcePack.vanilla.001").not());

    Ok(())
}

#[test]
fn test_malformed_config_file_fails() -> Result<()> {
    let server = TestServer::new()?;
    fs::create_dir_all(server.config_path.parent().unwrap())?;
    fs::write(&server.config_path, "[paths\nworld = 1")?;

    server
        .cmd()?
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML config"));

    Ok(())
}

#[test]
fn test_unknown_config_keys_warn() -> Result<()> {
    let server = TestServer::new()?;
    fs::create_dir_all(server.config_path.parent().unwrap())?;
    fs::write(&server.config_path, "[network]\nport = 19132\n")?;

    server
        .cmd()?
        .arg("status")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown configuration field"))
        .stderr(predicate::str::contains("network.port"));

    Ok(())
}

#[test]
fn test_clean_names_off_keeps_format_codes() -> Result<()> {
    let server = TestServer::new()?;
    server.add_behavior("fancy", "§6Golden §lMobs")?;

    server
        .cmd()?
        .args(["list", "behavior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Golden Mobs"));

    server
        .bare_cmd()?
        .args(["config", "display.clean_names", "false"])
        .assert()
        .success();
    server
        .cmd()?
        .args(["list", "behavior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("§6Golden §lMobs"));

    Ok(())
}

#[test]
fn test_config_edit_does_not_save_overrides() -> Result<()> {
    let server = TestServer::new()?;

    // ADDON_WORLD is set by cmd()
    server
        .cmd()?
        .args(["config", "display.clean_names", "false"])
        .assert()
        .success();
    server
        .bare_cmd()?
        .arg("--resource-packs")
        .arg(server.temp_dir.path().join("somewhere_else"))
        .args(["config", "display.hide_default_packs", "false"])
        .assert()
        .success();

    let saved = fs::read_to_string(&server.config_path)?;
    assert!(saved.contains("clean_names = false"));
    assert!(saved.contains("hide_default_packs = false"));
    assert!(!saved.contains("world ="));
    assert!(!saved.contains("somewhere_else"));

    Ok(())
}
