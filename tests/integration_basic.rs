mod common;

use anyhow::Result;
use common::{TestServer, write_pack};
use predicates::prelude::*;
use std::fs;

const RESOURCE_ORDER: &str = "world_resource_packs.json";
const BEHAVIOR_ORDER: &str = "world_behavior_packs.json";

#[test]
fn test_status_shows_world_and_counts() -> Result<()> {
    let server = TestServer::new()?;
    let a = server.add_resource("a", "Alpha Textures")?;
    server.add_resource("b", "Beta Textures")?;
    server.add_behavior("x", "Extra Mobs")?;
    server.write_order(RESOURCE_ORDER, &[&a])?;

    server
        .cmd()?
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration World"))
        .stdout(predicate::str::contains("1 active, 1 inactive"))
        .stdout(predicate::str::contains("0 active, 1 inactive"))
        .stdout(predicate::str::contains("loads first: Alpha Textures"));

    Ok(())
}

#[test]
fn test_first_run_creates_missing_order_files() -> Result<()> {
    let server = TestServer::new()?;
    server.add_behavior("x", "Extra Mobs")?;

    server.cmd()?.arg("list").assert().success();

    assert_eq!(
        fs::read_to_string(server.order_path(RESOURCE_ORDER))?.trim(),
        "[]"
    );
    assert!(server.read_order(BEHAVIOR_ORDER)?.is_empty());
    Ok(())
}

#[test]
fn test_list_hides_default_packs_unless_all() -> Result<()> {
    let server = TestServer::new()?;
    server.add_resource("vanilla", "resourcePack.vanilla.001")?;
    server.add_resource("custom", "Custom Sky")?;

    server
        .cmd()?
        .args(["list", "resource"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom Sky"))
        .stdout(predicate::str::contains("resourcePack.vanilla").not())
        .stdout(predicate::str::contains("1 built-in pack(s) hidden"));

    server
        .cmd()?
        .args(["list", "resource", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resourcePack.vanilla.001"));

    Ok(())
}

#[test]
fn test_list_flags_kind_mismatch() -> Result<()> {
    let server = TestServer::new()?;
    write_pack(&server.behavior_packs, "lost", "Lost Textures", "resources")?;

    server
        .cmd()?
        .args(["list", "behavior", "--inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lost Textures"))
        .stdout(predicate::str::contains("resources pack found in behavior_packs"));

    Ok(())
}

#[test]
fn test_enable_appends_to_order() -> Result<()> {
    let server = TestServer::new()?;
    let a = server.add_resource("a", "Alpha")?;
    let b = server.add_resource("b", "Beta")?;
    server.write_order(RESOURCE_ORDER, &[&b])?;

    server
        .cmd()?
        .args(["enable", "resource", &a.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled 1 resource pack(s)"));

    assert_eq!(server.read_order(RESOURCE_ORDER)?, [b.id, a.id]);
    // The other category is rewritten unchanged
    assert!(server.read_order(BEHAVIOR_ORDER)?.is_empty());
    Ok(())
}

#[test]
fn test_disable_and_reenable_moves_to_end() -> Result<()> {
    let server = TestServer::new()?;
    let x = server.add_behavior("x", "X")?;
    let y = server.add_behavior("y", "Y")?;
    server.write_order(BEHAVIOR_ORDER, &[&x, &y])?;

    server
        .cmd()?
        .args(["disable", "bp", &x.id.to_string()])
        .assert()
        .success();
    assert_eq!(server.read_order(BEHAVIOR_ORDER)?, [y.id]);

    server
        .cmd()?
        .args(["enable", "bp", &x.id.to_string()])
        .assert()
        .success();
    assert_eq!(server.read_order(BEHAVIOR_ORDER)?, [y.id, x.id]);
    Ok(())
}

#[test]
fn test_enable_unknown_pack_fails() -> Result<()> {
    let server = TestServer::new()?;
    let x = server.add_behavior("x", "X")?;

    server
        .cmd()?
        .args(["enable", "resource", &x.id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("No resource pack with id"));

    assert!(server.read_order(RESOURCE_ORDER)?.is_empty());
    Ok(())
}

#[test]
fn test_move_reorders_active_list() -> Result<()> {
    let server = TestServer::new()?;
    let p0 = server.add_resource("p0", "P0")?;
    let p1 = server.add_resource("p1", "P1")?;
    let p2 = server.add_resource("p2", "P2")?;
    server.write_order(RESOURCE_ORDER, &[&p0, &p1, &p2])?;

    server
        .cmd()?
        .args(["move", "resource", &p2.id.to_string(), "--to", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 'P2' to position 0"));
    assert_eq!(server.read_order(RESOURCE_ORDER)?, [p2.id, p0.id, p1.id]);

    server
        .cmd()?
        .args(["move", "resource", &p0.id.to_string(), "--down"])
        .assert()
        .success();
    assert_eq!(server.read_order(RESOURCE_ORDER)?, [p2.id, p1.id, p0.id]);

    server
        .cmd()?
        .args(["move", "resource", &p0.id.to_string(), "--to", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn test_delete_requires_yes() -> Result<()> {
    let server = TestServer::new()?;
    let x = server.add_behavior("x", "Doomed")?;
    server.write_order(BEHAVIOR_ORDER, &[&x])?;

    server
        .cmd()?
        .args(["delete", "behavior", &x.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would delete"));
    assert!(x.folder.exists());

    server
        .cmd()?
        .args(["delete", "behavior", &x.id.to_string(), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'Doomed'"));
    assert!(!x.folder.exists());
    assert!(server.read_order(BEHAVIOR_ORDER)?.is_empty());
    Ok(())
}

#[test]
fn test_show_pack_details() -> Result<()> {
    let server = TestServer::new()?;
    let a = server.add_resource("a", "Alpha")?;

    server
        .cmd()?
        .args(["show", &a.id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Alpha"))
        .stdout(predicate::str::contains("Status: inactive"))
        .stdout(predicate::str::contains("Alpha for testing"));

    server
        .cmd()?
        .args(["show", "00000000-0000-0000-0000-000000000001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No installed pack"));
    Ok(())
}

#[test]
fn test_broken_manifests_are_skipped() -> Result<()> {
    let server = TestServer::new()?;
    server.add_resource("good", "Good Pack")?;
    fs::create_dir_all(server.resource_packs.join("no_manifest"))?;
    let broken = server.resource_packs.join("broken");
    fs::create_dir_all(&broken)?;
    fs::write(broken.join("manifest.json"), "{ not json")?;

    server
        .cmd()?
        .args(["list", "resource", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inactive resource packs (1)"))
        .stdout(predicate::str::contains("Good Pack"));
    Ok(())
}

#[test]
fn test_invalid_world_fails() -> Result<()> {
    let server = TestServer::new()?;
    fs::remove_file(server.world.join("level.dat"))?;

    server
        .cmd()?
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("level.dat"));
    Ok(())
}

#[test]
fn test_corrupt_order_file_fails() -> Result<()> {
    let server = TestServer::new()?;
    server.add_resource("a", "Alpha")?;
    fs::write(server.order_path(RESOURCE_ORDER), "{\"pack_id\": 1}")?;

    server
        .cmd()?
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains(RESOURCE_ORDER));
    Ok(())
}

#[test]
fn test_no_world_configured() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No world configured"));
    Ok(())
}

#[test]
fn test_world_flag_overrides_environment() -> Result<()> {
    let server = TestServer::new()?;
    let other = TestServer::new()?;
    other.add_behavior("x", "Other World Pack")?;

    server
        .cmd()?
        .args(["list", "--world"])
        .arg(&other.world)
        .assert()
        .success()
        .stdout(predicate::str::contains("Other World Pack"));
    Ok(())
}

#[test]
fn test_explicit_pack_folders() -> Result<()> {
    let server = TestServer::new()?;
    let elsewhere = server.temp_dir.path().join("elsewhere");
    write_pack(&elsewhere, "far", "Far Away", "resources")?;

    server
        .cmd()?
        .args(["list", "resource", "--resource-packs"])
        .arg(&elsewhere)
        .assert()
        .success()
        .stdout(predicate::str::contains("Far Away"));
    Ok(())
}

#[test]
fn test_detect_prints_pack_folders() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .arg("detect")
        .arg(&server.world)
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration World"))
        .stdout(predicate::str::contains("resource_packs"))
        .stdout(predicate::str::contains("behavior_packs"));
    Ok(())
}

#[test]
fn test_completion_needs_no_config() -> Result<()> {
    let server = TestServer::new()?;

    server
        .bare_cmd()?
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("addon"));
    assert!(!server.config_path.exists());
    Ok(())
}
