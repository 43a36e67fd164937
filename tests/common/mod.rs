#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

/// A fake dedicated server with one world and empty pack folders
pub struct TestServer {
    pub temp_dir: TempDir,
    pub world: PathBuf,
    pub resource_packs: PathBuf,
    pub behavior_packs: PathBuf,
    pub config_path: PathBuf,
}

/// A pack written by [`TestServer::add_pack`]
#[derive(Debug, Clone)]
pub struct TestPack {
    pub folder: PathBuf,
    pub id: Uuid,
    pub name: String,
}

impl TestServer {
    /// Create the standard layout: `server/worlds/Bedrock level` next to
    /// `server/resource_packs` and `server/behavior_packs`
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("server");
        let world = root.join("worlds").join("Bedrock level");
        let resource_packs = root.join("resource_packs");
        let behavior_packs = root.join("behavior_packs");

        fs::create_dir_all(&world)?;
        fs::create_dir_all(&resource_packs)?;
        fs::create_dir_all(&behavior_packs)?;
        fs::write(world.join("level.dat"), b"\x0a\x00\x00")?;
        fs::write(world.join("levelname.txt"), "Integration World\n")?;

        let config_path = temp_dir.path().join("config/addonman.toml");

        Ok(Self {
            temp_dir,
            world,
            resource_packs,
            behavior_packs,
            config_path,
        })
    }

    /// The `addon` binary with an isolated config, pointed at this world
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("addon")?;
        cmd.env("ADDON_CONFIG_PATH", &self.config_path)
            .env("ADDON_WORLD", &self.world)
            .env_remove("ADDON_RESOURCE_PACKS")
            .env_remove("ADDON_BEHAVIOR_PACKS")
            .env_remove("ADDON_LOG")
            .env("NO_COLOR", "1");
        Ok(cmd)
    }

    /// The `addon` binary with an isolated config and no world
    pub fn bare_cmd(&self) -> Result<Command> {
        let mut cmd = self.cmd()?;
        cmd.env_remove("ADDON_WORLD");
        Ok(cmd)
    }

    pub fn add_resource(&self, folder: &str, name: &str) -> Result<TestPack> {
        write_pack(&self.resource_packs, folder, name, "resources")
    }

    pub fn add_behavior(&self, folder: &str, name: &str) -> Result<TestPack> {
        write_pack(&self.behavior_packs, folder, name, "data")
    }

    pub fn order_path(&self, file: &str) -> PathBuf {
        self.world.join(file)
    }

    /// Write an order file naming `packs` in order
    pub fn write_order(&self, file: &str, packs: &[&TestPack]) -> Result<()> {
        let entries: Vec<_> = packs
            .iter()
            .map(|p| json!({ "pack_id": p.id.to_string(), "version": [1, 0, 0] }))
            .collect();
        fs::write(self.order_path(file), serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    /// Pack ids listed in an order file, in order
    pub fn read_order(&self, file: &str) -> Result<Vec<Uuid>> {
        let content = fs::read_to_string(self.order_path(file))?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        entries
            .iter()
            .map(|e| {
                let id = e["pack_id"].as_str().unwrap_or_default();
                Ok(Uuid::parse_str(id)?)
            })
            .collect()
    }
}

/// Write a pack folder with a manifest declaring one module of `module_type`
pub fn write_pack(root: &Path, folder: &str, name: &str, module_type: &str) -> Result<TestPack> {
    let dir = root.join(folder);
    fs::create_dir_all(&dir)?;
    let id = Uuid::new_v4();

    let manifest = json!({
        "format_version": 2,
        "header": {
            "name": name,
            "description": format!("{name} for testing"),
            "uuid": id.to_string(),
            "version": [1, 0, 0],
            "min_engine_version": [1, 20, 0]
        },
        "modules": [
            { "type": module_type, "uuid": Uuid::new_v4().to_string(), "version": [1, 0, 0] }
        ]
    });
    fs::write(dir.join("manifest.json"), serde_json::to_string_pretty(&manifest)?)?;

    Ok(TestPack {
        folder: dir,
        id,
        name: name.to_string(),
    })
}
