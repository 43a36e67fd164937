#[cfg(test)]
pub mod fixtures {
    use crate::pack::{PackId, PackVersion};
    use crate::{AddonContext, LEVEL_DAT_FILE, LEVEL_NAME_FILE, MANIFEST_FILE, config::Config};
    use anyhow::Result;
    use serde_json::json;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use uuid::Uuid;

    /// Description of a pack folder to write.
    pub struct PackSpec {
        pub folder: String,
        pub id: PackId,
        pub name: String,
        pub description: String,
        pub version: PackVersion,
        pub module_type: Option<&'static str>,
    }

    impl PackSpec {
        pub fn resource(folder: &str) -> Self {
            Self::with_module(folder, "resources")
        }

        pub fn behavior(folder: &str) -> Self {
            Self::with_module(folder, "data")
        }

        fn with_module(folder: &str, module_type: &'static str) -> Self {
            Self {
                folder: folder.to_string(),
                id: PackId(Uuid::new_v4()),
                name: folder.to_string(),
                description: format!("{folder} description"),
                version: PackVersion::new(1, 0, 0),
                module_type: Some(module_type),
            }
        }
    }

    /// Writes a pack folder with a manifest under `root`.
    pub fn write_pack(root: &Path, spec: &PackSpec) -> Result<PathBuf> {
        let dir = root.join(&spec.folder);
        fs::create_dir_all(&dir)?;

        let modules = spec
            .module_type
            .map(|t| json!([{ "type": t, "uuid": Uuid::new_v4().to_string(), "version": spec.version }]))
            .unwrap_or_else(|| json!([]));

        let manifest = json!({
            "format_version": 2,
            "header": {
                "name": spec.name,
                "description": spec.description,
                "uuid": spec.id.to_string(),
                "version": spec.version,
            },
            "modules": modules,
        });
        fs::write(dir.join(MANIFEST_FILE), serde_json::to_string_pretty(&manifest)?)?;
        Ok(dir)
    }

    /// A fake dedicated server: `worlds/<name>` plus both pack roots.
    pub struct TestServer {
        pub temp_dir: TempDir,
        pub world: PathBuf,
        pub resource_packs: PathBuf,
        pub behavior_packs: PathBuf,
        pub context: AddonContext,
    }

    impl TestServer {
        pub fn new() -> Result<Self> {
            let temp_dir = tempfile::tempdir()?;
            let root = temp_dir.path().join("server");
            let world = root.join("worlds").join("Bedrock level");
            let resource_packs = root.join("resource_packs");
            let behavior_packs = root.join("behavior_packs");

            fs::create_dir_all(&world)?;
            fs::create_dir_all(&resource_packs)?;
            fs::create_dir_all(&behavior_packs)?;
            fs::write(world.join(LEVEL_DAT_FILE), b"\x0a\x00\x00")?;
            fs::write(world.join(LEVEL_NAME_FILE), "Test World\n")?;

            let config_path = temp_dir.path().join("config.toml");
            let mut config = Config::default();
            config.paths.world = Some(world.clone());
            config.paths.resource_packs = Some(resource_packs.clone());
            config.paths.behavior_packs = Some(behavior_packs.clone());
            config.save(&config_path)?;

            let context = AddonContext::new_explicit(config_path)?;

            Ok(Self {
                temp_dir,
                world,
                resource_packs,
                behavior_packs,
                context,
            })
        }

        pub fn add_resource(&self, folder: &str) -> Result<PackSpec> {
            let spec = PackSpec::resource(folder);
            write_pack(&self.resource_packs, &spec)?;
            Ok(spec)
        }

        pub fn add_behavior(&self, folder: &str) -> Result<PackSpec> {
            let spec = PackSpec::behavior(folder);
            write_pack(&self.behavior_packs, &spec)?;
            Ok(spec)
        }

        /// Writes an order file in the world with the given entries.
        pub fn write_order(&self, file: &str, entries: &[&PackSpec]) -> Result<()> {
            let array: Vec<_> = entries
                .iter()
                .map(|spec| json!({ "pack_id": spec.id.to_string(), "version": spec.version }))
                .collect();
            fs::write(self.world.join(file), serde_json::to_string_pretty(&array)?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
pub mod logs {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a subscriber that records every event on this thread.
    pub fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        (result, text)
    }
}
