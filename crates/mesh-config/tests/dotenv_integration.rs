//! Integration tests for `.env` loading through `MeshConfig::load_with_dotenv`.
//!
//! Each `.env` lives in a `project/` subdirectory of the jail, out of reach of
//! the current-directory fallback, so only the `CARGO_MANIFEST_DIR` walk can
//! find it. `dotenvy` never overrides a variable that is already set, so each
//! test uses its own key.

use std::path::PathBuf;

use figment::Jail;
use mesh_config::MeshConfig;

fn write_project_env(jail: &Jail, contents: &str) -> PathBuf {
    let project = jail.directory().join("project");
    let crate_dir = project.join("crates").join("mesh-config");
    std::fs::create_dir_all(&crate_dir).expect("create crate dir");
    std::fs::write(project.join(".env"), contents).expect("write .env");
    project
}

#[test]
fn dotenv_in_manifest_dir_is_loaded() {
    Jail::expect_with(|jail| {
        let project = write_project_env(jail, "MESH_API__TIMEOUT_SECS=42\n");
        jail.set_env("CARGO_MANIFEST_DIR", project.display());

        let config = MeshConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.api.timeout_secs, 42);
        Ok(())
    });
}

#[test]
fn dotenv_is_found_above_the_crate_dir() {
    Jail::expect_with(|jail| {
        let project = write_project_env(jail, "MESH_GENERAL__DIALECT=duckdb\n");
        let crate_dir = project.join("crates").join("mesh-config");
        jail.set_env("CARGO_MANIFEST_DIR", crate_dir.display());

        let config = MeshConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.general.dialect(), Some("duckdb"));
        Ok(())
    });
}
