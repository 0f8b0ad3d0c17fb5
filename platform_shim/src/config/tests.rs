//! Tests for loading shim configuration.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8Path;
use figment::Jail;
use rstest::rstest;
use serial_test::serial;

use super::*;
use crate::ShimError;

fn load_in_jail(contents: &str) -> Result<ShimResult<ShimConfig>> {
    let mut loaded = None;
    Jail::try_with(|jail| {
        jail.create_file("shim.toml", contents)?;
        loaded = Some(ShimConfig::from_toml_file(Utf8Path::new("shim.toml")));
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    loaded.ok_or_else(|| anyhow!("jail closure did not run"))
}

#[rstest]
fn defaults_use_conventional_locations() {
    let config = ShimConfig::default();
    assert_eq!(config.sysconfdir, SYSCONFDIR);
    assert_eq!(config.fallback_config_dirs, FALLBACK_CONFIG_DIRS);
    assert_eq!(config.report_missing_xdg_config_home, !cfg!(target_os = "macos"));
}

#[rstest]
#[serial]
fn file_overrides_only_present_keys() -> Result<()> {
    let config =
        load_in_jail("sysconfdir = \"/opt/etc\"\nreport_missing_xdg_config_home = false\n")??;
    ensure!(config.sysconfdir == "/opt/etc", "sysconfdir not overridden");
    ensure!(!config.report_missing_xdg_config_home, "flag not overridden");
    ensure!(
        config.fallback_data_dirs == FALLBACK_DATA_DIRS,
        "untouched key should keep its default"
    );
    Ok(())
}

#[rstest]
#[serial]
fn missing_file_keeps_defaults() -> Result<()> {
    let mut loaded = None;
    Jail::try_with(|_jail| {
        loaded = Some(ShimConfig::from_toml_file(Utf8Path::new("absent.toml")));
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    let config = loaded.ok_or_else(|| anyhow!("jail closure did not run"))??;
    ensure!(config == ShimConfig::default(), "expected defaults");
    Ok(())
}

#[rstest]
#[serial]
fn relative_path_is_not_searched_for_in_parents() -> Result<()> {
    let mut loaded = None;
    Jail::try_with(|jail| {
        jail.create_file("shim.toml", "sysconfdir = \"/from/parent\"\n")?;
        let child = jail.directory().join("child");
        std::fs::create_dir(&child).map_err(|err| err.to_string())?;
        jail.change_dir(&child)?;
        loaded = Some(ShimConfig::from_toml_file(Utf8Path::new("shim.toml")));
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    let config = loaded.ok_or_else(|| anyhow!("jail closure did not run"))??;
    ensure!(
        config.sysconfdir == SYSCONFDIR,
        "picked up a parent directory's file: {}",
        config.sysconfdir
    );
    Ok(())
}

#[rstest]
#[serial]
fn directory_in_place_of_file_is_a_file_error() -> Result<()> {
    let mut loaded = None;
    Jail::try_with(|jail| {
        std::fs::create_dir(jail.directory().join("shim.toml")).map_err(|err| err.to_string())?;
        loaded = Some(ShimConfig::from_toml_file(Utf8Path::new("shim.toml")));
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    let outcome = loaded.ok_or_else(|| anyhow!("jail closure did not run"))?;
    ensure!(
        matches!(outcome, Err(ShimError::File { .. })),
        "expected a file error, got {outcome:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn wrongly_typed_value_is_a_config_error() -> Result<()> {
    let outcome = load_in_jail("report_missing_xdg_config_home = \"sometimes\"\n")?;
    ensure!(
        matches!(outcome, Err(ShimError::Config(_))),
        "expected a configuration error, got {outcome:?}"
    );
    Ok(())
}

#[rstest]
#[case(Some("/etc"), None)]
#[case(Some(""), None)]
#[case(None, None)]
#[case(Some("/usr/local/etc"), Some("/usr/local/etc"))]
fn extra_sysconfdir_only_counts_when_distinct(
    #[case] extra: Option<&str>,
    #[case] expected: Option<&str>,
) {
    let config = ShimConfig {
        sysconfdir: "/etc".to_owned(),
        extra_sysconfdir: extra.map(str::to_owned),
        ..ShimConfig::default()
    };
    assert_eq!(config.distinct_extra_sysconfdir(), expected);
}
