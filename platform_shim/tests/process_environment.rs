//! Discovery driven by the real process environment.

use anyhow::{Result, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use serial_test::serial;
use test_helpers::env;

use platform_shim::{
    DiscoverySurface, Environment, ManifestCategory, PlatformShim, PosixDiscoverySurface,
    ProcessEnvironment, ShimConfig,
};

#[rstest]
#[serial]
fn process_environment_reads_and_defaults_to_empty() {
    let _scope = env::discovery_scope(Some("/home/process"));
    assert_eq!(ProcessEnvironment.get_env_var("HOME", true), "/home/process");
    assert_eq!(ProcessEnvironment.get_env_var("XDG_CONFIG_HOME", true), "");
    assert_eq!(ProcessEnvironment.get_env_var("VK_LAYER_PATH", false), "");
}

#[rstest]
#[serial]
fn default_surface_follows_process_variables() -> Result<()> {
    let mut scope = env::discovery_scope(Some("/home/process"));
    scope.push(env::set_var("XDG_CONFIG_HOME", "/xdg/one:/xdg/two"));
    scope.push(env::set_var("VK_LAYER_PATH", "/layers"));

    let mut shim = PosixDiscoverySurface::default();
    ensure!(shim.config() == &ShimConfig::default(), "default surface uses build constants");
    shim.redirect_category(Utf8Path::new("/tmp/explicit"), ManifestCategory::ExplicitLayer);
    for prefix in ["/home/process/.config", "/xdg/one", "/xdg/two", "/layers"] {
        let candidate = Utf8PathBuf::from(prefix).join("vulkan/explicit_layer.d");
        ensure!(shim.is_fake_path(&candidate), "{candidate} not redirected");
    }
    Ok(())
}

#[cfg(not(windows))]
#[rstest]
#[serial]
fn platform_alias_is_the_posix_surface() {
    let _scope = env::discovery_scope(None);
    let mut shim = PlatformShim::default();
    shim.redirect_category(Utf8Path::new("/tmp/icds"), ManifestCategory::Icd);
    let default_path = shim.query_default_redirect_path(ManifestCategory::Icd);
    assert_eq!(shim.real_path_for(&default_path).ok(), Some(Utf8Path::new("/tmp/icds")));
    assert!(!shim.is_fake_path(Utf8Path::new("/.config/vulkan/icd.d")));
}

#[cfg(windows)]
#[rstest]
fn platform_alias_is_the_windows_surface() {
    use platform_shim::windows::RegistryScope;

    let mut shim = PlatformShim::default();
    shim.add_manifest(ManifestCategory::Icd, Utf8Path::new("C:/icd.json"));
    let drivers = shim
        .registry()
        .entries(RegistryScope::Machine, ManifestCategory::Icd);
    assert_eq!(drivers.len(), 1);
}
