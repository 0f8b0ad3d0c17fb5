//! Candidate-ordering tests.

use anyhow::{Result, ensure};
use camino::Utf8PathBuf;
use rstest::rstest;

use super::fixtures::{fixed_config, home_env, shim};
use crate::{ManifestCategory, PosixDiscoverySurface, ShimConfig, SimulatedEnvironment};

fn paths(expected: &[&str]) -> Vec<Utf8PathBuf> {
    expected.iter().copied().map(Utf8PathBuf::from).collect()
}

#[rstest]
fn drivers_follow_home_then_fallbacks_then_sysconfdir(shim: PosixDiscoverySurface) -> Result<()> {
    let candidates = shim.search_candidates(ManifestCategory::Icd);
    let expected = paths(&[
        "/home/u/.config/vulkan/icd.d",
        "/home/u/.local/share/vulkan/icd.d",
        "/usr/local/share/vulkan/icd.d",
        "/usr/share/vulkan/icd.d",
        "/etc/xdg/vulkan/icd.d",
        "/etc/vulkan/icd.d",
    ]);
    ensure!(candidates == expected, "unexpected order: {candidates:?}");
    Ok(())
}

#[rstest]
fn xdg_config_home_entries_follow_home(
    home_env: SimulatedEnvironment,
    fixed_config: ShimConfig,
) -> Result<()> {
    let env = home_env.with_var("XDG_CONFIG_HOME", "/xdg/a::/xdg/b:");
    let shim = PosixDiscoverySurface::new(env, fixed_config);
    let candidates = shim.search_candidates(ManifestCategory::ImplicitLayer);
    let expected = paths(&[
        "/xdg/a/vulkan/implicit_layer.d",
        "/xdg/b/vulkan/implicit_layer.d",
    ]);
    ensure!(
        candidates.get(2..4) == Some(expected.as_slice()),
        "expected XDG entries third and fourth: {candidates:?}"
    );
    Ok(())
}

#[rstest]
#[case(ManifestCategory::ExplicitLayer, true)]
#[case(ManifestCategory::ImplicitLayer, false)]
#[case(ManifestCategory::Icd, false)]
fn layer_path_only_applies_to_explicit_layers(
    home_env: SimulatedEnvironment,
    fixed_config: ShimConfig,
    #[case] category: ManifestCategory,
    #[case] included: bool,
) -> Result<()> {
    let env = home_env
        .with_var("XDG_CONFIG_HOME", "/xdg")
        .with_var("VK_LAYER_PATH", "/layers/one:/layers/two");
    let shim = PosixDiscoverySurface::new(env, fixed_config);
    let candidates = shim.search_candidates(category);
    let layer_dir =
        Utf8PathBuf::from("/layers/one/vulkan").join(crate::posix_category_name(category));
    ensure!(
        candidates.contains(&layer_dir) == included,
        "VK_LAYER_PATH inclusion mismatch for {category}: {candidates:?}"
    );
    if included {
        let xdg_index = candidates.iter().position(|c| c.starts_with("/xdg"));
        let layer_index = candidates.iter().position(|c| c == &layer_dir);
        ensure!(xdg_index < layer_index, "layer path must follow XDG_CONFIG_HOME");
    }
    Ok(())
}

#[rstest]
fn empty_home_skips_home_prefixes(fixed_config: ShimConfig) -> Result<()> {
    let shim = PosixDiscoverySurface::new(SimulatedEnvironment::default(), fixed_config);
    let candidates = shim.search_candidates(ManifestCategory::Icd);
    ensure!(
        candidates.first() == Some(&Utf8PathBuf::from("/usr/local/share/vulkan/icd.d")),
        "expected the first fallback first: {candidates:?}"
    );
    ensure!(
        !candidates.iter().any(|c| c.as_str().contains(".config")),
        "no home-derived prefix expected"
    );
    Ok(())
}

#[rstest]
fn settings_only_consult_home_data_dir(home_env: SimulatedEnvironment, fixed_config: ShimConfig) {
    let env = home_env.with_var("XDG_CONFIG_HOME", "/xdg");
    let shim = PosixDiscoverySurface::new(env, fixed_config);
    assert_eq!(
        shim.search_candidates(ManifestCategory::Settings),
        paths(&["/home/u/.local/share/vulkan/settings.d"])
    );
}

#[rstest]
#[case(Some("/etc"), &["/etc/xdg/vulkan/icd.d", "/etc/vulkan/icd.d"])]
#[case(None, &["/etc/xdg/vulkan/icd.d", "/etc/vulkan/icd.d"])]
#[case(Some("/usr/local/etc"), &["/etc/vulkan/icd.d", "/usr/local/etc/vulkan/icd.d"])]
fn extra_sysconfdir_is_appended_only_when_distinct(
    home_env: SimulatedEnvironment,
    mut fixed_config: ShimConfig,
    #[case] extra: Option<&str>,
    #[case] tail: &[&str],
) -> Result<()> {
    fixed_config.extra_sysconfdir = extra.map(str::to_owned);
    let shim = PosixDiscoverySurface::new(home_env, fixed_config);
    let candidates = shim.search_candidates(ManifestCategory::Icd);
    let etc = Utf8PathBuf::from("/etc/vulkan/icd.d");
    ensure!(
        candidates.iter().filter(|c| **c == etc).count() == 1,
        "sysconfdir must appear exactly once: {candidates:?}"
    );
    ensure!(
        candidates.ends_with(&paths(tail)),
        "unexpected tail: {candidates:?}"
    );
    Ok(())
}

#[rstest]
fn empty_sysconfdir_is_skipped(home_env: SimulatedEnvironment, mut fixed_config: ShimConfig) {
    fixed_config.sysconfdir = String::new();
    fixed_config.extra_sysconfdir = None;
    let shim = PosixDiscoverySurface::new(home_env, fixed_config);
    let candidates = shim.search_candidates(ManifestCategory::Icd);
    assert_eq!(candidates.last(), Some(&Utf8PathBuf::from("/etc/xdg/vulkan/icd.d")));
    assert!(!candidates.iter().any(|c| c.as_str() == "vulkan/icd.d"));
}
