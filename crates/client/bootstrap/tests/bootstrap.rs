use std::sync::Arc;

use client_bootstrap::{BootstrapConfig, PlatformBuilder, check_content, find_latest_session};
use platform_services::{CriticalAsset, PlatformError};
use tempfile::TempDir;

fn config(temp_dir: &TempDir) -> BootstrapConfig {
    BootstrapConfig {
        base_dir: Some(temp_dir.path().to_path_buf()),
        ..BootstrapConfig::default()
    }
}

fn install_content(temp_dir: &TempDir, assets: &[CriticalAsset]) {
    for asset in assets {
        std::fs::create_dir_all(temp_dir.path().join("Content").join(asset.dir_name())).unwrap();
    }
}

#[test]
fn setup_creates_roots_and_registry() {
    let temp_dir = TempDir::new().unwrap();
    let setup = PlatformBuilder::new(config(&temp_dir)).build().unwrap();

    for root in ["Content", "Saves", "Logs", "Temp"] {
        assert!(temp_dir.path().join(root).is_dir(), "{root} missing");
    }

    let registry = Arc::clone(&setup.registry);
    assert!(registry.is_initialized());
    assert!(registry.logger().unwrap().is_active());
    assert_eq!(
        registry.paths().unwrap().logs_root(),
        temp_dir.path().join("Logs")
    );

    let session = find_latest_session(&temp_dir.path().join("Logs")).unwrap();
    assert_eq!(
        Some(session.path),
        setup.logger().current_log_file_path()
    );
}

#[test]
fn missing_content_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    install_content(&temp_dir, &[CriticalAsset::Dialog, CriticalAsset::Fonts]);
    let setup = PlatformBuilder::new(config(&temp_dir)).build().unwrap();

    let err = check_content(&setup.registry, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "content validation failed, missing: Effects, Atlases, FMOD"
    );
    match err.downcast_ref::<PlatformError>() {
        Some(PlatformError::ValidationFailure { missing }) => {
            assert_eq!(missing, &["Effects", "Atlases", "FMOD"]);
        }
        other => panic!("expected ValidationFailure, got {other:?}"),
    }

    let log_path = setup.logger().current_log_file_path().unwrap();
    setup.shutdown();

    let contents = std::fs::read_to_string(log_path).unwrap();
    assert!(contents.contains("[Fatal] [Game] Content validation failed! Missing: Effects, Atlases, FMOD"));
}

#[test]
fn missing_content_can_be_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let setup = PlatformBuilder::new(config(&temp_dir)).build().unwrap();

    let result = check_content(&setup.registry, true).unwrap();
    assert!(!result.ok);
    assert_eq!(result.missing.len(), 5);
}

#[test]
fn complete_content_passes() {
    let temp_dir = TempDir::new().unwrap();
    install_content(&temp_dir, &CriticalAsset::ALL);
    let setup = PlatformBuilder::new(config(&temp_dir)).build().unwrap();

    assert!(check_content(&setup.registry, false).unwrap().ok);
}

#[test]
fn dropping_setup_shuts_logger_down() {
    let temp_dir = TempDir::new().unwrap();
    let logger = {
        let setup = PlatformBuilder::new(config(&temp_dir)).build().unwrap();
        Arc::clone(setup.logger())
    };

    assert!(!logger.is_active());
    let contents = std::fs::read_to_string(logger.current_log_file_path().unwrap()).unwrap();
    assert_eq!(contents.lines().count(), 1);
}
