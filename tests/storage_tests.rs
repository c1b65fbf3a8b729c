use akash_vpn::storage::{get_config_path, load_config, save_config, AppConfig};
use serial_test::serial;
use std::fs;

fn cleanup() {
    let path = get_config_path();
    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn test_save_and_load_config() {
    cleanup();

    let config = AppConfig { dark_mode: false };
    save_config(&config).expect("Failed to save config");

    let loaded = load_config();
    assert!(!loaded.dark_mode);

    cleanup();
}

#[test]
#[serial]
fn test_missing_config_is_default() {
    cleanup();

    let loaded = load_config();
    assert_eq!(loaded, AppConfig::default());
    assert!(loaded.dark_mode);
}

#[test]
#[serial]
fn test_corrupt_config_falls_back_to_default() {
    cleanup();

    let path = get_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create config dir");
    }
    fs::write(&path, "{ not json").expect("Failed to write corrupt config");

    let loaded = load_config();
    assert_eq!(loaded, AppConfig::default());

    cleanup();
}
