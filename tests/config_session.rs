//! Configuration files feeding a console session

use std::io::Cursor;

use shapekit::{Config, Console, ConsoleOptions, LogLevel};
use tempfile::TempDir;

#[test]
fn test_config_file_controls_console() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[display]\nsignificant_digits = 3\n\n[console]\nshow_menu = false\n\n[logging]\nlevel = \"info\"\n",
    )
    .unwrap();

    let config = Config::load_or_default_from(Some(&path), None).unwrap();
    assert_eq!(config.logging.level, LogLevel::Info);

    let mut console = Console::new(
        Cursor::new("1 3 0 0 2\n4 0\n4 0\n8\n".to_string()),
        Vec::new(),
        ConsoleOptions::from(&config),
    );
    console.run().unwrap();
    let output = String::from_utf8(console.output().clone()).unwrap();

    assert_eq!(output.matches("Management Menu:").count(), 1);
    assert_eq!(output.matches("Area: 12.6\nPerimeter: 12.6\n").count(), 2);
}

#[test]
fn test_missing_default_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let fallback = dir.path().join("shapekit").join("config.toml");

    let config = Config::load_or_default_from(None, Some(&fallback)).unwrap();
    assert_eq!(ConsoleOptions::from(&config), ConsoleOptions::default());
}

#[test]
fn test_config_never_supplies_shapes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[shapes]\nkind = \"square\"\nside = 3\n\n[console]\nshow_menu = false\n",
    )
    .unwrap();

    let config = Config::load_or_default_from(Some(&path), None).unwrap();
    let console = Console::new(
        Cursor::new(String::new()),
        Vec::new(),
        ConsoleOptions::from(&config),
    );
    assert!(console.shapes().is_empty());
}
