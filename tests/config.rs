use pretty_assertions::assert_eq;
use tilemaze::config::Settings;
use tilemaze::constants::{GRID_SHEET_PATH, SCALE, SPRITES_SHEET_PATH};
use tilemaze::error::ConfigError;

#[test]
fn test_defaults() {
    let settings = Settings::from_args(Vec::<String>::new()).unwrap();

    assert_eq!(settings, Settings::default());
    assert!(!settings.debug_collision);
    assert_eq!(settings.grid_path, GRID_SHEET_PATH);
    assert_eq!(settings.sprites_path, SPRITES_SHEET_PATH);
    assert_eq!(settings.scale, SCALE);
}

#[test]
fn test_all_flags() {
    let settings = Settings::from_args([
        "--debug-collision",
        "--grid",
        "./themes/blue.png",
        "--sprites",
        "./img/chars.png",
        "--scale",
        "2",
    ])
    .unwrap();

    assert!(settings.debug_collision);
    assert_eq!(settings.grid_path, "./themes/blue.png");
    assert_eq!(settings.sprites_path, "./img/chars.png");
    assert_eq!(settings.scale, 2.0);
}

#[test]
fn test_unknown_argument() {
    assert_eq!(
        Settings::from_args(["--fullscreen"]).unwrap_err(),
        ConfigError::UnknownArgument("--fullscreen".to_string())
    );
}

#[test]
fn test_missing_value() {
    assert_eq!(
        Settings::from_args(["--grid"]).unwrap_err(),
        ConfigError::MissingValue("--grid".to_string())
    );
}

#[test]
fn test_invalid_scale() {
    for value in ["zero", "0", "-1.5", "inf"] {
        assert_eq!(
            Settings::from_args(["--scale", value]).unwrap_err(),
            ConfigError::InvalidValue {
                flag: "--scale".to_string(),
                value: value.to_string(),
            }
        );
    }
}
