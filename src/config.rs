//! Runtime settings, read from command-line flags.

use tracing::debug;

use crate::asset::Asset;
use crate::constants::SCALE;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Outline every collision box after drawing.
    pub debug_collision: bool,
    pub grid_path: String,
    pub sprites_path: String,
    /// Window scale factor.
    pub scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_collision: false,
            grid_path: Asset::Grid.path().to_string(),
            sprites_path: Asset::SpritesAlpha.path().to_string(),
            scale: SCALE,
        }
    }
}

impl Settings {
    /// Parses flags, not including the program name.
    ///
    /// Accepts `--debug-collision`, `--grid <path>`, `--sprites <path>` and
    /// `--scale <factor>`. The scale must be a positive finite number.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut settings = Settings::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--debug-collision" => settings.debug_collision = true,
                "--grid" => settings.grid_path = value_for(&flag, args.next())?,
                "--sprites" => settings.sprites_path = value_for(&flag, args.next())?,
                "--scale" => {
                    let value = value_for(&flag, args.next())?;
                    settings.scale = match value.parse::<f32>() {
                        Ok(scale) if scale.is_finite() && scale > 0.0 => scale,
                        _ => return Err(ConfigError::InvalidValue { flag, value }),
                    };
                }
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }

        debug!(?settings, "Parsed settings");
        Ok(settings)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}
