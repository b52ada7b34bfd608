use anyhow::{Context, Result, bail};
use log::debug;
use once_cell::sync::Lazy;
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

const CARGO_TOML: &str = include_str!("../Cargo.toml");
static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::default()));

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(skip)]
    pub is_first_run: bool,

    #[serde(skip)]
    pub app_name: String,

    #[serde(default)]
    pub preference: Preference,

    #[serde(default)]
    pub background: Background,

    #[serde(default)]
    pub dice: Dice,

    #[serde(default)]
    pub link: Link,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Preference {
    #[derivative(Default(value = "550"))]
    pub win_width: u32,

    #[derivative(Default(value = "500"))]
    pub win_height: u32,

    pub always_on_top: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Background {
    #[derivative(Default(value = "\"#FFB6C1\".to_string()"))]
    pub start_color: String,

    #[derivative(Default(value = "\"#0000FF\".to_string()"))]
    pub end_color: String,

    #[derivative(Default(value = "dice_core::DEFAULT_STEPS"))]
    pub steps: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Dice {
    /// Directory holding `dice1.<ext>` .. `dice6.<ext>`. Empty draws pips instead.
    pub image_dir: String,

    #[derivative(Default(value = "\"jpg\".to_string()"))]
    pub image_ext: String,

    #[derivative(Default(value = "100"))]
    pub image_size: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Link {
    #[derivative(Default(value = "\"https://www.playonlinedicegames.com/\".to_string()"))]
    pub url: String,

    #[derivative(Default(value = "\"default\".to_string()"))]
    pub browser: String,
}

impl Config {
    /// Initializes the configuration
    ///
    /// Reads the package name, creates the config directory and loads the
    /// configuration file.
    pub fn init(&mut self) -> Result<()> {
        let metadata = toml::from_str::<toml::Table>(CARGO_TOML)
            .with_context(|| "parse Cargo.toml failed")?;

        self.app_name = metadata
            .get("package")
            .and_then(|p| p.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("dice-guess")
            .to_string();

        let Some(app_dirs) = AppDirs::new(Some(&self.app_name), true) else {
            bail!("can't find the config directory of {}", self.app_name);
        };

        self.create_dirs(&app_dirs.config_dir)?;
        self.load().with_context(|| "load config file failed")?;

        if self.is_first_run {
            log::info!("wrote default config to {}", self.config_path.display());
        }

        debug!("{:?}", self);
        Ok(())
    }

    fn create_dirs(&mut self, config_dir: &Path) -> Result<()> {
        self.config_path = config_dir.join(format!("{}.toml", self.app_name));
        fs::create_dir_all(config_dir)?;
        Ok(())
    }

    /// Loads configuration from file, writing the defaults if it is missing
    /// or can't be parsed. An unparsable file is kept as `<file>.bak`.
    fn load(&mut self) -> Result<()> {
        let text = match fs::read_to_string(&self.config_path) {
            Ok(text) => text,
            Err(_) => return self.reset(),
        };

        match toml::from_str::<Config>(&text) {
            Ok(mut c) => {
                c.config_path = self.config_path.clone();
                c.is_first_run = self.is_first_run;
                c.app_name = self.app_name.clone();
                *self = c;
                Ok(())
            }
            Err(e) => {
                log::warn!("parse {} failed: {e}", self.config_path.display());

                let bak_file = format!("{}.bak", self.config_path.display());
                _ = fs::copy(&self.config_path, bak_file);
                self.reset()
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.is_first_run = true;
        self.save()
    }

    /// Saves the current configuration to file
    pub fn save(&self) -> Result<()> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(fs::write(&self.config_path, text)
                .with_context(|| "save config failed".to_string())?),
            Err(e) => bail!(format!("convert config to toml format failed. {e:?}")),
        }
    }
}

/// Initializes the global configuration
///
/// This should be called once at application startup.
pub fn init() -> Result<()> {
    lock().init()
}

/// Returns a clone of the current configuration
pub fn all() -> Config {
    lock().clone()
}

fn lock() -> std::sync::MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_use_defaults() -> Result<()> {
        let conf = toml::from_str::<Config>(
            r##"
            [background]
            start_color = "#000000"

            [dice]
            image_dir = "/tmp/dice"
            "##,
        )?;

        assert_eq!(conf.background.start_color, "#000000");
        assert_eq!(conf.background.end_color, "#0000FF");
        assert_eq!(conf.background.steps, 100);
        assert_eq!(conf.dice.image_dir, "/tmp/dice");
        assert_eq!(conf.dice.image_ext, "jpg");
        assert_eq!(conf.preference.win_width, 550);
        assert_eq!(conf.preference.win_height, 500);
        assert_eq!(conf.link.url, "https://www.playonlinedicegames.com/");

        Ok(())
    }

    #[test]
    fn test_load_writes_defaults_and_backs_up_bad_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut conf = Config {
            app_name: "dice-guess".to_string(),
            ..Default::default()
        };
        conf.create_dirs(dir.path())?;

        conf.load()?;
        assert!(conf.is_first_run);
        assert!(conf.config_path.is_file());

        fs::write(&conf.config_path, "preference = 3")?;
        let mut conf = Config {
            config_path: conf.config_path.clone(),
            app_name: conf.app_name.clone(),
            ..Default::default()
        };
        conf.load()?;
        assert!(conf.is_first_run);
        assert!(dir.path().join("dice-guess.toml.bak").is_file());

        let text = fs::read_to_string(&conf.config_path)?;
        let reloaded = toml::from_str::<Config>(&text)?;
        assert_eq!(reloaded.background.steps, 100);

        Ok(())
    }
}
