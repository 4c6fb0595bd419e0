use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub prompt: String,
    /// Prefix for diagnostics the shell reports about itself.
    pub name: String,
    pub interactive: Interactive,
}

/// When to render the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactive {
    /// Only when stdin is a terminal.
    Auto,
    Always,
    Never,
}

impl Default for Config {
    fn default() -> Self {
        ConfigLoader::default_config()
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn default_config() -> Config {
        Config {
            prompt: "($) ".to_string(),
            name: "hsh".to_string(),
            interactive: Interactive::Auto,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let src = fs::read_to_string(path)?;
        Self::load_from_str(&src)
    }

    pub fn load_from_str(src: &str) -> Result<Config, ConfigError> {
        let mut config = Self::default_config();

        for (lineno, line) in src.lines().enumerate() {
            let lineno = lineno + 1;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Parse(format!("line {}: no '=' found: {}", lineno, line)));
            };

            // Values are taken verbatim so a prompt may end in a space.
            match key.trim() {
                "prompt" => config.prompt = value.to_string(),
                "name" => {
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(ConfigError::Parse(format!("line {}: empty name", lineno)));
                    }
                    config.name = value.to_string();
                }
                "interactive" => {
                    config.interactive = match value.trim() {
                        "auto" => Interactive::Auto,
                        "always" => Interactive::Always,
                        "never" => Interactive::Never,
                        other => {
                            return Err(ConfigError::Parse(format!(
                                "line {}: invalid interactive mode: {}",
                                lineno, other
                            )));
                        }
                    };
                }
                k => return Err(ConfigError::Parse(format!("line {}: unknown key: {}", lineno, k))),
            }
        }

        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::load_from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt, "($) ");
        assert_eq!(config.name, "hsh");
    }

    #[test]
    fn test_keys_and_comments() {
        let src = "# shell settings\n\nprompt=$ \nname = mysh\ninteractive=never\n";
        let config = ConfigLoader::load_from_str(src).unwrap();
        assert_eq!(config.prompt, "$ ");
        assert_eq!(config.name, "mysh");
        assert_eq!(config.interactive, Interactive::Never);
    }

    #[test]
    fn test_unknown_key() {
        let err = ConfigLoader::load_from_str("history_max=5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref m) if m.contains("line 1")));
    }

    #[test]
    fn test_missing_equals() {
        let err = ConfigLoader::load_from_str("prompt=> \nbogus").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref m) if m.starts_with("line 2")));
    }

    #[test]
    fn test_bad_interactive_mode() {
        assert!(ConfigLoader::load_from_str("interactive=sometimes").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name=tsh").unwrap();
        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.name, "tsh");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load_from_file(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
