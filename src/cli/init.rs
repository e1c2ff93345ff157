//! Init command implementation.
//!
//! Writes an `icons.yaml` holding the built-in defaults, ready to edit.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{GeneratorConfig, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::export::plan;
use crate::output::{display_path, plural, Printer};

/// Initialize a project by writing icons.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing icons.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(IconError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = GeneratorConfig::default();
    let yaml = config.to_yaml()?;

    fs::write(&config_path, &yaml).map_err(|e| IconError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    let total = plan(&config).len();
    printer.status(
        "Created",
        &format!("{} ({})", display_path(&config_path), plural(total, "icon", "icons")),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &quiet()).unwrap();

        let loaded = GeneratorConfig::load(&dir.path().join("icons.yaml")).unwrap();
        assert_eq!(loaded, GeneratorConfig::default());
    }

    #[test]
    fn test_init_errors_if_config_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icons.yaml"), "label: AB\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &quiet());
        assert!(matches!(result, Err(IconError::Config { .. })));
        let content = fs::read_to_string(dir.path().join("icons.yaml")).unwrap();
        assert_eq!(content, "label: AB\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("icons.yaml"), "label: AB\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &quiet()).unwrap();

        let loaded = GeneratorConfig::load(&dir.path().join("icons.yaml")).unwrap();
        assert_eq!(loaded.label, "FF");
    }
}
