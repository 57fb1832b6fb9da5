use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{error, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                std::fs::create_dir_all(Config::config_dir())?;
                cfg.save_to(&path)?;
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            if run_editor(&editor_to_use, &path) {
                success(format!("Configuration file edited using '{editor_to_use}'"));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                if run_editor(&default_editor, &path) {
                    success(format!("Configuration file edited using '{default_editor}'"));
                } else {
                    error(format!("Failed to edit configuration file using '{default_editor}'"));
                }
            } else {
                error(format!("Failed to edit configuration file using '{editor_to_use}'"));
            }
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
