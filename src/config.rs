use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::element::ElementKind;
use crate::ui::style::HighlightColor;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_help: bool,
    pub no_pause: bool,
    pub element: Option<ElementKind>,
    pub highlight: Option<HighlightColor>,
    pub items: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_help: self.no_help || other.no_help,
            no_pause: self.no_pause || other.no_pause,
            element: other.element.or(self.element),
            highlight: other.highlight.or(self.highlight),
            items: other.items.clone().or_else(|| self.items.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("listedit").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("listedit")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("listedit").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("listedit")
                .join("config");
        }
    }

    PathBuf::from(".listeditrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".listeditrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Flags whose `--flag=value` form takes the rest of the line as the value.
const LINE_VALUE_FLAGS: [&str; 2] = ["--items=", "--log-file="];

fn line_tokens(line: &str) -> Vec<String> {
    if LINE_VALUE_FLAGS.iter().any(|flag| line.starts_with(flag)) {
        return vec![line.to_string()];
    }
    line.split_whitespace().map(ToOwned::to_owned).collect()
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# listedit defaults (saved with --save)".to_string());
    if flags.no_help {
        lines.push("--no-help".to_string());
    }
    if flags.no_pause {
        lines.push("--no-pause".to_string());
    }
    if let Some(element) = flags.element {
        lines.push(format!("--type {}", element.as_str()));
    }
    if let Some(highlight) = flags.highlight {
        lines.push(format!("--highlight {}", highlight.as_str()));
    }
    if let Some(items) = &flags.items {
        lines.push(format!("--items={items}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file={}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-help" {
            flags.no_help = true;
        } else if token == "--no-pause" {
            flags.no_pause = true;
        } else if token == "--type" {
            if let Some(next) = tokens.get(i + 1) {
                flags.element = ElementKind::parse(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--type=") {
            flags.element = ElementKind::parse(value);
        } else if token == "--highlight" {
            if let Some(next) = tokens.get(i + 1) {
                flags.highlight = HighlightColor::parse(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--highlight=") {
            flags.highlight = HighlightColor::parse(value);
        } else if token == "--items" {
            if let Some(next) = tokens.get(i + 1) {
                flags.items = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--items=") {
            flags.items = Some(value.to_string());
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
