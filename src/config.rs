use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. Every field is optional; defaults are
/// resolved by the accessor methods so YAML, CLI, and hard defaults layer
/// cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,      // "info" | "debug"
    /// Directory the scrapers write their JSON files into
    pub data_dir: Option<PathBuf>,
    /// BDF glyph font path
    pub font: Option<PathBuf>,
    pub driver: Option<DriverKind>,
    /// Panel geometry & wiring
    pub matrix: Option<MatrixSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatrixSection {
    pub rows: Option<u32>,
    pub cols: Option<u32>,
    pub chain_length: Option<u32>,
    pub parallel: Option<u32>,
    pub hardware_mapping: Option<String>,
    pub gpio_slowdown: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    Hub75,
    Mock,
}

/// Fully resolved panel parameters handed to the drivers.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    pub rows: u32,
    pub cols: u32,
    pub chain_length: u32,
    pub parallel: u32,
    pub hardware_mapping: String,
    pub gpio_slowdown: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 128,
            chain_length: 1,
            parallel: 1,
            hardware_mapping: "regular".to_string(),
            gpio_slowdown: 1,
        }
    }
}

impl MatrixConfig {
    pub fn width(&self) -> u32 {
        self.cols * self.chain_length
    }

    pub fn height(&self) -> u32 {
        self.rows * self.parallel
    }
}

/// CLI overrides. All value fields are Options so we can layer them over
/// the YAML file.
#[derive(Debug, Parser, Clone)]
#[command(name = "ekiban", about = "ekiban - station departure board")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub font: Option<PathBuf>,
    #[arg(long)]
    pub rows: Option<u32>,
    #[arg(long)]
    pub cols: Option<u32>,
    #[arg(long)]
    pub chain_length: Option<u32>,
    #[arg(long)]
    pub parallel: Option<u32>,
    #[arg(long)]
    pub hardware_mapping: Option<String>,
    #[arg(long)]
    pub gpio_slowdown: Option<u32>,
    #[arg(long, value_enum)]
    pub driver: Option<DriverKind>,
    /// debug logging
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub debug: bool,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();

    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("information_json_files"))
    }

    pub fn font_path(&self) -> PathBuf {
        self.font
            .clone()
            .unwrap_or_else(|| PathBuf::from("fonts/BestTen-DOT.bdf"))
    }

    pub fn driver_kind(&self) -> DriverKind {
        self.driver.unwrap_or(DriverKind::Hub75)
    }

    pub fn matrix_config(&self) -> MatrixConfig {
        let defaults = MatrixConfig::default();
        let Some(m) = self.matrix.as_ref() else {
            return defaults;
        };
        MatrixConfig {
            rows: m.rows.unwrap_or(defaults.rows),
            cols: m.cols.unwrap_or(defaults.cols),
            chain_length: m.chain_length.unwrap_or(defaults.chain_length),
            parallel: m.parallel.unwrap_or(defaults.parallel),
            hardware_mapping: m
                .hardware_mapping
                .clone()
                .unwrap_or(defaults.hardware_mapping),
            gpio_slowdown: m.gpio_slowdown.unwrap_or(defaults.gpio_slowdown),
        }
    }
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/ekiban/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/ekiban/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/ekiban.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["ekiban.yaml", "config.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    if src.data_dir.is_some()  { dst.data_dir = src.data_dir; }
    if src.font.is_some()      { dst.font = src.font; }
    if src.driver.is_some()    { dst.driver = src.driver; }
    match (&mut dst.matrix, src.matrix) {
        (None, Some(m)) => dst.matrix = Some(m),
        (Some(d), Some(s)) => merge_matrix(d, s),
        _ => {}
    }
}

fn merge_matrix(dst: &mut MatrixSection, src: MatrixSection) {
    if src.rows.is_some()             { dst.rows = src.rows; }
    if src.cols.is_some()             { dst.cols = src.cols; }
    if src.chain_length.is_some()     { dst.chain_length = src.chain_length; }
    if src.parallel.is_some()         { dst.parallel = src.parallel; }
    if src.hardware_mapping.is_some() { dst.hardware_mapping = src.hardware_mapping; }
    if src.gpio_slowdown.is_some()    { dst.gpio_slowdown = src.gpio_slowdown; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.data_dir.is_some() { cfg.data_dir = cli.data_dir.clone(); }
    if cli.font.is_some()     { cfg.font = cli.font.clone(); }
    if cli.driver.is_some()   { cfg.driver = cli.driver; }
    if cli.debug              { cfg.log_level = Some("debug".to_string()); }

    let any_matrix = cli.rows.is_some()
        || cli.cols.is_some()
        || cli.chain_length.is_some()
        || cli.parallel.is_some()
        || cli.hardware_mapping.is_some()
        || cli.gpio_slowdown.is_some();

    if any_matrix && cfg.matrix.is_none() {
        cfg.matrix = Some(MatrixSection::default());
    }
    if let Some(matrix) = cfg.matrix.as_mut() {
        if cli.rows.is_some()             { matrix.rows = cli.rows; }
        if cli.cols.is_some()             { matrix.cols = cli.cols; }
        if cli.chain_length.is_some()     { matrix.chain_length = cli.chain_length; }
        if cli.parallel.is_some()         { matrix.parallel = cli.parallel; }
        if cli.hardware_mapping.is_some() { matrix.hardware_mapping = cli.hardware_mapping.clone(); }
        if cli.gpio_slowdown.is_some()    { matrix.gpio_slowdown = cli.gpio_slowdown; }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(matrix) = cfg.matrix.as_ref() {
        for (name, value) in [
            ("rows", matrix.rows),
            ("cols", matrix.cols),
            ("chain_length", matrix.chain_length),
            ("parallel", matrix.parallel),
        ] {
            if value == Some(0) {
                return Err(ConfigError::Validation(format!("matrix {name} must be > 0")));
            }
        }
    }
    Ok(())
}
