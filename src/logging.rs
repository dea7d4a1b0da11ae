//! Logging System
//!
//! Structured diagnostics through the `tracing` crate. Loader warnings, decode
//! failures and session events are emitted here; command output is not.

use crate::error::ShellError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Resolve the log file path with precedence: CLI, VFSH_LOG_FILE env, config file, default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ShellError> {
    resolve_log_file_path_with(cli_file, std::env::var("VFSH_LOG_FILE").ok(), config_file)
}

fn resolve_log_file_path_with(
    cli_file: Option<PathBuf>,
    env_file: Option<String>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ShellError> {
    if let Some(p) = cli_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    if let Some(p) = env_file.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    if let Some(p) = config_file.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    default_log_file_path()
}

fn default_log_file_path() -> Result<PathBuf, ShellError> {
    let project_dirs = directories::ProjectDirs::from("", "vfsh", "vfsh").ok_or_else(|| {
        ShellError::Config("Could not determine platform directories for log file".to_string())
    })?;
    let dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir())
        .to_path_buf();
    Ok(dir.join("vfsh.log"))
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr, both
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means use runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Logging settings given on the command line.
///
/// These outrank both the `VFSH_LOG*` environment variables and the merged
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOverrides {
    pub level: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub file: Option<PathBuf>,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Command-line flags (`overrides`)
/// 2. Environment variables (VFSH_LOG, VFSH_LOG_FORMAT, VFSH_LOG_OUTPUT, ...)
/// 3. Configuration
/// 4. Defaults
pub fn init_logging(
    config: Option<&LoggingConfig>,
    overrides: &LogOverrides,
) -> Result<(), ShellError> {
    if config.map(|c| !c.enabled).unwrap_or(false) {
        return Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
            .map_err(|e| ShellError::Config(format!("Failed to install logger: {}", e)));
    }

    let filter = build_env_filter(config, overrides.level.as_deref())?;
    let format = determine_format(config, overrides.format.as_deref())?;
    let output = determine_output(config, overrides.output.as_deref())?;
    let ansi = !output.file && config.map(|c| c.color).unwrap_or(true);
    let writer = build_writer(&output, config, overrides.file.clone())?;

    let layer = fmt::layer()
        .with_target(true)
        .with_timer(ChronoUtc::rfc_3339())
        .with_writer(writer);
    let base = Registry::default().with(filter);

    let installed = if format == "json" {
        base.with(layer.json()).try_init()
    } else {
        base.with(layer.with_ansi(ansi)).try_init()
    };
    installed.map_err(|e| ShellError::Config(format!("Failed to install logger: {}", e)))
}

fn build_writer(
    output: &OutputDestinations,
    config: Option<&LoggingConfig>,
    cli_file: Option<PathBuf>,
) -> Result<BoxMakeWriter, ShellError> {
    let file = if output.file {
        Some(open_log_file(cli_file, config.and_then(|c| c.file.clone()))?)
    } else {
        None
    };

    let writer = match (file, output.stdout, output.stderr) {
        (Some(f), _, true) => BoxMakeWriter::new(Mutex::new(f).and(std::io::stderr)),
        (Some(f), _, false) => BoxMakeWriter::new(Mutex::new(f)),
        (None, true, true) => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        (None, true, false) => BoxMakeWriter::new(std::io::stdout),
        (None, false, _) => BoxMakeWriter::new(std::io::stderr),
    };
    Ok(writer)
}

fn open_log_file(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<std::fs::File, ShellError> {
    let log_file = resolve_log_file_path(cli_file, config_file)?;
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ShellError::Config(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .map_err(|e| ShellError::Config(format!("Failed to open log file {:?}: {}", log_file, e)))
}

/// Build the level filter from flags, environment or config.
fn build_env_filter(
    config: Option<&LoggingConfig>,
    cli_level: Option<&str>,
) -> Result<EnvFilter, ShellError> {
    let base = filter_base_with(cli_level, std::env::var("VFSH_LOG").ok(), config);
    if base == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(&base)
        .map_err(|e| ShellError::Config(format!("Invalid log level {:?}: {}", base, e)))?;

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            filter = filter.add_directive(parse_directive(module, module_level)?);
        }
    }

    if let Ok(modules_str) = std::env::var("VFSH_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, module_level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module, module_level)?);
            }
        }
    }

    Ok(filter)
}

fn filter_base_with(
    cli_level: Option<&str>,
    env_filter: Option<String>,
    config: Option<&LoggingConfig>,
) -> String {
    if let Some(level) = cli_level.filter(|l| !l.trim().is_empty()) {
        return level.trim().to_string();
    }
    if let Some(filter) = env_filter.filter(|f| !f.trim().is_empty()) {
        return filter;
    }
    config
        .map(|c| c.level.clone())
        .unwrap_or_else(default_log_level)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, ShellError> {
    format!("{}={}", module.trim(), level.trim())
        .parse()
        .map_err(|e| ShellError::Config(format!("Invalid log directive: {}", e)))
}

/// Determine output format from flags, environment or config
fn determine_format(
    config: Option<&LoggingConfig>,
    cli_format: Option<&str>,
) -> Result<String, ShellError> {
    determine_format_with(cli_format, std::env::var("VFSH_LOG_FORMAT").ok(), config)
}

fn determine_format_with(
    cli_format: Option<&str>,
    env_format: Option<String>,
    config: Option<&LoggingConfig>,
) -> Result<String, ShellError> {
    let format = match (cli_format, env_format) {
        (Some(format), _) => format.to_string(),
        (None, Some(format)) if format == "json" || format == "text" => format,
        _ => config
            .map(|c| c.format.clone())
            .unwrap_or_else(default_format),
    };
    if format != "json" && format != "text" {
        return Err(ShellError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format)
}

/// Output destinations
#[derive(Debug)]
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

/// Determine output destinations from flags, environment or config
fn determine_output(
    config: Option<&LoggingConfig>,
    cli_output: Option<&str>,
) -> Result<OutputDestinations, ShellError> {
    let env_output = std::env::var("VFSH_LOG_OUTPUT").ok();
    let output = cli_output
        .map(str::to_string)
        .or(env_output)
        .or_else(|| config.map(|c| c.output.clone()))
        .unwrap_or_else(default_output);
    parse_output_destinations(&output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ShellError> {
    let (stdout, stderr, file) = match output {
        "stdout" => (true, false, false),
        "stderr" => (false, true, false),
        "file" => (false, false, true),
        "file+stderr" => (false, true, true),
        "both" => (true, true, false),
        _ => {
            return Err(ShellError::Config(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
                output
            )))
        }
    };
    Ok(OutputDestinations {
        stdout,
        stderr,
        file,
    })
}
