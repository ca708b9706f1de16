//! Decorative job settings shown on the configuration tab.
//!
//! These values are editable and can be seeded from a JSON file, but nothing
//! in the simulation reads them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Column/field naming applied to the target collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    #[default]
    SnakeCase,
    CamelCase,
    Preserve,
}

impl NamingConvention {
    const ALL: [NamingConvention; 3] = [
        NamingConvention::SnakeCase,
        NamingConvention::CamelCase,
        NamingConvention::Preserve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::Preserve => "preserve",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineLogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl PipelineLogLevel {
    const ALL: [PipelineLogLevel; 4] = [
        PipelineLogLevel::Debug,
        PipelineLogLevel::Info,
        PipelineLogLevel::Warn,
        PipelineLogLevel::Error,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PipelineLogLevel::Debug => "DEBUG",
            PipelineLogLevel::Info => "INFO",
            PipelineLogLevel::Warn => "WARN",
            PipelineLogLevel::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeChoice {
    const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        }
    }
}

/// Regions offered by the cloud replication section.
pub const AWS_REGIONS: &[&str] = &["us-east-1", "ap-southeast-1"];

/// Editable field of [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    NamingConvention,
    RetryCount,
    TimeoutSecs,
    BatchSize,
    LogLevel,
    TargetDatabase,
    Theme,
    AwsRegion,
}

impl SettingField {
    pub const ALL: [SettingField; 8] = [
        SettingField::NamingConvention,
        SettingField::RetryCount,
        SettingField::TimeoutSecs,
        SettingField::BatchSize,
        SettingField::LogLevel,
        SettingField::TargetDatabase,
        SettingField::Theme,
        SettingField::AwsRegion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::NamingConvention => "Naming convention",
            SettingField::RetryCount => "Retry count",
            SettingField::TimeoutSecs => "Timeout (s)",
            SettingField::BatchSize => "Batch size",
            SettingField::LogLevel => "Log level",
            SettingField::TargetDatabase => "Target database",
            SettingField::Theme => "Theme",
            SettingField::AwsRegion => "AWS region",
        }
    }
}

/// Migration job settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub naming_convention: NamingConvention,
    pub retry_count: u32,
    pub timeout_secs: u32,
    pub batch_size: u32,
    pub log_level: PipelineLogLevel,
    pub target_database: String,
    pub theme: ThemeChoice,
    pub aws_region: String,
    /// Initial state of the cloud replication checkbox.
    pub aws_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            naming_convention: NamingConvention::default(),
            retry_count: 3,
            timeout_secs: 30,
            batch_size: 500,
            log_level: PipelineLogLevel::default(),
            target_database: "grasya_analytics".to_string(),
            theme: ThemeChoice::default(),
            aws_region: AWS_REGIONS[0].to_string(),
            aws_enabled: true,
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file. Missing keys take default values.
    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConsoleError> {
        serde_json::from_str(text).map_err(|e| ConsoleError::Settings(e.to_string()))
    }

    /// Current value of `field` as display text.
    pub fn display(&self, field: SettingField) -> String {
        match field {
            SettingField::NamingConvention => self.naming_convention.label().to_string(),
            SettingField::RetryCount => self.retry_count.to_string(),
            SettingField::TimeoutSecs => self.timeout_secs.to_string(),
            SettingField::BatchSize => self.batch_size.to_string(),
            SettingField::LogLevel => self.log_level.label().to_string(),
            SettingField::TargetDatabase => self.target_database.clone(),
            SettingField::Theme => self.theme.label().to_string(),
            SettingField::AwsRegion => self.aws_region.clone(),
        }
    }

    /// Moves `field` by `step`: numbers are incremented (clamped), choices
    /// cycle. Free-text fields are left untouched.
    pub fn adjust(&mut self, field: SettingField, step: i32) {
        match field {
            SettingField::NamingConvention => {
                self.naming_convention = cycle(&NamingConvention::ALL, self.naming_convention, step)
            }
            SettingField::RetryCount => self.retry_count = bump(self.retry_count, step, 1, 0, 10),
            SettingField::TimeoutSecs => {
                self.timeout_secs = bump(self.timeout_secs, step, 5, 5, 300)
            }
            SettingField::BatchSize => {
                self.batch_size = bump(self.batch_size, step, 100, 100, 10_000)
            }
            SettingField::LogLevel => {
                self.log_level = cycle(&PipelineLogLevel::ALL, self.log_level, step)
            }
            SettingField::TargetDatabase => {}
            SettingField::Theme => self.theme = cycle(&ThemeChoice::ALL, self.theme, step),
            SettingField::AwsRegion => {
                let pos = AWS_REGIONS
                    .iter()
                    .position(|r| *r == self.aws_region)
                    .unwrap_or(0);
                let next = wrap(pos, step, AWS_REGIONS.len());
                self.aws_region = AWS_REGIONS[next].to_string();
            }
        }
    }
}

fn wrap(pos: usize, step: i32, len: usize) -> usize {
    (pos as i64 + step as i64).rem_euclid(len as i64) as usize
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: i32) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    all[wrap(pos, step, all.len())]
}

/// Moves `value` by `step * scale`, clamped to `min..=max`.
fn bump(value: u32, step: i32, scale: i64, min: u32, max: u32) -> u32 {
    let delta = i64::from(step) * scale;
    (i64::from(value) + delta).clamp(i64::from(min), i64::from(max)) as u32
}
