// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML suite configuration with strict validation.
//!
//! A config file can override per-kernel default sizes, tune the Mandelbrot
//! viewport and list the runs that make up a suite. Every field is checked
//! at load time; an invalid value is a hard error before anything runs.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::{KernelError, KernelResult, ValidationError};
use crate::kernels::mandelbrot::{Viewport, XBound, DEFAULT_MAX_ITERATIONS};
use crate::types::{KernelKind, ProblemSize};

/// Raw Mandelbrot section as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawMandelbrotConfig {
    #[serde(default = "default_max_iterations")]
    max_iterations: u32,
    #[serde(default = "default_min_x")]
    min_x: f64,
    #[serde(default = "default_max_x")]
    max_x: f64,
    #[serde(default = "default_min_y")]
    min_y: f64,
    #[serde(default = "default_max_y")]
    max_y: f64,
    #[serde(default)]
    x_bound: XBound,
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_min_x() -> f64 {
    -1.5
}

fn default_max_x() -> f64 {
    0.5
}

fn default_min_y() -> f64 {
    -1.0
}

fn default_max_y() -> f64 {
    1.0
}

impl Default for RawMandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            min_x: default_min_x(),
            max_x: default_max_x(),
            min_y: default_min_y(),
            max_y: default_max_y(),
            x_bound: XBound::default(),
        }
    }
}

/// Raw suite entry.
#[derive(Debug, Deserialize)]
struct RawSuiteEntry {
    kernel: String,
    sizes: Option<Vec<u64>>,
}

/// Raw root configuration file.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    defaults: HashMap<String, u64>,
    #[serde(default)]
    mandelbrot: RawMandelbrotConfig,
    #[serde(default)]
    suite: Vec<RawSuiteEntry>,
}

/// Validated Mandelbrot settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotSettings {
    pub max_iterations: u32,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub x_bound: XBound,
}

/// Upper bound on the grid cells a single render may sample.
pub const MAX_RENDER_CELLS: f64 = 1.0e9;

/// Smallest step any accepted resolution produces.
fn finest_step() -> f64 {
    1.0 / KernelKind::Mandelbrot.size_bounds().1 as f64
}

impl MandelbrotSettings {
    /// Viewport sampled `resolution` times per unit.
    ///
    /// Fails when the grid would exceed [`MAX_RENDER_CELLS`].
    pub fn viewport(&self, resolution: u64) -> KernelResult<Viewport> {
        let step = 1.0 / resolution as f64;
        let columns = (self.max_x - self.min_x) / step + 2.0;
        let rows = (self.max_y - self.min_y) / step + 1.0;
        let cells = columns * rows;
        if !cells.is_finite() || cells > MAX_RENDER_CELLS {
            return Err(ValidationError::InvalidFieldValue {
                field: "size",
                value: resolution.to_string(),
                reason: format!(
                    "Viewport would sample about {:.0} cells (limit {:.0})",
                    cells, MAX_RENDER_CELLS
                ),
            }
            .into());
        }

        Ok(Viewport {
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            step,
        })
    }
}

impl Default for MandelbrotSettings {
    fn default() -> Self {
        let raw = RawMandelbrotConfig::default();
        Self {
            max_iterations: raw.max_iterations,
            min_x: raw.min_x,
            max_x: raw.max_x,
            min_y: raw.min_y,
            max_y: raw.max_y,
            x_bound: raw.x_bound,
        }
    }
}

/// Per-kernel default sizes, falling back to the built-in constants.
#[derive(Debug, Clone, Default)]
pub struct KernelDefaults {
    overrides: BTreeMap<KernelKind, ProblemSize>,
}

impl KernelDefaults {
    /// Default size for `kind`.
    pub fn size_for(&self, kind: KernelKind) -> u64 {
        self.overrides
            .get(&kind)
            .map_or(kind.default_size(), ProblemSize::value)
    }

    /// Whether the config overrides the built-in default for `kind`.
    pub fn is_overridden(&self, kind: KernelKind) -> bool {
        self.overrides.contains_key(&kind)
    }
}

/// One suite line: a kernel and the sizes to run it at.
#[derive(Debug, Clone)]
pub struct SuiteEntry {
    pub kernel: KernelKind,
    pub sizes: Vec<ProblemSize>,
}

/// Complete validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub defaults: KernelDefaults,
    pub mandelbrot: MandelbrotSettings,
    pub suite: Vec<SuiteEntry>,
}

impl Config {
    /// Configured suite, or every kernel once at its default size when none is listed.
    pub fn effective_suite(&self) -> Vec<SuiteEntry> {
        if !self.suite.is_empty() {
            return self.suite.clone();
        }
        KernelKind::ALL
            .iter()
            .map(|&kernel| SuiteEntry {
                kernel,
                sizes: vec![ProblemSize::new(kernel, self.defaults.size_for(kernel))
                    .unwrap_or_else(|_| ProblemSize::default_for(kernel))],
            })
            .collect()
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> KernelResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(KernelError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| KernelError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load a config file if present, built-in defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> KernelResult<Config> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using built-in defaults");
            return Ok(Config::default());
        }
        Self::load_file(path)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> KernelResult<Config> {
        // An empty document is a valid, default configuration.
        if content.trim().is_empty() {
            return Self::validate(RawConfig::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| KernelError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> KernelResult<Config> {
        let mut overrides = BTreeMap::new();
        for (name, value) in raw.defaults {
            let kind: KernelKind = name.parse()?;
            overrides.insert(kind, ProblemSize::new(kind, value)?);
        }
        let defaults = KernelDefaults { overrides };

        let mandelbrot = Self::validate_mandelbrot(raw.mandelbrot)?;

        let mut suite = Vec::with_capacity(raw.suite.len());
        for (index, entry) in raw.suite.into_iter().enumerate() {
            suite.push(Self::validate_entry(entry, index, &defaults)?);
        }

        Ok(Config {
            defaults,
            mandelbrot,
            suite,
        })
    }

    /// Validate the Mandelbrot viewport.
    fn validate_mandelbrot(raw: RawMandelbrotConfig) -> KernelResult<MandelbrotSettings> {
        if raw.max_iterations == 0 {
            return Err(ValidationError::InvalidFieldValue {
                field: "max_iterations",
                value: "0".to_string(),
                reason: "Must be greater than 0".to_string(),
            }
            .into());
        }

        let bounds = [
            ("min_x", raw.min_x),
            ("max_x", raw.max_x),
            ("min_y", raw.min_y),
            ("max_y", raw.max_y),
        ];
        for (field, value) in bounds {
            if !value.is_finite() {
                return Err(ValidationError::InvalidFieldValue {
                    field,
                    value: value.to_string(),
                    reason: "Viewport bounds must be finite".to_string(),
                }
                .into());
            }
            if value + finest_step() == value {
                return Err(ValidationError::InvalidFieldValue {
                    field,
                    value: value.to_string(),
                    reason: format!(
                        "Too large to be advanced by the finest step ({})",
                        finest_step()
                    ),
                }
                .into());
            }
        }

        if raw.min_x >= raw.max_x {
            return Err(ValidationError::InvalidFieldValue {
                field: "max_x",
                value: raw.max_x.to_string(),
                reason: format!("Must be greater than min_x ({})", raw.min_x),
            }
            .into());
        }

        if raw.min_y >= raw.max_y {
            return Err(ValidationError::InvalidFieldValue {
                field: "max_y",
                value: raw.max_y.to_string(),
                reason: format!("Must be greater than min_y ({})", raw.min_y),
            }
            .into());
        }

        Ok(MandelbrotSettings {
            max_iterations: raw.max_iterations,
            min_x: raw.min_x,
            max_x: raw.max_x,
            min_y: raw.min_y,
            max_y: raw.max_y,
            x_bound: raw.x_bound,
        })
    }

    /// Validate a single suite entry.
    fn validate_entry(
        raw: RawSuiteEntry,
        index: usize,
        defaults: &KernelDefaults,
    ) -> KernelResult<SuiteEntry> {
        let kernel: KernelKind = raw.kernel.parse()?;

        let sizes = match raw.sizes {
            None => vec![ProblemSize::new(kernel, defaults.size_for(kernel))?],
            Some(sizes) if sizes.is_empty() => {
                return Err(ValidationError::InvalidFieldValue {
                    field: "sizes",
                    value: "[]".to_string(),
                    reason: format!(
                        "suite entry at index {} must list at least one size",
                        index
                    ),
                }
                .into());
            }
            Some(sizes) => sizes
                .into_iter()
                .map(|size| ProblemSize::new(kernel, size))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(SuiteEntry { kernel, sizes })
    }
}
