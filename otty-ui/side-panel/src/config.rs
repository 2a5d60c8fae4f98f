use serde::{Deserialize, Serialize};

use crate::errors::PanelConfigError;

/// Edge of the panel that carries the drag affordance strip.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResizableSide {
    Left,
    #[default]
    Right,
}

impl ResizableSide {
    /// Width candidate produced by dragging this edge by `delta_x`.
    ///
    /// A right-edge strip grows with positive deltas; a left-edge strip
    /// grows when dragged towards negative x.
    pub fn apply(self, width: f32, delta_x: f32) -> f32 {
        match self {
            ResizableSide::Right => width + delta_x,
            ResizableSide::Left => width - delta_x,
        }
    }
}

/// Validated, immutable per-panel configuration.
///
/// Invariants: `0 <= min_width <= max_width` and, when present,
/// `min_width <= start_width <= max_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPanelConfig", into = "RawPanelConfig")]
pub struct PanelConfig {
    min_width: f32,
    max_width: f32,
    start_width: Option<f32>,
    resizable_side: ResizableSide,
    is_resizable: bool,
    scaffold_breakpoint: Option<f32>,
}

impl PanelConfig {
    /// Start a builder with the mandatory width bounds.
    pub fn builder(min_width: f32, max_width: f32) -> PanelConfigBuilder {
        PanelConfigBuilder {
            raw: RawPanelConfig {
                min_width,
                max_width,
                start_width: None,
                resizable_side: ResizableSide::default(),
                is_resizable: true,
                scaffold_breakpoint: None,
            },
        }
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(input: &str) -> Result<Self, PanelConfigError> {
        let raw: RawPanelConfig = serde_json::from_str(input)?;
        Self::try_from(raw)
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Configured start width, if any.
    pub fn start_width(&self) -> Option<f32> {
        self.start_width
    }

    /// Width a freshly constructed panel opens with.
    pub fn initial_width(&self) -> f32 {
        self.start_width.unwrap_or(self.min_width)
    }

    pub fn resizable_side(&self) -> ResizableSide {
        self.resizable_side
    }

    pub fn is_resizable(&self) -> bool {
        self.is_resizable
    }

    /// Viewport width at or below which the panel collapses.
    pub fn scaffold_breakpoint(&self) -> Option<f32> {
        self.scaffold_breakpoint
    }

    /// Whether switching to `other` changes the bounds or breakpoint.
    pub(crate) fn bounds_differ(&self, other: &PanelConfig) -> bool {
        self.min_width != other.min_width
            || self.max_width != other.max_width
            || self.scaffold_breakpoint != other.scaffold_breakpoint
    }
}

/// Fluent constructor for [`PanelConfig`].
#[derive(Debug, Clone)]
pub struct PanelConfigBuilder {
    raw: RawPanelConfig,
}

impl PanelConfigBuilder {
    pub fn start_width(mut self, width: f32) -> Self {
        self.raw.start_width = Some(width);
        self
    }

    pub fn resizable_side(mut self, side: ResizableSide) -> Self {
        self.raw.resizable_side = side;
        self
    }

    pub fn resizable(mut self, is_resizable: bool) -> Self {
        self.raw.is_resizable = is_resizable;
        self
    }

    pub fn scaffold_breakpoint(mut self, breakpoint: f32) -> Self {
        self.raw.scaffold_breakpoint = Some(breakpoint);
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<PanelConfig, PanelConfigError> {
        PanelConfig::try_from(self.raw)
    }
}

/// Unvalidated wire shape of [`PanelConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawPanelConfig {
    min_width: f32,
    max_width: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_width: Option<f32>,
    #[serde(default)]
    resizable_side: ResizableSide,
    #[serde(default = "default_is_resizable")]
    is_resizable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scaffold_breakpoint: Option<f32>,
}

fn default_is_resizable() -> bool {
    true
}

impl TryFrom<RawPanelConfig> for PanelConfig {
    type Error = PanelConfigError;

    fn try_from(raw: RawPanelConfig) -> Result<Self, Self::Error> {
        ensure_finite("min_width", raw.min_width)?;
        ensure_finite("max_width", raw.max_width)?;
        if let Some(start) = raw.start_width {
            ensure_finite("start_width", start)?;
        }
        if let Some(breakpoint) = raw.scaffold_breakpoint {
            ensure_finite("scaffold_breakpoint", breakpoint)?;
        }

        if raw.min_width < 0.0 {
            return Err(PanelConfigError::NegativeMin { min: raw.min_width });
        }
        if raw.max_width < raw.min_width {
            return Err(PanelConfigError::MaxBelowMin {
                min: raw.min_width,
                max: raw.max_width,
            });
        }
        if let Some(start) = raw.start_width {
            if start < raw.min_width || start > raw.max_width {
                return Err(PanelConfigError::StartOutOfRange {
                    start,
                    min: raw.min_width,
                    max: raw.max_width,
                });
            }
        }

        Ok(Self {
            min_width: raw.min_width,
            max_width: raw.max_width,
            start_width: raw.start_width,
            resizable_side: raw.resizable_side,
            is_resizable: raw.is_resizable,
            scaffold_breakpoint: raw.scaffold_breakpoint,
        })
    }
}

impl From<PanelConfig> for RawPanelConfig {
    fn from(config: PanelConfig) -> Self {
        Self {
            min_width: config.min_width,
            max_width: config.max_width,
            start_width: config.start_width,
            resizable_side: config.resizable_side,
            is_resizable: config.is_resizable,
            scaffold_breakpoint: config.scaffold_breakpoint,
        }
    }
}

fn ensure_finite(field: &'static str, value: f32) -> Result<(), PanelConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PanelConfigError::NonFinite { field })
    }
}
