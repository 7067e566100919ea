//! # Style Configuration
//!
//! Everything that controls how a symbol looks: error correction level,
//! module shape and the foreground/background color pair. A `StyleConfig`
//! is plain data; the renderer reads it, nothing here draws.
//!
//! String-facing conversions live on the types themselves (`FromStr`),
//! so shells can hand user input straight to `parse()` and get a
//! [`SelloError::InvalidStyle`] with a usable message back.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::SelloError;

/// QR error correction level.
///
/// Higher levels survive more damage (and logo coverage) but push the
/// symbol to a larger version for the same content.
///
/// | Level | Recovery capacity |
/// |-------|-------------------|
/// | L     | ~7%               |
/// | M     | ~15%              |
/// | Q     | ~25%              |
/// | H     | ~30%              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    /// Level L: ~7% recovery
    L,
    /// Level M: ~15% recovery
    #[default]
    M,
    /// Level Q: ~25% recovery
    Q,
    /// Level H: ~30% recovery
    H,
}

impl EcLevel {
    /// Approximate recovery capacity in percent, for display.
    pub fn recovery_percent(self) -> u8 {
        match self {
            EcLevel::L => 7,
            EcLevel::M => 15,
            EcLevel::Q => 25,
            EcLevel::H => 30,
        }
    }

    pub(crate) fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for EcLevel {
    type Err = SelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(EcLevel::L),
            "M" | "MEDIUM" => Ok(EcLevel::M),
            "Q" | "QUARTILE" => Ok(EcLevel::Q),
            "H" | "HIGH" => Ok(EcLevel::H),
            other => Err(SelloError::InvalidStyle(format!(
                "Unknown error correction level '{}' (use L, M, Q or H)",
                other
            ))),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        write!(f, "{}", name)
    }
}

/// Shape drawn for each dark module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleShape {
    /// Full module cell, the classic look
    #[default]
    Square,
    /// Corners rounded away from light neighbors; isolated modules become dots
    Rounded,
    /// Inscribed circle per module
    Circle,
}

impl ModuleShape {
    /// All shapes, in menu order.
    pub fn all() -> [ModuleShape; 3] {
        [ModuleShape::Square, ModuleShape::Rounded, ModuleShape::Circle]
    }
}

impl FromStr for ModuleShape {
    type Err = SelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(ModuleShape::Square),
            "rounded" => Ok(ModuleShape::Rounded),
            "circle" => Ok(ModuleShape::Circle),
            other => Err(SelloError::InvalidStyle(format!(
                "Unknown module shape '{}' (use square, rounded or circle)",
                other
            ))),
        }
    }
}

impl fmt::Display for ModuleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModuleShape::Square => "square",
            ModuleShape::Rounded => "rounded",
            ModuleShape::Circle => "circle",
        };
        write!(f, "{}", name)
    }
}

/// Complete visual style for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleConfig {
    pub error_correction: EcLevel,
    pub shape: ModuleShape,
    pub foreground: Color,
    pub background: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            error_correction: EcLevel::M,
            shape: ModuleShape::Square,
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_correction(mut self, level: EcLevel) -> Self {
        self.error_correction = level;
        self
    }

    pub fn shape(mut self, shape: ModuleShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}
