use std::{fmt, io};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSetting {
    /// Color only when the target is a terminal.
    #[default]
    Automatic,
    Always,
    Never,
}

impl From<bool> for ColorSetting {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Always,
            false => Self::Never,
        }
    }
}

impl ColorSetting {
    pub fn enabled_for<T: SupportsColor + ?Sized>(&self, target: &T) -> bool {
        match self {
            ColorSetting::Automatic => target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    White,
    BrightBlue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlue => 94,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Bold,
    Italic,
}

impl Style {
    fn code(self) -> u8 {
        match self {
            Style::Plain => 0,
            Style::Bold => 1,
            Style::Italic => 3,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// A value that displays with the given color and style.
#[derive(Debug, Clone, Copy)]
pub struct Painted<T> {
    value: T,
    color: Color,
    style: Style,
    enabled: bool,
}

/// Wrap `value` so it displays in `color` and `style`, or unchanged when `enabled` is false.
pub fn paint<T: fmt::Display>(value: T, color: Color, style: Style, enabled: bool) -> Painted<T> {
    Painted {
        value,
        color,
        style,
        enabled,
    }
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.enabled {
            true => write!(
                f,
                "\x1b[{};{}m{}{RESET}",
                self.style.code(),
                self.color.code(),
                self.value
            ),
            false => write!(f, "{}", self.value),
        }
    }
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
