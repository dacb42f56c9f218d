//! Centralized theme system for the storefront TUI.
//!
//! This module provides:
//! - `palette` - Light/dark palettes as ratatui colors
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::ThemeColors;
