//! Colors shared by the desktop components

/// Fixed light palette; every component styles itself inline from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
}

pub const PALETTE: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f5f7",
    border: "#d9d9de",
    text_primary: "#1d1d1f",
    text_muted: "#8a8a8e",
    accent: "#2f6fde",
    danger: "#c62828",
};
