// Copyright (c) 2026 rezky_nightky

use std::env;

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Mono,
    Color256,
    TrueColor,
}

/// Head, trail and background colors for the rain. Mono leaves the colors
/// unset and lets the terminal's defaults through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub head: Option<Color>,
    pub trail: Option<Color>,
    pub bg: Option<Color>,
}

pub fn color_mode_from_env(colorterm: &str, term: &str) -> ColorMode {
    let colorterm = colorterm.to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorMode::TrueColor;
    }

    let term = term.to_ascii_lowercase();
    if term == "dumb" {
        return ColorMode::Mono;
    }

    ColorMode::Color256
}

pub fn detect_color_mode_auto() -> ColorMode {
    color_mode_from_env(
        &env::var("COLORTERM").unwrap_or_default(),
        &env::var("TERM").unwrap_or_default(),
    )
}

pub fn build_palette(mode: ColorMode) -> Palette {
    match mode {
        ColorMode::Mono => Palette {
            head: None,
            trail: None,
            bg: None,
        },
        ColorMode::Color256 => Palette {
            head: Some(Color::AnsiValue(231)),
            trail: Some(Color::AnsiValue(40)),
            bg: Some(Color::Black),
        },
        ColorMode::TrueColor => Palette {
            head: Some(Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            }),
            trail: Some(Color::Rgb { r: 0, g: 208, b: 80 }),
            bg: Some(Color::Black),
        },
    }
}
