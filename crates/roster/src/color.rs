//! CLI color functions for the roster palette.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! in-process override checked before any styling.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};
use roster_core::ToastKind;

/// Forces color off when set (by `--no-color`).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const ACCENT: Rgb = Rgb::from_hex(0x4A90D9); // Ids, dialog titles
const SUCCESS: Rgb = Rgb::from_hex(0x3FA45B);
const WARNING: Rgb = Rgb::from_hex(0xD4A020);
const DANGER: Rgb = Rgb::from_hex(0xD9534F);
const MUTED: Rgb = Rgb::from_hex(0x6C757D); // Placeholders, secondary lines

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

pub fn accent(text: &str) -> String {
    paint(text, ACCENT)
}

pub fn success(text: &str) -> String {
    paint(text, SUCCESS)
}

pub fn warning(text: &str) -> String {
    paint(text, WARNING)
}

pub fn danger(text: &str) -> String {
    paint(text, DANGER)
}

pub fn muted(text: &str) -> String {
    paint(text, MUTED)
}

/// Bold text for headings.
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Color a toast line by its kind.
pub fn toast(kind: ToastKind, text: &str) -> String {
    match kind {
        ToastKind::Success => success(text),
        ToastKind::Error => danger(text),
        ToastKind::Warning => warning(text),
    }
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stderr, |t| t.truecolor(DANGER.r, DANGER.g, DANGER.b))
        .to_string()
}
