// Copyright (c) 2026 rezky_nightky

mod cell;
mod config;
mod events;
mod frame;
mod glyphs;
mod palette;
mod scheduler;
mod snake;
mod swarm;
mod terminal;

use std::time::Duration;

#[cfg(unix)]
use std::thread;

use clap::Parser;

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

use crate::config::Args;
use crate::events::EventPump;
use crate::glyphs::GlyphSource;
use crate::palette::{build_palette, detect_color_mode_auto, ColorMode};
use crate::scheduler::Scheduler;
use crate::snake::Snake;
use crate::swarm::Swarm;
use crate::terminal::{restore_terminal_best_effort, Terminal};

fn require_f32_range(name: &str, v: f32, min: f32, max: f32) -> f32 {
    if !v.is_finite() {
        eprintln!("failed to apply {} {} (must be a finite number)", name, v);
        std::process::exit(1);
    }
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn require_u16_range(name: &str, v: u16, min: u16, max: u16) -> u16 {
    if v < min || v > max {
        eprintln!("failed to apply {} {} (min {} max {})", name, v, min, max);
        std::process::exit(1);
    }
    v
}

fn detect_color_mode(args: &Args) -> ColorMode {
    if let Some(m) = args.colormode {
        return match m {
            0 => ColorMode::Mono,
            8 => ColorMode::Color256,
            24 => ColorMode::TrueColor,
            _ => {
                eprintln!("invalid --colormode: {} (allowed: 0,8,24)", m);
                std::process::exit(1);
            }
        };
    }

    detect_color_mode_auto()
}

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    #[cfg(unix)]
    {
        if let Ok(mut signals) = Signals::new([SIGINT, SIGTERM, SIGHUP]) {
            thread::spawn(move || {
                if let Some(sig) = signals.forever().next() {
                    restore_terminal_best_effort();
                    std::process::exit(128 + sig);
                }
            });
        }
    }

    #[cfg(windows)]
    {
        if let Err(e) = ctrlc::set_handler(|| {
            restore_terminal_best_effort();
            std::process::exit(130);
        }) {
            eprintln!("failed to install Ctrl-C handler: {}", e);
        }
    }

    let args = Args::parse();

    let tick_ms = require_u16_range("--tick-ms", args.tick_ms, 10, 5000);
    let spawn_pct = require_f32_range("--spawn-pct", args.spawn_pct, 0.0, 100.0);
    let len_low = require_u16_range("--length low", args.length.low, 1, 500);
    let len_high = require_u16_range("--length high", args.length.high, 1, 500);

    let palette = build_palette(detect_color_mode(&args));

    let mut swarm = Swarm::new(args.seed);
    swarm.set_spawn_chance(spawn_pct / 100.0);
    swarm.set_length_range(len_low, len_high);
    // One seed snake so the first frames are not empty.
    swarm.push(Snake::new(0, 1, 3));

    let mut glyphs = match args.seed {
        // Offset keeps the glyph stream distinct from the swarm's stream.
        Some(s) => GlyphSource::with_seed(s ^ 0x9e37_79b9_7f4a_7c15),
        None => GlyphSource::from_os_entropy(),
    };

    let mut term = Terminal::new()?;
    let pump = EventPump::start();

    Scheduler::new(Duration::from_millis(tick_ms as u64), args.screensaver).run(
        &mut term,
        &pump,
        &mut swarm,
        &mut glyphs,
        palette,
    )
}
