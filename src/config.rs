// Copyright (c) 2026 rezky_nightky

use std::str::FromStr;

use clap::Parser;

#[derive(Clone, Copy, Debug)]
pub struct U16Range {
    pub low: u16,
    pub high: u16,
}

impl FromStr for U16Range {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(',')
            .ok_or_else(|| "expected: NUM1,NUM2".to_string())?;
        let low: u16 = a
            .trim()
            .parse()
            .map_err(|_| "invalid low value".to_string())?;
        let high: u16 = b
            .trim()
            .parse()
            .map_err(|_| "invalid high value".to_string())?;
        if low == 0 || high == 0 || low > high {
            return Err("range must be >0 and low <= high".to_string());
        }
        Ok(Self { low, high })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "codefall", version, about = "Falling code rain for the terminal")]
pub struct Args {
    #[arg(
        short = 's',
        long = "screensaver",
        help_heading = "GENERAL",
        help = "Exit on the first keypress"
    )]
    pub screensaver: bool,

    #[arg(
        long = "seed",
        help_heading = "GENERAL",
        help = "Seed the generators for a reproducible rain"
    )]
    pub seed: Option<u64>,

    #[arg(
        short = 't',
        long = "tick-ms",
        default_value_t = 100,
        help_heading = "TIMING",
        help = "Frame interval in milliseconds (min 10 max 5000)"
    )]
    pub tick_ms: u16,

    #[arg(
        short = 'p',
        long = "spawn-pct",
        default_value_t = 8.0,
        help_heading = "RAIN",
        help = "Chance of a new snake per candidate column per tick, percent (min 0 max 100)"
    )]
    pub spawn_pct: f32,

    #[arg(
        short = 'l',
        long = "length",
        default_value = "3,12",
        help_heading = "RAIN",
        help = "Snake length range: LOW,HIGH (min 1 max 500)"
    )]
    pub length: U16Range,

    #[arg(
        long = "colormode",
        help_heading = "APPEARANCE",
        help = "Force color bit mode (allowed: 0,8,24)"
    )]
    pub colormode: Option<u8>,
}
