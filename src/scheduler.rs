// Copyright (c) 2026 rezky_nightky

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::events::{BackendEvent, EventPump};
use crate::frame::Frame;
use crate::glyphs::GlyphSource;
use crate::palette::Palette;
use crate::snake::{CellWrite, Snake};
use crate::swarm::Swarm;
use crate::terminal::Terminal;

// One scoped thread per snake, each with a forked glyph source. The
// channel is the tick's completion barrier: the receive loop only finishes
// once every task has sent and dropped its sender, and the scope join
// backs that up. No synchronization state outlives the call.
pub fn render_fanout(
    snakes: &[Snake],
    glyphs: &mut GlyphSource,
    palette: &Palette,
    height: u16,
) -> Vec<Vec<CellWrite>> {
    let (done_tx, done_rx) = mpsc::channel::<Vec<CellWrite>>();
    thread::scope(|scope| {
        for snake in snakes {
            let done_tx = done_tx.clone();
            let mut glyphs = glyphs.fork();
            let palette = *palette;
            scope.spawn(move || {
                let _ = done_tx.send(snake.render(&mut glyphs, &palette, height));
            });
        }
        drop(done_tx);
        done_rx.iter().collect()
    })
}

fn is_quit_key(k: &KeyEvent) -> bool {
    matches!(
        (k.code, k.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), _)
            | (KeyCode::Esc, _)
    )
}

pub struct Scheduler {
    tick: Duration,
    screensaver: bool,
}

impl Scheduler {
    pub fn new(tick: Duration, screensaver: bool) -> Self {
        Self { tick, screensaver }
    }

    // One iteration per tick: check the pump, otherwise sleep the fixed
    // interval and run spawn -> cull -> advance -> render -> present.
    pub fn run(
        &self,
        term: &mut Terminal,
        pump: &EventPump,
        swarm: &mut Swarm,
        glyphs: &mut GlyphSource,
        palette: Palette,
    ) -> io::Result<()> {
        let (w, h) = term.size()?;
        let mut frame = Frame::new(w, h, palette.bg);

        loop {
            match pump.try_next() {
                Some(BackendEvent::Key(k)) => {
                    if self.screensaver || is_quit_key(&k) {
                        return Ok(());
                    }
                }
                Some(BackendEvent::Resize(nw, nh)) => {
                    // Acknowledge the new dimensions right away; no
                    // simulation step on a resize tick.
                    frame = Frame::new(nw, nh, palette.bg);
                    term.clear_screen(palette.bg)?;
                }
                Some(BackendEvent::Error(e)) => return Err(e),
                None => {
                    thread::sleep(self.tick);

                    frame.clear();
                    // Spawn first: forbidden columns are judged against the
                    // pre-cull population.
                    swarm.spawn(frame.width);
                    swarm.cull(frame.height);
                    swarm.advance_all();

                    let patches = render_fanout(swarm.snakes(), glyphs, &palette, frame.height);
                    // Patches land in completion order, so overlapping trail
                    // cells resolve last-writer-wins. Accepted: cosmetic
                    // only, no invariant depends on which glyph survives.
                    for writes in &patches {
                        for w in writes {
                            frame.set(w.x, w.y, w.cell);
                        }
                    }

                    term.draw(&frame)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{build_palette, ColorMode};

    fn snakes(n: usize) -> Vec<Snake> {
        (0..n).map(|i| Snake::new(i as u16 * 2, 5, 4)).collect()
    }

    #[test]
    fn fanout_collects_one_patch_per_snake() {
        let palette = build_palette(ColorMode::Color256);
        for n in [0usize, 1, 10] {
            let mut glyphs = GlyphSource::with_seed(9);
            let population = snakes(n);
            let patches = render_fanout(&population, &mut glyphs, &palette, 24);
            assert_eq!(patches.len(), n);
        }
    }

    #[test]
    fn fanout_patches_hold_every_visible_cell() {
        let palette = build_palette(ColorMode::Color256);
        let mut glyphs = GlyphSource::with_seed(9);
        let population = snakes(3);
        let patches = render_fanout(&population, &mut glyphs, &palette, 24);

        for patch in &patches {
            // Fully on-screen snakes of length 4 produce all four cells.
            assert_eq!(patch.len(), 4);
        }
    }

    #[test]
    fn applied_patches_land_in_the_frame() {
        let palette = build_palette(ColorMode::Color256);
        let mut glyphs = GlyphSource::with_seed(9);
        let population = snakes(2);
        let mut frame = Frame::new(10, 24, palette.bg);

        for writes in render_fanout(&population, &mut glyphs, &palette, frame.height) {
            for w in writes {
                frame.set(w.x, w.y, w.cell);
            }
        }

        for s in &population {
            let head = frame.get(s.head.x, s.head.y as u16).unwrap();
            assert!(head.bold);
            assert_eq!(head.fg, palette.head);
        }
    }

    #[test]
    fn ctrl_c_q_and_esc_quit() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert!(is_quit_key(&ctrl_c));
        assert!(is_quit_key(&q));
        assert!(is_quit_key(&esc));
        assert!(!is_quit_key(&other));
    }
}
