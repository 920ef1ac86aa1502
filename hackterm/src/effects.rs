//! Timed frontend effects driven by the UI tick: the matrix rain overlay,
//! the staged hack script reveal, and the konami flash.
//!
//! The shell decides *that* an effect should play and hands over an
//! [`EffectRequest`]; pacing and pixels live here.

use hackterm_core::flavor::HACK_SCRIPT;
use hackterm_core::{EffectRequest, Session};
use rand::seq::SliceRandom;
use rand::Rng;

/// UI ticks the rain keeps falling (~5s at the 80ms cadence).
const RAIN_TICKS: u16 = 62;
/// UI ticks between revealed hack-script lines.
const REVEAL_BEAT: u8 = 8;
const FLASH_TICKS: u16 = 12;

const RAIN_GLYPHS: &[char] = &[
    '0', '1', '$', '#', '%', '&', '*', '+', '=', '<', '>', '|', '/', '\\', ':', ';',
];

pub struct RainColumn {
    pub x: u16,
    /// Row of the leading glyph. Starts above the screen so columns enter
    /// staggered.
    pub head: i32,
    pub len: u16,
    pub glyphs: Vec<char>,
}

pub enum EffectState {
    MatrixRain {
        ticks_left: u16,
        columns: Vec<RainColumn>,
    },
    HackReveal {
        next: usize,
        cooldown: u8,
    },
    KonamiFlash {
        ticks_left: u16,
    },
}

impl EffectState {
    pub fn begin(request: EffectRequest) -> Self {
        match request {
            EffectRequest::MatrixRain => EffectState::MatrixRain {
                ticks_left: RAIN_TICKS,
                columns: Vec::new(),
            },
            // Line 0 was already echoed by the command itself.
            EffectRequest::HackSequence => EffectState::HackReveal {
                next: 1,
                cooldown: REVEAL_BEAT,
            },
        }
    }

    pub fn konami_flash() -> Self {
        EffectState::KonamiFlash {
            ticks_left: FLASH_TICKS,
        }
    }

    /// One UI tick. Rain animates in place; the hack reveal appends its
    /// next line to the transcript when its beat elapses.
    pub fn advance(&mut self, session: &mut Session, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        match self {
            EffectState::MatrixRain {
                ticks_left,
                columns,
            } => {
                if columns.is_empty() && width > 0 {
                    *columns = spawn_columns(&mut rng, width, height);
                }
                for column in columns.iter_mut() {
                    column.head += 1;
                    if column.head - i32::from(column.len) > i32::from(height) {
                        respawn(&mut rng, column, height);
                    }
                    if rng.gen_bool(0.2) {
                        let slot = rng.gen_range(0..column.glyphs.len());
                        column.glyphs[slot] = random_glyph(&mut rng);
                    }
                }
                *ticks_left = ticks_left.saturating_sub(1);
            }
            EffectState::HackReveal { next, cooldown } => {
                if *cooldown > 0 {
                    *cooldown -= 1;
                    return;
                }
                if let Some((severity, content)) = HACK_SCRIPT.get(*next) {
                    session.append(*severity, *content);
                    *next += 1;
                    *cooldown = REVEAL_BEAT;
                }
            }
            EffectState::KonamiFlash { ticks_left } => {
                *ticks_left = ticks_left.saturating_sub(1);
            }
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            EffectState::MatrixRain { ticks_left, .. } => *ticks_left == 0,
            EffectState::HackReveal { next, .. } => *next >= HACK_SCRIPT.len(),
            EffectState::KonamiFlash { ticks_left } => *ticks_left == 0,
        }
    }
}

fn spawn_columns<R: Rng>(rng: &mut R, width: u16, height: u16) -> Vec<RainColumn> {
    (0..width)
        .step_by(2)
        .map(|x| {
            let len = rng.gen_range(4..12);
            RainColumn {
                x,
                head: -rng.gen_range(0..i32::from(height.max(1))),
                len,
                glyphs: (0..len).map(|_| random_glyph(rng)).collect(),
            }
        })
        .collect()
}

fn respawn<R: Rng>(rng: &mut R, column: &mut RainColumn, height: u16) {
    column.len = rng.gen_range(4..12);
    column.head = -rng.gen_range(0..i32::from(height.max(1)));
    column.glyphs = (0..column.len).map(|_| random_glyph(rng)).collect();
}

fn random_glyph<R: Rng>(rng: &mut R) -> char {
    *RAIN_GLYPHS.choose(rng).unwrap_or(&'0')
}
