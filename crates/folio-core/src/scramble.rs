use crate::constants::SCRAMBLE_GLYPHS;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Timed "decrypt" text reveal.
///
/// Characters resolve left to right while the unresolved tail cycles
/// through a glyph pool; the display length interpolates from the
/// placeholder's to the target's. Seeded so a given seed and sample
/// sequence reproduce the same frames.
#[derive(Clone, Debug)]
pub struct ScrambleReveal {
    target: Vec<char>,
    start_len: usize,
    duration_ms: f64,
    rng: StdRng,
    done: bool,
}

impl ScrambleReveal {
    pub fn new(placeholder: &str, target: &str, duration_ms: f64, seed: u64) -> Self {
        Self {
            target: target.chars().collect(),
            start_len: placeholder.chars().count(),
            duration_ms: duration_ms.max(1.0),
            rng: StdRng::seed_from_u64(seed),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Display string at `elapsed_ms` since the reveal started. At or past
    /// the duration this returns the target exactly and latches done.
    pub fn sample(&mut self, elapsed_ms: f64) -> String {
        let ratio = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let end_len = self.target.len();

        if ratio >= 1.0 {
            self.done = true;
            return self.target.iter().collect();
        }

        let glyphs: Vec<char> = SCRAMBLE_GLYPHS.chars().collect();
        let current_len =
            (self.start_len as f64 + (end_len as f64 - self.start_len as f64) * ratio) as usize;
        let resolved = (ratio * end_len as f64) as usize;

        let mut out = String::with_capacity(current_len);
        for i in 0..current_len {
            if i < resolved {
                if let Some(c) = self.target.get(i) {
                    out.push(*c);
                }
            } else {
                out.push(glyphs[self.rng.gen_range(0..glyphs.len())]);
            }
        }
        out
    }
}
