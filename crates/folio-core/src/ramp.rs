use crate::constants::{
    FOCUS_GRAY_EDGE, FOCUS_GRAY_PLATEAU, FOCUS_OPACITY_DIM, FOCUS_OPACITY_EDGE,
    FOCUS_OPACITY_PLATEAU,
};
use smallvec::SmallVec;

/// Piecewise-linear mapping from a scalar input to an output value.
///
/// Output is a pure function of the input and the table: linear
/// interpolation between the two bracketing breakpoints, clamped to the
/// first/last output outside the table. Sampling exactly at a breakpoint
/// returns that breakpoint's output.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    nodes: SmallVec<[(f32, f32); 8]>,
}

impl Ramp {
    /// Breakpoints must be sorted by input; equal inputs form a step.
    pub fn new<I: IntoIterator<Item = (f32, f32)>>(nodes: I) -> Self {
        let nodes: SmallVec<[(f32, f32); 8]> = nodes.into_iter().collect();
        debug_assert!(
            nodes.windows(2).all(|w| w[0].0 <= w[1].0),
            "ramp breakpoints must be sorted by input"
        );
        Self { nodes }
    }

    pub fn sample(&self, p: f32) -> f32 {
        let nodes = &self.nodes;
        match nodes.first() {
            None => 0.0,
            Some(&(x0, y0)) if p <= x0 => y0,
            Some(_) => {
                for w in nodes.windows(2) {
                    let (x0, y0) = w[0];
                    let (x1, y1) = w[1];
                    if p < x1 {
                        let dx = x1 - x0;
                        if dx <= 0.0 {
                            // zero-width segment: step to the later value
                            return y1;
                        }
                        let t = (p - x0) / dx;
                        return y0 + (y1 - y0) * t;
                    }
                    if p == x1 {
                        return y1;
                    }
                }
                nodes.last().map(|&(_, y)| y).unwrap_or(0.0)
            }
        }
    }
}

/// Per-item focus shaping: a grayscale trough and an opacity plateau around
/// a shared center. The opacity window is wider than the grayscale one,
/// producing a soft halo of attention around the focal point.
#[derive(Clone, Debug)]
pub struct FocusEnvelope {
    pub grayscale: Ramp,
    pub opacity: Ramp,
}

impl FocusEnvelope {
    pub fn centered_at(center: f32) -> Self {
        let grayscale = Ramp::new([
            (center - FOCUS_GRAY_EDGE, 1.0),
            (center - FOCUS_GRAY_PLATEAU, 0.0),
            (center + FOCUS_GRAY_PLATEAU, 0.0),
            (center + FOCUS_GRAY_EDGE, 1.0),
        ]);
        let opacity = Ramp::new([
            (center - FOCUS_OPACITY_EDGE, FOCUS_OPACITY_DIM),
            (center - FOCUS_OPACITY_PLATEAU, 1.0),
            (center + FOCUS_OPACITY_PLATEAU, 1.0),
            (center + FOCUS_OPACITY_EDGE, FOCUS_OPACITY_DIM),
        ]);
        Self { grayscale, opacity }
    }
}
