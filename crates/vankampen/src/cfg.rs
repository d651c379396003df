//! Pipeline configuration (tolerances, precision budget, scheduling).
//!
//! Policy
//! - Defaults are fixed constants chosen for curves of moderate degree; tests
//!   and the CLI override single fields with struct-update syntax.

/// Numeric and scheduling knobs for the whole pipeline.
#[derive(Clone, Copy, Debug)]
pub struct ZvkCfg {
    /// Working precision (bits) of the first continuation attempt.
    pub start_prec: u32,
    /// Precision cap; escalation beyond it is `PrecisionExhausted`.
    pub max_prec: u32,
    /// Maximum number of `x ↦ x + y` shifts while seeking generic position.
    pub max_shifts: usize,
    /// Voronoi vertices closer than this are merged.
    pub vertex_tol: f64,
    /// Frame points sit at `frame_scale * max|coord| + frame_margin`.
    pub frame_scale: f64,
    pub frame_margin: f64,
    /// First continuation step in `t`.
    pub initial_step: f64,
    /// Step budget per continuation attempt.
    pub max_steps: usize,
    /// Aberth iterations per precision level.
    pub root_max_iter: usize,
    /// Fan segments out over the rayon pool.
    pub parallel: bool,
}

impl Default for ZvkCfg {
    fn default() -> Self {
        Self {
            start_prec: 53,
            max_prec: 1024,
            max_shifts: 16,
            vertex_tol: 1e-9,
            frame_scale: 3.0,
            frame_margin: 1.0,
            initial_step: 0.1,
            max_steps: 200_000,
            root_max_iter: 500,
            parallel: true,
        }
    }
}

/// Options of the public entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupOptions {
    /// Run Tietze simplification on the assembled presentation.
    pub simplified: bool,
    /// Compute the group of the projective completion.
    pub projective: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            simplified: true,
            projective: false,
        }
    }
}
