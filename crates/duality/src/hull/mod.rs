//! Resumable monotone-chain hull (upper or lower half).
//!
//! Purpose
//! - Build one half of Andrew's monotone chain one input point at a time, so a
//!   caller can render every intermediate chain or simply drain to the end.
//!
//! Why this design
//! - The sweep position lives in an explicit `HullState` value; `step` is a
//!   pure function from one state to the next. Earlier states stay valid, so
//!   callers can keep the whole history for animation or undo.
//!
//! Contract
//! - Input points are sorted by ascending x by the caller; nothing is sorted
//!   here, and a point left of the chain's last point fails the step.
//! - Upper chain: pop while the last two chain points and the new point do
//!   not turn right. Lower chain: pop while they do not turn left. Collinear
//!   middle points are evicted from both chains, so no two consecutive chain
//!   points dualize to lines through a shared vertex with a third.

use crate::error::DualityError;
use crate::geom::{left_turn, Point};


/// Which half of the hull is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullKind {
    Upper,
    Lower,
}

/// Checkpoint of the sweep: current chain, index of the next unprocessed input
/// point, and whether the sweep is finished.
#[derive(Clone, Debug, PartialEq)]
pub struct HullState {
    pub chain: Vec<Point>,
    pub next: usize,
    pub done: bool,
}

impl HullState {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Step function over a fixed, x-sorted input.
#[derive(Clone, Copy, Debug)]
pub struct HullStepper<'a> {
    points: &'a [Point],
    kind: HullKind,
}

impl<'a> HullStepper<'a> {
    #[inline]
    pub fn new(points: &'a [Point], kind: HullKind) -> Self {
        Self { points, kind }
    }

    #[inline]
    pub fn kind(&self) -> HullKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    /// Initial state: done with an empty chain for empty input, otherwise the
    /// chain holds the first point.
    pub fn start(&self) -> HullState {
        match self.points.first() {
            None => HullState {
                chain: Vec::new(),
                next: 0,
                done: true,
            },
            Some(&first) => HullState {
                chain: vec![first],
                next: 1,
                done: self.points.len() <= 1,
            },
        }
    }

    /// Process the next input point. Fails with `InvalidState` on a finished
    /// state or one that does not belong to this input.
    pub fn step(&self, state: &HullState) -> Result<HullState, DualityError> {
        if state.done {
            return Err(DualityError::invalid_state("hull sweep already finished"));
        }
        let Some(&p) = self.points.get(state.next) else {
            return Err(DualityError::invalid_state(format!(
                "next index {} out of range for {} input points",
                state.next,
                self.points.len()
            )));
        };
        if let Some(last) = state.chain.last().filter(|last| p.x < last.x) {
            return Err(DualityError::degenerate(format!(
                "hull input not sorted by x: {} follows {}",
                p.x, last.x
            )));
        }
        let mut chain = state.chain.clone();
        while chain.len() >= 2 {
            let (a, b) = (chain[chain.len() - 2], chain[chain.len() - 1]);
            // reversed argument order asks for a strict right turn
            let evict = match self.kind {
                HullKind::Upper => !left_turn(p, b, a),
                HullKind::Lower => !left_turn(a, b, p),
            };
            if !evict {
                break;
            }
            chain.pop();
        }
        chain.push(p);
        let next = state.next + 1;
        Ok(HullState {
            chain,
            next,
            done: next >= self.points.len(),
        })
    }

    /// Run the sweep to completion.
    pub fn drain(&self) -> Result<HullState, DualityError> {
        let mut last = self.start();
        for state in self.steps().skip(1) {
            last = state?;
        }
        Ok(last)
    }

    /// Every state of the sweep, starting with `start()` and ending with the
    /// finished state, or with the error that stopped it.
    pub fn steps(&self) -> Steps<'a> {
        Steps {
            stepper: *self,
            state: Some(Ok(self.start())),
        }
    }
}

/// Iterator over successive `HullState`s. Yields at most one error, last.
#[derive(Clone, Debug)]
pub struct Steps<'a> {
    stepper: HullStepper<'a>,
    state: Option<Result<HullState, DualityError>>,
}

impl Iterator for Steps<'_> {
    type Item = Result<HullState, DualityError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.state.take()?;
        if let Ok(state) = &current {
            if !state.done {
                self.state = Some(self.stepper.step(state));
            }
        }
        Some(current)
    }
}
