//! Frame-paced playback of an accepted move.
//!
//! A `MoveAnimation` owns the accepted `MovePlan` and drains it as
//! `advance` hands it time:
//!
//! 1. **Stepping**: the frog enters one path space per `step_duration`.
//!    The board is untouched; the frog is only visually in transit.
//! 2. **Landing**: once every step is taken the plan is committed to the
//!    board in one go, including any capture.
//! 3. **Sliding home**: if a frog was captured, the move waits another
//!    `slide_duration` while it slides back to its root.
//!
//! Time left over from one stage flows into the next within the same call,
//! so the outcome never depends on how the time was sliced.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Motion, MovePlan};
use crate::core::{FrogId, GameConfig, SpaceId};

/// Stage of an in-flight move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationStage {
    Stepping { elapsed: f64 },
    SlidingHome { frog: FrogId, elapsed: f64 },
    Done,
}

/// Read-only view of an in-flight move for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationView {
    pub frog: FrogId,
    /// Origin followed by every space entered, destination last.
    pub spaces: Vec<SpaceId>,
    /// Index into `spaces` of the space the frog is leaving.
    pub step: usize,
    /// Fraction (0..=1) of the way to `spaces[step + 1]`.
    pub step_progress: f64,
    /// Frog sliding home and its fraction of the slide, once landed.
    pub sliding: Option<(FrogId, f64)>,
}

/// One accepted move being played out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveAnimation {
    plan: MovePlan,
    stage: AnimationStage,
    landed: bool,
}

impl MoveAnimation {
    /// Start animating `plan`, marking its frog as stepping.
    pub fn start(plan: MovePlan, board: &mut Board) -> Self {
        board.set_motion(
            plan.frog,
            Motion::SteppingForward {
                remaining: plan.steps(),
            },
        );
        Self {
            plan,
            stage: AnimationStage::Stepping { elapsed: 0.0 },
            landed: false,
        }
    }

    #[must_use]
    pub fn plan(&self) -> &MovePlan {
        &self.plan
    }

    #[must_use]
    pub fn stage(&self) -> AnimationStage {
        self.stage
    }

    /// Whether the plan has been committed to the board.
    #[must_use]
    pub fn has_landed(&self) -> bool {
        self.landed
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.stage == AnimationStage::Done
    }

    /// Consume `dt` seconds. Returns true once the whole move is finished.
    pub fn advance(&mut self, dt: f64, config: &GameConfig, board: &mut Board) -> bool {
        let mut budget = dt;
        loop {
            match self.stage {
                AnimationStage::Stepping { elapsed } => {
                    let steps = self.plan.path.len();
                    let needed = config.step_duration * steps as f64 - elapsed;
                    if budget < needed {
                        let elapsed = elapsed + budget;
                        self.stage = AnimationStage::Stepping { elapsed };
                        let taken = (elapsed / config.step_duration).floor() as usize;
                        let remaining = steps.saturating_sub(taken) as u8;
                        board.set_motion(self.plan.frog, Motion::SteppingForward { remaining });
                        return false;
                    }
                    budget -= needed.max(0.0);

                    let captured = board.commit(&self.plan);
                    board.set_motion(self.plan.frog, Motion::Idle);
                    self.landed = true;
                    self.stage = match captured {
                        Some(frog) => AnimationStage::SlidingHome { frog, elapsed: 0.0 },
                        None => AnimationStage::Done,
                    };
                }
                AnimationStage::SlidingHome { frog, elapsed } => {
                    let needed = config.slide_duration - elapsed;
                    if budget < needed {
                        self.stage = AnimationStage::SlidingHome {
                            frog,
                            elapsed: elapsed + budget,
                        };
                        return false;
                    }
                    budget -= needed.max(0.0);
                    board.set_motion(frog, Motion::Idle);
                    self.stage = AnimationStage::Done;
                }
                AnimationStage::Done => return true,
            }
        }
    }

    /// Describe the current visual position.
    #[must_use]
    pub fn view(&self, config: &GameConfig) -> AnimationView {
        let mut spaces = Vec::with_capacity(self.plan.path.len() + 1);
        spaces.push(self.plan.origin);
        spaces.extend(self.plan.path.iter().copied());
        let last = spaces.len() - 1;

        let (step, step_progress, sliding) = match self.stage {
            AnimationStage::Stepping { elapsed } if config.step_duration > 0.0 => {
                let position = elapsed / config.step_duration;
                let step = (position.floor() as usize).min(last);
                let progress = if step == last { 0.0 } else { position - step as f64 };
                (step, progress, None)
            }
            AnimationStage::Stepping { .. } => (0, 0.0, None),
            AnimationStage::SlidingHome { frog, elapsed } => {
                let progress = if config.slide_duration > 0.0 {
                    (elapsed / config.slide_duration).min(1.0)
                } else {
                    1.0
                };
                (last, 0.0, Some((frog, progress)))
            }
            AnimationStage::Done => (last, 0.0, None),
        };

        AnimationView {
            frog: self.plan.frog,
            spaces,
            step,
            step_progress,
            sliding,
        }
    }
}
