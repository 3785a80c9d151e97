//! Random walk that traces a waterline from one border point to another.
//!
//! The walk is a small state machine. `Walking` accepts one segment per step;
//! a step whose candidate leaves the square moves to `Closing`, which clamps
//! that last segment onto the border and finishes in `Done`.
//!
//! A step that runs out of attempts has usually boxed itself in against its
//! own path. Up to `max_backtracks` times per walk, the walk drops its most
//! recent segments and carries on from an earlier point; each backtrack goes
//! one segment deeper than the last.

use rand::Rng;

use super::WaterlineError;
use super::sampler::WeightedDirectionSampler;
use super::weights::{HeadingWeightModel, StepContext};
use crate::config::WaterlineConfig;
use crate::domain::{Heading, Point, Segment, Waterline};
use crate::geometry::{Square, segments_intersect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkPhase {
    Walking,
    /// Holds the accepted exit segment before its end is clamped
    Closing { exit: Segment, heading: Heading },
    Done,
}

/// Everything the walk carries from one step to the next
#[derive(Debug, Clone, PartialEq)]
pub struct WalkState {
    pub phase: WalkPhase,
    pub start: Point,
    pub current: Point,
    pub previous_heading: Option<Heading>,
    pub accumulated_length: f64,
    pub segments: Vec<Segment>,
    /// Heading of each accepted segment
    pub headings: Vec<Heading>,
    pub backtracks: u32,
}

impl WalkState {
    pub fn new(start: Point) -> Self {
        Self {
            phase: WalkPhase::Walking,
            start,
            current: start,
            previous_heading: None,
            accumulated_length: 0.0,
            segments: Vec::new(),
            headings: Vec::new(),
            backtracks: 0,
        }
    }

    fn accept(mut self, segment: Segment, heading: Heading, phase: WalkPhase) -> Self {
        self.accumulated_length += segment.length();
        self.current = segment.end;
        self.previous_heading = Some(heading);
        self.segments.push(segment);
        self.headings.push(heading);
        self.phase = phase;
        self
    }

    /// Drop the last `depth` segments and resume from where they began
    fn retreat(mut self, depth: usize) -> Self {
        let keep = self.segments.len().saturating_sub(depth);
        self.segments.truncate(keep);
        self.headings.truncate(keep);
        self.current = self.segments.last().map_or(self.start, |s| s.end);
        self.previous_heading = self.headings.last().copied();
        self.accumulated_length = self.segments.iter().map(Segment::length).sum();
        self
    }
}

/// Why a candidate segment was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    TooShort,
    StartSide,
    Collision,
}

pub struct RandomWalkPathBuilder<'a> {
    config: &'a WaterlineConfig,
    model: HeadingWeightModel,
    square: Square,
}

impl<'a> RandomWalkPathBuilder<'a> {
    pub fn new(config: &'a WaterlineConfig, radius: f64) -> Self {
        Self {
            config,
            model: HeadingWeightModel::new(config),
            square: Square::new(radius),
        }
    }

    fn min_length(&self) -> f64 {
        self.config.min_length_ratio * self.square.radius
    }

    /// Walk from `start` (on the border) until the path exits the square
    pub fn build<R: Rng + ?Sized>(
        &self,
        start: Point,
        rng: &mut R,
    ) -> Result<Waterline, WaterlineError> {
        if !self.square.is_on_border(start) {
            return Err(WaterlineError::StartOffBorder { point: start });
        }

        let mut state = WalkState::new(start);
        while state.phase != WalkPhase::Done {
            state = self.step(state, rng)?;
        }

        log::info!(
            "Waterline finished: {} segments, length {:.2}",
            state.segments.len(),
            state.accumulated_length
        );
        Ok(Waterline::new(state.segments))
    }

    /// Advance the walk by one transition
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: WalkState,
        rng: &mut R,
    ) -> Result<WalkState, WaterlineError> {
        match state.phase {
            WalkPhase::Walking => self.walk(state, rng),
            WalkPhase::Closing { exit, heading } => {
                let clamped = exit.with_end(self.square.clamp(exit.end));
                Ok(state.accept(clamped, heading, WalkPhase::Done))
            }
            WalkPhase::Done => Ok(state),
        }
    }

    fn walk<R: Rng + ?Sized>(
        &self,
        state: WalkState,
        rng: &mut R,
    ) -> Result<WalkState, WaterlineError> {
        let weights = self.model.build(&StepContext {
            start: state.start,
            current: state.current,
            previous_heading: state.previous_heading,
            accumulated_length: state.accumulated_length,
            radius: self.square.radius,
        });
        if weights.is_empty() {
            return Err(WaterlineError::DegenerateWeightMap {
                point: state.current,
            });
        }
        let sampler = WeightedDirectionSampler::new(&weights)?;

        for _ in 0..self.config.max_attempts {
            let heading = sampler.sample(rng);
            let distance = self.sample_distance(rng);
            let end = heading.project(state.current, distance);
            let candidate = Segment::new(state.current, end);

            if self.square.contains(end) {
                if self.collides(&state.segments, &candidate) {
                    continue;
                }
                log::trace!(
                    "accepted segment to ({:.3}, {:.3}) heading {}",
                    end.x,
                    end.y,
                    heading.degrees()
                );
                return Ok(state.accept(candidate, heading, WalkPhase::Walking));
            }

            match self.check_exit(&state, &candidate) {
                Ok(()) => {
                    let mut state = state;
                    state.phase = WalkPhase::Closing {
                        exit: candidate,
                        heading,
                    };
                    return Ok(state);
                }
                Err(reason) => {
                    log::trace!("rejected exit candidate: {:?}", reason);
                }
            }
        }

        if state.backtracks < self.config.max_backtracks && !state.segments.is_empty() {
            let mut state = state;
            state.backtracks += 1;
            log::debug!(
                "walk stuck at ({:.3}, {:.3}), stepping back {} segments",
                state.current.x,
                state.current.y,
                state.backtracks
            );
            let depth = state.backtracks as usize;
            return Ok(state.retreat(depth));
        }

        log::debug!(
            "walk stalled at ({:.3}, {:.3}) after {} attempts",
            state.current.x,
            state.current.y,
            self.config.max_attempts
        );
        Err(WaterlineError::PathGenerationStalled {
            attempts: self.config.max_attempts,
            segments: state.segments.len(),
        })
    }

    fn sample_distance<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.config.max_step > self.config.min_step {
            rng.gen_range(self.config.min_step..self.config.max_step)
        } else {
            self.config.min_step
        }
    }

    /// Validate a candidate that leaves the square, judged by its clamped form
    fn check_exit(&self, state: &WalkState, candidate: &Segment) -> Result<(), Rejection> {
        let clamped = candidate.with_end(self.square.clamp(candidate.end));

        if state.accumulated_length + clamped.length() < self.min_length() {
            return Err(Rejection::TooShort);
        }
        if self.square.share_side(state.start, clamped.end) {
            return Err(Rejection::StartSide);
        }
        if self.collides(&state.segments, &clamped) {
            return Err(Rejection::Collision);
        }
        Ok(())
    }

    /// Test against every accepted segment except the last, which shares the candidate's start
    fn collides(&self, segments: &[Segment], candidate: &Segment) -> bool {
        let checked = segments.len().saturating_sub(1);
        segments[..checked]
            .iter()
            .filter(|s| bounds_overlap(s, candidate))
            .any(|s| segments_intersect(s.start, s.end, candidate.start, candidate.end))
    }
}

fn bounds_overlap(a: &Segment, b: &Segment) -> bool {
    a.start.x.min(a.end.x) <= b.start.x.max(b.end.x)
        && b.start.x.min(b.end.x) <= a.start.x.max(a.end.x)
        && a.start.y.min(a.end.y) <= b.start.y.max(b.end.y)
        && b.start.y.min(b.end.y) <= a.start.y.max(a.end.y)
}
