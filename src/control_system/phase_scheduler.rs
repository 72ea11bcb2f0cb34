use log::{debug, info};

use crate::flow_analyzer::priority::{best_phase, phase_pressure};
use crate::simulation_engine::intersections::{Intersection, LightState};
use crate::simulation_engine::phases::Phase;

/// Departing steps a phase holds green before the scheduler reconsiders it.
/// Idle steps do not count against this budget.
pub const MIN_GREEN_STEPS: u32 = 5;

/// Where the scheduler is in its green/yellow cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    /// No step has run yet; every head is red.
    Uninitialized,
    /// The phase holds green, possibly idling over an empty junction.
    SteadyGreen(Phase),
    /// `from` shows yellow, `to` shows redyellow; the swap completes on the
    /// next step.
    Transitioning { from: Phase, to: Phase },
}

/// Decides which phase holds right-of-way and drives the signal heads
/// through green, yellow and redyellow. One scheduler lives beside each
/// junction model; there is no shared or process-wide state.
#[derive(Debug, Clone)]
pub struct PhaseScheduler {
    state: SchedulerState,
    /// Steps since the current phase went green in which at least one
    /// vehicle departed.
    cycle_elapsed: u32,
}

impl PhaseScheduler {
    pub fn new() -> Self {
        PhaseScheduler {
            state: SchedulerState::Uninitialized,
            cycle_elapsed: 0,
        }
    }

    /// The phase currently holding right-of-way, if any. During a
    /// transition this is still the outgoing phase.
    pub fn current_phase(&self) -> Option<Phase> {
        match self.state {
            SchedulerState::Uninitialized => None,
            SchedulerState::SteadyGreen(phase) => Some(phase),
            SchedulerState::Transitioning { from, .. } => Some(from),
        }
    }

    pub fn cycle_elapsed(&self) -> u32 {
        self.cycle_elapsed
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, SchedulerState::Transitioning { .. })
    }

    /// Grants the first green. Runs at the top of the first step, after
    /// aging, so the winning phase already releases traffic that step.
    pub fn ensure_initialized(&mut self, intersection: &mut Intersection) {
        if self.state != SchedulerState::Uninitialized {
            return;
        }
        let phase = best_phase(intersection);
        intersection.reset_lights();
        intersection.set_phase_lights(phase, LightState::Green);
        self.state = SchedulerState::SteadyGreen(phase);
        self.cycle_elapsed = 0;
        info!("initial green phase: {:?}", phase);
    }

    /// Consumes one step of green budget if the step released anything.
    pub fn record_step(&mut self, departures: usize) {
        if departures > 0 {
            self.cycle_elapsed += 1;
            debug!(
                "cycle elapsed: {}/{}",
                self.cycle_elapsed, MIN_GREEN_STEPS
            );
        }
    }

    /// Runs the end-of-step scheduling logic: finish a pending transition,
    /// or decide whether the steady phase keeps, extends or yields its
    /// green. Called after departures have been released and recorded.
    pub fn update(&mut self, intersection: &mut Intersection) {
        match self.state {
            // The step engine initializes before updating.
            SchedulerState::Uninitialized => {}
            SchedulerState::Transitioning { from, to } => {
                self.complete_transition(intersection, from, to);
            }
            SchedulerState::SteadyGreen(phase) => {
                self.evaluate_steady(intersection, phase);
            }
        }
    }

    /// Finishes the yellow/redyellow interval. The winner is picked fresh
    /// here rather than reusing the phase announced with redyellow, since
    /// queue contents may have shifted while the lights were changing.
    fn complete_transition(&mut self, intersection: &mut Intersection, from: Phase, to: Phase) {
        let next = best_phase(intersection);
        if next != to {
            debug!("transition target moved from {:?} to {:?} during yellow", to, next);
        }
        intersection.reset_lights();
        intersection.set_phase_lights(next, LightState::Green);
        self.state = SchedulerState::SteadyGreen(next);
        self.cycle_elapsed = 0;
        info!("phase changed: {:?} -> {:?}", from, next);
    }

    fn evaluate_steady(&mut self, intersection: &mut Intersection, current: Phase) {
        let min_green_spent = self.cycle_elapsed >= MIN_GREEN_STEPS - 1;
        let pressure = phase_pressure(intersection, current);
        if !min_green_spent && pressure > 1 {
            return;
        }

        let best = best_phase(intersection);
        if best == current && min_green_spent {
            // Renewal: the phase is still the strongest, so it keeps green
            // for another full budget instead of cycling away and back.
            self.cycle_elapsed = 0;
            info!(
                "extending {:?} for {} more departing steps",
                current, MIN_GREEN_STEPS
            );
        } else if best != current || pressure == 0 {
            // An empty winner never takes right-of-way away; the lights
            // stay as they are until real demand appears.
            if phase_pressure(intersection, best) > 0 {
                self.begin_transition(intersection, current, best);
            }
        }
    }

    /// Starts the one-step changeover: outgoing yellow, incoming redyellow.
    /// An incoming left-turn phase already shows its perpendicular right
    /// arrows here, because arrows accompany any non-red display.
    fn begin_transition(&mut self, intersection: &mut Intersection, from: Phase, to: Phase) {
        intersection.reset_lights();
        intersection.set_phase_lights(from, LightState::Yellow);
        intersection.set_phase_lights(to, LightState::RedYellow);
        self.state = SchedulerState::Transitioning { from, to };
        info!("preparing phase change: {:?} -> {:?}", from, to);
    }
}

impl Default for PhaseScheduler {
    fn default() -> Self {
        PhaseScheduler::new()
    }
}
