//! The multi-pass LPA scheduler.
//!
//! One run fills shuffled (section, shift) slots in three passes: primary
//! pairing by ascending score, trio backfill for leftover slots, and forced
//! completion that tops up under-target auditors or reports a coverage
//! shortfall. The caller-owned pairing history is extended in place with
//! every pair formed.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Assignment, Auditor, AuditorRef, MAX_TEAM_SIZE, PairingHistory, PairingRecord, Period,
    ShiftCode,
};

use super::compatibility::is_shift_compatible;
use super::scoring::score_pair;
use super::summary::LoadSummary;

/// Input snapshot for one scheduling run.
///
/// Supplied fresh by the caller each period and read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Auditor roster. Inactive members are ignored defensively.
    pub auditors: Vec<Auditor>,
    /// Audit sections in play this period.
    pub sections: Vec<String>,
    /// Shift slots to cover per section.
    pub shifts: Vec<ShiftCode>,
    /// The month being scheduled.
    pub period: Period,
}

impl ScheduleInput {
    /// Checks the shape constraints callers must satisfy before a run.
    ///
    /// The engine itself never validates; invoked on degenerate input it
    /// degrades to an empty or short schedule. This helper is for callers
    /// (the HTTP layer among them) that want to reject bad requests up
    /// front.
    ///
    /// # Errors
    ///
    /// * [`EngineError::InvalidPeriod`] for an out-of-range month.
    /// * [`EngineError::RosterTooSmall`] with fewer than 2 active auditors.
    /// * [`EngineError::NoSections`] when the section list is empty.
    pub fn validate(&self) -> EngineResult<()> {
        Period::new(self.period.month, self.period.year)?;

        let active = self.auditors.iter().filter(|a| a.active).count();
        if active < 2 {
            return Err(EngineError::RosterTooSmall { active });
        }
        if self.sections.is_empty() {
            return Err(EngineError::NoSections);
        }
        Ok(())
    }
}

/// Non-fatal report that an auditor finished the run under target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageWarning {
    /// The auditor left short.
    pub auditor_id: Uuid,
    /// Display name for the operational log.
    pub name: String,
    /// Assignments actually received this run.
    pub assigned: u32,
    /// The per-auditor target for the run.
    pub target: u32,
}

/// Everything produced by one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Unique id for this run.
    pub schedule_id: Uuid,
    /// When the run was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the run.
    pub engine_version: String,
    /// The period that was scheduled.
    pub period: Period,
    /// Final assignment list, in creation order.
    pub assignments: Vec<Assignment>,
    /// Pairing records appended to the caller's history during this run.
    /// Trios never appear here; only 2-person pairings are recorded.
    pub new_pairings: Vec<PairingRecord>,
    /// Auditors left under target, in roster order.
    pub coverage: Vec<CoverageWarning>,
    /// Per-auditor load rows over the active roster.
    pub summary: LoadSummary,
    /// Wall-clock duration of the run in microseconds.
    pub duration_us: u64,
}

/// A (section, target shift) candidate considered once per run.
#[derive(Debug, Clone)]
struct Slot {
    section: String,
    shift: ShiftCode,
}

/// Mutable bookkeeping for one run.
struct RunState {
    counts: HashMap<Uuid, u32>,
    sections_seen: HashMap<Uuid, Vec<String>>,
    assignments: Vec<Assignment>,
    new_pairings: Vec<PairingRecord>,
}

impl RunState {
    fn new(roster: &[Auditor]) -> Self {
        RunState {
            counts: roster.iter().map(|a| (a.id, 0)).collect(),
            sections_seen: roster.iter().map(|a| (a.id, Vec::new())).collect(),
            assignments: Vec::new(),
            new_pairings: Vec::new(),
        }
    }

    fn count(&self, id: Uuid) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    fn under_target(&self, id: Uuid, target: u32) -> bool {
        self.count(id) < target
    }

    fn all_at_target(&self, roster: &[Auditor], target: u32) -> bool {
        roster.iter().all(|a| self.count(a.id) >= target)
    }

    /// True when `id` already audited `section` this run. Drives both the
    /// repeat penalty and the fresh-eyes preference.
    fn has_audited(&self, id: Uuid, section: &str) -> bool {
        self.sections_seen
            .get(&id)
            .is_some_and(|sections| sections.iter().any(|s| s == section))
    }

    /// Credits one assignment to the auditor and remembers the section.
    fn credit(&mut self, id: Uuid, section: &str) {
        *self.counts.entry(id).or_insert(0) += 1;
        self.sections_seen
            .entry(id)
            .or_default()
            .push(section.to_string());
    }

    fn slot_used(&self, slot: &Slot) -> bool {
        self.assignments
            .iter()
            .any(|a| a.section == slot.section && a.target_shift == slot.shift)
    }
}

/// The monthly LPA scheduler.
///
/// Holds only the scheduling policy; all run data arrives through
/// [`Scheduler::run`] and leaves in the [`ScheduleOutcome`], so one instance
/// can serve many independent runs.
///
/// # Example
///
/// ```
/// use lpa_engine::config::SchedulerConfig;
/// use lpa_engine::models::{Auditor, PairingHistory, Period, ShiftCode};
/// use lpa_engine::scheduling::{ScheduleInput, Scheduler};
/// use uuid::Uuid;
///
/// let make = |first: &str, shift| Auditor {
///     id: Uuid::new_v4(),
///     first_name: first.to_string(),
///     last_name: "Okafor".to_string(),
///     role: "Quality".to_string(),
///     shift,
///     active: true,
/// };
/// let input = ScheduleInput {
///     auditors: vec![make("Sam", ShiftCode::First), make("Lena", ShiftCode::First)],
///     sections: vec!["311".to_string()],
///     shifts: ShiftCode::ALL.to_vec(),
///     period: Period::new(3, 2026).unwrap(),
/// };
///
/// let scheduler = Scheduler::with_config(SchedulerConfig::default().with_seed(42));
/// let mut history = PairingHistory::new();
/// let outcome = scheduler.run(&input, &mut history);
///
/// assert_eq!(outcome.assignments.len(), 1);
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new()
    }
}

impl Scheduler {
    /// Creates a scheduler with the default policy.
    pub fn new() -> Self {
        Scheduler {
            config: SchedulerConfig::default(),
        }
    }

    /// Creates a scheduler with an explicit policy.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Scheduler { config }
    }

    /// The policy this scheduler runs under.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs one scheduling pass over the input, extending `history` in place
    /// with every 2-person pairing formed.
    ///
    /// Three passes over the shuffled slot universe:
    ///
    /// 1. primary pairing: each slot takes the cheapest eligible pair, with
    ///    fresh-section preference;
    /// 2. trio backfill: leftover slots take the first under-target trio with
    ///    a shift match (no history append for trios);
    /// 3. forced completion: under-target auditors join an existing team on
    ///    an exact shift match, else open an unused slot with another
    ///    under-target auditor, else are reported as a coverage shortfall.
    ///
    /// The run never fails: degenerate input produces an empty or short
    /// schedule plus warnings rather than an error.
    pub fn run(&self, input: &ScheduleInput, history: &mut PairingHistory) -> ScheduleOutcome {
        let started = Instant::now();

        // Inactive auditors never participate, whatever the caller sent.
        let roster: Vec<Auditor> = input
            .auditors
            .iter()
            .filter(|a| a.active)
            .cloned()
            .collect();

        info!(
            period = %input.period,
            auditors = roster.len(),
            sections = input.sections.len(),
            shifts = input.shifts.len(),
            "starting scheduling run"
        );

        let slots = self.build_slots(&input.sections, &input.shifts);
        let mut state = RunState::new(&roster);

        self.assign_primary_pairs(&slots, &roster, input.period, history, &mut state);
        self.backfill_trios(&slots, &roster, &mut state);
        let coverage = self.force_completion(&slots, &roster, input.period, history, &mut state);

        let summary = LoadSummary::calculate(&state.assignments, &roster);
        for row in &summary.auditors {
            debug!(
                auditor = %row.name,
                lpas = row.lpa_count,
                unique_sections = row.unique_sections,
                "auditor load"
            );
        }

        let duration_us = started.elapsed().as_micros() as u64;
        info!(
            period = %input.period,
            assignments = state.assignments.len(),
            new_pairings = state.new_pairings.len(),
            shortfalls = coverage.len(),
            duration_us,
            "scheduling run complete"
        );

        ScheduleOutcome {
            schedule_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            period: input.period,
            assignments: state.assignments,
            new_pairings: state.new_pairings,
            coverage,
            summary,
            duration_us,
        }
    }

    /// Builds the sections x shifts candidate universe in shuffled order.
    ///
    /// A fixed seed gives a reproducible order; otherwise the shuffle draws
    /// from OS entropy so no section or shift is systematically favored by
    /// list position.
    fn build_slots(&self, sections: &[String], shifts: &[ShiftCode]) -> Vec<Slot> {
        let mut slots: Vec<Slot> = sections
            .iter()
            .flat_map(|section| {
                shifts.iter().map(move |&shift| Slot {
                    section: section.clone(),
                    shift,
                })
            })
            .collect();

        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        slots.shuffle(&mut rng);
        slots
    }

    /// Primary pairing: every slot takes the cheapest eligible pair of
    /// under-target auditors, preferring pairs that bring at least one fresh
    /// set of eyes to the section. Stops early once the whole roster is at
    /// target.
    fn assign_primary_pairs(
        &self,
        slots: &[Slot],
        roster: &[Auditor],
        period: Period,
        history: &mut PairingHistory,
        state: &mut RunState,
    ) {
        let target = self.config.lpa_target;

        for slot in slots {
            if state.all_at_target(roster, target) {
                break;
            }

            let mut candidates: Vec<(usize, usize, u32)> = Vec::new();
            for i in 0..roster.len() {
                for j in (i + 1)..roster.len() {
                    let (a, b) = (&roster[i], &roster[j]);
                    if !state.under_target(a.id, target) || !state.under_target(b.id, target) {
                        continue;
                    }
                    if !is_shift_compatible(a.shift, b.shift, slot.shift) {
                        continue;
                    }

                    let mut total = score_pair(a, b, history, period, &self.config);
                    if state.has_audited(a.id, &slot.section) {
                        total += self.config.weights.repeat_section;
                    }
                    if state.has_audited(b.id, &slot.section) {
                        total += self.config.weights.repeat_section;
                    }
                    candidates.push((i, j, total));
                }
            }

            if candidates.is_empty() {
                continue;
            }

            // Stable sort: equal scores keep enumeration order, so selection
            // is deterministic for a fixed slot order.
            candidates.sort_by_key(|&(_, _, score)| score);

            let &(i, j, _) = candidates
                .iter()
                .find(|&&(i, j, _)| {
                    !state.has_audited(roster[i].id, &slot.section)
                        || !state.has_audited(roster[j].id, &slot.section)
                })
                .unwrap_or(&candidates[0]);

            self.commit_pair(&roster[i], &roster[j], slot, period, history, state);
        }
    }

    /// Trio backfill: leftover slots take the first trio of under-target
    /// auditors containing a shift match. Trios never append pairing
    /// history.
    fn backfill_trios(&self, slots: &[Slot], roster: &[Auditor], state: &mut RunState) {
        for slot in slots {
            let needing: Vec<&Auditor> = roster
                .iter()
                .filter(|a| state.under_target(a.id, self.config.lpa_target))
                .collect();
            if needing.len() < 3 {
                continue;
            }
            if state.slot_used(slot) {
                continue;
            }

            if let Some(trio) = find_trio(&needing, slot.shift) {
                state.assignments.push(Assignment {
                    section: slot.section.clone(),
                    target_shift: slot.shift,
                    auditors: trio.iter().map(|a| AuditorRef::from(*a)).collect(),
                });
                for member in trio {
                    state.credit(member.id, &slot.section);
                }
            }
        }
    }

    /// Forced completion: tops up each under-target auditor, or reports the
    /// shortfall. Each loop iteration either credits one assignment or
    /// breaks with a warning, so the loop always terminates.
    fn force_completion(
        &self,
        slots: &[Slot],
        roster: &[Auditor],
        period: Period,
        history: &mut PairingHistory,
        state: &mut RunState,
    ) -> Vec<CoverageWarning> {
        let target = self.config.lpa_target;
        let mut coverage = Vec::new();

        for auditor in roster {
            while state.under_target(auditor.id, target) {
                if self.join_existing(auditor, state) {
                    continue;
                }
                if self.open_new_slot(auditor, slots, roster, period, history, state) {
                    continue;
                }

                let assigned = state.count(auditor.id);
                warn!(
                    auditor = %auditor.display_name(),
                    assigned,
                    target,
                    "auditor left under LPA target"
                );
                coverage.push(CoverageWarning {
                    auditor_id: auditor.id,
                    name: auditor.display_name(),
                    assigned,
                    target,
                });
                break;
            }
        }

        coverage
    }

    /// Joins an existing team with a free seat. Joining requires the
    /// auditor's own shift to match the team's target shift exactly.
    fn join_existing(&self, auditor: &Auditor, state: &mut RunState) -> bool {
        for idx in 0..state.assignments.len() {
            let assignment = &state.assignments[idx];
            if assignment.includes(auditor.id) {
                continue;
            }
            if assignment.team_size() >= MAX_TEAM_SIZE {
                continue;
            }
            if assignment.target_shift != auditor.shift {
                continue;
            }

            let section = assignment.section.clone();
            state.assignments[idx].auditors.push(AuditorRef::from(auditor));
            state.credit(auditor.id, &section);
            return true;
        }
        false
    }

    /// Opens an unused slot with another under-target auditor. Like primary
    /// pairing this records the pairing in history.
    fn open_new_slot(
        &self,
        auditor: &Auditor,
        slots: &[Slot],
        roster: &[Auditor],
        period: Period,
        history: &mut PairingHistory,
        state: &mut RunState,
    ) -> bool {
        for slot in slots {
            if state.slot_used(slot) {
                continue;
            }
            for other in roster {
                if other.id == auditor.id {
                    continue;
                }
                if !state.under_target(other.id, self.config.lpa_target) {
                    continue;
                }
                if !is_shift_compatible(auditor.shift, other.shift, slot.shift) {
                    continue;
                }

                self.commit_pair(auditor, other, slot, period, history, state);
                return true;
            }
        }
        false
    }

    /// Creates a 2-person assignment, credits both members, and appends the
    /// pairing to history and to the run's new-pairing list.
    fn commit_pair(
        &self,
        a: &Auditor,
        b: &Auditor,
        slot: &Slot,
        period: Period,
        history: &mut PairingHistory,
        state: &mut RunState,
    ) {
        state.assignments.push(Assignment {
            section: slot.section.clone(),
            target_shift: slot.shift,
            auditors: vec![AuditorRef::from(a), AuditorRef::from(b)],
        });
        state.credit(a.id, &slot.section);
        state.credit(b.id, &slot.section);

        let record = PairingRecord::new(a.id, b.id, period);
        history.record(record.clone());
        state.new_pairings.push(record);
    }
}

/// First 3-combination, in index order, where at least one member works the
/// target shift.
fn find_trio<'a>(needing: &[&'a Auditor], target: ShiftCode) -> Option<[&'a Auditor; 3]> {
    for x in 0..needing.len() {
        for y in (x + 1)..needing.len() {
            for z in (y + 1)..needing.len() {
                let trio = [needing[x], needing[y], needing[z]];
                if trio.iter().any(|member| member.shift == target) {
                    return Some(trio);
                }
            }
        }
    }
    None
}
