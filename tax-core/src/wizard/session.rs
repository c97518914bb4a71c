use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::normalize_amount;
use crate::calculations::{TaxEstimator, family};
use crate::models::{FamilyProfile, TaxBracket, TaxInput, TaxSummary};
use crate::wizard::patches::{
    DonationsPatch, FundsPatch, IncomePatch, InsurancePatch, OtherFundsPatch, WithheldPatch,
};
use crate::wizard::step::WizardStep;

/// Navigation errors. Data entry itself can never fail; only moving through
/// the steps is guarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// Monthly salary is the one required field; the income step cannot be
    /// left until it holds a positive amount.
    #[error("monthly salary is required before continuing")]
    SalaryRequired,

    /// Jumping is only allowed to steps whose predecessors are all complete.
    #[error("step '{}' has not been reached yet", .0.title())]
    StepNotReached(WizardStep),

    /// The withheld step ends with a calculation, not a plain advance.
    #[error("the last data-entry step is confirmed by calculating, not by advancing")]
    CalculationRequired,

    /// The summary is the end of the line.
    #[error("no step after the summary")]
    AtSummary,

    /// Calculating from any step other than the withheld step.
    #[error("the summary can only be calculated from the tax-withheld step")]
    NotReadyToCalculate,
}

/// One in-memory wizard run.
///
/// Owns the full input record and the structured family slice, tracks the
/// active step and which steps have been completed, and holds the computed
/// summary once the flow finishes. Dropping or resetting the session
/// discards everything; no part of it is ever written anywhere.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    active: WizardStep,
    completed: [bool; WizardStep::COUNT],
    input: TaxInput,
    family: FamilyProfile,
    summary: Option<TaxSummary>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> WizardStep {
        self.active
    }

    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed[step.index()]
    }

    pub fn input(&self) -> &TaxInput {
        &self.input
    }

    pub fn family(&self) -> &FamilyProfile {
        &self.family
    }

    /// The family step edits its structured slice directly.
    pub fn family_mut(&mut self) -> &mut FamilyProfile {
        &mut self.family
    }

    /// The computed summary, present only after a successful calculation.
    pub fn summary(&self) -> Option<&TaxSummary> {
        self.summary.as_ref()
    }

    // --- per-step data entry -------------------------------------------------

    pub fn apply_income(&mut self, patch: IncomePatch) {
        patch.apply(&mut self.input);
    }

    pub fn apply_funds(&mut self, patch: FundsPatch) {
        patch.apply(&mut self.input);
    }

    pub fn apply_insurance(&mut self, patch: InsurancePatch) {
        patch.apply(&mut self.input);
    }

    pub fn apply_other_funds(&mut self, patch: OtherFundsPatch) {
        patch.apply(&mut self.input);
    }

    pub fn apply_donations(&mut self, patch: DonationsPatch) {
        patch.apply(&mut self.input);
    }

    pub fn apply_withheld(&mut self, patch: WithheldPatch) {
        patch.apply(&mut self.input);
    }

    // --- navigation ----------------------------------------------------------

    /// True when every step before `step` has been completed.
    pub fn can_enter(&self, step: WizardStep) -> bool {
        self.completed[..step.index()].iter().all(|&done| done)
    }

    /// Moves forward one step, marking the current step complete.
    ///
    /// Leaving the income step requires a positive monthly salary; leaving
    /// the family step folds the structured profile into the single
    /// allowance figure the estimator reads. The withheld step cannot be
    /// advanced past — it is confirmed by [`calculate`](Self::calculate).
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        match self.active {
            WizardStep::Summary => return Err(WizardError::AtSummary),
            WizardStep::Withheld => return Err(WizardError::CalculationRequired),
            WizardStep::Income if !self.has_required_income() => {
                return Err(WizardError::SalaryRequired);
            }
            WizardStep::Family => self.fold_family(),
            _ => {}
        }

        let next = self.active.next().ok_or(WizardError::AtSummary)?;
        self.completed[self.active.index()] = true;
        self.active = next;
        debug!(step = next.title(), "wizard advanced");
        Ok(next)
    }

    /// Moves back one step. Never blocked; at the income step it stays put.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.active.prev() {
            self.active = prev;
        }
        self.active
    }

    /// Jumps directly to a step all of whose predecessors are complete.
    pub fn jump_to(&mut self, step: WizardStep) -> Result<(), WizardError> {
        if !self.can_enter(step) {
            return Err(WizardError::StepNotReached(step));
        }
        self.active = step;
        Ok(())
    }

    /// Runs the estimator and moves to the summary step.
    ///
    /// Only valid from the withheld step. The family aggregate is refolded
    /// first so family edits made after the family step was left still
    /// count.
    pub fn calculate(&mut self, brackets: &[TaxBracket]) -> Result<&TaxSummary, WizardError> {
        if self.active != WizardStep::Withheld {
            return Err(WizardError::NotReadyToCalculate);
        }
        self.fold_family();

        let summary = TaxEstimator::new(brackets).calculate(&self.input);
        self.completed[WizardStep::Withheld.index()] = true;
        self.active = WizardStep::Summary;
        debug!(net_tax = %summary.net_tax, "wizard calculation complete");
        Ok(self.summary.insert(summary))
    }

    /// Discards everything accumulated so far and returns to the first step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn has_required_income(&self) -> bool {
        normalize_amount(&self.input.salary_per_month) > Decimal::ZERO
    }

    fn fold_family(&mut self) {
        self.input.family_total = family::deduction_total(&self.family).to_string();
    }
}
