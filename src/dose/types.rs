//! Dose calculation result types
//!
//! All types here are derived value objects: created fresh on every
//! calculation call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocol::DiseaseForm;

/// Complete dosing calculation for one patient
///
/// Produced by [`calculate_dose`](crate::dose::calculate_dose).
/// Milligram figures are rounded to 2 decimal places, volumes to 3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseResult {
    /// Patient weight (kg)
    pub weight_kg: f64,
    /// Disease form the rate was looked up for
    pub disease_form: DiseaseForm,
    /// Protocol rate (mg/kg/day)
    pub dose_mg_per_kg: f64,
    /// Total daily dose (mg)
    pub total_dose_mg: f64,
    /// Injection volume per dose (ml)
    pub volume_ml: f64,
    /// Drug concentration used for the volume (mg/ml)
    pub concentration_mg_ml: f64,
    /// Drug needed per week (mg, 7 doses)
    pub weekly_amount_mg: f64,
    /// Drug needed for the full 12-week course (mg, 84 doses)
    pub full_treatment_mg: f64,
    /// Standard course length (days)
    pub treatment_duration_days: u32,
}

impl fmt::Display for DoseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔═══════════════════════════════════════════════╗")?;
        writeln!(f, "║  GS-441524 Dosing Calculation                 ║")?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ Cat weight:        {:<26} ║", format!("{} kg", self.weight_kg))?;
        writeln!(f, "║ Disease form:      {:<26} ║", self.disease_form.to_string())?;
        writeln!(f, "║ Dose:              {:<26} ║", format!("{} mg/kg/day", self.dose_mg_per_kg))?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ Total daily dose:  {:<26} ║", format!("{} mg", self.total_dose_mg))?;
        writeln!(f, "║ Volume to inject:  {:<26} ║", format!("{} ml", self.volume_ml))?;
        writeln!(f, "║ Concentration:     {:<26} ║", format!("{} mg/ml", self.concentration_mg_ml))?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ Weekly amount:     {:<26} ║", format!("{} mg (7 doses)", self.weekly_amount_mg))?;
        writeln!(f, "║ 12-week treatment: {:<26} ║", format!("{} mg (84 doses)", self.full_treatment_mg))?;
        writeln!(f, "╚═══════════════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Dose recomputation triggered by a new weight reading
///
/// Produced by [`calculate_weight_adjustment`](crate::dose::calculate_weight_adjustment).
/// Holds prior weight and dose by value; the new dose scales the prior
/// dose proportionally rather than re-deriving it from the rate table,
/// so rounding in the prior dose carries forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightAdjustment {
    /// Weight the current dose was computed for (kg)
    pub previous_weight_kg: f64,
    /// New weight reading (kg)
    pub current_weight_kg: f64,
    /// Weight change in whole grams
    pub weight_change_g: i64,
    /// Weight change (%), 1 decimal place
    pub weight_change_percent: f64,
    /// Dose before adjustment (mg)
    pub previous_dose_mg: f64,
    /// Adjusted daily dose (mg)
    pub new_dose_mg: f64,
    /// Injection volume at the adjusted dose (ml)
    pub new_volume_ml: f64,
    /// Signed difference between new and previous dose (mg)
    pub dose_change_mg: f64,
}

impl fmt::Display for WeightAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Weight: {} kg → {} kg ({:+} g, {:+.1}%)",
            self.previous_weight_kg,
            self.current_weight_kg,
            self.weight_change_g,
            self.weight_change_percent
        )?;
        writeln!(
            f,
            "Dose:   {} mg → {} mg ({:+} mg, {} ml)",
            self.previous_dose_mg, self.new_dose_mg, self.dose_change_mg, self.new_volume_ml
        )?;
        Ok(())
    }
}

/// Oral ↔ injectable dose equivalence
///
/// Injectable GS-441524 has higher bioavailability than oral, so the
/// injectable equivalent of an oral dose is lower by the conversion ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OralConversion {
    /// Oral dose (mg)
    pub oral_dose_mg: f64,
    /// Injectable equivalent (mg)
    pub injectable_dose_mg: f64,
    /// Oral-to-injectable ratio used
    pub conversion_ratio: f64,
}
