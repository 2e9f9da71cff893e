//! Cost estimation parameter and result types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocol::{DiseaseForm, TREATMENT_DURATION_WEEKS};

/// Cost estimation parameters
///
/// Construct with [`CostParams::new`] and adjust with the `with_*`
/// methods; unset fields keep protocol defaults (12 weeks, no monitoring
/// or bloodwork costs, weight gain modeled).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    /// Cat weight at treatment start (kg)
    pub weight: f64,
    /// Disease form determining the dosing rate
    pub disease_form: DiseaseForm,
    /// Treatment duration in weeks (default: 12)
    pub duration_weeks: usize,
    /// Drug cost per mg of GS-441524
    pub drug_cost_per_mg: f64,
    /// Weekly vet visit cost (default: 0)
    pub weekly_monitoring_cost: f64,
    /// Monthly bloodwork cost (default: 0)
    pub monthly_bloodwork_cost: f64,
    /// Model juvenile weight gain during the course (default: true)
    pub include_weight_gain: bool,
}

impl CostParams {
    /// Create parameters with protocol defaults for everything but the
    /// weight, disease form, and drug price
    pub fn new(weight: f64, disease_form: DiseaseForm, drug_cost_per_mg: f64) -> Self {
        Self {
            weight,
            disease_form,
            duration_weeks: TREATMENT_DURATION_WEEKS,
            drug_cost_per_mg,
            weekly_monitoring_cost: 0.0,
            monthly_bloodwork_cost: 0.0,
            include_weight_gain: true,
        }
    }

    /// Set treatment duration in weeks
    pub fn with_duration_weeks(mut self, weeks: usize) -> Self {
        self.duration_weeks = weeks;
        self
    }

    /// Set the weekly vet visit cost
    pub fn with_weekly_monitoring_cost(mut self, cost: f64) -> Self {
        self.weekly_monitoring_cost = cost;
        self
    }

    /// Set the monthly bloodwork cost
    pub fn with_monthly_bloodwork_cost(mut self, cost: f64) -> Self {
        self.monthly_bloodwork_cost = cost;
        self
    }

    /// Enable or disable weight-gain modeling
    pub fn with_weight_gain(mut self, include: bool) -> Self {
        self.include_weight_gain = include;
        self
    }
}

/// Treatment parameters echoed back with the estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentParameters {
    /// Weight at treatment start (kg)
    pub weight_start_kg: f64,
    /// Simulated weight at treatment end (kg)
    pub weight_end_kg: f64,
    /// Disease form
    pub disease_form: DiseaseForm,
    /// Protocol rate (mg/kg/day)
    pub dose_mg_per_kg: f64,
    /// Duration (weeks)
    pub duration_weeks: usize,
    /// Duration (days)
    pub duration_days: usize,
}

/// Drug cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugCosts {
    /// Total drug needed over the course, in whole mg
    pub total_mg_needed: f64,
    /// Cost per mg
    pub cost_per_mg: f64,
    /// Total drug cost
    pub total_drug_cost: f64,
}

/// Monitoring (vet visit) cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringCosts {
    /// Number of weekly visits
    pub weekly_visits: usize,
    /// Cost per visit
    pub cost_per_visit: f64,
    /// Total monitoring cost
    pub total_monitoring: f64,
}

/// Bloodwork cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodworkCosts {
    /// Number of monthly tests (ceil of weeks / 4)
    pub number_of_tests: usize,
    /// Cost per test
    pub cost_per_test: f64,
    /// Total bloodwork cost
    pub total_bloodwork: f64,
}

/// Complete cost estimate for a treatment course
///
/// All monetary figures are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Simulation parameters and end state
    pub treatment_parameters: TreatmentParameters,
    /// Drug cost breakdown
    pub drug_costs: DrugCosts,
    /// Monitoring cost breakdown
    pub monitoring_costs: MonitoringCosts,
    /// Bloodwork cost breakdown
    pub bloodwork_costs: BloodworkCosts,
    /// Sum of all cost components
    pub total_estimated_cost: f64,
    /// Total cost divided by duration in weeks
    pub weekly_average: f64,
}

impl fmt::Display for CostEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.treatment_parameters;
        writeln!(f, "╔═══════════════════════════════════════════════╗")?;
        writeln!(f, "║  FIP Treatment Cost Estimate                  ║")?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ Weight (start): {:<29} ║", format!("{} kg", p.weight_start_kg))?;
        writeln!(f, "║ Weight (end):   {:<29} ║", format!("{} kg", p.weight_end_kg))?;
        writeln!(f, "║ Disease form:   {:<29} ║", p.disease_form.to_string())?;
        writeln!(f, "║ Duration:       {:<29} ║", format!("{} weeks", p.duration_weeks))?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ Drug needed:    {:<29} ║", format!("{} mg", self.drug_costs.total_mg_needed))?;
        writeln!(f, "║ Drug cost:      {:<29} ║", format!("${}", self.drug_costs.total_drug_cost))?;
        writeln!(f, "║ Monitoring:     {:<29} ║", format!("${}", self.monitoring_costs.total_monitoring))?;
        writeln!(f, "║ Bloodwork:      {:<29} ║", format!("${}", self.bloodwork_costs.total_bloodwork))?;
        writeln!(f, "╠═══════════════════════════════════════════════╣")?;
        writeln!(f, "║ TOTAL ESTIMATE: {:<29} ║", format!("${}", self.total_estimated_cost))?;
        writeln!(f, "║ Weekly average: {:<29} ║", format!("${}", self.weekly_average))?;
        writeln!(f, "╚═══════════════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Named set of parameter overrides for [`compare_costs`](crate::cost::compare_costs)
///
/// Unset fields fall through to the base parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario label carried into the result
    pub name: String,
    /// Override for starting weight (kg)
    pub weight: Option<f64>,
    /// Override for disease form
    pub disease_form: Option<DiseaseForm>,
    /// Override for duration (weeks)
    pub duration_weeks: Option<usize>,
    /// Override for drug cost per mg
    pub drug_cost_per_mg: Option<f64>,
    /// Override for weekly monitoring cost
    pub weekly_monitoring_cost: Option<f64>,
    /// Override for monthly bloodwork cost
    pub monthly_bloodwork_cost: Option<f64>,
    /// Override for weight-gain modeling
    pub include_weight_gain: Option<bool>,
}

impl Scenario {
    /// Create an empty scenario with the given label
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Override the starting weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Override the disease form
    pub fn with_disease_form(mut self, form: DiseaseForm) -> Self {
        self.disease_form = Some(form);
        self
    }

    /// Override the treatment duration
    pub fn with_duration_weeks(mut self, weeks: usize) -> Self {
        self.duration_weeks = Some(weeks);
        self
    }

    /// Override the drug cost per mg
    pub fn with_drug_cost_per_mg(mut self, cost: f64) -> Self {
        self.drug_cost_per_mg = Some(cost);
        self
    }

    /// Override the weekly monitoring cost
    pub fn with_weekly_monitoring_cost(mut self, cost: f64) -> Self {
        self.weekly_monitoring_cost = Some(cost);
        self
    }

    /// Override the monthly bloodwork cost
    pub fn with_monthly_bloodwork_cost(mut self, cost: f64) -> Self {
        self.monthly_bloodwork_cost = Some(cost);
        self
    }

    /// Override weight-gain modeling
    pub fn with_weight_gain(mut self, include: bool) -> Self {
        self.include_weight_gain = Some(include);
        self
    }

    /// Merge these overrides onto a base parameter set
    pub(crate) fn apply(&self, base: &CostParams) -> CostParams {
        CostParams {
            weight: self.weight.unwrap_or(base.weight),
            disease_form: self.disease_form.unwrap_or(base.disease_form),
            duration_weeks: self.duration_weeks.unwrap_or(base.duration_weeks),
            drug_cost_per_mg: self.drug_cost_per_mg.unwrap_or(base.drug_cost_per_mg),
            weekly_monitoring_cost: self
                .weekly_monitoring_cost
                .unwrap_or(base.weekly_monitoring_cost),
            monthly_bloodwork_cost: self
                .monthly_bloodwork_cost
                .unwrap_or(base.monthly_bloodwork_cost),
            include_weight_gain: self.include_weight_gain.unwrap_or(base.include_weight_gain),
        }
    }
}

/// One estimate from a scenario comparison, tagged with its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCost {
    /// Scenario label
    pub name: String,
    /// Full estimate for the merged parameters
    pub estimate: CostEstimate,
}

/// A drug supplier with its per-mg price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier label
    pub name: String,
    /// Cost per mg of GS-441524
    pub cost_per_mg: f64,
}

impl Supplier {
    /// Create a supplier entry
    pub fn new(name: impl Into<String>, cost_per_mg: f64) -> Self {
        Self {
            name: name.into(),
            cost_per_mg,
        }
    }
}

/// Cost summary for one supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierCost {
    /// Supplier label
    pub supplier_name: String,
    /// Cost per mg for this supplier
    pub cost_per_mg: f64,
    /// Total estimated course cost
    pub total_cost: f64,
    /// Drug component of the total
    pub drug_cost: f64,
    /// Monitoring plus bloodwork component of the total
    pub non_drug_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let params = CostParams::new(3.0, DiseaseForm::Wet, 0.5);
        assert_eq!(params.duration_weeks, 12);
        assert_eq!(params.weekly_monitoring_cost, 0.0);
        assert_eq!(params.monthly_bloodwork_cost, 0.0);
        assert!(params.include_weight_gain);
    }

    #[test]
    fn test_params_builder() {
        let params = CostParams::new(3.0, DiseaseForm::Wet, 0.5)
            .with_duration_weeks(8)
            .with_weekly_monitoring_cost(50.0)
            .with_monthly_bloodwork_cost(150.0)
            .with_weight_gain(false);
        assert_eq!(params.duration_weeks, 8);
        assert_eq!(params.weekly_monitoring_cost, 50.0);
        assert_eq!(params.monthly_bloodwork_cost, 150.0);
        assert!(!params.include_weight_gain);
    }

    #[test]
    fn test_scenario_apply_merges_overrides() {
        let base = CostParams::new(3.0, DiseaseForm::Wet, 0.5);
        let scenario = Scenario::new("neuro")
            .with_disease_form(DiseaseForm::Neurological)
            .with_duration_weeks(16);

        let merged = scenario.apply(&base);
        assert_eq!(merged.disease_form, DiseaseForm::Neurological);
        assert_eq!(merged.duration_weeks, 16);
        // untouched fields fall through
        assert_eq!(merged.weight, 3.0);
        assert_eq!(merged.drug_cost_per_mg, 0.5);
    }
}
