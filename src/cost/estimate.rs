//! Cost simulation and comparison functions

use crate::dose::DoseError;
use crate::protocol::{round_to, WEIGHT_GAIN_RATE_MONTHLY};

use super::error::CostError;
use super::types::{
    BloodworkCosts, CostEstimate, CostParams, DrugCosts, MonitoringCosts, Scenario, ScenarioCost,
    Supplier, SupplierCost, TreatmentParameters,
};

/// Estimate the total cost of a treatment course
///
/// Walks the course week by week, accumulating drug consumption at the
/// current daily dose. When weight gain is modeled, the tracked weight is
/// compounded by 5% on each exact 4-week boundary (after that week's
/// consumption is counted) and the daily dose re-derived from the rate
/// table. This is a discrete-step policy, not a continuous growth curve.
///
/// Monitoring cost is weekly, bloodwork monthly (ceil of weeks / 4).
pub fn estimate_treatment_cost(params: &CostParams) -> Result<CostEstimate, CostError> {
    if !params.weight.is_finite() || params.weight <= 0.0 {
        return Err(DoseError::InvalidWeight {
            weight: params.weight,
        }
        .into());
    }
    if params.duration_weeks == 0 {
        return Err(CostError::InvalidDuration {
            weeks: params.duration_weeks,
        });
    }
    if !params.drug_cost_per_mg.is_finite() || params.drug_cost_per_mg < 0.0 {
        return Err(CostError::InvalidDrugCost {
            cost: params.drug_cost_per_mg,
        });
    }

    let mg_per_kg = params.disease_form.rate();
    let mut daily_dose_mg = params.weight * mg_per_kg;
    let mut current_weight = params.weight;
    let mut total_drug_mg = 0.0;

    for week in 0..params.duration_weeks {
        total_drug_mg += daily_dose_mg * 7.0;

        // Growth steps land on exact 4-week boundaries only, after the
        // boundary week itself has been counted at the old dose.
        if params.include_weight_gain && week > 0 && week % 4 == 0 {
            current_weight *= 1.0 + WEIGHT_GAIN_RATE_MONTHLY;
            daily_dose_mg = current_weight * mg_per_kg;
        }
    }

    let number_of_tests = params.duration_weeks.div_ceil(4);
    let drug_cost = total_drug_mg * params.drug_cost_per_mg;
    let monitoring_cost = params.duration_weeks as f64 * params.weekly_monitoring_cost;
    let bloodwork_cost = number_of_tests as f64 * params.monthly_bloodwork_cost;
    let total_cost = drug_cost + monitoring_cost + bloodwork_cost;

    Ok(CostEstimate {
        treatment_parameters: TreatmentParameters {
            weight_start_kg: params.weight,
            weight_end_kg: round_to(current_weight, 2),
            disease_form: params.disease_form,
            dose_mg_per_kg: mg_per_kg,
            duration_weeks: params.duration_weeks,
            duration_days: params.duration_weeks * 7,
        },
        drug_costs: DrugCosts {
            total_mg_needed: total_drug_mg.round(),
            cost_per_mg: params.drug_cost_per_mg,
            total_drug_cost: round_to(drug_cost, 2),
        },
        monitoring_costs: MonitoringCosts {
            weekly_visits: params.duration_weeks,
            cost_per_visit: params.weekly_monitoring_cost,
            total_monitoring: round_to(monitoring_cost, 2),
        },
        bloodwork_costs: BloodworkCosts {
            number_of_tests,
            cost_per_test: params.monthly_bloodwork_cost,
            total_bloodwork: round_to(bloodwork_cost, 2),
        },
        total_estimated_cost: round_to(total_cost, 2),
        weekly_average: round_to(total_cost / params.duration_weeks as f64, 2),
    })
}

/// Run the cost model across named scenario overrides
///
/// Each scenario is merged onto the base parameters and estimated
/// independently; results keep input order.
pub fn compare_costs(
    base: &CostParams,
    scenarios: &[Scenario],
) -> Result<Vec<ScenarioCost>, CostError> {
    scenarios
        .iter()
        .map(|scenario| {
            let params = scenario.apply(base);
            Ok(ScenarioCost {
                name: scenario.name.clone(),
                estimate: estimate_treatment_cost(&params)?,
            })
        })
        .collect()
}

/// Compare the same course priced across drug suppliers
///
/// Varies only the per-mg drug price. Results are sorted ascending by
/// total cost; the sort is stable, so tied suppliers keep input order.
pub fn compare_suppliers(
    params: &CostParams,
    suppliers: &[Supplier],
) -> Result<Vec<SupplierCost>, CostError> {
    let mut results: Vec<SupplierCost> = suppliers
        .iter()
        .map(|supplier| {
            let mut priced = params.clone();
            priced.drug_cost_per_mg = supplier.cost_per_mg;
            let estimate = estimate_treatment_cost(&priced)?;

            Ok(SupplierCost {
                supplier_name: supplier.name.clone(),
                cost_per_mg: supplier.cost_per_mg,
                total_cost: estimate.total_estimated_cost,
                drug_cost: estimate.drug_costs.total_drug_cost,
                non_drug_cost: estimate.monitoring_costs.total_monitoring
                    + estimate.bloodwork_costs.total_bloodwork,
            })
        })
        .collect::<Result<_, CostError>>()?;

    results.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    Ok(results)
}
