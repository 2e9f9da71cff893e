//! Dose calculation functions

use crate::protocol::{round_to, DiseaseForm, TREATMENT_DURATION_DAYS};

use super::error::DoseError;
use super::types::{DoseResult, OralConversion, WeightAdjustment};

fn validate_weight(weight: f64) -> Result<(), DoseError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(DoseError::InvalidWeight { weight });
    }
    Ok(())
}

fn validate_concentration(concentration: f64) -> Result<(), DoseError> {
    if !concentration.is_finite() || concentration <= 0.0 {
        return Err(DoseError::InvalidConcentration { concentration });
    }
    Ok(())
}

/// Calculate the GS-441524 dose for a patient
///
/// Looks up the mg/kg/day rate for the disease form, scales by weight,
/// and derives the injection volume plus weekly and full-course totals
/// over the standard 84-day horizon.
///
/// # Arguments
///
/// * `weight` - Cat weight in kg (must be positive and finite)
/// * `form` - Disease form determining the dosing rate
/// * `concentration` - Drug concentration in mg/ml
///   (pass [`DEFAULT_CONCENTRATION`](crate::protocol::DEFAULT_CONCENTRATION)
///   for the standard 15 mg/ml formulation)
///
/// # Example
///
/// ```rust
/// use fipsol::dose::calculate_dose;
/// use fipsol::protocol::{DiseaseForm, DEFAULT_CONCENTRATION};
///
/// let result = calculate_dose(3.5, DiseaseForm::Neurological, DEFAULT_CONCENTRATION).unwrap();
/// assert_eq!(result.total_dose_mg, 35.0);
/// assert_eq!(result.volume_ml, 2.333);
/// ```
pub fn calculate_dose(
    weight: f64,
    form: DiseaseForm,
    concentration: f64,
) -> Result<DoseResult, DoseError> {
    validate_weight(weight)?;
    validate_concentration(concentration)?;

    let mg_per_kg = form.rate();
    let total_mg = weight * mg_per_kg;
    let volume_ml = total_mg / concentration;

    let weekly_mg = total_mg * 7.0;
    let full_treatment_mg = total_mg * f64::from(TREATMENT_DURATION_DAYS);

    Ok(DoseResult {
        weight_kg: weight,
        disease_form: form,
        dose_mg_per_kg: mg_per_kg,
        total_dose_mg: round_to(total_mg, 2),
        volume_ml: round_to(volume_ml, 3),
        concentration_mg_ml: concentration,
        weekly_amount_mg: round_to(weekly_mg, 2),
        full_treatment_mg: round_to(full_treatment_mg, 2),
        treatment_duration_days: TREATMENT_DURATION_DAYS,
    })
}

/// Recompute a dose after a weight change
///
/// Scales the previously computed dose by the weight ratio. The rate
/// table is deliberately not consulted again, so any rounding in the
/// original dose propagates to the adjusted one.
///
/// Both weights must be positive and finite; the previous weight in
/// particular divides the new one.
pub fn calculate_weight_adjustment(
    current_weight: f64,
    new_weight: f64,
    current_dose_mg: f64,
    concentration: f64,
) -> Result<WeightAdjustment, DoseError> {
    validate_weight(current_weight)?;
    validate_weight(new_weight)?;
    validate_concentration(concentration)?;

    let weight_ratio = new_weight / current_weight;
    let new_dose_mg = current_dose_mg * weight_ratio;
    let new_volume_ml = new_dose_mg / concentration;

    let weight_change_g = (new_weight - current_weight) * 1000.0;
    let weight_change_percent = ((new_weight - current_weight) / current_weight) * 100.0;

    Ok(WeightAdjustment {
        previous_weight_kg: current_weight,
        current_weight_kg: new_weight,
        weight_change_g: weight_change_g.round() as i64,
        weight_change_percent: round_to(weight_change_percent, 1),
        previous_dose_mg: round_to(current_dose_mg, 2),
        new_dose_mg: round_to(new_dose_mg, 2),
        new_volume_ml: round_to(new_volume_ml, 3),
        dose_change_mg: round_to(new_dose_mg - current_dose_mg, 2),
    })
}

/// Convert an oral dose to its injectable equivalent
///
/// Injectable GS-441524 is more bioavailable, so the equivalent
/// injectable dose is the oral dose divided by the conversion ratio
/// (default [`ORAL_TO_INJECTABLE_RATIO`](crate::protocol::ORAL_TO_INJECTABLE_RATIO)).
pub fn convert_oral_to_injectable(
    oral_dose_mg: f64,
    conversion_ratio: f64,
) -> Result<OralConversion, DoseError> {
    if !conversion_ratio.is_finite() || conversion_ratio <= 0.0 {
        return Err(DoseError::InvalidConversionRatio {
            ratio: conversion_ratio,
        });
    }

    let injectable_dose_mg = oral_dose_mg / conversion_ratio;

    Ok(OralConversion {
        oral_dose_mg,
        injectable_dose_mg: round_to(injectable_dose_mg, 2),
        conversion_ratio,
    })
}
