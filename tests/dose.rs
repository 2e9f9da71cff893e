//! Dose calculator integration tests
//!
//! Exercise the public dose API end to end, including the invariants the
//! protocol relies on: exact weight × rate products before rounding,
//! concentration-independence of the daily dose, and proportional
//! weight adjustment.

use approx::assert_relative_eq;
use fipsol::prelude::*;

#[test]
fn daily_dose_matches_rate_table_across_forms() {
    let cases = [
        (DiseaseForm::Wet, 5.0),
        (DiseaseForm::Dry, 6.0),
        (DiseaseForm::Ocular, 8.0),
        (DiseaseForm::Neurological, 10.0),
    ];

    for (form, rate) in cases {
        for weight in [1.0, 2.5, 3.8, 5.1] {
            let result = calculate_dose(weight, form, DEFAULT_CONCENTRATION).unwrap();
            assert!((result.total_dose_mg - weight * rate).abs() < 0.005);
            assert_eq!(result.dose_mg_per_kg, rate);
        }
    }
}

#[test]
fn volume_scales_inversely_with_concentration() {
    for (c1, c2) in [(15.0, 30.0), (15.0, 17.5), (10.0, 20.0)] {
        let a = calculate_dose(4.2, DiseaseForm::Ocular, c1).unwrap();
        let b = calculate_dose(4.2, DiseaseForm::Ocular, c2).unwrap();
        assert_eq!(a.total_dose_mg, b.total_dose_mg);
        assert_relative_eq!(a.volume_ml * c1, b.volume_ml * c2, epsilon = 2e-2);
    }
}

#[test]
fn weekly_and_full_course_totals_derive_from_daily_dose() {
    let result = calculate_dose(3.0, DiseaseForm::Wet, DEFAULT_CONCENTRATION).unwrap();
    assert_relative_eq!(result.weekly_amount_mg, result.total_dose_mg * 7.0, epsilon = 1e-9);
    assert_relative_eq!(
        result.full_treatment_mg,
        result.total_dose_mg * 84.0,
        epsilon = 1e-9
    );
}

#[test]
fn adjustment_scales_dose_by_weight_ratio() {
    let adjustment = calculate_weight_adjustment(3.0, 3.3, 15.0, DEFAULT_CONCENTRATION).unwrap();
    assert_eq!(adjustment.new_dose_mg, 16.5);

    // Proportionality: scaling the new weight by k scales the new dose by k
    for k in [0.8, 1.2, 2.0] {
        let scaled =
            calculate_weight_adjustment(3.0, 3.3 * k, 15.0, DEFAULT_CONCENTRATION).unwrap();
        assert_relative_eq!(scaled.new_dose_mg, 16.5 * k, epsilon = 1e-2);
    }
}

#[test]
fn adjustment_scales_prior_dose_not_rate_table() {
    // A deliberately off-protocol prior dose must be scaled as-is
    let adjustment = calculate_weight_adjustment(3.0, 6.0, 20.0, DEFAULT_CONCENTRATION).unwrap();
    assert_eq!(adjustment.new_dose_mg, 40.0);
}

#[test]
fn oral_injectable_round_trip() {
    for oral in [7.5, 15.0, 35.0] {
        let conversion = convert_oral_to_injectable(oral, ORAL_TO_INJECTABLE_RATIO).unwrap();
        let back = conversion.injectable_dose_mg * ORAL_TO_INJECTABLE_RATIO;
        assert_relative_eq!(back, oral, epsilon = 1e-2);
    }
}

#[test]
fn errors_name_the_offending_argument() {
    let weight_err = calculate_dose(-1.0, DiseaseForm::Wet, DEFAULT_CONCENTRATION).unwrap_err();
    assert!(weight_err.to_string().contains("Weight"));

    let form_err = "fulminant".parse::<DiseaseForm>().unwrap_err();
    assert!(form_err
        .to_string()
        .contains("wet, dry, ocular, neurological"));

    let ratio_err = convert_oral_to_injectable(10.0, -1.5).unwrap_err();
    assert!(ratio_err.to_string().contains("ratio"));
}

#[test]
fn dose_result_serializes_with_stable_field_names() {
    let result = calculate_dose(3.0, DiseaseForm::Wet, DEFAULT_CONCENTRATION).unwrap();
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();

    assert_eq!(json["total_dose_mg"], 15.0);
    assert_eq!(json["volume_ml"], 1.0);
    assert_eq!(json["disease_form"], "wet");
    assert_eq!(json["treatment_duration_days"], 84);
}

#[test]
fn display_renders_the_dosing_table() {
    let result = calculate_dose(3.5, DiseaseForm::Neurological, DEFAULT_CONCENTRATION).unwrap();
    let rendered = result.to_string();
    assert!(rendered.contains("GS-441524 Dosing Calculation"));
    assert!(rendered.contains("neurological"));
    assert!(rendered.contains("35 mg"));
}
