//! Progress report rendering and export

use std::fmt;

use super::error::TrackerError;
use super::structs::TreatmentTracker;
use super::types::TreatmentSummary;

impl fmt::Display for TreatmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);

        writeln!(f, "FIP Treatment Progress Report")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(f, "Patient: {}", self.patient.name)?;
        match self.patient.age_months {
            Some(age) => writeln!(f, "Age: {} months", age)?,
            None => writeln!(f, "Age: Unknown")?,
        }
        match self.patient.disease_form {
            Some(form) => writeln!(f, "Disease Form: {}", form)?,
            None => writeln!(f, "Disease Form: Unknown")?,
        }
        writeln!(f, "Treatment Started: {}", self.patient.start_date)?;
        writeln!(f)?;
        writeln!(
            f,
            "Treatment Duration: Day {} (Week {})",
            self.treatment_duration.days, self.treatment_duration.weeks
        )?;
        writeln!(f, "Target: {} days", self.treatment_duration.target_days)?;
        writeln!(f)?;
        writeln!(f, "Current Status ({}):", self.current_status.date)?;
        writeln!(f, "- Weight: {} kg", self.current_status.weight)?;
        match self.current_status.temperature {
            Some(temp) => writeln!(f, "- Temperature: {}°C", temp)?,
            None => writeln!(f, "- Temperature: not recorded")?,
        }
        if self.current_status.clinical_signs.is_empty() {
            writeln!(f, "- Clinical Signs: None recorded")?;
        } else {
            writeln!(f, "- Clinical Signs: {}", self.current_status.clinical_signs)?;
        }

        if let Some(ref wt) = self.trends.weight {
            writeln!(f)?;
            writeln!(f, "Weight Trend:")?;
            writeln!(f, "- Start: {} kg", wt.start_weight)?;
            writeln!(f, "- Current: {} kg", wt.current_weight)?;
            writeln!(f, "- Change: {:+} kg ({:+}%)", wt.change_kg, wt.change_percent)?;
            writeln!(f, "- Trend: {}", wt.trend.to_string().to_uppercase())?;
        }

        if let Some(ref ag) = self.trends.ag_ratio {
            writeln!(f)?;
            writeln!(f, "A:G Ratio Trend:")?;
            writeln!(f, "- Start: {}", ag.start_ratio)?;
            writeln!(f, "- Current: {}", ag.current_ratio)?;
            writeln!(f, "- Change: {:+}", ag.change)?;
            writeln!(f, "- Trend: {}", ag.trend.to_string().to_uppercase())?;
            writeln!(
                f,
                "- Target (>0.4): {}",
                if ag.target_met { "MET" } else { "NOT MET" }
            )?;
        }

        if let Some(ref fever) = self.trends.fever {
            writeln!(f)?;
            writeln!(f, "Fever Status (recent):")?;
            writeln!(f, "- Average Temperature: {}°C", fever.average_temp)?;
            writeln!(f, "- Maximum: {}°C", fever.max_temp)?;
            writeln!(
                f,
                "- Status: {}",
                if fever.has_fever { "FEVER PRESENT" } else { "NO FEVER" }
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Data Points Recorded: {}", self.data_points_recorded)?;
        Ok(())
    }
}

impl TreatmentTracker {
    /// Render the full progress report
    ///
    /// Purely presentational and deterministic given the tracker state.
    /// Errors with [`TrackerError::NoDataPoints`] on an empty tracker.
    pub fn generate_report(&self) -> Result<String, TrackerError> {
        Ok(self.summary()?.to_string())
    }

    /// Export the observation series as CSV
    ///
    /// One row per observation with a fixed header; optional fields
    /// render as empty cells, the A:G ratio is given to 2 decimal places
    /// when derivable, and clinical signs are always double-quoted. An
    /// empty tracker exports the header row only.
    pub fn export_csv(&self) -> String {
        let mut csv = String::from(
            "Date,Day,Weight (kg),Temperature (°C),Albumin,Globulin,A:G Ratio,Clinical Signs\n",
        );

        for obs in self.observations() {
            csv.push_str(&obs.date().to_string());
            csv.push(',');
            csv.push_str(&obs.day().to_string());
            csv.push(',');
            csv.push_str(&obs.weight().to_string());
            csv.push(',');
            if let Some(temp) = obs.temperature() {
                csv.push_str(&temp.to_string());
            }
            csv.push(',');
            if let Some(albumin) = obs.bloodwork().and_then(|bw| bw.albumin) {
                csv.push_str(&albumin.to_string());
            }
            csv.push(',');
            if let Some(globulin) = obs.bloodwork().and_then(|bw| bw.globulin) {
                csv.push_str(&globulin.to_string());
            }
            csv.push(',');
            if let Some(ratio) = obs.bloodwork().and_then(|bw| bw.ag_ratio()) {
                csv.push_str(&format!("{:.2}", ratio));
            }
            csv.push(',');
            csv.push('"');
            csv.push_str(obs.clinical_signs());
            csv.push('"');
            csv.push('\n');
        }

        csv
    }

    /// Export the whole tracker (patient, baseline, observations) as
    /// pretty-printed JSON
    pub fn export_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
