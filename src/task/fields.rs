//! Field tables for each prediction task.

/// One named scalar input slot of a task's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label shown next to the input.
    pub name: &'static str,
    /// Short identifier for addressing the field from the command line.
    pub key: &'static str,
    /// Zero-based index into the feature vector.
    pub position: usize,
}

const fn field(position: usize, key: &'static str, name: &'static str) -> FieldSpec {
    FieldSpec { name, key, position }
}

/// Diabetes form, in model input order.
pub const DIABETES: [FieldSpec; 8] = [
    field(0, "pregnancies", "Pregnancies"),
    field(1, "glucose", "Glucose"),
    field(2, "blood_pressure", "Blood Pressure"),
    field(3, "skin_thickness", "Skin Thickness"),
    field(4, "insulin", "Insulin"),
    field(5, "bmi", "BMI"),
    field(6, "pedigree", "Diabetes Pedigree Function"),
    field(7, "age", "Age"),
];

/// Heart disease form, in model input order.
pub const HEART_DISEASE: [FieldSpec; 13] = [
    field(0, "age", "Age"),
    field(1, "sex", "Sex (0: Female, 1: Male)"),
    field(2, "chest_pain", "Chest Pain Type (0-3)"),
    field(3, "resting_bp", "Resting BP"),
    field(4, "cholesterol", "Cholesterol"),
    field(5, "fasting_sugar", "Fasting Blood Sugar (0: No, 1: Yes)"),
    field(6, "rest_ecg", "Rest ECG (0-2)"),
    field(7, "max_heart_rate", "Max Heart Rate"),
    field(8, "exercise_angina", "Exercise Angina (0: No, 1: Yes)"),
    field(9, "oldpeak", "Oldpeak"),
    field(10, "slope", "Slope (0-2)"),
    field(11, "major_vessels", "Major Vessels (0-3)"),
    field(12, "thal", "Thal (0-3)"),
];

/// Parkinson's voice-measurement form, in model input order.
pub const PARKINSONS: [FieldSpec; 22] = [
    field(0, "fo", "MDVP:Fo(Hz)"),
    field(1, "fhi", "MDVP:Fhi(Hz)"),
    field(2, "flo", "MDVP:Flo(Hz)"),
    field(3, "jitter_percent", "Jitter(%)"),
    field(4, "jitter_abs", "Jitter(Abs)"),
    field(5, "rap", "RAP"),
    field(6, "ppq", "PPQ"),
    field(7, "jitter_ddp", "Jitter:DDP"),
    field(8, "shimmer", "Shimmer"),
    field(9, "shimmer_db", "Shimmer(dB)"),
    field(10, "shimmer_apq3", "Shimmer:APQ3"),
    field(11, "shimmer_apq5", "Shimmer:APQ5"),
    field(12, "apq", "MDVP:APQ"),
    field(13, "shimmer_dda", "Shimmer:DDA"),
    field(14, "nhr", "NHR"),
    field(15, "hnr", "HNR"),
    field(16, "rpde", "RPDE"),
    field(17, "dfa", "DFA"),
    field(18, "spread1", "Spread1"),
    field(19, "spread2", "Spread2"),
    field(20, "d2", "D2"),
    field(21, "ppe", "PPE"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_positions(fields: &[FieldSpec]) {
        for (i, f) in fields.iter().enumerate() {
            assert_eq!(f.position, i, "{} is out of place", f.name);
        }
    }

    fn assert_unique_keys(fields: &[FieldSpec]) {
        let mut keys: Vec<_> = fields.iter().map(|f| f.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), fields.len());
    }

    #[test]
    fn positions_match_indices() {
        assert_positions(&DIABETES);
        assert_positions(&HEART_DISEASE);
        assert_positions(&PARKINSONS);
    }

    #[test]
    fn keys_are_unique_per_form() {
        assert_unique_keys(&DIABETES);
        assert_unique_keys(&HEART_DISEASE);
        assert_unique_keys(&PARKINSONS);
    }

    #[test]
    fn diabetes_order_ends_with_age() {
        assert_eq!(DIABETES[0].name, "Pregnancies");
        assert_eq!(DIABETES[7].name, "Age");
    }
}
