use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    EjectionFraction,
    AnteriorLeafletLength,
    PosteriorLeafletLength,
    LeafletRatio,
    SeptalCoaptationDistance,
    MitralAorticAngle,
    BasalSeptum,
    LvEndDiastolicDiameter,
    Etiology,
    LesionType,
    LeafletInvolved,
    ScallopsInvolved,
    HasCleft,
    HasLeafletCalcification,
    HasAnnularCalcification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Numeric,
    Etiology,
    Lesion,
    Leaflet,
    Scallops,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub kind: FieldKind,
    pub required: bool,
    pub derived: bool,
    /// Inclusive bounds checked at validation time.
    pub range: Option<(f64, f64)>,
    pub label: &'static str,
    pub unit: Option<&'static str>,
}

/// One entry per clinical parameter, in the order validation walks them.
pub const FIELD_SPECS: [FieldSpec; 15] = [
    FieldSpec {
        field: Field::EjectionFraction,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "Left Ventricle Ejection Fraction",
        unit: Some("%"),
    },
    FieldSpec {
        field: Field::AnteriorLeafletLength,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "Anterior Leaflet Length",
        unit: Some("mm"),
    },
    FieldSpec {
        field: Field::PosteriorLeafletLength,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "Posterior Leaflet Length",
        unit: Some("mm"),
    },
    FieldSpec {
        field: Field::LeafletRatio,
        kind: FieldKind::Numeric,
        required: false,
        derived: true,
        range: None,
        label: "Leaflet Ratio",
        unit: None,
    },
    FieldSpec {
        field: Field::SeptalCoaptationDistance,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "C-Sept Distance",
        unit: Some("mm"),
    },
    FieldSpec {
        field: Field::MitralAorticAngle,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: Some((0.0, 360.0)),
        label: "M-A Angle",
        unit: Some("\u{b0}"),
    },
    FieldSpec {
        field: Field::BasalSeptum,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "Basal Septum",
        unit: Some("mm"),
    },
    FieldSpec {
        field: Field::LvEndDiastolicDiameter,
        kind: FieldKind::Numeric,
        required: true,
        derived: false,
        range: None,
        label: "Left Ventricle End Diastolic Diameter",
        unit: Some("mm"),
    },
    FieldSpec {
        field: Field::Etiology,
        kind: FieldKind::Etiology,
        required: true,
        derived: false,
        range: None,
        label: "Etiology",
        unit: None,
    },
    FieldSpec {
        field: Field::LesionType,
        kind: FieldKind::Lesion,
        required: true,
        derived: false,
        range: None,
        label: "Type of Lesion",
        unit: None,
    },
    FieldSpec {
        field: Field::LeafletInvolved,
        kind: FieldKind::Leaflet,
        required: true,
        derived: false,
        range: None,
        label: "Leaflet Involved",
        unit: None,
    },
    FieldSpec {
        field: Field::ScallopsInvolved,
        kind: FieldKind::Scallops,
        required: false,
        derived: false,
        range: None,
        label: "Scallop Involved",
        unit: None,
    },
    FieldSpec {
        field: Field::HasCleft,
        kind: FieldKind::Flag,
        required: false,
        derived: false,
        range: None,
        label: "Any Cleft",
        unit: None,
    },
    FieldSpec {
        field: Field::HasLeafletCalcification,
        kind: FieldKind::Flag,
        required: false,
        derived: false,
        range: None,
        label: "Any Leaflet Calcification",
        unit: None,
    },
    FieldSpec {
        field: Field::HasAnnularCalcification,
        kind: FieldKind::Flag,
        required: false,
        derived: false,
        range: None,
        label: "Any Annular Calcification",
        unit: None,
    },
];

impl Field {
    pub fn spec(self) -> &'static FieldSpec {
        // FIELD_SPECS is declared in variant order; checked by test below.
        &FIELD_SPECS[self as usize]
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Field::EjectionFraction => "ejection_fraction",
            Field::AnteriorLeafletLength => "anterior_leaflet_length",
            Field::PosteriorLeafletLength => "posterior_leaflet_length",
            Field::LeafletRatio => "leaflet_ratio",
            Field::SeptalCoaptationDistance => "septal_coaptation_distance",
            Field::MitralAorticAngle => "mitral_aortic_angle",
            Field::BasalSeptum => "basal_septum",
            Field::LvEndDiastolicDiameter => "lv_end_diastolic_diameter",
            Field::Etiology => "etiology",
            Field::LesionType => "lesion_type",
            Field::LeafletInvolved => "leaflet_involved",
            Field::ScallopsInvolved => "scallops_involved",
            Field::HasCleft => "has_cleft",
            Field::HasLeafletCalcification => "has_leaflet_calcification",
            Field::HasAnnularCalcification => "has_annular_calcification",
        }
    }

    pub fn is_derived(self) -> bool {
        self.spec().derived
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_table_matches_variant_order() {
        for (index, spec) in FIELD_SPECS.iter().enumerate() {
            assert_eq!(spec.field as usize, index, "misplaced spec for {}", spec.field);
        }
    }

    #[test]
    fn only_the_ratio_is_derived() {
        let derived: Vec<Field> = FIELD_SPECS
            .iter()
            .filter(|spec| spec.derived)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(derived, vec![Field::LeafletRatio]);
        assert!(!Field::LeafletRatio.spec().required);
    }

    #[test]
    fn required_set_matches_the_intake_form() {
        let required: Vec<Field> = FIELD_SPECS
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.field)
            .collect();
        assert_eq!(
            required,
            vec![
                Field::EjectionFraction,
                Field::AnteriorLeafletLength,
                Field::PosteriorLeafletLength,
                Field::SeptalCoaptationDistance,
                Field::MitralAorticAngle,
                Field::BasalSeptum,
                Field::LvEndDiastolicDiameter,
                Field::Etiology,
                Field::LesionType,
                Field::LeafletInvolved,
            ]
        );
    }

    #[test]
    fn only_the_angle_carries_a_range() {
        for spec in FIELD_SPECS.iter() {
            match spec.field {
                Field::MitralAorticAngle => assert_eq!(spec.range, Some((0.0, 360.0))),
                _ => assert_eq!(spec.range, None, "unexpected range on {}", spec.field),
            }
        }
    }

    #[test]
    fn labels_and_units_match_the_intake_form() {
        let ef = Field::EjectionFraction.spec();
        assert_eq!(ef.label, "Left Ventricle Ejection Fraction");
        assert_eq!(ef.unit, Some("%"));

        let angle = Field::MitralAorticAngle.spec();
        assert_eq!(angle.label, "M-A Angle");
        assert_eq!(angle.unit, Some("\u{b0}"));

        let anterior = Field::AnteriorLeafletLength.spec();
        assert_eq!(anterior.label, "Anterior Leaflet Length");
        assert_eq!(anterior.unit, Some("mm"));

        let ratio = Field::LeafletRatio.spec();
        assert_eq!(ratio.label, "Leaflet Ratio");
        assert_eq!(ratio.unit, None);

        assert_eq!(Field::Etiology.spec().label, "Etiology");
        assert_eq!(Field::Etiology.spec().unit, None);
        assert_eq!(Field::ScallopsInvolved.spec().label, "Scallop Involved");
    }
}
