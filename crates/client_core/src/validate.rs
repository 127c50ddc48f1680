use model::{
    fields::{FieldKind, FIELD_SPECS},
    record::{FieldValue, PatientRecord},
};

use crate::error::ValidationError;

/// Checks the record against the intake form, stopping at the first failing
/// field. Purely in-memory; the same record always yields the same verdict.
pub fn validate_record(record: &PatientRecord) -> Result<(), ValidationError> {
    for spec in &FIELD_SPECS {
        if !spec.required {
            continue;
        }
        match spec.kind {
            FieldKind::Numeric => {
                let value = record
                    .number(spec.field)
                    .ok_or(ValidationError::MissingOrInvalidField(spec.field))?;
                if let Some((min, max)) = spec.range {
                    if value < min || value > max {
                        return Err(ValidationError::OutOfRange {
                            field: spec.field,
                            min,
                            max,
                        });
                    }
                }
            }
            FieldKind::Etiology => {
                if !matches!(record.get(spec.field), Some(FieldValue::Etiology(_))) {
                    return Err(ValidationError::MissingOrInvalidField(spec.field));
                }
            }
            FieldKind::Lesion => {
                if !matches!(record.get(spec.field), Some(FieldValue::Lesion(_))) {
                    return Err(ValidationError::MissingOrInvalidField(spec.field));
                }
            }
            FieldKind::Leaflet => {
                if !matches!(record.get(spec.field), Some(FieldValue::Leaflet(_))) {
                    return Err(ValidationError::MissingOrInvalidField(spec.field));
                }
            }
            // An empty scallop set and unset flags are legitimate answers.
            FieldKind::Scallops | FieldKind::Flag => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use model::domain::{Etiology, LeafletInvolved, LesionType};
    use model::fields::Field;

    use super::*;

    fn valid_record() -> PatientRecord {
        let mut record = PatientRecord::new();
        for (field, value) in [
            (Field::EjectionFraction, 55.0),
            (Field::AnteriorLeafletLength, 28.0),
            (Field::PosteriorLeafletLength, 14.0),
            (Field::SeptalCoaptationDistance, 5.0),
            (Field::MitralAorticAngle, 120.0),
            (Field::BasalSeptum, 12.0),
            (Field::LvEndDiastolicDiameter, 50.0),
        ] {
            record
                .update(field, Some(FieldValue::Number(value)))
                .expect("edit");
        }
        record
            .update(
                Field::Etiology,
                Some(FieldValue::Etiology(Etiology::FibroelasticDeficiency)),
            )
            .expect("edit");
        record
            .update(Field::LesionType, Some(FieldValue::Lesion(LesionType::Flail)))
            .expect("edit");
        record
            .update(
                Field::LeafletInvolved,
                Some(FieldValue::Leaflet(LeafletInvolved::Bileaflet)),
            )
            .expect("edit");
        record
    }

    #[test]
    fn complete_record_passes() {
        assert_eq!(validate_record(&valid_record()), Ok(()));
    }

    #[test]
    fn empty_scallops_and_flags_are_not_required() {
        let record = valid_record();
        assert_eq!(record.get(Field::ScallopsInvolved), None);
        assert_eq!(record.get(Field::HasCleft), None);
        assert_eq!(validate_record(&record), Ok(()));
    }

    #[test]
    fn missing_numeric_field_is_reported() {
        let mut record = valid_record();
        record
            .update(Field::PosteriorLeafletLength, None)
            .expect("clear");
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::MissingOrInvalidField(
                Field::PosteriorLeafletLength
            ))
        );
    }

    #[test]
    fn text_in_a_numeric_field_is_reported() {
        let mut record = valid_record();
        record
            .update(
                Field::EjectionFraction,
                Some(FieldValue::Text("fifty five".to_string())),
            )
            .expect("edit");
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::MissingOrInvalidField(Field::EjectionFraction))
        );
    }

    #[test]
    fn angle_bounds_are_inclusive() {
        for angle in [0.0, 360.0] {
            let mut record = valid_record();
            record
                .update(Field::MitralAorticAngle, Some(FieldValue::Number(angle)))
                .expect("edit");
            assert_eq!(validate_record(&record), Ok(()));
        }

        let mut record = valid_record();
        record
            .update(Field::MitralAorticAngle, Some(FieldValue::Number(360.5)))
            .expect("edit");
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::OutOfRange {
                field: Field::MitralAorticAngle,
                min: 0.0,
                max: 360.0,
            })
        );

        record
            .update(Field::MitralAorticAngle, Some(FieldValue::Number(-1.0)))
            .expect("edit");
        assert!(matches!(
            validate_record(&record),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn first_failure_in_form_order_wins() {
        let mut record = valid_record();
        record.update(Field::EjectionFraction, None).expect("clear");
        record
            .update(Field::MitralAorticAngle, Some(FieldValue::Number(720.0)))
            .expect("edit");
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::MissingOrInvalidField(Field::EjectionFraction))
        );
    }

    #[test]
    fn missing_categorical_field_is_reported() {
        let mut record = valid_record();
        record.update(Field::LeafletInvolved, None).expect("clear");
        assert_eq!(
            validate_record(&record),
            Err(ValidationError::MissingOrInvalidField(Field::LeafletInvolved))
        );
    }
}
