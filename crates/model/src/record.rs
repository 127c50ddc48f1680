use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{
    domain::{Etiology, LeafletInvolved, LesionType, Scallop},
    error::EditError,
    fields::Field,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Number(f64),
    /// Raw edit that did not parse as a number; present but invalid.
    Text(String),
    Etiology(Etiology),
    Lesion(LesionType),
    Leaflet(LeafletInvolved),
    Scallops(BTreeSet<Scallop>),
    Flag(bool),
}

impl FieldValue {
    /// Coerces a raw numeric-input edit the way the intake form does.
    /// Blank input clears the field; a finite number is stored as one.
    /// Anything else is kept as text for validation to reject later.
    pub fn numeric_input(raw: &str) -> Option<FieldValue> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(FieldValue::Number(value)),
            _ => Some(FieldValue::Text(trimmed.to_string())),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatientRecord {
    values: BTreeMap<Field, FieldValue>,
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one edit. `None` clears the field. Edits are accepted
    /// unconditionally; only the derived ratio rejects direct writes.
    pub fn update(&mut self, field: Field, value: Option<FieldValue>) -> Result<(), EditError> {
        if field.is_derived() {
            return Err(EditError::DerivedField(field));
        }
        match value {
            Some(value) => {
                self.values.insert(field, value);
            }
            None => {
                self.values.remove(&field);
            }
        }
        if matches!(
            field,
            Field::AnteriorLeafletLength | Field::PosteriorLeafletLength
        ) {
            self.apply_derived_ratio();
        }
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    fn apply_derived_ratio(&mut self) {
        match derive_ratio(self) {
            Some(ratio) => {
                self.values.insert(Field::LeafletRatio, FieldValue::Number(ratio));
            }
            None => {
                self.values.remove(&Field::LeafletRatio);
            }
        }
    }
}

/// anterior / posterior rounded to 2 decimals, when both hold a non-zero
/// finite number; absent otherwise. Total for every record shape.
pub fn derive_ratio(record: &PatientRecord) -> Option<f64> {
    let anterior = record.number(Field::AnteriorLeafletLength)?;
    let posterior = record.number(Field::PosteriorLeafletLength)?;
    if anterior == 0.0 || posterior == 0.0 {
        return None;
    }
    let ratio = round2(anterior / posterior);
    ratio.is_finite().then_some(ratio)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
