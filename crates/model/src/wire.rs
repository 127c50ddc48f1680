use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    fields::{Field, FieldKind, FIELD_SPECS},
    record::{FieldValue, PatientRecord},
};

/// Keys the deployed model service was trained against. The canonical
/// snake_case names are the default; `upstream()` switches to this scheme.
const UPSTREAM_NAMES: [(Field, &str); 15] = [
    (Field::EjectionFraction, "Pre_EF"),
    (Field::AnteriorLeafletLength, "A2_mm"),
    (Field::PosteriorLeafletLength, "P2_mm"),
    (Field::LeafletRatio, "ratio_lam_lpm"),
    (Field::SeptalCoaptationDistance, "SIV-Coapt_mm"),
    (Field::MitralAorticAngle, "angolo_ma"),
    (Field::BasalSeptum, "setto_basale"),
    (Field::LvEndDiastolicDiameter, "lv_edd"),
    (Field::Etiology, "Eziologia_MIX_FED"),
    (Field::LesionType, "Prolapse"),
    (Field::LeafletInvolved, "Leaflet_involved"),
    (Field::ScallopsInvolved, "scallop_involved"),
    (Field::HasCleft, "Any_cleft"),
    (Field::HasLeafletCalcification, "Any_leaflet_calcification"),
    (Field::HasAnnularCalcification, "Any_annular_calcification"),
];

/// Maps record fields to the JSON keys the scoring service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireNames {
    overrides: BTreeMap<Field, String>,
}

impl WireNames {
    /// Canonical snake_case keys, one per field.
    pub fn canonical() -> Self {
        Self::default()
    }

    /// The historical key scheme of the deployed service.
    pub fn upstream() -> Self {
        let mut names = Self::default();
        for (field, name) in UPSTREAM_NAMES {
            names.overrides.insert(field, name.to_string());
        }
        names
    }

    pub fn rename(mut self, field: Field, name: impl Into<String>) -> Self {
        self.overrides.insert(field, name.into());
        self
    }

    pub fn name(&self, field: Field) -> &str {
        self.overrides
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.canonical_name())
    }
}

/// Builds the flat JSON object POSTed to the scoring endpoint. Numeric and
/// categorical fields are omitted when absent; scallops always serialize as
/// an array and flags as booleans, matching what the model was trained on.
pub fn predict_request_body(record: &PatientRecord, names: &WireNames) -> Map<String, Value> {
    let mut body = Map::new();
    for spec in &FIELD_SPECS {
        let key = names.name(spec.field).to_string();
        match spec.kind {
            FieldKind::Numeric => {
                if let Some(value) = record.number(spec.field) {
                    body.insert(key, Value::from(value));
                }
            }
            FieldKind::Etiology => {
                if let Some(FieldValue::Etiology(etiology)) = record.get(spec.field) {
                    body.insert(key, Value::from(etiology.wire_label()));
                }
            }
            FieldKind::Lesion => {
                if let Some(FieldValue::Lesion(lesion)) = record.get(spec.field) {
                    body.insert(key, Value::from(lesion.wire_label()));
                }
            }
            FieldKind::Leaflet => {
                if let Some(FieldValue::Leaflet(leaflet)) = record.get(spec.field) {
                    body.insert(key, Value::from(leaflet.wire_label()));
                }
            }
            FieldKind::Scallops => {
                let labels: Vec<Value> = match record.get(spec.field) {
                    Some(FieldValue::Scallops(scallops)) => scallops
                        .iter()
                        .map(|scallop| Value::from(scallop.wire_label()))
                        .collect(),
                    _ => Vec::new(),
                };
                body.insert(key, Value::from(labels));
            }
            FieldKind::Flag => {
                let flag = matches!(record.get(spec.field), Some(FieldValue::Flag(true)));
                body.insert(key, Value::from(flag));
            }
        }
    }
    body
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}
