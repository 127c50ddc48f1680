use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Etiology {
    MyxomatousDisease,
    FibroelasticDeficiency,
}

impl Etiology {
    /// Label the deployed scoring model was trained on.
    pub fn wire_label(self) -> &'static str {
        match self {
            Etiology::MyxomatousDisease => "Myxomatous Disease",
            Etiology::FibroelasticDeficiency => "Fibroelastic Deficiency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LesionType {
    Prolapse,
    Flail,
}

impl LesionType {
    pub fn wire_label(self) -> &'static str {
        match self {
            LesionType::Prolapse => "Prolapse",
            LesionType::Flail => "Flail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafletInvolved {
    Posterior,
    Anterior,
    Bileaflet,
}

impl LeafletInvolved {
    pub fn wire_label(self) -> &'static str {
        match self {
            LeafletInvolved::Posterior => "Posterior",
            LeafletInvolved::Anterior => "Anterior",
            LeafletInvolved::Bileaflet => "Bileaflet",
        }
    }
}

/// Mitral valve scallop in Carpentier nomenclature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scallop {
    A1,
    A2,
    A3,
    P1,
    P2,
    P3,
}

impl Scallop {
    pub fn wire_label(self) -> &'static str {
        match self {
            Scallop::A1 => "A1",
            Scallop::A2 => "A2",
            Scallop::A3 => "A3",
            Scallop::P1 => "P1",
            Scallop::P2 => "P2",
            Scallop::P3 => "P3",
        }
    }
}
