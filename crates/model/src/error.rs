use thiserror::Error;

use crate::fields::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("field '{0}' is derived and cannot be edited directly")]
    DerivedField(Field),
}
