//! Part form: the shared record fields plus the source toggle and its value.

use stockroom_core::form::parse_field;
use stockroom_core::{InputError, PartId, RecordForm, RecordInput};

use crate::part::{Part, PartSource, SourceKind};

/// Raw input of the add/modify part form.
///
/// `source_value` holds the machine id for in-house parts and the company name
/// for outsourced ones, depending on `kind`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartForm {
    pub record: RecordForm,
    pub kind: SourceKind,
    pub source_value: String,
}

/// A validated part that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPart {
    pub input: RecordInput,
    pub source: PartSource,
}

impl PartForm {
    pub fn in_house(record: RecordForm, machine_id: impl Into<String>) -> Self {
        Self {
            record,
            kind: SourceKind::InHouse,
            source_value: machine_id.into(),
        }
    }

    pub fn outsourced(record: RecordForm, company_name: impl Into<String>) -> Self {
        Self {
            record,
            kind: SourceKind::Outsourced,
            source_value: company_name.into(),
        }
    }

    /// Validate the form.
    ///
    /// The common fields are checked first; the machine id is parsed last.
    pub fn parse(&self) -> Result<NewPart, InputError> {
        let input = self.record.parse()?;

        let source = match self.kind {
            SourceKind::InHouse => {
                let machine_id = parse_field::<u32>(&self.source_value, "machine id")
                    .map_err(|_| InputError::InvalidMachineId)?;
                PartSource::InHouse { machine_id }
            }
            SourceKind::Outsourced => PartSource::Outsourced {
                company_name: self.source_value.clone(),
            },
        };

        Ok(NewPart { input, source })
    }
}

impl NewPart {
    pub fn into_part(self, id: PartId) -> Part {
        Part::new(
            id,
            self.input.name,
            self.input.price,
            self.input.levels,
            self.source,
        )
    }
}
