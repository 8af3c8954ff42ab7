use serde::{Deserialize, Serialize};

use stockroom_core::{Catalogued, Entity, PartId, Price, StockLevels};

/// Where a part comes from.
///
/// The variant-specific field is only reachable on the variant that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    InHouse { machine_id: u32 },
    Outsourced { company_name: String },
}

/// Variant tag of [`PartSource`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    InHouse,
    Outsourced,
}

impl PartSource {
    pub fn in_house(machine_id: u32) -> Self {
        Self::InHouse { machine_id }
    }

    pub fn outsourced(company_name: impl Into<String>) -> Self {
        Self::Outsourced {
            company_name: company_name.into(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            PartSource::InHouse { .. } => SourceKind::InHouse,
            PartSource::Outsourced { .. } => SourceKind::Outsourced,
        }
    }
}

/// A stocked part.
///
/// Setters apply whatever they are given; the stock-level rules are enforced on
/// form input (see [`crate::PartForm`]), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i32 {
        self.levels.stock
    }

    pub fn min(&self) -> i32 {
        self.levels.min
    }

    pub fn max(&self) -> i32 {
        self.levels.max
    }

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Machine id, for in-house parts only.
    pub fn machine_id(&self) -> Option<u32> {
        match &self.source {
            PartSource::InHouse { machine_id } => Some(*machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// Supplier name, for outsourced parts only.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }

    pub fn set_id(&mut self, id: PartId) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn set_stock(&mut self, stock: i32) {
        self.levels.stock = stock;
    }

    pub fn set_min(&mut self, min: i32) {
        self.levels.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        self.levels.max = max;
    }

    /// Replace the source, switching variant if needed.
    pub fn set_source(&mut self, source: PartSource) {
        self.source = source;
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Catalogued for Part {
    fn name(&self) -> &str {
        &self.name
    }
}
