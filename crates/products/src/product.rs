use serde::{Deserialize, Serialize};

use stockroom_core::{Catalogued, Entity, PartId, Price, ProductId, StockLevels};

/// A product and the parts it is built from.
///
/// `associated_parts` holds ids, not parts. Nothing keeps those ids pointing at
/// live parts; resolve them through the inventory store, which reports missing
/// ones explicitly. Order is insertion order and the same part may appear more
/// than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    levels: StockLevels,
    #[serde(default)]
    associated_parts: Vec<PartId>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price, levels: StockLevels) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            associated_parts: Vec::new(),
        }
    }

    pub fn id(&self) -> ProductId {
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

    pub fn set_id(&mut self, id: ProductId) {
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

    pub fn associated_parts(&self) -> &[PartId] {
        &self.associated_parts
    }

    pub fn has_associated_parts(&self) -> bool {
        !self.associated_parts.is_empty()
    }

    /// Append a part reference. Duplicates are kept.
    pub fn add_associated_part(&mut self, part_id: PartId) {
        self.associated_parts.push(part_id);
    }

    /// Remove the first reference to `part_id`; returns whether one was removed.
    pub fn remove_associated_part(&mut self, part_id: PartId) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the whole reference list.
    pub fn set_associated_parts(&mut self, part_ids: Vec<PartId>) {
        self.associated_parts = part_ids;
    }

    pub fn references(&self, part_id: PartId) -> bool {
        self.associated_parts.contains(&part_id)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Catalogued for Product {
    fn name(&self) -> &str {
        &self.name
    }
}
