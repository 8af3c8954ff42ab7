//! Product form.

use stockroom_core::{InputError, PartId, ProductId, RecordForm, RecordInput};

use crate::product::Product;

/// Raw input of the add/modify product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub record: RecordForm,
}

/// A validated product that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub input: RecordInput,
}

impl ProductForm {
    pub fn new(record: RecordForm) -> Self {
        Self { record }
    }

    pub fn parse(&self) -> Result<NewProduct, InputError> {
        Ok(NewProduct {
            input: self.record.parse()?,
        })
    }
}

impl NewProduct {
    pub fn into_product(self, id: ProductId, associated_parts: Vec<PartId>) -> Product {
        let mut product = Product::new(id, self.input.name, self.input.price, self.input.levels);
        product.set_associated_parts(associated_parts);
        product
    }
}
