//! In-memory inventory store.
//!
//! One store is built at startup and handed by reference to whoever needs it.
//! It does no validation and raises no errors: lookups return `None`, deletes
//! return whether anything was removed, and duplicate ids are accepted.

use stockroom_core::{PartId, ProductId};
use stockroom_parts::Part;
use stockroom_products::Product;

use crate::search::filter_by_fragment;

/// A product's part reference, resolved against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociatedPart<'a> {
    Present(&'a Part),
    /// The id no longer names a part in the store.
    Missing(PartId),
}

impl<'a> AssociatedPart<'a> {
    pub fn id(&self) -> PartId {
        match self {
            AssociatedPart::Present(part) => part.id(),
            AssociatedPart::Missing(id) => *id,
        }
    }

    pub fn part(&self) -> Option<&'a Part> {
        match *self {
            AssociatedPart::Present(part) => Some(part),
            AssociatedPart::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AssociatedPart::Missing(_))
    }
}

/// Parts and products in insertion order, plus the two id counters.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    parts: Vec<Part>,
    products: Vec<Product>,
    next_part_id: u32,
    next_product_id: u32,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next part id. The first one handed out is 1.
    ///
    /// The counter saturates at `u32::MAX`: once reached, that id is handed out
    /// again rather than wrapping back to 0.
    pub fn allocate_part_id(&mut self) -> PartId {
        self.next_part_id = self.next_part_id.saturating_add(1);
        PartId::new(self.next_part_id)
    }

    /// Next product id; independent of the part counter. Saturates like parts.
    pub fn allocate_product_id(&mut self) -> ProductId {
        self.next_product_id = self.next_product_id.saturating_add(1);
        ProductId::new(self.next_product_id)
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn all_parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// The live part list; changes made through it are the store's state.
    pub fn all_parts_mut(&mut self) -> &mut Vec<Part> {
        &mut self.parts
    }

    pub fn all_products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }

    /// Part with `id`. If the id was added more than once, the last one added wins.
    pub fn lookup_part(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().rfind(|p| p.id() == id)
    }

    pub fn lookup_part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().rfind(|p| p.id() == id)
    }

    /// Product with `id`; last one added wins, as for parts.
    pub fn lookup_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().rfind(|p| p.id() == id)
    }

    pub fn lookup_product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().rfind(|p| p.id() == id)
    }

    /// Parts whose name equals `name` exactly (case-sensitive).
    pub fn lookup_parts_by_name(&self, name: &str) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.name() == name).collect()
    }

    pub fn lookup_products_by_name(&self, name: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.name() == name).collect()
    }

    /// Index of the part `lookup_part` would return.
    pub fn position_of_part(&self, id: PartId) -> Option<usize> {
        self.parts.iter().rposition(|p| p.id() == id)
    }

    pub fn position_of_product(&self, id: ProductId) -> Option<usize> {
        self.products.iter().rposition(|p| p.id() == id)
    }

    /// Overwrite the part at `index`, returning the one it replaced.
    ///
    /// Out of range: nothing changes and `None` comes back.
    pub fn replace_part_at(&mut self, index: usize, part: Part) -> Option<Part> {
        self.parts
            .get_mut(index)
            .map(|slot| core::mem::replace(slot, part))
    }

    pub fn replace_product_at(&mut self, index: usize, product: Product) -> Option<Product> {
        self.products
            .get_mut(index)
            .map(|slot| core::mem::replace(slot, product))
    }

    /// Remove the first part equal to `part`.
    ///
    /// Products that reference it keep their reference.
    pub fn delete_part(&mut self, part: &Part) -> bool {
        match self.parts.iter().position(|p| p == part) {
            Some(index) => {
                self.parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first product equal to `product`. Its parts stay in the store.
    pub fn delete_product(&mut self, product: &Product) -> bool {
        match self.products.iter().position(|p| p == product) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn delete_part_by_id(&mut self, id: PartId) -> Option<Part> {
        let index = self.position_of_part(id)?;
        Some(self.parts.remove(index))
    }

    pub fn delete_product_by_id(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position_of_product(id)?;
        Some(self.products.remove(index))
    }

    /// Parts whose id or name contains `query`.
    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        filter_by_fragment(&self.parts, query)
    }

    /// Products whose id or name contains `query`.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        filter_by_fragment(&self.products, query)
    }

    /// Resolve each of the product's references, in order.
    pub fn associated_parts_of(&self, product: &Product) -> Vec<AssociatedPart<'_>> {
        product
            .associated_parts()
            .iter()
            .map(|id| match self.lookup_part(*id) {
                Some(part) => AssociatedPart::Present(part),
                None => AssociatedPart::Missing(*id),
            })
            .collect()
    }

    pub fn products_referencing(&self, part_id: PartId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.references(part_id))
            .collect()
    }
}
