//! Add/modify/delete workflows over the inventory store.
//!
//! The store accepts anything; this layer is where form input is validated,
//! ids are allocated and the product-deletion rule is enforced. Every accepted
//! mutation is logged at `info`, every rejection at `warn`.

use stockroom_core::{DomainError, DomainResult, InputError, PartId, ProductId};
use stockroom_parts::{Part, PartForm};
use stockroom_products::{Product, ProductForm};

use crate::store::InventoryStore;

/// Workflow facade borrowing the store for the duration of a user action.
#[derive(Debug)]
pub struct InventoryService<'a> {
    store: &'a mut InventoryStore,
}

impl<'a> InventoryService<'a> {
    pub fn new(store: &'a mut InventoryStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &InventoryStore {
        &*self.store
    }

    /// Validate the form, then allocate an id and append the part.
    ///
    /// No id is consumed when validation fails.
    pub fn add_part(&mut self, form: &PartForm) -> DomainResult<PartId> {
        let new_part = form.parse().map_err(|e| rejected("part", e))?;

        let id = self.store.allocate_part_id();
        let part = new_part.into_part(id);
        tracing::info!(part_id = %id, name = part.name(), kind = ?part.kind(), "part added");
        self.store.add_part(part);
        Ok(id)
    }

    /// Replace the part in place, keeping its id and position.
    ///
    /// The source may switch between in-house and outsourced.
    pub fn modify_part(&mut self, id: PartId, form: &PartForm) -> DomainResult<()> {
        let index = self.store.position_of_part(id).ok_or_else(|| {
            tracing::warn!(part_id = %id, "modify requested for unknown part");
            DomainError::not_found()
        })?;
        let new_part = form.parse().map_err(|e| rejected("part", e))?;

        let part = new_part.into_part(id);
        tracing::info!(part_id = %id, name = part.name(), kind = ?part.kind(), "part modified");
        self.store.replace_part_at(index, part);
        Ok(())
    }

    /// Remove a part.
    ///
    /// Products that list it keep the reference and will resolve it as missing.
    pub fn delete_part(&mut self, id: PartId) -> DomainResult<Part> {
        let part = self.store.delete_part_by_id(id).ok_or_else(|| {
            tracing::warn!(part_id = %id, "delete requested for unknown part");
            DomainError::not_found()
        })?;

        let referencing = self.store.products_referencing(id).len();
        if referencing > 0 {
            tracing::warn!(part_id = %id, products = referencing, "deleted part is still referenced");
        }
        tracing::info!(part_id = %id, name = part.name(), "part deleted");
        Ok(part)
    }

    pub fn add_product(
        &mut self,
        form: &ProductForm,
        parts: Vec<PartId>,
    ) -> DomainResult<ProductId> {
        let new_product = form.parse().map_err(|e| rejected("product", e))?;
        self.ensure_parts_exist(&parts)?;

        let id = self.store.allocate_product_id();
        let product = new_product.into_product(id, parts);
        tracing::info!(
            product_id = %id,
            name = product.name(),
            parts = product.associated_parts().len(),
            "product added"
        );
        self.store.add_product(product);
        Ok(id)
    }

    /// Replace the product in place, including its part list.
    ///
    /// Only ids the product did not already list must exist. References whose
    /// part has since been deleted may be kept.
    pub fn modify_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
        parts: Vec<PartId>,
    ) -> DomainResult<()> {
        let index = self.store.position_of_product(id).ok_or_else(|| {
            tracing::warn!(product_id = %id, "modify requested for unknown product");
            DomainError::not_found()
        })?;
        let new_product = form.parse().map_err(|e| rejected("product", e))?;
        let listed = self.store.all_products()[index].associated_parts();
        let added: Vec<PartId> = parts.iter().copied().filter(|p| !listed.contains(p)).collect();
        self.ensure_parts_exist(&added)?;

        let product = new_product.into_product(id, parts);
        tracing::info!(
            product_id = %id,
            name = product.name(),
            parts = product.associated_parts().len(),
            "product modified"
        );
        self.store.replace_product_at(index, product);
        Ok(())
    }

    /// Remove a product that no longer lists any parts.
    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<Product> {
        let product = self.store.lookup_product(id).ok_or_else(|| {
            tracing::warn!(product_id = %id, "delete requested for unknown product");
            DomainError::not_found()
        })?;

        if product.has_associated_parts() {
            tracing::warn!(
                product_id = %id,
                parts = product.associated_parts().len(),
                "product delete refused"
            );
            return Err(DomainError::invariant(
                "product has associated parts; remove them before deleting",
            ));
        }

        let product = self
            .store
            .delete_product_by_id(id)
            .ok_or_else(DomainError::not_found)?;
        tracing::info!(product_id = %id, name = product.name(), "product deleted");
        Ok(product)
    }

    /// Append a part reference to an existing product.
    pub fn associate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        self.ensure_parts_exist(&[part_id])?;
        let product = self
            .store
            .lookup_product_mut(product_id)
            .ok_or_else(DomainError::not_found)?;

        product.add_associated_part(part_id);
        tracing::info!(product_id = %product_id, part_id = %part_id, "part associated");
        Ok(())
    }

    /// Drop one reference to `part_id` from the product.
    ///
    /// Works for references whose part has already been deleted.
    pub fn dissociate_part(&mut self, product_id: ProductId, part_id: PartId) -> DomainResult<()> {
        let product = self
            .store
            .lookup_product_mut(product_id)
            .ok_or_else(DomainError::not_found)?;

        if !product.remove_associated_part(part_id) {
            return Err(DomainError::not_found());
        }
        tracing::info!(product_id = %product_id, part_id = %part_id, "part dissociated");
        Ok(())
    }

    pub fn search_parts(&self, query: &str) -> Vec<&Part> {
        let found = self.store.search_parts(query);
        tracing::debug!(query, matches = found.len(), "part search");
        found
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let found = self.store.search_products(query);
        tracing::debug!(query, matches = found.len(), "product search");
        found
    }

    fn ensure_parts_exist(&self, parts: &[PartId]) -> DomainResult<()> {
        match parts.iter().find(|id| self.store.lookup_part(**id).is_none()) {
            Some(unknown) => {
                tracing::warn!(part_id = %unknown, "unknown part referenced");
                Err(DomainError::validation(format!("unknown part id {unknown}")))
            }
            None => Ok(()),
        }
    }
}

fn rejected(record: &'static str, error: InputError) -> DomainError {
    tracing::warn!(record, error = %error, "form rejected");
    DomainError::from(error)
}
