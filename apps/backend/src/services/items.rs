//! Catalog item service.
//!
//! Thin adapter between callers and the item/category stores: every operation
//! is one call-through plus at most one error-kind translation. Callers see
//! only the stable `DomainError` taxonomy, never store-level signals.

use tracing::{debug, warn};

use crate::dto::items::ItemDto;
use crate::entities::items::Item;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::errors::store::StoreError;
use crate::infra::store_errors::map_store_err;
use crate::paging::{Page, PageRequest};
use crate::repos::categories::CategoryRepo;
use crate::repos::items::ItemRepo;

/// Catalog item service.
pub struct ItemService<I, C> {
    items: I,
    categories: C,
}

impl<I: ItemRepo, C: CategoryRepo> ItemService<I, C> {
    pub fn new(items: I, categories: C) -> Self {
        Self { items, categories }
    }

    /// Fetch one item as its transfer representation.
    ///
    /// # Returns
    /// * `Ok(ItemDto)` - The item projection
    /// * `Err(DomainError::NotFound)` - If the id is unknown to the store
    pub async fn find_by_id(&self, id: i64) -> Result<ItemDto, DomainError> {
        let item = self
            .items
            .find_by_id(id)
            .await
            .map_err(|e| map_store_err(NotFoundKind::Item, e))?;

        let Some(item) = item else {
            return Err(DomainError::not_found(
                NotFoundKind::Item,
                format!("Item {id} not found"),
            ));
        };

        Ok(ItemDto::from(&item))
    }

    /// Windowed listing, optionally filtered by category and name substring.
    ///
    /// Pure passthrough: the store runs the query, the service only maps the
    /// window content to transfer representations.
    pub async fn find_all_paged(
        &self,
        category_id: Option<i64>,
        name: &str,
        page: PageRequest,
    ) -> Result<Page<ItemDto>, DomainError> {
        let items = self
            .items
            .find_all(category_id, name, page)
            .await
            .map_err(|e| map_store_err(NotFoundKind::Item, e))?;

        Ok(items.map(|item| ItemDto::from(&item)))
    }

    /// Create an item from its representation. The store assigns the id.
    pub async fn create(&self, dto: &ItemDto) -> Result<ItemDto, DomainError> {
        let mut item = Item::unsaved();
        self.copy_dto_to_entity(dto, &mut item).await?;

        let saved = self
            .items
            .save(item)
            .await
            .map_err(|e| map_store_err(NotFoundKind::Item, e))?;

        debug!(item_id = saved.id, "item created");
        Ok(ItemDto::from(&saved))
    }

    /// Update an existing item in place.
    ///
    /// Fetches a reference to the stored row first; an unknown id surfaces as
    /// `NotFound` and nothing is persisted. Category references are resolved
    /// through the category store and unknown category ids propagate as
    /// `NotFound` as well.
    pub async fn update(&self, id: i64, dto: &ItemDto) -> Result<ItemDto, DomainError> {
        let mut item = match self.items.get_reference(id).await {
            Ok(item) => item,
            Err(StoreError::NotFound) => {
                return Err(DomainError::not_found(
                    NotFoundKind::Item,
                    format!("Item {id} not found"),
                ))
            }
            Err(e) => return Err(map_store_err(NotFoundKind::Item, e)),
        };

        self.copy_dto_to_entity(dto, &mut item).await?;

        let saved = self
            .items
            .save(item)
            .await
            .map_err(|e| map_store_err(NotFoundKind::Item, e))?;

        debug!(item_id = saved.id, "item updated");
        Ok(ItemDto::from(&saved))
    }

    /// Delete an item by id, translating the store outcome.
    ///
    /// The store is asked to delete unconditionally (no read-before-write),
    /// so exactly one deletion attempt reaches it whatever the outcome.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        match self.items.delete_by_id(id).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound) => Err(DomainError::not_found(
                NotFoundKind::Item,
                format!("Item {id} not found"),
            )),
            Err(StoreError::IntegrityViolation(detail)) => {
                warn!(item_id = id, "delete blocked by referential integrity");
                Err(DomainError::conflict(
                    ConflictKind::ForeignKeyRestrict,
                    detail,
                ))
            }
            Err(e) => Err(map_store_err(NotFoundKind::Item, e)),
        }
    }

    /// Copy mutable fields from the representation onto the entity, resolving
    /// each referenced category through the category store. An empty category
    /// list is valid and clears the association; duplicate ids collapse.
    async fn copy_dto_to_entity(
        &self,
        dto: &ItemDto,
        item: &mut Item,
    ) -> Result<(), DomainError> {
        item.name = dto.name.clone();
        item.description = dto.description.clone();
        item.price = dto.price;
        item.img_url = dto.img_url.clone();
        item.date = dto.date;

        item.categories.clear();
        for category_ref in &dto.categories {
            if item.categories.iter().any(|c| c.id == category_ref.id) {
                continue;
            }
            let category = self
                .categories
                .get_reference(category_ref.id)
                .await
                .map_err(|e| map_store_err(NotFoundKind::Category, e))?;
            item.categories.push(category);
        }

        Ok(())
    }
}
