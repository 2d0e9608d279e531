//! Canonical catalog fixtures.
//!
//! One source of truth for the item/category shapes used across unit and
//! integration tests, so assertions stay stable.

use backend::dto::items::ItemDto;
use backend::entities::categories::Category;
use backend::entities::items::Item;
use time::macros::datetime;
use time::OffsetDateTime;

/// Fixed timestamp so fixture equality is stable across runs.
pub const FIXTURE_DATE: OffsetDateTime = datetime!(2020-07-13 20:50:07.123 UTC);

/// Id of the category every item fixture is associated with.
pub const FIXTURE_CATEGORY_ID: i64 = 2;

/// Category fixture.
pub fn category(id: i64) -> Category {
    Category::new(id, "Electronics")
}

/// Item fixture associated with [`FIXTURE_CATEGORY_ID`].
pub fn item(id: i64) -> Item {
    Item {
        id,
        name: "Phone".to_string(),
        description: "Good Phone".to_string(),
        price: 800.0,
        img_url: "https://img.test/phone.png".to_string(),
        date: FIXTURE_DATE,
        categories: vec![category(FIXTURE_CATEGORY_ID)],
    }
}

/// Transfer representation of [`item`] with id `1`.
pub fn item_dto() -> ItemDto {
    ItemDto::from(&item(1))
}
