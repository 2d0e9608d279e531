use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::dto::categories::CategoryDto;
use crate::entities::items::Item;

/// Flat transfer representation of a catalog item.
///
/// `id` is `None` on create payloads; the store assigns identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub categories: Vec<CategoryDto>,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            img_url: item.img_url.clone(),
            date: item.date,
            categories: item.categories.iter().map(CategoryDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::entities::categories::Category;

    fn sample_item() -> Item {
        Item {
            id: 7,
            name: "Phone".into(),
            description: "Good Phone".into(),
            price: 800.0,
            img_url: "https://img.test/phone.png".into(),
            date: datetime!(2020-07-13 20:50:07.123 UTC),
            categories: vec![Category::new(2, "Electronics")],
        }
    }

    #[test]
    fn maps_entity_fields_and_embedded_categories() {
        let dto = ItemDto::from(&sample_item());

        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.name, "Phone");
        assert_eq!(dto.categories.len(), 1);
        assert_eq!(dto.categories[0].id, 2);
        assert_eq!(dto.categories[0].name, "Electronics");
    }

    #[test]
    fn serializes_date_as_rfc3339() {
        let dto = ItemDto::from(&sample_item());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["date"], "2020-07-13T20:50:07.123Z");
        assert_eq!(json["price"], 800.0);
    }

    #[test]
    fn round_trips_through_json() {
        let dto = ItemDto::from(&sample_item());
        let json = serde_json::to_string(&dto).unwrap();
        let back: ItemDto = serde_json::from_str(&json).unwrap();

        assert_eq!(back, dto);
    }
}
