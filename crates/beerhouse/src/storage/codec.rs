//! Conversions between [`Beer`] and DynamoDB items.
//!
//! Pure functions, testable without a table.

use aws_sdk_dynamodb::types::AttributeValue;

use beerhouse_core::beer::Beer;
use beerhouse_core::storage::RepositoryError;

use super::Item;

pub const ENTITY_TYPE: &str = "Beer";

pub const ATTR_ID: &str = "id";
pub const ATTR_NAME: &str = "name";
pub const ATTR_BREWERY: &str = "brewery";
pub const ATTR_COUNTRY: &str = "country";
pub const ATTR_PRICE: &str = "price";
pub const ATTR_CURRENCY: &str = "currency";
pub const ATTR_ACTIVE: &str = "active";

/// Value of the `active` attribute on every written item.
pub const ACTIVE: &str = "1";

/// Convert a Beer to a DynamoDB item.
///
/// The `active` flag is always set so the item shows up in the listing index.
pub fn encode(beer: &Beer) -> Item {
    let mut item = Item::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(beer.id.to_string()));
    item.insert(ATTR_NAME.to_string(), AttributeValue::S(beer.name.clone()));
    item.insert(
        ATTR_BREWERY.to_string(),
        AttributeValue::S(beer.brewery.clone()),
    );
    item.insert(
        ATTR_COUNTRY.to_string(),
        AttributeValue::S(beer.country.clone()),
    );
    item.insert(
        ATTR_PRICE.to_string(),
        AttributeValue::N(format!("{:.6}", beer.price)),
    );
    item.insert(
        ATTR_CURRENCY.to_string(),
        AttributeValue::S(beer.currency.clone()),
    );
    item.insert(ATTR_ACTIVE.to_string(), active_value());

    item
}

/// Convert a DynamoDB item to a Beer.
///
/// Only `id` is required. Missing optional attributes keep their zero value.
pub fn decode(item: &Item) -> Result<Beer, RepositoryError> {
    Ok(Beer {
        id: get_id(item)?,
        name: get_optional_string(item, ATTR_NAME)?.unwrap_or_default(),
        brewery: get_optional_string(item, ATTR_BREWERY)?.unwrap_or_default(),
        country: get_optional_string(item, ATTR_COUNTRY)?.unwrap_or_default(),
        price: get_optional_price(item)?.unwrap_or_default(),
        currency: get_optional_string(item, ATTR_CURRENCY)?.unwrap_or_default(),
    })
}

/// Decode a batch of items. The first failure aborts the whole batch.
pub fn decode_all(items: &[Item]) -> Result<Vec<Beer>, RepositoryError> {
    items.iter().map(decode).collect()
}

/// The raw primary key of an item, if it has one.
pub fn key_of(item: &Item) -> Option<&str> {
    match item.get(ATTR_ID)? {
        AttributeValue::S(s) | AttributeValue::N(s) => Some(s.as_str()),
        _ => None,
    }
}

pub fn active_value() -> AttributeValue {
    AttributeValue::N(ACTIVE.to_string())
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_id(item: &Item) -> Result<i64, RepositoryError> {
    let raw = key_of(item).ok_or_else(|| {
        RepositoryError::InvalidData(format!("Missing or invalid field: {}", ATTR_ID))
    })?;
    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid {} {:?}: {}", ATTR_ID, raw, e)))
}

fn get_optional_string(item: &Item, key: &str) -> Result<Option<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Invalid field type: {}",
            key
        ))),
    }
}

fn get_optional_price(item: &Item) -> Result<Option<f64>, RepositoryError> {
    let raw = match item.get(ATTR_PRICE) {
        None | Some(AttributeValue::Null(_)) => return Ok(None),
        Some(AttributeValue::N(n)) | Some(AttributeValue::S(n)) => n,
        Some(_) => {
            return Err(RepositoryError::InvalidData(format!(
                "Invalid field type: {}",
                ATTR_PRICE
            )))
        }
    };
    raw.parse().map(Some).map_err(|e| {
        RepositoryError::InvalidData(format!("Invalid {} {:?}: {}", ATTR_PRICE, raw, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_beer() -> Beer {
        Beer::new(1, "Pilsen")
            .with_brewery("Bavaria")
            .with_country("Colombia")
            .with_price(2400.0, "COP")
    }

    fn item_with_id(id: AttributeValue) -> Item {
        let mut item = Item::new();
        item.insert(ATTR_ID.to_string(), id);
        item
    }

    #[test]
    fn test_beer_round_trip() {
        let beer = sample_beer();
        let parsed = decode(&encode(&beer)).unwrap();

        assert_eq!(parsed, beer);
    }

    #[test]
    fn test_fractional_price_round_trip() {
        let beer = Beer::new(4, "Budweiser").with_price(2.5, "USD");
        let parsed = decode(&encode(&beer)).unwrap();

        assert_eq!(parsed.price, 2.5);
    }

    #[test]
    fn test_encoded_attribute_types() {
        let item = encode(&sample_beer());

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "1");
        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Pilsen");
        assert_eq!(item.get("currency").unwrap().as_s().unwrap(), "COP");
        assert_eq!(item.get("price").unwrap().as_n().unwrap(), "2400.000000");
        assert_eq!(item.get("active").unwrap().as_n().unwrap(), "1");
        assert_eq!(item.len(), 7);
    }

    #[test]
    fn test_decode_only_id_leaves_zero_values() {
        let item = item_with_id(AttributeValue::S("9".to_string()));
        let beer = decode(&item).unwrap();

        assert_eq!(beer.id, 9);
        assert_eq!(beer.name, "");
        assert_eq!(beer.price, 0.0);
        assert_eq!(beer.currency, "");
    }

    #[test]
    fn test_decode_accepts_numeric_id() {
        let item = item_with_id(AttributeValue::N("12".to_string()));
        assert_eq!(decode(&item).unwrap().id, 12);
    }

    #[test]
    fn test_decode_missing_id() {
        let mut item = encode(&sample_beer());
        item.remove(ATTR_ID);

        assert!(matches!(
            decode(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_decode_non_numeric_id() {
        let item = item_with_id(AttributeValue::S("abc".to_string()));

        assert!(matches!(
            decode(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_decode_invalid_price() {
        let mut item = encode(&sample_beer());
        item.insert(
            ATTR_PRICE.to_string(),
            AttributeValue::N("cheap".to_string()),
        );

        let err = decode(&item).unwrap_err();
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_decode_wrong_string_type() {
        let mut item = encode(&sample_beer());
        item.insert(ATTR_NAME.to_string(), AttributeValue::Bool(true));

        assert!(matches!(
            decode(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_decode_all_aborts_on_first_failure() {
        let good = encode(&sample_beer());
        let bad = item_with_id(AttributeValue::S("x".to_string()));

        assert!(decode_all(&[good.clone(), bad]).is_err());
        assert_eq!(decode_all(&[good]).unwrap().len(), 1);
        assert!(decode_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_key_of() {
        assert_eq!(key_of(&encode(&sample_beer())), Some("1"));
        assert_eq!(key_of(&Item::new()), None);
    }
}
