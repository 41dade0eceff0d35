use serde::{Deserialize, Serialize};

/// A beer in the catalog.
///
/// `Default` is the zero value (id `0`, empty strings, price `0.0`). The
/// repository returns it from `find` when no beer has the requested id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    pub brewery: String,
    pub country: String,
    pub price: f64,
    /// ISO 4217 code the price is expressed in.
    pub currency: String,
}

impl Beer {
    /// Creates a beer with the given id and name; other fields are empty.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the brewery.
    pub fn with_brewery(mut self, brewery: impl Into<String>) -> Self {
        self.brewery = brewery.into();
        self
    }

    /// Sets the country of origin.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the unit price and its currency.
    pub fn with_price(mut self, price: f64, currency: impl Into<String>) -> Self {
        self.price = price;
        self.currency = currency.into();
        self
    }

    /// Returns true if this is the zero value, i.e. a "not found" result.
    pub fn is_zero_value(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pilsen() -> Beer {
        Beer::new(1, "Pilsen")
            .with_brewery("Bavaria")
            .with_country("Colombia")
            .with_price(2400.0, "COP")
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let beer = pilsen();

        assert_eq!(beer.id, 1);
        assert_eq!(beer.name, "Pilsen");
        assert_eq!(beer.brewery, "Bavaria");
        assert_eq!(beer.country, "Colombia");
        assert_eq!(beer.price, 2400.0);
        assert_eq!(beer.currency, "COP");
    }

    #[test]
    fn test_default_is_zero_value() {
        assert!(Beer::default().is_zero_value());
        assert!(!pilsen().is_zero_value());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(pilsen()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Pilsen",
                "brewery": "Bavaria",
                "country": "Colombia",
                "price": 2400.0,
                "currency": "COP"
            })
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let beer: Beer = serde_json::from_str(
            r#"{"id":4,"name":"Budweiser","brewery":"Bavaria","country":"Colombia","price":2.5,"currency":"USD"}"#,
        )
        .unwrap();

        assert_eq!(beer.id, 4);
        assert_eq!(beer.price, 2.5);
        assert_eq!(beer.currency, "USD");
    }
}
