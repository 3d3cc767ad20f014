// src/models/mod.rs

pub mod advisor;
pub mod booking;
pub mod product;
pub mod schema;
pub mod user;

use serde_json::{json, Map, Value};

use self::advisor::Advisor;
use self::booking::Booking;
use self::product::Product;
use self::schema::Schema;
use self::user::User;

fn describe<T: Schema>(catalog: &mut Map<String, Value>) {
    catalog.insert(T::COLLECTION.to_string(), json!({ "fields": T::FIELDS }));
}

/// Field tables of every record type, keyed by collection name.
pub fn schema_catalog() -> Value {
    let mut catalog = Map::new();
    describe::<User>(&mut catalog);
    describe::<Product>(&mut catalog);
    describe::<Advisor>(&mut catalog);
    describe::<Booking>(&mut catalog);
    Value::Object(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_collection_with_constraints() {
        let catalog = schema_catalog();
        for collection in ["user", "product", "advisor", "booking"] {
            assert!(catalog[collection]["fields"].is_array(), "{collection}");
        }

        let email = &catalog["booking"]["fields"][1];
        assert_eq!(email["name"], "email");
        assert_eq!(email["type"], "text");
        assert_eq!(email["constraints"][0]["kind"], "required");
        assert_eq!(email["constraints"][1]["kind"], "email_syntax");

        let rating = &catalog["advisor"]["fields"][3];
        assert_eq!(rating["constraints"][0]["value"], 4.8);
        assert_eq!(rating["constraints"][1]["min"], 0.0);
        assert_eq!(rating["constraints"][1]["max"], 5.0);
    }
}
