use serde::{Deserialize, Serialize};

use super::schema::{Constraint, DefaultValue, FieldSpec, FieldType, Schema};

fn default_true() -> bool {
    true
}

/// Catalog item, collection `product`. Schema only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    /// Price in dollars.
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Schema for Product {
    const COLLECTION: &'static str = "product";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "title",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Product title",
        },
        FieldSpec {
            name: "description",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Product description",
        },
        FieldSpec {
            name: "price",
            ty: FieldType::Number,
            nullable: false,
            constraints: &[
                Constraint::Required,
                Constraint::Range {
                    min: Some(0.0),
                    max: None,
                },
            ],
            description: "Price in dollars",
        },
        FieldSpec {
            name: "category",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Product category",
        },
        FieldSpec {
            name: "in_stock",
            ty: FieldType::Boolean,
            nullable: false,
            constraints: &[Constraint::Default {
                value: DefaultValue::Boolean(true),
            }],
            description: "Whether product is in stock",
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_price_is_rejected_but_zero_is_free() {
        let err = Product::from_payload(&json!({
            "title": "Candle",
            "price": -1,
            "category": "home"
        }))
        .unwrap_err();
        assert_eq!(err.errors[0].kind, "greater_than_equal");

        let product = Product::from_payload(&json!({
            "title": "Candle",
            "price": 0,
            "category": "home"
        }))
        .unwrap();
        assert_eq!(product.price, 0.0);
        assert!(product.in_stock);
    }
}
