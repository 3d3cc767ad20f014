use serde::{Deserialize, Serialize};

use super::schema::{Constraint, DefaultValue, FieldSpec, FieldType, Schema};

pub const DEFAULT_RATING: f64 = 4.8;

fn default_rating() -> Option<f64> {
    Some(DEFAULT_RATING)
}

/// An advisor profile, stored in the `advisor` collection.
///
/// The store assigns the identifier; it is not part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisor {
    pub name: String,

    /// Areas of focus, in display order.
    #[serde(default)]
    pub specialties: Vec<String>,

    pub bio: Option<String>,

    /// Between 0 and 5 inclusive.
    #[serde(default = "default_rating")]
    pub rating: Option<f64>,

    /// Avatar URL.
    pub photo: Option<String>,
}

impl Schema for Advisor {
    const COLLECTION: &'static str = "advisor";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "name",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Advisor name",
        },
        FieldSpec {
            name: "specialties",
            ty: FieldType::TextList,
            nullable: false,
            constraints: &[Constraint::Default {
                value: DefaultValue::EmptyList,
            }],
            description: "Areas of focus",
        },
        FieldSpec {
            name: "bio",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Short biography",
        },
        FieldSpec {
            name: "rating",
            ty: FieldType::Number,
            nullable: true,
            constraints: &[
                Constraint::Default {
                    value: DefaultValue::Number(DEFAULT_RATING),
                },
                Constraint::Range {
                    min: Some(0.0),
                    max: Some(5.0),
                },
            ],
            description: "Average rating",
        },
        FieldSpec {
            name: "photo",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Avatar URL",
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_payload_takes_defaults() {
        let advisor = Advisor::from_payload(&json!({ "name": "Ava Ocean" })).unwrap();
        assert_eq!(advisor.specialties, Vec::<String>::new());
        assert_eq!(advisor.rating, Some(DEFAULT_RATING));
        assert_eq!(advisor.bio, None);
        assert_eq!(advisor.photo, None);
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let err = Advisor::from_payload(&json!({ "name": "Kai", "rating": 5.5 })).unwrap_err();
        assert!(err.has_field("rating"));
    }
}
