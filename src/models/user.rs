use serde::{Deserialize, Serialize};

use super::schema::{Constraint, DefaultValue, FieldSpec, FieldType, Schema};

fn default_true() -> bool {
    true
}

/// A user record, collection `user`. Published through the schema catalog;
/// no endpoint writes it.
///
/// Note:
/// - `age`, when given, must be between 0 and 120.
/// - `is_active` defaults to `true` if omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Schema for User {
    const COLLECTION: &'static str = "user";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "name",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Full name",
        },
        FieldSpec {
            name: "email",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required, Constraint::EmailSyntax],
            description: "Email address",
        },
        FieldSpec {
            name: "address",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Address",
        },
        FieldSpec {
            name: "age",
            ty: FieldType::Integer,
            nullable: true,
            constraints: &[Constraint::Range {
                min: Some(0.0),
                max: Some(120.0),
            }],
            description: "Age in years",
        },
        FieldSpec {
            name: "is_active",
            ty: FieldType::Boolean,
            nullable: false,
            constraints: &[Constraint::Default {
                value: DefaultValue::Boolean(true),
            }],
            description: "Whether user is active",
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_active_defaults_to_true() {
        let user = User::from_payload(&json!({
            "name": "Jane",
            "email": "jane@x.com",
            "address": "1 Shore Rd"
        }))
        .unwrap();
        assert!(user.is_active);
        assert_eq!(user.age, None);
    }

    #[test]
    fn age_must_be_a_whole_number_in_range() {
        let base = json!({ "name": "Jane", "email": "jane@x.com", "address": "1 Shore Rd" });

        let mut too_old = base.clone();
        too_old["age"] = json!(121);
        assert!(User::from_payload(&too_old).unwrap_err().has_field("age"));

        let mut fractional = base.clone();
        fractional["age"] = json!(30.5);
        let err = User::from_payload(&fractional).unwrap_err();
        assert_eq!(err.errors[0].kind, "int_type");

        let mut ok = base;
        ok["age"] = json!(120);
        assert_eq!(User::from_payload(&ok).unwrap().age, Some(120));
    }
}
