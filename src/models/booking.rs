use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schema::{Constraint, DefaultValue, FieldSpec, FieldType, Schema};

pub const STATUS_PENDING: &str = "pending";

fn default_status() -> String {
    STATUS_PENDING.to_string()
}

/// A request for an advice session, stored in the `booking` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Client full name.
    pub name: String,
    pub email: String,
    /// What the client seeks guidance on.
    pub topic: String,
    /// Free-form date, time or timezone.
    pub preferred_time: Option<String>,
    /// Chosen advisor. Not checked against the advisor collection.
    pub advisor_id: Option<String>,
    pub notes: Option<String>,
    /// pending, confirmed, completed or cancelled by convention.
    #[serde(default = "default_status")]
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Schema for Booking {
    const COLLECTION: &'static str = "booking";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "name",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "Client full name",
        },
        FieldSpec {
            name: "email",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required, Constraint::EmailSyntax],
            description: "Client email",
        },
        FieldSpec {
            name: "topic",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[Constraint::Required],
            description: "What do you seek guidance on?",
        },
        FieldSpec {
            name: "preferred_time",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Preferred date/time or timezone",
        },
        FieldSpec {
            name: "advisor_id",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Chosen advisor ID",
        },
        FieldSpec {
            name: "notes",
            ty: FieldType::Text,
            nullable: true,
            constraints: &[],
            description: "Additional context",
        },
        FieldSpec {
            name: "status",
            ty: FieldType::Text,
            nullable: false,
            constraints: &[
                Constraint::Default {
                    value: DefaultValue::Text(STATUS_PENDING),
                },
                Constraint::FreeString,
            ],
            description: "Booking status: pending, confirmed, completed, cancelled",
        },
        FieldSpec {
            name: "created_at",
            ty: FieldType::Timestamp,
            nullable: true,
            constraints: &[],
            description: "",
        },
        FieldSpec {
            name: "updated_at",
            ty: FieldType::Timestamp,
            nullable: true,
            constraints: &[],
            description: "",
        },
    ];
}
