// src/services/seed_service.rs

use mongodb::bson::doc;

use crate::db::{self, DocumentStore};
use crate::errors::SeedingError;
use crate::models::advisor::Advisor;
use crate::models::schema::Schema;

/// The demo advisors inserted into an empty collection, in insertion order.
pub fn default_advisors() -> Vec<Advisor> {
    vec![
        Advisor {
            name: "Ava Ocean".into(),
            specialties: vec!["Mindfulness".into(), "Meditation".into(), "Breathwork".into()],
            bio: Some("Guiding you to inner calm through ocean-inspired mindfulness.".into()),
            rating: Some(4.9),
            photo: Some("https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=800&auto=format&fit=crop".into()),
        },
        Advisor {
            name: "Kai Rivers".into(),
            specialties: vec!["Life Purpose".into(), "Clarity".into(), "Intuition".into()],
            bio: Some("Find your flow and align with your natural rhythm.".into()),
            rating: Some(4.8),
            photo: Some("https://images.unsplash.com/photo-1544006659-f0b21884ce1d?q=80&w=800&auto=format&fit=crop".into()),
        },
        Advisor {
            name: "Mira Tide".into(),
            specialties: vec!["Energy Healing".into(), "Emotional Balance".into()],
            bio: Some("Gentle guidance for healing and emotional harmony.".into()),
            rating: Some(4.9),
            photo: Some("https://images.unsplash.com/photo-1524504388940-b1c1722653e1?q=80&w=800&auto=format&fit=crop".into()),
        },
    ]
}

/// Inserts the default advisors if, and only if, the collection is empty.
/// Returns how many records were inserted.
///
/// Only the total count is checked, so two processes starting together
/// against an empty collection may both seed.
pub async fn try_seed_advisors(store: &dyn DocumentStore) -> Result<usize, SeedingError> {
    let existing = store.count(Advisor::COLLECTION, doc! {}).await?;
    if existing > 0 {
        return Ok(0);
    }

    let advisors = default_advisors();
    for advisor in &advisors {
        db::create_document(store, Advisor::COLLECTION, advisor).await?;
    }
    Ok(advisors.len())
}

/// Best-effort startup seeding. Failures are logged and never propagated so
/// the API stays available.
pub async fn seed_advisors_if_empty(store: Option<&dyn DocumentStore>) {
    let Some(store) = store else {
        log::info!("no database configured; skipping advisor seeding");
        return;
    };

    match try_seed_advisors(store).await {
        Ok(0) => log::info!("advisor collection already populated; nothing to seed"),
        Ok(n) => log::info!("seeded {} default advisors", n),
        Err(e) => log::warn!("{}", e),
    }
}
