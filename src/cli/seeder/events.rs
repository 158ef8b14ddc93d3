//! Event seeding.

use chrono::{Duration, Utc};
use fake::faker::address::en::CityName;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::EventSeed;

/// Generates event data in parallel using Rayon. Dates land within the
/// coming year so the home page always has upcoming entries.
pub fn generate_events(count: usize) -> Vec<EventSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let days_ahead: i64 = (1..365).fake();
            let title: String = CatchPhrase().fake();

            EventSeed {
                title: format!("{} Sammelan", title),
                description: Sentence(8..20).fake(),
                venue: CityName().fake(),
                starts_at: Utc::now() + Duration::days(days_ahead),
            }
        })
        .collect()
}

/// Seeds events into the database
pub async fn seed_events(
    db: &PgPool,
    count: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📅 Seeding {} events...", count);

    let events = generate_events(count);
    let event_ids = insert_events_batch(db, &events).await?;

    println!(
        "   ✓ Inserted {} events in {:?}",
        event_ids.len(),
        start_time.elapsed()
    );

    Ok(event_ids)
}

/// Inserts events in batches using multi-value INSERT statements
pub async fn insert_events_batch(
    db: &PgPool,
    events: &[EventSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    const BATCH_SIZE: usize = 500;
    let mut all_ids = Vec::with_capacity(events.len());

    for chunk in events.chunks(BATCH_SIZE) {
        let ids = insert_events_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_events_chunk(
    tx: &mut Transaction<'_, Postgres>,
    events: &[EventSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO events (title, description, venue, starts_at) VALUES ");

    for (i, _) in events.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for event in events {
        q = q
            .bind(event.title.clone())
            .bind(event.description.clone())
            .bind(event.venue.clone())
            .bind(event.starts_at);
    }

    let ids = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Clears all events (registrations cascade)
pub async fn clear_events(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing events...");

    let result = sqlx::query("DELETE FROM events")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} events in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
