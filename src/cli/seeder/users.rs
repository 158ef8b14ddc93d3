//! Account seeding. All seeded accounts are ordinary members; the shared
//! password hash comes from the caller so bcrypt runs once.

use fake::faker::internet::en::SafeEmail;
use fake::Fake;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::UserSeed;

/// Generates account data in parallel using Rayon. Emails get an index
/// prefix so batches never collide with each other or the unique index.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<UserSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let email: String = SafeEmail().fake();
            UserSeed {
                email: format!("seed-{}-{}", i, email),
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

/// Seeds ordinary member accounts into the database
pub async fn seed_users(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👤 Seeding {} accounts...", count);

    let users = generate_users(count, password_hash);
    let user_ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} accounts in {:?}",
        user_ids.len(),
        start_time.elapsed()
    );

    Ok(user_ids)
}

/// Inserts users in batches using multi-value INSERT statements
pub async fn insert_users_batch(
    db: &PgPool,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    const BATCH_SIZE: usize = 500;
    let mut all_ids = Vec::with_capacity(users.len());

    for chunk in users.chunks(BATCH_SIZE) {
        let ids = insert_users_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[UserSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO users (email, password) VALUES ");

    for (i, _) in users.iter().enumerate() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 2;
        query.push_str(&format!("(${}, ${})", param_idx + 1, param_idx + 2));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q.bind(user.email.clone()).bind(user.password_hash.clone());
    }

    let ids = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Clears all ordinary accounts, keeping administrators
pub async fn clear_users(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing ordinary accounts...");

    let result = sqlx::query("DELETE FROM users WHERE role = 'ordinary'")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} accounts in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
