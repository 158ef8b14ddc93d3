//! Member directory seeding.

use fake::faker::address::en::{CityName, CountryName, StateName};
use fake::faker::name::en::Name;
use fake::Fake;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;
use uuid::Uuid;

use super::models::MemberSeed;

/// Generates member data in parallel using Rayon. Most members are Indian;
/// every seventh lives abroad so nation filters have something to find.
pub fn generate_members(count: usize) -> Vec<MemberSeed> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let nation = if i % 7 == 6 {
                CountryName().fake()
            } else {
                "India".to_string()
            };

            MemberSeed {
                name: Name().fake(),
                city: CityName().fake(),
                state: StateName().fake(),
                nation,
            }
        })
        .collect()
}

/// Seeds members into the database
pub async fn seed_members(
    db: &PgPool,
    count: usize,
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📇 Seeding {} members...", count);

    let members = generate_members(count);
    let member_ids = insert_members_batch(db, &members).await?;

    println!(
        "   ✓ Inserted {} members in {:?}",
        member_ids.len(),
        start_time.elapsed()
    );

    Ok(member_ids)
}

/// Inserts members in batches using multi-value INSERT statements
pub async fn insert_members_batch(
    db: &PgPool,
    members: &[MemberSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    const BATCH_SIZE: usize = 500;
    let mut all_ids = Vec::with_capacity(members.len());

    for chunk in members.chunks(BATCH_SIZE) {
        let ids = insert_members_chunk(&mut tx, chunk).await?;
        all_ids.extend(ids);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_members_chunk(
    tx: &mut Transaction<'_, Postgres>,
    members: &[MemberSeed],
) -> Result<Vec<Uuid>, Box<dyn std::error::Error>> {
    if members.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO members (name, city, state, nation) VALUES ");
    let mut params = Vec::with_capacity(members.len() * 4);

    for (i, member) in members.iter().enumerate() {
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
        params.push(member.name.clone());
        params.push(member.city.clone());
        params.push(member.state.clone());
        params.push(member.nation.clone());
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for param in &params {
        q = q.bind(param);
    }

    let ids = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Clears all members from the database
pub async fn clear_members(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing members...");

    let result = sqlx::query("DELETE FROM members")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} members in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
