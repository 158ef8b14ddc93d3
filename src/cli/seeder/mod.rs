//! Database seeding module for populating test data.
//!
//! Seeds the member directory, the events calendar, and ordinary member
//! accounts with fake data.
//!
//! # Module Structure
//!
//! - [`members`] - Directory entry generation and insertion
//! - [`events`] - Event generation and insertion
//! - [`users`] - Account generation and insertion
//! - [`models`] - Data structures for seeding
//!
//! # Performance
//!
//! - Parallel data generation using Rayon
//! - Batch inserts with multi-value INSERT statements
//! - Single bcrypt hash reused for all accounts (cost 4 for speed)

pub mod events;
pub mod members;
pub mod models;
pub mod users;

pub use models::{EventSeed, MemberSeed, UserSeed};

use bcrypt::hash;
use sqlx::PgPool;
use std::time::Instant;

/// Seeds the database with members, events, and member accounts
pub async fn seed_database(
    db: &PgPool,
    member_count: usize,
    event_count: usize,
    user_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Members: {}", member_count);
    println!("   - Events: {}", event_count);
    println!("   - Accounts: {}", user_count);

    let password_hash = hash_password()?;

    let member_ids = members::seed_members(db, member_count).await?;
    let event_ids = events::seed_events(db, event_count).await?;
    let user_ids = users::seed_users(db, user_count, &password_hash).await?;

    println!(
        "\n✅ Seeding complete! Created {} members, {} events, {} accounts in {:?}",
        member_ids.len(),
        event_ids.len(),
        user_ids.len(),
        start_time.elapsed()
    );
    println!("\n📝 Default password for all accounts: Password@123");

    Ok(())
}

/// Clears all seeded data, keeping administrator accounts
pub async fn clear_seeded_data(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    // Registrations reference both users and events; delete them first so
    // the cascades never surprise anyone.
    sqlx::query("DELETE FROM event_participants")
        .execute(db)
        .await?;
    events::clear_events(db).await?;
    members::clear_members(db).await?;
    users::clear_users(db).await?;

    println!("✅ All seeded data cleared in {:?}", start_time.elapsed());
    Ok(())
}

fn hash_password() -> Result<String, Box<dyn std::error::Error>> {
    println!("🔐 Hashing password...");
    let start = Instant::now();
    // Use lower bcrypt cost for seeding (cost 4 = ~6ms vs cost 12 = ~250ms)
    let hash = hash("Password@123", 4).map_err(|e| format!("Failed to hash password: {}", e))?;
    println!("   ✓ Hashed password in {:?}", start.elapsed());
    Ok(hash)
}
