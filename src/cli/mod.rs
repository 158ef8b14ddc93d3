pub mod seeder;

use sqlx::PgPool;

use crate::modules::users::model::UserRole;
use crate::utils::password::hash_password;

/// Creates an administrator account, or promotes the account if the email
/// is already registered.
pub async fn create_admin(
    db: &PgPool,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let promoted = sqlx::query(
        "UPDATE users SET role = $2, updated_at = now() WHERE email = $1",
    )
    .bind(email)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    if promoted.rows_affected() > 0 {
        println!("   Existing account promoted to administrator");
        return Ok(());
    }

    let hashed_password = hash_password(password)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    sqlx::query(
        "INSERT INTO users (email, password, role)
         VALUES ($1, $2, $3)",
    )
    .bind(email)
    .bind(hashed_password)
    .bind(UserRole::Admin)
    .execute(db)
    .await?;

    Ok(())
}
