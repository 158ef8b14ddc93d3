pub struct MemberSeed {
    pub name: String,
    pub city: String,
    pub state: String,
    pub nation: String,
}

pub struct EventSeed {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
}

pub struct UserSeed {
    pub email: String,
    pub password_hash: String,
}
