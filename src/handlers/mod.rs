pub mod auth;
pub mod health;
pub mod journal;
pub mod moods;
pub mod posts;
pub mod resources;
pub mod users;
