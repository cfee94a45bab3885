pub mod catalog;
pub mod envelope;
pub mod error;
pub mod health;
pub mod item;
pub mod list;
pub mod security;
pub mod tags;
