pub mod db;
pub mod schema;
pub mod seed;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod list {
    pub mod entity;
    pub mod repository;
}
