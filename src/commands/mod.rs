pub mod repository;
pub mod ticket;
