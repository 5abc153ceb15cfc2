//! Domain Layer

pub mod entity;
pub mod kind;
pub mod payload;
pub mod repository;
