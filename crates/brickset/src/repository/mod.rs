//! Domain repositories built on the generic `repository::Repository` port

pub mod lego_set_repository;
