pub mod domain;
pub mod dto;
pub mod repository;
