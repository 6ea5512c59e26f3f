// src/api/mod.rs

pub mod admin;
pub mod auth;
pub mod contact;
pub mod payments;
pub mod popup;
