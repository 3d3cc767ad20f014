// src/services/mod.rs

pub mod seed_service;
