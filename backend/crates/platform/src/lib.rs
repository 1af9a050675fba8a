//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure randomness, constant-time comparison)
//! - Password hashing (Argon2id)
//! - Cookie management
//! - SMTP mail transport

pub mod cookie;
pub mod crypto;
pub mod mail;
pub mod password;
