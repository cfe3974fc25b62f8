//! Data models for contacts, saved cards and configuration.

pub mod card;
pub mod config;
pub mod contact;
