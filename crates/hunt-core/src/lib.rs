//! # hunt-core
//!
//! Core types and scoring for Hunt.
//!
//! This crate provides the foundational types shared across all Hunt crates:
//! - Entity structs for the workspace documents (opportunities, profile,
//!   glossary contacts and terms, summary rows)
//! - The closed `Stage` funnel enum and match-tier classification
//! - The pure weighted match scorer
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod scoring;
