//! Game system implementations.
//!
//! This module provides the calculation engine behind every derived number
//! on the character sheet. Systems implement the trait defined in `traits.rs`.
//!
//! # Supported Systems
//!
//! - D&D 5th Edition (`dnd5e`)

mod dnd5e;
mod traits;

// D&D 5e exports
pub use dnd5e::{
    format_distance, format_modifier, Dnd5eSystem, PLACEHOLDER, SHIELD_BONUS, SKILLS,
};

// Core traits
pub use traits::CalculationEngine;
