//! Brewsheet Engine library.
//!
//! Loads character sheets: resolves homebrew references, derives the sheet
//! through the domain crate and reconciles it with device-local state.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use infrastructure::config::EngineConfig;
