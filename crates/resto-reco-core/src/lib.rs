//! Domain model and recommendation engine for Resto Reco.
//!
//! Listings ("restos") and preference profiles ("gustos") live here together
//! with the field rules they must satisfy and the engine that matches one
//! against the other. No I/O happens in this crate apart from reading
//! configuration from the environment.

pub mod app_config;
pub mod config;
pub mod constraint;
pub mod cuisine;
pub mod engine;
pub mod error;
pub mod listing;
pub mod meal;
pub mod profile;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use constraint::{parse_constraint, Constraint};
pub use cuisine::Cuisine;
pub use engine::{recommend, recommend_with_rng, MAX_RECOMMENDATIONS};
pub use error::{ConfigError, CoreError};
pub use listing::Listing;
pub use meal::{MealSupport, MealType};
pub use profile::Profile;
