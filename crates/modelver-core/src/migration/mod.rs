//! Model version migration planning.
//!
//! This module answers the first question of any migration run: given the
//! versions recorded for each type and the versions the application targets,
//! which way do we go and which types move?
//!
//! | Comparison | Delta      | Meaning                              |
//! |------------|------------|--------------------------------------|
//! | `greater`  | `upward`   | Run migrations forward               |
//! | `lesser`   | `downward` | Target is behind, roll back          |
//! | `equal`    | `noop`     | Nothing to do                        |
//! | `conflict` | error      | Plan indeterminate, abort            |
//!
//! # Example
//!
//! ```
//! use modelver_core::migration::{get_model_version_delta, DeltaStatus};
//! use modelver_core::version::{VirtualVersion, VirtualVersionMap};
//!
//! let current = VirtualVersionMap::new()
//!     .with("dashboard", VirtualVersion::from_model_version(2));
//! let target = VirtualVersionMap::new()
//!     .with("dashboard", VirtualVersion::from_model_version(3));
//!
//! let delta = get_model_version_delta(&current, &target, &[]).unwrap();
//! assert_eq!(delta.status, DeltaStatus::Upward);
//! assert_eq!(delta.diff[0].target.to_string(), "10.3.0");
//! ```

pub mod config;
pub mod delta;
pub mod error;

pub use config::DeltaConfig;
pub use delta::{
    get_model_version_delta, DeltaStatus, ModelVersionDelta, TypeDelta, VersionDeltaCalculator,
};
pub use error::MigrationError;
