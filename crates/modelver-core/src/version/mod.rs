//! Virtual versions and version maps.
//!
//! Every persisted object type carries a virtual version. A
//! [`VirtualVersionMap`] is a snapshot of those versions, either as recorded
//! in storage ("current") or as declared by the running application
//! ("target"). A [`VersionComparator`] classifies how two snapshots relate.

pub mod compare;
pub mod map;
pub mod virtual_version;

pub use compare::{
    CompareDetails, CompareStatus, SemverComparator, VersionComparator, VersionComparison,
};
pub use map::{TypeVersionSource, VirtualVersionMap};
pub use virtual_version::{VirtualVersion, MODEL_VERSION_VIRTUAL_MAJOR};
