//! Platform abstraction traits.
//!
//! The rendering pipeline loads a clinic logo at render time. Going through
//! a [`ResourceProvider`] keeps the layout and render crates free of direct
//! filesystem access, so the same pipeline runs against an in-memory asset
//! store in tests and a directory on disk in production.

mod resource;

pub use resource::{
    FilesystemResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
    SharedResourceData,
};
