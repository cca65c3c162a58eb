//! Courses module.
//!
//! Public catalog reads plus the admin-gated creation endpoint. Cover
//! images go through the media-storage collaborator before the row is
//! written; a course is never persisted with a broken image reference.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
