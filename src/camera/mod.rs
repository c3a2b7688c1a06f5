//! Perspective camera for viewing a [`crate::scene::Scene`].

mod core;

pub use self::core::Camera;
