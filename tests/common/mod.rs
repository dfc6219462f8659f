//! Common test utilities and infrastructure

pub mod world;

#[allow(unused_imports)]
pub use world::RoutelineWorld;
