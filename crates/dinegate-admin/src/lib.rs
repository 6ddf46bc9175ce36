//! Admin service for restaurant-creation requests.
//!
//! The gateway treats the admin service as an external collaborator reached
//! through [`AdminService`]; the request lifecycle belongs to that service.
//!
//! [`InMemoryAdminService`] is a development stand-in. It keeps requests in
//! process memory, so every server process or Lambda container starts with
//! whatever it was seeded with (nothing, in the shipped binaries) and loses
//! decisions on exit. Deployments that need real data plug a networked
//! client in behind the same trait.

mod error;
mod memory;
mod service;

pub use error::AdminServiceError;
pub use memory::InMemoryAdminService;
pub use service::AdminService;
