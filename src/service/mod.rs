//! Transactional services: one unit of work per operation around the generic record store.

mod crud;
mod unit_of_work;
pub use crud::{CrudService, MissPolicy};
pub use unit_of_work::{Intent, UnitOfWork};
