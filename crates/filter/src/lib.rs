pub mod batch;
pub mod checker;
pub mod domain;

pub use checker::DomainChecker;
pub use domain::Domain;
