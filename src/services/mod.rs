pub mod seeder_service;

pub use seeder_service::{SeedOutcome, ServiceSeederImpl, TARGET_ORGANIZATION_SLUG};
