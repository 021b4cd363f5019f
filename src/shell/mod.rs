// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the timer engine, sync handler and directory.
// - Expose the HTTP and GraphQL surfaces and spawn the background sync worker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
