pub mod tenable_client;

pub use tenable_client::SimulatedTenableClient;
