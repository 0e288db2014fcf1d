/// Inbound ports (Driving ports) - Application entry interfaces
pub mod scan_simulation_port;

pub use scan_simulation_port::ScanSimulationPort;
