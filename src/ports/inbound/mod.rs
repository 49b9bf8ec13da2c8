/// Inbound ports (Driving ports) - Element lifecycle interface
///
/// The host (CLI, tests, an embedding application) drives the element
/// exclusively through these ports.
pub mod element_lifecycle_port;

pub use element_lifecycle_port::ElementLifecyclePort;
