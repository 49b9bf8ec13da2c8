/// Ports module defining the element's boundaries
///
/// Inbound ports are driven by the host (lifecycle callbacks); outbound
/// ports are the infrastructure the element drives (network, render
/// surface, diagnostics, output).
pub mod inbound;
pub mod outbound;
