//! # Ports
//!
//! Port traits in hexagonal-architecture terms:
//!
//! - `inbound` - the API this subsystem offers (driving ports)
//! - `outbound` - the dependencies it requires (driven ports)

pub mod inbound;
pub mod outbound;
