//! Domain types: validated requests, the confirmation result, the reply
//! parsers and the transport port.

pub mod parser;
pub mod ports;
pub mod request;
pub mod response;
