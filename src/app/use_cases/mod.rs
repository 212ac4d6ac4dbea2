//! Use-Cases der Application-Layer-Orchestrierung.

pub mod options;
pub mod send_route;
