//! Tenant Desk - conversation core of a tenant service agent.
//!
//! Greets a tenant, classifies each message, answers small talk and runs a
//! maintenance questionnaire that ends in a prioritized ticket.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
