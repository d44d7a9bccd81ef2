//! Startup path for the notes backend: layered settings, logging, and the
//! MongoDB connection bootstrap. The rest of the application builds on the
//! client handle the bootstrap returns.

pub mod db;
pub mod settings;
pub mod telemetry;
