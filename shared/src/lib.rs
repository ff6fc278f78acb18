//! Shared constants, errors and math for the Outpost ecosystem.
//!
//! # Modules
//!
//! * `constants` - Constants for the Outpost ecosystem.
//! * `errors` - Errors for the Outpost ecosystem.
//! * `structs` - Structs shared between the outpost and outpost admin programs.
//! * `utils` - Utility functions for the Outpost ecosystem.
pub mod constants;
pub mod errors;
pub mod structs;
pub mod utils;
