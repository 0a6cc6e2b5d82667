//! Numeric helpers shared by the geometry and layout code.

pub mod safe_cast;
