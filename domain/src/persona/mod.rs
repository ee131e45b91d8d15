//! Interviewer personas.
//!
//! - [`entities::Persona`]: identity, tone and behavioral script
//! - [`registry::PersonaRegistry`]: immutable lookup by id
//! - [`panel::Panel`] / [`panel::PanelCatalog`]: panels per difficulty tier

pub mod entities;
pub mod panel;
pub mod registry;
