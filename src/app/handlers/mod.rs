//! Feature-Handler für den AppController.
//!
//! Jeder Handler ist eine freie Funktion, die `&mut AppState` mutiert.

pub mod editing;
pub mod view;
