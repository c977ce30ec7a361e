//! View domain — what each page section shows for its current lookup state.

pub mod state;

pub use state::{SectionState, SectionView};
