//! Summarization form feature module.
//!
//! Collects a passage and an optional reference summary, submits them, and
//! shows the returned summary with its ROUGE scores.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering
//! - `field.rs` - Text editing

mod field;
mod intent;
mod reducer;
mod state;
mod view;

pub use field::TextField;
pub use intent::{CursorMove, FormIntent};
pub use reducer::FormReducer;
pub use state::{FormFocus, FormState, RequestStatus, PASSAGE_REQUIRED};
pub use view::{render_form, result_lines, ResultsViewport, LOADING_TEXT};
