//! Model-View-Intent (MVI) primitives.
//!
//! UI state only changes by running an intent through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (HTTP requests) stay in `App`, which inspects the reduced
//! state to decide what to send to the worker.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
