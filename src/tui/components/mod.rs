//! # TUI Components
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: receive all data as parameters each
//!   frame — `Pagination`, the page line builder in [`page`].
//! - **Stateful (event-driven)**: persistent state living in `TuiState`
//!   with a transient render wrapper — `JumpFormState`/`JumpForm`,
//!   `UnitNavState`/`UnitNav`.
//!
//! Each component file contains its state types, event types, rendering
//! logic and tests.

pub mod jump_form;
pub mod page;
pub mod pagination;
pub mod unit_nav;

pub use jump_form::{JumpForm, JumpFormEvent, JumpFormState};
pub use page::{Row, RowTarget, build_page};
pub use pagination::Pagination;
pub use unit_nav::{UnitNav, UnitNavEvent, UnitNavState};
