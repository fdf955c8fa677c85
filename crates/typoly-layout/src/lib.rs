//! Pane geometry for Typoly editor groups.
//!
//! Each editor group lays out up to four panes in one horizontal strip:
//! editor, preview, snapshot and minimap. Opening, closing or dragging any
//! of them keeps the pixel width of the others. Groups themselves sit in an
//! n-ary split tree managed by [`WorkspaceLayout`].

pub mod drag;
pub mod editor_group;
pub mod ghost;
pub mod layout;
pub mod manager;
pub mod state;
pub mod toggle;
pub mod tree;
pub mod view_state;

pub use drag::{ContainerMeasure, DragController, DragHost, DragOptions, RightPanelDragMode};
pub use editor_group::EditorGroup;
pub use ghost::GhostResize;
pub use layout::{LayoutEngine, PaneGeometry, ResizeHandle};
pub use manager::WorkspaceLayout;
pub use state::{LayoutState, ResizeTarget};
pub use toggle::ToggleOutcome;
pub use tree::LayoutNode;
pub use view_state::{GroupViewState, ViewStateRegistry};
