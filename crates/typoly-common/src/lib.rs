pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::{Action, SplitDirection};
pub use errors::{ConfigError, LayoutError, TypolyError};
pub use id::{new_id, GroupId};
pub use types::{PaneRole, Rect};

pub type Result<T> = std::result::Result<T, TypolyError>;
