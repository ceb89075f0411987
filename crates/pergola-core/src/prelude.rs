pub use crate::color::Color;
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::error::HandleError;
pub use crate::handle::FocusHandle;
pub use crate::locals::{Local, Theme, theme, with_theme};
pub use crate::modifier::{Border, Modifier};
pub use crate::runtime::{
    ComposeGuard, Frame, HitRegion, Scheduler, SemNode, remember, remember_state,
    remember_state_with_key, remember_with_key,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Scene, SceneNode, View, ViewId, ViewKind};
