//! The `State` trait shared by the explorer's phase enums.
//!
//! Phase enums describe where a view's state machine currently sits. All
//! methods are pure so a rendering layer can inspect them freely.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// Phases are small immutable values. They must be cloneable for history
/// tracking, comparable for guard checks, and serializable so a host can
/// hand them to a renderer as plain data.
///
/// # Example
///
/// ```rust
/// use region_explorer::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PanelPhase {
///     Collapsed,
///     Expanded,
/// }
///
/// impl State for PanelPhase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Collapsed => "Collapsed",
///             Self::Expanded => "Expanded",
///         }
///     }
/// }
///
/// assert_eq!(PanelPhase::Expanded.name(), "Expanded");
/// assert!(!PanelPhase::Expanded.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Phase name for display and log fields.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected from this phase.
    ///
    /// Explorer views cycle indefinitely, so the default is `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this phase represents a failure condition.
    fn is_error(&self) -> bool {
        false
    }
}
