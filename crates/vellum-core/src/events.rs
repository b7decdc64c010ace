//! Change-notification events.
//!
//! Hosts deliver buffer and view changes to decorators as a discriminated
//! event consumed through a single dispatch function, rather than scattered
//! notification-code conditionals.

/// A content modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentChange {
    /// Text inserted at a character offset.
    Insert {
        /// Insertion offset.
        offset: usize,
        /// Inserted character count.
        length: usize,
    },
    /// Text deleted at a character offset.
    Delete {
        /// Deletion offset.
        offset: usize,
        /// Deleted character count.
        length: usize,
    },
}

/// Keyboard modifiers active during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt key held.
    pub alt: bool,
}

impl Modifiers {
    /// Modifiers with only the control key held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// An event delivered to decorators by the owning view/host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The buffer content changed.
    ContentChanged(ContentChange),
    /// The view was vertically scrolled.
    Scrolled,
    /// The zoom level changed (more or fewer rows may be visible).
    Zoomed,
    /// The view was resized (more text may have been revealed).
    Resized,
    /// The pointer activated a position carrying indicator annotations.
    IndicatorActivated {
        /// Character offset under the pointer.
        position: usize,
        /// Modifier keys held at activation time.
        modifiers: Modifiers,
    },
}
