//! Tappable wrapper component for mouse interaction.
//!
//! Wraps a child element and delivers tap (mouse down) events with automatic
//! hit-testing: events arrive only when they occur within the component's
//! bounds, with coordinates relative to its top-left.

use iocraft::prelude::*;

/// Props for the Tappable component
#[derive(Default, Props)]
pub struct TappableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked on tap; absent means the region is inert
    pub on_tap: Option<Handler<()>>,
}

/// Generic tap-target wrapper with automatic hit-testing
///
/// Uses `use_local_terminal_events`, which only delivers events that land
/// inside the component's rendered bounds.
#[component]
pub fn Tappable<'a>(props: &mut TappableProps<'a>, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let on_tap = props.on_tap.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event {
                if matches!(mouse_event.kind, MouseEventKind::Down(_)) {
                    if let Some(ref handler) = on_tap {
                        handler(());
                    }
                }
            }
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}
