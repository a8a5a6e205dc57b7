/// A component that handles terminal events.
///
/// Components follow the props pattern: external data arrives as struct
/// fields or render parameters, internal presentation state (cursor, list
/// selection, scroll offset) stays inside the component.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
