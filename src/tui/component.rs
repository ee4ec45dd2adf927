use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that knows how to draw itself.
///
/// Props arrive as struct fields; any presentation state the component
/// keeps (cursor, list selection) is updated during `render`, which is why it
/// takes `&mut self`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component reports to the event loop.
    type Event;

    /// Handle a `TuiEvent`, returning a component event when something the
    /// loop cares about happened.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
