use super::InputEvent;
use crate::error::EditorResult;
use crate::event::EventBus;
use crate::state::Editor;

/// Hands an input event to the editor and publishes what it produced.
///
/// Nothing is published when the editor rejects the event.
pub fn route_event(event: &InputEvent, editor: &mut Editor, bus: &EventBus) -> EditorResult<usize> {
    let events = editor.handle(event)?;
    bus.emit_all(&events);
    Ok(events.len())
}
