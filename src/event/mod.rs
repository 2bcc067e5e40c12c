mod bus;
mod events;

use std::cell::RefCell;
use std::rc::Rc;

pub use bus::EventBus;
pub use events::EditorEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}

/// Lets a handler be subscribed while its owner keeps reading it
impl<T: EventHandler + ?Sized> EventHandler for Rc<RefCell<T>> {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.borrow_mut().handle_event(event);
    }
}

/// Writes every notification to the log at debug level
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::CellChanged { .. } => log::trace!("{event:?}"),
            _ => log::debug!("{event:?}"),
        }
    }
}
