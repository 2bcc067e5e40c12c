use std::cell::RefCell;
use std::rc::Rc;

use pixel_paint::input::{PointerSample, PointerTracker};
use pixel_paint::{
    CanvasRenderer, Color, Coord, Editor, EditorEvent, EventBus, EventHandler, InputEvent,
    route_event,
};

/// Records every notification it receives
#[derive(Default)]
struct Recorder {
    events: Vec<EditorEvent>,
}

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.push(event.clone());
    }
}

fn bus_with_recorder() -> (EventBus, Rc<RefCell<Recorder>>) {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    let bus = EventBus::new();
    bus.subscribe(Box::new(Rc::clone(&recorder)));
    (bus, recorder)
}

#[test]
fn test_route_event_publishes_notifications() {
    let mut editor = Editor::default();
    let (bus, recorder) = bus_with_recorder();

    let count = route_event(&InputEvent::PointerPress(Coord::new(2, 3)), &mut editor, &bus).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        recorder.borrow().events,
        vec![
            EditorEvent::StrokeStarted { tool: pixel_paint::ToolKind::Pen },
            EditorEvent::CellChanged {
                row: 2,
                col: 3,
                color: Color::BLACK,
            },
        ]
    );
}

#[test]
fn test_rejected_event_publishes_nothing() {
    let mut editor = Editor::default();
    let (bus, recorder) = bus_with_recorder();

    assert!(route_event(&InputEvent::PointerPress(Coord::new(-1, 0)), &mut editor, &bus).is_err());
    assert!(route_event(&InputEvent::ResizeRequested(0), &mut editor, &bus).is_err());
    assert!(recorder.borrow().events.is_empty());
}

#[test]
fn test_renderer_mirrors_grid_through_bus() {
    let mut editor = Editor::default();
    let renderer = Rc::new(RefCell::new(CanvasRenderer::new(editor.grid())));
    let bus = EventBus::new();
    bus.subscribe(Box::new(Rc::clone(&renderer)));
    assert_eq!(bus.handler_count(), 1);

    let red = Color::rgb(255, 0, 0);
    for event in [
        InputEvent::ColorPicked(red),
        InputEvent::SymmetryToggled(true),
        InputEvent::PointerPress(Coord::new(0, 0)),
        InputEvent::PointerDrag(Coord::new(1, 0)),
        InputEvent::PointerRelease,
        InputEvent::ToolSelected(pixel_paint::ToolKind::Fill),
        InputEvent::ColorPicked(Color::rgb(0, 0, 255)),
    ] {
        route_event(&event, &mut editor, &bus).unwrap();
    }

    let size = editor.grid().size();
    {
        let view = renderer.borrow();
        for row in 0..size {
            for col in 0..size {
                let cell = editor.grid().get((row as i32, col as i32)).unwrap();
                assert_eq!(view.pixel(row, col), Some(cell.into()));
            }
        }
        assert_eq!(view.pixel(0, size - 1), Some(red.into()));
    }

    route_event(&InputEvent::ResizeRequested(10), &mut editor, &bus).unwrap();
    assert_eq!(renderer.borrow().size(), 10);
}

#[test]
fn test_pointer_tracker_emits_press_drag_release() {
    let mut tracker = PointerTracker::new();
    let at = |row, col| Some(Coord::new(row, col));

    let events = tracker.update(PointerSample {
        pressed: true,
        down: true,
        released: false,
        cell: at(1, 1),
    });
    assert_eq!(events, vec![InputEvent::PointerPress(Coord::new(1, 1))]);

    // Staying on the same cell does not repeat
    let held = |cell| PointerSample {
        pressed: false,
        down: true,
        released: false,
        cell,
    };
    assert!(tracker.update(held(at(1, 1))).is_empty());
    assert_eq!(
        tracker.update(held(at(1, 2))),
        vec![InputEvent::PointerDrag(Coord::new(1, 2))]
    );
    // Leaving the canvas produces nothing, coming back does
    assert!(tracker.update(held(None)).is_empty());
    assert_eq!(
        tracker.update(held(at(2, 2))),
        vec![InputEvent::PointerDrag(Coord::new(2, 2))]
    );

    let events = tracker.update(PointerSample {
        pressed: false,
        down: false,
        released: true,
        cell: None,
    });
    assert_eq!(events, vec![InputEvent::PointerRelease]);
    assert!(!tracker.is_tracking());
}

#[test]
fn test_pointer_tracker_ignores_presses_off_canvas() {
    let mut tracker = PointerTracker::new();
    let events = tracker.update(PointerSample {
        pressed: true,
        down: true,
        released: false,
        cell: None,
    });
    assert!(events.is_empty());

    let events = tracker.update(PointerSample {
        pressed: false,
        down: true,
        released: false,
        cell: Some(Coord::new(0, 0)),
    });
    assert!(events.is_empty());
    assert!(!tracker.is_tracking());
}

#[test]
fn test_quick_click_presses_and_releases() {
    let mut tracker = PointerTracker::new();
    let events = tracker.update(PointerSample {
        pressed: true,
        down: false,
        released: true,
        cell: Some(Coord::new(3, 4)),
    });
    assert_eq!(
        events,
        vec![InputEvent::PointerPress(Coord::new(3, 4)), InputEvent::PointerRelease]
    );
}
