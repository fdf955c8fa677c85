//! Headless stand-ins for the host view.

use std::cell::Cell;
use std::rc::Rc;

use typoly_common::Rect;
use typoly_layout::ContainerMeasure;

/// Container measurement shared between the runner, which moves the
/// container around, and the mounted group, which reads it per event.
#[derive(Debug, Clone, Default)]
pub struct SharedMeasure(Rc<Cell<Option<Rect>>>);

impl SharedMeasure {
    pub fn set(&self, rect: Option<Rect>) {
        self.0.set(rect);
    }

    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }
}

impl ContainerMeasure for SharedMeasure {
    fn measure(&self) -> Option<Rect> {
        self.0.get()
    }
}
