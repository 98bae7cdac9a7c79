//! Ownership of live chart instances, keyed by canvas id.
//!
//! A canvas holds at most one chart. Replacing or releasing a chart always
//! destroys the previous instance first, so charts never stack on a canvas
//! and nothing leaks across refreshes.

use std::collections::{HashMap, HashSet};

/// A live chart that must be torn down explicitly.
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// Lifecycle of a single canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    /// No chart has ever been drawn here
    Empty,
    Rendered,
    /// A chart was drawn and later released
    Destroyed,
}

/// Registry of at most one live chart per canvas.
pub struct ChartManager<H: ChartHandle> {
    live: HashMap<String, H>,
    released: HashSet<String>,
}

impl<H: ChartHandle> Default for ChartManager<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
            released: HashSet::new(),
        }
    }
}

impl<H: ChartHandle> ChartManager<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `chart` for `canvas_id`, destroying any chart already there.
    pub fn set(&mut self, canvas_id: &str, chart: H) {
        self.release(canvas_id);
        self.released.remove(canvas_id);
        self.live.insert(canvas_id.to_string(), chart);
    }

    /// Destroy the chart on `canvas_id`. Returns false when there was none,
    /// which makes a second release a no-op.
    pub fn release(&mut self, canvas_id: &str) -> bool {
        match self.live.remove(canvas_id) {
            Some(mut chart) => {
                chart.destroy();
                self.released.insert(canvas_id.to_string());
                log::debug!("chart: released {canvas_id}");
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        let ids: Vec<String> = self.live.keys().cloned().collect();
        for id in ids {
            self.release(&id);
        }
    }

    pub fn state(&self, canvas_id: &str) -> CanvasState {
        if self.live.contains_key(canvas_id) {
            CanvasState::Rendered
        } else if self.released.contains(canvas_id) {
            CanvasState::Destroyed
        } else {
            CanvasState::Empty
        }
    }

    pub fn get(&self, canvas_id: &str) -> Option<&H> {
        self.live.get(canvas_id)
    }

    /// Number of charts currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl<H: ChartHandle> Drop for ChartManager<H> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeChart {
        id: u32,
        destroyed: Rc<Cell<u32>>,
    }

    impl ChartHandle for FakeChart {
        fn destroy(&mut self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    fn chart(id: u32, destroyed: &Rc<Cell<u32>>) -> FakeChart {
        FakeChart {
            id,
            destroyed: Rc::clone(destroyed),
        }
    }

    #[test]
    fn new_canvas_is_empty() {
        let manager: ChartManager<FakeChart> = ChartManager::new();
        assert_eq!(manager.state("tempChart"), CanvasState::Empty);
        assert_eq!(manager.live_count(), 0);
    }

    #[test]
    fn set_replaces_and_destroys_previous() {
        let destroyed = Rc::new(Cell::new(0));
        let mut manager = ChartManager::new();
        manager.set("tempChart", chart(1, &destroyed));
        manager.set("tempChart", chart(2, &destroyed));

        assert_eq!(destroyed.get(), 1);
        assert_eq!(manager.live_count(), 1);
        assert_eq!(manager.get("tempChart").map(|c| c.id), Some(2));
        assert_eq!(manager.state("tempChart"), CanvasState::Rendered);
    }

    #[test]
    fn release_twice_is_noop() {
        let destroyed = Rc::new(Cell::new(0));
        let mut manager = ChartManager::new();
        manager.set("precipChart", chart(1, &destroyed));

        assert!(manager.release("precipChart"));
        assert!(!manager.release("precipChart"));
        assert_eq!(destroyed.get(), 1);
        assert_eq!(manager.state("precipChart"), CanvasState::Destroyed);
    }

    #[test]
    fn release_unknown_canvas_is_noop() {
        let mut manager: ChartManager<FakeChart> = ChartManager::new();
        assert!(!manager.release("nope"));
        assert_eq!(manager.state("nope"), CanvasState::Empty);
    }

    #[test]
    fn canvases_are_independent() {
        let destroyed = Rc::new(Cell::new(0));
        let mut manager = ChartManager::new();
        manager.set("tempChart", chart(1, &destroyed));
        manager.set("precipChart", chart(2, &destroyed));
        manager.release("tempChart");

        assert_eq!(manager.live_count(), 1);
        assert_eq!(manager.state("precipChart"), CanvasState::Rendered);
    }

    #[test]
    fn redraw_after_release_is_rendered_again() {
        let destroyed = Rc::new(Cell::new(0));
        let mut manager = ChartManager::new();
        manager.set("tempChart", chart(1, &destroyed));
        manager.release("tempChart");
        manager.set("tempChart", chart(2, &destroyed));
        assert_eq!(manager.state("tempChart"), CanvasState::Rendered);
    }

    #[test]
    fn drop_releases_everything() {
        let destroyed = Rc::new(Cell::new(0));
        {
            let mut manager = ChartManager::new();
            manager.set("tempChart", chart(1, &destroyed));
            manager.set("precipChart", chart(2, &destroyed));
        }
        assert_eq!(destroyed.get(), 2);
    }
}
