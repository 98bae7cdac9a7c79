//! In-memory chart engine shared by the unit tests.

use crate::config::{ChartConfig, ChartKind};
use crate::manager::ChartHandle;
use crate::renderer::{ChartEngine, RenderError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wxd_data::{AlignedSeries, DayPoint};

#[derive(Default)]
pub struct Counters {
    pub created: Cell<u32>,
    pub destroyed: Cell<u32>,
    pub kinds: RefCell<Vec<(String, ChartKind)>>,
}

pub struct MockChart {
    counters: Rc<Counters>,
}

impl ChartHandle for MockChart {
    fn destroy(&mut self) {
        self.counters.destroyed.set(self.counters.destroyed.get() + 1);
    }
}

pub struct MockEngine {
    pub available: bool,
    pub fail_on: Option<&'static str>,
    pub counters: Rc<Counters>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            available: true,
            fail_on: None,
            counters: Rc::new(Counters::default()),
        }
    }
}

impl ChartEngine for MockEngine {
    type Handle = MockChart;

    fn is_available(&self) -> bool {
        self.available
    }

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<MockChart, RenderError> {
        if self.fail_on == Some(canvas_id) {
            return Err(RenderError::Create {
                canvas: canvas_id.to_string(),
                message: "boom".to_string(),
            });
        }
        self.counters.created.set(self.counters.created.get() + 1);
        self.counters
            .kinds
            .borrow_mut()
            .push((canvas_id.to_string(), config.kind));
        Ok(MockChart {
            counters: Rc::clone(&self.counters),
        })
    }
}

pub fn point(day: &str, temp: f64, precip: f64) -> DayPoint {
    DayPoint {
        day: day.to_string(),
        temp: Some(temp),
        precip: Some(precip),
        wind: Some(12.0),
    }
}

pub fn aligned() -> AlignedSeries {
    AlignedSeries::single("Austin", &[point("2025-07-01", 35.2, 0.0)])
}
