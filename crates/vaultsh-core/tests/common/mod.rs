//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use vaultsh_core::ports::Scheduler;
use vaultsh_core::{Collaborators, ManualClock, MemoryStore, Page};

/// Scheduler that queues tasks until flushed.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|(d, _)| *d).collect()
    }

    /// Run every queued task in scheduling order.
    pub fn flush(&self) {
        let tasks: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }

    /// Run only the oldest queued task.
    pub fn run_next(&self) {
        let task = {
            let mut queue = self.queue.borrow_mut();
            if queue.is_empty() {
                return;
            }
            queue.remove(0).1
        };
        task();
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push((delay, task));
    }
}

/// Records every capability call.
#[derive(Clone, Default)]
pub struct Recorder {
    pub pages: Rc<RefCell<Vec<Page>>>,
    pub exits: Rc<Cell<usize>>,
    pub clipboard: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn collaborators(&self, scheduler: &ManualScheduler) -> Collaborators {
        let pages = Rc::clone(&self.pages);
        let exits = Rc::clone(&self.exits);
        let clipboard = Rc::clone(&self.clipboard);
        Collaborators::new()
            .with_navigator(move |page: Page| pages.borrow_mut().push(page))
            .with_exit(move || exits.set(exits.get() + 1))
            .with_clipboard(move |text: &str| clipboard.borrow_mut().push(text.to_string()))
            .with_scheduler(scheduler.clone())
    }

    pub fn pages(&self) -> Vec<Page> {
        self.pages.borrow().clone()
    }

    pub fn copied(&self) -> Vec<String> {
        self.clipboard.borrow().clone()
    }
}

pub fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
}

pub fn store(clock: &ManualClock) -> Rc<MemoryStore> {
    Rc::new(MemoryStore::with_clock(clock.clone()))
}
