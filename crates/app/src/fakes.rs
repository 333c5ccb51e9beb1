//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::time::Duration;

use jotasite_domain::error::{SiteError, ValidationError};
use jotasite_domain::markup::{self, Node};

use crate::ports::{Document, Element, Location, Scheduler};

#[derive(Debug, Default)]
pub struct ElementState {
    pub styles: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub html: Option<String>,
    pub replace_count: usize,
}

/// Element whose state is shared between clones, like a DOM handle.
#[derive(Debug, Clone, Default)]
pub struct FakeElement(pub Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn html(&self) -> Option<String> {
        self.0.borrow().html.clone()
    }

    pub fn replace_count(&self) -> usize {
        self.0.borrow().replace_count
    }
}

impl Element for FakeElement {
    fn set_style_property(&self, property: &str, value: &str) -> Result<(), SiteError> {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), SiteError> {
        let mut state = self.0.borrow_mut();
        if present {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
        Ok(())
    }

    fn replace_children(&self, nodes: &[Node]) -> Result<(), SiteError> {
        let mut state = self.0.borrow_mut();
        state.html = Some(markup::to_html(nodes));
        state.replace_count += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeDocument {
    pub by_id: HashMap<String, FakeElement>,
    pub by_selector: HashMap<String, Vec<FakeElement>>,
}

impl FakeDocument {
    pub fn with_id(mut self, id: &str) -> (Self, FakeElement) {
        let el = FakeElement::default();
        self.by_id.insert(id.to_string(), el.clone());
        (self, el)
    }

    pub fn with_many(mut self, selector: &str, count: usize) -> (Self, Vec<FakeElement>) {
        let els: Vec<FakeElement> = (0..count).map(|_| FakeElement::default()).collect();
        self.by_selector.insert(selector.to_string(), els.clone());
        (self, els)
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.by_id.get(id).cloned()
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<FakeElement>, SiteError> {
        if selector.is_empty() {
            return Err(ValidationError::EmptyField("selector").into());
        }
        Ok(self.by_selector.get(selector).cloned().unwrap_or_default())
    }
}

pub struct FakeLocation(pub &'static str);

impl Location for FakeLocation {
    fn search(&self) -> Result<String, SiteError> {
        Ok(self.0.to_string())
    }
}

/// Counts live timers; a handle decrements the count when dropped.
#[derive(Debug, Clone, Default)]
pub struct FakeScheduler {
    pub alive: Rc<Cell<usize>>,
    pub started: Rc<Cell<usize>>,
    pub last_period: Rc<Cell<Option<Duration>>>,
}

pub struct FakeTimer(Rc<Cell<usize>>);

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl Scheduler for FakeScheduler {
    type Handle = FakeTimer;

    fn every(&self, period: Duration) -> FakeTimer {
        self.alive.set(self.alive.get() + 1);
        self.started.set(self.started.get() + 1);
        self.last_period.set(Some(period));
        FakeTimer(Rc::clone(&self.alive))
    }
}
