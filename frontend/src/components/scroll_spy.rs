use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Window};
use yew::prelude::*;

use crate::config::STICKY_HEADER_OFFSET;
use crate::scroll_spy::{active_section, reference_coordinate, ActiveSection, Section, SectionOffset};

/// A live scroll listener for one set of sections.
///
/// Scroll events only schedule an animation frame, so detection runs at most
/// once per rendered frame. Dropping it removes the listener and cancels any
/// frame still pending.
pub struct ScrollSpy {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    pending_frame: Rc<Cell<Option<i32>>>,
}

struct Tracker {
    window: Window,
    observed: Vec<(&'static str, Element)>,
    header_offset: f64,
    active: RefCell<ActiveSection>,
    on_change: Box<dyn Fn(String)>,
}

impl Tracker {
    fn tick(&self) {
        let scroll_y = match self.window.scroll_y() {
            Ok(y) => y,
            Err(_) => {
                debug!("Scroll position unavailable, skipping tick");
                return;
            }
        };

        // All reads first, no writes in between.
        let offsets: Vec<SectionOffset> = self
            .observed
            .iter()
            .map(|(id, el)| SectionOffset {
                id: *id,
                top: el.get_bounding_client_rect().top() + scroll_y,
            })
            .collect();

        let candidate = active_section(&offsets, reference_coordinate(scroll_y, self.header_offset));
        let changed_to = {
            let mut active = self.active.borrow_mut();
            if active.observe(candidate) {
                active.current().map(str::to_string)
            } else {
                None
            }
        };
        if let Some(id) = changed_to {
            (self.on_change)(id);
        }
    }
}

impl ScrollSpy {
    /// Starts watching the sections in `ids` that exist on the page.
    ///
    /// Returns `None` if none of them do; there is nothing to track then.
    pub fn attach<F>(ids: &[&'static str], header_offset: f64, on_change: F) -> Option<Self>
    where
        F: Fn(String) + 'static,
    {
        let window = web_sys::window()?;
        let document = window.document()?;

        let observed: Vec<(&'static str, Element)> = ids
            .iter()
            .filter_map(|id| document.get_element_by_id(id).map(|el| (*id, el)))
            .collect();
        if observed.is_empty() {
            debug!("No sections found for {:?}, scroll spy idle", ids);
            return None;
        }

        let tracker = Rc::new(Tracker {
            window: window.clone(),
            observed,
            header_offset,
            active: RefCell::new(ActiveSection::default()),
            on_change: Box::new(on_change),
        });
        let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let on_frame = {
            let tracker = tracker.clone();
            let pending_frame = pending_frame.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                pending_frame.set(None);
                tracker.tick();
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let tracker = tracker.clone();
            let pending_frame = pending_frame.clone();
            Closure::wrap(Box::new(move || {
                if pending_frame.get().is_some() {
                    return;
                }
                match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                    Ok(handle) => pending_frame.set(Some(handle)),
                    Err(_) => tracker.tick(),
                }
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            debug!("Could not attach scroll listener");
            return None;
        }

        // Initial check so a reloaded, already scrolled page is highlighted.
        tracker.tick();

        Some(Self {
            window,
            on_scroll,
            pending_frame,
        })
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(handle) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// Active section id for `sections`, or `None` until one has been reached.
///
/// The listener lives exactly as long as the calling component, so every
/// mount starts from nothing.
#[hook]
pub fn use_scroll_spy(sections: Vec<Section>) -> Option<String> {
    let active = use_state_eq(|| None::<String>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |sections: &Vec<Section>| {
                let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
                let spy = ScrollSpy::attach(&ids, STICKY_HEADER_OFFSET, move |id| {
                    active.set(Some(id));
                });
                move || drop(spy)
            },
            sections,
        );
    }

    (*active).clone()
}
