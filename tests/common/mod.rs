//! Helpers for driving a mounted `VirtualDom` the way a renderer would.
#![allow(dead_code)]

use dioxus::dioxus_core::{ElementId, Mutation, Mutations};
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::prelude::*;
use std::any::Any;
use std::rc::Rc;

/// Lets handlers decode the serialized event payloads sent below.
pub fn install_event_converter() {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
}

/// Elements that registered a listener for `event`, in creation order.
pub fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

pub fn click(dom: &VirtualDom, id: ElementId) {
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, id);
}

/// Sends an `input` or `submit` event carrying `value`.
pub fn form_event(dom: &VirtualDom, name: &str, id: ElementId, value: &str) {
    let data = SerializedFormData::new(value.to_string(), Vec::new());
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::new(data))) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event(name, event, id);
}

/// Applies pending signal writes and returns the re-rendered markup.
pub fn settle(dom: &mut VirtualDom) -> String {
    dom.process_events();
    let _ = dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}
