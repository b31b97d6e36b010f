use crate::frontend::components::buttons::NavButton;
use crate::frontend::components::layout::sidebar::SIDEBAR_WIDTH;
use dioxus::prelude::*;

/// Horizontal distance between consecutive header buttons, in px.
pub const HEADER_ITEM_SPACING: usize = 170;

/// Left offset of the header button at `index`.
pub const fn header_offset(index: usize) -> usize {
    index * HEADER_ITEM_SPACING
}

/// Fixed header bar: one button per descriptor, left to right.
#[component]
pub fn CustomHeader(buttons: Vec<NavButton>) -> Element {
    rsx! {
        header { class: "site-header", style: "left: {SIDEBAR_WIDTH}px;",
            {
                buttons.into_iter().enumerate().map(|(index, descriptor)| {
                    let left = header_offset(index);
                    let label = descriptor.label.clone();
                    let icon = descriptor.icon.clone();

                    rsx! {
                        button {
                            key: "{index}",
                            class: "header-button",
                            style: "left: {left}px;",
                            onclick: move |_| descriptor.activate(),
                            {icon.map(|icon| rsx! { span { class: "icon", "{icon}" } })}
                            "{label}"
                        }
                    }
                })
            }
        }
    }
}
