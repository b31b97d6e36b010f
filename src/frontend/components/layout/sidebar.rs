use crate::frontend::components::buttons::{NavButton, sidebar_buttons};
use dioxus::prelude::*;

/// Width reserved for the sidebar; the header starts after it.
pub const SIDEBAR_WIDTH: usize = 270;

/// Top offset of the first sidebar button, in px.
pub const SIDEBAR_FIRST_OFFSET: usize = 150;

/// Vertical distance between consecutive sidebar buttons, in px.
pub const SIDEBAR_ITEM_SPACING: usize = 100;

/// Top offset of the sidebar button at `index`.
pub const fn sidebar_offset(index: usize) -> usize {
    SIDEBAR_FIRST_OFFSET + index * SIDEBAR_ITEM_SPACING
}

/// Fixed sidebar column. Without `buttons` it shows the default sidebar set.
#[component]
pub fn SideBar(buttons: Option<Vec<NavButton>>) -> Element {
    let buttons = buttons.unwrap_or_else(sidebar_buttons);

    rsx! {
        aside { class: "sidebar",
            {
                buttons.into_iter().enumerate().map(|(index, descriptor)| {
                    let top = sidebar_offset(index);
                    let label = descriptor.label.clone();
                    let icon = descriptor.icon.clone();

                    rsx! {
                        button {
                            key: "{index}",
                            class: "sidebar-button",
                            style: "top: {top}px;",
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
