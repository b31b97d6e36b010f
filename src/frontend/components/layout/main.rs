use crate::backend::auth::AuthUser;
use crate::backend::utils::css_loader::CssLoader;
use crate::frontend::components::buttons::header_buttons;
use crate::frontend::components::common::UserBadge;
use crate::frontend::components::layout::{CustomHeader, SideBar};
use dioxus::prelude::*;

/// Signed-in layout: sidebar, header, session badge and the content slot.
#[component]
pub fn MainLayout(user: AuthUser, children: Element) -> Element {
    let header = use_hook(header_buttons);

    rsx! {
        style {
            dangerous_inner_html: CssLoader::get_main()
        }

        div { class: "main-layout",
            SideBar {}

            CustomHeader { buttons: header }

            UserBadge { user }

            main { class: "content",
                {children}
            }
        }
    }
}
