//! Navigation button descriptors.

use std::fmt;
use std::rc::Rc;

/// Zero-argument action run when a navigation button is activated.
pub type ClickHandler = Rc<dyn Fn()>;

/// Header labels, in on-screen order.
pub const HEADER_LABELS: [&str; 6] = ["おすすめ", "検索", "通知", "メッセージ", "設定", "プロフィール"];

/// Sidebar labels, in on-screen order.
pub const SIDEBAR_LABELS: [&str; 6] = ["ホーム", "検索", "通知", "メッセージ", "設定", "プロフィール"];

/// One clickable navigation item. Position in its list is its position on screen.
#[derive(Clone)]
pub struct NavButton {
    pub label: String,
    pub icon: Option<String>,
    pub on_click: Option<ClickHandler>,
}

impl NavButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            on_click: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Runs the click handler, if any.
    pub fn activate(&self) {
        if let Some(handler) = &self.on_click {
            handler();
        }
    }
}

impl PartialEq for NavButton {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (&self.on_click, &other.on_click) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.label == other.label && self.icon == other.icon && same_handler
    }
}

impl fmt::Debug for NavButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavButton")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Header buttons. Each logs a placeholder diagnostic until real pages exist.
pub fn header_buttons() -> Vec<NavButton> {
    HEADER_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let number = index + 1;
            NavButton::new(*label).on_click(move || log::info!("Header Button {number}"))
        })
        .collect()
}

/// Sidebar buttons, without actions.
pub fn sidebar_buttons() -> Vec<NavButton> {
    SIDEBAR_LABELS.iter().map(|label| NavButton::new(*label)).collect()
}
