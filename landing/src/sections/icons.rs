//! Inline SVG icons (24px grid, stroked).

use leptos::prelude::*;

/// Renders a stroked inline SVG icon from path data.
///
/// Paths may contain several subpaths; they are drawn with round caps and
/// joins in the current text colour.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// X (formerly Twitter) wordmark, filled.
#[component]
pub fn XLogo(#[prop(default = "20")] size: &'static str) -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width=size height=size viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"></path>
        </svg>
    }
}

pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

pub const ICON_GLOBE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

pub const ICON_BRAIN: &str = "M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 4.44-2.04z M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-4.44-2.04z";

pub const ICON_CODE: &str = "M16 18l6-6-6-6 M8 6l-6 6 6 6";

pub const ICON_BAR_CHART: &str = "M3 3v18h18 M18 17V9 M13 17V5 M8 17v-3";

pub const ICON_ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7-7 7";

pub const ICON_PLAY: &str = "M6 3l14 9-14 9V3z";

pub const ICON_CHECK: &str = "M20 6 9 17l-5-5";

pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

pub const ICON_MESSAGE: &str = "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";

pub const ICON_SETTINGS: &str = "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6z M12 1v3 M12 20v3 M4.22 4.22l2.12 2.12 M17.66 17.66l2.12 2.12 M1 12h3 M20 12h3 M4.22 19.78l2.12-2.12 M17.66 6.34l2.12-2.12";

pub const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3";

pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4 12 14.01l-3-3";

pub const ICON_INFO: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M12 16v-4 M12 8h.01";

pub const ICON_ALERT_CIRCLE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M12 8v4 M12 16h.01";

pub const ICON_X: &str = "M18 6 6 18 M6 6l12 12";

pub const ICON_MENU: &str = "M4 6h16 M4 12h16 M4 18h16";
