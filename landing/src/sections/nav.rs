use super::actions::get_started;
use super::icons::{ICON_MENU, ICON_X, ICON_ZAP, Icon};
use crate::config::BRAND;
use crate::toast::use_toasts;
use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#pricing", "Pricing"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let toasts = use_toasts();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <a href=*href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav-inner container">
                <a href="#home" class="nav-brand">
                    <span class="nav-logo">
                        <Icon path=ICON_ZAP size="18" />
                    </span>
                    <span class="nav-title">{BRAND}</span>
                </a>
                <div class="nav-links">
                    {links}
                    <button class="btn btn-primary btn-sm" on:click=move |_| toasts.show(get_started())>
                        "Get Started"
                    </button>
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon path=ICON_X /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {links}
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            toasts.show(get_started());
                        }
                    >
                        "Get Started"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
