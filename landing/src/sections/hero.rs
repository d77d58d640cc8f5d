use super::actions::{SCHEDULE_DEMO, get_started};
use super::icons::{ICON_ARROW_RIGHT, ICON_GLOBE, ICON_PLAY, ICON_SHIELD, ICON_ZAP, Icon};
use crate::background::{FloatingOrbs, WaterRipple};
use crate::toast::use_toasts;
use leptos::prelude::*;

const PILLS: &[(&str, &str)] = &[
    (ICON_SHIELD, "Enterprise Security"),
    (ICON_GLOBE, "Global Scale"),
    (ICON_ZAP, "Lightning Fast"),
];

pub const STATS: &[(&str, &str)] = &[
    ("10M+", "Pages Scraped"),
    ("99.9%", "Uptime"),
    ("50K+", "Happy Users"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id="home" class="hero">
            <WaterRipple />
            <div class="hero-overlay"></div>
            <FloatingOrbs />

            <div class="container hero-content">
                <div class="hero-badge fade-up" style="--delay: 0.3s">
                    <Icon path=ICON_ZAP size="16" />
                    "AI-Powered Web Scraping"
                </div>

                <h1 class="hero-title fade-up" style="--delay: 0.4s">
                    <span class="text-gradient">"Intelligent"</span>
                    <br />
                    <span>"Web Scraping"</span>
                    <br />
                    <span class="text-gradient">"Made Simple"</span>
                </h1>

                <p class="hero-description fade-up" style="--delay: 0.6s">
                    "Extract data from any website with the power of AI. "
                    "No coding required, just describe what you need and let ScrapeAi do the rest."
                </p>

                <div class="hero-pills fade-up" style="--delay: 0.7s">
                    {PILLS
                        .iter()
                        .map(|(icon, label)| {
                            view! {
                                <div class="hero-pill">
                                    <Icon path=*icon size="16" />
                                    <span>{*label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="hero-actions fade-up" style="--delay: 0.8s">
                    <button class="btn btn-primary btn-lg" on:click=move |_| toasts.show(get_started())>
                        "Start Scraping Now"
                        <Icon path=ICON_ARROW_RIGHT />
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=move |_| toasts.show(SCHEDULE_DEMO)>
                        <Icon path=ICON_PLAY />
                        "Watch Demo"
                    </button>
                </div>

                <div class="hero-stats fade-up" style="--delay: 1s">
                    {STATS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{*value}</div>
                                    <div class="hero-stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
