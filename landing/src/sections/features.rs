use super::actions::free_trial;
use super::icons::{ICON_BAR_CHART, ICON_BRAIN, ICON_CODE, ICON_GLOBE, ICON_SHIELD, ICON_ZAP, Icon};
use crate::toast::use_toasts;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent gradient class for the icon tile
    pub accent: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_BRAIN,
        title: "AI-Powered Intelligence",
        description: "Advanced machine learning algorithms automatically understand website structures and extract relevant data with human-like precision.",
        accent: "accent-purple",
    },
    Feature {
        icon: ICON_ZAP,
        title: "Lightning Fast",
        description: "Process thousands of pages per minute with our optimized infrastructure. Get your data when you need it, not when it's convenient.",
        accent: "accent-blue",
    },
    Feature {
        icon: ICON_SHIELD,
        title: "Enterprise Security",
        description: "Bank-grade encryption, GDPR compliance, and secure data handling ensure your scraping operations remain private and protected.",
        accent: "accent-green",
    },
    Feature {
        icon: ICON_GLOBE,
        title: "Global Scale",
        description: "Scrape websites from anywhere in the world with our distributed network of servers and intelligent proxy rotation.",
        accent: "accent-orange",
    },
    Feature {
        icon: ICON_CODE,
        title: "No Code Required",
        description: "Simply describe what data you need in plain English. Our AI understands your requirements and handles the technical complexity.",
        accent: "accent-pink",
    },
    Feature {
        icon: ICON_BAR_CHART,
        title: "Real-time Analytics",
        description: "Monitor your scraping jobs with detailed analytics, success rates, and performance metrics in our intuitive dashboard.",
        accent: "accent-indigo",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">
                        <span class="text-gradient">"Powerful Features"</span>
                    </h2>
                    <p class="section-description">
                        "Everything you need to extract, process, and analyze web data at scale. "
                        "Built for developers, designed for everyone."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>
                <div class="cta-banner reveal">
                    <h3 class="cta-title">"Ready to Experience the Power?"</h3>
                    <p class="cta-description">
                        "Join thousands of developers and businesses who trust ScrapeAi for their data extraction needs."
                    </p>
                    <button class="btn btn-light" on:click=move |_| toasts.show(free_trial())>
                        "Start Free Trial"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let delay = format!("--delay: {:.1}s", index as f64 * 0.1);
    let tile_class = format!("feature-icon {}", feature.accent);

    view! {
        <article class="feature-card reveal" style=delay>
            <div class=tile_class>
                <Icon path=feature.icon size="24" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
