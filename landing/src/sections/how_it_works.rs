use super::actions::{SCHEDULE_DEMO, free_trial};
use super::icons::{ICON_CHECK_CIRCLE, ICON_DOWNLOAD, ICON_MESSAGE, ICON_SETTINGS, Icon};
use crate::toast::use_toasts;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        icon: ICON_MESSAGE,
        title: "Describe Your Needs",
        description: "Simply tell us what data you want to extract in plain English. No technical knowledge required.",
        details: "Our AI understands natural language descriptions like 'Get all product prices from this e-commerce site' or 'Extract contact information from company websites'.",
    },
    Step {
        icon: ICON_SETTINGS,
        title: "AI Configures Everything",
        description: "Our intelligent system analyzes the target website and automatically configures the optimal scraping strategy.",
        details: "Advanced algorithms handle complex scenarios like dynamic content, pagination, and anti-bot measures automatically.",
    },
    Step {
        icon: ICON_DOWNLOAD,
        title: "Extract & Process",
        description: "Watch as your data is extracted in real-time with our lightning-fast processing infrastructure.",
        details: "Get structured data in your preferred format: JSON, CSV, Excel, or direct API integration with your systems.",
    },
    Step {
        icon: ICON_CHECK_CIRCLE,
        title: "Deliver Results",
        description: "Receive clean, structured data ready for analysis, reporting, or integration into your workflows.",
        details: "Quality assurance ensures 99.9% accuracy with automatic data validation and error handling.",
    },
];

/// Progress dots for step `index`: every dot up to and including it is lit.
pub fn progress(index: usize, total: usize) -> Vec<bool> {
    (0..total).map(|dot| dot <= index).collect()
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">
                        <span class="text-gradient">"How It Works"</span>
                    </h2>
                    <p class="section-description">
                        "From idea to data in minutes. Our AI-powered platform makes web scraping "
                        "as simple as having a conversation."
                    </p>
                </div>

                <div class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! { <StepRow step=*step index=index /> })
                        .collect_view()}
                </div>

                <div class="cta-card reveal">
                    <h3 class="cta-title">"Ready to Get Started?"</h3>
                    <p class="cta-description">
                        "Experience the simplicity of AI-powered web scraping. No setup required, "
                        "no technical expertise needed."
                    </p>
                    <div class="cta-actions">
                        <button class="btn btn-primary" on:click=move |_| toasts.show(free_trial())>
                            "Start Free Trial"
                        </button>
                        <button class="btn btn-outline" on:click=move |_| toasts.show(SCHEDULE_DEMO)>
                            "Schedule Demo"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepRow(step: Step, index: usize) -> impl IntoView {
    // odd rows mirror the layout
    let row_class = if index % 2 == 1 { "step-row reversed reveal" } else { "step-row reveal" };
    let delay = format!("--delay: {:.1}s", index as f64 * 0.2);

    view! {
        <div class=row_class style=delay>
            <div class="step-content">
                <div class="step-heading">
                    <div class="step-icon">
                        <Icon path=step.icon size="24" />
                    </div>
                    <span class="step-badge">{format!("Step {}", index + 1)}</span>
                </div>
                <h3 class="step-title">{step.title}</h3>
                <p class="step-description">{step.description}</p>
                <p class="step-details">{step.details}</p>
            </div>
            <div class="step-visual">
                <div class="step-visual-card">
                    <div class="step-visual-art">
                        <Icon path=step.icon size="64" />
                    </div>
                    <div class="step-progress">
                        {progress(index, STEPS.len())
                            .into_iter()
                            .map(|lit| {
                                let class = if lit { "step-dot lit" } else { "step-dot" };
                                view! { <span class=class></span> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_steps() {
        assert_eq!(STEPS.len(), 4);
    }

    #[test]
    fn progress_lights_up_to_current_step() {
        assert_eq!(progress(0, 4), vec![true, false, false, false]);
        assert_eq!(progress(2, 4), vec![true, true, true, false]);
        assert_eq!(progress(3, 4), vec![true; 4]);
    }
}
