use super::actions::{CONTACT_SALES, SCHEDULE_DEMO, plan_selected};
use super::icons::{ICON_CHECK, ICON_STAR, ICON_ZAP, Icon};
use crate::toast::use_toasts;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub popular: bool,
    pub accent: &'static str,
}

impl Plan {
    /// Only numeric prices are billed monthly; "Free" and "Custom" are labels.
    pub fn is_monthly(&self) -> bool {
        !matches!(self.price, "Free" | "Custom")
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "Free",
        description: "Perfect for trying out ScrapeAi",
        features: &[
            "1,000 pages per month",
            "Basic AI extraction",
            "JSON/CSV export",
            "Email support",
            "Basic analytics",
        ],
        button_text: "Get Started",
        popular: false,
        accent: "accent-gray",
    },
    Plan {
        name: "Professional",
        price: "$49",
        description: "For growing businesses and developers",
        features: &[
            "50,000 pages per month",
            "Advanced AI extraction",
            "All export formats",
            "Priority support",
            "Advanced analytics",
            "API access",
            "Custom scheduling",
        ],
        button_text: "Start Free Trial",
        popular: true,
        accent: "accent-purple",
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        description: "For large-scale operations",
        features: &[
            "Unlimited pages",
            "Custom AI models",
            "White-label solution",
            "24/7 dedicated support",
            "Advanced security",
            "Custom integrations",
            "SLA guarantee",
            "On-premise deployment",
        ],
        button_text: "Contact Sales",
        popular: false,
        accent: "accent-indigo",
    },
];

pub const FAQ: &[(&str, &str)] = &[
    (
        "Can I change plans anytime?",
        "Yes, you can upgrade or downgrade your plan at any time. Changes take effect immediately.",
    ),
    (
        "What happens if I exceed my limit?",
        "We'll notify you before you reach your limit. You can upgrade or purchase additional pages.",
    ),
    (
        "Is there a free trial?",
        "Yes, all paid plans come with a 14-day free trial. No credit card required.",
    ),
    (
        "Do you offer refunds?",
        "We offer a 30-day money-back guarantee for all paid plans. No questions asked.",
    ),
];

#[component]
pub fn Pricing() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">
                        <span class="text-gradient">"Simple Pricing"</span>
                    </h2>
                    <p class="section-description">
                        "Choose the perfect plan for your needs. Start free, scale as you grow. "
                        "No hidden fees, no surprises."
                    </p>
                </div>

                <div class="pricing-grid">
                    {PLANS
                        .iter()
                        .enumerate()
                        .map(|(index, plan)| view! { <PlanCard plan=*plan index=index /> })
                        .collect_view()}
                </div>

                <div class="faq reveal">
                    <h3 class="faq-title">"Frequently Asked Questions"</h3>
                    <div class="faq-grid">
                        {FAQ
                            .iter()
                            .map(|(question, answer)| {
                                view! {
                                    <div class="faq-item">
                                        <h4 class="faq-question">{*question}</h4>
                                        <p class="faq-answer">{*answer}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="cta-banner reveal">
                    <h3 class="cta-title">"Still Have Questions?"</h3>
                    <p class="cta-description">
                        "Our team is here to help you choose the right plan and get started with ScrapeAi."
                    </p>
                    <div class="cta-actions">
                        <button class="btn btn-light" on:click=move |_| toasts.show(CONTACT_SALES)>
                            "Contact Sales"
                        </button>
                        <button class="btn btn-ghost" on:click=move |_| toasts.show(SCHEDULE_DEMO)>
                            "Schedule Demo"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: Plan, index: usize) -> impl IntoView {
    let toasts = use_toasts();
    let card_class = if plan.popular { "plan-card popular reveal" } else { "plan-card reveal" };
    let button_class = if plan.popular { "btn btn-primary btn-block" } else { "btn btn-outline btn-block" };
    let badge_class = format!("plan-icon {}", plan.accent);
    let delay = format!("--delay: {:.1}s", index as f64 * 0.1);

    view! {
        <article class=card_class style=delay>
            {plan.popular.then(|| view! {
                <div class="plan-ribbon">
                    <Icon path=ICON_STAR size="16" />
                    "Most Popular"
                </div>
            })}
            <header class="plan-header">
                <div class=badge_class>
                    <Icon path=ICON_ZAP size="32" />
                </div>
                <h3 class="plan-name">{plan.name}</h3>
                <div class="plan-price">
                    <span class="plan-amount">{plan.price}</span>
                    {plan.is_monthly().then(|| view! { <span class="plan-period">"/month"</span> })}
                </div>
                <p class="plan-description">{plan.description}</p>
            </header>
            <ul class="plan-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="plan-feature">
                                <Icon path=ICON_CHECK class="plan-check" />
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class=button_class on:click=move |_| toasts.show(plan_selected(plan.name))>
                {plan.button_text}
            </button>
        </article>
    }
}
