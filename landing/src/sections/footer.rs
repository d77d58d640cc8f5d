use super::icons::{ICON_ZAP, Icon, XLogo};
use crate::config::{BRAND, VERSION};
use leptos::prelude::*;

type Link = (&'static str, &'static str);

pub const LINK_GROUPS: &[(&str, &[Link])] = &[
    (
        "Product",
        &[
            ("Features", "#features"),
            ("Pricing", "#pricing"),
            ("API Documentation", "#"),
            ("Integrations", "#"),
        ],
    ),
    (
        "Company",
        &[
            ("About Us", "#"),
            ("Blog", "#"),
            ("Careers", "#"),
            ("Contact", "#"),
        ],
    ),
    (
        "Resources",
        &[
            ("Help Center", "#"),
            ("Tutorials", "#"),
            ("Community", "#"),
            ("Status", "#"),
        ],
    ),
    (
        "Legal",
        &[
            ("Privacy Policy", "#"),
            ("Terms of Service", "#"),
            ("Cookie Policy", "#"),
            ("GDPR", "#"),
        ],
    ),
];

const SOCIAL_X: &str = "https://x.com/Scrape_AIS";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <div class="footer-brand">
                            <span class="footer-logo">
                                <Icon path=ICON_ZAP size="18" />
                            </span>
                            <span class="footer-title">{BRAND}</span>
                        </div>
                        <p class="footer-tagline">
                            "Intelligent web scraping made simple. Extract data from any "
                            "website with the power of AI, no coding required."
                        </p>
                        <div class="footer-social">
                            <a href=SOCIAL_X target="_blank" rel="noopener" class="social-link" aria-label="X (Twitter)">
                                <XLogo />
                            </a>
                        </div>
                    </div>

                    {LINK_GROUPS
                        .iter()
                        .map(|(heading, links)| {
                            view! {
                                <div class="footer-column">
                                    <h3 class="footer-heading">{*heading}</h3>
                                    <ul class="footer-links">
                                        {links
                                            .iter()
                                            .map(|(label, href)| {
                                                view! {
                                                    <li>
                                                        <a href=*href class="footer-link">{*label}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                // Newsletter: collected nowhere yet, the form is presentational
                <div class="footer-newsletter">
                    <div>
                        <h3 class="footer-heading">"Stay Updated"</h3>
                        <p class="footer-muted">"Get the latest updates and insights about web scraping."</p>
                    </div>
                    <div class="newsletter-form">
                        <input type="email" class="newsletter-input" placeholder="Enter your email" />
                        <button class="btn btn-primary newsletter-button">"Subscribe"</button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© 2025 {BRAND}. All rights reserved. {VERSION}")}
                    </p>
                    <div class="footer-bottom-links">
                        <a href="#" class="footer-link">"Security"</a>
                        <a href="#" class="footer-link">"Compliance"</a>
                        <a href="#" class="footer-link">"Accessibility"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_groups_of_four() {
        assert_eq!(LINK_GROUPS.len(), 4);
        assert!(LINK_GROUPS.iter().all(|(_, links)| links.len() == 4));
    }

    #[test]
    fn in_page_anchors_point_at_sections() {
        let anchors: Vec<_> = LINK_GROUPS
            .iter()
            .flat_map(|(_, links)| links.iter())
            .filter(|(_, href)| href.len() > 1)
            .map(|(_, href)| *href)
            .collect();
        assert_eq!(anchors, vec!["#features", "#pricing"]);
    }
}
