// ScrapeAi landing page, Leptos 0.8 CSR

fn main() {
    scrapeai_landing::start();
}
