use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::components::work_gallery::WorkGallery;
use crate::config::{self, PageMeta};
use crate::contact;
use crate::pages::faq::FaqSection;

static TRUST_CHIPS: [&str; 4] = [
    "✅ Mobile-first",
    "✅ Clear scope",
    "✅ Deployed on Vercel",
    "✅ Domains optional",
];

static FIT_CHECK: [&str; 5] = [
    "Business name + what you do",
    "Your services (dot points)",
    "Your location (Cairns/FNQ or elsewhere)",
    "Do you already own a domain? (yes/no)",
    "Any links (Facebook/Instagram/current site)",
];

static VALUE_POINTS: [(&str, &str, &str); 3] = [
    (
        "accent",
        "Straightforward builds",
        "Clear scope, no jargon. You’ll know exactly what you’re getting and when.",
    ),
    (
        "warm",
        "Mobile-first design",
        "Looks great on any device. Most customers browse on their phones — your site should too.",
    ),
    (
        "plain",
        "Delivered properly",
        "Fast when needed, premium when it matters. The right level of polish for your business.",
    ),
];

static PRICING_FEATURES: [&str; 4] = [
    "Mobile-first layout",
    "Contact form",
    "Basic SEO",
    "Two tweak rounds",
];

fn set_meta_description(content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let meta = match document.query_selector("meta[name='description']") {
        Ok(Some(meta)) => meta,
        _ => {
            let Ok(meta) = document.create_element("meta") else {
                return;
            };
            let _ = meta.set_attribute("name", "description");
            if let Some(head) = document.head() {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", content);
}

#[hook]
fn use_page_metadata(meta: &'static PageMeta) {
    use_title(meta.title.clone());
    use_effect_with_deps(
        move |_| {
            set_meta_description(&meta.description);
            || ()
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct ContactButtonsProps {
    #[prop_or("Email me")]
    pub email_label: &'static str,
    #[prop_or_default]
    pub stretch: bool,
}

/// "Message me" plus the pre-filled mail link.
#[function_component(ContactButtons)]
pub fn contact_buttons(props: &ContactButtonsProps) -> Html {
    let site = config::site();
    html! {
        <div class={classes!("cta-row", props.stretch.then(|| "cta-row-stretch"))}>
            <a class="btn btn-primary btn-lg" href={contact::messenger_href(site).to_string()} target="_blank" rel="noreferrer noopener">
                {"💬 Message me"}
            </a>
            <a class="btn btn-outline btn-lg" href={contact::mailto_href(site)}>
                {format!("✉ {}", props.email_label)}
            </a>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let site = config::site();
    use_page_metadata(&site.meta);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            // Hero
            <section class="hero">
                <div class="hero-glow hero-glow-left"></div>
                <div class="hero-glow hero-glow-right"></div>
                <div class="container hero-content">
                    <div class="hero-location">
                        {format!("Built by a local business owner ({})", site.location)}
                    </div>
                    <h1>
                        {"Websites built properly —"}
                        <span class="hero-soft">{" fast launches to premium custom builds"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Clean, professional websites for small businesses. No agency fluff, no drawn-out timelines — just clear scope, fast delivery, and a site you’re proud to send customers to."}
                    </p>
                    <ContactButtons />
                    <div class="hero-chips">
                        { for TRUST_CHIPS.iter().map(|chip| html! { <span class="chip">{*chip}</span> }) }
                    </div>
                </div>
            </section>

            // Work preview
            <section id="work" class="band">
                <div class="container section-pad">
                    <SectionHeading
                        eyebrow="Proof"
                        title="A quick look at the style"
                        subtitle="Real sites. Clean layout, clear messaging, premium feel."
                    />
                    <WorkGallery />
                    <div class="section-note">
                        {"Click any preview to see the full screenshot — no crop."}
                    </div>
                </div>
            </section>

            // Fit check
            <section class="container section-pad">
                <SectionHeading
                    eyebrow="Start here"
                    title="Quick fit check"
                    subtitle="If you can answer these 5 things, I can tell you straight away if the $750 build is a good fit."
                />
                <div class="narrow">
                    <div class="card card-roomy">
                        <ul class="check-list">
                            { for FIT_CHECK.iter().map(|item| html! {
                                <li><span class="check">{"✓"}</span><span>{*item}</span></li>
                            }) }
                        </ul>
                        <ContactButtons email_label="Email with template" stretch=true />
                        <div class="fine-print">
                            {"No logo? No worries. We can still get something clean live quickly."}
                        </div>
                    </div>
                </div>
            </section>

            // Value proposition
            <section class="band">
                <div class="container section-pad">
                    <SectionHeading
                        eyebrow="Why this works"
                        title="Simple, professional, done properly"
                        subtitle="You don’t need an agency. You need a clean site that turns visitors into calls."
                    />
                    <div class="value-grid">
                        { for VALUE_POINTS.iter().map(|(tone, title, body)| html! {
                            <div class="card card-roomy value-card">
                                <div class={classes!("value-icon", format!("value-icon-{}", tone))}>{"→"}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Pricing
            <section id="pricing" class="container section-pad">
                <SectionHeading
                    eyebrow="Pricing"
                    title="Simple and transparent"
                    subtitle="One straightforward option to get you live — premium builds quoted separately."
                />
                <div class="narrow">
                    <div class="card card-roomy pricing-card">
                        <div class="pricing-layout">
                            <div>
                                <h3 class="pricing-name">{"Fast Launch Website"}</h3>
                                <p class="muted">
                                    {"Ideal for tradies, local services, and small businesses who want a clean site live quickly."}
                                </p>
                                <p class="muted small">{"Custom & premium builds scoped separately."}</p>
                                <div class="pricing-features">
                                    { for PRICING_FEATURES.iter().map(|feature| html! {
                                        <div class="pricing-feature"><span class="dot"></span>{*feature}</div>
                                    }) }
                                </div>
                            </div>
                            <div class="price-box">
                                <div class="price-label">{"Price"}</div>
                                <div class="price-amount">{"$750"}</div>
                                <div class="muted small">{"AUD — one-off"}</div>
                                <a class="btn btn-primary btn-lg btn-block" href={contact::messenger_href(site).to_string()} target="_blank" rel="noreferrer noopener">
                                    {"Message me to check fit"}
                                </a>
                                <div class="fine-print">{"Domain is optional and can be added after launch."}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <FaqSection />

            // Contact
            <section id="contact" class="band">
                <div class="container section-pad contact">
                    <h2>{"If you want a website done properly without the runaround, let’s chat."}</h2>
                    <p class="muted contact-lead">{"Message me and I’ll tell you straight up if it’s a good fit."}</p>
                    <ContactButtons />
                    <div class="fine-print">
                        {format!("{} • Built by {} • {}", site.business_name, site.author, site.location)}
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p class="footer-title">{format!("© {} — Built by {}", site.business_name, site.author)}</p>
                <p class="muted small">{&site.tagline}</p>
            </footer>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    background: var(--background);
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-left: 1.5rem;
                    padding-right: 1.5rem;
                }
                .section-pad {
                    padding-top: 4rem;
                    padding-bottom: 4rem;
                }
                @media (min-width: 1024px) {
                    .section-pad {
                        padding-top: 6rem;
                        padding-bottom: 6rem;
                    }
                }
                .band {
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                    background: var(--muted-soft);
                }
                .narrow {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .card {
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .card-roomy {
                    padding: 2rem;
                }
                .muted {
                    color: var(--muted-foreground);
                }
                .small {
                    font-size: 0.875rem;
                }
                .fine-print {
                    margin-top: 1.5rem;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                .section-heading {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    text-align: center;
                }
                .section-eyebrow {
                    margin-bottom: 0.75rem;
                }
                .section-eyebrow span,
                .chip {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.6);
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: var(--muted-foreground);
                }
                .section-heading h2,
                .contact h2 {
                    font-size: clamp(1.875rem, 3vw, 2.25rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    color: var(--foreground);
                }
                .section-subtitle {
                    margin-top: 0.75rem;
                    color: var(--muted-foreground);
                }
                .section-note {
                    max-width: 48rem;
                    margin: 2.5rem auto 0;
                    text-align: center;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .btn-lg {
                    padding: 0.75rem 2rem;
                }
                .btn-sm {
                    padding: 0.375rem 0.75rem;
                    font-size: 0.875rem;
                }
                .btn-block {
                    width: 100%;
                    margin-top: 1.5rem;
                }
                .btn-primary {
                    background: var(--foreground);
                    color: var(--background);
                }
                .btn-outline {
                    border: 1px solid var(--border);
                    background: var(--background);
                    color: var(--foreground);
                }
                .btn:hover {
                    transform: translateY(-1px);
                }
                .cta-row {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .cta-row-stretch .btn {
                    flex: 1 1 12rem;
                }
                .hero {
                    position: relative;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    width: 520px;
                    height: 520px;
                    border-radius: 50%;
                    filter: blur(64px);
                    pointer-events: none;
                }
                .hero-glow-left {
                    left: -6rem;
                    top: 6rem;
                    background: hsla(var(--brand-accent), 0.1);
                }
                .hero-glow-right {
                    right: -6rem;
                    top: 9rem;
                    background: hsla(var(--brand-warm), 0.1);
                }
                .hero-content {
                    position: relative;
                    max-width: 64rem;
                    padding-top: 5rem;
                    padding-bottom: 5rem;
                    text-align: center;
                }
                .hero-location {
                    margin-bottom: 1.5rem;
                    font-size: 0.75rem;
                    color: var(--muted-foreground);
                }
                .hero h1 {
                    margin-bottom: 1.5rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    color: var(--foreground);
                }
                .hero-soft {
                    opacity: 0.8;
                }
                .hero-lead {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                }
                .hero-chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2.5rem;
                }
                .check-list {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    gap: 1rem;
                }
                .check-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: var(--foreground);
                }
                .check {
                    color: hsl(var(--brand-accent));
                    font-weight: 700;
                }
                .value-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .value-grid {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                }
                .value-card h3 {
                    margin-bottom: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                }
                .value-card p {
                    line-height: 1.6;
                    color: var(--muted-foreground);
                }
                .value-icon {
                    display: inline-flex;
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-bottom: 1rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                }
                .value-icon-accent {
                    background: hsla(var(--brand-accent), 0.18);
                }
                .value-icon-warm {
                    background: hsla(var(--brand-warm), 0.18);
                }
                .value-icon-plain {
                    background: var(--muted);
                }
                .pricing-layout {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .pricing-layout {
                        flex-direction: row;
                        justify-content: space-between;
                    }
                    .price-box {
                        width: 320px;
                        flex-shrink: 0;
                    }
                }
                .pricing-name {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .pricing-features {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .pricing-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                }
                .dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: hsl(var(--brand-warm));
                }
                .price-box {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.6);
                }
                .price-label {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--muted-foreground);
                }
                .price-amount {
                    margin-top: 0.5rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .contact {
                    max-width: 48rem;
                    text-align: center;
                }
                .contact-lead {
                    margin-top: 0.75rem;
                    font-size: 1.125rem;
                }
                .footer {
                    padding: 2.5rem 1.5rem;
                    text-align: center;
                }
                .footer-title {
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
