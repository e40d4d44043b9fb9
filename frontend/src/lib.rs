use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod gallery;
pub mod overlay;
pub mod sitemap;
pub mod components {
    pub mod escape_listener;
    pub mod preview_image;
    pub mod preview_overlay;
    pub mod section_heading;
    pub mod thumbnail_card;
    pub mod work_gallery;
}
pub mod pages {
    pub mod faq;
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = config::site();
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > 8.0);
                    }
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark">{"✦"}</span>
                    {&site.business_name}
                </Link<Route>>
                <nav class="nav-right">
                    { for sitemap::SECTIONS.iter().map(|section| html! {
                        <a class="nav-link" href={format!("#{}", section.anchor)}>{section.label}</a>
                    }) }
                    <a class="btn btn-primary nav-cta" href={contact::messenger_href(site).to_string()} target="_blank" rel="noreferrer noopener">
                        {"💬 Message me"}
                    </a>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    border-bottom: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    transition: box-shadow 0.2s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
                }
                .nav-content {
                    display: flex;
                    height: 4rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: var(--foreground);
                    text-decoration: none;
                }
                .nav-logo-mark {
                    display: inline-flex;
                    width: 2rem;
                    height: 2rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: var(--accent);
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    display: none;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--muted-foreground);
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: var(--foreground);
                }
                .nav-cta {
                    padding: 0.5rem 1rem;
                }
                @media (min-width: 640px) {
                    .nav-link {
                        display: inline-block;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

/// Startup checks on the bundled content. Problems are logged, never fatal.
pub fn check_content() {
    if let Err(e) = gallery::validate(gallery::work_items()) {
        error!("Gallery content problem: {}", e);
    }
    let site = config::site();
    info!("Serving {} ({})", site.business_name, site.base_url);
}
