use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll_spy;
mod components {
    pub mod accordion;
    pub mod affiliate_button;
    pub mod faq_block;
    pub mod guide_layout;
    pub mod hero;
    pub mod lightbox;
    pub mod scroll_spy;
    pub mod sticky_toc;
}
mod data {
    pub mod cities;
    pub mod faq;
    pub mod groups;
}
mod pages {
    pub mod city_guide;
    pub mod faq;
    pub mod group_guide;
    pub mod home;
    pub mod not_found;
}

use config::NAV_COMPACT_AFTER;
use data::cities::HOST_CITIES;
use pages::{
    city_guide::CityGuide,
    faq::Faq,
    group_guide::GroupGuide,
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cities/:slug")]
    CityGuide { slug: String },
    #[at("/groups/:letter")]
    GroupGuide { letter: String },
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::CityGuide { slug } => {
            info!("Rendering city guide for {}", slug);
            // Keyed so moving between cities remounts the page and its scroll spy.
            html! { <CityGuide key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::GroupGuide { letter } => {
            info!("Rendering group guide for {}", letter);
            html! { <GroupGuide key={letter.clone()} letter={letter.clone()} /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            warn!("No route matched, rendering 404");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(y > NAV_COMPACT_AFTER);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"WC26 Guides"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for HOST_CITIES.iter().map(|city| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::CityGuide { slug: city.slug.to_string() }} classes="nav-link">
                                {city.name}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.25rem 0;
                    background: rgba(26, 26, 26, 0.6);
                    backdrop-filter: blur(8px);
                    transition: padding 0.3s ease, background 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.6rem 0;
                    background: rgba(26, 26, 26, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.2rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 1.5rem;
                        background: rgba(26, 26, 26, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(Level::Info);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
