use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxImageProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub caption: Option<String>,
}

/// A thumbnail that opens full size over the page. Escape or a click on the
/// backdrop closes it.
#[function_component(LightboxImage)]
pub fn lightbox_image(props: &LightboxImageProps) -> Html {
    let is_open = use_state(|| false);

    // Escape closes. The listener only exists while the overlay is open.
    {
        let is_open = is_open.clone();
        let deps = *is_open;
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    web_sys::window().map(|window| {
                        let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                is_open.set(false);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        let _ = window.add_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                        (window, on_key)
                    })
                } else {
                    None
                };

                move || {
                    if let Some((window, on_key)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            on_key.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            deps,
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let caption = props.caption.clone().unwrap_or_default();

    html! {
        <figure class="lightbox-figure">
            <button class="lightbox-thumb" onclick={open} aria-label={format!("Enlarge: {}", props.alt)}>
                <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
            </button>
            if !caption.is_empty() {
                <figcaption>{caption.clone()}</figcaption>
            }
            if *is_open {
                <div class="lightbox-overlay" role="dialog" aria-modal="true" onclick={close}>
                    <img class="lightbox-full" src={props.src.clone()} alt={props.alt.clone()} />
                    if !caption.is_empty() {
                        <p class="lightbox-caption">{caption}</p>
                    }
                </div>
            }
            <style>
                {r#"
                .lightbox-figure {
                    margin: 0;
                }
                .lightbox-thumb {
                    padding: 0;
                    border: none;
                    background: none;
                    cursor: zoom-in;
                    width: 100%;
                }
                .lightbox-thumb img {
                    width: 100%;
                    border-radius: 8px;
                    display: block;
                }
                .lightbox-figure figcaption {
                    color: #999;
                    font-size: 0.85rem;
                    margin-top: 0.4rem;
                }
                .lightbox-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(0, 0, 0, 0.9);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    cursor: zoom-out;
                }
                .lightbox-full {
                    max-width: 92vw;
                    max-height: 84vh;
                    border-radius: 6px;
                }
                .lightbox-caption {
                    color: #ddd;
                    margin-top: 0.75rem;
                }
                "#}
            </style>
        </figure>
    }
}
