use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub open: bool,
    pub children: Children,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let is_open = use_state(|| props.open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("accordion-item", (*is_open).then(|| "open"))}>
            <button class="accordion-toggle" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="accordion-title">{&props.title}</span>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <span class="accordion-subtitle">{subtitle}</span> }
                    } else {
                        html! {}
                    }
                }
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="accordion-body">
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .accordion-item {
                    border-bottom: 1px solid rgba(30, 144, 255, 0.15);
                }
                .accordion-toggle {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1.1rem 0;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .accordion-title {
                    flex: 1;
                    font-weight: 600;
                }
                .accordion-subtitle {
                    color: #7eb6ff;
                    font-size: 0.85rem;
                }
                .accordion-body {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }
                .accordion-item.open .accordion-body {
                    max-height: 1200px;
                    padding-bottom: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
