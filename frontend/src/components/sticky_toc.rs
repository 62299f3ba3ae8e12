use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::scroll_spy::use_scroll_spy;
use crate::config::{STICKY_HEADER_OFFSET, TOC_ITEM_HEIGHT};
use crate::scroll_spy::{indicator_index, Section};

#[derive(Properties, PartialEq)]
pub struct StickyTocProps {
    pub sections: Vec<Section>,
}

/// Smooth-scrolls so the section's top lands right under the fixed nav.
fn scroll_to_section(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let top = element.get_bounding_client_rect().top() + scroll_y - STICKY_HEADER_OFFSET;

            let options = ScrollToOptions::new();
            options.set_top(top.max(0.0));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[function_component(StickyToc)]
pub fn sticky_toc(props: &StickyTocProps) -> Html {
    let active = use_scroll_spy(props.sections.clone());

    let indicator_style = match indicator_index(&props.sections, active.as_deref()) {
        Some(row) => format!(
            "transform: translateY({}px); opacity: 1;",
            row as f64 * TOC_ITEM_HEIGHT
        ),
        None => "opacity: 0;".to_string(),
    };

    html! {
        <nav class="sticky-toc" aria-label="On this page">
            <p class="sticky-toc-heading">{"On this page"}</p>
            <div class="sticky-toc-track">
                <div class="sticky-toc-indicator" style={indicator_style}></div>
                <ul>
                    { for props.sections.iter().map(|section| {
                        let is_active = active.as_deref() == Some(section.id);
                        let id = section.id;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                        });
                        html! {
                            <li key={section.id}>
                                <a
                                    href={format!("#{}", section.id)}
                                    class={classes!("sticky-toc-link", is_active.then(|| "active"))}
                                    aria-current={is_active.then(|| "location")}
                                    onclick={onclick}
                                >
                                    {section.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
            <style>
                {format!(r#"
                .sticky-toc {{
                    position: sticky;
                    top: {header}px;
                    align-self: start;
                    padding: 1rem 0;
                }}
                .sticky-toc-heading {{
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    color: #999;
                    margin: 0 0 0.5rem 1rem;
                }}
                .sticky-toc-track {{
                    position: relative;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                }}
                .sticky-toc-indicator {{
                    position: absolute;
                    left: -2px;
                    top: 0;
                    width: 2px;
                    height: {row}px;
                    background: #1e90ff;
                    transition: transform 0.25s ease, opacity 0.25s ease;
                }}
                .sticky-toc ul {{
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }}
                .sticky-toc-link {{
                    display: flex;
                    align-items: center;
                    height: {row}px;
                    padding-left: 1rem;
                    color: #999;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }}
                .sticky-toc-link:hover,
                .sticky-toc-link.active {{
                    color: #fff;
                }}
                @media (max-width: 900px) {{
                    .sticky-toc {{
                        display: none;
                    }}
                }}
                "#, header = STICKY_HEADER_OFFSET, row = TOC_ITEM_HEIGHT)}
            </style>
        </nav>
    }
}
