use yew::prelude::*;

use crate::components::sticky_toc::StickyToc;
use crate::scroll_spy::Section;

#[derive(Properties, PartialEq)]
pub struct GuideLayoutProps {
    pub sections: Vec<Section>,
    pub children: Children,
}

/// Article body with the sticky table of contents beside it.
///
/// The TOC comes after the article in the markup so every section exists by
/// the time its scroll spy looks them up; CSS puts it on the left.
#[function_component(GuideLayout)]
pub fn guide_layout(props: &GuideLayoutProps) -> Html {
    html! {
        <div class="guide-layout">
            <article class="guide-article">
                { for props.children.iter() }
            </article>
            <aside class="guide-aside">
                <StickyToc sections={props.sections.clone()} />
            </aside>
            <style>
                {r#"
                .guide-layout {
                    display: grid;
                    grid-template-columns: 220px minmax(0, 1fr);
                    gap: 3rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 6rem;
                    color: #eee;
                }
                .guide-aside {
                    order: -1;
                }
                .guide-article section {
                    padding: 2rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                }
                .guide-article h2 {
                    font-size: 1.8rem;
                    margin-top: 0;
                }
                .guide-card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.25rem;
                }
                .guide-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 10px;
                    padding: 1.25rem;
                }
                .fixture-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .fixture-table th,
                .fixture-table td {
                    text-align: left;
                    padding: 0.6rem 0.5rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                @media (max-width: 900px) {
                    .guide-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
