use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub image_alt: String,
    #[prop_or_default]
    pub eyebrow: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="guide-hero">
            // Above the fold, so load it right away.
            <img class="guide-hero-image" src={props.image.clone()} alt={props.image_alt.clone()}
                loading="eager" fetchpriority="high" sizes="100vw" />
            <div class="guide-hero-shade"></div>
            <div class="guide-hero-content">
                if let Some(eyebrow) = &props.eyebrow {
                    <span class="guide-hero-eyebrow">{eyebrow}</span>
                }
                <h1>{&props.title}</h1>
                <p>{&props.subtitle}</p>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .guide-hero {
                    position: relative;
                    min-height: 70vh;
                    display: flex;
                    align-items: flex-end;
                    overflow: hidden;
                    color: #fff;
                }
                .guide-hero-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    z-index: -2;
                }
                .guide-hero-shade {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    background: linear-gradient(
                        to bottom,
                        rgba(26, 26, 26, 0) 0%,
                        rgba(26, 26, 26, 0.95) 100%
                    );
                }
                .guide-hero-content {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 3rem;
                }
                .guide-hero-eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.8rem;
                    color: #7eb6ff;
                }
                .guide-hero h1 {
                    font-size: 2.8rem;
                    margin: 0.5rem 0;
                }
                .guide-hero p {
                    font-size: 1.15rem;
                    color: #ddd;
                    max-width: 640px;
                }
                "#}
            </style>
        </section>
    }
}
