use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::Hero;
use crate::data::cities::HOST_CITIES;
use crate::data::groups::GROUPS;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero
                title="World Cup 2026 Travel Guides"
                subtitle="Where to stay, how to get to the stadium and when your team plays, for every host city we've covered so far."
                image="/assets/home-hero.webp"
                image_alt="Fans waving flags outside a stadium"
                eyebrow={Some("Canada · Mexico · USA".to_string())}
            />

            <section class="home-section">
                <h2>{"Host cities"}</h2>
                <div class="home-grid">
                    { for HOST_CITIES.iter().map(|city| html! {
                        <Link<Route> to={Route::CityGuide { slug: city.slug.to_string() }} classes="home-card">
                            <img src={city.hero_image} alt={city.hero_alt} loading="lazy" />
                            <div class="home-card-body">
                                <h3>{city.name}</h3>
                                <p>{format!("{} · {}", city.stadium, city.country)}</p>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="home-section">
                <h2>{"Group guides"}</h2>
                <div class="home-grid">
                    { for GROUPS.iter().map(|group| html! {
                        <Link<Route> to={Route::GroupGuide { letter: group.letter.to_lowercase() }} classes="home-card">
                            <div class="home-card-body">
                                <h3>{format!("Group {}", group.letter)}</h3>
                                <p>{group.teams.iter().map(|t| t.name).collect::<Vec<_>>().join(" · ")}</p>
                            </div>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    min-height: 100vh;
                    color: #fff;
                    background: #1a1a1a;
                }
                .home-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }
                .home-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .home-card {
                    display: block;
                    border-radius: 12px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    color: inherit;
                    text-decoration: none;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }
                .home-card:hover {
                    transform: translateY(-3px);
                    border-color: rgba(30, 144, 255, 0.5);
                }
                .home-card img {
                    width: 100%;
                    height: 160px;
                    object-fit: cover;
                    display: block;
                }
                .home-card-body {
                    padding: 1rem 1.25rem;
                }
                .home-card-body p {
                    color: #999;
                    margin: 0.25rem 0 0;
                }
                "#}
            </style>
        </div>
    }
}
