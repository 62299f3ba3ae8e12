use yew::prelude::*;
use yew_router::components::Link;

use crate::config::canonical_url;
use crate::components::accordion::Accordion;
use crate::components::affiliate_button::{AffiliateButton, Partner};
use crate::components::faq_block::FaqBlock;
use crate::components::guide_layout::GuideLayout;
use crate::components::hero::Hero;
use crate::components::lightbox::LightboxImage;
use crate::data::cities::{find_city, HostCity};
use crate::data::groups::fixtures_in_city;
use crate::pages::not_found::NotFound;
use crate::scroll_spy::Section;
use crate::Route;

/// 83000 -> "83,000"
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Sections this city has content for, in page order.
fn city_sections(city: &HostCity, has_matches: bool) -> Vec<Section> {
    let mut sections = vec![
        Section::new("overview", "Overview"),
        Section::new("stadium", "Stadium & transport"),
    ];
    if !city.neighborhoods.is_empty() {
        sections.push(Section::new("neighborhoods", "Where to stay"));
    }
    if !city.hotels.is_empty() {
        sections.push(Section::new("hotels", "Hotels"));
    }
    if has_matches {
        sections.push(Section::new("matches", "Matches"));
    }
    if !city.gallery.is_empty() {
        sections.push(Section::new("gallery", "Gallery"));
    }
    if !city.faqs.is_empty() {
        sections.push(Section::new("faq", "FAQ"));
    }
    sections
}

#[derive(Properties, PartialEq)]
pub struct CityGuideProps {
    pub slug: String,
}

#[function_component(CityGuide)]
pub fn city_guide(props: &CityGuideProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let city = match find_city(&props.slug) {
        Some(city) => city,
        None => return html! { <NotFound /> },
    };
    let matches = fixtures_in_city(city.slug);
    let sections = city_sections(city, !matches.is_empty());

    html! {
        <div class="city-guide-page">
            <link rel="canonical" href={canonical_url(&format!("/cities/{}", city.slug))} />
            <Hero
                title={format!("{} World Cup 2026 Guide", city.name)}
                subtitle={city.intro}
                image={city.hero_image}
                image_alt={city.hero_alt}
                eyebrow={Some(city.country.to_string())}
            />
            <GuideLayout sections={sections}>
                <section id="overview">
                    <h2>{"Overview"}</h2>
                    <p>{city.intro}</p>
                    <p>{format!("All kickoff times on this page are local {} time ({}).", city.name, city.timezone.name())}</p>
                </section>

                <section id="stadium">
                    <h2>{city.stadium}</h2>
                    <p>{format!("Capacity for the tournament: around {} seats.", format_thousands(city.capacity))}</p>
                    <h3>{"Getting there"}</h3>
                    <p>{city.getting_there}</p>
                </section>

                if !city.neighborhoods.is_empty() {
                    <section id="neighborhoods">
                        <h2>{"Where to stay"}</h2>
                        { for city.neighborhoods.iter().enumerate().map(|(i, n)| html! {
                            <Accordion title={n.name} subtitle={Some(n.vibe.to_string())} open={i == 0}>
                                <p>{n.description}</p>
                            </Accordion>
                        }) }
                    </section>
                }

                if !city.hotels.is_empty() {
                    <section id="hotels">
                        <h2>{"Hotels"}</h2>
                        <div class="guide-card-grid">
                            { for city.hotels.iter().map(|h| html! {
                                <div class="guide-card">
                                    <h3>{h.name}</h3>
                                    <p>{h.neighborhood}</p>
                                    <p>{format!("From ${} / night · {:.1} km to the stadium", h.price_from_usd, h.distance_km)}</p>
                                    <AffiliateButton partner={Partner::Booking} query={h.booking_query} label="Check prices" />
                                </div>
                            }) }
                        </div>
                    </section>
                }

                if !matches.is_empty() {
                    <section id="matches">
                        <h2>{format!("Matches in {}", city.name)}</h2>
                        <table class="fixture-table">
                            <thead>
                                <tr>
                                    <th>{"Kickoff"}</th>
                                    <th>{"Match"}</th>
                                    <th>{"Group"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                { for matches.iter().map(|(group, fixture)| html! {
                                    <tr>
                                        <td>{fixture.kickoff_label_in(city.timezone)}</td>
                                        <td>{format!("{} vs {}", fixture.home, fixture.away)}</td>
                                        <td>
                                            <Link<Route> to={Route::GroupGuide { letter: group.letter.to_lowercase() }}>
                                                {format!("Group {}", group.letter)}
                                            </Link<Route>>
                                        </td>
                                        <td>
                                            <AffiliateButton
                                                partner={Partner::Tickets}
                                                query={format!("{} vs {}", fixture.home, fixture.away)}
                                                label="Tickets"
                                            />
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </section>
                }

                if !city.gallery.is_empty() {
                    <section id="gallery">
                        <h2>{"Gallery"}</h2>
                        <div class="guide-card-grid">
                            { for city.gallery.iter().map(|img| html! {
                                <LightboxImage src={img.src} alt={img.alt} caption={Some(img.caption.to_string())} />
                            }) }
                        </div>
                    </section>
                }

                if !city.faqs.is_empty() {
                    <section id="faq">
                        <FaqBlock entries={city.faqs} title={Some(format!("{} FAQ", city.name))} />
                    </section>
                }
            </GuideLayout>
        </div>
    }
}
