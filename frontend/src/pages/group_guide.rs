use yew::prelude::*;
use yew_router::components::Link;

use crate::config::canonical_url;
use crate::components::affiliate_button::{AffiliateButton, Partner};
use crate::components::guide_layout::GuideLayout;
use crate::components::hero::Hero;
use crate::data::groups::find_group;
use crate::pages::not_found::NotFound;
use crate::scroll_spy::Section;
use crate::Route;

const GROUP_SECTIONS: [Section; 3] = [
    Section::new("intro", "The group"),
    Section::new("teams", "Teams"),
    Section::new("schedule", "Schedule"),
];

#[derive(Properties, PartialEq)]
pub struct GroupGuideProps {
    pub letter: String,
}

#[function_component(GroupGuide)]
pub fn group_guide(props: &GroupGuideProps) -> Html {
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

    let group = match find_group(&props.letter) {
        Some(group) => group,
        None => return html! { <NotFound /> },
    };

    html! {
        <div class="group-guide-page">
            <link rel="canonical" href={canonical_url(&format!("/groups/{}", group.letter.to_lowercase()))} />
            <Hero
                title={format!("World Cup 2026 Group {}", group.letter)}
                subtitle={group.intro}
                image="/assets/groups/group-hero.webp"
                image_alt="Fans in a packed stadium"
                eyebrow={Some("Group guide".to_string())}
            />
            <GuideLayout sections={GROUP_SECTIONS.to_vec()}>
                <section id="intro">
                    <h2>{format!("Group {} at a glance", group.letter)}</h2>
                    <p>{group.intro}</p>
                </section>

                <section id="teams">
                    <h2>{"Teams"}</h2>
                    <div class="guide-card-grid">
                        { for group.teams.iter().map(|team| html! {
                            <div class="guide-card">
                                <h3>{format!("{} {}", team.flag, team.name)}</h3>
                                <p>{team.blurb}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="schedule">
                    <h2>{"Schedule"}</h2>
                    <table class="fixture-table">
                        <thead>
                            <tr>
                                <th>{"Kickoff (local)"}</th>
                                <th>{"Match"}</th>
                                <th>{"Venue"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for group.fixtures.iter().map(|fixture| html! {
                                <tr>
                                    <td>{fixture.kickoff_label()}</td>
                                    <td>{format!("{} vs {}", fixture.home, fixture.away)}</td>
                                    <td>
                                        {
                                            match fixture.city_slug {
                                                Some(slug) => html! {
                                                    <Link<Route> to={Route::CityGuide { slug: slug.to_string() }}>
                                                        {fixture.venue}
                                                    </Link<Route>>
                                                },
                                                None => html! { {fixture.venue} },
                                            }
                                        }
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
            </GuideLayout>
        </div>
    }
}
