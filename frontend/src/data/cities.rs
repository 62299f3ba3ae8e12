use chrono_tz::Tz;

use crate::data::faq::FaqEntry;

#[derive(Clone, Debug, PartialEq)]
pub struct Neighborhood {
    pub name: &'static str,
    pub vibe: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hotel {
    pub name: &'static str,
    pub neighborhood: &'static str,
    pub price_from_usd: u32,
    pub distance_km: f32,
    /// Search text handed to the booking partner.
    pub booking_query: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostCity {
    pub slug: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub stadium: &'static str,
    pub capacity: u32,
    pub timezone: Tz,
    pub hero_image: &'static str,
    pub hero_alt: &'static str,
    pub intro: &'static str,
    pub getting_there: &'static str,
    pub neighborhoods: &'static [Neighborhood],
    pub hotels: &'static [Hotel],
    pub gallery: &'static [GalleryImage],
    pub faqs: &'static [FaqEntry],
}

pub fn find_city(slug: &str) -> Option<&'static HostCity> {
    HOST_CITIES.iter().find(|c| c.slug == slug)
}

pub static HOST_CITIES: &[HostCity] = &[
    HostCity {
        slug: "mexico-city",
        name: "Mexico City",
        country: "Mexico",
        stadium: "Estadio Azteca",
        capacity: 83_000,
        timezone: chrono_tz::America::Mexico_City,
        hero_image: "/assets/cities/mexico-city-hero.webp",
        hero_alt: "Estadio Azteca lit up at night",
        intro: "The Azteca becomes the first stadium to host matches at three World Cups, and it opens the 2026 tournament. Mexico City is huge, high (2,240 m) and busy, so base yourself well and give every trip across town extra time.",
        getting_there: "Take Line 2 of the Metro to Tasqueña, then the Tren Ligero to Estadio Azteca station. Ride-hailing works but the roads around the stadium close hours before kickoff.",
        neighborhoods: &[
            Neighborhood {
                name: "Roma Norte",
                vibe: "Cafés and nightlife",
                description: "Tree-lined streets, Art Nouveau houses and the best density of bars and restaurants in the city. Around 40 minutes to the stadium.",
            },
            Neighborhood {
                name: "Coyoacán",
                vibe: "Quiet and close",
                description: "Colonial plazas, markets and the Frida Kahlo museum, and the shortest ride to the Azteca of any area fans actually want to stay in.",
            },
            Neighborhood {
                name: "Polanco",
                vibe: "Upscale",
                description: "Big-brand hotels, fine dining and Chapultepec park next door. Expensive, safe and far from the stadium.",
            },
        ],
        hotels: &[
            Hotel {
                name: "Casa Roma Boutique",
                neighborhood: "Roma Norte",
                price_from_usd: 140,
                distance_km: 14.5,
                booking_query: "Roma Norte, Mexico City",
            },
            Hotel {
                name: "Hotel Plaza Coyoacán",
                neighborhood: "Coyoacán",
                price_from_usd: 95,
                distance_km: 7.8,
                booking_query: "Coyoacan, Mexico City",
            },
            Hotel {
                name: "Polanco Grand",
                neighborhood: "Polanco",
                price_from_usd: 260,
                distance_km: 19.0,
                booking_query: "Polanco, Mexico City",
            },
        ],
        gallery: &[
            GalleryImage {
                src: "/assets/cities/mexico-city-zocalo.webp",
                alt: "The Zócalo with the national flag",
                caption: "Fan fest in the Zócalo",
            },
            GalleryImage {
                src: "/assets/cities/mexico-city-azteca.webp",
                alt: "Inside Estadio Azteca",
                caption: "Estadio Azteca, 83,000 seats",
            },
        ],
        faqs: &[
            FaqEntry {
                question: "Will the altitude affect me?",
                answer: "Many visitors feel it the first day or two. Drink plenty of water, go easy on alcohol and don't plan a big hike on arrival day.",
            },
            FaqEntry {
                question: "Is the Metro safe on match days?",
                answer: "It is the fastest way to the stadium. Keep valuables in a front pocket and use the women-and-children cars if that applies to you.",
            },
        ],
    },
    HostCity {
        slug: "toronto",
        name: "Toronto",
        country: "Canada",
        stadium: "BMO Field",
        capacity: 45_000,
        timezone: chrono_tz::America::Toronto,
        hero_image: "/assets/cities/toronto-hero.webp",
        hero_alt: "Toronto skyline over Lake Ontario",
        intro: "Canada's first ever home World Cup match is played at an expanded BMO Field on the lakeshore. Toronto is compact, walkable downtown and easy to reach from the US northeast.",
        getting_there: "Take the GO train or the 509 Harbourfront streetcar to Exhibition Place. The stadium is a short walk from the station.",
        neighborhoods: &[
            Neighborhood {
                name: "Liberty Village",
                vibe: "Walk to the stadium",
                description: "Converted factories, condos and breweries right next to Exhibition Place.",
            },
            Neighborhood {
                name: "Downtown / Entertainment District",
                vibe: "Central",
                description: "Close to Union Station, the CN Tower and every streetcar line. The default choice if you're also seeing the city.",
            },
            Neighborhood {
                name: "Kensington Market",
                vibe: "Eclectic",
                description: "Vintage shops, street food and a lot of character. Pair it with Chinatown next door.",
            },
        ],
        hotels: &[
            Hotel {
                name: "Hotel X Toronto",
                neighborhood: "Exhibition Place",
                price_from_usd: 310,
                distance_km: 0.6,
                booking_query: "Exhibition Place, Toronto",
            },
            Hotel {
                name: "Union Station Suites",
                neighborhood: "Downtown",
                price_from_usd: 220,
                distance_km: 4.1,
                booking_query: "Downtown Toronto",
            },
        ],
        gallery: &[GalleryImage {
            src: "/assets/cities/toronto-bmo-field.webp",
            alt: "BMO Field from the lakeshore",
            caption: "BMO Field on match day",
        }],
        faqs: &[FaqEntry {
            question: "Do I need an eTA to visit Canada?",
            answer: "Visa-exempt travellers flying into Canada need an eTA. US citizens don't. Apply only on the official government site.",
        }],
    },
    HostCity {
        slug: "new-york-new-jersey",
        name: "New York New Jersey",
        country: "United States",
        stadium: "MetLife Stadium",
        capacity: 82_500,
        timezone: chrono_tz::America::New_York,
        hero_image: "/assets/cities/new-york-hero.webp",
        hero_alt: "Manhattan skyline from the Hudson",
        intro: "MetLife Stadium in East Rutherford hosts the final on July 19. Most fans stay in Manhattan or Jersey City and ride NJ Transit out to the Meadowlands.",
        getting_there: "NJ Transit runs match-day trains from Secaucus Junction to Meadowlands station. Allow at least 90 minutes from Midtown.",
        neighborhoods: &[
            Neighborhood {
                name: "Midtown",
                vibe: "Transit hub",
                description: "Penn Station and Port Authority are both here, the two easiest starting points for the Meadowlands.",
            },
            Neighborhood {
                name: "Jersey City",
                vibe: "Value with a view",
                description: "Cheaper than Manhattan, PATH trains into the city, and a quicker ride to Secaucus.",
            },
        ],
        hotels: &[
            Hotel {
                name: "Midtown West Inn",
                neighborhood: "Midtown",
                price_from_usd: 290,
                distance_km: 13.0,
                booking_query: "Midtown Manhattan, New York",
            },
            Hotel {
                name: "Hudson Waterfront Hotel",
                neighborhood: "Jersey City",
                price_from_usd: 210,
                distance_km: 11.2,
                booking_query: "Jersey City, New Jersey",
            },
        ],
        gallery: &[],
        faqs: &[FaqEntry {
            question: "Can I drive to MetLife Stadium?",
            answer: "Parking has to be bought in advance and traffic on match days is heavy. The train is almost always faster.",
        }],
    },
    HostCity {
        slug: "los-angeles",
        name: "Los Angeles",
        country: "United States",
        stadium: "SoFi Stadium",
        capacity: 70_000,
        timezone: chrono_tz::America::Los_Angeles,
        hero_image: "/assets/cities/los-angeles-hero.webp",
        hero_alt: "SoFi Stadium roof at sunset",
        intro: "The USA open their tournament at SoFi Stadium in Inglewood. LA is spread out, so pick a base with the match days in mind.",
        getting_there: "Metro K Line to Downtown Inglewood, then the free shuttle. Ride-hailing has dedicated pick-up zones after the match.",
        neighborhoods: &[
            Neighborhood {
                name: "Santa Monica",
                vibe: "Beach",
                description: "Walkable, by the ocean and a reasonable drive to Inglewood outside rush hour.",
            },
            Neighborhood {
                name: "Downtown LA",
                vibe: "Central",
                description: "Connected to the K Line and the rest of the Metro network, with plenty of hotel rooms.",
            },
        ],
        hotels: &[Hotel {
            name: "Ocean Avenue Hotel",
            neighborhood: "Santa Monica",
            price_from_usd: 250,
            distance_km: 15.0,
            booking_query: "Santa Monica, California",
        }],
        gallery: &[],
        faqs: &[],
    },
];
