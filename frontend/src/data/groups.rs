use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub flag: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub home: &'static str,
    pub away: &'static str,
    /// RFC 3339, always UTC.
    pub kickoff_utc: &'static str,
    pub venue: &'static str,
    /// Set when we have a city guide for the venue.
    pub city_slug: Option<&'static str>,
    pub venue_timezone: Tz,
}

impl Fixture {
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.kickoff_utc)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Kickoff in the venue's own time zone.
    pub fn kickoff_local(&self) -> Option<DateTime<Tz>> {
        self.kickoff().map(|dt| dt.with_timezone(&self.venue_timezone))
    }

    pub fn kickoff_label(&self) -> String {
        self.kickoff_label_in(self.venue_timezone)
    }

    pub fn kickoff_label_in(&self, tz: Tz) -> String {
        match self.kickoff() {
            Some(dt) => dt.with_timezone(&tz).format("%a %-d %b, %H:%M %Z").to_string(),
            None => "TBC".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub letter: &'static str,
    pub intro: &'static str,
    pub teams: &'static [Team],
    pub fixtures: &'static [Fixture],
}

pub fn find_group(letter: &str) -> Option<&'static Group> {
    GROUPS.iter().find(|g| g.letter.eq_ignore_ascii_case(letter))
}

/// Every group fixture played in the given host city, in kickoff order.
pub fn fixtures_in_city(slug: &str) -> Vec<(&'static Group, &'static Fixture)> {
    let mut found: Vec<(&'static Group, &'static Fixture)> = GROUPS
        .iter()
        .flat_map(|g| g.fixtures.iter().map(move |f| (g, f)))
        .filter(|(_, f)| f.city_slug == Some(slug))
        .collect();
    found.sort_by_key(|(_, f)| f.kickoff());
    found
}

pub static GROUPS: &[Group] = &[
    Group {
        letter: "A",
        intro: "The hosts' group. Mexico open the whole tournament at the Azteca and play all three group games at home.",
        teams: &[
            Team { name: "Mexico", flag: "🇲🇽", blurb: "Co-hosts, playing in front of the loudest crowd of the summer." },
            Team { name: "South Africa", flag: "🇿🇦", blurb: "Back at the World Cup for the first time since hosting in 2010." },
            Team { name: "Korea Republic", flag: "🇰🇷", blurb: "Eleventh straight World Cup appearance." },
            Team { name: "UEFA Play-off D", flag: "🏳️", blurb: "Decided in the March 2026 European play-offs." },
        ],
        fixtures: &[
            Fixture {
                home: "Mexico",
                away: "South Africa",
                kickoff_utc: "2026-06-11T19:00:00Z",
                venue: "Estadio Azteca, Mexico City",
                city_slug: Some("mexico-city"),
                venue_timezone: chrono_tz::America::Mexico_City,
            },
            Fixture {
                home: "Korea Republic",
                away: "UEFA Play-off D",
                kickoff_utc: "2026-06-12T02:00:00Z",
                venue: "Estadio Akron, Guadalajara",
                city_slug: None,
                venue_timezone: chrono_tz::America::Mexico_City,
            },
        ],
    },
    Group {
        letter: "B",
        intro: "Canada's group. Their opener in Toronto is the country's first men's World Cup match on home soil.",
        teams: &[
            Team { name: "Canada", flag: "🇨🇦", blurb: "Co-hosts with a young, quick squad." },
            Team { name: "UEFA Play-off A", flag: "🏳️", blurb: "Decided in the March 2026 European play-offs." },
            Team { name: "Qatar", flag: "🇶🇦", blurb: "First World Cup they had to qualify for." },
            Team { name: "Switzerland", flag: "🇨🇭", blurb: "Rarely spectacular, rarely beaten." },
        ],
        fixtures: &[
            Fixture {
                home: "Canada",
                away: "UEFA Play-off A",
                kickoff_utc: "2026-06-12T19:00:00Z",
                venue: "BMO Field, Toronto",
                city_slug: Some("toronto"),
                venue_timezone: chrono_tz::America::Toronto,
            },
            Fixture {
                home: "Qatar",
                away: "Switzerland",
                kickoff_utc: "2026-06-13T19:00:00Z",
                venue: "Levi's Stadium, San Francisco Bay Area",
                city_slug: None,
                venue_timezone: chrono_tz::America::Los_Angeles,
            },
        ],
    },
    Group {
        letter: "D",
        intro: "The USA's group, starting with a Friday night game in Los Angeles.",
        teams: &[
            Team { name: "United States", flag: "🇺🇸", blurb: "Co-hosts, and the biggest travelling support of the group." },
            Team { name: "Paraguay", flag: "🇵🇾", blurb: "Back after missing the last three tournaments." },
            Team { name: "Australia", flag: "🇦🇺", blurb: "Sixth straight World Cup." },
            Team { name: "UEFA Play-off C", flag: "🏳️", blurb: "Decided in the March 2026 European play-offs." },
        ],
        fixtures: &[Fixture {
            home: "United States",
            away: "Paraguay",
            kickoff_utc: "2026-06-13T01:00:00Z",
            venue: "SoFi Stadium, Los Angeles",
            city_slug: Some("los-angeles"),
            venue_timezone: chrono_tz::America::Los_Angeles,
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn group_lookup_ignores_case() {
        assert_eq!(find_group("a").map(|g| g.letter), Some("A"));
        assert_eq!(find_group("D").map(|g| g.letter), Some("D"));
        assert!(find_group("Z").is_none());
    }

    #[test]
    fn opener_is_early_afternoon_in_mexico_city() {
        let opener = &find_group("A").unwrap().fixtures[0];
        let local = opener.kickoff_local().unwrap();

        assert_eq!((local.month(), local.day()), (6, 11));
        assert_eq!((local.hour(), local.minute()), (13, 0));
    }

    #[test]
    fn evening_kickoff_in_los_angeles_is_the_previous_local_day() {
        let fixture = &find_group("D").unwrap().fixtures[0];
        let local = fixture.kickoff_local().unwrap();

        assert_eq!(fixture.kickoff().unwrap().day(), 13);
        assert_eq!((local.day(), local.hour()), (12, 18));
    }

    #[test]
    fn unparseable_kickoff_is_tbc() {
        let fixture = Fixture {
            home: "A",
            away: "B",
            kickoff_utc: "June-ish",
            venue: "Somewhere",
            city_slug: None,
            venue_timezone: chrono_tz::UTC,
        };

        assert!(fixture.kickoff_local().is_none());
        assert_eq!(fixture.kickoff_label(), "TBC");
    }

    #[test]
    fn fixtures_are_found_by_city() {
        let toronto = fixtures_in_city("toronto");
        assert_eq!(toronto.len(), 1);
        assert_eq!(toronto[0].0.letter, "B");

        assert!(fixtures_in_city("guadalajara").is_empty());
    }

    #[test]
    fn every_city_slug_points_at_a_guide() {
        for group in GROUPS {
            for fixture in group.fixtures {
                if let Some(slug) = fixture.city_slug {
                    assert!(crate::data::cities::find_city(slug).is_some(), "{}", slug);
                }
            }
        }
    }

    #[test]
    fn venue_zone_agrees_with_host_city_zone() {
        for group in GROUPS {
            for fixture in group.fixtures {
                if let Some(city) = fixture.city_slug.and_then(crate::data::cities::find_city) {
                    assert_eq!(fixture.venue_timezone, city.timezone, "{}", city.slug);
                    assert_eq!(fixture.kickoff_label_in(city.timezone), fixture.kickoff_label());
                }
            }
        }
    }

    #[test]
    fn label_follows_the_requested_zone() {
        let opener = &find_group("A").unwrap().fixtures[0];

        assert!(opener.kickoff_label_in(chrono_tz::UTC).contains("19:00"));
        assert!(opener.kickoff_label().contains("13:00"));
    }
}
