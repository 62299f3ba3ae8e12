use yew::prelude::*;

use crate::config::{BOOKING_AFFILIATE_ID, TICKETS_AFFILIATE_ID};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Partner {
    Booking,
    Tickets,
}

/// Outbound link carrying our partner id, with the query url-encoded.
pub fn affiliate_url(partner: Partner, query: &str) -> String {
    let query = urlencoding::encode(query);
    match partner {
        Partner::Booking => format!(
            "https://www.booking.com/searchresults.html?ss={}&aid={}",
            query, BOOKING_AFFILIATE_ID
        ),
        Partner::Tickets => format!(
            "https://www.stubhub.com/find/s/?q={}&utm_source={}",
            query, TICKETS_AFFILIATE_ID
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct AffiliateButtonProps {
    pub partner: Partner,
    pub query: String,
    pub label: String,
}

#[function_component(AffiliateButton)]
pub fn affiliate_button(props: &AffiliateButtonProps) -> Html {
    let href = affiliate_url(props.partner, &props.query);
    let class = match props.partner {
        Partner::Booking => "affiliate-button booking",
        Partner::Tickets => "affiliate-button tickets",
    };

    html! {
        <>
            <a class={class} href={href} target="_blank" rel="sponsored noopener noreferrer">
                {&props.label}
                <span class="affiliate-arrow">{"→"}</span>
            </a>
            <style>
                {r#"
                .affiliate-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.6rem 1.1rem;
                    border-radius: 6px;
                    font-weight: 600;
                    text-decoration: none;
                    color: #fff;
                    transition: transform 0.15s ease;
                }
                .affiliate-button:hover {
                    transform: translateY(-1px);
                }
                .affiliate-button.booking {
                    background: #1e90ff;
                }
                .affiliate-button.tickets {
                    background: #2e8b57;
                }
                "#}
            </style>
        </>
    }
}
