use yew::prelude::*;

use crate::components::faq_block::FaqBlock;
use crate::data::faq::GENERAL_FAQ;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Tickets, visas, hotels and getting around the 2026 World Cup"}</p>
            </section>

            <section class="faq-section">
                <FaqBlock entries={GENERAL_FAQ} />
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #1a1a1a;
                }
                .faq-hero {
                    text-align: center;
                    padding: 4rem 1rem 2rem;
                }
                .faq-hero h1 {
                    font-size: 2.5rem;
                    margin: 0 0 0.75rem;
                }
                .faq-hero p {
                    color: #999;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                "#}
            </style>
        </div>
    }
}
