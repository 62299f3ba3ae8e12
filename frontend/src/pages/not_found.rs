use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{"We don't have a guide for that yet."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to all guides"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    text-align: center;
                    padding-top: 74px;
                }
                .not-found-link {
                    color: #7eb6ff;
                }
                "#}
            </style>
        </div>
    }
}
