use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Tuabi"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        font-family: 'Poppins', sans-serif;
                        color: #111827;
                    }

                    .not-found-link {
                        background: #1E3A8A;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                    }
                "#}
            </style>
        </div>
    }
}
