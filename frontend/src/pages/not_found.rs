use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="not-found-container">
            <div class="not-found-content">
                <h1>{ "Page Not Found" }</h1>
                <p>{ "The page you are looking for does not exist." }</p>
                <Link<Route> to={Route::Home} classes="not-found-home">
                    { "Back to Femina Beauty Impression" }
                </Link<Route>>
            </div>
        </div>
    }
}
