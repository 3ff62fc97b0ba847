use yew::prelude::*;

use crate::catalog::{self, ServiceCategory};

fn view_category(category: &ServiceCategory) -> Html {
    html! {
        <div class="service-card">
            <h3 class="service-category">{ category.name }</h3>
            <div class="service-items">
                { for category.items.iter().map(|item| {
                    html! {
                        <div class="service-item">
                            <span class="service-label">{ item.label }</span>
                            <span class="service-price">{ item.price }</span>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

/// The static price list, one card per category.
#[function_component(ServiceMenu)]
pub fn service_menu() -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-intro">
                <h2>{ "Our Services" }</h2>
                <p>{ "Professional beauty treatments with competitive pricing" }</p>
            </div>
            <div class="service-grid">
                { for catalog::SERVICE_MENU.iter().map(view_category) }
            </div>
        </section>
    }
}
