//
// Copyright (c) 2025 Nathan Fiedler
//
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

mod home;
mod nav;
mod sections;

pub use home::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/brewbite.css" />
        <Title text="Brew & Bite Café" />
        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("") view=home::HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    // the status code can only be set during the initial server-side render
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="not-found">
            <h1 class="section-title">Page not found</h1>
            <p>
                <a href="/">Return to the café</a>
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::home::HomePage;
    use crate::domain::entities::page::{anchors, classes};
    use leptos::prelude::*;

    fn render_home() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <HomePage /> }.to_html())
    }

    #[test]
    fn test_home_anchors_present_once() {
        let html = render_home();
        for id in anchors::ALL {
            let attr = format!("id=\"{}\"", id);
            assert_eq!(html.matches(&attr).count(), 1, "{}", id);
        }
    }

    #[test]
    fn test_home_menu_classes() {
        let html = render_home();
        for class in [
            classes::MENU_ITEM,
            classes::MENU_ITEM_IMAGE,
            classes::MENU_ITEM_NAME,
            classes::MENU_ITEM_PRICE,
        ] {
            let attr = format!("class=\"{}\"", class);
            assert_eq!(html.matches(&attr).count(), 6, "{}", class);
        }
    }

    #[test]
    fn test_home_menu_order_and_prices() {
        let html = render_home();
        let expected = [
            ("Espresso", "$3.50"),
            ("Cappuccino", "$4.50"),
            ("Avocado Toast", "$8.99"),
            ("Blueberry Muffin", "$3.99"),
            ("Caesar Salad", "$9.50"),
            ("Chocolate Cake", "$5.99"),
        ];
        let mut offset = 0;
        for (name, price) in expected {
            let name_tag = format!(">{}<", name);
            let price_tag = format!(">{}<", price);
            let name_at = html[offset..]
                .find(&name_tag)
                .map(|at| at + offset)
                .unwrap_or_else(|| panic!("{} missing or out of order", name));
            let price_at = html[name_at..]
                .find(&price_tag)
                .map(|at| at + name_at)
                .unwrap_or_else(|| panic!("{} missing after {}", price, name));
            offset = price_at;
        }
    }

    #[test]
    fn test_home_idle_fill() {
        let html = render_home();
        assert!(html.contains("#f39c12"));
        assert!(!html.contains("#e67e22"));
    }

    #[test]
    fn test_home_render_idempotent() {
        assert_eq!(render_home(), render_home());
    }
}
