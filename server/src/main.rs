//
// Copyright (c) 2025 Nathan Fiedler
//

//! The main application binary that serves the server-side rendered page
//! along with the compiled client bundle.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{middleware, web, App, HttpServer};
    use brewbite::preso::leptos::shell;
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use log::info;
    use std::io;

    dotenvy::dotenv().ok();
    env_logger::init();
    let conf = get_configuration(None).map_err(io::Error::other)?;
    let addr = conf.leptos_options.site_addr;
    info!("listening on http://{}/...", addr);

    HttpServer::new(move || {
        let routes = generate_route_list(brewbite::preso::leptos::App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();
        App::new()
            .wrap(middleware::Logger::default())
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", &site_root))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function unless we want this to work with
    // client-side rendering only
}
