use anyhow::Context;
use leptos::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None).context("Could not load the leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let leptos_options = leptos_options.clone();
        move || app::shell(leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes(&leptos_options, routes, app_fn)
        // The fallback also serves the compiled stylesheet, the wasm bundle,
        // and everything under the assets directory.
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(
            app::shell,
        ))
        .with_state(leptos_options.clone());

    // run our app with hyper
    // `axum::Server` is a re-export of `hyper::Server`
    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", &addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Could not serve the site")?;
    Ok(())
}
