use clap::Parser;
use std::net::SocketAddr;
use std::process::ExitCode;
use walk_safe::app_context::AppContext;
use walk_safe::cli::{Args, Command, PlanArgs, ServeArgs};
use walk_safe::frontend::client::HttpRoutingClient;
use walk_safe::frontend::form::RouteForm;
use walk_safe::frontend::headless::HeadlessWidget;
use walk_safe::frontend::widget::WidgetEvent;
use walk_safe::routes::models::Endpoint;
use walk_safe::{env, logging, warn_if_env_var_is_missing};

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    logging::init();
    match args.command {
        Command::Serve(args) => serve(args).await,
        Command::Plan(args) => Ok(plan(args).await),
    }
}

async fn serve(args: ServeArgs) -> std::io::Result<ExitCode> {
    let area = args.service_area();
    tracing::info!(
        area = %area.name,
        center = ?area.center,
        radius_miles = area.radius_miles,
        "Serving routes for this area."
    );
    let router = walk_safe::http::router::new(&args, AppContext::new(area));
    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}

async fn plan(args: PlanArgs) -> ExitCode {
    if args.maps_api_key.is_none() {
        warn_if_env_var_is_missing!(env::GOOGLE_MAPS_API_KEY, "The map widget may refuse to load.");
    }
    let client = HttpRoutingClient::new(args.routing_url.clone());
    tracing::info!(endpoint = %client.endpoint(), "Submitting route.");
    let mut form = RouteForm::new(
        client,
        HeadlessWidget::new(Endpoint::Start),
        HeadlessWidget::new(Endpoint::End),
        args.maps_api_key.as_ref(),
    );
    for (slot, point) in [(Endpoint::Start, args.start), (Endpoint::End, args.end)] {
        if let Some(point) = point {
            form.picker_mut(slot).handle(WidgetEvent::MapClicked(point));
        }
    }

    let outcome = form.submit().await;
    for slot in [Endpoint::Start, Endpoint::End] {
        let marker = form.picker(slot).widget().marker();
        println!(
            "{}: {}",
            slot.label(),
            marker.map_or_else(|| String::from("-"), |at| format!("{}, {}", at.lat, at.lng))
        );
    }
    if let Some(displayed) = form.displayed().await {
        println!("{displayed}");
    }
    if outcome.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
