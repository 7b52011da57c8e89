use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use log::{debug, error, info, warn};
use rand::Rng;
use serde_json::json;

use autosnake::api::{AutopilotPlan, AutopilotRequest, DecideRequest, DecideResponse, ErrorResponse};
use autosnake::autopilot::run_autopilot;
use autosnake::config::Config;
use autosnake::policy::decide_detailed;
use autosnake::visualizer::visualize_board;

async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "apiversion": "1",
        "name": "autosnake",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/decide", "/autopilot"]
    }))
}

async fn decide(info: web::Json<DecideRequest>) -> impl Responder {
    if let Err(e) = info.validate() {
        warn!("Rejected decide request: {}", e);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        });
    }

    let grid = info.grid();
    debug!(
        "Board:\n{}",
        visualize_board(&grid, &info.body, Some(info.target))
    );

    let decision = decide_detailed(&grid, &info.body, info.target);
    match &decision {
        Some(d) => info!(
            "Length {} on {}x{}: moving {} ({})",
            info.body.len(),
            grid.width,
            grid.height,
            d.direction.as_str(),
            d.tier
        ),
        None => info!("Length {} on {}x{}: trapped", info.body.len(), grid.width, grid.height),
    }

    HttpResponse::Ok().json(DecideResponse::from_decision(decision))
}

async fn autopilot(
    config: web::Data<Config>,
    info: Option<web::Json<AutopilotRequest>>,
) -> impl Responder {
    let request = info.map(|json| json.into_inner()).unwrap_or_default();
    let plan = match request.resolve(&config, rand::thread_rng().gen()) {
        Ok(plan) => plan,
        Err(e) => {
            warn!("Rejected autopilot request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            });
        }
    };
    let AutopilotPlan {
        grid,
        seed,
        max_turns,
    } = plan;

    // Whole games are CPU bound; keep them off the async workers
    match web::block(move || run_autopilot(grid, seed, max_turns)).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!("Autopilot game failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "autopilot game failed".to_string(),
            })
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    info!(
        "Starting server on port {} with {} workers",
        config.port, config.workers
    );

    let port = config.port;
    let workers = config.workers;
    let data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/", web::get().to(index))
            .route("/decide", web::post().to(decide))
            .route("/autopilot", web::post().to(autopilot))
    })
    .workers(workers)
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
