use super::Lobby;
use crate::gameplay::Rules;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(bind: String, rules: Rules) -> Result<(), std::io::Error> {
        let state = web::Data::new(Lobby::new(rules));
        log::info!("starting hosting server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/start", web::post().to(start))
                .route("/enter/{room_id}", web::get().to(enter))
                .route("/leave/{room_id}", web::post().to(leave))
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}

async fn start(lobby: web::Data<Lobby>) -> impl Responder {
    match lobby.open().await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "room_id": id })),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

async fn leave(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match lobby.close(&id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "left" })),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

async fn enter(
    lobby: web::Data<Lobby>,
    path: web::Path<String>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let id = path.into_inner();
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => match lobby.bridge(id, session, stream).await {
            Ok(()) => response.map_into_left_body(),
            Err(e) => HttpResponse::NotFound()
                .body(e.to_string())
                .map_into_right_body(),
        },
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
