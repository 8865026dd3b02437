use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{config, handlers, service, session};

pub fn create_app(
    planner_service: Arc<service::PlannerService>,
    session_store: Arc<session::SessionStore>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(planner_service))
        .app_data(Data::from(session_store))
        .app_data(Data::from(config))
        .route("/", web::get().to(handlers::index))
        .service(
            web::scope("/api")
                .route("/session", web::get().to(handlers::session_snapshot))
                .route("/plan", web::post().to(handlers::generate_plan))
                .route("/chat", web::post().to(handlers::answer_question)),
        )
}
