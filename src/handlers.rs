use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, mime};

use crate::config::Config;
use crate::consts;
use crate::errors::PlannerError;
use crate::models::api::{AnswerResponse, AskForm, ErrorResponse, PlanForm, PlanResponse, SessionSnapshot};
use crate::service::PlannerService;
use crate::session::SessionStore;

pub async fn index() -> impl actix_web::Responder {
    HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(include_str!("../static/index.html"))
}

/// Returns the session id from the request cookie, creating a fresh session
/// when the cookie is absent or no longer known. The bool reports whether a
/// new cookie has to be set on the response.
fn establish_session(req: &HttpRequest, store: &SessionStore) -> (String, bool) {
    if let Some(cookie) = req.cookie(consts::SESSION_COOKIE) {
        if store.contains(cookie.value()) {
            return (cookie.value().to_string(), false);
        }
    }
    (store.create(), true)
}

fn session_cookie(id: &str) -> Cookie<'static> {
    Cookie::build(consts::SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

fn respond(mut builder: HttpResponseBuilder, sid: &str, created: bool) -> HttpResponseBuilder {
    if created {
        builder.cookie(session_cookie(sid));
    }
    builder
}

fn error_status(error: &PlannerError) -> StatusCode {
    match error {
        PlannerError::ValidationError(_) => StatusCode::BAD_REQUEST,
        PlannerError::ApiError(_) => StatusCode::BAD_GATEWAY,
        PlannerError::ParseError(_) => StatusCode::BAD_GATEWAY,
        PlannerError::NetworkError(_) => StatusCode::BAD_GATEWAY,
        PlannerError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn session_snapshot(
    req: HttpRequest,
    store: Data<SessionStore>,
) -> impl actix_web::Responder {
    let (sid, created) = establish_session(&req, &store);

    let state = store.snapshot(&sid).unwrap_or_default();
    respond(HttpResponse::Ok(), &sid, created).json(SessionSnapshot {
        plan: state.plan,
        messages: state.messages,
    })
}

pub async fn generate_plan(
    req: HttpRequest,
    service: Data<PlannerService>,
    store: Data<SessionStore>,
    config: Data<Config>,
    form: Json<PlanForm>,
) -> impl actix_web::Responder {
    let (sid, created) = establish_session(&req, &store);

    if let Err(e) = form.validate() {
        log::info!("rejected plan form: {}", e);
        return respond(HttpResponse::BadRequest(), &sid, created).json(ErrorResponse {
            error: e.to_string(),
        });
    }

    // The history belongs to the outgoing plan. It is dropped as soon as
    // regeneration starts, even if the model call then fails.
    store.clear_history(&sid);

    match service.generate_plan(&form, &config).await {
        Ok(plan) => {
            store.set_plan(&sid, plan.clone());
            respond(HttpResponse::Ok(), &sid, created).json(PlanResponse { plan })
        }
        Err(e) => {
            log::error!("generate_plan error: {:?}", e);
            respond(HttpResponse::build(error_status(&e)), &sid, created).json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

pub async fn answer_question(
    req: HttpRequest,
    service: Data<PlannerService>,
    store: Data<SessionStore>,
    config: Data<Config>,
    form: Json<AskForm>,
) -> impl actix_web::Responder {
    let (sid, created) = establish_session(&req, &store);

    let Some(plan) = store.plan(&sid) else {
        return respond(HttpResponse::Conflict(), &sid, created).json(ErrorResponse {
            error: "no plan generated yet".to_string(),
        });
    };

    if form.question.trim().is_empty() {
        return respond(HttpResponse::BadRequest(), &sid, created).json(ErrorResponse {
            error: "question must not be empty".to_string(),
        });
    }

    // A failed call becomes the assistant's answer so the transcript keeps
    // recording what the user saw. The session itself stays usable.
    let (answer, failed) = match service.answer_question(&plan, &form.question, &config).await {
        Ok(answer) => (answer, false),
        Err(e) => {
            log::error!("answer_question error: {:?}", e);
            (format!("An error occurred: {}", e), true)
        }
    };

    store.append_exchange(&sid, &form.question, &answer);

    respond(HttpResponse::Ok(), &sid, created).json(AnswerResponse {
        answer,
        error: failed,
    })
}
