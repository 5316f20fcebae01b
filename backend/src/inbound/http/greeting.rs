//! Root greeting.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

/// Answer `GET /` with a plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["meta"],
    operation_id = "greeting"
)]
#[get("/")]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Hello World!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn says_hello() {
        let app = test::init_service(App::new().service(greeting)).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
        let body = test::read_body(res).await;
        assert_eq!(body.as_ref(), b"Hello World!");
    }
}
