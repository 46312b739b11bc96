use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render template. Error: {err}"),
        )
            .into_response(),
    }
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub message: &'static str,
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $crate::template::render($crate::template::ServerTemplate {
                        message: $crate::template::SERVER_ERROR_MESSAGE,
                    }),
                )
                    .into_response();
            }
        }
    };
}
