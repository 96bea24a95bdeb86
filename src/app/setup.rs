use crate::app::session::{self, Session};
use crate::setup::{self as setup_service, SetupError, SetupForm};
use crate::state::AppState;
use crate::templates;
use crate::uploads::UploadError;

use axum::Extension;
use axum::extract::{Form, State};
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetupPostForm {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    #[serde(default)]
    logo: String,
    #[serde(default)]
    favicon: String,
}

pub(crate) async fn setup_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> Result<templates::SetupTemplate, Redirect> {
    if !setup_service::setup_needed(&state.store) {
        return Err(Redirect::to("/"));
    }
    Ok(templates::SetupTemplate {
        shell: session::shell(&state, &viewer),
        error: String::new(),
    })
}

pub(crate) async fn setup_submit(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<SetupPostForm>,
) -> Result<Response, (StatusCode, templates::SetupTemplate)> {
    if !setup_service::setup_needed(&state.store) {
        return Ok(Redirect::to("/").into_response());
    }

    let outcome = setup_service::run_setup(
        &state.store,
        &SetupForm {
            full_name: form.full_name,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
            logo: form.logo,
            favicon: form.favicon,
        },
    );

    let text = crate::i18n::dict(viewer.lang);
    let uid = match outcome {
        Ok(uid) => uid,
        Err(err) => {
            let message = match &err {
                SetupError::MissingField(_) => text.aid.missing_fields,
                SetupError::WeakPassword => text.auth.password_too_short,
                SetupError::PasswordMismatch => text.auth.password_mismatch,
                SetupError::WrongPassword => text.setup.wrong_password,
                SetupError::Upload(_, UploadError::TooLarge(_)) => text.setup.oversized_image,
                SetupError::Upload(_, _) => text.setup.generic_error,
                SetupError::Auth(_) | SetupError::Store(_) => {
                    eprintln!("setup failed: {err}");
                    text.setup.generic_error
                }
            };
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                templates::SetupTemplate {
                    shell: session::shell(&state, &viewer),
                    error: message.to_string(),
                },
            ));
        }
    };

    // Sign the new admin straight in when auth is configured.
    let mut response = Redirect::to("/dashboard").into_response();
    if let Some(auth) = state.auth.as_ref() {
        match auth.issue_token(&uid) {
            Ok(token) => {
                if let Ok(value) = HeaderValue::from_str(&auth.auth_cookie(&token)) {
                    response.headers_mut().append(SET_COOKIE, value);
                }
            }
            Err(err) => eprintln!("failed to issue auth token after setup: {err}"),
        }
    }
    Ok(response)
}
