use crate::app::session::{self, Session};
use crate::auth::{self as auth_service, AuthError, AuthState};
use crate::catalog;
use crate::state::AppState;
use crate::templates;
use crate::types::{User, UserRole};

use axum::Extension;
use axum::extract::{Form, Query, State};
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LoginQuery {
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginForm {
    email: String,
    password: String,
    next: Option<String>,
}

pub(crate) async fn login_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Query(query): Query<LoginQuery>,
) -> templates::LoginTemplate {
    templates::LoginTemplate {
        shell: session::shell(&state, &viewer),
        error: String::new(),
        next: sanitize_next(query.next.as_deref()).unwrap_or_else(|| "/dashboard".to_string()),
    }
}

pub(crate) async fn login_submit(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<LoginForm>,
) -> Result<Response, (StatusCode, templates::LoginTemplate)> {
    let next = sanitize_next(form.next.as_deref()).unwrap_or_else(|| "/dashboard".to_string());
    let text = crate::i18n::dict(viewer.lang);

    let Some(auth) = state.auth.as_ref() else {
        return Err((
            StatusCode::NOT_FOUND,
            templates::LoginTemplate {
                shell: session::shell(&state, &viewer),
                error: text.auth.login_error.to_string(),
                next,
            },
        ));
    };

    let uid = match auth_service::sign_in(&state.store, &form.email, &form.password) {
        Ok(uid) => uid,
        Err(err) => {
            if !matches!(err, AuthError::InvalidCredential) {
                eprintln!("sign-in failed: {err}");
            }
            return Err((
                StatusCode::UNAUTHORIZED,
                templates::LoginTemplate {
                    shell: session::shell(&state, &viewer),
                    error: text.auth.invalid_credential.to_string(),
                    next,
                },
            ));
        }
    };

    issue_session(auth, &state, &viewer, &uid, &next)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterForm {
    full_name: String,
    email: String,
    phone: Option<String>,
    password: String,
    confirm_password: String,
    role: Option<String>,
}

pub(crate) async fn register_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::RegisterTemplate {
    templates::RegisterTemplate {
        shell: session::shell(&state, &viewer),
        error: String::new(),
    }
}

pub(crate) async fn register_submit(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, (StatusCode, templates::RegisterTemplate)> {
    let text = crate::i18n::dict(viewer.lang);
    let register_error = |status: StatusCode, error: &str| {
        (
            status,
            templates::RegisterTemplate {
                shell: session::shell(&state, &viewer),
                error: error.to_string(),
            },
        )
    };

    let Some(auth) = state.auth.as_ref() else {
        return Err(register_error(StatusCode::NOT_FOUND, text.auth.login_error));
    };

    let full_name = form.full_name.trim();
    if full_name.is_empty() || form.email.trim().is_empty() {
        return Err(register_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            text.aid.missing_fields,
        ));
    }
    if form.password != form.confirm_password {
        return Err(register_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            text.auth.password_mismatch,
        ));
    }

    let uid = match auth_service::register_identity(&state.store, &form.email, &form.password) {
        Ok(uid) => uid,
        Err(AuthError::EmailInUse) => {
            return Err(register_error(StatusCode::CONFLICT, text.auth.email_in_use));
        }
        Err(AuthError::WeakPassword) => {
            return Err(register_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                text.auth.password_too_short,
            ));
        }
        Err(err) => {
            eprintln!("registration failed: {err}");
            return Err(register_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                text.auth.login_error,
            ));
        }
    };

    let user = User {
        full_name: full_name.to_string(),
        email: form.email.trim().to_string(),
        phone: form
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string),
        role: self_service_role(form.role.as_deref()),
        avatar: String::new(),
        created_at: catalog::now_timestamp(),
    };
    if let Err(err) = catalog::save_user(&state.store, &uid, &user) {
        eprintln!("failed to save profile for {uid}: {err}");
        return Err(register_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            text.auth.login_error,
        ));
    }

    issue_session(auth, &state, &viewer, &uid, "/dashboard").map_err(|(status, login)| {
        (
            status,
            templates::RegisterTemplate {
                shell: login.shell,
                error: login.error,
            },
        )
    })
}

/// Self-service registration never grants an elevated role.
fn self_service_role(raw: Option<&str>) -> UserRole {
    match raw {
        Some("Student") => UserRole::Student,
        Some("Volunteer") => UserRole::Volunteer,
        _ => UserRole::Parent,
    }
}

pub(crate) async fn logout(State(state): State<AppState>) -> Response {
    let mut response = Redirect::to("/").into_response();
    if let Some(auth) = state.auth.as_ref()
        && let Ok(value) = HeaderValue::from_str(&auth.clear_cookie())
    {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

fn issue_session(
    auth: &AuthState,
    state: &AppState,
    viewer: &Session,
    uid: &str,
    next: &str,
) -> Result<Response, (StatusCode, templates::LoginTemplate)> {
    let text = crate::i18n::dict(viewer.lang);
    let failure = |state: &AppState, viewer: &Session| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            templates::LoginTemplate {
                shell: session::shell(state, viewer),
                error: text.auth.login_error.to_string(),
                next: next.to_string(),
            },
        )
    };

    let token = match auth.issue_token(uid) {
        Ok(token) => token,
        Err(err) => {
            eprintln!("failed to issue auth token: {err}");
            return Err(failure(state, viewer));
        }
    };

    let Ok(value) = HeaderValue::from_str(&auth.auth_cookie(&token)) else {
        return Err(failure(state, viewer));
    };
    let mut response = Redirect::to(next).into_response();
    response.headers_mut().append(SET_COOKIE, value);
    Ok(response)
}

fn sanitize_next(next: Option<&str>) -> Option<String> {
    let next = next?.trim();
    if next.is_empty() {
        return None;
    }
    if !next.starts_with('/') || next.starts_with("//") || next.contains("://") {
        return None;
    }
    Some(next.to_string())
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_next__should_reject_offsite_targets() {
        // Then
        assert_eq!(
            sanitize_next(Some("/dashboard")),
            Some("/dashboard".to_string())
        );
        assert_eq!(sanitize_next(Some("https://evil.example")), None);
        assert_eq!(sanitize_next(Some("//evil.example")), None);
        assert_eq!(sanitize_next(Some("   ")), None);
        assert_eq!(sanitize_next(None), None);
    }

    #[test]
    fn self_service_role__should_never_grant_elevated_roles() {
        // Then
        assert_eq!(self_service_role(Some("Student")), UserRole::Student);
        assert_eq!(self_service_role(Some("Volunteer")), UserRole::Volunteer);
        assert_eq!(self_service_role(Some("Super Admin")), UserRole::Parent);
        assert_eq!(self_service_role(Some("Admin")), UserRole::Parent);
        assert_eq!(self_service_role(None), UserRole::Parent);
    }
}
