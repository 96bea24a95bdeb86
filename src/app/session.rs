use crate::catalog;
use crate::i18n::{self, Lang};
use crate::obfuscate;
use crate::setup as setup_service;
use crate::state::AppState;
use crate::templates::{ChannelView, Shell};
use crate::types::{User, UserRole};

use axum::body::Body;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::Request;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

pub(crate) const LANG_COOKIE: &str = "furqan_lang";
pub(crate) const VISIT_COOKIE: &str = "furqan_session";

/// Per-request viewer context, resolved once in the middleware and read by
/// every handler through an extension.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) lang: Lang,
    pub(crate) uid: Option<String>,
    pub(crate) user: Option<User>,
    pub(crate) role: UserRole,
}

pub(crate) async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let session = resolve_session(&state, req.headers());

    let path = req.uri().path();
    if setup_service::setup_needed(&state.store) && !is_setup_bypass_path(path) {
        return Redirect::to("/setup").into_response();
    }

    req.extensions_mut().insert(session);
    next.run(req).await
}

fn is_setup_bypass_path(path: &str) -> bool {
    path == "/setup" || path == "/health" || path.starts_with("/static/")
}

fn resolve_session(state: &AppState, headers: &HeaderMap) -> Session {
    let lang = cookie(headers, LANG_COOKIE)
        .and_then(Lang::from_code)
        .unwrap_or(Lang::Ar);

    let uid = state.auth.as_ref().and_then(|auth| {
        cookie(headers, auth.cookie_name()).and_then(|token| auth.verify_token(token).ok())
    });

    // A signed-in account without a profile document is a plain student; a
    // profile read failure demotes to guest rather than failing the page.
    let (user, role) = match uid.as_deref() {
        None => (None, UserRole::Guest),
        Some(uid) => match catalog::user(&state.store, uid) {
            Ok(Some(user)) => {
                let role = user.role;
                (Some(user), role)
            }
            Ok(None) => (None, UserRole::Student),
            Err(err) => {
                eprintln!("failed to load user profile {uid}: {err}");
                (None, UserRole::Guest)
            }
        },
    };

    Session {
        lang,
        uid,
        user,
        role,
    }
}

pub(crate) fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    for header in headers.get_all(COOKIE).iter() {
        if let Ok(raw) = header.to_str()
            && let Some(value) = cookie_from_header(raw, name)
        {
            return Some(value);
        }
    }
    None
}

fn cookie_from_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let trimmed = part.trim();
        if let Some((cookie_name, cookie_value)) = trimmed.split_once('=')
            && cookie_name == name
        {
            return Some(cookie_value);
        }
    }
    None
}

impl Session {
    pub(crate) fn signed_in(&self) -> bool {
        self.uid.is_some()
    }

    pub(crate) fn is_admin(&self) -> bool {
        self.role == UserRole::SuperAdmin
    }
}

/// Build the page chrome for the current viewer.
pub(crate) fn shell(state: &AppState, session: &Session) -> Shell {
    let settings = catalog::site_settings(&state.store);
    let lang = session.lang;

    let channel_view = |channel: &crate::types::Channel| ChannelView {
        name: channel.name.clone(),
        value: channel.value.clone(),
        icon: channel.icon.clone(),
    };
    let header_channels = settings
        .channels
        .iter()
        .filter(|channel| channel.show_in_header)
        .map(channel_view)
        .collect();
    let footer_channels = settings
        .channels
        .iter()
        .filter(|channel| channel.show_in_footer)
        .map(channel_view)
        .collect();

    Shell {
        app_name: state.config.app_name.clone(),
        lang_code: lang.code(),
        dir: lang.dir(),
        text: i18n::dict(lang),
        logo: obfuscate::decode(&settings.logo),
        favicon: obfuscate::decode(&settings.favicon),
        header_channels,
        footer_channels,
        address: settings.address.get(lang).to_string(),
        signed_in: session.signed_in(),
        is_admin: session.is_admin(),
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie__should_find_the_named_cookie_among_many() {
        // Given
        let mut headers = HeaderMap::new();
        headers.append(
            COOKIE,
            HeaderValue::from_static("other=1; furqan_lang=tr; furqan_session=1"),
        );

        // Then
        assert_eq!(cookie(&headers, "furqan_lang"), Some("tr"));
        assert_eq!(cookie(&headers, "furqan_session"), Some("1"));
        assert_eq!(cookie(&headers, "missing"), None);
    }

    #[test]
    fn cookie__should_return_none_without_cookie_header() {
        // Then
        assert_eq!(cookie(&HeaderMap::new(), "furqan_lang"), None);
    }
}
