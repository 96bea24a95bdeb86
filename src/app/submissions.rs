use crate::app::session::{self, Session};
use crate::catalog;
use crate::state::AppState;
use crate::templates;
use crate::types::{AID_STATUS_PENDING, AidRequest, ContactMessage};

use axum::Extension;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use serde::Deserialize;

fn aid_categories(state: &AppState, viewer: &Session) -> Vec<templates::CategoryOption> {
    catalog::site_settings(&state.store)
        .aid_categories
        .iter()
        .map(|category| templates::CategoryOption {
            value: category.label(viewer.lang).to_string(),
            label: category.label(viewer.lang).to_string(),
        })
        .collect()
}

pub(crate) async fn aid_request_form(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::AidRequestTemplate {
    templates::AidRequestTemplate {
        categories: aid_categories(&state, &viewer),
        shell: session::shell(&state, &viewer),
        error: String::new(),
        submitted: false,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AidRequestPost {
    full_name: String,
    id_number: String,
    phone: String,
    #[serde(default)]
    aid_type: String,
    description: String,
}

pub(crate) async fn aid_request_submit(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<AidRequestPost>,
) -> Result<templates::AidRequestTemplate, (StatusCode, templates::AidRequestTemplate)> {
    let text = crate::i18n::dict(viewer.lang);
    let required = [
        form.full_name.trim(),
        form.id_number.trim(),
        form.phone.trim(),
        form.aid_type.trim(),
        form.description.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            templates::AidRequestTemplate {
                categories: aid_categories(&state, &viewer),
                shell: session::shell(&state, &viewer),
                error: text.aid.missing_fields.to_string(),
                submitted: false,
            },
        ));
    }

    let request = AidRequest {
        full_name: form.full_name.trim().to_string(),
        id_number: form.id_number.trim().to_string(),
        aid_type: form.aid_type.trim().to_string(),
        description: form.description.trim().to_string(),
        phone: form.phone.trim().to_string(),
        status: AID_STATUS_PENDING.to_string(),
        created_at: catalog::now_timestamp(),
        lang: viewer.lang,
    };
    if let Err(err) = catalog::add_aid_request(&state.store, &request) {
        eprintln!("failed to store aid request: {err}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            templates::AidRequestTemplate {
                categories: aid_categories(&state, &viewer),
                shell: session::shell(&state, &viewer),
                error: text.setup.generic_error.to_string(),
                submitted: false,
            },
        ));
    }

    Ok(templates::AidRequestTemplate {
        categories: Vec::new(),
        shell: session::shell(&state, &viewer),
        error: String::new(),
        submitted: true,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactPost {
    name: String,
    email: String,
    subject: String,
    message: String,
}

pub(crate) async fn contact_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactPost>,
) -> Redirect {
    let required = [
        form.name.trim(),
        form.email.trim(),
        form.subject.trim(),
        form.message.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Redirect::to("/?contact=missing");
    }

    let message = ContactMessage {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        kind: "contact".to_string(),
        subject: form.subject.trim().to_string(),
        message: form.message.trim().to_string(),
        timestamp: catalog::now_timestamp(),
    };
    if let Err(err) = catalog::add_contact_message(&state.store, &message) {
        eprintln!("failed to store contact message: {err}");
    }
    Redirect::to("/?contact=sent")
}
