use crate::app::session::{self, Session};
use crate::catalog::{self, CatalogError};
use crate::i18n::{Dict, LocalizedString};
use crate::state::AppState;
use crate::templates;
use crate::types::{
    AboutValue, Activity, ActivityKind, ActivityStatus, AidCategory, Channel, ChannelKind,
    GALLERY_SLOTS, JourneyStep, Program, ProgramCategory, WEEK_DAYS,
};
use crate::uploads::{self, UploadError};

use axum::Extension;
use axum::extract::{Form, Path, Query, RawForm, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

// ---- access ---------------------------------------------------------------

fn require_admin(viewer: &Session) -> Result<(), (StatusCode, String)> {
    if viewer.is_admin() {
        Ok(())
    } else {
        let text = crate::i18n::dict(viewer.lang);
        Err((StatusCode::FORBIDDEN, text.admin.forbidden.to_string()))
    }
}

// ---- dashboard tabs -------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TabQuery {
    notice: Option<String>,
    error: Option<String>,
}

fn notice_text(text: &Dict, query: &TabQuery) -> String {
    match query.notice.as_deref() {
        Some("saved") => text.admin.saved.to_string(),
        _ => String::new(),
    }
}

fn error_text(text: &Dict, query: &TabQuery) -> String {
    match query.error.as_deref() {
        Some("invalid") => text.admin.validation_failed.to_string(),
        Some("failed") => text.admin.save_failed.to_string(),
        Some("image") => text.setup.oversized_image.to_string(),
        Some(blocked) if blocked.starts_with("blocked-") => {
            let count = blocked.trim_start_matches("blocked-");
            format!("{} ({count})", text.admin.delete_refused)
        }
        _ => String::new(),
    }
}

pub(crate) async fn dashboard(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> Response {
    if !viewer.signed_in() {
        return Redirect::to("/login").into_response();
    }

    let (requests, messages) = if viewer.is_admin() {
        (
            catalog::aid_requests(&state.store)
                .into_iter()
                .map(|request| templates::InboxRequestView {
                    full_name: request.full_name,
                    aid_type: request.aid_type,
                    phone: request.phone,
                    description: request.description,
                    status: request.status,
                    created_at: request.created_at,
                })
                .collect(),
            catalog::contact_messages(&state.store)
                .into_iter()
                .map(|message| templates::InboxMessageView {
                    name: message.name,
                    email: message.email,
                    subject: message.subject,
                    message: message.message,
                    timestamp: message.timestamp,
                })
                .collect(),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    let user_name = viewer
        .user
        .as_ref()
        .map(|user| user.full_name.clone())
        .unwrap_or_default();

    templates::DashboardTemplate {
        shell: session::shell(&state, &viewer),
        user_name,
        role: viewer.role.wire_name().to_string(),
        stats: catalog::global_stats(&state.store),
        requests,
        messages,
    }
    .into_response()
}

pub(crate) async fn programs_tab(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Query(query): Query<TabQuery>,
) -> Result<templates::DashboardProgramsTemplate, (StatusCode, String)> {
    require_admin(&viewer)?;
    let text = crate::i18n::dict(viewer.lang);

    let programs = catalog::programs(&state.store);
    let activities = catalog::activities(&state.store);

    let program_rows = programs
        .iter()
        .map(|record| {
            let program = &record.program;
            let goal = program.goal.clone().unwrap_or_default();
            templates::AdminProgramRow {
                id: record.id.clone(),
                title_ar: program.title.ar.clone(),
                title_tr: program.title.tr.clone(),
                title_en: program.title.en.clone(),
                description_ar: program.description.ar.clone(),
                description_tr: program.description.tr.clone(),
                description_en: program.description.en.clone(),
                goal_ar: goal.ar,
                goal_tr: goal.tr,
                goal_en: goal.en,
                category: program.category.wire_name().to_string(),
                image: program.image.clone(),
                supervisor_id: program.supervisor_id.clone().unwrap_or_default(),
                activity_count: activities
                    .iter()
                    .filter(|activity| activity.activity.program_id == record.id)
                    .count(),
            }
        })
        .collect();

    let activity_rows = activities
        .iter()
        .map(|record| {
            let activity = &record.activity;
            templates::AdminActivityRow {
                id: record.id.clone(),
                title_ar: activity.title.ar.clone(),
                title_tr: activity.title.tr.clone(),
                title_en: activity.title.en.clone(),
                program_id: activity.program_id.clone(),
                program_title: programs
                    .iter()
                    .find(|program| program.id == activity.program_id)
                    .map(|program| program.program.title.ar.clone())
                    .unwrap_or_default(),
                kind: match activity.kind {
                    ActivityKind::OneTime => "One-time".to_string(),
                    ActivityKind::Recurring => "Recurring".to_string(),
                },
                date: activity.date.clone().unwrap_or_default(),
                time: activity.time.clone(),
                days: activity.recurring_days.clone().unwrap_or_default(),
                location: activity.location.clone(),
                status: activity.status.wire_name().to_string(),
                image: activity.image.clone(),
            }
        })
        .collect();

    Ok(templates::DashboardProgramsTemplate {
        shell: session::shell(&state, &viewer),
        notice: notice_text(text, &query),
        error: error_text(text, &query),
        programs: program_rows,
        activities: activity_rows,
        categories: ProgramCategory::ALL
            .iter()
            .map(|category| templates::CategoryOption {
                value: category.wire_name().to_string(),
                label: category.wire_name().to_string(),
            })
            .collect(),
        weekdays: WEEK_DAYS
            .iter()
            .map(|day| templates::WeekdayChoice {
                id: day.id,
                label: day.label(viewer.lang),
            })
            .collect(),
        supervisors: catalog::volunteers(&state.store)
            .into_iter()
            .map(|(uid, user)| templates::SupervisorOption {
                uid,
                name: user.full_name,
            })
            .collect(),
    })
}

pub(crate) async fn settings_tab(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Query(query): Query<TabQuery>,
) -> Result<templates::DashboardSettingsTemplate, (StatusCode, String)> {
    require_admin(&viewer)?;
    let text = crate::i18n::dict(viewer.lang);
    let settings = catalog::site_settings(&state.store);

    Ok(templates::DashboardSettingsTemplate {
        shell: session::shell(&state, &viewer),
        notice: notice_text(text, &query),
        error: error_text(text, &query),
        address_ar: settings.address.ar.clone(),
        address_tr: settings.address.tr.clone(),
        address_en: settings.address.en.clone(),
        channels: settings
            .channels
            .iter()
            .map(|channel| templates::ChannelRow {
                id: channel.id.clone(),
                name: channel.name.clone(),
                value: channel.value.clone(),
                icon: channel.icon.clone(),
                kind: match channel.kind {
                    ChannelKind::Social => "social".to_string(),
                    ChannelKind::Contact => "contact".to_string(),
                },
                show_in_header: channel.show_in_header,
                show_in_footer: channel.show_in_footer,
            })
            .collect(),
        aid_categories: settings
            .aid_categories
            .iter()
            .map(|category| templates::AidCategoryRow {
                id: category.id.clone(),
                ar: category.ar.clone(),
                tr: category.tr.clone(),
                en: category.en.clone(),
            })
            .collect(),
    })
}

pub(crate) async fn about_tab(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Query(query): Query<TabQuery>,
) -> Result<templates::DashboardAboutTemplate, (StatusCode, String)> {
    require_admin(&viewer)?;
    let text = crate::i18n::dict(viewer.lang);
    let content = catalog::about_content(&state.store);

    let edit_blocks = |values: &[(usize, String, String, LocalizedString, LocalizedString)]| {
        values
            .iter()
            .map(
                |(index, icon, year, title, desc)| templates::AboutEditBlock {
                    index: *index,
                    icon: icon.clone(),
                    year: year.clone(),
                    title_ar: title.ar.clone(),
                    title_tr: title.tr.clone(),
                    title_en: title.en.clone(),
                    desc_ar: desc.ar.clone(),
                    desc_tr: desc.tr.clone(),
                    desc_en: desc.en.clone(),
                },
            )
            .collect::<Vec<_>>()
    };

    let values: Vec<_> = content
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                index,
                value.icon.clone(),
                String::new(),
                value.title.clone(),
                value.desc.clone(),
            )
        })
        .collect();
    let journey: Vec<_> = content
        .journey_steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            (
                index,
                step.icon.clone(),
                step.year.clone(),
                step.title.clone(),
                step.desc.clone(),
            )
        })
        .collect();

    Ok(templates::DashboardAboutTemplate {
        shell: session::shell(&state, &viewer),
        notice: notice_text(text, &query),
        error: error_text(text, &query),
        hero_desc_ar: content.hero_desc.ar.clone(),
        hero_desc_tr: content.hero_desc.tr.clone(),
        hero_desc_en: content.hero_desc.en.clone(),
        vision_ar: content.vision.ar.clone(),
        vision_tr: content.vision.tr.clone(),
        vision_en: content.vision.en.clone(),
        mission_ar: content.mission.ar.clone(),
        mission_tr: content.mission.tr.clone(),
        mission_en: content.mission.en.clone(),
        quote_ar: content.quote.ar.clone(),
        quote_tr: content.quote.tr.clone(),
        quote_en: content.quote.en.clone(),
        values: edit_blocks(&values),
        journey: edit_blocks(&journey),
        gallery: content.gallery.clone(),
    })
}

// ---- programs -------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProgramForm {
    #[serde(default)]
    title_ar: String,
    #[serde(default)]
    title_tr: String,
    #[serde(default)]
    title_en: String,
    #[serde(default)]
    description_ar: String,
    #[serde(default)]
    description_tr: String,
    #[serde(default)]
    description_en: String,
    #[serde(default)]
    goal_ar: String,
    #[serde(default)]
    goal_tr: String,
    #[serde(default)]
    goal_en: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    supervisor_id: String,
}

fn build_program(form: &ProgramForm, created_at: String) -> Result<Program, UploadError> {
    let goal = LocalizedString::new(
        form.goal_ar.trim(),
        form.goal_tr.trim(),
        form.goal_en.trim(),
    );
    Ok(Program {
        title: LocalizedString::new(
            form.title_ar.trim(),
            form.title_tr.trim(),
            form.title_en.trim(),
        ),
        category: ProgramCategory::from_wire(&form.category).unwrap_or(ProgramCategory::General),
        description: LocalizedString::new(
            form.description_ar.trim(),
            form.description_tr.trim(),
            form.description_en.trim(),
        ),
        goal: (!(goal.ar.is_empty() && goal.tr.is_empty() && goal.en.is_empty())).then_some(goal),
        image: uploads::accept_image(&form.image)?,
        supervisor_id: {
            let supervisor = form.supervisor_id.trim();
            (!supervisor.is_empty()).then(|| supervisor.to_string())
        },
        created_at,
    })
}

fn mutation_redirect(tab: &str, result: Result<(), CatalogError>) -> Redirect {
    match result {
        Ok(()) => Redirect::to(&format!("{tab}?notice=saved")),
        Err(CatalogError::Invalid(_)) => Redirect::to(&format!("{tab}?error=invalid")),
        Err(CatalogError::HasActivities(count)) => {
            Redirect::to(&format!("{tab}?error=blocked-{count}"))
        }
        Err(CatalogError::Store(err)) => {
            eprintln!("admin mutation failed: {err}");
            Redirect::to(&format!("{tab}?error=failed"))
        }
    }
}

const PROGRAMS_TAB: &str = "/dashboard/programs";

pub(crate) async fn program_create(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<ProgramForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let program = match build_program(&form, catalog::now_timestamp()) {
        Ok(program) => program,
        Err(_) => return Ok(Redirect::to("/dashboard/programs?error=image")),
    };
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::create_program(&state.store, &program).map(|_| ()),
    ))
}

pub(crate) async fn program_update(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
    Form(form): Form<ProgramForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let created_at = catalog::program(&state.store, &id)
        .map(|program| program.created_at)
        .unwrap_or_else(catalog::now_timestamp);
    let program = match build_program(&form, created_at) {
        Ok(program) => program,
        Err(_) => return Ok(Redirect::to("/dashboard/programs?error=image")),
    };
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::update_program(&state.store, &id, &program),
    ))
}

pub(crate) async fn program_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::delete_program(&state.store, &id),
    ))
}

// ---- activities -----------------------------------------------------------

fn form_pairs(bytes: &[u8]) -> Vec<(String, String)> {
    serde_urlencoded::from_bytes(bytes).unwrap_or_default()
}

fn form_field<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

fn form_fields(pairs: &[(String, String)], name: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .collect()
}

fn build_activity(pairs: &[(String, String)]) -> Result<Activity, UploadError> {
    let kind = match form_field(pairs, "type") {
        "Recurring" => ActivityKind::Recurring,
        _ => ActivityKind::OneTime,
    };
    let date = form_field(pairs, "date").trim().to_string();
    let supervisor = form_field(pairs, "supervisorId").trim().to_string();

    Ok(Activity {
        program_id: form_field(pairs, "programId").trim().to_string(),
        title: LocalizedString::new(
            form_field(pairs, "titleAr").trim(),
            form_field(pairs, "titleTr").trim(),
            form_field(pairs, "titleEn").trim(),
        ),
        description: None,
        kind,
        date: match kind {
            ActivityKind::OneTime => (!date.is_empty()).then_some(date),
            ActivityKind::Recurring => None,
        },
        time: form_field(pairs, "time").trim().to_string(),
        recurring_days: match kind {
            ActivityKind::Recurring => Some(form_fields(pairs, "recurringDays")),
            ActivityKind::OneTime => None,
        },
        location: form_field(pairs, "location").trim().to_string(),
        supervisor_id: (!supervisor.is_empty()).then_some(supervisor),
        status: parse_status(form_field(pairs, "status")),
        image: uploads::accept_image(form_field(pairs, "image"))?,
    })
}

fn parse_status(raw: &str) -> ActivityStatus {
    match raw {
        "Ongoing" => ActivityStatus::Ongoing,
        "Completed" => ActivityStatus::Completed,
        "Finished" => ActivityStatus::Finished,
        _ => ActivityStatus::Upcoming,
    }
}

pub(crate) async fn activity_create(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    RawForm(body): RawForm,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let activity = match build_activity(&form_pairs(&body)) {
        Ok(activity) => activity,
        Err(_) => return Ok(Redirect::to("/dashboard/programs?error=image")),
    };
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::create_activity(&state.store, &activity).map(|_| ()),
    ))
}

pub(crate) async fn activity_update(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let activity = match build_activity(&form_pairs(&body)) {
        Ok(activity) => activity,
        Err(_) => return Ok(Redirect::to("/dashboard/programs?error=image")),
    };
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::update_activity(&state.store, &id, &activity),
    ))
}

pub(crate) async fn activity_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    Ok(mutation_redirect(
        PROGRAMS_TAB,
        catalog::delete_activity(&state.store, &id),
    ))
}

// ---- settings -------------------------------------------------------------

fn settings_redirect(result: Result<(), crate::store::StoreError>) -> Redirect {
    match result {
        Ok(()) => Redirect::to("/dashboard/settings?notice=saved"),
        Err(err) => {
            eprintln!("settings save failed: {err}");
            Redirect::to("/dashboard/settings?error=failed")
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressForm {
    #[serde(default)]
    address_ar: String,
    #[serde(default)]
    address_tr: String,
    #[serde(default)]
    address_en: String,
}

pub(crate) async fn settings_save(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<AddressForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let mut settings = catalog::site_settings(&state.store);
    settings.address = LocalizedString::new(
        form.address_ar.trim(),
        form.address_tr.trim(),
        form.address_en.trim(),
    );
    Ok(settings_redirect(catalog::save_site_settings(
        &state.store,
        &settings,
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelForm {
    name: String,
    value: String,
    #[serde(default)]
    icon: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    show_in_header: Option<String>,
    #[serde(default)]
    show_in_footer: Option<String>,
}

pub(crate) async fn channel_add(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<ChannelForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    if form.name.trim().is_empty() || form.value.trim().is_empty() {
        return Ok(Redirect::to("/dashboard/settings?error=invalid"));
    }

    let mut settings = catalog::site_settings(&state.store);
    let icon = form.icon.trim();
    settings.channels.push(Channel {
        id: state.store.allocate_id(),
        name: form.name.trim().to_string(),
        value: form.value.trim().to_string(),
        icon: if icon.is_empty() {
            "Link".to_string()
        } else {
            icon.to_string()
        },
        kind: if form.kind == "contact" {
            ChannelKind::Contact
        } else {
            ChannelKind::Social
        },
        show_in_header: form.show_in_header.is_some(),
        show_in_footer: form.show_in_footer.is_some(),
    });
    Ok(settings_redirect(catalog::save_site_settings(
        &state.store,
        &settings,
    )))
}

pub(crate) async fn channel_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let mut settings = catalog::site_settings(&state.store);
    settings.channels.retain(|channel| channel.id != id);
    Ok(settings_redirect(catalog::save_site_settings(
        &state.store,
        &settings,
    )))
}

#[derive(Debug, Deserialize)]
pub(crate) struct AidCategoryForm {
    ar: String,
    #[serde(default)]
    tr: String,
    #[serde(default)]
    en: String,
}

pub(crate) async fn aid_category_add(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<AidCategoryForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    if form.ar.trim().is_empty() {
        return Ok(Redirect::to("/dashboard/settings?error=invalid"));
    }
    let mut settings = catalog::site_settings(&state.store);
    settings.aid_categories.push(AidCategory {
        id: state.store.allocate_id(),
        ar: form.ar.trim().to_string(),
        tr: form.tr.trim().to_string(),
        en: form.en.trim().to_string(),
    });
    Ok(settings_redirect(catalog::save_site_settings(
        &state.store,
        &settings,
    )))
}

pub(crate) async fn aid_category_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let mut settings = catalog::site_settings(&state.store);
    settings.aid_categories.retain(|category| category.id != id);
    Ok(settings_redirect(catalog::save_site_settings(
        &state.store,
        &settings,
    )))
}

// ---- about page content ---------------------------------------------------

const ABOUT_TAB: &str = "/dashboard/about";

fn about_redirect(result: Result<(), crate::store::StoreError>) -> Redirect {
    match result {
        Ok(()) => Redirect::to("/dashboard/about?notice=saved"),
        Err(err) => {
            eprintln!("about content save failed: {err}");
            Redirect::to("/dashboard/about?error=failed")
        }
    }
}

pub(crate) async fn about_save(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    RawForm(body): RawForm,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let pairs = form_pairs(&body);
    let localized = |prefix: &str| {
        LocalizedString::new(
            form_field(&pairs, &format!("{prefix}Ar")).trim(),
            form_field(&pairs, &format!("{prefix}Tr")).trim(),
            form_field(&pairs, &format!("{prefix}En")).trim(),
        )
    };

    let mut content = catalog::about_content(&state.store);
    content.hero_desc = localized("heroDesc");
    content.vision = localized("vision");
    content.mission = localized("mission");
    content.quote = localized("quote");

    let mut gallery = Vec::with_capacity(GALLERY_SLOTS);
    for slot in form_fields(&pairs, "gallery") {
        match uploads::accept_image(&slot) {
            Ok(stored) => gallery.push(stored),
            Err(_) => return Ok(Redirect::to("/dashboard/about?error=image")),
        }
    }
    gallery.resize(GALLERY_SLOTS, String::new());
    gallery.truncate(GALLERY_SLOTS);
    content.gallery = gallery;

    Ok(about_redirect(catalog::save_about_content(
        &state.store,
        &content,
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AboutBlockForm {
    #[serde(default)]
    icon: String,
    #[serde(default)]
    year: String,
    title_ar: String,
    #[serde(default)]
    title_tr: String,
    #[serde(default)]
    title_en: String,
    #[serde(default)]
    desc_ar: String,
    #[serde(default)]
    desc_tr: String,
    #[serde(default)]
    desc_en: String,
}

pub(crate) async fn about_value_add(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<AboutBlockForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    if form.title_ar.trim().is_empty() {
        return Ok(Redirect::to("/dashboard/about?error=invalid"));
    }
    let mut content = catalog::about_content(&state.store);
    content.values.push(AboutValue {
        icon: default_icon(&form.icon, "Star"),
        title: LocalizedString::new(
            form.title_ar.trim(),
            form.title_tr.trim(),
            form.title_en.trim(),
        ),
        desc: LocalizedString::new(form.desc_ar.trim(), form.desc_tr.trim(), form.desc_en.trim()),
    });
    Ok(about_redirect(catalog::save_about_content(
        &state.store,
        &content,
    )))
}

pub(crate) async fn about_value_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(index): Path<usize>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let mut content = catalog::about_content(&state.store);
    if index >= content.values.len() {
        return Ok(Redirect::to(ABOUT_TAB));
    }
    content.values.remove(index);
    Ok(about_redirect(catalog::save_about_content(
        &state.store,
        &content,
    )))
}

pub(crate) async fn journey_add(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Form(form): Form<AboutBlockForm>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    if form.title_ar.trim().is_empty() || form.year.trim().is_empty() {
        return Ok(Redirect::to("/dashboard/about?error=invalid"));
    }
    let mut content = catalog::about_content(&state.store);
    content.journey_steps.push(JourneyStep {
        icon: default_icon(&form.icon, "Flag"),
        year: form.year.trim().to_string(),
        title: LocalizedString::new(
            form.title_ar.trim(),
            form.title_tr.trim(),
            form.title_en.trim(),
        ),
        desc: LocalizedString::new(form.desc_ar.trim(), form.desc_tr.trim(), form.desc_en.trim()),
    });
    Ok(about_redirect(catalog::save_about_content(
        &state.store,
        &content,
    )))
}

pub(crate) async fn journey_delete(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(index): Path<usize>,
) -> Result<Redirect, (StatusCode, String)> {
    require_admin(&viewer)?;
    let mut content = catalog::about_content(&state.store);
    if index >= content.journey_steps.len() {
        return Ok(Redirect::to(ABOUT_TAB));
    }
    content.journey_steps.remove(index);
    Ok(about_redirect(catalog::save_about_content(
        &state.store,
        &content,
    )))
}

fn default_icon(raw: &str, fallback: &str) -> String {
    let icon = raw.trim();
    if icon.is_empty() {
        fallback.to_string()
    } else {
        icon.to_string()
    }
}
