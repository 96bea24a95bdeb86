use crate::app::session::{self, Session, VISIT_COOKIE};
use crate::catalog::{self, ActivityRecord, ProgramRecord};
use crate::course;
use crate::i18n::Lang;
use crate::obfuscate;
use crate::state::AppState;
use crate::store::Store;
use crate::templates;
use crate::types::{ActivityKind, WEEK_DAYS};

use axum::Extension;
use axum::extract::{Path, Query, State};
use axum::http::header::{REFERER, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Redirect, Response};
use futures::Stream;
use serde::Deserialize;

use std::convert::Infallible;

pub(crate) fn program_view(lang: Lang, record: &ProgramRecord) -> templates::ProgramView {
    templates::ProgramView {
        id: record.id.clone(),
        title: record.program.title.get(lang).to_string(),
        category: record.program.category.wire_name().to_string(),
        description: record.program.description.get(lang).to_string(),
        goal: record
            .program
            .goal
            .as_ref()
            .map(|goal| goal.get(lang).to_string())
            .unwrap_or_default(),
        image: obfuscate::decode(&record.program.image),
    }
}

/// An activity whose program is gone still renders; it just loses the
/// program link.
pub(crate) fn activity_view(
    lang: Lang,
    record: &ActivityRecord,
    programs: &[ProgramRecord],
) -> templates::ActivityView {
    let activity = &record.activity;
    let program = programs
        .iter()
        .find(|program| program.id == activity.program_id);

    let schedule = match activity.kind {
        ActivityKind::OneTime => format!(
            "{} {}",
            activity.date.as_deref().unwrap_or_default(),
            activity.time
        )
        .trim()
        .to_string(),
        ActivityKind::Recurring => {
            let days: Vec<&str> = activity
                .recurring_days
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|tag| WEEK_DAYS.iter().find(|day| day.id == tag.as_str()))
                .map(|day| day.label(lang))
                .collect();
            format!("{} {}", days.join(", "), activity.time)
                .trim()
                .to_string()
        }
    };

    templates::ActivityView {
        title: activity.title.get(lang).to_string(),
        description: activity
            .description
            .as_ref()
            .map(|desc| desc.get(lang).to_string())
            .unwrap_or_default(),
        schedule,
        location: activity.location.clone(),
        status: activity.status.wire_name().to_string(),
        image: obfuscate::decode(&activity.image),
        program_id: activity.program_id.clone(),
        program_title: program
            .map(|program| program.program.title.get(lang).to_string())
            .unwrap_or_default(),
        has_program: program.is_some(),
    }
}

fn latest_first(mut programs: Vec<ProgramRecord>) -> Vec<ProgramRecord> {
    programs.sort_by(|a, b| b.program.created_at.cmp(&a.program.created_at));
    programs
}

#[derive(Debug, Deserialize)]
pub(crate) struct HomeQuery {
    contact: Option<String>,
}

pub(crate) async fn home(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Query(query): Query<HomeQuery>,
    headers: HeaderMap,
) -> Response {
    // Count each browser session once; a failed counter write never blocks
    // the page.
    let first_visit = session::cookie(&headers, VISIT_COOKIE).is_none();
    if first_visit && let Err(err) = catalog::record_visit(&state.store) {
        eprintln!("failed to record visit: {err}");
    }

    let shell = session::shell(&state, &viewer);
    let programs = latest_first(catalog::programs(&state.store))
        .iter()
        .take(3)
        .map(|record| program_view(viewer.lang, record))
        .collect();

    let contact_error = match query.contact.as_deref() {
        Some("missing") => shell.text.aid.missing_fields.to_string(),
        _ => String::new(),
    };
    let page = templates::HomeTemplate {
        stats: catalog::global_stats(&state.store),
        programs,
        contact_sent: query.contact.as_deref() == Some("sent"),
        contact_error,
        shell,
    };

    let mut response = page.into_response();
    if first_visit {
        // Session-scoped on purpose: the counter counts browser sessions.
        response.headers_mut().append(
            SET_COOKIE,
            HeaderValue::from_static("furqan_session=1; Path=/; SameSite=Lax"),
        );
    }
    response
}

pub(crate) async fn about(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::AboutTemplate {
    let lang = viewer.lang;
    let content = catalog::about_content(&state.store);

    templates::AboutTemplate {
        shell: session::shell(&state, &viewer),
        hero_desc: content.hero_desc.get(lang).to_string(),
        vision: content.vision.get(lang).to_string(),
        mission: content.mission.get(lang).to_string(),
        quote: content.quote.get(lang).to_string(),
        values: content
            .values
            .iter()
            .map(|value| templates::AboutBlock {
                icon: value.icon.clone(),
                year: String::new(),
                title: value.title.get(lang).to_string(),
                desc: value.desc.get(lang).to_string(),
            })
            .collect(),
        journey_title: content.journey_title.get(lang).to_string(),
        journey: content
            .journey_steps
            .iter()
            .map(|step| templates::AboutBlock {
                icon: step.icon.clone(),
                year: step.year.clone(),
                title: step.title.get(lang).to_string(),
                desc: step.desc.get(lang).to_string(),
            })
            .collect(),
        gallery: content
            .gallery
            .iter()
            .map(|slot| obfuscate::decode(slot))
            .collect(),
    }
}

pub(crate) async fn programs(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::ProgramsTemplate {
    templates::ProgramsTemplate {
        shell: session::shell(&state, &viewer),
        programs: latest_first(catalog::programs(&state.store))
            .iter()
            .map(|record| program_view(viewer.lang, record))
            .collect(),
    }
}

pub(crate) async fn program_detail(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<String>,
) -> Result<templates::ProgramDetailTemplate, Redirect> {
    let Some(program) = catalog::program(&state.store, &id) else {
        return Err(Redirect::to("/programs"));
    };
    let record = ProgramRecord {
        id: id.clone(),
        program,
    };
    let all_programs = vec![record.clone()];

    Ok(templates::ProgramDetailTemplate {
        shell: session::shell(&state, &viewer),
        program: program_view(viewer.lang, &record),
        activities: catalog::activities_for_program(&state.store, &id)
            .iter()
            .map(|activity| activity_view(viewer.lang, activity, &all_programs))
            .collect(),
    })
}

pub(crate) async fn activities(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::ActivitiesTemplate {
    let programs = catalog::programs(&state.store);
    templates::ActivitiesTemplate {
        shell: session::shell(&state, &viewer),
        activities: catalog::activities(&state.store)
            .iter()
            .map(|record| activity_view(viewer.lang, record, &programs))
            .collect(),
    }
}

pub(crate) async fn learning(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
) -> templates::LearningTemplate {
    templates::LearningTemplate {
        shell: session::shell(&state, &viewer),
        units: course::units()
            .iter()
            .map(|unit| templates::UnitView {
                id: unit.id,
                title_tr: unit.title_tr,
                title_ar: unit.title_ar,
                description: unit.description_ar,
                vocabulary_count: unit.vocabulary_count(),
                grammar_count: unit.grammar_count(),
            })
            .collect(),
    }
}

pub(crate) async fn learning_unit(
    State(state): State<AppState>,
    Extension(viewer): Extension<Session>,
    Path(id): Path<u32>,
) -> Result<templates::LearningUnitTemplate, Redirect> {
    let Some(unit) = course::unit(id) else {
        return Err(Redirect::to("/language-learning"));
    };

    let lessons = unit
        .lessons
        .iter()
        .map(|lesson| {
            let mut view = templates::LessonView {
                title: lesson.title,
                kind_label: lesson.kind_label_ar(),
                vocabulary: Vec::new(),
                grammar: None,
                game: Vec::new(),
                quiz: Vec::new(),
            };
            match &lesson.body {
                course::LessonBody::Vocabulary(entries) => {
                    view.vocabulary = pair_views(entries);
                }
                course::LessonBody::Grammar(rule) => {
                    view.grammar = Some(templates::GrammarView {
                        title: rule.title,
                        explanation: rule.explanation,
                        formula: rule.formula.unwrap_or_default().to_string(),
                        examples: pair_views(&rule.examples),
                    });
                }
                course::LessonBody::Game(entries) => {
                    view.game = pair_views(entries);
                }
                course::LessonBody::Quiz(questions) => {
                    view.quiz = questions
                        .iter()
                        .map(|question| templates::QuizView {
                            question: question.question,
                            options: question.options.clone(),
                            answer: question
                                .options
                                .get(question.correct_index)
                                .copied()
                                .unwrap_or_default(),
                            explanation: question.explanation,
                        })
                        .collect();
                }
            }
            view
        })
        .collect();

    Ok(templates::LearningUnitTemplate {
        shell: session::shell(&state, &viewer),
        title_tr: unit.title_tr,
        title_ar: unit.title_ar,
        lessons,
    })
}

fn pair_views(entries: &[course::Entry]) -> Vec<templates::PairView> {
    entries
        .iter()
        .map(|entry| templates::PairView {
            tr: entry.tr,
            ar: entry.ar,
        })
        .collect()
}

pub(crate) async fn switch_language(Path(code): Path<String>, headers: HeaderMap) -> Response {
    let Some(lang) = Lang::from_code(&code) else {
        return Redirect::to("/").into_response();
    };

    let back = referer_path(&headers).unwrap_or_else(|| "/".to_string());
    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax; Max-Age=31536000",
        session::LANG_COOKIE,
        lang.code()
    );
    let mut response = Redirect::to(&back).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}

fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    if referer.starts_with('/') && !referer.starts_with("//") {
        return Some(referer.to_string());
    }
    let after_scheme = referer.split_once("://")?.1;
    let path = &after_scheme[after_scheme.find('/')?..];
    if path.starts_with("//") {
        return None;
    }
    Some(path.to_string())
}

pub(crate) async fn stats_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.store.subscribe(catalog::STATS);
    let initial = stats_event(&state.store);

    let updates = futures::stream::unfold(
        (state.store.clone(), subscription),
        |(store, mut subscription)| async move {
            subscription.recv().await?;
            let event = stats_event(&store);
            Some((event, (store, subscription)))
        },
    );
    let stream = futures::StreamExt::chain(futures::stream::once(async move { initial }), updates);

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn stats_event(store: &Store) -> Result<Event, Infallible> {
    let stats = catalog::global_stats(store);
    let data = serde_json::to_string(&stats).unwrap_or_default();
    Ok(Event::default().data(data))
}

pub(crate) async fn not_found_redirect() -> Redirect {
    Redirect::to("/")
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::catalog::tests::{sample_activity, sample_program, temp_store};

    #[test]
    fn activity_view__should_render_orphans_without_program_metadata() {
        // Given
        let (store, root) = temp_store("orphan-activity");
        let id = catalog::create_activity(&store, &sample_activity("gone-program")).expect("add");
        let record = ActivityRecord {
            id: id.clone(),
            activity: catalog::activity(&store, &id).expect("activity"),
        };

        // When
        let view = activity_view(Lang::En, &record, &[]);

        // Then
        assert!(!view.has_program);
        assert!(view.program_title.is_empty());
        assert_eq!(view.status, "Upcoming");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn activity_view__should_join_recurring_day_labels_in_the_page_language() {
        // Given
        let record = ActivityRecord {
            id: "a1".to_string(),
            activity: sample_activity("p1"),
        };

        // When
        let en = activity_view(Lang::En, &record, &[]);
        let ar = activity_view(Lang::Ar, &record, &[]);

        // Then
        assert_eq!(en.schedule, "Friday, Saturday 19:00");
        assert!(ar.schedule.contains("الجمعة"));
    }

    #[test]
    fn program_view__should_decode_the_stored_image() {
        // Given
        let record = ProgramRecord {
            id: "p1".to_string(),
            program: sample_program(),
        };

        // When
        let view = program_view(Lang::Tr, &record);

        // Then
        assert_eq!(view.image, "data:image/png;base64,AAAA");
        assert_eq!(view.title, "Kur'an Halkaları");
    }

    #[test]
    fn referer_path__should_only_accept_local_paths() {
        // Given
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://example.org/programs"));

        // Then
        assert_eq!(referer_path(&headers), Some("/programs".to_string()));

        headers.insert(REFERER, HeaderValue::from_static("//evil.example"));
        assert_eq!(referer_path(&headers), None);
    }
}
