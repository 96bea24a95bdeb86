//! Typed boundary over the document store.
//!
//! Every collection read/write goes through here so documents are shaped
//! and validated in one place. Cross-collection integrity (a program with
//! dependent activities, counter symmetry) is enforced here at the point
//! of the action, not by the store.

use crate::store::{Store, StoreError};
use crate::types::{
    Activity, AidRequest, ContactMessage, AboutContent, GlobalStats, Program, SiteSettings,
    SystemConfig, User, UserRole, ValidationError,
};

use serde_json::Value;

pub const USERS: &str = "users";
pub const IDENTITIES: &str = "identities";
pub const PROGRAMS: &str = "programs";
pub const ACTIVITIES: &str = "activities";
pub const CONTENT: &str = "content";
pub const STATS: &str = "stats";
pub const SYSTEM: &str = "system";
pub const AID_REQUESTS: &str = "aid_requests";
pub const CONTACT_MESSAGES: &str = "contact_messages";

pub const SETTINGS_DOC: &str = "settings";
pub const ABOUT_DOC: &str = "about";
pub const STATS_DOC: &str = "global";
pub const CONFIG_DOC: &str = "config";

#[derive(Debug)]
pub enum CatalogError {
    Invalid(ValidationError),
    /// Program delete refused; carries the number of blocking activities.
    HasActivities(usize),
    Store(StoreError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Invalid(err) => err.fmt(f),
            CatalogError::HasActivities(count) => {
                write!(f, "program has {count} dependent activities")
            }
            CatalogError::Store(err) => err.fmt(f),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::Store(err)
    }
}

pub fn now_timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct ProgramRecord {
    pub id: String,
    pub program: Program,
}

#[derive(Debug, Clone)]
pub struct ActivityRecord {
    pub id: String,
    pub activity: Activity,
}

// ---- users ----------------------------------------------------------------

pub fn user(store: &Store, uid: &str) -> Result<Option<User>, StoreError> {
    match store.get(USERS, uid) {
        None => Ok(None),
        Some(doc) => serde_json::from_value(doc)
            .map(Some)
            .map_err(|_| StoreError::Corrupt(USERS.to_string())),
    }
}

pub fn save_user(store: &Store, uid: &str, user: &User) -> Result<(), StoreError> {
    let doc = serde_json::to_value(user).map_err(|_| StoreError::NotAnObject)?;
    store.set(USERS, uid, doc)
}

pub fn volunteers(store: &Store) -> Vec<(String, User)> {
    store
        .query_eq(USERS, "role", &Value::from(UserRole::Volunteer.wire_name()))
        .into_iter()
        .filter_map(|(id, doc)| serde_json::from_value(doc).ok().map(|user| (id, user)))
        .collect()
}

// ---- programs & activities ------------------------------------------------

pub fn programs(store: &Store) -> Vec<ProgramRecord> {
    store
        .list(PROGRAMS)
        .into_iter()
        .filter_map(|(id, doc)| {
            serde_json::from_value(doc)
                .ok()
                .map(|program| ProgramRecord { id, program })
        })
        .collect()
}

pub fn program(store: &Store, id: &str) -> Option<Program> {
    store
        .get(PROGRAMS, id)
        .and_then(|doc| serde_json::from_value(doc).ok())
}

pub fn activities(store: &Store) -> Vec<ActivityRecord> {
    store
        .list(ACTIVITIES)
        .into_iter()
        .filter_map(|(id, doc)| {
            serde_json::from_value(doc)
                .ok()
                .map(|activity| ActivityRecord { id, activity })
        })
        .collect()
}

pub fn activity(store: &Store, id: &str) -> Option<Activity> {
    store
        .get(ACTIVITIES, id)
        .and_then(|doc| serde_json::from_value(doc).ok())
}

pub fn activities_for_program(store: &Store, program_id: &str) -> Vec<ActivityRecord> {
    activities(store)
        .into_iter()
        .filter(|record| record.activity.program_id == program_id)
        .collect()
}

pub fn create_program(store: &Store, program: &Program) -> Result<String, CatalogError> {
    program.validate().map_err(CatalogError::Invalid)?;
    let doc = serde_json::to_value(program).map_err(|_| StoreError::NotAnObject)?;
    let id = store.add(PROGRAMS, doc)?;
    store.increment(STATS, STATS_DOC, "programCount", 1)?;
    Ok(id)
}

pub fn update_program(store: &Store, id: &str, program: &Program) -> Result<(), CatalogError> {
    program.validate().map_err(CatalogError::Invalid)?;
    let doc = serde_json::to_value(program).map_err(|_| StoreError::NotAnObject)?;
    store.set(PROGRAMS, id, doc)?;
    Ok(())
}

/// Refused while any activity still references the program; the error
/// carries the exact count so the refusal message can show it.
pub fn delete_program(store: &Store, id: &str) -> Result<(), CatalogError> {
    let blocking = activities_for_program(store, id).len();
    if blocking > 0 {
        return Err(CatalogError::HasActivities(blocking));
    }
    if store.get(PROGRAMS, id).is_none() {
        return Ok(());
    }
    store.delete(PROGRAMS, id)?;
    store.increment(STATS, STATS_DOC, "programCount", -1)?;
    Ok(())
}

pub fn create_activity(store: &Store, activity: &Activity) -> Result<String, CatalogError> {
    activity.validate().map_err(CatalogError::Invalid)?;
    let doc = serde_json::to_value(activity).map_err(|_| StoreError::NotAnObject)?;
    let id = store.add(ACTIVITIES, doc)?;
    store.increment(STATS, STATS_DOC, "activityCount", 1)?;
    Ok(id)
}

pub fn update_activity(store: &Store, id: &str, activity: &Activity) -> Result<(), CatalogError> {
    activity.validate().map_err(CatalogError::Invalid)?;
    let doc = serde_json::to_value(activity).map_err(|_| StoreError::NotAnObject)?;
    store.set(ACTIVITIES, id, doc)?;
    Ok(())
}

pub fn delete_activity(store: &Store, id: &str) -> Result<(), CatalogError> {
    if store.get(ACTIVITIES, id).is_none() {
        return Ok(());
    }
    store.delete(ACTIVITIES, id)?;
    store.increment(STATS, STATS_DOC, "activityCount", -1)?;
    Ok(())
}

// ---- singletons -----------------------------------------------------------

/// Settings degrade to defaults when missing or undecodable; a broken
/// settings document must never block a public page.
pub fn site_settings(store: &Store) -> SiteSettings {
    store
        .get(CONTENT, SETTINGS_DOC)
        .and_then(|doc| serde_json::from_value(doc).ok())
        .unwrap_or_default()
}

pub fn save_site_settings(store: &Store, settings: &SiteSettings) -> Result<(), StoreError> {
    let doc = serde_json::to_value(settings).map_err(|_| StoreError::NotAnObject)?;
    store.set(CONTENT, SETTINGS_DOC, doc)
}

pub fn about_content(store: &Store) -> AboutContent {
    store
        .get(CONTENT, ABOUT_DOC)
        .and_then(|doc| serde_json::from_value(doc).ok())
        .unwrap_or_default()
}

pub fn save_about_content(store: &Store, content: &AboutContent) -> Result<(), StoreError> {
    let doc = serde_json::to_value(content).map_err(|_| StoreError::NotAnObject)?;
    store.set(CONTENT, ABOUT_DOC, doc)
}

pub fn global_stats(store: &Store) -> GlobalStats {
    store
        .get(STATS, STATS_DOC)
        .and_then(|doc| serde_json::from_value(doc).ok())
        .unwrap_or_default()
}

pub fn save_global_stats(store: &Store, stats: &GlobalStats) -> Result<(), StoreError> {
    let doc = serde_json::to_value(stats).map_err(|_| StoreError::NotAnObject)?;
    store.set(STATS, STATS_DOC, doc)
}

pub fn record_visit(store: &Store) -> Result<i64, StoreError> {
    store.increment(STATS, STATS_DOC, "visitorCount", 1)
}

/// `None` means the config document has never been written (setup needed).
/// An undecodable document counts as setup-complete so a broken config
/// cannot trap the site in the wizard.
pub fn system_config(store: &Store) -> Option<SystemConfig> {
    let doc = store.get(SYSTEM, CONFIG_DOC)?;
    match serde_json::from_value(doc) {
        Ok(config) => Some(config),
        Err(err) => {
            eprintln!("undecodable system config: {err}");
            Some(SystemConfig {
                is_setup_complete: true,
                ..SystemConfig::default()
            })
        }
    }
}

pub fn save_system_config(store: &Store, config: &SystemConfig) -> Result<(), StoreError> {
    let doc = serde_json::to_value(config).map_err(|_| StoreError::NotAnObject)?;
    store.set(SYSTEM, CONFIG_DOC, doc)
}

// ---- public submissions ---------------------------------------------------

pub fn add_aid_request(store: &Store, request: &AidRequest) -> Result<String, StoreError> {
    let doc = serde_json::to_value(request).map_err(|_| StoreError::NotAnObject)?;
    store.add(AID_REQUESTS, doc)
}

pub fn aid_requests(store: &Store) -> Vec<AidRequest> {
    let mut requests: Vec<AidRequest> = store
        .list(AID_REQUESTS)
        .into_iter()
        .filter_map(|(_, doc)| serde_json::from_value(doc).ok())
        .collect();
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    requests
}

pub fn contact_messages(store: &Store) -> Vec<ContactMessage> {
    let mut messages: Vec<ContactMessage> = store
        .list(CONTACT_MESSAGES)
        .into_iter()
        .filter_map(|(_, doc)| serde_json::from_value(doc).ok())
        .collect();
    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    messages
}

pub fn add_contact_message(store: &Store, message: &ContactMessage) -> Result<String, StoreError> {
    let doc = serde_json::to_value(message).map_err(|_| StoreError::NotAnObject)?;
    store.add(CONTACT_MESSAGES, doc)
}

#[cfg(test)]
#[allow(non_snake_case)]
pub(crate) mod tests {
    use super::*;
    use crate::i18n::LocalizedString;
    use crate::types::{ActivityKind, ActivityStatus, ProgramCategory};
    use std::path::PathBuf;

    pub(crate) fn temp_store(test_name: &str) -> (Store, PathBuf) {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("furqan-catalog-{test_name}-{nanos}"));
        let store = Store::open(&root).expect("open store");
        save_global_stats(&store, &GlobalStats::default()).expect("seed stats");
        (store, root)
    }

    pub(crate) fn sample_program() -> Program {
        Program {
            title: LocalizedString::new("حلقات القرآن", "Kur'an Halkaları", "Quran Circles"),
            category: ProgramCategory::Quran,
            description: LocalizedString::new("وصف", "Açıklama", "Description"),
            goal: None,
            image: crate::obfuscate::encode("data:image/png;base64,AAAA"),
            supervisor_id: None,
            created_at: now_timestamp(),
        }
    }

    pub(crate) fn sample_activity(program_id: &str) -> Activity {
        Activity {
            program_id: program_id.to_string(),
            title: LocalizedString::new("درس", "Ders", "Lesson"),
            description: None,
            kind: ActivityKind::Recurring,
            date: None,
            time: "19:00".to_string(),
            recurring_days: Some(vec!["Friday".to_string(), "Saturday".to_string()]),
            location: "Main hall".to_string(),
            supervisor_id: None,
            status: ActivityStatus::Upcoming,
            image: crate::obfuscate::encode("data:image/png;base64,BBBB"),
        }
    }

    #[test]
    fn create_program__should_increment_program_count_by_one() {
        // Given
        let (store, root) = temp_store("create-program");

        // When
        create_program(&store, &sample_program()).expect("create");

        // Then
        assert_eq!(global_stats(&store).program_count, 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn delete_program__should_decrement_program_count_symmetrically() {
        // Given
        let (store, root) = temp_store("delete-program");
        let id = create_program(&store, &sample_program()).expect("create");

        // When
        delete_program(&store, &id).expect("delete");

        // Then
        assert_eq!(global_stats(&store).program_count, 0);
        assert!(program(&store, &id).is_none());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn delete_program__should_refuse_with_exact_blocking_count() {
        // Given
        let (store, root) = temp_store("guarded-delete");
        let id = create_program(&store, &sample_program()).expect("create");
        create_activity(&store, &sample_activity(&id)).expect("activity 1");
        create_activity(&store, &sample_activity(&id)).expect("activity 2");
        create_activity(&store, &sample_activity("other-program")).expect("unrelated");

        // When
        let err = delete_program(&store, &id).expect_err("refused");

        // Then
        match err {
            CatalogError::HasActivities(count) => assert_eq!(count, 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(program(&store, &id).is_some());
        assert_eq!(global_stats(&store).program_count, 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn activity_counters__should_stay_symmetric() {
        // Given
        let (store, root) = temp_store("activity-counters");
        let program_id = create_program(&store, &sample_program()).expect("create");

        // When
        let first = create_activity(&store, &sample_activity(&program_id)).expect("a1");
        let second = create_activity(&store, &sample_activity(&program_id)).expect("a2");
        assert_eq!(global_stats(&store).activity_count, 2);
        delete_activity(&store, &first).expect("delete a1");
        delete_activity(&store, &first).expect("repeat delete is a no-op");
        delete_activity(&store, &second).expect("delete a2");

        // Then
        assert_eq!(global_stats(&store).activity_count, 0);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn create_program__should_reject_incomplete_drafts() {
        // Given
        let (store, root) = temp_store("invalid-program");
        let mut draft = sample_program();
        draft.title.en.clear();
        draft.image.clear();

        // When
        let err = create_program(&store, &draft).expect_err("invalid");

        // Then
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert_eq!(global_stats(&store).program_count, 0);
        assert!(programs(&store).is_empty());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn site_settings__should_default_when_missing() {
        // Given
        let (store, root) = temp_store("settings-default");

        // When
        let settings = site_settings(&store);

        // Then
        assert!(settings.logo.is_empty());
        assert!(settings.channels.is_empty());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn system_config__should_distinguish_missing_from_written() {
        // Given
        let (store, root) = temp_store("system-config");

        // Then
        assert!(system_config(&store).is_none());

        // When
        save_system_config(
            &store,
            &SystemConfig {
                is_setup_complete: true,
                setup_date: now_timestamp(),
                initial_admin_uid: "u1".to_string(),
            },
        )
        .expect("save");

        // Then
        let config = system_config(&store).expect("config");
        assert!(config.is_setup_complete);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn volunteers__should_only_return_volunteer_role() {
        // Given
        let (store, root) = temp_store("volunteers");
        let volunteer = User {
            full_name: "Samir".to_string(),
            email: "samir@example.org".to_string(),
            phone: None,
            role: UserRole::Volunteer,
            avatar: String::new(),
            created_at: now_timestamp(),
        };
        let student = User {
            role: UserRole::Student,
            ..volunteer.clone()
        };
        save_user(&store, "u1", &volunteer).expect("save volunteer");
        save_user(&store, "u2", &student).expect("save student");

        // When
        let found = volunteers(&store);

        // Then
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "u1");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
