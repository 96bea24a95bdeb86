//! First-run wizard.
//!
//! Until `system/config` records a completed setup, the whole site funnels
//! into the wizard. Finalizing runs five writes back-to-back: admin
//! identity, super-admin profile, initial settings, initial stats, and the
//! completion marker. Earlier writes are not rolled back when a later one
//! fails; re-running the wizard converges because the identity step reuses
//! an existing account.

use crate::auth::{self, AuthError};
use crate::catalog;
use crate::store::{Store, StoreError};
use crate::types::{GlobalStats, SiteSettings, SystemConfig, User, UserRole};
use crate::uploads::{self, UploadError};

#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub logo: String,
    pub favicon: String,
}

#[derive(Debug)]
pub enum SetupError {
    MissingField(&'static str),
    WeakPassword,
    PasswordMismatch,
    /// The admin email already has an account and the given password does
    /// not open it.
    WrongPassword,
    Upload(&'static str, UploadError),
    Auth(AuthError),
    Store(StoreError),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingField(field) => write!(f, "missing required field: {field}"),
            SetupError::WeakPassword => f.write_str("password must be at least 6 characters"),
            SetupError::PasswordMismatch => f.write_str("passwords do not match"),
            SetupError::WrongPassword => {
                f.write_str("this email already has an account and the password is wrong")
            }
            SetupError::Upload(field, err) => write!(f, "{field}: {err}"),
            SetupError::Auth(err) => err.fmt(f),
            SetupError::Store(err) => err.fmt(f),
        }
    }
}

impl From<StoreError> for SetupError {
    fn from(err: StoreError) -> Self {
        SetupError::Store(err)
    }
}

pub fn setup_needed(store: &Store) -> bool {
    match catalog::system_config(store) {
        None => true,
        Some(config) => !config.is_setup_complete,
    }
}

/// Validate the form and perform the five setup writes. Returns the admin
/// uid on success.
pub fn run_setup(store: &Store, form: &SetupForm) -> Result<String, SetupError> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    if full_name.is_empty() {
        return Err(SetupError::MissingField("fullName"));
    }
    if email.is_empty() {
        return Err(SetupError::MissingField("email"));
    }
    if form.password.len() < 6 {
        return Err(SetupError::WeakPassword);
    }
    if form.password != form.confirm_password {
        return Err(SetupError::PasswordMismatch);
    }
    let logo = uploads::accept_image(&form.logo)
        .map_err(|err| SetupError::Upload("logo", err))?;
    let favicon = uploads::accept_image(&form.favicon)
        .map_err(|err| SetupError::Upload("favicon", err))?;

    let uid = admin_identity(store, email, &form.password)?;
    let now = catalog::now_timestamp();

    catalog::save_user(
        store,
        &uid,
        &User {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: None,
            role: UserRole::SuperAdmin,
            avatar: String::new(),
            created_at: now.clone(),
        },
    )?;

    catalog::save_site_settings(
        store,
        &SiteSettings {
            logo,
            favicon,
            ..SiteSettings::default()
        },
    )?;

    catalog::save_global_stats(
        store,
        &GlobalStats {
            member_count: 1,
            last_updated: now.clone(),
            ..GlobalStats::default()
        },
    )?;

    catalog::save_system_config(
        store,
        &SystemConfig {
            is_setup_complete: true,
            setup_date: now,
            initial_admin_uid: uid.clone(),
        },
    )?;

    Ok(uid)
}

fn admin_identity(store: &Store, email: &str, password: &str) -> Result<String, SetupError> {
    match auth::register_identity(store, email, password) {
        Ok(uid) => Ok(uid),
        Err(AuthError::EmailInUse) => {
            auth::sign_in(store, email, password).map_err(|err| match err {
                AuthError::InvalidCredential => SetupError::WrongPassword,
                other => SetupError::Auth(other),
            })
        }
        Err(other) => Err(SetupError::Auth(other)),
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    fn temp_store(test_name: &str) -> (Store, std::path::PathBuf) {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("furqan-setup-{test_name}-{nanos}"));
        let store = Store::open(&root).expect("open store");
        (store, root)
    }

    fn admin_form() -> SetupForm {
        SetupForm {
            full_name: "Amina".to_string(),
            email: "admin@example.org".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            logo: String::new(),
            favicon: String::new(),
        }
    }

    #[test]
    fn run_setup__should_initialize_the_site() {
        // Given
        let (store, root) = temp_store("initialize");
        assert!(setup_needed(&store));

        // When
        let uid = run_setup(&store, &admin_form()).expect("setup");

        // Then
        let admin = catalog::user(&store, &uid).expect("read").expect("admin");
        assert_eq!(admin.role, UserRole::SuperAdmin);
        assert_eq!(admin.full_name, "Amina");

        let stats = catalog::global_stats(&store);
        assert_eq!(stats.member_count, 1);
        assert_eq!(stats.visitor_count, 0);
        assert_eq!(stats.program_count, 0);
        assert_eq!(stats.activity_count, 0);

        let settings = catalog::site_settings(&store);
        assert!(settings.logo.is_empty());
        assert!(settings.channels.is_empty());

        let config = catalog::system_config(&store).expect("config");
        assert!(config.is_setup_complete);
        assert_eq!(config.initial_admin_uid, uid);
        assert!(!setup_needed(&store));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn run_setup__should_validate_before_writing_anything() {
        // Given
        let (store, root) = temp_store("validation");

        let mut short = admin_form();
        short.password = "12345".to_string();
        short.confirm_password = "12345".to_string();

        let mut mismatch = admin_form();
        mismatch.confirm_password = "different".to_string();

        let mut nameless = admin_form();
        nameless.full_name = "  ".to_string();

        // When / Then
        assert!(matches!(
            run_setup(&store, &short),
            Err(SetupError::WeakPassword)
        ));
        assert!(matches!(
            run_setup(&store, &mismatch),
            Err(SetupError::PasswordMismatch)
        ));
        assert!(matches!(
            run_setup(&store, &nameless),
            Err(SetupError::MissingField("fullName"))
        ));
        assert!(setup_needed(&store));
        assert!(catalog::system_config(&store).is_none());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn run_setup__should_reuse_an_existing_identity() {
        // Given
        let (store, root) = temp_store("reuse");
        let existing = auth::register_identity(&store, "admin@example.org", "secret1")
            .expect("existing account");

        // When
        let uid = run_setup(&store, &admin_form()).expect("setup");

        // Then
        assert_eq!(uid, existing);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn run_setup__should_surface_wrong_password_for_taken_email() {
        // Given
        let (store, root) = temp_store("wrong-password");
        auth::register_identity(&store, "admin@example.org", "other-secret")
            .expect("existing account");

        // When
        let err = run_setup(&store, &admin_form()).expect_err("refused");

        // Then
        assert!(matches!(err, SetupError::WrongPassword));
        assert!(setup_needed(&store));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[test]
    fn run_setup__should_store_branding_obfuscated() {
        // Given
        let (store, root) = temp_store("branding");
        let mut form = admin_form();
        form.logo = format!("data:image/png;base64,{}", base64::encode("logo-bytes"));

        // When
        run_setup(&store, &form).expect("setup");

        // Then
        let settings = catalog::site_settings(&store);
        assert!(crate::obfuscate::is_obfuscated(&settings.logo));
        assert!(settings.favicon.is_empty());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
