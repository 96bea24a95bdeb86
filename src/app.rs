use crate::assets;
use crate::auth as auth_service;
use crate::config;
use crate::state;
use crate::store::Store;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

mod admin;
mod auth;
mod pages;
mod session;
mod setup;
mod submissions;

pub fn app(mut config: config::AppConfig) -> Router {
    if config.auth.is_none() {
        let key = auth_service::generate_auth_key()
            .unwrap_or_else(|err| panic!("failed to generate a session key: {err}"));
        eprintln!("no auth key configured; using an ephemeral session key, sessions reset on restart");
        config.auth = Some(config::AuthConfig::ephemeral(key));
    }
    let auth = auth_service::AuthState::from_config(&config)
        .unwrap_or_else(|err| panic!("invalid auth configuration: {err}"));
    let store = Store::open(&config.root)
        .unwrap_or_else(|err| panic!("failed to open document store: {err}"));
    let state = state::AppState {
        config,
        auth,
        store,
    };
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/programs", get(pages::programs))
        .route("/programs/{id}", get(pages::program_detail))
        .route("/activities", get(pages::activities))
        .route("/language-learning", get(pages::learning))
        .route("/language-learning/{id}", get(pages::learning_unit))
        .route("/lang/{code}", get(pages::switch_language))
        .route("/contact", post(submissions::contact_submit))
        .route(
            "/aid-request",
            get(submissions::aid_request_form).post(submissions::aid_request_submit),
        )
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route(
            "/register",
            get(auth::register_form).post(auth::register_submit),
        )
        .route("/logout", post(auth::logout))
        .route("/setup", get(setup::setup_form).post(setup::setup_submit))
        .route("/dashboard", get(admin::dashboard))
        .route("/dashboard/programs", get(admin::programs_tab))
        .route("/dashboard/settings", get(admin::settings_tab))
        .route("/dashboard/about", get(admin::about_tab))
        .route("/admin/programs", post(admin::program_create))
        .route("/admin/programs/{id}", post(admin::program_update))
        .route("/admin/programs/{id}/delete", post(admin::program_delete))
        .route("/admin/activities", post(admin::activity_create))
        .route("/admin/activities/{id}", post(admin::activity_update))
        .route("/admin/activities/{id}/delete", post(admin::activity_delete))
        .route("/admin/settings", post(admin::settings_save))
        .route("/admin/settings/channels", post(admin::channel_add))
        .route(
            "/admin/settings/channels/{id}/delete",
            post(admin::channel_delete),
        )
        .route(
            "/admin/settings/aid-categories",
            post(admin::aid_category_add),
        )
        .route(
            "/admin/settings/aid-categories/{id}/delete",
            post(admin::aid_category_delete),
        )
        .route("/admin/about", post(admin::about_save))
        .route("/admin/about/values", post(admin::about_value_add))
        .route(
            "/admin/about/values/{index}/delete",
            post(admin::about_value_delete),
        )
        .route("/admin/about/journey", post(admin::journey_add))
        .route(
            "/admin/about/journey/{index}/delete",
            post(admin::journey_delete),
        )
        .route("/events/stats", get(pages::stats_events))
        .route("/static/style.css", get(assets::stylesheet))
        .route("/static/app.js", get(assets::app_script))
        .route("/health", get(pages::health))
        .fallback(pages::not_found_redirect)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state,
            session::session_middleware,
        ))
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::setup::{SetupForm, run_setup};
    use crate::types::{User, UserRole};

    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    use std::path::PathBuf;

    fn temp_root(test_name: &str) -> PathBuf {
        let mut root = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        root.push(format!("furqan-app-{test_name}-{nanos}"));
        root
    }

    fn auth_key() -> String {
        base64::encode_config([7u8; 32], base64::URL_SAFE_NO_PAD)
    }

    fn app_config(root: &PathBuf) -> config::AppConfig {
        config::AppConfig {
            root: root.clone(),
            app_name: "Al-Furqan".to_string(),
            auth: Some(config::AuthConfig {
                key: auth_key(),
                token_ttl: time::Duration::hours(1),
                cookie_name: "furqan_auth".to_string(),
                cookie_secure: false,
            }),
        }
    }

    /// Complete the wizard directly against the store so most tests start
    /// from a configured site. Returns the admin uid.
    fn seed_site(root: &PathBuf) -> String {
        let store = Store::open(root).expect("open store");
        run_setup(
            &store,
            &SetupForm {
                full_name: "Amina".to_string(),
                email: "admin@example.org".to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
                logo: String::new(),
                favicon: String::new(),
            },
        )
        .expect("seed setup")
    }

    fn admin_cookie(root: &PathBuf, uid: &str) -> String {
        let auth = auth_service::AuthState::from_config(&app_config(root))
            .expect("auth state")
            .expect("auth enabled");
        format!("furqan_auth={}", auth.issue_token(uid).expect("token"))
    }

    async fn get(router: &Router, uri: &str, cookies: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(cookies) = cookies {
            request = request.header(COOKIE, cookies);
        }
        router
            .clone()
            .oneshot(request.body(Body::empty()).expect("request"))
            .await
            .expect("response")
    }

    async fn post_form(router: &Router, uri: &str, body: &str, cookies: Option<&str>) -> Response {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookies) = cookies {
            request = request.header(COOKIE, cookies);
        }
        router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).expect("request"))
            .await
            .expect("response")
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn app__should_funnel_everything_into_setup_until_complete() {
        // Given
        let root = temp_root("setup-gate");
        let router = app(app_config(&root));

        // When / Then
        for uri in ["/", "/programs", "/dashboard", "/aid-request"] {
            let response = get(&router, uri, None).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), "/setup");
        }

        let health = get(&router, "/health", None).await;
        assert_eq!(health.status(), StatusCode::OK);
        let wizard = get(&router, "/setup", None).await;
        assert_eq!(wizard.status(), StatusCode::OK);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn setup_submit__should_initialize_and_sign_the_admin_in() {
        // Given
        let root = temp_root("setup-submit");
        let router = app(app_config(&root));

        // When
        let response = post_form(
            &router,
            "/setup",
            "fullName=Amina&email=admin%40example.org&password=secret1&confirmPassword=secret1&logo=&favicon=",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .expect("session cookie");
        assert!(cookie.starts_with("furqan_auth="));

        let store = Store::open(&root).expect("reopen");
        let config = catalog::system_config(&store).expect("config");
        assert!(config.is_setup_complete);
        assert_eq!(catalog::global_stats(&store).member_count, 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn app__should_issue_sessions_with_an_ephemeral_key_when_auth_is_unset() {
        // Given
        let root = temp_root("ephemeral-key");
        let config = config::AppConfig {
            root: root.clone(),
            app_name: "Al-Furqan".to_string(),
            auth: None,
        };
        let router = app(config);

        // When
        let response = post_form(
            &router,
            "/setup",
            "fullName=Amina&email=admin%40example.org&password=secret1&confirmPassword=secret1&logo=&favicon=",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .expect("session cookie");
        assert!(cookie.starts_with("furqan_auth="));

        let login = post_form(
            &router,
            "/login",
            "email=admin%40example.org&password=secret1",
            None,
        )
        .await;
        assert_eq!(login.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&login), "/dashboard");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn setup_form__should_redirect_away_once_complete() {
        // Given
        let root = temp_root("setup-done");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = get(&router, "/setup", None).await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn login_submit__should_set_the_auth_cookie() {
        // Given
        let root = temp_root("login");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = post_form(
            &router,
            "/login",
            "email=admin%40example.org&password=secret1&next=%2Fdashboard",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .expect("cookie");
        assert!(cookie.starts_with("furqan_auth="));
        assert!(cookie.contains("HttpOnly"));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn login_submit__should_reject_bad_credentials_with_one_message() {
        // Given
        let root = temp_root("login-bad");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let unknown = post_form(
            &router,
            "/login",
            "email=nobody%40example.org&password=secret1",
            None,
        )
        .await;
        let wrong = post_form(
            &router,
            "/login",
            "email=admin%40example.org&password=wrong-pass",
            None,
        )
        .await;

        // Then
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn register_submit__should_create_a_profile_without_elevated_role() {
        // Given
        let root = temp_root("register");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = post_form(
            &router,
            "/register",
            "fullName=Samir&email=samir%40example.org&phone=&password=secret1\
             &confirmPassword=secret1&role=Volunteer",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let store = Store::open(&root).expect("reopen");
        let volunteers = catalog::volunteers(&store);
        assert_eq!(volunteers.len(), 1);
        assert_eq!(volunteers[0].1.full_name, "Samir");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn admin_mutations__should_be_forbidden_for_non_admins() {
        // Given
        let root = temp_root("forbidden");
        seed_site(&root);
        let store = Store::open(&root).expect("store");
        let uid = crate::auth::register_identity(&store, "parent@example.org", "secret1")
            .expect("identity");
        catalog::save_user(
            &store,
            &uid,
            &User {
                full_name: "Parent".to_string(),
                email: "parent@example.org".to_string(),
                phone: None,
                role: UserRole::Parent,
                avatar: String::new(),
                created_at: catalog::now_timestamp(),
            },
        )
        .expect("profile");
        let router = app(app_config(&root));
        let cookie = admin_cookie(&root, &uid);

        // When
        let anonymous = post_form(&router, "/admin/programs", "titleAr=x", None).await;
        let parent = post_form(&router, "/admin/programs", "titleAr=x", Some(&cookie)).await;
        let tab = get(&router, "/dashboard/programs", Some(&cookie)).await;

        // Then
        assert_eq!(anonymous.status(), StatusCode::FORBIDDEN);
        assert_eq!(parent.status(), StatusCode::FORBIDDEN);
        assert_eq!(tab.status(), StatusCode::FORBIDDEN);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn program_create__should_save_and_count_for_admins() {
        // Given
        let root = temp_root("program-create");
        let admin = seed_site(&root);
        let router = app(app_config(&root));
        let cookie = admin_cookie(&root, &admin);

        // When
        let response = post_form(
            &router,
            "/admin/programs",
            "titleAr=%D8%AD%D9%84%D9%82%D8%A7%D8%AA&titleTr=Halkalar&titleEn=Circles\
             &descriptionAr=&descriptionTr=&descriptionEn=&goalAr=&goalTr=&goalEn=\
             &category=Quran&image=data%3Aimage%2Fpng%3Bbase64%2CQUJD&supervisorId=",
            Some(&cookie),
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard/programs?notice=saved");

        let store = Store::open(&root).expect("reopen");
        let programs = catalog::programs(&store);
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].program.title.en, "Circles");
        assert!(crate::obfuscate::is_obfuscated(&programs[0].program.image));
        assert_eq!(catalog::global_stats(&store).program_count, 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn program_delete__should_report_the_blocking_activity_count() {
        // Given
        let root = temp_root("guarded-delete");
        let admin = seed_site(&root);
        {
            let store = Store::open(&root).expect("store");
            let id = catalog::create_program(&store, &catalog::tests::sample_program())
                .expect("program");
            catalog::create_activity(&store, &catalog::tests::sample_activity(&id))
                .expect("activity");
        }
        let router = app(app_config(&root));
        let cookie = admin_cookie(&root, &admin);
        let id = catalog::programs(&Store::open(&root).expect("store"))[0].id.clone();

        // When
        let response = post_form(
            &router,
            &format!("/admin/programs/{id}/delete"),
            "",
            Some(&cookie),
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard/programs?error=blocked-1");
        let store = Store::open(&root).expect("reopen");
        assert_eq!(catalog::programs(&store).len(), 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn aid_request_submit__should_require_every_field() {
        // Given
        let root = temp_root("aid-invalid");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = post_form(
            &router,
            "/aid-request",
            "fullName=Ahmed&idNumber=123&phone=555&aidType=&description=help",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let store = Store::open(&root).expect("reopen");
        assert!(catalog::aid_requests(&store).is_empty());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn aid_request_submit__should_append_with_pending_status() {
        // Given
        let root = temp_root("aid-ok");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = post_form(
            &router,
            "/aid-request",
            "fullName=Ahmed&idNumber=123&phone=555&aidType=Food&description=help",
            None,
        )
        .await;

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let store = Store::open(&root).expect("reopen");
        let requests = catalog::aid_requests(&store);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, "Pending");
        assert!(!requests[0].created_at.is_empty());

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn activities__should_render_orphans() {
        // Given
        let root = temp_root("orphan");
        seed_site(&root);
        {
            let store = Store::open(&root).expect("store");
            catalog::create_activity(&store, &catalog::tests::sample_activity("missing-program"))
                .expect("activity");
        }
        let router = app(app_config(&root));

        // When
        let response = get(&router, "/activities", None).await;

        // Then
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("درس"));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn switch_language__should_flip_direction_on_the_next_page() {
        // Given
        let root = temp_root("lang");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let switch = get(&router, "/lang/tr", None).await;
        let cookie = switch
            .headers()
            .get(SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .expect("lang cookie");
        assert!(cookie.starts_with("furqan_lang=tr"));

        let arabic = get(&router, "/", None).await;
        let turkish = get(&router, "/", Some("furqan_lang=tr")).await;

        // Then
        assert!(body_text(arabic).await.contains("dir=\"rtl\""));
        assert!(body_text(turkish).await.contains("dir=\"ltr\""));

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn home__should_count_each_browser_session_once() {
        // Given
        let root = temp_root("visits");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let first = get(&router, "/", None).await;
        assert!(first.headers().get(SET_COOKIE).is_some());
        let _second = get(&router, "/", Some("furqan_session=1")).await;

        // Then
        let store = Store::open(&root).expect("reopen");
        assert_eq!(catalog::global_stats(&store).visitor_count, 1);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn dashboard__should_send_visitors_to_login() {
        // Given
        let root = temp_root("dashboard-guest");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = get(&router, "/dashboard", None).await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn fallback__should_redirect_unknown_paths_home() {
        // Given
        let root = temp_root("fallback");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let response = get(&router, "/no-such-page", None).await;

        // Then
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        std::fs::remove_dir_all(&root).expect("cleanup");
    }

    #[tokio::test]
    async fn static_assets__should_be_served_with_cache_headers() {
        // Given
        let root = temp_root("assets");
        seed_site(&root);
        let router = app(app_config(&root));

        // When
        let css = get(&router, "/static/style.css", None).await;
        let js = get(&router, "/static/app.js", None).await;

        // Then
        assert_eq!(css.status(), StatusCode::OK);
        assert_eq!(
            css.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("text/css")
        );
        assert_eq!(js.status(), StatusCode::OK);

        std::fs::remove_dir_all(&root).expect("cleanup");
    }
}
