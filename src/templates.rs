use crate::i18n::Dict;
use crate::types::GlobalStats;

use askama::Template;
use askama_web::WebTemplate;

/// Everything the page chrome needs: language, dictionary, branding, and
/// the viewer's session. Handlers build one per request.
pub(crate) struct Shell {
    pub(crate) app_name: String,
    pub(crate) lang_code: &'static str,
    pub(crate) dir: &'static str,
    pub(crate) text: &'static Dict,
    /// Decoded logo/favicon values (data URL or plain URL, may be empty).
    pub(crate) logo: String,
    pub(crate) favicon: String,
    pub(crate) header_channels: Vec<ChannelView>,
    pub(crate) footer_channels: Vec<ChannelView>,
    pub(crate) address: String,
    pub(crate) signed_in: bool,
    pub(crate) is_admin: bool,
}

pub(crate) struct ChannelView {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) icon: String,
}

pub(crate) struct ProgramView {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) category: String,
    pub(crate) description: String,
    pub(crate) goal: String,
    pub(crate) image: String,
}

pub(crate) struct ActivityView {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) schedule: String,
    pub(crate) location: String,
    pub(crate) status: String,
    pub(crate) image: String,
    pub(crate) program_id: String,
    pub(crate) program_title: String,
    pub(crate) has_program: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub(crate) struct HomeTemplate {
    pub(crate) shell: Shell,
    pub(crate) stats: GlobalStats,
    pub(crate) programs: Vec<ProgramView>,
    pub(crate) contact_sent: bool,
    pub(crate) contact_error: String,
}

pub(crate) struct AboutBlock {
    pub(crate) icon: String,
    pub(crate) year: String,
    pub(crate) title: String,
    pub(crate) desc: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub(crate) struct AboutTemplate {
    pub(crate) shell: Shell,
    pub(crate) hero_desc: String,
    pub(crate) vision: String,
    pub(crate) mission: String,
    pub(crate) quote: String,
    pub(crate) values: Vec<AboutBlock>,
    pub(crate) journey_title: String,
    pub(crate) journey: Vec<AboutBlock>,
    pub(crate) gallery: Vec<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "programs.html")]
pub(crate) struct ProgramsTemplate {
    pub(crate) shell: Shell,
    pub(crate) programs: Vec<ProgramView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "program_detail.html")]
pub(crate) struct ProgramDetailTemplate {
    pub(crate) shell: Shell,
    pub(crate) program: ProgramView,
    pub(crate) activities: Vec<ActivityView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "activities.html")]
pub(crate) struct ActivitiesTemplate {
    pub(crate) shell: Shell,
    pub(crate) activities: Vec<ActivityView>,
}

pub(crate) struct UnitView {
    pub(crate) id: u32,
    pub(crate) title_tr: &'static str,
    pub(crate) title_ar: &'static str,
    pub(crate) description: &'static str,
    pub(crate) vocabulary_count: usize,
    pub(crate) grammar_count: usize,
}

pub(crate) struct PairView {
    pub(crate) tr: &'static str,
    pub(crate) ar: &'static str,
}

pub(crate) struct GrammarView {
    pub(crate) title: &'static str,
    pub(crate) explanation: &'static str,
    pub(crate) formula: String,
    pub(crate) examples: Vec<PairView>,
}

pub(crate) struct QuizView {
    pub(crate) question: &'static str,
    pub(crate) options: Vec<&'static str>,
    pub(crate) answer: &'static str,
    pub(crate) explanation: &'static str,
}

pub(crate) struct LessonView {
    pub(crate) title: &'static str,
    pub(crate) kind_label: &'static str,
    pub(crate) vocabulary: Vec<PairView>,
    pub(crate) grammar: Option<GrammarView>,
    pub(crate) game: Vec<PairView>,
    pub(crate) quiz: Vec<QuizView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "learning.html")]
pub(crate) struct LearningTemplate {
    pub(crate) shell: Shell,
    pub(crate) units: Vec<UnitView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "learning_unit.html")]
pub(crate) struct LearningUnitTemplate {
    pub(crate) shell: Shell,
    pub(crate) title_tr: &'static str,
    pub(crate) title_ar: &'static str,
    pub(crate) lessons: Vec<LessonView>,
}

pub(crate) struct CategoryOption {
    pub(crate) value: String,
    pub(crate) label: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "aid_request.html")]
pub(crate) struct AidRequestTemplate {
    pub(crate) shell: Shell,
    pub(crate) categories: Vec<CategoryOption>,
    pub(crate) error: String,
    pub(crate) submitted: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub(crate) struct LoginTemplate {
    pub(crate) shell: Shell,
    pub(crate) error: String,
    pub(crate) next: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub(crate) struct RegisterTemplate {
    pub(crate) shell: Shell,
    pub(crate) error: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "setup.html")]
pub(crate) struct SetupTemplate {
    pub(crate) shell: Shell,
    pub(crate) error: String,
}

pub(crate) struct InboxRequestView {
    pub(crate) full_name: String,
    pub(crate) aid_type: String,
    pub(crate) phone: String,
    pub(crate) description: String,
    pub(crate) status: String,
    pub(crate) created_at: String,
}

pub(crate) struct InboxMessageView {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) subject: String,
    pub(crate) message: String,
    pub(crate) timestamp: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub(crate) struct DashboardTemplate {
    pub(crate) shell: Shell,
    pub(crate) user_name: String,
    pub(crate) role: String,
    pub(crate) stats: GlobalStats,
    pub(crate) requests: Vec<InboxRequestView>,
    pub(crate) messages: Vec<InboxMessageView>,
}

pub(crate) struct AdminProgramRow {
    pub(crate) id: String,
    pub(crate) title_ar: String,
    pub(crate) title_tr: String,
    pub(crate) title_en: String,
    pub(crate) description_ar: String,
    pub(crate) description_tr: String,
    pub(crate) description_en: String,
    pub(crate) goal_ar: String,
    pub(crate) goal_tr: String,
    pub(crate) goal_en: String,
    pub(crate) category: String,
    pub(crate) image: String,
    pub(crate) supervisor_id: String,
    pub(crate) activity_count: usize,
}

pub(crate) struct AdminActivityRow {
    pub(crate) id: String,
    pub(crate) title_ar: String,
    pub(crate) title_tr: String,
    pub(crate) title_en: String,
    pub(crate) program_id: String,
    pub(crate) program_title: String,
    pub(crate) kind: String,
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) days: Vec<String>,
    pub(crate) location: String,
    pub(crate) status: String,
    pub(crate) image: String,
}

impl AdminActivityRow {
    pub(crate) fn has_day(&self, id: &str) -> bool {
        self.days.iter().any(|day| day == id)
    }
}

pub(crate) struct WeekdayChoice {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}

pub(crate) struct SupervisorOption {
    pub(crate) uid: String,
    pub(crate) name: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard_programs.html")]
pub(crate) struct DashboardProgramsTemplate {
    pub(crate) shell: Shell,
    pub(crate) notice: String,
    pub(crate) error: String,
    pub(crate) programs: Vec<AdminProgramRow>,
    pub(crate) activities: Vec<AdminActivityRow>,
    pub(crate) categories: Vec<CategoryOption>,
    pub(crate) weekdays: Vec<WeekdayChoice>,
    pub(crate) supervisors: Vec<SupervisorOption>,
}

pub(crate) struct ChannelRow {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) icon: String,
    pub(crate) kind: String,
    pub(crate) show_in_header: bool,
    pub(crate) show_in_footer: bool,
}

pub(crate) struct AidCategoryRow {
    pub(crate) id: String,
    pub(crate) ar: String,
    pub(crate) tr: String,
    pub(crate) en: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard_settings.html")]
pub(crate) struct DashboardSettingsTemplate {
    pub(crate) shell: Shell,
    pub(crate) notice: String,
    pub(crate) error: String,
    pub(crate) address_ar: String,
    pub(crate) address_tr: String,
    pub(crate) address_en: String,
    pub(crate) channels: Vec<ChannelRow>,
    pub(crate) aid_categories: Vec<AidCategoryRow>,
}

pub(crate) struct AboutEditBlock {
    pub(crate) index: usize,
    pub(crate) icon: String,
    pub(crate) year: String,
    pub(crate) title_ar: String,
    pub(crate) title_tr: String,
    pub(crate) title_en: String,
    pub(crate) desc_ar: String,
    pub(crate) desc_tr: String,
    pub(crate) desc_en: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard_about.html")]
pub(crate) struct DashboardAboutTemplate {
    pub(crate) shell: Shell,
    pub(crate) notice: String,
    pub(crate) error: String,
    pub(crate) hero_desc_ar: String,
    pub(crate) hero_desc_tr: String,
    pub(crate) hero_desc_en: String,
    pub(crate) vision_ar: String,
    pub(crate) vision_tr: String,
    pub(crate) vision_en: String,
    pub(crate) mission_ar: String,
    pub(crate) mission_tr: String,
    pub(crate) mission_en: String,
    pub(crate) quote_ar: String,
    pub(crate) quote_tr: String,
    pub(crate) quote_en: String,
    pub(crate) values: Vec<AboutEditBlock>,
    pub(crate) journey: Vec<AboutEditBlock>,
    pub(crate) gallery: Vec<String>,
}
