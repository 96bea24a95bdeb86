//! Record shapes for every collection. Field names serialize in camelCase
//! because the store is schemaless and these names are the de facto wire
//! format shared with existing data files.

use crate::i18n::{Lang, LocalizedString};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Volunteer")]
    Volunteer,
    #[serde(rename = "Permanent Donor")]
    PermanentDonor,
    #[serde(rename = "Parent")]
    Parent,
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Guest")]
    Guest,
}

impl UserRole {
    pub fn wire_name(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
            UserRole::Volunteer => "Volunteer",
            UserRole::PermanentDonor => "Permanent Donor",
            UserRole::Parent => "Parent",
            UserRole::Student => "Student",
            UserRole::Guest => "Guest",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub avatar: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramCategory {
    Quran,
    Mosque,
    Language,
    Competition,
    General,
}

impl ProgramCategory {
    pub const ALL: [ProgramCategory; 5] = [
        ProgramCategory::Quran,
        ProgramCategory::Mosque,
        ProgramCategory::Language,
        ProgramCategory::Competition,
        ProgramCategory::General,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            ProgramCategory::Quran => "Quran",
            ProgramCategory::Mosque => "Mosque",
            ProgramCategory::Language => "Language",
            ProgramCategory::Competition => "Competition",
            ProgramCategory::General => "General",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_name() == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub title: LocalizedString,
    pub category: ProgramCategory,
    #[serde(default)]
    pub description: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<LocalizedString>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "One-time")]
    OneTime,
    #[serde(rename = "Recurring")]
    Recurring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Upcoming,
    Ongoing,
    Completed,
    Finished,
}

impl ActivityStatus {
    pub fn wire_name(self) -> &'static str {
        match self {
            ActivityStatus::Upcoming => "Upcoming",
            ActivityStatus::Ongoing => "Ongoing",
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Finished => "Finished",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub program_id: String,
    pub title: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_days: Option<Vec<String>>,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    pub status: ActivityStatus,
    #[serde(default)]
    pub image: String,
}

pub struct WeekDay {
    pub id: &'static str,
    pub ar: &'static str,
    pub tr: &'static str,
    pub en: &'static str,
}

impl WeekDay {
    pub fn label(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ar => self.ar,
            Lang::Tr => self.tr,
            Lang::En => self.en,
        }
    }
}

pub const WEEK_DAYS: [WeekDay; 7] = [
    WeekDay { id: "Monday", ar: "الإثنين", tr: "Pazartesi", en: "Monday" },
    WeekDay { id: "Tuesday", ar: "الثلاثاء", tr: "Salı", en: "Tuesday" },
    WeekDay { id: "Wednesday", ar: "الأربعاء", tr: "Çarşamba", en: "Wednesday" },
    WeekDay { id: "Thursday", ar: "الخميس", tr: "Perşembe", en: "Thursday" },
    WeekDay { id: "Friday", ar: "الجمعة", tr: "Cuma", en: "Friday" },
    WeekDay { id: "Saturday", ar: "السبت", tr: "Cumartesi", en: "Saturday" },
    WeekDay { id: "Sunday", ar: "الأحد", tr: "Pazar", en: "Sunday" },
];

pub fn is_weekday_tag(tag: &str) -> bool {
    WEEK_DAYS.iter().any(|day| day.id == tag)
}

/// Required fields missing from a program or activity draft, by the field
/// keys the admin forms highlight.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing required fields: {}", self.fields.join(", "))
    }
}

impl Program {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.title.ar.trim().is_empty() {
            fields.push("title_ar");
        }
        if self.title.tr.trim().is_empty() {
            fields.push("title_tr");
        }
        if self.title.en.trim().is_empty() {
            fields.push("title_en");
        }
        if self.image.is_empty() {
            fields.push("image");
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

impl Activity {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        if self.title.ar.trim().is_empty() {
            fields.push("title_ar");
        }
        if self.title.tr.trim().is_empty() {
            fields.push("title_tr");
        }
        if self.title.en.trim().is_empty() {
            fields.push("title_en");
        }
        if self.image.is_empty() {
            fields.push("image");
        }
        if self.time.trim().is_empty() {
            fields.push("time");
        }
        match self.kind {
            ActivityKind::OneTime => {
                if self.date.as_deref().unwrap_or("").trim().is_empty() {
                    fields.push("date");
                }
            }
            ActivityKind::Recurring => {
                let days = self.recurring_days.as_deref().unwrap_or(&[]);
                if days.is_empty() || days.iter().any(|day| !is_weekday_tag(day)) {
                    fields.push("days");
                }
            }
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Social,
    Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "default_channel_icon")]
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub show_in_header: bool,
    #[serde(default)]
    pub show_in_footer: bool,
}

fn default_channel_icon() -> String {
    "Link".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AidCategory {
    pub id: String,
    #[serde(default)]
    pub ar: String,
    #[serde(default)]
    pub tr: String,
    #[serde(default)]
    pub en: String,
}

impl AidCategory {
    pub fn label(&self, lang: Lang) -> &str {
        let branch = match lang {
            Lang::Ar => &self.ar,
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
        };
        if branch.is_empty() { &self.ar } else { branch }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub address: LocalizedString,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub aid_categories: Vec<AidCategory>,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub favicon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutValue {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default)]
    pub desc: LocalizedString,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: LocalizedString,
    #[serde(default)]
    pub desc: LocalizedString,
}

pub const GALLERY_SLOTS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default)]
    pub hero_desc: LocalizedString,
    #[serde(default)]
    pub vision: LocalizedString,
    #[serde(default)]
    pub mission: LocalizedString,
    #[serde(default)]
    pub quote: LocalizedString,
    #[serde(default)]
    pub values: Vec<AboutValue>,
    #[serde(default)]
    pub journey_title: LocalizedString,
    #[serde(default)]
    pub journey_steps: Vec<JourneyStep>,
    #[serde(default = "default_gallery")]
    pub gallery: Vec<String>,
}

fn default_gallery() -> Vec<String> {
    vec![String::new(); GALLERY_SLOTS]
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            hero_desc: LocalizedString::default(),
            vision: LocalizedString::default(),
            mission: LocalizedString::default(),
            quote: LocalizedString::default(),
            values: Vec::new(),
            journey_title: LocalizedString::default(),
            journey_steps: Vec::new(),
            gallery: default_gallery(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    #[serde(default)]
    pub visitor_count: i64,
    #[serde(default)]
    pub member_count: i64,
    #[serde(default)]
    pub program_count: i64,
    #[serde(default)]
    pub activity_count: i64,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    #[serde(default)]
    pub is_setup_complete: bool,
    #[serde(default)]
    pub setup_date: String,
    #[serde(default)]
    pub initial_admin_uid: String,
}

pub const AID_STATUS_PENDING: &str = "Pending";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AidRequest {
    pub full_name: String,
    pub id_number: String,
    pub aid_type: String,
    pub description: String,
    pub phone: String,
    pub status: String,
    pub created_at: String,
    pub lang: Lang,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}
