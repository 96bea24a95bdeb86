use serde::{Deserialize, Serialize};

/// Languages the portal renders in. Arabic is the canonical branch: any
/// missing translation falls back to it at render time, never on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    #[serde(rename = "ar")]
    Ar,
    #[serde(rename = "tr")]
    Tr,
    #[serde(rename = "en")]
    En,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Ar, Lang::Tr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::Tr | Lang::En => "ltr",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ar" => Some(Lang::Ar),
            "tr" => Some(Lang::Tr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Three-way text map used by every user-facing entity field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedString {
    #[serde(default)]
    pub ar: String,
    #[serde(default)]
    pub tr: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedString {
    pub fn new(ar: &str, tr: &str, en: &str) -> Self {
        Self {
            ar: ar.to_string(),
            tr: tr.to_string(),
            en: en.to_string(),
        }
    }

    /// Current-language branch, falling back to `ar` when it is empty.
    pub fn get(&self, lang: Lang) -> &str {
        let branch = match lang {
            Lang::Ar => &self.ar,
            Lang::Tr => &self.tr,
            Lang::En => &self.en,
        };
        if branch.is_empty() { &self.ar } else { branch }
    }

    pub fn is_complete(&self) -> bool {
        !self.ar.trim().is_empty() && !self.tr.trim().is_empty() && !self.en.trim().is_empty()
    }
}

pub struct Dict {
    pub common: CommonText,
    pub nav: NavText,
    pub home: HomeText,
    pub auth: AuthText,
    pub aid: AidText,
    pub about: AboutText,
    pub setup: SetupText,
    pub admin: AdminText,
    pub learning: LearningText,
}

pub struct CommonText {
    pub loading: &'static str,
    pub back: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub confirm: &'static str,
    pub ok: &'static str,
    pub language: &'static str,
}

pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub programs: &'static str,
    pub activities: &'static str,
    pub aid_request: &'static str,
    pub learning: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub dashboard: &'static str,
    pub logout: &'static str,
}

pub struct HomeText {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_desc: &'static str,
    pub stats_visitors: &'static str,
    pub stats_members: &'static str,
    pub stats_programs: &'static str,
    pub stats_activities: &'static str,
    pub latest_programs: &'static str,
    pub contact_title: &'static str,
    pub contact_name: &'static str,
    pub contact_email: &'static str,
    pub contact_subject: &'static str,
    pub contact_message: &'static str,
    pub contact_send: &'static str,
    pub contact_success: &'static str,
}

pub struct AuthText {
    pub login_title: &'static str,
    pub login_sub: &'static str,
    pub register_title: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub confirm_password: &'static str,
    pub full_name: &'static str,
    pub phone: &'static str,
    pub login_error: &'static str,
    pub invalid_credential: &'static str,
    pub too_many_attempts: &'static str,
    pub email_in_use: &'static str,
    pub password_mismatch: &'static str,
    pub password_too_short: &'static str,
    pub no_permissions: &'static str,
    pub role_parent: &'static str,
    pub role_student: &'static str,
    pub role_volunteer: &'static str,
}

pub struct AidText {
    pub title: &'static str,
    pub sub: &'static str,
    pub name: &'static str,
    pub id_number: &'static str,
    pub phone: &'static str,
    pub aid_type: &'static str,
    pub desc: &'static str,
    pub send: &'static str,
    pub success: &'static str,
    pub success_sub: &'static str,
    pub important_notes: &'static str,
    pub security_policy: &'static str,
    pub missing_fields: &'static str,
}

pub struct AboutText {
    pub title: &'static str,
    pub vision: &'static str,
    pub mission: &'static str,
    pub values: &'static str,
    pub journey: &'static str,
    pub gallery: &'static str,
}

pub struct SetupText {
    pub welcome: &'static str,
    pub desc: &'static str,
    pub step1_title: &'static str,
    pub step1_desc: &'static str,
    pub step2_title: &'static str,
    pub step2_desc: &'static str,
    pub step3_title: &'static str,
    pub step3_desc: &'static str,
    pub logo: &'static str,
    pub favicon: &'static str,
    pub finish: &'static str,
    pub wrong_password: &'static str,
    pub oversized_image: &'static str,
    pub generic_error: &'static str,
}

pub struct AdminText {
    pub overview: &'static str,
    pub programs_tab: &'static str,
    pub inbox: &'static str,
    pub about_tab: &'static str,
    pub settings_tab: &'static str,
    pub welcome: &'static str,
    pub add_program: &'static str,
    pub add_activity: &'static str,
    pub title_field: &'static str,
    pub description_field: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub schedule_type: &'static str,
    pub one_time: &'static str,
    pub recurring: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub weekdays: &'static str,
    pub status: &'static str,
    pub delete_refused: &'static str,
    pub saved: &'static str,
    pub save_failed: &'static str,
    pub validation_failed: &'static str,
    pub address: &'static str,
    pub channels: &'static str,
    pub add_channel: &'static str,
    pub aid_categories: &'static str,
    pub add_category: &'static str,
    pub forbidden: &'static str,
}

pub struct LearningText {
    pub title: &'static str,
    pub sub: &'static str,
    pub units: &'static str,
    pub vocabulary: &'static str,
    pub quiz: &'static str,
    pub answer: &'static str,
}

pub fn dict(lang: Lang) -> &'static Dict {
    match lang {
        Lang::Ar => &AR,
        Lang::Tr => &TR,
        Lang::En => &EN,
    }
}

impl Dict {
    /// Every string in the table, for completeness checks.
    pub fn entries(&self) -> Vec<&'static str> {
        let mut all = vec![
            self.common.loading,
            self.common.back,
            self.common.save,
            self.common.cancel,
            self.common.delete,
            self.common.confirm,
            self.common.ok,
            self.common.language,
            self.nav.home,
            self.nav.about,
            self.nav.programs,
            self.nav.activities,
            self.nav.aid_request,
            self.nav.learning,
            self.nav.login,
            self.nav.register,
            self.nav.dashboard,
            self.nav.logout,
            self.home.hero_title,
            self.home.hero_subtitle,
            self.home.hero_desc,
            self.home.stats_visitors,
            self.home.stats_members,
            self.home.stats_programs,
            self.home.stats_activities,
            self.home.latest_programs,
            self.home.contact_title,
            self.home.contact_name,
            self.home.contact_email,
            self.home.contact_subject,
            self.home.contact_message,
            self.home.contact_send,
            self.home.contact_success,
            self.auth.login_title,
            self.auth.login_sub,
            self.auth.register_title,
            self.auth.email,
            self.auth.password,
            self.auth.confirm_password,
            self.auth.full_name,
            self.auth.phone,
            self.auth.login_error,
            self.auth.invalid_credential,
            self.auth.too_many_attempts,
            self.auth.email_in_use,
            self.auth.password_mismatch,
            self.auth.password_too_short,
            self.auth.no_permissions,
            self.auth.role_parent,
            self.auth.role_student,
            self.auth.role_volunteer,
            self.aid.title,
            self.aid.sub,
            self.aid.name,
            self.aid.id_number,
            self.aid.phone,
            self.aid.aid_type,
            self.aid.desc,
            self.aid.send,
            self.aid.success,
            self.aid.success_sub,
            self.aid.important_notes,
            self.aid.security_policy,
            self.aid.missing_fields,
            self.about.title,
            self.about.vision,
            self.about.mission,
            self.about.values,
            self.about.journey,
            self.about.gallery,
            self.setup.welcome,
            self.setup.desc,
            self.setup.step1_title,
            self.setup.step1_desc,
            self.setup.step2_title,
            self.setup.step2_desc,
            self.setup.step3_title,
            self.setup.step3_desc,
            self.setup.logo,
            self.setup.favicon,
            self.setup.finish,
            self.setup.wrong_password,
            self.setup.oversized_image,
            self.setup.generic_error,
            self.learning.title,
            self.learning.sub,
            self.learning.units,
            self.learning.vocabulary,
            self.learning.quiz,
            self.learning.answer,
        ];
        all.extend_from_slice(&[
            self.admin.overview,
            self.admin.programs_tab,
            self.admin.inbox,
            self.admin.about_tab,
            self.admin.settings_tab,
            self.admin.welcome,
            self.admin.add_program,
            self.admin.add_activity,
            self.admin.title_field,
            self.admin.description_field,
            self.admin.category,
            self.admin.image,
            self.admin.schedule_type,
            self.admin.one_time,
            self.admin.recurring,
            self.admin.date,
            self.admin.time,
            self.admin.location,
            self.admin.weekdays,
            self.admin.status,
            self.admin.delete_refused,
            self.admin.saved,
            self.admin.save_failed,
            self.admin.validation_failed,
            self.admin.address,
            self.admin.channels,
            self.admin.add_channel,
            self.admin.aid_categories,
            self.admin.add_category,
            self.admin.forbidden,
        ]);
        all
    }
}

static AR: Dict = Dict {
    common: CommonText {
        loading: "جاري التحميل...",
        back: "العودة للرئيسية",
        save: "حفظ",
        cancel: "إلغاء",
        delete: "حذف",
        confirm: "تأكيد",
        ok: "حسناً",
        language: "اللغة",
    },
    nav: NavText {
        home: "الرئيسية",
        about: "من نحن",
        programs: "البرامج",
        activities: "الأنشطة",
        aid_request: "طلب مساعدة",
        learning: "تعلم اللغة",
        login: "تسجيل الدخول",
        register: "إنشاء حساب",
        dashboard: "لوحة التحكم",
        logout: "تسجيل الخروج",
    },
    home: HomeText {
        hero_title: "جمعية الفرقان",
        hero_subtitle: "للتعليم والعمل الخيري",
        hero_desc: "نخدم الجالية عبر برامج تعليمية ودعوية وإغاثية.",
        stats_visitors: "الزوار",
        stats_members: "الأعضاء",
        stats_programs: "البرامج",
        stats_activities: "الأنشطة",
        latest_programs: "أحدث البرامج",
        contact_title: "تواصل معنا",
        contact_name: "الاسم",
        contact_email: "البريد الإلكتروني",
        contact_subject: "الموضوع",
        contact_message: "الرسالة",
        contact_send: "إرسال",
        contact_success: "تم إرسال رسالتك بنجاح.",
    },
    auth: AuthText {
        login_title: "تسجيل الدخول",
        login_sub: "مرحباً بعودتك إلى بوابة الفرقان",
        register_title: "إنشاء حساب جديد",
        email: "البريد الإلكتروني",
        password: "كلمة المرور",
        confirm_password: "تأكيد كلمة المرور",
        full_name: "الاسم الكامل",
        phone: "رقم الهاتف",
        login_error: "تعذر تسجيل الدخول، حاول مرة أخرى.",
        invalid_credential: "البريد أو كلمة المرور غير صحيحة.",
        too_many_attempts: "تم حظر الدخول مؤقتاً لكثرة المحاولات.",
        email_in_use: "هذا البريد مسجل بالفعل.",
        password_mismatch: "كلمتا المرور غير متطابقتين.",
        password_too_short: "كلمة المرور يجب أن تكون 6 أحرف على الأقل.",
        no_permissions: "لم يتم العثور على صلاحيات لهذا الحساب.",
        role_parent: "ولي أمر",
        role_student: "طالب",
        role_volunteer: "متطوع",
    },
    aid: AidText {
        title: "طلب مساعدة",
        sub: "نستقبل طلبات المساعدة بسرية تامة",
        name: "الاسم الكامل",
        id_number: "رقم الهوية",
        phone: "رقم الهاتف",
        aid_type: "نوع المساعدة",
        desc: "وصف الحالة",
        send: "إرسال الطلب",
        success: "تم استلام طلبك",
        success_sub: "سيتواصل معك فريقنا في أقرب وقت.",
        important_notes: "ملاحظات هامة",
        security_policy: "جميع البيانات تعامل بسرية ولا تشارك مع أي جهة خارجية.",
        missing_fields: "يرجى تعبئة جميع الحقول المطلوبة.",
    },
    about: AboutText {
        title: "من نحن",
        vision: "رؤيتنا",
        mission: "رسالتنا",
        values: "قيمنا",
        journey: "مسيرتنا",
        gallery: "معرض الصور",
    },
    setup: SetupText {
        welcome: "مرحباً بك في نظام الفرقان",
        desc: "خطوات قليلة لتجهيز البوابة لأول مرة.",
        step1_title: "حساب المدير",
        step1_desc: "أدخل بيانات مدير النظام الأول.",
        step2_title: "الهوية البصرية",
        step2_desc: "شعار الموقع وأيقونته (اختياري).",
        step3_title: "الإطلاق",
        step3_desc: "مراجعة أخيرة ثم تهيئة النظام.",
        logo: "الشعار الرئيسي",
        favicon: "أيقونة الموقع",
        finish: "إتمام التهيئة",
        wrong_password: "هذا البريد مسجل بالفعل ولكن كلمة المرور خاطئة. يرجى استخدام كلمة المرور الصحيحة لإكمال الإعداد.",
        oversized_image: "حجم الصورة كبير جداً، يرجى اختيار صورة أقل من 500 ك.ب",
        generic_error: "حدث خطأ غير متوقع أثناء التهيئة.",
    },
    admin: AdminText {
        overview: "نظرة عامة",
        programs_tab: "البرامج والأنشطة",
        inbox: "الطلبات والرسائل",
        about_tab: "صفحة من نحن",
        settings_tab: "الإعدادات العامة",
        welcome: "أهلاً بك مجدداً",
        add_program: "إضافة برنامج جديد",
        add_activity: "نشاط جديد",
        title_field: "العنوان",
        description_field: "الوصف",
        category: "التصنيف",
        image: "الصورة",
        schedule_type: "نوع الجدولة",
        one_time: "مرة واحدة",
        recurring: "متكرر أسبوعياً",
        date: "التاريخ",
        time: "التوقيت",
        location: "الموقع",
        weekdays: "أيام التكرار",
        status: "الحالة",
        delete_refused: "لا يمكن حذف البرنامج لوجود أنشطة مرتبطة به",
        saved: "تم الحفظ بنجاح.",
        save_failed: "فشل الحفظ.",
        validation_failed: "يرجى استكمال الحقول المطلوبة.",
        address: "العنوان",
        channels: "قنوات التواصل",
        add_channel: "إضافة قناة",
        aid_categories: "تصنيفات المساعدات",
        add_category: "إضافة تصنيف",
        forbidden: "هذه الصفحة لمدير النظام فقط.",
    },
    learning: LearningText {
        title: "تعلم التركية",
        sub: "دروس مبسطة للناطقين بالعربية",
        units: "الوحدات",
        vocabulary: "المفردات",
        quiz: "اختبار قصير",
        answer: "الإجابة",
    },
};

static TR: Dict = Dict {
    common: CommonText {
        loading: "Yükleniyor...",
        back: "Ana sayfaya dön",
        save: "Kaydet",
        cancel: "İptal",
        delete: "Sil",
        confirm: "Onayla",
        ok: "Tamam",
        language: "Dil",
    },
    nav: NavText {
        home: "Ana Sayfa",
        about: "Hakkımızda",
        programs: "Programlar",
        activities: "Etkinlikler",
        aid_request: "Yardım Talebi",
        learning: "Dil Öğrenimi",
        login: "Giriş Yap",
        register: "Kayıt Ol",
        dashboard: "Panel",
        logout: "Çıkış Yap",
    },
    home: HomeText {
        hero_title: "Furkan Derneği",
        hero_subtitle: "Eğitim ve Hayır Çalışmaları",
        hero_desc: "Topluma eğitim, irşat ve yardım programlarıyla hizmet ediyoruz.",
        stats_visitors: "Ziyaretçi",
        stats_members: "Üye",
        stats_programs: "Program",
        stats_activities: "Etkinlik",
        latest_programs: "Son Programlar",
        contact_title: "Bize Ulaşın",
        contact_name: "İsim",
        contact_email: "E-posta",
        contact_subject: "Konu",
        contact_message: "Mesaj",
        contact_send: "Gönder",
        contact_success: "Mesajınız başarıyla gönderildi.",
    },
    auth: AuthText {
        login_title: "Giriş Yap",
        login_sub: "Furkan portalına tekrar hoş geldiniz",
        register_title: "Yeni Hesap Oluştur",
        email: "E-posta",
        password: "Şifre",
        confirm_password: "Şifreyi Onayla",
        full_name: "Ad Soyad",
        phone: "Telefon",
        login_error: "Giriş yapılamadı, tekrar deneyin.",
        invalid_credential: "E-posta veya şifre hatalı.",
        too_many_attempts: "Çok fazla deneme, giriş geçici olarak engellendi.",
        email_in_use: "Bu e-posta zaten kayıtlı.",
        password_mismatch: "Şifreler eşleşmiyor.",
        password_too_short: "Şifre en az 6 karakter olmalı.",
        no_permissions: "Bu hesap için yetki bulunamadı.",
        role_parent: "Veli",
        role_student: "Öğrenci",
        role_volunteer: "Gönüllü",
    },
    aid: AidText {
        title: "Yardım Talebi",
        sub: "Yardım taleplerini tam gizlilikle alıyoruz",
        name: "Ad Soyad",
        id_number: "Kimlik No",
        phone: "Telefon",
        aid_type: "Yardım Türü",
        desc: "Durum Açıklaması",
        send: "Talebi Gönder",
        success: "Talebiniz alındı",
        success_sub: "Ekibimiz en kısa sürede sizinle iletişime geçecek.",
        important_notes: "Önemli Notlar",
        security_policy: "Tüm veriler gizli tutulur ve üçüncü taraflarla paylaşılmaz.",
        missing_fields: "Lütfen tüm zorunlu alanları doldurun.",
    },
    about: AboutText {
        title: "Hakkımızda",
        vision: "Vizyonumuz",
        mission: "Misyonumuz",
        values: "Değerlerimiz",
        journey: "Yolculuğumuz",
        gallery: "Galeri",
    },
    setup: SetupText {
        welcome: "Furkan sistemine hoş geldiniz",
        desc: "Portalı ilk kez hazırlamak için birkaç adım.",
        step1_title: "Yönetici Hesabı",
        step1_desc: "İlk sistem yöneticisinin bilgilerini girin.",
        step2_title: "Görsel Kimlik",
        step2_desc: "Site logosu ve simgesi (isteğe bağlı).",
        step3_title: "Başlat",
        step3_desc: "Son kontrol ve sistem kurulumu.",
        logo: "Ana Logo",
        favicon: "Site Simgesi",
        finish: "Kurulumu Tamamla",
        wrong_password: "Bu e-posta zaten kayıtlı ancak şifre yanlış. Kurulumu tamamlamak için doğru şifreyi kullanın.",
        oversized_image: "Görsel çok büyük, lütfen 500 KB altında bir görsel seçin.",
        generic_error: "Kurulum sırasında beklenmeyen bir hata oluştu.",
    },
    admin: AdminText {
        overview: "Genel Bakış",
        programs_tab: "Programlar ve Etkinlikler",
        inbox: "Talepler ve Mesajlar",
        about_tab: "Hakkımızda Sayfası",
        settings_tab: "Genel Ayarlar",
        welcome: "Tekrar hoş geldiniz",
        add_program: "Yeni Program Ekle",
        add_activity: "Yeni Etkinlik",
        title_field: "Başlık",
        description_field: "Açıklama",
        category: "Kategori",
        image: "Görsel",
        schedule_type: "Zamanlama Türü",
        one_time: "Tek Seferlik",
        recurring: "Haftalık Tekrar",
        date: "Tarih",
        time: "Saat",
        location: "Konum",
        weekdays: "Tekrar Günleri",
        status: "Durum",
        delete_refused: "Bağlı etkinlikler olduğu için program silinemez",
        saved: "Başarıyla kaydedildi.",
        save_failed: "Kaydetme başarısız.",
        validation_failed: "Lütfen zorunlu alanları tamamlayın.",
        address: "Adres",
        channels: "İletişim Kanalları",
        add_channel: "Kanal Ekle",
        aid_categories: "Yardım Kategorileri",
        add_category: "Kategori Ekle",
        forbidden: "Bu sayfa yalnızca sistem yöneticisi içindir.",
    },
    learning: LearningText {
        title: "Türkçe Öğren",
        sub: "Arapça konuşanlar için basit dersler",
        units: "Üniteler",
        vocabulary: "Kelimeler",
        quiz: "Kısa Test",
        answer: "Cevap",
    },
};

static EN: Dict = Dict {
    common: CommonText {
        loading: "Loading...",
        back: "Back to home",
        save: "Save",
        cancel: "Cancel",
        delete: "Delete",
        confirm: "Confirm",
        ok: "OK",
        language: "Language",
    },
    nav: NavText {
        home: "Home",
        about: "About",
        programs: "Programs",
        activities: "Activities",
        aid_request: "Aid Request",
        learning: "Language Learning",
        login: "Sign In",
        register: "Register",
        dashboard: "Dashboard",
        logout: "Sign Out",
    },
    home: HomeText {
        hero_title: "Al-Furqan Association",
        hero_subtitle: "Education and Charity",
        hero_desc: "Serving the community through education, outreach, and relief programs.",
        stats_visitors: "Visitors",
        stats_members: "Members",
        stats_programs: "Programs",
        stats_activities: "Activities",
        latest_programs: "Latest Programs",
        contact_title: "Contact Us",
        contact_name: "Name",
        contact_email: "Email",
        contact_subject: "Subject",
        contact_message: "Message",
        contact_send: "Send",
        contact_success: "Your message was sent successfully.",
    },
    auth: AuthText {
        login_title: "Sign In",
        login_sub: "Welcome back to the Al-Furqan portal",
        register_title: "Create a New Account",
        email: "Email",
        password: "Password",
        confirm_password: "Confirm Password",
        full_name: "Full Name",
        phone: "Phone",
        login_error: "Could not sign in, please try again.",
        invalid_credential: "Invalid email or password.",
        too_many_attempts: "Too many attempts. Sign-in locked temporarily.",
        email_in_use: "This email is already registered.",
        password_mismatch: "Passwords do not match.",
        password_too_short: "Password must be at least 6 characters.",
        no_permissions: "Account permissions not found.",
        role_parent: "Parent",
        role_student: "Student",
        role_volunteer: "Volunteer",
    },
    aid: AidText {
        title: "Aid Request",
        sub: "We receive aid requests in full confidence",
        name: "Full Name",
        id_number: "ID Number",
        phone: "Phone",
        aid_type: "Aid Type",
        desc: "Case Description",
        send: "Submit Request",
        success: "Your request was received",
        success_sub: "Our team will contact you as soon as possible.",
        important_notes: "Important Notes",
        security_policy: "All data is kept confidential and never shared with third parties.",
        missing_fields: "Please fill in all required fields.",
    },
    about: AboutText {
        title: "About Us",
        vision: "Our Vision",
        mission: "Our Mission",
        values: "Our Values",
        journey: "Our Journey",
        gallery: "Gallery",
    },
    setup: SetupText {
        welcome: "Welcome to the Al-Furqan system",
        desc: "A few steps to prepare the portal for first use.",
        step1_title: "Administrator Account",
        step1_desc: "Enter the first system administrator's details.",
        step2_title: "Branding",
        step2_desc: "Site logo and favicon (optional).",
        step3_title: "Launch",
        step3_desc: "Final review, then initialize the system.",
        logo: "Main Logo",
        favicon: "Favicon",
        finish: "Finish Setup",
        wrong_password: "This email is already registered but the password is wrong. Use the correct password to finish setup.",
        oversized_image: "Image too large; please pick one under 500 KB.",
        generic_error: "An unexpected error occurred during setup.",
    },
    admin: AdminText {
        overview: "Overview",
        programs_tab: "Programs & Activities",
        inbox: "Requests & Messages",
        about_tab: "About Page",
        settings_tab: "General Settings",
        welcome: "Welcome back",
        add_program: "Add New Program",
        add_activity: "New Activity",
        title_field: "Title",
        description_field: "Description",
        category: "Category",
        image: "Image",
        schedule_type: "Schedule Type",
        one_time: "One-time",
        recurring: "Weekly Recurring",
        date: "Date",
        time: "Time",
        location: "Location",
        weekdays: "Recurring Days",
        status: "Status",
        delete_refused: "Cannot delete the program while activities reference it",
        saved: "Saved successfully.",
        save_failed: "Save failed.",
        validation_failed: "Please complete the required fields.",
        address: "Address",
        channels: "Contact Channels",
        add_channel: "Add Channel",
        aid_categories: "Aid Categories",
        add_category: "Add Category",
        forbidden: "This page is for the system administrator only.",
    },
    learning: LearningText {
        title: "Learn Turkish",
        sub: "Simple lessons for Arabic speakers",
        units: "Units",
        vocabulary: "Vocabulary",
        quiz: "Quick Quiz",
        answer: "Answer",
    },
};
