//! Turkish-for-Arabic-speakers micro-course (Yedi İklim, level A1).
//!
//! The course is fixed editorial content, not site data, so it lives in
//! code rather than in a collection. Lesson titles and explanations are
//! Arabic; vocabulary and examples pair Turkish with Arabic.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub tr: &'static str,
    pub ar: &'static str,
}

#[derive(Debug, Clone)]
pub struct GrammarRule {
    pub title: &'static str,
    pub explanation: &'static str,
    pub formula: Option<&'static str>,
    pub examples: Vec<Entry>,
}

#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: Vec<&'static str>,
    pub correct_index: usize,
    pub explanation: &'static str,
}

#[derive(Debug, Clone)]
pub enum LessonBody {
    Vocabulary(Vec<Entry>),
    Grammar(GrammarRule),
    Game(Vec<Entry>),
    Quiz(Vec<QuizQuestion>),
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub body: LessonBody,
}

impl Lesson {
    pub fn kind_label_ar(&self) -> &'static str {
        match self.body {
            LessonBody::Vocabulary(_) => "مفردات",
            LessonBody::Grammar(_) => "قواعد",
            LessonBody::Game(_) => "لعبة تفاعلية",
            LessonBody::Quiz(_) => "اختبار",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub id: u32,
    pub title_tr: &'static str,
    pub title_ar: &'static str,
    pub description_ar: &'static str,
    pub lessons: Vec<Lesson>,
}

impl Unit {
    pub fn vocabulary_count(&self) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| matches!(lesson.body, LessonBody::Vocabulary(_)))
            .count()
    }

    pub fn grammar_count(&self) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| matches!(lesson.body, LessonBody::Grammar(_)))
            .count()
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }
}

pub fn units() -> &'static [Unit] {
    static UNITS: OnceLock<Vec<Unit>> = OnceLock::new();
    UNITS.get_or_init(build_units)
}

pub fn unit(id: u32) -> Option<&'static Unit> {
    units().iter().find(|unit| unit.id == id)
}

fn entry(tr: &'static str, ar: &'static str) -> Entry {
    Entry { tr, ar }
}

fn build_units() -> Vec<Unit> {
    vec![
        Unit {
            id: 1,
            title_tr: "Tanışma",
            title_ar: "التعارف والتحية",
            description_ar: "أساسيات اللغة، التحيات، والأرقام.",
            lessons: vec![
                Lesson {
                    id: "1-vocab",
                    title: "مفردات: التحيات والأشياء (Kelime Dünyası)",
                    body: LessonBody::Vocabulary(vec![
                        entry("Merhaba", "مرحباً"),
                        entry("Günaydın", "صباح الخير"),
                        entry("İyi günler", "طاب يومك"),
                        entry("İyi akşamlar", "مساء الخير"),
                        entry("İyi geceler", "تصبح على خير"),
                        entry("Hoşça kal", "وداعاً (من المغادر)"),
                        entry("Güle güle", "مع السلامة (من الباقي)"),
                        entry("Memnun oldum", "تشرفت بمعرفتك"),
                        entry("Teşekkür ederim", "أشكرك"),
                        entry("Nasılsın?", "كيف حالك؟"),
                        entry("Kalem", "قلم"),
                        entry("Kitap", "كتاب"),
                        entry("Defter", "دفتر"),
                        entry("Masa", "طاولة"),
                        entry("Sandalye", "كرسي"),
                        entry("Kapı", "باب"),
                        entry("Pencere", "نافذة"),
                        entry("Çanta", "حقيبة"),
                        entry("Bilgisayar", "حاسوب"),
                    ]),
                },
                Lesson {
                    id: "1-game",
                    title: "لعبة: تحدي الكلمات",
                    body: LessonBody::Game(vec![
                        entry("Günaydın", "صباح الخير"),
                        entry("Kitap", "كتاب"),
                        entry("Pencere", "نافذة"),
                        entry("Hoşça kal", "وداعاً"),
                        entry("Evet", "نعم"),
                        entry("Hayır", "لا"),
                        entry("Masa", "طاولة"),
                        entry("Teşekkürler", "شكراً"),
                    ]),
                },
                Lesson {
                    id: "1-grammar-1",
                    title: "قواعد: أسماء الإشارة والجمع (İşaret Zamirleri ve Çoğul)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "أسماء الإشارة والجمع (-lar/-ler)",
                        explanation: "في التركية نستخدم 'Bu' للقريب، 'Şu' للبعيد قليلاً، و 'O' للبعيد جداً. للجمع، ننظر لآخر حرف صوتي: (a, ı, o, u) -> -lar، (e, i, ö, ü) -> -ler.",
                        formula: Some("الاسم + lar / ler"),
                        examples: vec![
                            entry("Bu nedir? Bu kitaptır.", "ما هذا؟ هذا كتاب."),
                            entry("O kim? O Ali.", "من ذلك؟ ذلك علي."),
                            entry("Kitap -> Kitaplar", "كتاب -> كتب (حرف ثقيل a)"),
                            entry("Ev -> Evler", "منزل -> منازل (حرف خفيف e)"),
                            entry("Kutu -> Kutular", "صندوق -> صناديق"),
                            entry("Göz -> Gözler", "عين -> عيون"),
                        ],
                    }),
                },
                Lesson {
                    id: "1-grammar-2",
                    title: "قواعد: هل؟ / يوجد ولا يوجد (Soru Eki ve Var/Yok)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "أداة الاستفهام (mı, mi, mu, mü) والوجودية",
                        explanation: "للسؤال بـ 'هل'، نستخدم لاحقة تتغير حسب التوافق الصوتي الرباعي. 'Var' تعني يوجد، 'Yok' تعني لا يوجد.",
                        formula: Some("a,ı -> mı | e,i -> mi | o,u -> mu | ö,ü -> mü"),
                        examples: vec![
                            entry("Bu kalem mi?", "هل هذا قلم؟"),
                            entry("Okul güzel mi?", "هل المدرسة جميلة؟"),
                            entry("Sınıfta kim var?", "من يوجد في الصف؟"),
                            entry("Çantada kitap yok.", "لا يوجد كتاب في الحقيبة."),
                        ],
                    }),
                },
                Lesson {
                    id: "1-quiz",
                    title: "اختبار شامل للوحدة الأولى",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "ما معنى 'İyi geceler'؟",
                            options: vec!["صباح الخير", "مساء الخير", "تصبح على خير", "مرحباً"],
                            correct_index: 2,
                            explanation: "تستخدم عند النوم أو في وقت متأخر من الليل.",
                        },
                        QuizQuestion {
                            question: "أي جمع هو الصحيح لكلمة 'Sınıf'؟",
                            options: vec!["Sınıfler", "Sınıflar", "Sınıflir", "Sınıflor"],
                            correct_index: 1,
                            explanation: "Sınıf تنتهي بـ ı (ثقيل) فتأخذ -lar.",
                        },
                        QuizQuestion {
                            question: "اختر أداة السؤال المناسبة: Bu doktor ____?",
                            options: vec!["mı", "mi", "mu", "mü"],
                            correct_index: 2,
                            explanation: "كلمة Doktor آخر حرف صوتي فيها 'o'، والقاعدة تقول (o, u -> mu).",
                        },
                        QuizQuestion {
                            question: "ما عكس كلمة 'Var' (يوجد)؟",
                            options: vec!["Yok", "Hayır", "Evet", "Değil"],
                            correct_index: 0,
                            explanation: "Var (يوجد) عكسها Yok (لا يوجد/عدم).",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 2,
            title_tr: "Ailemiz",
            title_ar: "عائلتنا",
            description_ar: "العائلة، الحالات الإعرابية، والأمر.",
            lessons: vec![
                Lesson {
                    id: "2-vocab",
                    title: "مفردات: العائلة والصفات",
                    body: LessonBody::Vocabulary(vec![
                        entry("Anne", "أُم"),
                        entry("Baba", "أب"),
                        entry("Kardeş", "أخ/أخت"),
                        entry("Abla", "أخت كبيرة"),
                        entry("Ağabey (Abi)", "أخ كبير"),
                        entry("Dede", "جد"),
                        entry("Nine", "جدة"),
                        entry("Teyze", "خالة"),
                        entry("Amca", "عم"),
                        entry("Dayı", "خال"),
                        entry("Hala", "عمة"),
                        entry("Genç", "شاب"),
                        entry("Yaşlı", "عجوز"),
                        entry("Güzel", "جميل"),
                        entry("Büyük", "كبير"),
                        entry("Küçük", "صغير"),
                    ]),
                },
                Lesson {
                    id: "2-grammar-1",
                    title: "قواعد: حالات الاسم (İsmin Hâlleri)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "حالات الاسم: التواجد، التوجه، الابتعاد، المفعول به",
                        explanation: "اللغة التركية تعتمد على اللواحق لتحديد مكان واتجاه الفعل.",
                        formula: Some("-da (في) | -a (إلى) | -dan (من) | -ı (المفعول)"),
                        examples: vec![
                            entry("Evde (في البيت)", "لاحقة التواجد -de"),
                            entry("Eve (إلى البيت)", "لاحقة التوجه -e"),
                            entry("Evden (من البيت)", "لاحقة الابتعاد -den"),
                            entry("Evi seviyorum (أحب البيت)", "لاحقة المفعول به المحدد -i"),
                            entry("Okulda, Okula, Okuldan, Okulu", "في المدرسة، إلى المدرسة، من المدرسة، المدرسةَ"),
                        ],
                    }),
                },
                Lesson {
                    id: "2-grammar-2",
                    title: "قواعد: الزمن الحاضر (Şimdiki Zaman)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "الزمن الحاضر / المضارع (-iyor)",
                        explanation: "يستخدم للأفعال التي تحدث الآن. نحذف (mak/mek) ونضيف (iyor) مع مراعاة التوافق الصوتي والضمير.",
                        formula: Some("جذر الفعل + (ı/i/u/ü)yor + ملحق الضمير"),
                        examples: vec![
                            entry("Gelmek -> Geliyorum", "أنا قادم"),
                            entry("Okumak -> Okuyorsun", "أنت تقرأ"),
                            entry("Yazmak -> Yazıyor", "هو يكتب"),
                            entry("Gitmek -> Gidiyoruz", "نحن ذاهبون (t تقلب إلى d)"),
                        ],
                    }),
                },
                Lesson {
                    id: "2-game",
                    title: "لعبة: العائلة والأفعال",
                    body: LessonBody::Game(vec![
                        entry("Anne", "أُم"),
                        entry("Dayı", "خال"),
                        entry("Geliyorum", "أنا قادم"),
                        entry("Gidiyorsun", "أنت ذاهب"),
                        entry("Okulda", "في المدرسة"),
                        entry("Okula", "إلى المدرسة"),
                    ]),
                },
                Lesson {
                    id: "2-quiz",
                    title: "اختبار الوحدة الثانية",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "ما معنى 'Teyze'؟",
                            options: vec!["عمة", "خالة", "جدة", "أخت"],
                            correct_index: 1,
                            explanation: "Teyze تعني الخالة.",
                        },
                        QuizQuestion {
                            question: "أنا ذاهب ___ البيت. (Ben ___ gidiyorum)",
                            options: vec!["Evde", "Evden", "Eve", "Evi"],
                            correct_index: 2,
                            explanation: "الفعل Gitmek (الذهاب) يأخذ حرف الجر 'إلى' (-e/-a). لذا Eve.",
                        },
                        QuizQuestion {
                            question: "تصريف فعل Konuşmak (التحدث) مع 'نحن' (Biz)؟",
                            options: vec!["Konuşuyorum", "Konuşuyor", "Konuşuyoruz", "Konuşuyorsun"],
                            correct_index: 2,
                            explanation: "اللاحقة المناسبة لـ Biz هي -uz بعد yor. تصبح Konuşuyoruz.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 3,
            title_tr: "Günlük Hayat",
            title_ar: "الحياة اليومية",
            description_ar: "الوقت، الروتين اليومي، والزمن الماضي.",
            lessons: vec![
                Lesson {
                    id: "3-vocab",
                    title: "مفردات: الوقت والأرقام والأفعال",
                    body: LessonBody::Vocabulary(vec![
                        entry("Saat", "ساعة"),
                        entry("Dakika", "دقيقة"),
                        entry("Sabah", "صباح"),
                        entry("Öğle", "ظهر"),
                        entry("Akşam", "مساء"),
                        entry("Gece", "ليل"),
                        entry("Erken", "باكراً"),
                        entry("Geç", "متأخراً"),
                        entry("Kahvaltı", "فطور"),
                        entry("Uyanmak", "الاستيقاظ"),
                        entry("Yatmak", "النوم/الاستلقاء"),
                        entry("Bir", "1"),
                        entry("On", "10"),
                        entry("Yirmi", "20"),
                        entry("Otuz", "30"),
                        entry("Yüz", "100"),
                    ]),
                },
                Lesson {
                    id: "3-grammar-1",
                    title: "قواعد: الزمن الماضي الشهودي (Belirli Geçmiş Zaman)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "الزمن الماضي (-dı / -di)",
                        explanation: "يستخدم للأحداث التي تمت وانتهت في الماضي وكنا شهوداً عليها.",
                        formula: Some("الفعل + (dı/di/du/dü) + لاحقة الضمير"),
                        examples: vec![
                            entry("Geldim", "أتيت (Ben)"),
                            entry("Gittin", "ذهبت (Sen)"),
                            entry("Yaptı", "فعل/عمل (O)"),
                            entry("Okuduk", "قرأنا (Biz)"),
                            entry("Yazdınız", "كتبتم (Siz)"),
                            entry("Uyudular", "ناموا (Onlar)"),
                        ],
                    }),
                },
                Lesson {
                    id: "3-grammar-2",
                    title: "قواعد: كم الساعة؟ (Saat Kaç?)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "التعبير عن الوقت",
                        explanation: "للوقت التام نستخدم الأرقام فقط. للنصف نستخدم 'buçuk'. للربع 'çeyrek'.",
                        formula: None,
                        examples: vec![
                            entry("Saat beş", "الساعة الخامسة (05:00)"),
                            entry("Saat beş buçuk", "الساعة الخامسة والنصف (05:30)"),
                            entry("Saat beşi çeyrek geçiyor", "الساعة الخامسة والربع"),
                            entry("Saat beşe çeyrek var", "الساعة السادسة إلا ربع"),
                        ],
                    }),
                },
                Lesson {
                    id: "3-quiz",
                    title: "اختبار الوحدة الثالثة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "حول الفعل 'Gel' (تعال) إلى الماضي مع الضمير 'أنا'.",
                            options: vec!["Geliyor", "Gelecek", "Geldim", "Geldin"],
                            correct_index: 2,
                            explanation: "Gel + di + m = Geldim (أتيت).",
                        },
                        QuizQuestion {
                            question: "الساعة 10:30 تعني:",
                            options: vec!["Saat on buçuk", "Saat on çeyrek", "Saat on", "Saat dokuz buçuk"],
                            correct_index: 0,
                            explanation: "On (عشرة) + Buçuk (نصف).",
                        },
                        QuizQuestion {
                            question: "ما معنى 'Akşam'؟",
                            options: vec!["صباح", "ظهر", "مساء", "ليل"],
                            correct_index: 2,
                            explanation: "Akşam تعني مساء.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 4,
            title_tr: "Çevremiz",
            title_ar: "بيئتنا ومحيطنا",
            description_ar: "الأماكن، الاتجاهات، والزمن المستقبل.",
            lessons: vec![
                Lesson {
                    id: "4-vocab",
                    title: "مفردات: المدينة والأماكن",
                    body: LessonBody::Vocabulary(vec![
                        entry("Şehir", "مدينة"),
                        entry("Köy", "قرية"),
                        entry("Mahalle", "حي"),
                        entry("Cadde", "شارع رئيسي"),
                        entry("Sokak", "شارع فرعي/زقاق"),
                        entry("Banka", "بنك"),
                        entry("Postane", "مكتب بريد"),
                        entry("Eczane", "صيدلية"),
                        entry("Fırın", "مخبز"),
                        entry("Hastane", "مستشفى"),
                        entry("Sağ", "يمين"),
                        entry("Sol", "يسار"),
                        entry("İleri", "للأمام"),
                        entry("Geri", "للخلف"),
                        entry("Karşısında", "في المقابل"),
                    ]),
                },
                Lesson {
                    id: "4-grammar-1",
                    title: "قواعد: الزمن المستقبل (Gelecek Zaman)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "الزمن المستقبل (-acak / -ecek)",
                        explanation: "يستخدم للأحداث التي ستقع في المستقبل. (a,ı,o,u -> acak) ، (e,i,ö,ü -> ecek).",
                        formula: Some("الفعل + (y)acak/ecek + الضمير"),
                        examples: vec![
                            entry("Geleceğim", "سآتي (k تقلب ğ)"),
                            entry("Yazacak", "سيكتب"),
                            entry("Okuyacağız", "سنقرأ"),
                            entry("Gidecekler", "سيذهبون"),
                        ],
                    }),
                },
                Lesson {
                    id: "4-grammar-2",
                    title: "قواعد: الملكية (İyelik Ekleri)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "لواحق الملكية",
                        explanation: "Benim (لي)، Senin (لك)، Onun (له)، Bizim (لنا)، Sizin (لكم)، Onların (لهم).",
                        formula: None,
                        examples: vec![
                            entry("Benim evim", "بيتي"),
                            entry("Senin araban", "سيارتك"),
                            entry("Onun çantası", "حقيبته/ا"),
                            entry("Bizim okulumuz", "مدرستنا"),
                        ],
                    }),
                },
                Lesson {
                    id: "4-quiz",
                    title: "اختبار الوحدة الرابعة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "كيف تقول 'سأذهب'؟",
                            options: vec!["Gidiyorum", "Gittim", "Gideceğim", "Gitmeliyim"],
                            correct_index: 2,
                            explanation: "Gideceğim هو تصريف المستقبل للفعل Gitmek.",
                        },
                        QuizQuestion {
                            question: "Benim ....... (سيارة)",
                            options: vec!["Arabam", "Araban", "Arabası", "Arabamız"],
                            correct_index: 0,
                            explanation: "مع Benim نضيف -m أو -ım. كلمة Araba تنتهي بصوتي فنضيف m.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 5,
            title_tr: "Meslekler",
            title_ar: "المهن",
            description_ar: "الوظائف والتركيبات الاسمية.",
            lessons: vec![
                Lesson {
                    id: "5-vocab",
                    title: "مفردات: المهن والعمل",
                    body: LessonBody::Vocabulary(vec![
                        entry("Öğretmen", "معلم"),
                        entry("Doktor", "طبيب"),
                        entry("Mühendis", "مهندس"),
                        entry("Polis", "شرطي"),
                        entry("Avukat", "محامي"),
                        entry("Hemşire", "ممرضة"),
                        entry("Şoför", "سائق"),
                        entry("Terzi", "خياط"),
                        entry("Aşçı", "طباخ"),
                        entry("Berber", "حلاق"),
                        entry("Pilot", "طيار"),
                        entry("Çiftçi", "مزارع"),
                        entry("İşçi", "عامل"),
                        entry("Memur", "موظف"),
                        entry("Emekli", "متقاعد"),
                    ]),
                },
                Lesson {
                    id: "5-grammar",
                    title: "قواعد: المضاف والمضاف إليه (İsim Tamlamaları)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "التركيب الإضافي (المضاف والمضاف إليه)",
                        explanation: "لربط اسمين ببعضهما (مثل: باب الغرفة، مدير المدرسة).",
                        formula: Some("الاسم الأول + (ın/in) ... الاسم الثاني + (ı/i)"),
                        examples: vec![
                            entry("Evin kapısı", "باب البيت"),
                            entry("Okul müdürü", "مدير المدرسة"),
                            entry("Ali'nin arabası", "سيارة علي"),
                            entry("Türkçe kitabı", "كتاب اللغة التركية"),
                        ],
                    }),
                },
                Lesson {
                    id: "5-quiz",
                    title: "اختبار الوحدة الخامسة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "أكمل: Oda.... rengi (لون الغرفة)",
                            options: vec!["Odanın", "Odaya", "Odadan", "Odayı"],
                            correct_index: 0,
                            explanation: "المضاف إليه (المالك) يأخذ لاحقة -nın/nin.",
                        },
                        QuizQuestion {
                            question: "من يدافع عن الناس في المحكمة؟",
                            options: vec!["Doktor", "Avukat", "Mühendis", "Aşçı"],
                            correct_index: 1,
                            explanation: "Avukat هو المحامي.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 6,
            title_tr: "Ulaşım",
            title_ar: "المواصلات",
            description_ar: "وسائل النقل، الاسم الموصول، والأعداد الترتيبية.",
            lessons: vec![
                Lesson {
                    id: "6-vocab",
                    title: "مفردات: وسائل النقل والسفر",
                    body: LessonBody::Vocabulary(vec![
                        entry("Araba", "سيارة"),
                        entry("Otobüs", "حافلة"),
                        entry("Uçak", "طائرة"),
                        entry("Tren", "قطار"),
                        entry("Gemi", "سفينة"),
                        entry("Vapur", "عبّارة"),
                        entry("Taksi", "تأكسي"),
                        entry("Bisiklet", "دراجة هوائية"),
                        entry("Havalimanı", "مطار"),
                        entry("Gar", "محطة قطار"),
                        entry("Durak", "موقف"),
                        entry("Bilet", "تذكرة"),
                        entry("Yolcu", "مسافر"),
                        entry("Trafik", "ازدحام/مرور"),
                    ]),
                },
                Lesson {
                    id: "6-grammar-1",
                    title: "قواعد: الاسم الموصول (ki / -daki)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "لاحقة الوصل -ki (الذي/التي)",
                        explanation: "تستخدم لربط الكلمة بمكان أو زمان، بمعنى 'الذي في...'.",
                        formula: None,
                        examples: vec![
                            entry("Masadaki kitap", "الكتاب الذي على الطاولة"),
                            entry("Evdeki hesap", "الحساب الذي في البيت"),
                            entry("Yarinki maç", "مباراة الغد"),
                            entry("Benimki", "الذي لي (الخاص بي)"),
                        ],
                    }),
                },
                Lesson {
                    id: "6-grammar-2",
                    title: "قواعد: الأعداد الترتيبية (Sıra Sayıları)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "الأول، الثاني، الثالث...",
                        explanation: "تستخدم اللاحقة (ı)nci للتعبير عن الترتيب.",
                        formula: Some("الرقم + (ı)nci / (u)ncu"),
                        examples: vec![
                            entry("Birinci (1.)", "الأول"),
                            entry("İkinci (2.)", "الثاني"),
                            entry("Üçüncü (3.)", "الثالث"),
                            entry("Dördüncü (4.)", "الرابع"),
                        ],
                    }),
                },
                Lesson {
                    id: "6-quiz",
                    title: "اختبار الوحدة السادسة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "كيف نقول 'الطابق الخامس'؟",
                            options: vec!["Beş kat", "Beşinci kat", "Beşli kat", "Beşer kat"],
                            correct_index: 1,
                            explanation: "Beşinci تعني الخامس.",
                        },
                        QuizQuestion {
                            question: "Arabada___ çanta (الحقيبة التي في السيارة)",
                            options: vec!["ki", "daki", "nki", "lar"],
                            correct_index: 0,
                            explanation: "Araba + da (في) + ki (الذي). تصبح Arabadaki.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 7,
            title_tr: "İletişim",
            title_ar: "الاتصالات",
            description_ar: "التكنولوجيا، المقارنة، والتفضيل.",
            lessons: vec![
                Lesson {
                    id: "7-vocab",
                    title: "مفردات: التكنولوجيا والاتصال",
                    body: LessonBody::Vocabulary(vec![
                        entry("Telefon", "هاتف"),
                        entry("Bilgisayar", "حاسوب"),
                        entry("İnternet", "إنترنت"),
                        entry("Mesaj", "رسالة"),
                        entry("Aramak", "الاتصال / البحث"),
                        entry("Açmak", "فتح"),
                        entry("Kapatmak", "إغلاق"),
                        entry("Göndermek", "إرسال"),
                        entry("E-posta", "بريد إلكتروني"),
                        entry("Dosya", "ملف"),
                        entry("İndirmek", "تحميل"),
                        entry("Şifre", "كلمة مرور"),
                        entry("Kullanmak", "استخدام"),
                    ]),
                },
                Lesson {
                    id: "7-grammar-1",
                    title: "قواعد: المقارنة والتفضيل (Karşılaştırma)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "Daha (أكثر) و En (الأكثر)",
                        explanation: "للمقارنة بين شيئين نستخدم 'Daha'. للتفضيل المطلق نستخدم 'En'.",
                        formula: None,
                        examples: vec![
                            entry("Ali, Ahmet'ten daha çalışkan.", "علي أنشط من أحمد."),
                            entry("İstanbul Ankara'dan daha büyük.", "إسطنبول أكبر من أنقرة."),
                            entry("En güzel şehir", "أجمل مدينة"),
                            entry("Dünyanın en hızlı hayvanı", "أسرع حيوان في العالم"),
                        ],
                    }),
                },
                Lesson {
                    id: "7-grammar-2",
                    title: "قواعد: منذ ولمدة (-den beri / -dır)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "التعبير عن المدة الزمنية",
                        explanation: "-den beri (منذ وقت محدد)، -dır/dir (لمدة زمنية).",
                        formula: None,
                        examples: vec![
                            entry("Sabahtan beri bekliyorum.", "أنتظر منذ الصباح."),
                            entry("İki saatten beri", "منذ ساعتين"),
                            entry("İki saattir", "لمدة ساعتين"),
                            entry("Uzun zamandır", "منذ زمن طويل (لمدة طويلة)"),
                        ],
                    }),
                },
                Lesson {
                    id: "7-quiz",
                    title: "اختبار الوحدة السابعة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "أيهما جملة مقارنة صحيحة؟",
                            options: vec![
                                "Bu ev o evden daha büyük",
                                "Bu ev o ev büyük",
                                "Bu ev o ev en büyük",
                                "Bu ev o ev kadar",
                            ],
                            correct_index: 0,
                            explanation: "نستخدم المضاف منه (-den) + daha + الصفة.",
                        },
                        QuizQuestion {
                            question: "أعيش هنا ___ سنتين. (İki yıl___ burada yaşıyorum)",
                            options: vec!["dan", "dır", "beri", "da"],
                            correct_index: 1,
                            explanation: "للتعبير عن المدة (Duration) نستخدم -dır.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 8,
            title_tr: "Tatil",
            title_ar: "العطلة",
            description_ar: "الفصول، الطقس، والمراجعة العامة.",
            lessons: vec![
                Lesson {
                    id: "8-vocab",
                    title: "مفردات: الطقس والفصول والشهور",
                    body: LessonBody::Vocabulary(vec![
                        entry("Yaz", "صيف"),
                        entry("Kış", "شتاء"),
                        entry("İlkbahar", "ربيع"),
                        entry("Sonbahar", "خريف"),
                        entry("Ocak", "يناير"),
                        entry("Şubat", "فبراير"),
                        entry("Mart", "مارس"),
                        entry("Nisan", "أبريل"),
                        entry("Sıcak", "حار"),
                        entry("Soğuk", "بارد"),
                        entry("Ilık", "معتدل"),
                        entry("Yağmurlu", "ممطر"),
                        entry("Karlı", "مثلج"),
                        entry("Güneşli", "مشمس"),
                        entry("Deniz", "بحر"),
                        entry("Plaj", "شاطئ"),
                    ]),
                },
                Lesson {
                    id: "8-grammar",
                    title: "مراجعة القواعد العامة (Genel Tekrar)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "ملخص الأزمنة والحالات",
                        explanation: "في هذه الوحدة نراجع جميع الأزمنة (الماضي، الحاضر، المستقبل) وحروف الجر.",
                        formula: None,
                        examples: vec![
                            entry("Yazın tatile gideceğim.", "سأذهب للعطلة في الصيف (مستقبل)."),
                            entry("Dün çok soğuktu.", "البارحة كان بارداً جداً (ماضي)."),
                            entry("Şu an yağmur yağıyor.", "الآن تمطر (حاضر)."),
                        ],
                    }),
                },
                Lesson {
                    id: "8-game",
                    title: "لعبة: الفصول والطقس",
                    body: LessonBody::Game(vec![
                        entry("Yaz", "صيف"),
                        entry("Kış", "شتاء"),
                        entry("Güneşli", "مشمس"),
                        entry("Yağmurlu", "ممطر"),
                        entry("Sıcak", "حار"),
                        entry("Soğuk", "بارد"),
                        entry("Deniz", "بحر"),
                        entry("Tatil", "عطلة"),
                    ]),
                },
                Lesson {
                    id: "8-quiz",
                    title: "اختبار الوحدة الثامنة",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "في أي فصل نذهب للسباحة عادة؟",
                            options: vec!["Kış", "Yaz", "Sonbahar", "İlkbahar"],
                            correct_index: 1,
                            explanation: "Yaz (الصيف).",
                        },
                        QuizQuestion {
                            question: "الجو بارد ومثلج. (Hava soğuk ve ...)",
                            options: vec!["Güneşli", "Sıcak", "Karlı", "Bulutlu"],
                            correct_index: 2,
                            explanation: "Karlı تعني مثلج.",
                        },
                    ]),
                },
            ],
        },
        Unit {
            id: 9,
            title_tr: "Genel Özet",
            title_ar: "المراجعة الشاملة",
            description_ar: "تلخيص كامل للكتاب واختبار نهائي.",
            lessons: vec![
                Lesson {
                    id: "9-vocab",
                    title: "أهم أفعال المستوى A1",
                    body: LessonBody::Vocabulary(vec![
                        entry("Gitmek", "الذهاب"),
                        entry("Gelmek", "المجيء"),
                        entry("Almak", "الأخذ/الشراء"),
                        entry("Vermek", "الإعطاء"),
                        entry("Sevmek", "الحب"),
                        entry("İstemek", "الرغبة"),
                        entry("Bilmek", "المعرفة"),
                        entry("Görmek", "الرؤية"),
                        entry("Konuşmak", "التحدث"),
                        entry("Dinlemek", "الاستماع"),
                        entry("Yazmak", "الكتابة"),
                        entry("Okumak", "القراءة"),
                        entry("Çalışmak", "العمل/الدراسة"),
                        entry("Başlamak", "البدء"),
                        entry("Bitmek", "الانتهاء"),
                    ]),
                },
                Lesson {
                    id: "9-grammar",
                    title: "جدول الأزمنة (Zamanlar Tablosu)",
                    body: LessonBody::Grammar(GrammarRule {
                        title: "ملخص لواحق الأزمنة",
                        explanation: "مقارنة سريعة بين الأزمنة الثلاثة الأساسية.",
                        formula: Some("Gel (جذر)"),
                        examples: vec![
                            entry("Geldi (الماضي)", "جاء (حدث وانتهى)"),
                            entry("Geliyor (الحاضر)", "قادم (يحدث الآن)"),
                            entry("Gelecek (المستقبل)", "سيأتي (سيحدث لاحقاً)"),
                            entry("Gel (الأمر)", "تعال!"),
                        ],
                    }),
                },
                Lesson {
                    id: "9-quiz",
                    title: "الاختبار النهائي (Final Sınavı)",
                    body: LessonBody::Quiz(vec![
                        QuizQuestion {
                            question: "أي لاحقة تدل على الجمع؟",
                            options: vec!["-lar/-ler", "-lı/-li", "-cı/-ci", "-da/-de"],
                            correct_index: 0,
                            explanation: "-lar/-ler هي لاحقة الجمع.",
                        },
                        QuizQuestion {
                            question: "Ben okula _______ (أنا ذاهب إلى المدرسة - الآن)",
                            options: vec!["Gittim", "Gideceğim", "Gidiyorum", "Giderim"],
                            correct_index: 2,
                            explanation: "Gidiyorum (الحاضر المستمر).",
                        },
                        QuizQuestion {
                            question: "Masada kitap _____? (هل يوجد كتاب على الطاولة؟)",
                            options: vec!["var", "yok", "var mı", "değil"],
                            correct_index: 2,
                            explanation: "للسؤال عن الوجود نستخدم Var mı?",
                        },
                        QuizQuestion {
                            question: "ما عكس 'Sıcak'؟",
                            options: vec!["Ilık", "Soğuk", "Serin", "Güneşli"],
                            correct_index: 1,
                            explanation: "Soğuk (بارد).",
                        },
                        QuizQuestion {
                            question: "Babamın arabası (سيارة أبي) - هذا تركيب:",
                            options: vec!["إضافي (Mülkiyet)", "وصفي", "فعل", "ظرف"],
                            correct_index: 0,
                            explanation: "تركيب إضافي ملكي (İsim Tamlaması).",
                        },
                    ]),
                },
            ],
        },
    ]
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    #[test]
    fn units__should_expose_all_nine_units_in_order() {
        // When
        let units = units();

        // Then
        assert_eq!(units.len(), 9);
        for (index, unit) in units.iter().enumerate() {
            assert_eq!(unit.id as usize, index + 1);
            assert!(!unit.lessons.is_empty());
        }
    }

    #[test]
    fn units__should_keep_quiz_answers_in_range() {
        for unit in units() {
            for lesson in &unit.lessons {
                if let LessonBody::Quiz(questions) = &lesson.body {
                    for question in questions {
                        assert!(
                            question.correct_index < question.options.len(),
                            "unit {} lesson {}",
                            unit.id,
                            lesson.id
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn unit__should_find_lessons_by_id() {
        // Given
        let first = unit(1).expect("unit 1");

        // Then
        assert!(first.lesson("1-quiz").is_some());
        assert!(first.lesson("no-such-lesson").is_none());
        assert!(unit(42).is_none());
        assert_eq!(first.vocabulary_count(), 1);
        assert_eq!(first.grammar_count(), 2);
    }
}
