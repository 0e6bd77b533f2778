//! 성분 가이드 정적 카탈로그
//!
//! 앱 시작 시 1회 로드되는 읽기 전용 데이터. 수정되지 않습니다.

use once_cell::sync::Lazy;

use crate::models::GuideIngredient;

/// 성분 가이드 전체 카탈로그 (삽입 순서 유지)
pub static GUIDE_CATALOG: Lazy<Vec<GuideIngredient>> = Lazy::new(|| {
    vec![
        GuideIngredient {
            id: "msg",
            name: "غلوتامات أحادية الصوديوم",
            e_number: Some("E621"),
            description: "معزز نكهة شائع يضاف إلى الأطعمة المصنعة والوجبات الخفيفة والشوربات الجاهزة.",
            usage: "يستخدم لتعزيز الطعم الأومامي في رقائق البطاطس والمكعبات والصلصات.",
            potential_risks: &[
                "قد يسبب صداعاً أو غثياناً لدى الأشخاص الحساسين",
                "الإفراط في الاستهلاك مرتبط بزيادة الشهية",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "aspartame",
            name: "الأسبارتام",
            e_number: Some("E951"),
            description: "محلٍ صناعي منخفض السعرات يستخدم في المشروبات الغازية الدايت والعلكة.",
            usage: "بديل للسكر في المنتجات الخالية من السكر.",
            potential_risks: &[
                "خطر على مرضى بيلة الفينيل كيتون (PKU)",
                "جدل علمي مستمر حول الاستهلاك طويل الأمد",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "tartrazine",
            name: "التارترازين",
            e_number: Some("E102"),
            description: "صبغة صفراء صناعية تستخدم في الحلويات والمشروبات والمخللات.",
            usage: "تلوين الأطعمة والمشروبات باللون الأصفر.",
            potential_risks: &[
                "قد يسبب فرط النشاط لدى الأطفال",
                "قد يثير الحساسية لدى المصابين بحساسية الأسبرين",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "carmine",
            name: "الكارمين (القرمز)",
            e_number: Some("E120"),
            description: "صبغة حمراء طبيعية تستخرج من حشرة القرمزية وتستخدم في الحلويات ومنتجات الألبان.",
            usage: "تلوين الأطعمة باللون الأحمر.",
            potential_risks: &[
                "مصدر حشري — غير مناسب للنباتيين",
                "قد يسبب تفاعلات تحسسية نادرة",
            ],
            is_halal: false,
        },
        GuideIngredient {
            id: "sodium-benzoate",
            name: "بنزوات الصوديوم",
            e_number: Some("E211"),
            description: "مادة حافظة تمنع نمو الفطريات والبكتيريا في المشروبات والصلصات الحمضية.",
            usage: "حفظ المشروبات الغازية والعصائر والمخللات.",
            potential_risks: &[
                "قد يتحول إلى البنزين المسرطن عند اجتماعه بفيتامين C في ظروف معينة",
                "مرتبط بفرط النشاط لدى الأطفال عند دمجه مع أصباغ صناعية",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "lecithin",
            name: "الليسيثين",
            e_number: Some("E322"),
            description: "مستحلب طبيعي يستخرج غالباً من فول الصويا أو عباد الشمس، يمنع انفصال المكونات.",
            usage: "مستحلب في الشوكولاتة والمخبوزات والمارجرين.",
            potential_risks: &[
                "قد يثير حساسية الصويا إذا كان مشتقاً منها",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "citric-acid",
            name: "حمض الستريك",
            e_number: Some("E330"),
            description: "حمض طبيعي موجود في الحمضيات، يستخدم كمنظم حموضة ومضاد أكسدة.",
            usage: "ضبط الحموضة في المشروبات والمربيات والحلويات.",
            potential_risks: &[
                "آمن عموماً؛ الكميات الكبيرة قد تهيج الأسنان والمعدة",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "gelatin",
            name: "الجيلاتين",
            e_number: Some("E441"),
            description: "بروتين مستخرج من كولاجين حيواني، يستخدم كعامل تماسك وهلام.",
            usage: "الحلويات الهلامية والمارشميلو والزبادي وكبسولات الأدوية.",
            potential_risks: &[
                "مصدره الحيواني قد يكون من الخنزير — تحقق من الشهادة",
                "غير مناسب للنباتيين",
            ],
            is_halal: false,
        },
        GuideIngredient {
            id: "xanthan-gum",
            name: "صمغ الزانثان",
            e_number: Some("E415"),
            description: "مثخن ومثبت ينتج بالتخمير البكتيري، شائع في الصلصات والمخبوزات الخالية من الغلوتين.",
            usage: "تثخين وتثبيت القوام في الصلصات والآيس كريم.",
            potential_risks: &[
                "قد يسبب انتفاخاً عند تناول كميات كبيرة",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "sorbitol",
            name: "السوربيتول",
            e_number: Some("E420"),
            description: "كحول سكري يستخدم كمحلٍ ومرطب في العلكة والحلويات الخالية من السكر.",
            usage: "تحلية وترطيب المنتجات الخالية من السكر.",
            potential_risks: &[
                "ملين طبيعي — الإفراط يسبب اضطرابات هضمية",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "bha",
            name: "بوتيل هيدروكسي أنيسول (BHA)",
            e_number: Some("E320"),
            description: "مضاد أكسدة صناعي يمنع تزنخ الدهون والزيوت في الأطعمة المصنعة.",
            usage: "حفظ الزيوت والحبوب والوجبات الخفيفة.",
            potential_risks: &[
                "مصنف كمادة يحتمل أن تكون مسرطنة للإنسان",
                "يفضل تجنبه في النظام الغذائي للأطفال",
            ],
            is_halal: true,
        },
        GuideIngredient {
            id: "pectin",
            name: "البكتين",
            e_number: Some("E440"),
            description: "ألياف طبيعية مستخرجة من الفواكه (التفاح والحمضيات) تستخدم كعامل هلام.",
            usage: "تماسك المربيات والجيلي ومنتجات الفاكهة.",
            potential_risks: &[],
            is_halal: true,
        },
        GuideIngredient {
            id: "caffeine",
            name: "الكافيين",
            e_number: None,
            description: "منبه طبيعي يوجد في القهوة والشاي ويضاف إلى مشروبات الطاقة والكولا.",
            usage: "منبه ومحسن للنكهة في المشروبات.",
            potential_risks: &[
                "الإفراط يسبب الأرق وخفقان القلب",
                "ينصح الحوامل بالحد من الاستهلاك",
            ],
            is_halal: true,
        },
    ]
});
