#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Books,
    Program,
    Platform,
}

impl ResourceCategory {
    pub fn visit_label(self) -> &'static str {
        match self {
            ResourceCategory::Books => "زيارة المكتبة",
            ResourceCategory::Program => "زيارة البرنامج",
            ResourceCategory::Platform => "زيارة المنصة",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioResource {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub kind: &'static str,
    pub icon: &'static str,
    pub category: ResourceCategory,
}

pub const AUDIO_RESOURCES: [AudioResource; 5] = [
    AudioResource {
        title: "الكتب الصوتية على منصة عين",
        description: "مجموعة متنوعة من الكتب الصوتية العربية والعُمانية",
        url: "https://ayn.om/audiobooks",
        kind: "مكتبة صوتية",
        icon: "📚",
        category: ResourceCategory::Books,
    },
    AudioResource {
        title: "كتاب أعجبني مع سليمان المعمري",
        description: "برنامج إذاعي يناقش الكتب والأعمال الأدبية المميزة",
        url: "https://ayn.om/radio_show/217124/%D9%83%D8%AA%D8%A7%D8%A8-%D8%A3%D8%B9%D8%AC%D8%A8%D9%86%D9%8A",
        kind: "برنامج إذاعي",
        icon: "🎙️",
        category: ResourceCategory::Program,
    },
    AudioResource {
        title: "إصدارات عمانية مع أمل السعيدي",
        description: "برنامج مخصص للإصدارات والأعمال الأدبية العُمانية الجديدة",
        url: "https://ayn.om/radio_show/237773/%D8%A5%D8%B5%D8%AF%D8%A7%D8%B1%D8%A7%D8%AA-%D8%B9%D9%85%D8%A7%D9%86%D9%8A%D8%A9",
        kind: "برنامج إذاعي",
        icon: "📻",
        category: ResourceCategory::Program,
    },
    AudioResource {
        title: "منصة ستوري تل",
        description: "منصة عالمية للكتب الصوتية بمحتوى عربي وعالمي متنوع",
        url: "https://www.storytel.com/ae/audiobooks",
        kind: "منصة عالمية",
        icon: "🌍",
        category: ResourceCategory::Platform,
    },
    AudioResource {
        title: "منصة اقرألي",
        description: "مكتبة صوتية عربية شاملة بمحتوى أدبي وثقافي متميز",
        url: "https://iqraaly.com/home",
        kind: "منصة عربية",
        icon: "🎧",
        category: ResourceCategory::Platform,
    },
];
