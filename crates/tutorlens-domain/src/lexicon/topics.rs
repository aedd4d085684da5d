//! Per-topic vocabularies

/// Domain vocabulary of one lesson unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicVocabulary {
    /// Canonical slug
    pub key: &'static str,
    /// Other accepted identifiers (unit names)
    pub aliases: &'static [&'static str],
    /// Terms counted for vocabulary acquisition
    pub domain_terms: &'static [&'static str],
    /// Key concepts checked by the response insight analyzer
    pub concept_keywords: &'static [&'static str],
    /// Everyday term to its domain equivalents
    pub everyday_to_domain: &'static [(&'static str, &'static [&'static str])],
}

impl TopicVocabulary {
    /// Whether `name` designates this topic
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.trim();
        self.key.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| *alias == name)
    }
}

pub const DEFAULT_TOPIC: TopicVocabulary = TopicVocabulary {
    key: "default",
    aliases: &[],
    domain_terms: &[
        "temperature",
        "volume",
        "expansion",
        "contraction",
        "energy",
        "change",
        "reason",
        "experiment",
        "prediction",
        "result",
        "温度",
        "体積",
        "膨張",
        "収縮",
        "エネルギー",
        "変化",
        "理由",
        "実験",
        "予想",
        "結果",
    ],
    concept_keywords: &["temperature", "volume", "experiment", "温度", "体積", "実験"],
    everyday_to_domain: &[
        ("hot", &["temperature"]),
        ("guess", &["prediction"]),
        ("test", &["experiment"]),
        ("あつい", &["温度"]),
        ("やってみる", &["実験"]),
    ],
};

pub const TOPICS: &[TopicVocabulary] = &[
    TopicVocabulary {
        key: "heating-water",
        aliases: &["水のあたたまり方"],
        domain_terms: &[
            "temperature",
            "heat",
            "water",
            "rise",
            "convection",
            "transfer",
            "温度",
            "熱",
            "水",
            "上昇",
            "対流",
            "伝わる",
        ],
        concept_keywords: &[
            "convection",
            "circulation",
            "temperature difference",
            "対流",
            "循環",
            "あたたまり方",
            "温度差",
        ],
        everyday_to_domain: &[
            ("hot", &["temperature", "heat"]),
            ("goes up", &["rise", "convection"]),
            ("moves around", &["convection"]),
            ("あつい", &["温度", "熱"]),
            ("上にいく", &["上昇", "対流"]),
            ("ぐるぐる", &["対流"]),
        ],
    },
    TopicVocabulary {
        key: "heating-metal",
        aliases: &["金属のあたたまり方"],
        domain_terms: &[
            "temperature",
            "heat",
            "metal",
            "expansion",
            "conduction",
            "spread",
            "transfer",
            "温度",
            "熱",
            "金属",
            "膨張",
            "導熱",
            "広がる",
            "伝わる",
        ],
        concept_keywords: &[
            "conduction",
            "in order",
            "transfer",
            "gets hot",
            "伝導",
            "順番に",
            "伝わる",
            "熱くなる",
        ],
        everyday_to_domain: &[
            ("hot", &["temperature", "heat"]),
            ("goes along", &["conduction", "transfer"]),
            ("あつい", &["温度", "熱"]),
            ("じわじわ", &["伝わる", "広がる"]),
        ],
    },
    TopicVocabulary {
        key: "heating-air",
        aliases: &["空気の温度と体積", "空気のあたたまり方"],
        domain_terms: &[
            "temperature",
            "volume",
            "air",
            "expansion",
            "balloon",
            "温度",
            "体積",
            "空気",
            "膨張",
            "気球",
            "風船",
        ],
        concept_keywords: &[
            "convection",
            "air flow",
            "rise",
            "対流",
            "空気の流れ",
            "軽い・重い",
            "上昇・下降",
        ],
        everyday_to_domain: &[
            ("gets bigger", &["expansion", "volume"]),
            ("puffs up", &["expansion"]),
            ("ふくらむ", &["膨張", "体積"]),
            ("大きくなる", &["膨張", "体積"]),
        ],
    },
    TopicVocabulary {
        key: "temperature-volume",
        aliases: &["温度と体積"],
        domain_terms: &[
            "temperature",
            "volume",
            "expansion",
            "contraction",
            "pressure",
            "change",
            "heating",
            "cooling",
            "thermal expansion",
            "温度",
            "体積",
            "膨張",
            "収縮",
            "圧力",
            "変化",
            "加熱",
            "冷却",
            "拡大",
            "縮小",
            "熱膨張",
        ],
        concept_keywords: &[
            "expansion",
            "contraction",
            "volume",
            "膨張",
            "収縮",
            "体積",
        ],
        everyday_to_domain: &[
            ("gets bigger", &["expansion", "volume"]),
            ("shrinks", &["contraction"]),
            ("ふくらむ", &["膨張"]),
            ("しぼむ", &["収縮"]),
            ("あたためる", &["加熱"]),
            ("冷やす", &["冷却"]),
        ],
    },
];
