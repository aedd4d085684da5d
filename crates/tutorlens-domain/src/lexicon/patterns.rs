//! Trigger phrase sets, stored lower-case

// ============================================================================
// Depth of thinking
// ============================================================================

pub const SELF_CORRECTION: &[&str] = &[
    "i was wrong",
    "actually",
    "no wait",
    "i mean",
    "let me correct",
    "on second thought",
    "i take that back",
    "違う",
    "ちがう",
    "あ、違った",
    "あ、そっか",
    "やっぱり",
    "訂正",
    "直す",
    "いや、",
];

pub const HESITATION: &[&str] = &[
    "i don't know",
    "i dont know",
    "not sure",
    "hmm",
    "umm",
    "maybe",
    "perhaps",
    "might be",
    "i guess",
    "confused",
    "わからない",
    "わかんない",
    "うーん",
    "えー",
    "たぶん",
    "かもしれない",
    "迷う",
];

pub const ALTERNATIVE: &[&str] = &[
    "what if",
    "if",
    "for instance",
    "another",
    "other way",
    "on the other hand",
    "instead",
    "opposite",
    "otherwise",
    "suppose",
    "もし",
    "たとえば",
    "別の",
    "ほか",
    "だったら",
    "ならば",
    "反対に",
    "逆に",
];

/// Tutor phrases that turn a hesitation into a guided one
pub const GUIDANCE: &[&str] = &[
    "why",
    "how",
    "what do you think",
    "can you",
    "could you",
    "?",
    "どうして",
    "なぜ",
    "何",
    "？",
];

// ============================================================================
// Structure and clarity
// ============================================================================

pub const CAUSAL: &[&str] = &[
    "because",
    "so",
    "therefore",
    "since",
    "that's why",
    "ため",
    "ので",
    "だから",
    "なぜなら",
];

pub const QUESTION_WHY: &[&str] = &["why", "reason", "how come", "なぜ", "どうして", "理由"];
pub const QUESTION_WHAT: &[&str] = &["what", "which", "how many", "何", "どれ", "何個"];
pub const QUESTION_HOW: &[&str] = &["how", "in which way", "どう", "どのように", "やり方"];
pub const QUESTION_WHEN: &[&str] = &["when", "at which time", "いつ", "どの時", "時"];

pub const EXAMPLE: &[&str] = &[
    "for example",
    "for instance",
    "such as",
    "like when",
    "例えば",
    "たとえば",
    "例：",
    "みたいに",
];

pub const ABSTRACT: &[&str] = &[
    "idea",
    "opinion",
    "image",
    "feel",
    "seems",
    "考え",
    "意見",
    "イメージ",
    "感じ",
    "気がする",
];

// ============================================================================
// Evidence
// ============================================================================

pub const EXPERIENCE: &[&str] = &[
    "before",
    "last time",
    "experience",
    "i tried",
    "i've tried",
    "i have seen",
    "i've seen",
    "i saw",
    "i remember",
    "前に",
    "この前",
    "経験",
    "やったことある",
    "やってみた",
    "見たことある",
];

pub const EVIDENCE_PROMPT: &[&str] = &[
    "have you ever",
    "before",
    "experience",
    "remember",
    "seen",
    "tried",
    "前に",
    "やったことある",
    "見たことある",
    "経験",
    "思い出す",
];

pub const EVIDENCE_KEYWORDS: &[&str] = &[
    "because",
    "since",
    "so",
    "experience",
    "saw",
    "tried",
    "ため",
    "から",
    "ので",
    "だから",
    "経験",
    "見た",
    "やった",
];

// ============================================================================
// Metacognition
// ============================================================================

pub const METACOGNITION: &[(&str, f64)] = &[
    ("realized", 1.5),
    ("understood", 1.0),
    ("reconsidered", 2.0),
    ("mistaken", 1.5),
    ("i thought", 1.0),
    ("i see", 1.0),
    ("first time i learned", 2.0),
    ("気づいた", 1.5),
    ("わかった", 1.0),
    ("考え直した", 2.0),
    ("間違えた", 1.5),
    ("思ってた", 1.0),
    ("そっか", 1.0),
    ("なるほど", 1.0),
    ("初めて知った", 2.0),
];

// ============================================================================
// Response insights
// ============================================================================

pub const UNDERSTANDING_POSITIVE: &[&str] = &[
    "i get it",
    "i see",
    "got it",
    "that makes sense",
    "interesting",
    "amazing",
    "分かった",
    "わかった",
    "なるほど",
    "そういうこと",
    "面白い",
    "すごい",
];

pub const UNDERSTANDING_NEGATIVE: &[&str] = &[
    "i don't understand",
    "i don't get it",
    "confusing",
    "difficult",
    "hard to see",
    "分からない",
    "よく分からない",
    "難しい",
    "よく見えない",
];

pub const REASONING: &[&str] = &[
    "because",
    "the reason is",
    "that's why",
    "so",
    "なぜなら",
    "だから",
    "理由は",
];

pub const TENTATIVE: &[&str] = &[
    "i think",
    "i feel",
    "seems like",
    "looks like",
    "と思う",
    "気がする",
    "みたい",
];

pub const DAILY_LIFE: &[&str] = &[
    "at home",
    "usually",
    "bath",
    "cooking",
    "my mom",
    "my mother",
    "i've seen",
    "always",
    "家で",
    "普段",
    "お風呂",
    "料理",
    "お母さん",
    "見たことある",
    "前に",
    "いつも",
];

pub const POSITIVE_EMOTION: &[&str] = &[
    "fun",
    "interesting",
    "amazing",
    "surprised",
    "wow",
    "楽しい",
    "面白い",
    "すごい",
    "びっくり",
    "驚いた",
];
