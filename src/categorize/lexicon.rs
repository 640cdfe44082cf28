//! Static category lexicon and the deterministic keyword fallback scorer.

use crate::types::Category;

/// Trigger keywords per category, in category declaration order.
///
/// `general` carries no keywords; it is the result when nothing else matches.
pub const LEXICON: &[(Category, &[&str])] = &[
    (
        Category::Work,
        &[
            "meeting",
            "project",
            "deadline",
            "presentation",
            "report",
            "email",
            "client",
            "office",
            "team",
            "boss",
        ],
    ),
    (
        Category::Personal,
        &[
            "family",
            "friend",
            "birthday",
            "vacation",
            "hobby",
            "exercise",
            "health",
            "doctor",
            "appointment",
        ],
    ),
    (
        Category::Shopping,
        &[
            "buy",
            "purchase",
            "order",
            "shopping",
            "groceries",
            "store",
            "amazon",
            "market",
        ],
    ),
    (
        Category::Finance,
        &[
            "pay",
            "bill",
            "invoice",
            "tax",
            "budget",
            "bank",
            "money",
            "payment",
            "subscription",
        ],
    ),
    (
        Category::Health,
        &[
            "doctor",
            "hospital",
            "medicine",
            "exercise",
            "gym",
            "workout",
            "diet",
            "fitness",
            "medical",
        ],
    ),
    (
        Category::Education,
        &[
            "study",
            "learn",
            "course",
            "class",
            "homework",
            "assignment",
            "exam",
            "school",
            "university",
        ],
    ),
    (
        Category::Home,
        &[
            "clean",
            "repair",
            "maintenance",
            "garden",
            "laundry",
            "cook",
            "dishes",
            "organize",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "game", "book", "music", "concert", "show", "watch", "play", "read",
        ],
    ),
    (Category::General, &[]),
];

/// Score `text` against the lexicon and return the best-matching category.
///
/// The score of a category is the number of its distinct keywords occurring
/// as a case-insensitive substring of the text; repeated occurrences of one
/// keyword count once. The category with the strictly highest score wins.
/// Ties and the all-zero case resolve deterministically: the first category
/// in lexicon order reaching the maximum is kept, and when no keyword
/// matches at all the result is `general`.
pub fn score_keywords(text: &str) -> Category {
    let text = text.to_lowercase();
    let mut best: Option<(Category, usize)> = None;
    for (category, keywords) in LEXICON {
        let hits = keywords
            .iter()
            .copied()
            .filter(|keyword| text.contains(keyword))
            .count();
        if hits > 0 && best.is_none_or(|(_, top)| hits > top) {
            best = Some((*category, hits));
        }
    }
    best.map_or(Category::General, |(category, _)| category)
}
