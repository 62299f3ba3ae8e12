#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static GENERAL_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "When does the 2026 World Cup start and end?",
        answer: "The tournament opens on June 11, 2026 at Estadio Azteca in Mexico City and the final is played on July 19, 2026 at MetLife Stadium in the New York New Jersey area.",
    },
    FaqEntry {
        question: "How many teams and matches are there?",
        answer: "48 teams in 12 groups of four, 104 matches in total. The top two of every group plus the eight best third-placed teams go through to a new round of 32.",
    },
    FaqEntry {
        question: "Do I need a visa to travel between host countries?",
        answer: "Canada, Mexico and the United States each have their own entry rules. Check the requirements for every country on your route before you book, an ESTA or eTA is not a visa for the other two countries.",
    },
    FaqEntry {
        question: "When should I book a hotel?",
        answer: "As early as you can, ideally with free cancellation. Prices near stadiums climb sharply once the match schedule is final, and many fans end up staying one or two transit stops further out.",
    },
    FaqEntry {
        question: "Can I get between cities by train?",
        answer: "Only on the Northeast corridor (Boston, New York, Philadelphia) and around Toronto is rail a real option. Everywhere else plan on flying or a long drive.",
    },
];
