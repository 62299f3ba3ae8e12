use serde::Serialize;
use yew::prelude::*;

use crate::components::accordion::Accordion;
use crate::data::faq::FaqEntry;

#[derive(Serialize)]
struct FaqPageSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<QuestionSchema<'a>>,
}

#[derive(Serialize)]
struct QuestionSchema<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: AnswerSchema<'a>,
}

#[derive(Serialize)]
struct AnswerSchema<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'a str,
}

/// schema.org FAQPage markup so search engines can show the answers inline.
pub fn faq_schema(entries: &[FaqEntry]) -> String {
    let schema = FaqPageSchema {
        context: "https://schema.org",
        kind: "FAQPage",
        main_entity: entries
            .iter()
            .map(|e| QuestionSchema {
                kind: "Question",
                name: e.question,
                accepted_answer: AnswerSchema {
                    kind: "Answer",
                    text: e.answer,
                },
            })
            .collect(),
    };
    serde_json::to_string(&schema).unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct FaqBlockProps {
    pub entries: &'static [FaqEntry],
    #[prop_or_default]
    pub title: Option<String>,
}

#[function_component(FaqBlock)]
pub fn faq_block(props: &FaqBlockProps) -> Html {
    if props.entries.is_empty() {
        return html! {};
    }

    html! {
        <div class="faq-block">
            if let Some(title) = &props.title {
                <h2>{title}</h2>
            }
            { for props.entries.iter().map(|entry| html! {
                <Accordion title={entry.question}>
                    <p>{entry.answer}</p>
                </Accordion>
            }) }
            <script type="application/ld+json">{faq_schema(props.entries)}</script>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn schema_lists_every_question_with_its_answer() {
        let entries = [
            FaqEntry { question: "Is there a fan fest?", answer: "Yes, in the main square." },
            FaqEntry { question: "Are bags allowed?", answer: "Only clear bags." },
        ];

        let parsed: Value = serde_json::from_str(&faq_schema(&entries)).unwrap();

        assert_eq!(parsed["@context"], "https://schema.org");
        assert_eq!(parsed["@type"], "FAQPage");
        let questions = parsed["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1]["@type"], "Question");
        assert_eq!(questions[1]["name"], "Are bags allowed?");
        assert_eq!(questions[1]["acceptedAnswer"]["text"], "Only clear bags.");
    }

    #[test]
    fn quotes_in_answers_stay_valid_json() {
        let entries = [FaqEntry { question: "What's \"El Tri\"?", answer: "Mexico's team </script>" }];

        let parsed: Value = serde_json::from_str(&faq_schema(&entries)).unwrap();

        assert_eq!(parsed["mainEntity"][0]["name"], "What's \"El Tri\"?");
    }
}
