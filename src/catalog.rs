//! Question Catalog
//!
//! The static, ordered list of setup questions driving the form.
//! Defined once at startup, read-only for the process lifetime.

use serde::Serialize;

/// How a question is presented and answered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick exactly one value from `choices`.
    SingleSelect,
}

/// A single setup question: display text plus its selectable values.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    /// Non-empty; each value unique within the question.
    pub choices: &'static [&'static str],
    pub kind: QuestionKind,
}

/// The five setup questions, in the order they are asked.
pub const CATALOG: &[Question] = &[
    Question {
        prompt: "What is your project's type?",
        choices: &[
            "web-app",
            "cli-tool",
            "library",
            "api",
            "mobile-app",
            "desktop-app",
            "data-science",
            "documentation",
        ],
        kind: QuestionKind::SingleSelect,
    },
    Question {
        prompt: "What programming language will you use?",
        choices: &[
            "python",
            "javascript",
            "typescript",
            "go",
            "rust",
            "java",
            "cpp",
            "c",
            "php",
            "ruby",
            "swift",
            "kotlin",
            "scala",
            "r",
        ],
        kind: QuestionKind::SingleSelect,
    },
    Question {
        prompt: "What framework do you plan to use?",
        choices: &[
            "react",
            "vue",
            "angular",
            "express",
            "fastapi",
            "django",
            "spring",
            "gin",
            "actix",
            "electron",
            "flutter",
            "pytorch",
            "tensorflow",
            "none",
        ],
        kind: QuestionKind::SingleSelect,
    },
    Question {
        prompt: "What build system will you use?",
        choices: &[
            "npm",
            "yarn",
            "pip",
            "cargo",
            "maven",
            "gradle",
            "make",
            "cmake",
            "none",
        ],
        kind: QuestionKind::SingleSelect,
    },
    Question {
        prompt: "What database will you use?",
        choices: &["postgresql", "mysql", "mongodb", "redis", "sqlite", "none"],
        kind: QuestionKind::SingleSelect,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_five_questions() {
        assert_eq!(CATALOG.len(), 5);
    }

    #[test]
    fn test_every_question_has_unique_nonempty_choices() {
        for question in CATALOG {
            assert!(!question.choices.is_empty(), "{}", question.prompt);

            let unique: HashSet<&str> = question.choices.iter().copied().collect();
            assert_eq!(
                unique.len(),
                question.choices.len(),
                "duplicate choice in {:?}",
                question.prompt
            );

            for choice in question.choices {
                assert!(!choice.is_empty());
            }
        }
    }

    #[test]
    fn test_all_questions_are_single_select() {
        for question in CATALOG {
            assert_eq!(question.kind, QuestionKind::SingleSelect);
        }
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&QuestionKind::SingleSelect).unwrap();
        assert_eq!(json, "\"single-select\"");
    }
}
