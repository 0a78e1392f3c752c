//! Project Plan
//!
//! The typed shape of a completed questionnaire: one named field per
//! catalog question, in catalog order. This is what a completion consumer
//! (log emitter today, scaffolder or config writer later) receives.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlan {
    pub project_type: String,
    pub language: String,
    pub framework: String,
    pub build_system: String,
    pub database: String,
}

impl ProjectPlan {
    /// Build a plan from the wizard's ordered answer sequence.
    ///
    /// Returns `None` unless all five slots are present and set, which holds
    /// for any wizard that reached its terminal state.
    pub fn from_answers(answers: &[String]) -> Option<Self> {
        match answers {
            [project_type, language, framework, build_system, database]
                if answers.iter().all(|a| !a.is_empty()) =>
            {
                Some(Self {
                    project_type: project_type.clone(),
                    language: language.clone(),
                    framework: framework.clone(),
                    build_system: build_system.clone(),
                    database: database.clone(),
                })
            }
            _ => None,
        }
    }

    /// Field labels and values, in question order, for display.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Project type", &self.project_type),
            ("Language", &self.language),
            ("Framework", &self.framework),
            ("Build system", &self.build_system),
            ("Database", &self.database),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: [&str; 5]) -> Vec<String> {
        values.map(String::from).to_vec()
    }

    #[test]
    fn test_from_answers_maps_slots_in_order() {
        let plan =
            ProjectPlan::from_answers(&answers(["cli-tool", "rust", "none", "cargo", "sqlite"]))
                .unwrap();

        assert_eq!(plan.project_type, "cli-tool");
        assert_eq!(plan.language, "rust");
        assert_eq!(plan.framework, "none");
        assert_eq!(plan.build_system, "cargo");
        assert_eq!(plan.database, "sqlite");
    }

    #[test]
    fn test_from_answers_rejects_wrong_length_or_unset_slots() {
        assert!(ProjectPlan::from_answers(&[]).is_none());
        assert!(ProjectPlan::from_answers(&answers(["a", "b", "c", "d", ""])).is_none());
        assert!(ProjectPlan::from_answers(&["web-app".to_string()]).is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let plan =
            ProjectPlan::from_answers(&answers(["web-app", "typescript", "react", "npm", "none"]))
                .unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["projectType"], "web-app");
        assert_eq!(json["buildSystem"], "npm");
        assert_eq!(json["database"], "none");
    }
}
