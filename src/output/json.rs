//! JSON rendering of problems for callers that keep their own session store.

use crate::models::ProblemInstance;

pub fn problem_json(problem: &ProblemInstance) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(problem)
}
