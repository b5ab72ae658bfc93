//! Static project records for the detail panel.

use crate::models::ProjectRecord;

const PROJECTS: &[(&str, &str, &str, &str)] = &[
    (
        "parallelai",
        "ParallelAI",
        "IN DEVELOPMENT",
        "A revolutionary platform for collaborative AI model training, utilizing decentralized computing resources for faster iteration and lower costs.",
    ),
    (
        "overcoffee",
        "Over Coffee",
        "LIVE",
        "A social networking app designed for professionals to schedule quick, informal virtual coffee breaks for networking and mentorship.",
    ),
];

/// Card shown in the projects grid: `(id, title, teaser)`.
/// Cards without a record are placeholders and open nothing.
pub const PROJECT_CARDS: &[(&str, &str, &str)] = &[
    ("parallelai", "ParallelAI", "Decentralized model training"),
    ("overcoffee", "Over Coffee", "Networking over virtual coffee"),
    ("project3", "Project Three", "Coming soon"),
    ("project4", "Project Four", "Coming soon"),
];

pub fn find_project(id: &str) -> Option<ProjectRecord> {
    PROJECTS
        .iter()
        .find(|(key, ..)| *key == id)
        .map(|(_, title, status, description)| ProjectRecord {
            title: title.to_string(),
            status: status.to_string(),
            description: description.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_project() {
        let rec = find_project("overcoffee").unwrap();
        assert_eq!(rec.title, "Over Coffee");
        assert_eq!(rec.status, "LIVE");
        assert!(find_project("project3").is_none());
        assert!(find_project("").is_none());
    }
}
