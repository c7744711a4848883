//! Sample data generation for testing and demonstration.
//!
//! This module provides a set of realistic sample projects used to seed the
//! store when the `seed_samples` configuration flag is set, and by tests that
//! want a populated board.
//!
//! # Examples
//!
//! ```
//! use plank_protocol::dummy::sample_projects;
//!
//! let projects = sample_projects();
//! assert_eq!(projects.len(), 5);
//! ```

use crate::project::{Project, ProjectStatus};

/// Generates a set of sample projects.
///
/// Returns five projects: three `Active` and two `Finished`, so both lists
/// have content to render.
///
/// # Examples
///
/// ```
/// use plank_protocol::dummy::sample_projects;
/// use plank_protocol::ProjectStatus;
///
/// let projects = sample_projects();
///
/// let active = projects.iter().filter(|p| p.status == ProjectStatus::Active).count();
/// let finished = projects.iter().filter(|p| p.status == ProjectStatus::Finished).count();
/// assert_eq!(active, 3);
/// assert_eq!(finished, 2);
/// ```
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    let mut projects = vec![
        Project::new(
            "Rebuild the garden shed",
            "Tear down the old structure, pour a new slab, and raise the frame \
             before the rainy season starts.",
            4,
        ),
        Project::new(
            "Migrate billing service",
            "Move invoice generation off the legacy cron jobs onto the new \
             worker queue, with a dual-write period for verification.",
            6,
        ),
        Project::new(
            "Quarterly accessibility audit",
            "Review keyboard navigation and contrast ratios across every \
             customer-facing screen; file issues per finding.",
            5,
        ),
        Project::new(
            "Onboarding handbook",
            "Collect the scattered setup notes into a single handbook for new \
             team members.",
            7,
        ),
        Project::new(
            "Retire the staging cluster",
            "Drain remaining workloads and decommission the hardware.",
            5,
        ),
    ];

    // Last two land on the finished list
    for project in projects.iter_mut().skip(3) {
        project.set_status(ProjectStatus::Finished);
    }

    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_projects_has_expected_count() {
        assert_eq!(sample_projects().len(), 5);
    }

    #[test]
    fn sample_projects_covers_both_partitions() {
        let projects = sample_projects();

        let active = projects
            .iter()
            .filter(|p| p.has_status(ProjectStatus::Active))
            .count();
        let finished = projects
            .iter()
            .filter(|p| p.has_status(ProjectStatus::Finished))
            .count();

        assert_eq!(active, 3);
        assert_eq!(finished, 2);
    }

    #[test]
    fn sample_projects_have_unique_ids() {
        let projects = sample_projects();

        for (i, a) in projects.iter().enumerate() {
            for b in projects.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn sample_projects_satisfy_default_people_minimum() {
        // Sample data should survive the default form constraints
        for project in sample_projects() {
            assert!(!project.title.trim().is_empty());
            assert!(!project.description.trim().is_empty());
            assert!(project.people >= 4);
        }
    }
}
