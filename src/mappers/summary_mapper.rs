use chrono::Datelike;

use crate::models::profile::Profile;
use crate::models::repository::Repository;

fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Builds the one-sentence blurb shown under the profile card.
///
/// `repositories` must already be sorted most recent first; the first entry
/// is the one highlighted.
pub fn to_summary(profile: &Profile, repositories: &[Repository]) -> String {
    let mut summary = format!(
        "{} joined GitHub in {} and has {}, {} and follows {}.",
        profile.display_name(),
        profile.created_at.year(),
        pluralize(profile.public_repos, "public repository", "public repositories"),
        pluralize(profile.followers, "follower", "followers"),
        pluralize(profile.following, "user", "users"),
    );

    if let Some(latest) = repositories.first() {
        summary.push_str(&format!(
            " The most recently updated repository is {} with {}.",
            latest.name,
            pluralize(latest.star_count, "star", "stars"),
        ));
    }

    summary
}
