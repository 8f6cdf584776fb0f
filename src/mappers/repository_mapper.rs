use crate::models::repository::Repository;

/// Returns the repositories ordered by `updated_at`, most recent first.
///
/// The sort is stable, so repositories updated at the same instant keep
/// their relative order. The input is left untouched.
pub fn sort_by_updated_desc(repositories: &[Repository]) -> Vec<Repository> {
    let mut sorted = repositories.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// The `page`-th (1-indexed) slice of `page_size` repositories, clipped to
/// the bounds of `repositories`. Out of range pages are empty.
pub fn paginate(repositories: &[Repository], page_size: usize, page: usize) -> &[Repository] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size).min(repositories.len());
    let end = start.saturating_add(page_size).min(repositories.len());
    &repositories[start..end]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn repository(id: u64, year: i32) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            html_url: String::new(),
            description: None,
            star_count: 0,
            fork_count: 0,
            language: None,
            homepage: None,
            updated_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn ids(repositories: &[Repository]) -> Vec<u64> {
        repositories.iter().map(|r| r.id).collect()
    }

    #[test]
    fn sorts_most_recent_first() {
        let input = vec![repository(1, 2023), repository(2, 2024), repository(3, 2019)];

        let sorted = sort_by_updated_desc(&input);

        assert_eq!(ids(&sorted), [2, 1, 3]);
        assert!(sorted
            .windows(2)
            .all(|pair| pair[0].updated_at >= pair[1].updated_at));
        assert_eq!(ids(&input), [1, 2, 3]);
    }

    #[test]
    fn sort_keeps_input_order_on_ties() {
        let input = vec![
            repository(1, 2020),
            repository(2, 2024),
            repository(3, 2020),
            repository(4, 2024),
            repository(5, 2020),
        ];

        let sorted = sort_by_updated_desc(&input);

        assert_eq!(ids(&sorted), [2, 4, 1, 3, 5]);
    }

    #[test]
    fn sort_is_a_permutation() {
        let input: Vec<Repository> = (0..25).map(|i| repository(i, 2000 + (i as i32 * 7) % 13)).collect();

        let mut sorted_ids = ids(&sort_by_updated_desc(&input));
        sorted_ids.sort_unstable();

        assert_eq!(sorted_ids, ids(&input));
    }

    #[test]
    fn sort_of_empty_is_empty() {
        assert!(sort_by_updated_desc(&[]).is_empty());
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn pages_reconstruct_the_sequence() {
        let repositories: Vec<Repository> = (0..23).map(|i| repository(i, 2020)).collect();

        for page_size in 1..=30 {
            let pages = page_count(repositories.len(), page_size);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                let slice = paginate(&repositories, page_size, page);
                assert!(!slice.is_empty());
                assert!(slice.len() <= page_size);
                rebuilt.extend(ids(slice));
            }
            assert_eq!(rebuilt, ids(&repositories), "page size {page_size}");
        }
    }

    #[test]
    fn last_page_is_clipped() {
        let repositories: Vec<Repository> = (0..7).map(|i| repository(i, 2020)).collect();

        assert_eq!(ids(paginate(&repositories, 3, 3)), [6]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let repositories: Vec<Repository> = (0..7).map(|i| repository(i, 2020)).collect();

        assert!(paginate(&repositories, 3, 0).is_empty());
        assert!(paginate(&repositories, 3, 4).is_empty());
        assert!(paginate(&repositories, 0, 1).is_empty());
        assert!(paginate(&repositories, 3, usize::MAX).is_empty());
    }
}
