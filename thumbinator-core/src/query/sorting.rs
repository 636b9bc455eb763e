use std::cmp::Ordering;

use thumbinator_model::{ImageRecord, SortOption};

/// Compare two images by the key `sort` selects.
///
/// Equal keys compare `Equal`; callers rely on a stable sort to keep catalog
/// order for ties.
pub fn compare_images(
    a: &ImageRecord,
    b: &ImageRecord,
    sort: SortOption,
) -> Ordering {
    match sort {
        SortOption::Newest => b.date_created.cmp(&a.date_created),
        SortOption::Oldest => a.date_created.cmp(&b.date_created),
        SortOption::Largest => b.file_size.total_cmp(&a.file_size),
        SortOption::Smallest => a.file_size.total_cmp(&b.file_size),
        SortOption::NameAsc => compare_case_insensitive(&a.name, &b.name),
        SortOption::NameDesc => compare_case_insensitive(&b.name, &a.name),
        SortOption::Resolution => b.pixel_count().cmp(&a.pixel_count()),
    }
}

/// Stable sort of catalog indices.
pub fn sort_indices(
    indices: &mut [usize],
    records: &[ImageRecord],
    sort: SortOption,
) {
    indices.sort_by(|&a, &b| compare_images(&records[a], &records[b], sort));
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
