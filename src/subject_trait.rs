use scraper::Html;
use serde::Serialize;
use strum::EnumIter;

/// One status bucket of a user's collection.  Both domains expose the same
/// three buckets under the same path segments, iterated in this order.
/// The display form doubles as the URL path segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Do,
    Collect,
    Wish,
}

/// Identifier appearing in the `/people/{user_id}/` part of listing URLs.
#[derive(
    Clone, PartialEq, Eq, Debug, derive_more::From, derive_more::FromStr, derive_more::Display,
)]
pub struct UserId(String);

pub trait SubjectTrait: Sized {
    const SUBDOMAIN: &'static str;

    type Record: Serialize;

    fn category_url(category: Category, user_id: &UserId) -> String {
        format!(
            "https://{}.douban.com/people/{}/{}",
            Self::SUBDOMAIN,
            user_id,
            category,
        )
    }

    /// Extracts every well-formed item block on one listing page.
    /// Malformed blocks are skipped with a warning, never an error.
    fn extract(html: &Html) -> Vec<Self::Record>;
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use crate::book::Book;
    use crate::movie::Movie;

    use super::{Category, SubjectTrait, UserId};

    #[test]
    fn test_category_urls_in_order() {
        let user_id: UserId = "someone".to_owned().into();
        let urls = Category::iter()
            .map(|category| Book::category_url(category, &user_id))
            .collect_vec();
        assert_eq!(
            urls,
            [
                "https://book.douban.com/people/someone/do",
                "https://book.douban.com/people/someone/collect",
                "https://book.douban.com/people/someone/wish",
            ]
        );
        assert_eq!(
            Movie::category_url(Category::Wish, &user_id),
            "https://movie.douban.com/people/someone/wish"
        );
    }
}
