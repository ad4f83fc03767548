use scraper::Html;

use crate::subject_trait::SubjectTrait;

pub mod parser;
pub mod schema;

pub struct Book;
impl SubjectTrait for Book {
    const SUBDOMAIN: &'static str = "book";

    type Record = schema::BookRecord;
    fn extract(html: &Html) -> Vec<schema::BookRecord> {
        parser::extract(html)
    }
}
