use scraper::Html;

use crate::subject_trait::SubjectTrait;

pub mod parser;
pub mod schema;

pub struct Movie;
impl SubjectTrait for Movie {
    const SUBDOMAIN: &'static str = "movie";

    type Record = schema::MovieRecord;
    fn extract(html: &Html) -> Vec<schema::MovieRecord> {
        parser::extract(html)
    }
}
